use chrono::{DateTime, Utc};

use crate::models::{DayType, Week, WorkoutDay, WorkoutPlan};
use crate::profile::{Goal, Profile};

pub const WEEKS: u8 = 4;
pub const DAYS_PER_WEEK: u8 = 7;

const REST_EXERCISES: [&str; 2] = ["30-45 min brisk walk or light cycling", "Stretching 10-15 min"];
const CARDIO_EXERCISES: [&str; 2] = [
    "30 min moderate-intensity cardio (running/cycling/elliptical)",
    "Core circuit: 3x (plank 30s, bicycle crunch 15, bird-dog 10)",
];
const STRENGTH_EXERCISES: [&str; 2] = [
    "Strength circuit: 3 sets x 8-12 reps of compound movements",
    "Example: Squat / Push-ups / Bent-over row / Lunges / Overhead press",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingFocus {
    pub intensity: &'static str,
    pub focus: [&'static str; 2],
}

impl TrainingFocus {
    pub fn for_goal(goal: Goal) -> Self {
        match goal {
            Goal::WeightLoss => Self { intensity: "moderate", focus: ["cardio", "full-body strength"] },
            Goal::MuscleGain => Self { intensity: "high", focus: ["strength", "hypertrophy"] },
            Goal::Maintain => Self { intensity: "light", focus: ["mobility", "balanced strength"] },
        }
    }

    fn cardio_first(&self) -> bool {
        self.focus[0] == "cardio"
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn overload_note(intensity: &str, week: u8) -> String {
    format!("Intensity note: {intensity} - increase effort by ~{}% vs week 1", u32::from(week) * 2)
}

fn build_day(focus: &TrainingFocus, week: u8, day: u8) -> WorkoutDay {
    if day >= 6 {
        return WorkoutDay { day, day_type: DayType::ActiveRest, exercises: to_strings(&REST_EXERCISES) };
    }
    let mut exercises = if focus.cardio_first() && day % 2 == 1 {
        to_strings(&CARDIO_EXERCISES)
    } else {
        to_strings(&STRENGTH_EXERCISES)
    };
    exercises.push(overload_note(focus.intensity, week));
    WorkoutDay { day, day_type: DayType::Training, exercises }
}

pub fn generate_workout(profile: &Profile) -> WorkoutPlan {
    build_workout(profile, Utc::now())
}

pub fn build_workout(profile: &Profile, created_at: DateTime<Utc>) -> WorkoutPlan {
    let focus = TrainingFocus::for_goal(profile.goal);
    tracing::debug!(goal = ?profile.goal, intensity = focus.intensity, "building workout plan");
    let weeks = (1..=WEEKS)
        .map(|week| Week {
            week,
            days: (1..=DAYS_PER_WEEK).map(|day| build_day(&focus, week, day)).collect(),
        })
        .collect();
    WorkoutPlan { created_at, weeks }
}

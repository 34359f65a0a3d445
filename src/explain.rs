use std::fmt;

use crate::error::PlanError;
use crate::metabolic;
use crate::models::{MealPlan, WorkoutPlan};
use crate::profile::Profile;

#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub sentences: Vec<String>,
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sentences.join("\n"))
    }
}

pub fn explain_plan(profile: &Profile, _workout: &WorkoutPlan, meal_plan: &MealPlan) -> Result<Explanation, PlanError> {
    let bmi = metabolic::bmi(profile.weight_kg, profile.height_cm)?;
    let sentences = vec![
        format!("Hello {}! This 4-week plan targets: {}.", profile.name, profile.goal_text),
        format!("Estimated daily calories target: {} kcal.", meal_plan.target_calories),
        format!("Your estimated BMI is {bmi:.1}; plans are adjusted for age and activity level."),
        "Workout plan balances progressive overload with recovery; weekend sessions are lighter.".to_string(),
        "Meal choices reflect your selected cuisine and budget and split calories across meals.".to_string(),
    ];
    Ok(Explanation { sentences })
}

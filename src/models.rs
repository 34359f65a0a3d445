use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum DayType {
    #[serde(rename = "training")]
    Training,
    #[serde(rename = "active rest")]
    ActiveRest,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorkoutDay {
    pub day: u8,
    #[serde(rename = "type")]
    pub day_type: DayType,
    pub exercises: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Week {
    pub week: u8,
    pub days: Vec<WorkoutDay>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorkoutPlan {
    pub created_at: DateTime<Utc>,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Meal {
    pub item: String,
    pub cal: i64,
}

/// Field order is the slot order on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayMeals {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub snack: Meal,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MealDay {
    pub day: u8,
    pub calories_target: i64,
    pub meals: DayMeals,
    pub estimated_cost: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MealPlan {
    pub created_at: DateTime<Utc>,
    pub daily: Vec<MealDay>,
    pub target_calories: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlanResponse {
    pub workout: WorkoutPlan,
    pub meal_plan: MealPlan,
    pub explanation: String,
}

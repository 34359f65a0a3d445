use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::PlanError;

/// Keys the HTTP layer insists on before handing a record to the planner.
pub const REQUIRED_FIELDS: [&str; 9] = [
    "name", "age", "gender", "height_cm", "weight_kg", "goal", "activity_level", "cuisine", "budget_per_day",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender { Male, Other }

impl Gender {
    /// Only an exact (case-insensitive) "male" selects the male offset.
    pub fn classify(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("male") { Gender::Male } else { Gender::Other }
    }

    pub fn bmr_offset(self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Other => -161.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Goal { WeightLoss, MuscleGain, Maintain }

impl Goal {
    pub fn classify(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "lose weight" | "fat loss" | "weight loss" => Goal::WeightLoss,
            "build muscle" | "gain mass" | "muscle gain" => Goal::MuscleGain,
            _ => Goal::Maintain,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityLevel { Sedentary, Light, Moderate, Active, VeryActive }

impl ActivityLevel {
    pub fn classify(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Light,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Typed, defaulted view of a raw profile record.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Goal as the user typed it, kept for the explanation text.
    pub goal_text: String,
    pub goal: Goal,
    pub activity_level: ActivityLevel,
    /// Lowercased catalog key.
    pub cuisine: String,
    pub budget_per_day: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "User".into(),
            age: 20,
            gender: Gender::Male,
            height_cm: 170.0,
            weight_kg: 70.0,
            goal_text: "maintain".into(),
            goal: Goal::Maintain,
            activity_level: ActivityLevel::Light,
            cuisine: "default".into(),
            budget_per_day: 200.0,
        }
    }
}

impl Profile {
    /// Applies defaults to absent or null fields and coerces the rest.
    pub fn normalize(raw: &Map<String, Value>) -> Result<Self, PlanError> {
        let defaults = Profile::default();
        let field = |key: &str| raw.get(key).filter(|v| !v.is_null());

        let name = field("name").map(|v| text("name", v)).transpose()?.unwrap_or(defaults.name);
        let age = field("age").map(|v| integer("age", v)).transpose()?.unwrap_or(defaults.age);
        let gender = field("gender").map(|v| text("gender", v)).transpose()?
            .map(|g| Gender::classify(&g))
            .unwrap_or(defaults.gender);
        let height_cm = field("height_cm").map(|v| real("height_cm", v)).transpose()?.unwrap_or(defaults.height_cm);
        let weight_kg = field("weight_kg").map(|v| real("weight_kg", v)).transpose()?.unwrap_or(defaults.weight_kg);
        let goal_text = field("goal").map(|v| text("goal", v)).transpose()?.unwrap_or(defaults.goal_text);
        let activity_level = field("activity_level").map(|v| text("activity_level", v)).transpose()?
            .map(|a| ActivityLevel::classify(&a))
            .unwrap_or(defaults.activity_level);
        let cuisine = field("cuisine").map(|v| text("cuisine", v)).transpose()?
            .map(|c| c.to_lowercase())
            .unwrap_or(defaults.cuisine);
        let budget_per_day = field("budget_per_day").map(|v| real("budget_per_day", v)).transpose()?
            .unwrap_or(defaults.budget_per_day);

        Ok(Profile {
            name,
            age,
            gender,
            height_cm,
            weight_kg,
            goal: Goal::classify(&goal_text),
            goal_text,
            activity_level,
            cuisine,
            budget_per_day,
        })
    }
}

/// Reports the first required key absent from the record.
pub fn check_required(raw: &Map<String, Value>) -> Result<(), PlanError> {
    match REQUIRED_FIELDS.iter().find(|key| !raw.contains_key(**key)) {
        Some(key) => Err(PlanError::MissingField(key.to_string())),
        None => Ok(()),
    }
}

fn text(field: &str, value: &Value) -> Result<String, PlanError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(PlanError::validation(field, "expected text")),
    }
}

fn real(field: &str, value: &Value) -> Result<f64, PlanError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        Some(_) => Err(PlanError::validation(field, "number must be finite")),
        None => Err(PlanError::validation(field, format!("cannot convert {value} to a number"))),
    }
}

fn integer(field: &str, value: &Value) -> Result<u32, PlanError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    let whole = parsed.ok_or_else(|| PlanError::validation(field, format!("cannot convert {value} to an integer")))?;
    u32::try_from(whole).map_err(|_| PlanError::validation(field, format!("{whole} is out of range")))
}

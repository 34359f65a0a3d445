use serde_json::{Map, Value};

use crate::error::PlanError;
use crate::explain::explain_plan;
use crate::meals::generate_meal_plan;
use crate::models::PlanResponse;
use crate::profile::Profile;
use crate::workout::generate_workout;

/// Runs the whole pipeline for one raw profile record. Nothing is returned
/// unless every stage succeeds.
pub fn generate_plan(raw: &Map<String, Value>) -> Result<PlanResponse, PlanError> {
    let profile = Profile::normalize(raw)?;
    tracing::info!(
        goal = ?profile.goal,
        activity = ?profile.activity_level,
        cuisine = %profile.cuisine,
        "profile normalized"
    );

    let workout = generate_workout(&profile);
    let meal_plan = generate_meal_plan(&profile)?;
    let explanation = explain_plan(&profile, &workout, &meal_plan)?;

    Ok(PlanResponse { workout, meal_plan, explanation: explanation.to_string() })
}

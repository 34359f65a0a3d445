use axum::{Json, Router, http::StatusCode, response::{Html, IntoResponse, Response}, routing::{get, post}};
use include_dir::{include_dir, Dir};
use serde_json::{Map, Value};
use tower_http::{cors::{Any, CorsLayer}, trace::TraceLayer};
use uuid::Uuid;

use crate::{config::AppConfig, error::PlanError, models::PlanResponse, planner::generate_plan, profile::check_required};

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

pub fn router(config: &AppConfig) -> Router {
    let mut app = Router::new()
        .route("/", get(index))
        .route("/api/generate", post(generate))
        .layer(TraceLayer::new_for_http());
    if config.cors_allow_any {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        );
    }
    app
}

pub async fn index() -> Response {
    match STATIC_DIR.get_file("index.html").and_then(|f| f.contents_utf8()) {
        Some(html) => Html(html).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn generate(Json(body): Json<Map<String, Value>>) -> Result<Json<PlanResponse>, PlanError> {
    let request_id = Uuid::new_v4();
    tracing::info_span!("generate", %request_id).in_scope(|| handle_generate(&body)).map(Json)
}

fn handle_generate(body: &Map<String, Value>) -> Result<PlanResponse, PlanError> {
    // Presence is checked here, before the planner sees the record.
    if let Err(e) = check_required(body) {
        tracing::warn!("rejected request: {}", e);
        return Err(e);
    }

    match generate_plan(body) {
        Ok(plan) => {
            tracing::info!(
                "plan generated: {} weeks, {} meal days, {} kcal/day",
                plan.workout.weeks.len(),
                plan.meal_plan.daily.len(),
                plan.meal_plan.target_calories
            );
            Ok(plan)
        }
        Err(e) => {
            tracing::warn!("plan generation failed: {}", e);
            Err(e)
        }
    }
}

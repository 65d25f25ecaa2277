use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use super::{
    dto::{MealPlanRequest, MealPlanResponse},
    services::generate_meal_plan,
};
use crate::{
    error::{ApiError, ValidatedJson},
    state::AppState,
};

pub fn meal_plan_routes() -> Router<AppState> {
    Router::new().route("/api/meal-plan", post(create_meal_plan))
}

/// POST /api/meal-plan
#[instrument(skip(state, payload))]
pub async fn create_meal_plan(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<MealPlanRequest>,
) -> Result<Json<MealPlanResponse>, ApiError> {
    info!(
        calories = payload.calories,
        meals_per_day = payload.meals_per_day,
        diet_type = %payload.diet_type,
        goal = %payload.goal,
        "meal plan requested"
    );
    payload.check_meal_limit(state.config.max_meals_per_day)?;
    let plan = generate_meal_plan(state.meal_requests.as_ref(), payload).await?;
    Ok(Json(plan))
}

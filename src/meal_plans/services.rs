use tracing::debug;

use super::{
    dto::{Meal, MealPlanRequest, MealPlanResponse},
    repo::MealRequestStore,
    repo_types::NewMealRequest,
    templates::templates_for,
};

/// No meal is ever sized below this many calories.
pub const MIN_MEAL_CALORIES: i32 = 200;

/// Records the request in the audit log, then builds the plan.
/// Nothing is returned if the audit write fails.
pub async fn generate_meal_plan(
    store: &dyn MealRequestStore,
    request: MealPlanRequest,
) -> anyhow::Result<MealPlanResponse> {
    let record = store.insert(&NewMealRequest::from(&request)).await?;
    debug!(record_id = record.id, "meal request recorded");
    Ok(build_plan(request))
}

/// Floor division, raised to `MIN_MEAL_CALORIES`. `meals_per_day` must be positive.
pub fn per_meal_calories(calories: i32, meals_per_day: i32) -> i32 {
    calories.div_euclid(meals_per_day).max(MIN_MEAL_CALORIES)
}

pub fn build_plan(request: MealPlanRequest) -> MealPlanResponse {
    let calories = per_meal_calories(request.calories, request.meals_per_day);
    let count = usize::try_from(request.meals_per_day).unwrap_or(0);
    let meals = templates_for(&request.diet_type)
        .iter()
        .cycle()
        .take(count)
        .map(|name| Meal {
            name: (*name).to_string(),
            calories,
        })
        .collect();

    // total_calories echoes the input, not the sum of meals
    MealPlanResponse {
        total_calories: request.calories,
        meals,
        goal: request.goal,
        diet_type: request.diet_type,
    }
}

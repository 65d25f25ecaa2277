use serde::Serialize;
use sqlx::FromRow;

use crate::meal_plans::dto::MealPlanRequest;

/// Audit row in `meal_requests`. Written once per request, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct MealRequestRecord {
    pub id: i64,
    pub calories: i32,
    pub meals_per_day: i32,
    pub diet_type: String,
    pub goal: String,
}

/// Insert payload: the raw request parameters after defaults were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMealRequest {
    pub calories: i32,
    pub meals_per_day: i32,
    pub diet_type: String,
    pub goal: String,
}

impl From<&MealPlanRequest> for NewMealRequest {
    fn from(r: &MealPlanRequest) -> Self {
        Self {
            calories: r.calories,
            meals_per_day: r.meals_per_day,
            diet_type: r.diet_type.clone(),
            goal: r.goal.clone(),
        }
    }
}

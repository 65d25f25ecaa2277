use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Request body for `POST /api/meal-plan`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MealPlanRequest {
    #[serde(deserialize_with = "lenient_i32")]
    #[validate(range(min = 1, message = "calories must be greater than 0"))]
    pub calories: i32,
    #[serde(default = "default_meals_per_day", deserialize_with = "lenient_i32")]
    #[validate(range(min = 1, message = "meals_per_day must be greater than 0"))]
    pub meals_per_day: i32,
    #[serde(default = "default_diet_type")]
    pub diet_type: String,
    #[serde(default = "default_goal")]
    pub goal: String,
}

fn default_meals_per_day() -> i32 { 3 }
fn default_diet_type() -> String { "balanced".into() }
fn default_goal() -> String { "lose".into() }

impl MealPlanRequest {
    /// Operational cap from `AppConfig::max_meals_per_day`.
    pub fn check_meal_limit(&self, max: i32) -> Result<(), ValidationErrors> {
        if self.meals_per_day <= max {
            return Ok(());
        }
        let mut e = ValidationError::new("range");
        e.message = Some(format!("meals_per_day must not exceed {max}").into());
        let mut errors = ValidationErrors::new();
        errors.add("meals_per_day", e);
        Err(errors)
    }
}

/// Accepts JSON integers, integral floats (`1800.0`) and numeric strings (`"1800"`).
fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientI32;

    impl<'de> de::Visitor<'de> for LenientI32 {
        type Value = i32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer, an integral float or a numeric string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
            if v.fract() != 0.0 || v < f64::from(i32::MIN) || v > f64::from(i32::MAX) {
                return Err(E::invalid_value(de::Unexpected::Float(v), &self));
            }
            Ok(v as i32)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
            let trimmed = v.trim();
            if let Ok(n) = trimmed.parse::<i64>() {
                return self.visit_i64(n);
            }
            match trimmed.parse::<f64>() {
                Ok(f) if f.is_finite() => self.visit_f64(f),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }

    deserializer.deserialize_any(LenientI32)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meal {
    pub name: String,
    pub calories: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealPlanResponse {
    pub total_calories: i32,
    pub meals: Vec<Meal>,
    pub goal: String,
    pub diet_type: String,
}

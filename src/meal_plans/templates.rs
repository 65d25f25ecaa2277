use std::collections::HashMap;

use lazy_static::lazy_static;

pub const DEFAULT_DIET: &str = "balanced";

const BALANCED: &[&str] = &[
    "Oatmeal with berries",
    "Grilled chicken salad",
    "Salmon, rice & veggies",
    "Greek yogurt & nuts",
    "Turkey wrap with veggies",
];

const KETO: &[&str] = &[
    "Egg scramble with cheese",
    "Cobb salad (no croutons)",
    "Steak & broccoli with butter",
    "Avocado & tuna bowl",
    "Zucchini noodles with pesto",
];

const VEGAN: &[&str] = &[
    "Tofu scramble & veggies",
    "Quinoa & chickpea bowl",
    "Lentil curry & cauliflower rice",
    "Oats with almond milk & seeds",
    "Black bean & veggie tacos",
];

lazy_static! {
    static ref MEAL_TEMPLATES: HashMap<&'static str, &'static [&'static str]> = {
        let mut m = HashMap::new();
        m.insert(DEFAULT_DIET, BALANCED);
        m.insert("keto", KETO);
        m.insert("vegan", VEGAN);
        m
    };
}

/// Meal names for `diet_type`, matched case-insensitively.
/// Unknown or empty diets get the balanced list.
pub fn templates_for(diet_type: &str) -> &'static [&'static str] {
    MEAL_TEMPLATES
        .get(diet_type.to_lowercase().as_str())
        .copied()
        .unwrap_or(BALANCED)
}

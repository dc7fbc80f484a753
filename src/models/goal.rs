/// A named macro-nutrient target, expressed as fractions of total calories.
///
/// Fractions sum to roughly 1.0 (protein and carbs at 4 kcal/g, fat at
/// 9 kcal/g).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionGoal {
    pub key: &'static str,
    pub label: &'static str,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// The built-in goal catalog. The first entry is the default.
pub const GOALS: [NutritionGoal; 4] = [
    NutritionGoal {
        key: "balanced",
        label: "Balanced Diet (30/30/40)",
        protein: 0.30,
        fat: 0.30,
        carbs: 0.40,
    },
    NutritionGoal {
        key: "weight_loss",
        label: "Weight Loss (High Protein)",
        protein: 0.40,
        fat: 0.25,
        carbs: 0.35,
    },
    NutritionGoal {
        key: "bulking",
        label: "Bulking (High Carb/Calorie)",
        protein: 0.30,
        fat: 0.20,
        carbs: 0.50,
    },
    NutritionGoal {
        key: "keto",
        label: "Keto (High Fat, Low Carb)",
        protein: 0.25,
        fat: 0.70,
        carbs: 0.05,
    },
];

/// Look up a goal by key. Unknown names fall back to "balanced".
pub fn goal_by_name(name: &str) -> &'static NutritionGoal {
    GOALS.iter().find(|g| g.key == name).unwrap_or(&GOALS[0])
}

use serde::{Deserialize, Serialize};

/// Raw menu record as exported by the nutrition data source.
///
/// Nutrients are optional because scraped records routinely omit them; the
/// planner only admits items whose critical fields are present.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    pub dining_hall: String,

    #[serde(default)]
    pub service: String,

    #[serde(default)]
    pub date: String,

    pub meal_type: String,

    #[serde(default)]
    pub category: String,

    pub name: String,

    #[serde(default)]
    pub serving_size: String,

    #[serde(default)]
    pub calories: Option<f64>,

    #[serde(default)]
    pub protein: Option<f64>,

    #[serde(default)]
    pub total_fat: Option<f64>,

    #[serde(default)]
    pub total_carbohydrate: Option<f64>,

    #[serde(default)]
    pub dietary_fiber: Option<f64>,

    #[serde(default)]
    pub sugars: Option<f64>,

    #[serde(default)]
    pub sodium: Option<f64>,
}

/// Working copy of a menu item inside a candidate meal.
///
/// Nutrient fields are stored at the current `servings` multiplier and
/// rescale linearly with it. `servings` is measured in portions of the
/// item's base serving size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealItem {
    pub name: String,
    pub category: String,
    pub servings: f64,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,

    #[serde(skip)]
    pub fiber: f64,
}

impl MealItem {
    /// Build a working copy from a raw record, at one base serving.
    ///
    /// Returns `None` when calories are missing or non-positive, or when
    /// protein or fat is absent. Missing carbs and fiber are treated as zero.
    pub fn from_menu(item: &MenuItem) -> Option<Self> {
        let calories = item.calories.filter(|c| *c > 0.0)?;
        let protein = item.protein?;
        let fat = item.total_fat?;

        Some(Self {
            name: item.name.clone(),
            category: item.category.clone(),
            servings: 1.0,
            calories,
            protein,
            fat,
            carbs: item.total_carbohydrate.unwrap_or(0.0),
            fiber: item.dietary_fiber.unwrap_or(0.0),
        })
    }

    /// Copy of this item at an exact servings count.
    ///
    /// Nutrients are recomputed from the per-serving values and rounded to
    /// one decimal.
    pub fn with_servings(&self, servings: f64) -> Self {
        let factor = if self.servings > 0.0 {
            servings / self.servings
        } else {
            0.0
        };

        Self {
            name: self.name.clone(),
            category: self.category.clone(),
            servings,
            calories: round1(self.calories * factor),
            protein: round1(self.protein * factor),
            fat: round1(self.fat * factor),
            carbs: round1(self.carbs * factor),
            fiber: round1(self.fiber * factor),
        }
    }

    /// Copy of this item with servings and nutrients scaled by a factor.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            name: self.name.clone(),
            category: self.category.clone(),
            servings: round2(self.servings * factor),
            calories: round1(self.calories * factor),
            protein: round1(self.protein * factor),
            fat: round1(self.fat * factor),
            carbs: round1(self.carbs * factor),
            fiber: round1(self.fiber * factor),
        }
    }
}

/// Round to one decimal place.
pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to two decimal places.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

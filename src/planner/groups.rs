use crate::models::MealItem;
use crate::planner::constants::{
    matches_any, CARB_CATEGORY_KEYWORDS, CARB_NAME_KEYWORDS, PROTEIN_CATEGORY_KEYWORDS,
    PROTEIN_NAME_KEYWORDS, VEGETABLE_CATEGORY_KEYWORDS, VEGETABLE_NAME_KEYWORDS,
};

/// Food-group label used when drawing candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodGroup {
    Protein,
    Carbs,
    Vegetables,
    Other,
}

impl FoodGroup {
    pub const ALL: [FoodGroup; 4] = [
        FoodGroup::Protein,
        FoodGroup::Carbs,
        FoodGroup::Vegetables,
        FoodGroup::Other,
    ];
}

/// Per-call categorization of the filtered pool.
///
/// Membership is a union, not a partition: one item may appear in several
/// groups. `other` always holds the entire pool, serving as the fallback
/// draw source when a specific group is empty.
#[derive(Debug, Clone, Default)]
pub struct FoodGroups {
    pub protein: Vec<MealItem>,
    pub carbs: Vec<MealItem>,
    pub vegetables: Vec<MealItem>,
    pub other: Vec<MealItem>,
}

impl FoodGroups {
    pub fn get(&self, group: FoodGroup) -> &[MealItem] {
        match group {
            FoodGroup::Protein => &self.protein,
            FoodGroup::Carbs => &self.carbs,
            FoodGroup::Vegetables => &self.vegetables,
            FoodGroup::Other => &self.other,
        }
    }
}

/// Tag each item with food-group membership.
///
/// The category label is checked first; a second pass over the item name
/// catches items whose category is uninformative (e.g. a "Sides" rice dish).
pub fn categorize_items(items: &[MealItem]) -> FoodGroups {
    let mut groups = FoodGroups {
        other: items.to_vec(),
        ..Default::default()
    };

    for item in items {
        if matches_any(&item.category, PROTEIN_CATEGORY_KEYWORDS)
            || matches_any(&item.name, PROTEIN_NAME_KEYWORDS)
        {
            groups.protein.push(item.clone());
        }
        if matches_any(&item.category, CARB_CATEGORY_KEYWORDS)
            || matches_any(&item.name, CARB_NAME_KEYWORDS)
        {
            groups.carbs.push(item.clone());
        }
        if matches_any(&item.category, VEGETABLE_CATEGORY_KEYWORDS)
            || matches_any(&item.name, VEGETABLE_NAME_KEYWORDS)
        {
            groups.vegetables.push(item.clone());
        }
    }

    groups
}

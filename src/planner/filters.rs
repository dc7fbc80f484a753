use crate::models::{MealItem, MenuItem};
use crate::planner::constants::{
    matches_any, DAIRY_EGG_CATEGORY_KEYWORDS, DAIRY_EGG_KEYWORDS, MEAT_CATEGORY_KEYWORDS,
    MEAT_KEYWORDS,
};

/// Select pool items for a dining hall, meal period, and optional date.
///
/// Hall and date match as case-insensitive substrings; the meal period must
/// match exactly. Records missing calories, protein, or fat are dropped.
/// The input pool is not mutated.
pub fn filter_available_items(
    pool: &[MenuItem],
    dining_hall: &str,
    meal_type: &str,
    date: Option<&str>,
) -> Vec<MealItem> {
    let hall_lower = dining_hall.to_lowercase();
    let date_lower = date.map(str::to_lowercase);

    pool.iter()
        .filter(|r| r.dining_hall.to_lowercase().contains(&hall_lower))
        .filter(|r| r.meal_type == meal_type)
        .filter(|r| match &date_lower {
            Some(d) => r.date.to_lowercase().contains(d),
            None => true,
        })
        .filter_map(MealItem::from_menu)
        .collect()
}

/// Drop items violating vegetarian or vegan constraints.
///
/// Both flags exclude meat by name and category; vegan additionally excludes
/// dairy, egg, and honey terms. With neither flag set the input passes
/// through unchanged.
pub fn filter_by_dietary_restrictions(
    items: Vec<MealItem>,
    vegetarian: bool,
    vegan: bool,
) -> Vec<MealItem> {
    if !vegetarian && !vegan {
        return items;
    }

    items
        .into_iter()
        .filter(|i| {
            !matches_any(&i.name, MEAT_KEYWORDS) && !matches_any(&i.category, MEAT_CATEGORY_KEYWORDS)
        })
        .filter(|i| {
            !vegan
                || (!matches_any(&i.name, DAIRY_EGG_KEYWORDS)
                    && !matches_any(&i.category, DAIRY_EGG_CATEGORY_KEYWORDS))
        })
        .collect()
}

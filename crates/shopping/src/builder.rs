use std::cmp::Ordering;
use std::collections::HashMap;

use toktotable_shared::{Ingredient, PlannerData, Recipe};
use ulid::Ulid;

use crate::key::{UNKNOWN_KEY, display_label_from_ingredient, ingredient_key_from_ingredient};
use crate::root::{
    ListSource, RAW_BUCKET_PREFIX, ShoppingItem, ShoppingList, ShoppingPart, SourceRef, merge_key,
};
use crate::unit::{normalize_quantity_and_unit, normalize_unit};

/// One ingredient of one planned recipe on one day, resolved for merging.
struct Contribution {
    key: String,
    label: String,
    bucket: String,
    quantity: f64,
    unit: String,
    recipe_id: String,
    day: Option<String>,
}

impl Contribution {
    fn resolve(ingredient: &Ingredient, recipe_id: &str, day: Option<&str>) -> Self {
        let normalized = normalize_quantity_and_unit(&ingredient.quantity, &ingredient.unit);

        let (bucket, quantity, unit) = match normalized.quantity {
            Some(quantity) => {
                let bucket = if normalized.unit.is_empty() {
                    UNKNOWN_KEY.to_owned()
                } else {
                    normalized.unit.to_owned()
                };
                (bucket, quantity, normalized.unit)
            }
            None => {
                let unit = normalize_unit(&ingredient.unit);
                let unit = if unit.is_empty() { UNKNOWN_KEY } else { unit.as_str() };
                (
                    format!("{RAW_BUCKET_PREFIX}{unit}"),
                    0.0,
                    ingredient.unit.to_owned(),
                )
            }
        };

        Self {
            key: ingredient_key_from_ingredient(ingredient),
            label: display_label_from_ingredient(ingredient),
            bucket,
            quantity,
            unit,
            recipe_id: recipe_id.to_owned(),
            day: day.map(str::to_owned),
        }
    }

    fn source(&self) -> SourceRef {
        SourceRef {
            recipe_id: self.recipe_id.to_owned(),
            day: self.day.to_owned(),
        }
    }

    fn part(&self) -> ShoppingPart {
        ShoppingPart {
            recipe_id: self.recipe_id.to_owned(),
            day: self.day.to_owned(),
            quantity: self.quantity,
            unit: self.unit.to_owned(),
        }
    }

    fn into_item(self) -> ShoppingItem {
        let source = self.source();
        let part = self.part();

        ShoppingItem {
            id: Ulid::new().to_string(),
            ingredient_key: self.key,
            unit_bucket: self.bucket,
            label: self.label,
            quantity: self.quantity,
            unit: self.unit,
            checked: false,
            sources: vec![source],
            parts: vec![part],
        }
    }
}

/// Build a fresh shopping list from a weekly plan.
///
/// Ingredients merge only when both their key and their unit bucket match.
/// Recipe ids missing from `recipes` are skipped. The result always replaces
/// any previous list: checked state is not carried over.
pub fn build_shopping_list_from_planner(planner: &PlannerData, recipes: &[Recipe]) -> ShoppingList {
    let catalog = recipes
        .iter()
        .map(|recipe| (recipe.id.as_str(), recipe))
        .collect::<HashMap<_, _>>();

    let mut list = ShoppingList::new(ListSource::Planner);
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut contributions = 0usize;
    let mut skipped = 0usize;

    for (day, recipe_ids) in planner.days() {
        for recipe_id in recipe_ids {
            let Some(recipe) = catalog.get(recipe_id.as_str()) else {
                tracing::debug!(day, recipe_id = %recipe_id, "planned recipe not in catalog, skipping");
                skipped += 1;
                continue;
            };

            for ingredient in &recipe.ingredients {
                let contribution = Contribution::resolve(ingredient, &recipe.id, Some(day));
                let key = merge_key(&contribution.key, &contribution.bucket);
                contributions += 1;

                match positions.get(&key) {
                    Some(&position) => {
                        let item = &mut list.items[position];
                        item.quantity = (item.quantity + contribution.quantity).min(f64::MAX);
                        item.sources.push(contribution.source());
                        item.parts.push(contribution.part());
                    }
                    None => {
                        positions.insert(key, list.items.len());
                        list.items.push(contribution.into_item());
                    }
                }
            }
        }
    }

    list.items.sort_by(|a, b| compare_labels(&a.label, &b.label));

    tracing::debug!(
        list_id = %list.id,
        items = list.items.len(),
        contributions,
        skipped,
        "shopping list built"
    );

    list
}

/// Case-insensitive first; on ties lowercase sorts before uppercase.
///
/// Letters compare by their lowercased code points, not by locale
/// collation, so accented initials sort after unaccented ones
/// ("Eggs" < "Éclair").
fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_labels() {
        assert_eq!(compare_labels("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_labels("Cherry", "banana"), Ordering::Greater);
        assert_eq!(compare_labels("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_labels("Egg", "Egg"), Ordering::Equal);
        assert_eq!(compare_labels("Eggs", "Éclair"), Ordering::Less);
    }

    #[test]
    fn test_raw_contribution_keeps_original_unit() {
        let ingredient = Ingredient::new("Salt", "a pinch", " Tablespoons ");
        let contribution = Contribution::resolve(&ingredient, "r1", Some("Monday"));

        assert_eq!(contribution.bucket, "raw_tbsp");
        assert_eq!(contribution.quantity, 0.0);
        assert_eq!(contribution.unit, " Tablespoons ");
    }

    #[test]
    fn test_zero_quantity_is_not_raw() {
        let ingredient = Ingredient::new("Sugar", "0", "g");
        let contribution = Contribution::resolve(&ingredient, "r1", None);

        assert_eq!(contribution.bucket, "g");
        assert_eq!(contribution.quantity, 0.0);
        assert!(contribution.day.is_none());
    }
}

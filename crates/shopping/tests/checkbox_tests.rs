use toktotable_shared::{Ingredient, PlannerData, Recipe};
use toktotable_shopping::{
    ListSource, ShoppingList, build_shopping_list_from_planner, clear_list, reset_checks,
    toggle_item,
};

/// Helper to build a three item list from a small plan
fn sample_list() -> ShoppingList {
    let recipes = vec![
        Recipe::new(
            "R1",
            vec![
                Ingredient::new("Garlic", "4", "cloves"),
                Ingredient::new("Butter", "50", "g"),
            ],
        ),
        Recipe::new("R2", vec![Ingredient::new("Salt", "a pinch", "")]),
    ];
    let planner = PlannerData::new()
        .with("Monday", &["R1"])
        .with("Tuesday", &["R1", "R2"]);

    build_shopping_list_from_planner(&planner, &recipes)
}

fn checked_states(list: &ShoppingList) -> Vec<(String, bool)> {
    list.items
        .iter()
        .map(|item| (item.id.to_owned(), item.checked))
        .collect()
}

#[test]
fn test_toggle_checks_only_target_item() {
    let list = sample_list();
    let target = list.items[1].id.to_owned();
    let before = list.clone();

    let toggled = toggle_item(list, &target);

    assert!(toggled.item(&target).unwrap().checked);
    assert_eq!(toggled.checked_count(), 1);
    for (after, before) in toggled.items.iter().zip(before.items.iter()) {
        if after.id != target {
            assert_eq!(after, before);
        }
    }
    assert_eq!(toggled.id, before.id);
    assert!(toggled.updated_at >= before.updated_at);
}

/// Double toggle restores the checked state and leaves every other field alone
#[test]
fn test_double_toggle_is_noop() {
    let list = sample_list();
    let target = list.items[0].id.to_owned();
    let before = list.clone();

    let twice = toggle_item(toggle_item(list, &target), &target);

    assert_eq!(checked_states(&twice), checked_states(&before));
    assert_eq!(twice.items, before.items);
    assert_eq!(twice.created_at, before.created_at);
}

#[test]
fn test_toggle_unknown_item_only_bumps_updated_at() {
    let list = sample_list();
    let before = list.clone();

    let after = toggle_item(list, "no-such-item");

    assert_eq!(after.items, before.items);
    assert!(after.updated_at >= before.updated_at);
}

#[test]
fn test_reset_unchecks_everything() {
    let list = sample_list();
    let ids = list.items.iter().map(|i| i.id.to_owned()).collect::<Vec<_>>();
    let list = ids.iter().fold(list, |list, id| toggle_item(list, id));
    assert_eq!(list.checked_count(), ids.len());

    let reset = reset_checks(list);

    assert_eq!(reset.checked_count(), 0);
    assert_eq!(reset.items.len(), ids.len());
}

#[test]
fn test_reset_is_a_fixed_point() {
    let list = sample_list();
    let target = list.items[2].id.to_owned();
    let list = toggle_item(list, &target);

    let once = reset_checks(list);
    let twice = reset_checks(once.clone());

    assert_eq!(twice.items, once.items);
    assert_eq!(twice.id, once.id);
}

#[test]
fn test_clear_returns_fresh_empty_list() {
    let list = sample_list();

    let cleared = clear_list();

    assert!(cleared.is_empty());
    assert_ne!(cleared.id, list.id);
    assert_eq!(cleared.source, ListSource::Manual);
    assert_eq!(cleared.created_at, cleared.updated_at);
}

/// Regenerating discards checked state from the previous list
#[test]
fn test_regenerate_overwrites_checks() {
    let list = sample_list();
    let target = list.items[0].id.to_owned();
    let checked = toggle_item(list, &target);
    assert_eq!(checked.checked_count(), 1);

    let regenerated = sample_list();

    assert_eq!(regenerated.checked_count(), 0);
    assert_ne!(regenerated.id, checked.id);
}

#[test]
fn test_list_serializes_camel_case() {
    let list = sample_list();

    let json = serde_json::to_value(&list).unwrap();

    assert_eq!(json["source"], "planner");
    assert!(json["createdAt"].is_string());
    let item = &json["items"][0];
    assert!(item["ingredientKey"].is_string());
    assert!(item["unitBucket"].is_string());
    assert_eq!(item["checked"], false);
    assert!(item["parts"][0]["recipeId"].is_string());

    let back: ShoppingList = serde_json::from_value(json).unwrap();
    assert_eq!(back, list);
}

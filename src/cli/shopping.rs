use std::path::{Path, PathBuf};

use toktotable_shared::{PlannerData, Recipe, parse_catalog, parse_planner};
use toktotable_shopping::{
    ShoppingList, build_shopping_list_from_planner, clear_list, reset_checks, toggle_item,
};

use crate::error::{AppError, Result};
use crate::storage::{ShoppingListStore, Storage};

#[derive(Debug, Default)]
pub struct GenerateInput {
    /// Planner JSON file; the stored planner when absent
    pub planner: Option<PathBuf>,
    /// Recipe catalog JSON file; the stored catalog when absent
    pub recipes: Option<PathBuf>,
}

/// Build a new list from the planner and overwrite the stored one.
///
/// Planner and recipes read from files are saved too, so the next generate
/// works from the same snapshot.
#[tracing::instrument(skip(store))]
pub async fn generate<S: Storage>(
    store: &ShoppingListStore<S>,
    input: GenerateInput,
) -> Result<ShoppingList> {
    let planner = match input.planner {
        Some(path) => {
            let planner = read_planner(&path).await?;
            store.save_planner(&planner).await?;
            planner
        }
        None => store.load_planner().await?,
    };

    let recipes = match input.recipes {
        Some(path) => {
            let recipes = read_recipes(&path).await?;
            store.save_recipes(&recipes).await?;
            recipes
        }
        None => store.load_recipes().await?,
    };

    if planner.is_empty() {
        tracing::warn!("planner is empty, generating an empty shopping list");
    }

    let list = build_shopping_list_from_planner(&planner, &recipes);
    store.save_list(&list).await?;

    tracing::info!(
        list_id = %list.id,
        items = list.items.len(),
        planned = planner.recipe_count(),
        recipes = recipes.len(),
        "shopping list generated"
    );

    Ok(list)
}

pub async fn show<S: Storage>(store: &ShoppingListStore<S>) -> Result<ShoppingList> {
    Ok(store.load_list().await?.unwrap_or_default())
}

#[tracing::instrument(skip(store))]
pub async fn toggle<S: Storage>(store: &ShoppingListStore<S>, item_id: &str) -> Result<ShoppingList> {
    let list = load_existing(store).await?;

    if list.item(item_id).is_none() {
        tracing::warn!(item_id, "item not found in shopping list");
    }

    let list = toggle_item(list, item_id);
    store.save_list(&list).await?;

    Ok(list)
}

#[tracing::instrument(skip(store))]
pub async fn reset<S: Storage>(store: &ShoppingListStore<S>) -> Result<ShoppingList> {
    let list = reset_checks(load_existing(store).await?);
    store.save_list(&list).await?;

    Ok(list)
}

#[tracing::instrument(skip(store))]
pub async fn clear<S: Storage>(store: &ShoppingListStore<S>) -> Result<ShoppingList> {
    let list = clear_list();
    store.save_list(&list).await?;

    tracing::info!(list_id = %list.id, "shopping list cleared");

    Ok(list)
}

async fn load_existing<S: Storage>(store: &ShoppingListStore<S>) -> Result<ShoppingList> {
    store.load_list().await?.ok_or_else(|| {
        AppError::ValidationError("no shopping list yet, run `generate` first".to_string())
    })
}

async fn read_json(path: &Path) -> Result<serde_json::Value> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

async fn read_planner(path: &Path) -> Result<PlannerData> {
    Ok(parse_planner(&read_json(path).await?)?)
}

async fn read_recipes(path: &Path) -> Result<Vec<Recipe>> {
    Ok(parse_catalog(&read_json(path).await?)?)
}

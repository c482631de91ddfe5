#![allow(dead_code)]

use serde_json::{Value, json};
use temp_dir::TempDir;
use toktotable::{FileStorage, MemoryStorage, ShoppingListStore, StorageKeys};

pub fn recipes_json() -> Value {
    json!([
        {
            "id": "R1",
            "title": "Garlic butter noodles",
            "ingredients": [
                { "name": "Garlic", "quantity": "4", "unit": "cloves" },
                { "name": "Butter", "quantity": "50", "unit": "g" },
                { "name": "Salt", "quantity": "a pinch", "unit": "" }
            ]
        },
        {
            "id": "R2",
            "title": "Pan sauce",
            "ingredients": [
                { "name": "Butter", "quantity": 2, "unit": "tbsp" },
                { "name": "Garlic", "normalizedName": "garlic", "quantity": "2", "unit": "pieces" }
            ]
        }
    ])
}

pub fn planner_json() -> Value {
    json!({
        "Tuesday": ["R1", "R2"],
        "Monday": ["R1", "DELETED"]
    })
}

pub fn memory_store() -> ShoppingListStore<MemoryStorage> {
    ShoppingListStore::new(MemoryStorage::new(), StorageKeys::default())
}

pub fn file_store(dir: &TempDir) -> ShoppingListStore<FileStorage> {
    ShoppingListStore::new(FileStorage::new(dir.path()), StorageKeys::default())
}

/// Write planner and recipe fixtures into `dir`, returning their paths
pub fn write_fixtures(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let planner = dir.child("planner.json");
    let recipes = dir.child("recipes.json");

    std::fs::write(&planner, planner_json().to_string()).unwrap();
    std::fs::write(&recipes, recipes_json().to_string()).unwrap();

    (planner, recipes)
}

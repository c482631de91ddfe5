use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::RwLock;
use toktotable_shared::{PlannerData, Recipe, parse_catalog, parse_planner};
use toktotable_shopping::ShoppingList;

use crate::config::StorageConfig;
use crate::error::{AppError, Result};

/// String key/value store, the same contract as browser storage.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// One `<key>.json` file per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(AppError::ValidationError(format!(
                "invalid storage key `{key}`"
            )));
        }

        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.path(key)?).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        // Write then rename so readers never see a half written document
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match tokio::fs::remove_file(self.path(key)?).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct StorageKeys {
    pub shopping_list: String,
    pub planner: String,
    pub recipes: String,
}

impl From<&StorageConfig> for StorageKeys {
    fn from(config: &StorageConfig) -> Self {
        Self {
            shopping_list: config.shopping_list_key.to_owned(),
            planner: config.planner_key.to_owned(),
            recipes: config.recipes_key.to_owned(),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            shopping_list: "toktotable.shoppingList".to_owned(),
            planner: "toktotable.planner".to_owned(),
            recipes: "toktotable.recipes".to_owned(),
        }
    }
}

/// Typed JSON documents over a [`Storage`].
///
/// Planner and recipes go through the payload adapter so hand-edited or
/// older documents are validated before they reach the shopping core.
pub struct ShoppingListStore<S: Storage> {
    storage: S,
    keys: StorageKeys,
}

impl<S: Storage> ShoppingListStore<S> {
    pub fn new(storage: S, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub async fn load_list(&self) -> Result<Option<ShoppingList>> {
        let Some(raw) = self.storage.get(&self.keys.shopping_list).await? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    pub async fn save_list(&self, list: &ShoppingList) -> Result<()> {
        self.save(&self.keys.shopping_list, list).await?;
        tracing::debug!(list_id = %list.id, items = list.items.len(), "shopping list saved");

        Ok(())
    }

    pub async fn load_planner(&self) -> Result<PlannerData> {
        match self.storage.get(&self.keys.planner).await? {
            Some(raw) => Ok(parse_planner(&serde_json::from_str(&raw)?)?),
            None => Ok(PlannerData::default()),
        }
    }

    pub async fn save_planner(&self, planner: &PlannerData) -> Result<()> {
        self.save(&self.keys.planner, planner).await
    }

    pub async fn load_recipes(&self) -> Result<Vec<Recipe>> {
        match self.storage.get(&self.keys.recipes).await? {
            Some(raw) => Ok(parse_catalog(&serde_json::from_str(&raw)?)?),
            None => Ok(Vec::new()),
        }
    }

    pub async fn save_recipes(&self, recipes: &[Recipe]) -> Result<()> {
        self.save(&self.keys.recipes, recipes).await
    }

    async fn save<T: Serialize + ?Sized + Sync>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.storage.set(key, &raw).await
    }
}

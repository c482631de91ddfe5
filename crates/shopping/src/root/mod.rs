mod clear;
mod reset;
mod toggle;

pub use clear::*;
pub use reset::*;
pub use toggle::*;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::OffsetDateTime;
use ulid::Ulid;

/// Unit bucket prefix isolating entries whose quantity could not be parsed.
pub const RAW_BUCKET_PREFIX: &str = "raw_";

#[derive(
    Serialize, Deserialize, EnumString, Display, Clone, Copy, Debug, Default, PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ListSource {
    #[default]
    Planner,
    Manual,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceRef {
    pub recipe_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
}

/// One recipe/day contribution to a merged item.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingPart {
    pub recipe_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    pub ingredient_key: String,
    pub unit_bucket: String,
    pub label: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    #[serde(default)]
    pub parts: Vec<ShoppingPart>,
}

impl ShoppingItem {
    /// Unparseable quantity: the item only names the ingredient.
    pub fn is_raw(&self) -> bool {
        self.unit_bucket.starts_with(RAW_BUCKET_PREFIX)
    }

    pub fn merge_key(&self) -> String {
        merge_key(&self.ingredient_key, &self.unit_bucket)
    }
}

pub(crate) fn merge_key(ingredient_key: &str, unit_bucket: &str) -> String {
    format!("{ingredient_key}::{unit_bucket}")
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: String,
    pub source: ListSource,
    pub items: Vec<ShoppingItem>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl ShoppingList {
    pub fn new(source: ListSource) -> Self {
        let now = OffsetDateTime::now_utc();

        Self {
            id: Ulid::new().to_string(),
            source,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn item(&self, id: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_by_key(&self, ingredient_key: &str, unit_bucket: &str) -> Option<&ShoppingItem> {
        self.items
            .iter()
            .find(|item| item.ingredient_key == ingredient_key && item.unit_bucket == unit_bucket)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = OffsetDateTime::now_utc().max(self.updated_at);
    }
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self::new(ListSource::Manual)
    }
}

use serde::{Deserialize, Deserializer, Serialize};

/// Raw quantity as extracted from a video: either a number or free text
/// such as "1 1/2", "200g" or "a pinch".
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl Default for Quantity {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Quantity {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_name: Option<String>,
    #[serde(default, deserialize_with = "nullable_quantity")]
    pub quantity: Quantity,
    #[serde(default, deserialize_with = "nullable_string")]
    pub unit: String,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<Quantity>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            normalized_name: None,
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    pub fn with_normalized_name(mut self, normalized_name: impl Into<String>) -> Self {
        self.normalized_name = Some(normalized_name.into());
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            ingredients,
        }
    }
}

fn nullable_quantity<'de, D>(deserializer: D) -> Result<Quantity, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Quantity>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

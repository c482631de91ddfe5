//! Validated adapter from loosely typed JSON payloads (extraction backend,
//! browser storage) to the shaped `Recipe` and `PlannerData` values the
//! shopping core consumes.

use serde_json::{Map, Value};

use crate::planner::PlannerData;
use crate::recipe::{Ingredient, Quantity, Recipe};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("expected an object for {0}")]
    NotAnObject(&'static str),

    #[error("expected an array for {0}")]
    NotAnArray(&'static str),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("at index {index}: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    fn at(index: usize, source: ParseError) -> Self {
        Self::AtIndex {
            index,
            source: Box::new(source),
        }
    }
}

pub fn parse_recipe(value: &Value) -> Result<Recipe, ParseError> {
    let object = value.as_object().ok_or(ParseError::NotAnObject("recipe"))?;

    let id = match object.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => id.to_owned(),
        Some(Value::String(_)) => return Err(ParseError::invalid("id", "empty string")),
        Some(Value::Number(id)) => id.to_string(),
        Some(other) => return Err(ParseError::invalid("id", kind(other))),
        None => return Err(ParseError::MissingField("id")),
    };

    let title = optional_string(object, "title")?.unwrap_or_default();

    let ingredients = match object.get("ingredients") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| parse_ingredient(item).map_err(|e| ParseError::at(index, e)))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(ParseError::NotAnArray("ingredients")),
    };

    Ok(Recipe {
        id,
        title,
        ingredients,
    })
}

pub fn parse_catalog(value: &Value) -> Result<Vec<Recipe>, ParseError> {
    let items = value.as_array().ok_or(ParseError::NotAnArray("recipes"))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_recipe(item).map_err(|e| ParseError::at(index, e)))
        .collect()
}

pub fn parse_planner(value: &Value) -> Result<PlannerData, ParseError> {
    let object = value.as_object().ok_or(ParseError::NotAnObject("planner"))?;
    let mut planner = PlannerData::new();

    for (day, ids) in object {
        let ids = match ids {
            Value::Null => continue,
            Value::Array(ids) => ids,
            other => {
                return Err(ParseError::invalid(
                    "planner",
                    format!("day `{day}` holds {}", kind(other)),
                ));
            }
        };

        for (index, id) in ids.iter().enumerate() {
            let id = match id {
                Value::String(id) => id.to_owned(),
                Value::Number(id) => id.to_string(),
                other => {
                    return Err(ParseError::at(
                        index,
                        ParseError::invalid("recipeId", format!("day `{day}` holds {}", kind(other))),
                    ));
                }
            };
            planner.schedule(day.as_str(), id);
        }
    }

    Ok(planner)
}

fn parse_ingredient(value: &Value) -> Result<Ingredient, ParseError> {
    let object = value
        .as_object()
        .ok_or(ParseError::NotAnObject("ingredient"))?;

    let name = match object.get("name") {
        Some(Value::String(name)) => name.to_owned(),
        Some(Value::Null) | None => return Err(ParseError::MissingField("name")),
        Some(other) => return Err(ParseError::invalid("name", kind(other))),
    };

    let quantity = match object.get("quantity") {
        None | Some(Value::Null) => Quantity::default(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(n) => Quantity::Number(n),
            None => return Err(ParseError::invalid("quantity", "number out of range")),
        },
        Some(Value::String(text)) => Quantity::Text(text.to_owned()),
        Some(other) => return Err(ParseError::invalid("quantity", kind(other))),
    };

    Ok(Ingredient {
        name,
        normalized_name: optional_string(object, "normalizedName")?,
        quantity,
        unit: optional_string(object, "unit")?.unwrap_or_default(),
    })
}

fn optional_string(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ParseError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.to_owned())),
        Some(other) => Err(ParseError::invalid(field, kind(other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

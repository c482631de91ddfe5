use std::sync::LazyLock;

use regex::Regex;
use toktotable_shared::Ingredient;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid separator regex"));

pub const UNKNOWN_KEY: &str = "unknown";
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Merge identity of an ingredient.
///
/// Uses the normalized name when one is supplied, then lowercases and joins
/// alphanumeric runs with a single underscore. No synonym or fuzzy matching:
/// "spring onion" and "scallion" stay two keys unless the extraction step
/// already gave them the same normalized name.
pub fn ingredient_key_from_ingredient(ingredient: &Ingredient) -> String {
    let source = ingredient
        .normalized_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(&ingredient.name);

    let key = NON_ALPHANUMERIC
        .replace_all(&source.trim().to_lowercase(), "_")
        .trim_matches('_')
        .to_owned();

    if key.is_empty() {
        return UNKNOWN_KEY.to_owned();
    }

    key
}

/// Human label for an ingredient. Cosmetic only.
pub fn display_label_from_ingredient(ingredient: &Ingredient) -> String {
    let name = ingredient.name.trim();
    if !name.is_empty() {
        return name.to_owned();
    }

    match ingredient.normalized_name.as_deref().map(str::trim) {
        Some(normalized) if !normalized.is_empty() => normalized.to_owned(),
        _ => UNKNOWN_LABEL.to_owned(),
    }
}

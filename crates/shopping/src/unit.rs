use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use strum::{Display, EnumString};
use toktotable_shared::Quantity;

static MIXED_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(\d+)/(\d+)").expect("valid mixed fraction regex"));
static SIMPLE_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)").expect("valid fraction regex"));
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?|\.\d+)").expect("valid number regex"));

/// The three families every convertible unit collapses into.
#[derive(EnumString, Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum CanonicalUnit {
    G,
    Ml,
    Pcs,
}

impl CanonicalUnit {
    pub fn is_canonical(unit: &str) -> bool {
        Self::from_str(unit).is_ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedQuantity {
    /// `None` when no number could be read from the raw quantity.
    pub quantity: Option<f64>,
    pub unit: String,
}

/// Canonicalize a unit spelling: lowercase, trim and fold known aliases.
///
/// Unknown units pass through lowercased and trimmed.
pub fn normalize_unit(raw_unit: &str) -> String {
    let unit = raw_unit.trim().to_lowercase();

    let alias = match unit.as_str() {
        "gram" | "grams" | "grm" => "g",
        "kilogram" | "kilograms" => "kg",
        "milliliter" | "milliliters" | "millilitre" | "millilitres" => "ml",
        "liter" | "liters" | "litre" | "litres" => "l",
        "tablespoon" | "tablespoons" | "tbspn" => "tbsp",
        "teaspoon" | "teaspoons" | "tspn" => "tsp",
        "piece" | "pieces" | "pc" => "pcs",
        _ => return unit,
    };

    alias.to_owned()
}

/// Read a number out of a raw quantity.
///
/// Accepts plain numbers, mixed fractions ("1 1/2"), simple fractions
/// ("3/4") and a leading number of a longer string ("200g", "1.5 cups").
/// Returns `None` for text without a numeric prefix ("a pinch") and for
/// values too large to represent as a finite number.
pub fn parse_quantity(input: &Quantity) -> Option<f64> {
    match input {
        Quantity::Number(value) if value.is_finite() => Some(*value),
        Quantity::Number(_) => None,
        Quantity::Text(text) => parse_quantity_str(text),
    }
}

pub fn parse_quantity_str(input: &str) -> Option<f64> {
    parse_leading_quantity(input.trim()).filter(|quantity| quantity.is_finite())
}

fn parse_leading_quantity(trimmed: &str) -> Option<f64> {
    if let Some(caps) = MIXED_FRACTION.captures(trimmed) {
        let whole = caps[1].parse::<f64>().ok()?;
        let numerator = caps[2].parse::<f64>().ok()?;
        let denominator = caps[3].parse::<f64>().ok()?;
        if denominator != 0.0 {
            return Some(whole + numerator / denominator);
        }
    }

    if let Some(caps) = SIMPLE_FRACTION.captures(trimmed) {
        let numerator = caps[1].parse::<f64>().ok()?;
        let denominator = caps[2].parse::<f64>().ok()?;
        if denominator != 0.0 {
            return Some(numerator / denominator);
        }
    }

    LEADING_NUMBER
        .captures(trimmed)
        .and_then(|caps| caps[1].parse::<f64>().ok())
}

/// Parse the quantity and convert it into its canonical unit family.
///
/// Conversion table:
/// - Mass: kg -> g (x1000), g -> g
/// - Volume: l -> ml (x1000), ml -> ml, tbsp -> ml (x15), tsp -> ml (x5)
/// - Count: empty unit, pcs, cloves, cans, whole, items -> pcs
///
/// Unknown units keep their quantity and normalized spelling so they never
/// merge with a canonical bucket.
pub fn normalize_quantity_and_unit(quantity: &Quantity, unit: &str) -> NormalizedQuantity {
    let unit = normalize_unit(unit);

    let Some(quantity) = parse_quantity(quantity) else {
        return NormalizedQuantity {
            quantity: None,
            unit,
        };
    };

    if is_count_unit(&unit) {
        return NormalizedQuantity {
            quantity: Some(quantity),
            unit: CanonicalUnit::Pcs.to_string(),
        };
    }

    match conversion(&unit) {
        Some((target, factor)) => {
            let converted = quantity * factor;
            // Overflowing the conversion counts as no number at all
            if !converted.is_finite() {
                return NormalizedQuantity {
                    quantity: None,
                    unit,
                };
            }

            NormalizedQuantity {
                quantity: Some(converted),
                unit: target.to_string(),
            }
        }
        None => NormalizedQuantity {
            quantity: Some(quantity),
            unit,
        },
    }
}

fn is_count_unit(unit: &str) -> bool {
    matches!(
        unit,
        "" | "pcs" | "piece" | "pieces" | "clove" | "cloves" | "can" | "cans" | "whole" | "item"
            | "items"
    )
}

fn conversion(unit: &str) -> Option<(CanonicalUnit, f64)> {
    let conversion = match unit {
        "kg" => (CanonicalUnit::G, 1000.0),
        "g" => (CanonicalUnit::G, 1.0),
        "l" => (CanonicalUnit::Ml, 1000.0),
        "ml" => (CanonicalUnit::Ml, 1.0),
        "tbsp" => (CanonicalUnit::Ml, 15.0),
        "tsp" => (CanonicalUnit::Ml, 5.0),
        _ => return None,
    };

    Some(conversion)
}

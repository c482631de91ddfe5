use toktotable_shopping::{ShoppingItem, ShoppingList};

/// Format a quantity for display
///
/// Whole numbers print without decimals, anything else with at most two
/// decimals and no trailing zeros: 8 -> "8", 1.5 -> "1.5", 0.333 -> "0.33".
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        return format!("{quantity:.0}");
    }

    let formatted = format!("{quantity:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

pub fn render_item(item: &ShoppingItem) -> String {
    let check = if item.checked { "[x]" } else { "[ ]" };

    if item.is_raw() {
        let unit = item.unit.trim();
        if unit.is_empty() {
            return format!("{check} {}  ({})", item.label, item.id);
        }
        return format!("{check} {} ({unit})  ({})", item.label, item.id);
    }

    format!(
        "{check} {} {} {}  ({})",
        item.label,
        format_quantity(item.quantity),
        item.unit,
        item.id
    )
}

pub fn render_list(list: &ShoppingList) -> String {
    if list.is_empty() {
        return "Shopping list is empty".to_string();
    }

    let mut lines = list.items.iter().map(render_item).collect::<Vec<_>>();
    lines.push(format!(
        "{}/{} checked",
        list.checked_count(),
        list.items.len()
    ));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use toktotable_shopping::ShoppingList;

    fn item(label: &str, quantity: f64, unit: &str, bucket: &str) -> ShoppingItem {
        ShoppingItem {
            id: "01ITEM".to_string(),
            ingredient_key: label.to_lowercase(),
            unit_bucket: bucket.to_string(),
            label: label.to_string(),
            quantity,
            unit: unit.to_string(),
            checked: false,
            sources: vec![],
            parts: vec![],
        }
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(8.0), "8");
        assert_eq!(format_quantity(1.5), "1.5");
        assert_eq!(format_quantity(0.333), "0.33");
        assert_eq!(format_quantity(2.10), "2.1");
        assert_eq!(format_quantity(0.0), "0");
    }

    #[test]
    fn test_render_item() {
        assert_eq!(
            render_item(&item("Garlic", 8.0, "pcs", "pcs")),
            "[ ] Garlic 8 pcs  (01ITEM)"
        );

        let mut salt = item("Salt", 0.0, "", "raw_unknown");
        salt.checked = true;
        assert_eq!(render_item(&salt), "[x] Salt  (01ITEM)");

        assert_eq!(
            render_item(&item("Vanilla", 0.0, "tsp", "raw_tsp")),
            "[ ] Vanilla (tsp)  (01ITEM)"
        );
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_list(&ShoppingList::default()), "Shopping list is empty");
    }
}

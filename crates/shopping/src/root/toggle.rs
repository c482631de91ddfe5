use super::ShoppingList;

/// Flip the `checked` flag of the item with `item_id`.
///
/// Unknown ids leave every item as is; only `updated_at` moves.
pub fn toggle_item(mut list: ShoppingList, item_id: &str) -> ShoppingList {
    match list.items.iter_mut().find(|item| item.id == item_id) {
        Some(item) => item.checked = !item.checked,
        None => tracing::debug!(list_id = %list.id, item_id, "toggle on unknown item"),
    }

    list.touch();
    list
}

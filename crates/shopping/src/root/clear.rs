use super::{ListSource, ShoppingList};

/// Discard the current list entirely and start an empty manual one.
pub fn clear_list() -> ShoppingList {
    ShoppingList::new(ListSource::Manual)
}

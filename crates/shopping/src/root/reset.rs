use super::ShoppingList;

pub fn reset_checks(mut list: ShoppingList) -> ShoppingList {
    for item in list.items.iter_mut() {
        item.checked = false;
    }

    list.touch();
    list
}

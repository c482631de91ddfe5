pub mod builder;
pub mod key;
pub mod root;
pub mod unit;

pub use builder::build_shopping_list_from_planner;
pub use key::{display_label_from_ingredient, ingredient_key_from_ingredient};
pub use root::{
    ListSource, ShoppingItem, ShoppingList, ShoppingPart, SourceRef, clear_list, reset_checks,
    toggle_item,
};
pub use unit::{
    CanonicalUnit, NormalizedQuantity, normalize_quantity_and_unit, normalize_unit, parse_quantity,
};

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod render;
pub mod storage;

pub use crate::config::Config;
pub use error::{AppError, Result};
pub use storage::{FileStorage, MemoryStorage, ShoppingListStore, Storage, StorageKeys};

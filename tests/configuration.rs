//! Tests for configuration system

use toktotable::Config;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.storage.dir, ".toktotable");
    assert_eq!(config.storage.shopping_list_key, "toktotable.shoppingList");
    assert_eq!(config.storage.planner_key, "toktotable.planner");
    assert_eq!(config.storage.recipes_key, "toktotable.recipes");
    assert_eq!(config.observability.log_level, "warn");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let config = Config::load(Some("does/not/exist.toml".to_string()))
        .expect("Failed to load config");

    assert_eq!(config.storage.dir, ".toktotable");
    assert_eq!(config.storage.shopping_list_key, "toktotable.shoppingList");
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.child("custom.toml");
    std::fs::write(
        &path,
        "[storage]\ndir = \"/tmp/lists\"\nshopping_list_key = \"list\"\n\n[observability]\nlog_level = \"debug\"\n",
    )
    .unwrap();

    let config = Config::load(Some(path.to_string_lossy().to_string())).unwrap();

    assert_eq!(config.storage.dir, "/tmp/lists");
    assert_eq!(config.storage.shopping_list_key, "list");
    assert_eq!(config.storage.planner_key, "toktotable.planner");
    assert_eq!(config.observability.log_level, "debug");
}

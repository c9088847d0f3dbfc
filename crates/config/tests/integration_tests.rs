//! Integration tests for the configuration system

use bookshelf_config::{
    AppConfig, CatalogConfig, Config, ConfigManager, ConfigSection, LogLevel, CONFIG_VERSION,
    ENV_PAGE_SIZE,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn setup_test_manager() -> Result<(TempDir, ConfigManager), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf());
    Ok((temp_dir, manager))
}

#[test]
fn test_full_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    let created = manager.initialize()?;
    assert!(created);

    let config = manager.load()?;
    assert_eq!(config.version, CONFIG_VERSION);

    let mut modified = config.clone();
    modified.catalog.path = PathBuf::from("/srv/catalog/books.json");
    modified.app.log_level = LogLevel::Info;
    manager.save(&modified)?;

    let reloaded = manager.load()?;
    assert_eq!(reloaded.catalog.path, PathBuf::from("/srv/catalog/books.json"));
    assert_eq!(reloaded.app.log_level, LogLevel::Info);

    manager.reset()?;
    assert_eq!(manager.load()?, Config::default());

    Ok(())
}

#[test]
fn test_saved_file_is_readable_toml() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;
    manager.initialize()?;

    let contents = std::fs::read_to_string(manager.config_path())?;
    assert!(contents.contains("[catalog]"));
    assert!(contents.contains("page_size = 50"));
    assert!(contents.contains("log_level = \"warn\""));

    Ok(())
}

#[test]
fn test_invalid_values_rejected_on_save() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    let mut invalid = Config::default();
    invalid.catalog.page_size = 5000;
    assert!(manager.save(&invalid).is_err());
    assert!(!manager.config_path().exists());

    Ok(())
}

#[test]
fn test_file_then_env_layering() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;
    manager.update(|config| {
        config.catalog.page_size = 10;
        config.catalog.sort_authors = false;
    })?;

    let mut config = manager.load()?;
    config.apply_env_overrides(|key| (key == ENV_PAGE_SIZE).then(|| "30".to_string()));

    assert_eq!(config.catalog.page_size, 30);
    assert!(!config.catalog.sort_authors);

    Ok(())
}

#[test]
fn test_all_sections_default_are_valid() {
    assert!(AppConfig::default().validate().is_ok());
    assert!(CatalogConfig::default().validate().is_ok());
    assert!(Config::default().validate().is_ok());
}

use portalist::config::Config;
use portalist::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.default_route, "/social");
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.api.class_id, 1);
    assert_eq!(config.api.timeout_seconds, 30);
    assert!(config.display.show_comment_counts);
    assert!(config.display.show_image_markers);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid folder pane width should fail
    config.ui.folder_pane_width = 5;
    assert!(config.validate().is_err());

    // Reset and test invalid default route
    config.ui.folder_pane_width = 28;
    config.ui.default_route = "/nowhere".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid base URL
    config.ui.default_route = "/social".to_string();
    config.api.base_url = "ftp://portal".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid class id
    config.api.base_url = "http://localhost:4000/api".to_string();
    config.api.class_id = 0;
    assert!(config.validate().is_err());

    // Reset and test invalid timeout
    config.api.class_id = 1;
    config.api.timeout_seconds = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_route = \"/social\""));
    assert!(toml_str.contains("class_id = 1"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
folder_pane_width = 35

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.folder_pane_width, 35);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.ui.default_route, "/social"); // default value
    assert!(config.ui.mouse_enabled); // default value
    assert_eq!(config.api.class_id, 1); // default value
    assert_eq!(config.display.date_format, datetime::PORTAL_DATE_FORMAT); // default value
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.default_route, default_config.ui.default_route);
    assert_eq!(config.api.base_url, default_config.api.base_url);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.display.date_format, default_config.display.date_format);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("portalist_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    // The generated file should round-trip through the loader
    let loaded = Config::load_from_file(&config_path);
    assert!(loaded.is_ok());

    let _ = fs::remove_dir_all(&temp_dir);
}

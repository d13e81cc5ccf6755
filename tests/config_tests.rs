//! Integration tests for configuration management

use campus_records::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.data_dir.is_empty(),
        "Default data_dir should not be empty"
    );
    assert!(
        !config.paths.backup_dir.is_empty(),
        "Default backup_dir should not be empty"
    );
    assert!(
        config.limits.max_credits_per_semester > 0,
        "Default credit cap should be positive"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
data_dir = "./data"
backup_dir = "./backups"

[limits]
max_credits_per_semester = 21
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "./data");
    assert_eq!(config.paths.backup_dir, "./backups");
    assert_eq!(config.limits.max_credits_per_semester, 21);
}

#[test]
fn test_missing_limits_section_uses_default_cap() {
    let toml_str = r#"
[logging]
level = "warn"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.limits.max_credits_per_semester, 18);
}

#[test]
fn test_campus_records_variable_expansion() {
    let toml_str = r#"
[logging]
level = "warn"
file = "$CAMPUS_RECORDS/logs/app.log"

[paths]
data_dir = "$CAMPUS_RECORDS/data"
backup_dir = "./backups"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert!(
        !config.logging.file.contains("$CAMPUS_RECORDS"),
        "Variable should be expanded in logging.file"
    );
    assert!(
        !config.paths.data_dir.contains("$CAMPUS_RECORDS"),
        "Variable should be expanded in paths.data_dir"
    );
    assert!(config.logging.file.ends_with("logs/app.log"));
    assert_eq!(config.paths.backup_dir, "./backups");
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        data_dir: Some("/override/data".to_string()),
        max_credits: Some(24),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.data_dir, "/override/data");
    assert_eq!(config.limits.max_credits_per_semester, 24);
}

#[test]
fn test_empty_overrides_change_nothing() {
    let mut config = Config::from_defaults();
    let before = config.clone();

    config.apply_overrides(&ConfigOverrides::default());

    assert_eq!(config.logging.level, before.logging.level);
    assert_eq!(config.paths.data_dir, before.paths.data_dir);
    assert_eq!(
        config.limits.max_credits_per_semester,
        before.limits.max_credits_per_semester
    );
}

#[test]
fn test_merge_defaults_fills_empty_fields_only() {
    let mut config = Config::from_toml(
        r#"
[logging]
level = "error"
"#,
    )
    .expect("Failed to parse TOML");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(changed, "Empty paths should be filled from defaults");
    assert_eq!(config.logging.level, "error", "Set fields are preserved");
    assert_eq!(config.paths.data_dir, defaults.paths.data_dir);
    assert_eq!(config.paths.backup_dir, defaults.paths.backup_dir);
}

#[test]
fn test_get_and_set_round_trip() {
    let mut config = Config::from_defaults();

    config.set("level", "debug").expect("set level");
    config.set("max_credits", "30").expect("set max_credits");

    assert_eq!(config.get("level"), Some("debug".to_string()));
    assert_eq!(config.get("max_credits"), Some("30".to_string()));
    assert_eq!(config.get("nonsense"), None);
}

#[test]
fn test_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("max_credits", "lots").is_err());
    assert!(config.set("max_credits", "0").is_err());
    assert!(config.set("unknown_key", "x").is_err());
}

#[test]
fn test_unset_restores_defaults() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("max_credits", "30").expect("set");
    config.unset("max_credits", &defaults).expect("unset");

    assert_eq!(
        config.limits.max_credits_per_semester,
        defaults.limits.max_credits_per_semester
    );
    assert!(config.unset("unknown_key", &defaults).is_err());
}

use rwrapped::config::Config;
use rwrapped::errors::AppError;
use rwrapped::stats::Granularity;

#[test]
fn test_missing_fields_take_defaults() {
    let cfg = Config::from_yaml("database: /tmp/history.sqlite\n").unwrap();
    assert_eq!(cfg.database, "/tmp/history.sqlite");
    assert_eq!(cfg.year, 2019);
    assert_eq!(cfg.granularity, Granularity::Month);
    assert_eq!(cfg.default_rows, 10);
}

#[test]
fn test_all_fields() {
    let cfg = Config::from_yaml(
        "database: /tmp/h.sqlite\nyear: 2021\ngranularity: weekday\ndefault_rows: 3\n",
    )
    .unwrap();
    assert_eq!(cfg.year, 2021);
    assert_eq!(cfg.granularity, Granularity::Weekday);
    assert_eq!(cfg.default_rows, 3);
}

#[test]
fn test_invalid_yaml() {
    let err = Config::from_yaml("year: [").unwrap_err();
    assert!(matches!(err, AppError::Yaml(_)));
}

#[test]
fn test_empty_database_is_rejected() {
    let err = Config::from_yaml("database: ''\n").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_roundtrip_through_yaml() {
    let cfg = Config::default();
    let yaml = serde_yaml::to_string(&cfg).unwrap();
    assert!(yaml.contains("granularity: month"));
    assert!(yaml.contains("year: 2019"));
}

#[test]
fn test_init_in_test_mode_stays_out_of_home() {
    let db_path = Config::init_all(None, true).unwrap();

    assert!(db_path.starts_with(std::env::temp_dir()));
    assert!(!db_path.starts_with(Config::config_dir()));
    assert!(db_path.exists());
}

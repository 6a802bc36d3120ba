//! Loading match settings from TOML.

use hit_and_blow::MatchConfig;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_defaults() {
    let config = MatchConfig::default();
    assert_eq!(*config.turn_secs(), 60);
    assert_eq!(*config.grace_secs(), 1);
    assert_eq!(config.start_delay(), Duration::ZERO);
    assert_eq!(config.solver_delay(), Duration::from_millis(500));
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.timer().budget(), Duration::from_secs(60));
}

#[test]
fn test_empty_file_uses_defaults() {
    assert_eq!(MatchConfig::from_toml("").unwrap(), MatchConfig::default());
}

#[test]
fn test_partial_override() {
    let config = MatchConfig::from_toml(
        r#"
        turn_secs = 15
        log_filter = "hit_and_blow=debug"
        "#,
    )
    .unwrap();

    assert_eq!(*config.turn_secs(), 15);
    assert_eq!(*config.grace_secs(), 1);
    assert_eq!(config.log_filter(), "hit_and_blow=debug");
    assert_eq!(config.timer().budget(), Duration::from_secs(15));
}

#[test]
fn test_rejects_zero_turn_budget() {
    let err = MatchConfig::from_toml("turn_secs = 0").unwrap_err();
    assert!(err.message.contains("turn_secs"));
}

#[test]
fn test_rejects_malformed_toml() {
    assert!(MatchConfig::from_toml("turn_secs = \"soon\"").is_err());
    assert!(MatchConfig::from_toml("turn_secs =").is_err());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "turn_secs = 30\nstart_delay_ms = 250").unwrap();

    let config = MatchConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.turn_secs(), 30);
    assert_eq!(config.start_delay(), Duration::from_millis(250));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("read"));
}

#[test]
fn test_setters_chain() {
    let config = MatchConfig::default()
        .with_turn_secs(5)
        .with_solver_delay_ms(0)
        .with_log_filter("warn");
    assert_eq!(*config.turn_secs(), 5);
    assert_eq!(config.solver_delay(), Duration::ZERO);
    assert_eq!(config.log_filter(), "warn");
}

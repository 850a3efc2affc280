// tests/cli_logging.rs

use clap::Parser;
use questlog::cli::{CliArgs, LogLevel};
use questlog::logging::resolve_level;

#[test]
fn cli_defaults() {
    let args = CliArgs::try_parse_from(["questlog"]).unwrap();
    assert_eq!(args.config, "Questlog.toml");
    assert!(args.log_level.is_none());
    assert!(args.now.is_none());
    assert!(!args.dry_run);
}

#[test]
fn cli_flags() {
    let args = CliArgs::try_parse_from([
        "questlog",
        "--config",
        "tasks/Questlog.toml",
        "--log-level",
        "debug",
        "--now",
        "2024-01-10T12:00:00Z",
        "--dry-run",
    ])
    .unwrap();

    assert_eq!(args.config, "tasks/Questlog.toml");
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    assert_eq!(args.now.as_deref(), Some("2024-01-10T12:00:00Z"));
    assert!(args.dry_run);

    assert!(CliArgs::try_parse_from(["questlog", "--log-level", "loud"]).is_err());
}

#[test]
fn log_level_priority() {
    assert_eq!(resolve_level(Some(LogLevel::Warn), Some("debug")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("debug")), tracing::Level::DEBUG);
    assert_eq!(resolve_level(None, Some(" Warning ")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("nonsense")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, None), tracing::Level::INFO);
}

//! Unit tests for configuration resolution and graceful degradation
//!
//! Tests the implementation of:
//! - Config file priority (CLI → ENV → platform file → defaults)
//! - Missing platform file falls back to defaults without failing
//! - Explicitly named config files that cannot be loaded are errors
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate STOCKMETA_CONFIG are marked with #[serial].

use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use stockmeta_common::config::{
    ConfigResolver, ConfigSource, OutputFormat, ResolvedConfig, TomlConfig, CONFIG_ENV_VAR,
};
use stockmeta_common::Error;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_resolver_with_no_overrides_uses_defaults() {
    env::remove_var(CONFIG_ENV_VAR);

    let resolver = ConfigResolver::new(None).with_platform_path(None);
    let ResolvedConfig {
        config,
        source,
        fallback,
    } = resolver.resolve().unwrap();
    assert!(fallback.is_none());

    assert_eq!(source, ConfigSource::Defaults);
    assert_eq!(config, TomlConfig::default());
}

#[test]
#[serial]
fn test_resolver_missing_platform_file_uses_defaults() {
    env::remove_var(CONFIG_ENV_VAR);
    let dir = TempDir::new().unwrap();

    let resolver = ConfigResolver::new(None)
        .with_platform_path(Some(dir.path().join("does-not-exist.toml")));
    let ResolvedConfig {
        config,
        source,
        fallback,
    } = resolver.resolve().unwrap();
    assert!(fallback.is_none());

    assert_eq!(source, ConfigSource::Defaults);
    assert_eq!(config.logging.level, "info");
}

#[test]
#[serial]
fn test_resolver_platform_file() {
    env::remove_var(CONFIG_ENV_VAR);
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "config.toml", "[logging]\nlevel = \"debug\"\n");

    let resolver = ConfigResolver::new(None).with_platform_path(Some(path.clone()));
    let ResolvedConfig {
        config,
        source,
        fallback,
    } = resolver.resolve().unwrap();
    assert!(fallback.is_none());

    assert_eq!(source, ConfigSource::PlatformFile(path));
    assert_eq!(config.logging.level, "debug");
}

#[test]
#[serial]
fn test_resolver_broken_platform_file_degrades_to_defaults() {
    env::remove_var(CONFIG_ENV_VAR);
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "config.toml", "this is = = not toml");

    let resolver = ConfigResolver::new(None).with_platform_path(Some(path.clone()));
    let resolved = resolver.resolve().unwrap();

    assert_eq!(resolved.config, TomlConfig::default());
    assert_eq!(resolved.source, ConfigSource::Defaults);
    let reason = resolved.fallback.expect("fallback reason reported");
    assert!(reason.starts_with("Ignoring unusable config file"));
    assert!(reason.contains(&path.display().to_string()));
}

#[test]
#[serial]
fn test_resolver_env_var_beats_platform_file() {
    let dir = TempDir::new().unwrap();
    let platform = write_config(&dir, "platform.toml", "[output]\nformat = \"text\"\n");
    let from_env = write_config(&dir, "env.toml", "[output]\nformat = \"json\"\n");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let resolver = ConfigResolver::new(None).with_platform_path(Some(platform));
    let ResolvedConfig {
        config,
        source,
        fallback,
    } = resolver.resolve().unwrap();
    assert!(fallback.is_none());

    env::remove_var(CONFIG_ENV_VAR);
    assert_eq!(source, ConfigSource::Environment(from_env));
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
#[serial]
fn test_resolver_cli_arg_beats_env_var() {
    let dir = TempDir::new().unwrap();
    let from_env = write_config(&dir, "env.toml", "[policy]\nmin_score = 10\n");
    let from_cli = write_config(&dir, "cli.toml", "[policy]\nmin_score = 90\n");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let resolver = ConfigResolver::new(Some(from_cli.clone())).with_platform_path(None);
    let ResolvedConfig {
        config,
        source,
        fallback,
    } = resolver.resolve().unwrap();
    assert!(fallback.is_none());

    env::remove_var(CONFIG_ENV_VAR);
    assert_eq!(source, ConfigSource::CommandLine(from_cli));
    assert_eq!(config.policy.min_score, Some(90));
}

#[test]
#[serial]
fn test_resolver_explicit_missing_file_is_error() {
    env::remove_var(CONFIG_ENV_VAR);
    let dir = TempDir::new().unwrap();

    let resolver = ConfigResolver::new(Some(dir.path().join("missing.toml")))
        .with_platform_path(None);
    let err = resolver.resolve().unwrap_err();

    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "full.toml",
        r#"
[logging]
level = "warn"
file = "/tmp/stockmeta.log"

[output]
format = "json"
pretty = true

[policy]
fail_on_error = false
min_score = 60
"#,
    );

    let config = TomlConfig::load(&path).unwrap();
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/stockmeta.log")));
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(config.output.pretty);
    assert!(!config.policy.fail_on_error);
    assert_eq!(config.policy.min_score, Some(60));
}

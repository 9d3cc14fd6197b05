// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fs;
use std::time::Duration;

use jobdash_config::{
	load_config_with, CliOverrides, ConfigError, EnvSource, LogFormat, LogLevel, PathsConfig,
	ThemeName,
};
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> EnvSource {
	EnvSource::from_vars(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
}

#[test]
fn test_first_run_writes_default_file_and_loads() {
	let dir = tempdir().unwrap();
	let paths = PathsConfig::under(dir.path());

	let config = load_config_with(paths.clone(), env(&[]), CliOverrides::default()).unwrap();

	assert!(paths.user_config_file.exists());
	assert_eq!(config.api.base_url, "http://localhost:8000/api");
	assert_eq!(config.logging.file, paths.default_log_file());
}

#[test]
fn test_sources_stack_in_precedence_order() {
	let dir = tempdir().unwrap();
	let paths = PathsConfig::under(dir.path());

	fs::create_dir_all(paths.system_config_file.parent().unwrap()).unwrap();
	fs::write(
		&paths.system_config_file,
		"[ui]\ntheme = \"light\"\ntick_rate_ms = 500\n",
	)
	.unwrap();

	fs::create_dir_all(paths.config_dir()).unwrap();
	fs::write(
		&paths.user_config_file,
		"[api]\nbase_url = \"http://user:8000/api\"\n[ui]\ntick_rate_ms = 200\n",
	)
	.unwrap();

	let explicit = dir.path().join("explicit.toml");
	fs::write(
		&explicit,
		"[api]\nbase_url = \"http://explicit:8000/api\"\n[logging]\nformat = \"json\"\n",
	)
	.unwrap();

	let config = load_config_with(
		paths,
		env(&[("JOBDASH_LOG_LEVEL", "debug"), ("JOBDASH_API_URL", "http://env:8000/api")]),
		CliOverrides {
			api_url: Some("http://cli:8000/api".to_string()),
			config_file: Some(explicit),
			..Default::default()
		},
	)
	.unwrap();

	assert_eq!(config.ui.theme, ThemeName::Light);
	assert_eq!(config.ui.tick_rate, Duration::from_millis(200));
	assert_eq!(config.logging.format, LogFormat::Json);
	assert_eq!(config.logging.level, LogLevel::Debug);
	assert_eq!(config.api.base_url, "http://cli:8000/api");
}

#[test]
fn test_env_overrides_files_without_cli() {
	let dir = tempdir().unwrap();
	let paths = PathsConfig::under(dir.path());

	fs::create_dir_all(paths.config_dir()).unwrap();
	fs::write(&paths.user_config_file, "[api]\nbase_url = \"http://user/api\"\n").unwrap();

	let config = load_config_with(
		paths,
		env(&[("JOBDASH_API_URL", "http://env/api")]),
		CliOverrides::default(),
	)
	.unwrap();
	assert_eq!(config.api.base_url, "http://env/api");
}

#[test]
fn test_missing_explicit_file_fails() {
	let dir = tempdir().unwrap();
	let err = load_config_with(
		PathsConfig::under(dir.path()),
		env(&[]),
		CliOverrides {
			config_file: Some(dir.path().join("nope.toml")),
			..Default::default()
		},
	)
	.unwrap_err();
	assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn test_zero_tick_rate_from_env_fails_validation() {
	let dir = tempdir().unwrap();
	let err = load_config_with(
		PathsConfig::under(dir.path()),
		env(&[("JOBDASH_TICK_RATE_MS", "0")]),
		CliOverrides::default(),
	)
	.unwrap_err();
	assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

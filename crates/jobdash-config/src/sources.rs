// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: files, environment, CLI, defaults.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, trace, warn};

use crate::layer::ConfigLayer;
use crate::paths::PathsConfig;
use crate::ConfigError;

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	SystemFile = 20,
	UserFile = 30,
	ExplicitFile = 40,
	Environment = 50,
	Cli = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	/// Name for logging
	fn name(&self) -> &'static str;

	fn precedence(&self) -> Precedence;

	/// Load configuration layer from this source
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		// Empty; defaults are applied when the runtime config is built.
		Ok(ConfigLayer::default())
	}
}

/// File-based configuration source (TOML).
pub struct FileSource {
	path: PathBuf,
	precedence: Precedence,
	name: &'static str,
	required: bool,
}

impl FileSource {
	/// System config: /etc/jobdash/config.toml
	pub fn system(paths: &PathsConfig) -> Self {
		Self {
			path: paths.system_config_file.clone(),
			precedence: Precedence::SystemFile,
			name: "system-config",
			required: false,
		}
	}

	/// User config: ~/.config/jobdash/config.toml
	pub fn user(paths: &PathsConfig) -> Self {
		Self {
			path: paths.user_config_file.clone(),
			precedence: Precedence::UserFile,
			name: "user-config",
			required: false,
		}
	}

	/// File named with `--config`. Unlike the XDG files it must exist.
	pub fn explicit(path: PathBuf) -> Self {
		Self {
			path,
			precedence: Precedence::ExplicitFile,
			name: "explicit-config",
			required: true,
		}
	}
}

impl ConfigSource for FileSource {
	fn name(&self) -> &'static str {
		self.name
	}
	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			if self.required {
				return Err(ConfigError::FileNotFound(self.path.clone()));
			}
			debug!(path = %self.path.display(), source = self.name, "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), source = self.name, "loading config file");

		let content = std::fs::read_to_string(&self.path)?;
		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!(source = self.name, "parsed config layer");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// | variable | field |
/// |---|---|
/// | `JOBDASH_API_URL` | `api.base_url` |
/// | `JOBDASH_TICK_RATE_MS` | `ui.tick_rate_ms` |
/// | `JOBDASH_LOCALE` | `ui.locale` |
/// | `JOBDASH_THEME` | `ui.theme` |
/// | `JOBDASH_LOG_LEVEL` | `logging.level` |
/// | `JOBDASH_LOG_FORMAT` | `logging.format` |
/// | `JOBDASH_LOG_FILE` | `logging.file` |
pub struct EnvSource {
	vars: HashMap<String, String>,
}

impl EnvSource {
	/// Snapshot of the process environment.
	pub fn from_process() -> Self {
		Self::from_vars(std::env::vars())
	}

	pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
		Self {
			vars: vars
				.into_iter()
				.filter(|(k, _)| k.starts_with("JOBDASH_"))
				.collect(),
		}
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		let mut layer = ConfigLayer::default();

		for (key, value) in &self.vars {
			let value = value.trim().to_string();
			if value.is_empty() {
				continue;
			}

			trace!(key = %key, "processing env var");

			match key.as_str() {
				"JOBDASH_API_URL" => layer.api_mut().base_url = Some(value),
				"JOBDASH_TICK_RATE_MS" => match value.parse() {
					Ok(ms) => layer.ui_mut().tick_rate_ms = Some(ms),
					Err(_) => warn!(key = %key, value = %value, "ignoring non-numeric tick rate"),
				},
				"JOBDASH_LOCALE" => layer.ui_mut().locale = Some(value),
				"JOBDASH_THEME" => layer.ui_mut().theme = Some(value),
				"JOBDASH_LOG_LEVEL" => layer.logging_mut().level = Some(value),
				"JOBDASH_LOG_FORMAT" => layer.logging_mut().format = Some(value),
				"JOBDASH_LOG_FILE" => layer.logging_mut().file = Some(PathBuf::from(value)),
				_ => {}
			}
		}

		Ok(layer)
	}
}

/// CLI argument overrides.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub api_url: Option<String>,
	pub log_level: Option<String>,
	pub log_format: Option<String>,
	pub config_file: Option<PathBuf>,
}

/// CLI override source.
pub struct CliSource {
	overrides: CliOverrides,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading CLI overrides");
		let mut layer = ConfigLayer::default();

		if let Some(ref url) = self.overrides.api_url {
			layer.api_mut().base_url = Some(url.clone());
		}
		if let Some(ref level) = self.overrides.log_level {
			layer.logging_mut().level = Some(level.clone());
		}
		if let Some(ref format) = self.overrides.log_format {
			layer.logging_mut().format = Some(format.clone());
		}

		Ok(layer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Cli > Precedence::Environment);
		assert!(Precedence::Environment > Precedence::ExplicitFile);
		assert!(Precedence::ExplicitFile > Precedence::UserFile);
		assert!(Precedence::UserFile > Precedence::SystemFile);
		assert!(Precedence::SystemFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_source_returns_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert!(layer.api.is_none());
		assert!(layer.ui.is_none());
	}

	#[test]
	fn test_missing_optional_file_returns_empty() {
		let source = FileSource::user(&PathsConfig::under("/nonexistent"));
		let layer = source.load().unwrap();
		assert!(layer.api.is_none());
	}

	#[test]
	fn test_missing_explicit_file_is_error() {
		let source = FileSource::explicit(PathBuf::from("/nonexistent/jobdash.toml"));
		assert!(matches!(source.load(), Err(ConfigError::FileNotFound(_))));
	}

	#[test]
	fn test_malformed_file_reports_path() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[api\nbase_url = 1").unwrap();

		let source = FileSource::explicit(file.path().to_path_buf());
		match source.load() {
			Err(ConfigError::TomlParse { path, .. }) => assert_eq!(path, file.path()),
			other => panic!("expected parse error, got {other:?}"),
		}
	}

	#[test]
	fn test_env_source_maps_variables() {
		let source = EnvSource::from_vars(vars(&[
			("JOBDASH_API_URL", "http://env/api"),
			("JOBDASH_TICK_RATE_MS", "50"),
			("JOBDASH_THEME", "light"),
			("JOBDASH_LOG_FILE", "/tmp/jd.log"),
			("HOME", "/root"),
		]));
		let layer = source.load().unwrap();

		assert_eq!(layer.api.unwrap().base_url.as_deref(), Some("http://env/api"));
		let ui = layer.ui.unwrap();
		assert_eq!(ui.tick_rate_ms, Some(50));
		assert_eq!(ui.theme.as_deref(), Some("light"));
		assert_eq!(
			layer.logging.unwrap().file,
			Some(PathBuf::from("/tmp/jd.log"))
		);
	}

	#[test]
	fn test_env_source_skips_blank_and_bad_values() {
		let source = EnvSource::from_vars(vars(&[
			("JOBDASH_API_URL", "   "),
			("JOBDASH_TICK_RATE_MS", "fast"),
		]));
		let layer = source.load().unwrap();
		assert!(layer.api.is_none());
		assert!(layer.ui.map(|ui| ui.tick_rate_ms.is_none()).unwrap_or(true));
	}

	#[test]
	fn test_cli_source() {
		let source = CliSource::new(CliOverrides {
			api_url: Some("http://cli/api".to_string()),
			log_level: Some("trace".to_string()),
			log_format: Some("json".to_string()),
			..Default::default()
		});
		let layer = source.load().unwrap();
		assert_eq!(layer.api.unwrap().base_url.as_deref(), Some("http://cli/api"));
		let logging = layer.logging.unwrap();
		assert_eq!(logging.level.as_deref(), Some("trace"));
		assert_eq!(logging.format.as_deref(), Some("json"));
	}
}

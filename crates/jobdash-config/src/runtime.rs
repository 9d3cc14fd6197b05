// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime configuration types with resolved defaults.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::layer::*;
use crate::paths::PathsConfig;
use crate::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// The final, validated configuration.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardConfig {
	pub api: ApiConfig,
	pub ui: UiConfig,
	pub logging: LoggingConfig,

	/// Resolved XDG paths (not serialized)
	#[serde(skip)]
	pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
	pub base_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UiConfig {
	#[serde(serialize_with = "serialize_millis")]
	pub tick_rate: Duration,
	/// Locale tag for date rendering; `None` means detect from the system.
	pub locale: Option<String>,
	pub theme: ThemeName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
	#[default]
	Dark,
	Light,
}

impl ThemeName {
	pub fn as_str(&self) -> &'static str {
		match self {
			ThemeName::Dark => "dark",
			ThemeName::Light => "light",
		}
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct LoggingConfig {
	pub level: LogLevel,
	pub file: PathBuf,
	pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Error,
	Warn,
	#[default]
	Info,
	Debug,
	Trace,
}

impl LogLevel {
	/// Directive string understood by `EnvFilter`.
	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Error => "error",
			LogLevel::Warn => "warn",
			LogLevel::Info => "info",
			LogLevel::Debug => "debug",
			LogLevel::Trace => "trace",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
	Compact,
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
	S: serde::Serializer,
{
	serializer.serialize_u64(duration.as_millis() as u64)
}

impl DashboardConfig {
	/// Build runtime config from a merged layer and paths.
	pub fn from_layer(layer: ConfigLayer, paths: PathsConfig) -> Result<Self, ConfigError> {
		let api = build_api_config(layer.api);
		let ui = build_ui_config(layer.ui)?;
		let logging = build_logging_config(layer.logging, &paths)?;

		Ok(Self {
			api,
			ui,
			logging,
			paths,
		})
	}

	/// Defaults only, no files or environment.
	pub fn defaults(paths: PathsConfig) -> Self {
		let logging = LoggingConfig {
			level: LogLevel::default(),
			file: paths.default_log_file(),
			format: LogFormat::default(),
		};
		Self {
			api: ApiConfig {
				base_url: DEFAULT_API_URL.to_string(),
			},
			ui: UiConfig {
				tick_rate: Duration::from_millis(DEFAULT_TICK_RATE_MS),
				locale: None,
				theme: ThemeName::default(),
			},
			logging,
			paths,
		}
	}
}

fn build_api_config(layer: Option<ApiLayer>) -> ApiConfig {
	let layer = layer.unwrap_or_default();
	ApiConfig {
		base_url: layer
			.base_url
			.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
	}
}

fn build_ui_config(layer: Option<UiLayer>) -> Result<UiConfig, ConfigError> {
	let layer = layer.unwrap_or_default();
	Ok(UiConfig {
		tick_rate: Duration::from_millis(layer.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS)),
		locale: layer.locale,
		theme: parse_theme(layer.theme.as_deref())?,
	})
}

fn build_logging_config(
	layer: Option<LoggingLayer>,
	paths: &PathsConfig,
) -> Result<LoggingConfig, ConfigError> {
	let layer = layer.unwrap_or_default();
	Ok(LoggingConfig {
		level: parse_log_level(layer.level.as_deref())?,
		file: layer.file.unwrap_or_else(|| paths.default_log_file()),
		format: parse_log_format(layer.format.as_deref())?,
	})
}

fn parse_theme(s: Option<&str>) -> Result<ThemeName, ConfigError> {
	match s {
		None | Some("dark") => Ok(ThemeName::Dark),
		Some("light") => Ok(ThemeName::Light),
		Some(other) => Err(ConfigError::invalid_value(
			"ui.theme",
			format!("expected dark or light, got {other:?}"),
		)),
	}
}

fn parse_log_level(s: Option<&str>) -> Result<LogLevel, ConfigError> {
	match s {
		Some("error") => Ok(LogLevel::Error),
		Some("warn") => Ok(LogLevel::Warn),
		None | Some("info") => Ok(LogLevel::Info),
		Some("debug") => Ok(LogLevel::Debug),
		Some("trace") => Ok(LogLevel::Trace),
		Some(other) => Err(ConfigError::invalid_value(
			"logging.level",
			format!("expected error, warn, info, debug or trace, got {other:?}"),
		)),
	}
}

fn parse_log_format(s: Option<&str>) -> Result<LogFormat, ConfigError> {
	match s {
		Some("json") => Ok(LogFormat::Json),
		Some("compact") => Ok(LogFormat::Compact),
		None | Some("pretty") => Ok(LogFormat::Pretty),
		Some(other) => Err(ConfigError::invalid_value(
			"logging.format",
			format!("expected pretty, json or compact, got {other:?}"),
		)),
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for jobdash.
//!
//! This crate provides:
//! - XDG Base Directory compliant path resolution
//! - Layered configuration from multiple sources
//! - TOML configuration file parsing
//! - Environment variable overrides
//! - Configuration validation

pub mod defaults;
pub mod error;
pub mod layer;
pub mod paths;
pub mod registry;
pub mod runtime;
pub mod sources;
pub mod validation;

pub use defaults::{ensure_default_config, DEFAULT_CONFIG_TEMPLATE};
pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use paths::PathsConfig;
pub use registry::ConfigRegistry;
pub use runtime::{DashboardConfig, LogFormat, LogLevel, ThemeName};
pub use sources::{CliOverrides, ConfigSource, EnvSource, Precedence};

/// Load configuration from all sources with CLI overrides on top.
///
/// If no user config file exists, a commented default one is created at
/// `~/.config/jobdash/config.toml`.
pub fn load_config(cli: CliOverrides) -> Result<DashboardConfig, ConfigError> {
	let paths = paths::resolve_xdg_paths()?;
	load_config_with(paths, EnvSource::from_process(), cli)
}

/// Same as [`load_config`] with explicit paths and environment.
pub fn load_config_with(
	paths: PathsConfig,
	env: EnvSource,
	cli: CliOverrides,
) -> Result<DashboardConfig, ConfigError> {
	defaults::ensure_default_config(&paths.user_config_file)?;

	let mut registry = ConfigRegistry::new();

	registry.register(Box::new(sources::DefaultsSource));
	registry.register(Box::new(sources::FileSource::system(&paths)));
	registry.register(Box::new(sources::FileSource::user(&paths)));
	if let Some(ref file) = cli.config_file {
		registry.register(Box::new(sources::FileSource::explicit(file.clone())));
	}
	registry.register(Box::new(env));
	registry.register(Box::new(sources::CliSource::new(cli)));

	registry.load(paths)
}

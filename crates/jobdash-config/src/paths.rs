// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant path resolution.

use std::path::PathBuf;

use crate::ConfigError;

const APP_DIR: &str = "jobdash";
const SYSTEM_CONFIG_FILE: &str = "/etc/jobdash/config.toml";

/// Resolved XDG paths for jobdash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
	/// User config file: ~/.config/jobdash/config.toml
	pub user_config_file: PathBuf,
	/// System config file: /etc/jobdash/config.toml
	pub system_config_file: PathBuf,
	/// State directory: ~/.local/state/jobdash/
	pub state_dir: PathBuf,
}

impl PathsConfig {
	/// Paths rooted under `base`, for tests and sandboxed runs.
	pub fn under(base: impl Into<PathBuf>) -> Self {
		let base = base.into();
		Self {
			user_config_file: base.join("config").join(APP_DIR).join("config.toml"),
			system_config_file: base.join("etc").join(APP_DIR).join("config.toml"),
			state_dir: base.join("state").join(APP_DIR),
		}
	}

	pub fn config_dir(&self) -> PathBuf {
		self
			.user_config_file
			.parent()
			.map(|p| p.to_path_buf())
			.unwrap_or_else(|| self.user_config_file.clone())
	}

	/// Where the TUI writes its log when none is configured.
	pub fn default_log_file(&self) -> PathBuf {
		self.state_dir.join("jobdash.log")
	}
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			user_config_file: PathBuf::from("~/.config/jobdash/config.toml"),
			system_config_file: PathBuf::from(SYSTEM_CONFIG_FILE),
			state_dir: PathBuf::from("~/.local/state/jobdash"),
		}
	}
}

/// Resolve XDG paths according to the Base Directory Specification.
///
/// - XDG_CONFIG_HOME or ~/.config
/// - XDG_STATE_HOME or ~/.local/state
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

	let config_home = std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".config"));

	let state_home = std::env::var_os("XDG_STATE_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".local/state"));

	tracing::debug!(
		config_home = %config_home.display(),
		state_home = %state_home.display(),
		"resolved XDG paths"
	);

	Ok(PathsConfig {
		user_config_file: config_home.join(APP_DIR).join("config.toml"),
		system_config_file: PathBuf::from(SYSTEM_CONFIG_FILE),
		state_dir: state_home.join(APP_DIR),
	})
}

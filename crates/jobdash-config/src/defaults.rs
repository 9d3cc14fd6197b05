// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Default configuration file generation.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::ConfigError;

/// Written to `~/.config/jobdash/config.toml` when no user config exists.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"#
# jobdash configuration
# Location: ~/.config/jobdash/config.toml
#
# Every setting can also be given as an environment variable (JOBDASH_*)
# or a command line flag; those take precedence over this file.
#

[api]
# Root of the jobs backend API. (JOBDASH_API_URL, --api-url)
base_url = "http://localhost:8000/api"

[ui]
# How often the terminal UI redraws, in milliseconds. (JOBDASH_TICK_RATE_MS)
tick_rate_ms = 100

# Locale used for dates, e.g. "en_US" or "de_DE". Detected from the
# system when unset. (JOBDASH_LOCALE)
# locale = "en_US"

# Color theme: dark, light (JOBDASH_THEME)
theme = "dark"

[logging]
# Log level: error, warn, info, debug, trace (JOBDASH_LOG_LEVEL, --log-level)
level = "info"

# Log format: pretty, json, compact (JOBDASH_LOG_FORMAT)
format = "pretty"

# The terminal UI logs here; defaults to ~/.local/state/jobdash/jobdash.log
# (JOBDASH_LOG_FILE)
# file = "/tmp/jobdash.log"
"#;

/// Create a default config file if none exists.
///
/// Returns `true` if a new config file was created, `false` if one already existed.
pub fn ensure_default_config(config_file_path: &Path) -> Result<bool, ConfigError> {
	if config_file_path.exists() {
		debug!(path = %config_file_path.display(), "config file already exists");
		return Ok(false);
	}

	if let Some(parent) = config_file_path.parent() {
		if !parent.exists() {
			debug!(path = %parent.display(), "creating config directory");
			fs::create_dir_all(parent)?;
		}
	}

	info!(path = %config_file_path.display(), "creating default config file");
	fs::write(config_file_path, DEFAULT_CONFIG_TEMPLATE)?;

	Ok(true)
}

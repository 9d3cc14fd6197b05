// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration validation rules.

use url::Url;

use crate::runtime::DashboardConfig;
use crate::ConfigError;

/// Validate the configuration.
pub fn validate_config(config: &DashboardConfig) -> Result<(), ConfigError> {
	validate_api(config)?;
	validate_ui(config)?;

	Ok(())
}

fn validate_api(config: &DashboardConfig) -> Result<(), ConfigError> {
	let base_url = config.api.base_url.trim();
	if base_url.is_empty() {
		return Err(ConfigError::invalid_value(
			"api.base_url",
			"base_url cannot be empty",
		));
	}

	let url = Url::parse(base_url)
		.map_err(|e| ConfigError::invalid_value("api.base_url", e.to_string()))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(ConfigError::invalid_value(
			"api.base_url",
			format!("unsupported scheme {:?}", url.scheme()),
		));
	}

	Ok(())
}

fn validate_ui(config: &DashboardConfig) -> Result<(), ConfigError> {
	if config.ui.tick_rate.is_zero() {
		return Err(ConfigError::invalid_value(
			"ui.tick_rate_ms",
			"must be at least 1",
		));
	}

	Ok(())
}

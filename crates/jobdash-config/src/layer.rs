// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer for merging from multiple sources.

use serde::Deserialize;
use std::path::PathBuf;

/// Partial configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
	#[serde(default)]
	pub api: Option<ApiLayer>,
	#[serde(default)]
	pub ui: Option<UiLayer>,
	#[serde(default)]
	pub logging: Option<LoggingLayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiLayer {
	#[serde(default)]
	pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiLayer {
	#[serde(default)]
	pub tick_rate_ms: Option<u64>,
	#[serde(default)]
	pub locale: Option<String>,
	#[serde(default)]
	pub theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingLayer {
	#[serde(default)]
	pub level: Option<String>,
	#[serde(default)]
	pub file: Option<PathBuf>,
	#[serde(default)]
	pub format: Option<String>,
}

impl ConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ConfigLayer) {
		merge_option(&mut self.api, other.api, ApiLayer::merge);
		merge_option(&mut self.ui, other.ui, UiLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingLayer::merge);
	}

	pub(crate) fn api_mut(&mut self) -> &mut ApiLayer {
		self.api.get_or_insert_with(ApiLayer::default)
	}

	pub(crate) fn ui_mut(&mut self) -> &mut UiLayer {
		self.ui.get_or_insert_with(UiLayer::default)
	}

	pub(crate) fn logging_mut(&mut self) -> &mut LoggingLayer {
		self.logging.get_or_insert_with(LoggingLayer::default)
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

fn take_some<T>(target: &mut Option<T>, source: Option<T>) {
	if source.is_some() {
		*target = source;
	}
}

impl ApiLayer {
	fn merge(&mut self, other: ApiLayer) {
		take_some(&mut self.base_url, other.base_url);
	}
}

impl UiLayer {
	fn merge(&mut self, other: UiLayer) {
		take_some(&mut self.tick_rate_ms, other.tick_rate_ms);
		take_some(&mut self.locale, other.locale);
		take_some(&mut self.theme, other.theme);
	}
}

impl LoggingLayer {
	fn merge(&mut self, other: LoggingLayer) {
		take_some(&mut self.level, other.level);
		take_some(&mut self.file, other.file);
		take_some(&mut self.format, other.format);
	}
}

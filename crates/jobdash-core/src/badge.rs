// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Badge color lookup for scope and source tags.
//!
//! Both lookups are total: a value outside the known set maps to
//! [`BadgeColor::Neutral`] and never errors.

use serde::{Deserialize, Serialize};

/// Display class for a badge. The terminal theme maps each to a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
	Blue,
	Green,
	Purple,
	Indigo,
	Pink,
	Orange,
	Yellow,
	Neutral,
}

/// Scope tags with a dedicated color.
pub const KNOWN_SCOPES: &[(&str, BadgeColor)] = &[
	("Austin", BadgeColor::Blue),
	("US Remote", BadgeColor::Green),
	("Unknown", BadgeColor::Neutral),
];

/// Ingestion sources with a dedicated color.
pub const KNOWN_SOURCES: &[(&str, BadgeColor)] = &[
	("remotive", BadgeColor::Purple),
	("greenhouse", BadgeColor::Indigo),
	("lever", BadgeColor::Pink),
	("wwr", BadgeColor::Orange),
];

/// Color of the "Stretch" marker badge.
pub const STRETCH_BADGE: BadgeColor = BadgeColor::Yellow;

pub fn scope_badge(scope: &str) -> BadgeColor {
	lookup(KNOWN_SCOPES, scope)
}

pub fn source_badge(source: &str) -> BadgeColor {
	lookup(KNOWN_SOURCES, source)
}

fn lookup(table: &[(&str, BadgeColor)], value: &str) -> BadgeColor {
	table
		.iter()
		.find(|(name, _)| *name == value)
		.map(|(_, color)| *color)
		.unwrap_or(BadgeColor::Neutral)
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// Which job set the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
	/// Everything posted today, one unpaged response.
	#[default]
	Today,
	/// Every job, paged and filtered.
	All,
}

impl ViewMode {
	pub fn title(&self) -> &'static str {
		match self {
			ViewMode::Today => "Today's Jobs",
			ViewMode::All => "All Jobs",
		}
	}

	pub fn is_paged(&self) -> bool {
		matches!(self, ViewMode::All)
	}
}

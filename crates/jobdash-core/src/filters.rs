// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// One of the four filter inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
	Search,
	Company,
	Scope,
	Source,
}

impl FilterField {
	pub const ALL: [FilterField; 4] = [
		FilterField::Company,
		FilterField::Scope,
		FilterField::Source,
		FilterField::Search,
	];

	/// Query parameter name understood by the backend.
	pub fn param(&self) -> &'static str {
		match self {
			FilterField::Search => "search",
			FilterField::Company => "company",
			FilterField::Scope => "scope",
			FilterField::Source => "source",
		}
	}
}

/// Transient filter values. An empty string means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
	pub search: String,
	pub company: String,
	pub scope: String,
	pub source: String,
}

impl Filters {
	pub fn get(&self, field: FilterField) -> &str {
		match field {
			FilterField::Search => &self.search,
			FilterField::Company => &self.company,
			FilterField::Scope => &self.scope,
			FilterField::Source => &self.source,
		}
	}

	/// Set a field. Returns `true` if the stored value changed.
	pub fn set(&mut self, field: FilterField, value: impl Into<String>) -> bool {
		let value = value.into();
		let slot = match field {
			FilterField::Search => &mut self.search,
			FilterField::Company => &mut self.company,
			FilterField::Scope => &mut self.scope,
			FilterField::Source => &mut self.source,
		};
		if *slot == value {
			return false;
		}
		*slot = value;
		true
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}

	pub fn is_empty(&self) -> bool {
		FilterField::ALL.iter().all(|f| self.get(*f).is_empty())
	}

	/// Non-empty filters as `(param, value)` pairs, in a stable order.
	pub fn active(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
		FilterField::ALL
			.iter()
			.map(move |f| (f.param(), self.get(*f)))
			.filter(|(_, v)| !v.is_empty())
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use jobdash_core::{FilterField, JobStats, KNOWN_SOURCES};

/// Choices offered by the company, scope and source selectors.
///
/// Each list starts with `""`, the "All" option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
	pub companies: Vec<String>,
	pub scopes: Vec<String>,
	pub sources: Vec<String>,
}

impl FilterOptions {
	pub fn from_stats(stats: Option<&JobStats>) -> Self {
		let with_all = |keys: Vec<String>| {
			let mut options = Vec::with_capacity(keys.len() + 1);
			options.push(String::new());
			options.extend(keys);
			options
		};

		let (companies, scopes) = match stats {
			Some(stats) => (
				stats.jobs_by_company.keys().cloned().collect(),
				stats.jobs_by_scope.keys().cloned().collect(),
			),
			None => (Vec::new(), Vec::new()),
		};
		let sources = KNOWN_SOURCES
			.iter()
			.map(|(name, _)| (*name).to_string())
			.collect();

		Self {
			companies: with_all(companies),
			scopes: with_all(scopes),
			sources: with_all(sources),
		}
	}

	/// Options for a selector field. Search is free text and has none.
	pub fn for_field(&self, field: FilterField) -> &[String] {
		match field {
			FilterField::Company => &self.companies,
			FilterField::Scope => &self.scopes,
			FilterField::Source => &self.sources,
			FilterField::Search => &[],
		}
	}
}

/// The option after (or before) `current`, wrapping around.
///
/// A value that is not in the list (stale after a stats reload) restarts the
/// cycle from the first option.
pub fn cycle_option(options: &[String], current: &str, forward: bool) -> Option<String> {
	if options.is_empty() {
		return None;
	}
	let len = options.len();
	let next = match options.iter().position(|o| o == current) {
		Some(i) if forward => (i + 1) % len,
		Some(i) => (i + len - 1) % len,
		None => 0,
	};
	Some(options[next].clone())
}

#[cfg(test)]
mod tests {
	use super::*;
	use indexmap::IndexMap;

	fn stats() -> JobStats {
		JobStats {
			total_jobs: 3,
			jobs_today: 1,
			jobs_by_company: IndexMap::from([("Zed".to_string(), 2), ("Acme".to_string(), 1)]),
			jobs_by_scope: IndexMap::from([("US Remote".to_string(), 2), ("Austin".to_string(), 1)]),
		}
	}

	#[test]
	fn test_options_lead_with_all() {
		let options = FilterOptions::from_stats(Some(&stats()));
		assert_eq!(options.companies, vec!["", "Zed", "Acme"]);
		assert_eq!(options.scopes, vec!["", "US Remote", "Austin"]);
		assert_eq!(options.sources[0], "");
		assert_eq!(options.sources[1], "remotive");
	}

	#[test]
	fn test_options_without_stats() {
		let options = FilterOptions::from_stats(None);
		assert_eq!(options.companies, vec![""]);
		assert_eq!(options.scopes, vec![""]);
		assert_eq!(options.sources.len(), KNOWN_SOURCES.len() + 1);
		assert!(options.for_field(FilterField::Search).is_empty());
	}

	#[test]
	fn test_cycle_wraps_both_ways() {
		let options: Vec<String> = ["", "a", "b"].iter().map(|s| s.to_string()).collect();
		assert_eq!(cycle_option(&options, "", true).as_deref(), Some("a"));
		assert_eq!(cycle_option(&options, "b", true).as_deref(), Some(""));
		assert_eq!(cycle_option(&options, "", false).as_deref(), Some("b"));
		assert_eq!(cycle_option(&options, "a", false).as_deref(), Some(""));
	}

	#[test]
	fn test_cycle_unknown_value_restarts() {
		let options: Vec<String> = ["", "a"].iter().map(|s| s.to_string()).collect();
		assert_eq!(cycle_option(&options, "gone", true).as_deref(), Some(""));
		assert_eq!(cycle_option(&[], "", true), None);
	}
}

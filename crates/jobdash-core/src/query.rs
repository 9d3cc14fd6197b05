// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::{Filters, PAGE_SIZE};

/// Parameters of a paged, filtered jobs request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
	pub page: u32,
	pub per_page: u32,
	pub filters: Filters,
}

impl JobQuery {
	pub fn new(page: u32, filters: Filters) -> Self {
		Self {
			page,
			per_page: PAGE_SIZE,
			filters,
		}
	}

	/// Query string pairs. Empty filters are omitted, not sent as `key=`.
	pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = vec![
			("page", self.page.to_string()),
			("per_page", self.per_page.to_string()),
		];
		pairs.extend(self.filters.active().map(|(k, v)| (k, v.to_string())));
		pairs
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::FilterField;

	#[test]
	fn test_unfiltered_query_sends_only_paging() {
		let query = JobQuery::new(1, Filters::default());
		assert_eq!(
			query.to_pairs(),
			vec![("page", "1".to_string()), ("per_page", "20".to_string())]
		);
	}

	#[test]
	fn test_filters_are_appended_when_set() {
		let mut filters = Filters::default();
		filters.set(FilterField::Company, "Acme");
		filters.set(FilterField::Search, "rust dev");
		let pairs = JobQuery::new(4, filters).to_pairs();
		assert_eq!(pairs.len(), 4);
		assert!(pairs.contains(&("company", "Acme".to_string())));
		assert!(pairs.contains(&("search", "rust dev".to_string())));
		assert!(!pairs.iter().any(|(k, _)| *k == "scope" || *k == "source"));
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::PAGE_SIZE;

/// `ceil(total / PAGE_SIZE)`.
pub fn total_pages_for(total: u64) -> u32 {
	let pages = total.div_ceil(u64::from(PAGE_SIZE));
	u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Page cursor. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
	page: u32,
	total_pages: u32,
}

impl Default for Pagination {
	fn default() -> Self {
		Self {
			page: 1,
			total_pages: 1,
		}
	}
}

impl Pagination {
	pub fn page(&self) -> u32 {
		self.page
	}

	pub fn total_pages(&self) -> u32 {
		self.total_pages
	}

	pub fn set_total_pages(&mut self, total_pages: u32) {
		self.total_pages = total_pages;
	}

	/// Back to page 1. Returns `true` if the cursor moved.
	pub fn reset(&mut self) -> bool {
		let moved = self.page != 1;
		self.page = 1;
		moved
	}

	pub fn has_prev(&self) -> bool {
		self.page > 1
	}

	pub fn has_next(&self) -> bool {
		self.page < self.total_pages
	}

	/// Returns `true` if the cursor moved.
	pub fn next(&mut self) -> bool {
		if !self.has_next() {
			return false;
		}
		self.page += 1;
		true
	}

	/// Returns `true` if the cursor moved.
	pub fn prev(&mut self) -> bool {
		if !self.has_prev() {
			return false;
		}
		self.page -= 1;
		true
	}

	/// Controls are only worth drawing when there is somewhere to go.
	pub fn is_visible(&self) -> bool {
		self.total_pages > 1
	}
}

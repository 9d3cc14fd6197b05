// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use jobdash_core::Pagination;
use jobdash_tui_theme::Theme;
use ratatui::{
	buffer::Buffer,
	layout::Rect,
	text::{Line, Span},
	widgets::Widget,
};

const PREVIOUS: &str = "◀ Previous (p)";
const NEXT: &str = "(n) Next ▶";

pub fn page_label(pagination: &Pagination) -> String {
	format!("Page {} of {}", pagination.page(), pagination.total_pages())
}

/// Centered `Previous  Page X of Y  Next` row.
///
/// A control at its bound is drawn in the disabled style. Callers decide
/// visibility with [`Pagination::is_visible`].
pub struct PaginationBar<'a> {
	pagination: &'a Pagination,
	theme: &'a Theme,
}

impl<'a> PaginationBar<'a> {
	pub fn new(pagination: &'a Pagination, theme: &'a Theme) -> Self {
		Self { pagination, theme }
	}
}

impl Widget for PaginationBar<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		let enabled = |on: bool| {
			if on {
				self.theme.text.link
			} else {
				self.theme.text.disabled
			}
		};

		let line = Line::from(vec![
			Span::styled(PREVIOUS, enabled(self.pagination.has_prev())),
			Span::raw("   "),
			Span::styled(page_label(self.pagination), self.theme.text.normal),
			Span::raw("   "),
			Span::styled(NEXT, enabled(self.pagination.has_next())),
		]);

		let width = (line.width() as u16).min(area.width);
		let x = area.x + (area.width - width) / 2;
		buf.set_line(x, area.y, &line, width);
	}
}

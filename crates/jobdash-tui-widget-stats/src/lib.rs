// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use jobdash_core::{format_count, JobStats};
use jobdash_tui_core::truncate_with_ellipsis;
use jobdash_tui_theme::Theme;
use ratatui::{
	buffer::Buffer,
	layout::{Constraint, Layout, Rect},
	text::{Line, Span},
	widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const NOT_AVAILABLE: &str = "N/A";

/// Label and rendered value of each summary card, left to right.
pub fn stat_cards(stats: &JobStats) -> [(&'static str, String); 4] {
	[
		("Total Jobs", format_count(stats.total_jobs)),
		("Jobs Today", stats.jobs_today.to_string()),
		(
			"Top Company",
			stats.top_company().unwrap_or(NOT_AVAILABLE).to_string(),
		),
		// Keyed by scope: the backend has no per-source breakdown.
		(
			"Top Source",
			stats.top_scope().unwrap_or(NOT_AVAILABLE).to_string(),
		),
	]
}

/// Row of four bordered cards. Needs three rows of height.
pub struct StatsCards<'a> {
	stats: &'a JobStats,
	theme: &'a Theme,
}

impl<'a> StatsCards<'a> {
	pub fn new(stats: &'a JobStats, theme: &'a Theme) -> Self {
		Self { stats, theme }
	}
}

impl Widget for StatsCards<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

		for ((label, value), column) in stat_cards(self.stats).into_iter().zip(columns.iter()) {
			let block = Block::default()
				.borders(Borders::ALL)
				.border_type(BorderType::Rounded)
				.border_style(self.theme.borders.normal)
				.title(Span::styled(format!(" {label} "), self.theme.text.dim));

			let inner_width = column.width.saturating_sub(2) as usize;
			let value = truncate_with_ellipsis(&value, inner_width);
			Paragraph::new(Line::from(Span::styled(value, self.theme.text.bold)))
				.block(block)
				.render(*column, buf);
		}
	}
}

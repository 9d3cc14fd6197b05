// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use jobdash_tui_widget_filter_bar::FILTER_BAR_HEIGHT;
use ratatui::layout::{Constraint, Layout, Rect};

const HEADER_HEIGHT: u16 = 1;
const STATS_HEIGHT: u16 = 3;
/// Tabs only, no filter row.
const TABS_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardAreas {
	pub header: Rect,
	pub stats: Option<Rect>,
	pub controls: Rect,
	pub list: Rect,
	pub pagination: Option<Rect>,
	pub status: Rect,
}

/// Split the screen top to bottom. Optional rows take no space when absent.
pub fn dashboard_layout(
	area: Rect,
	show_stats: bool,
	show_filters: bool,
	show_pagination: bool,
) -> DashboardAreas {
	let controls_height = if show_filters {
		FILTER_BAR_HEIGHT
	} else {
		TABS_HEIGHT
	};

	let rows = Layout::vertical([
		Constraint::Length(HEADER_HEIGHT),
		Constraint::Length(if show_stats { STATS_HEIGHT } else { 0 }),
		Constraint::Length(controls_height),
		Constraint::Min(3),
		Constraint::Length(u16::from(show_pagination)),
		Constraint::Length(1),
	])
	.split(area);

	DashboardAreas {
		header: rows[0],
		stats: show_stats.then_some(rows[1]),
		controls: rows[2],
		list: rows[3],
		pagination: show_pagination.then_some(rows[4]),
		status: rows[5],
	}
}

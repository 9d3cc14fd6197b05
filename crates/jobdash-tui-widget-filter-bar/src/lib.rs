// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use jobdash_core::{FilterField, Filters, ViewMode};
use jobdash_tui_theme::Theme;
use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::{Modifier, Style},
	text::{Line, Span},
	widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Rows needed including borders.
pub const FILTER_BAR_HEIGHT: u16 = 4;

const SEARCH_PLACEHOLDER: &str = "Search jobs...";

/// What a selector shows for `value`; the empty value is the "All" option.
pub fn option_label(field: FilterField, value: &str) -> &str {
	if !value.is_empty() {
		return value;
	}
	match field {
		FilterField::Company => "All Companies",
		FilterField::Scope => "All Scopes",
		FilterField::Source => "All Sources",
		FilterField::Search => "",
	}
}

/// View tabs, plus the search box and selectors in the all-jobs view.
///
/// Filters stay stored while the today view is shown; they are just not drawn.
pub struct FilterBar<'a> {
	view_mode: ViewMode,
	filters: &'a Filters,
	search_focused: bool,
	theme: &'a Theme,
}

impl<'a> FilterBar<'a> {
	pub fn new(view_mode: ViewMode, filters: &'a Filters, theme: &'a Theme) -> Self {
		Self {
			view_mode,
			filters,
			search_focused: false,
			theme,
		}
	}

	pub fn search_focused(mut self, focused: bool) -> Self {
		self.search_focused = focused;
		self
	}

	fn tab(&self, mode: ViewMode, key: &'static str) -> Vec<Span<'static>> {
		let style = if self.view_mode == mode {
			Style::default()
				.bg(self.theme.colors.accent)
				.fg(self.theme.colors.background)
				.add_modifier(Modifier::BOLD)
		} else {
			self.theme.text.normal
		};
		vec![
			Span::styled(format!(" {} ", mode.title()), style),
			Span::styled(format!(" {key} "), self.theme.text.dim),
		]
	}

	fn tabs_line(&self) -> Line<'static> {
		let mut spans = self.tab(ViewMode::Today, "t");
		spans.push(Span::raw("  "));
		spans.extend(self.tab(ViewMode::All, "a"));
		Line::from(spans)
	}

	fn selector(&self, field: FilterField, key: &'static str) -> Vec<Span<'a>> {
		let value = self.filters.get(field);
		let style = if value.is_empty() {
			self.theme.text.dim
		} else {
			self.theme.text.bold
		};
		vec![
			Span::styled(format!("{key} "), self.theme.text.dim),
			Span::styled(format!("[{}]", option_label(field, value)), style),
			Span::raw("  "),
		]
	}

	fn filters_line(&self) -> Line<'a> {
		let search = self.filters.get(FilterField::Search);
		let search_span = match (search.is_empty(), self.search_focused) {
			(true, false) => Span::styled(SEARCH_PLACEHOLDER, self.theme.text.placeholder),
			(_, true) => Span::styled(format!("{search}▏"), self.theme.text.normal),
			(false, false) => Span::styled(search.to_string(), self.theme.text.normal),
		};
		let search_style = self.theme.border_style_for(self.search_focused);

		let mut spans = vec![
			Span::styled("/ ", self.theme.text.dim),
			Span::styled("[", search_style),
			search_span,
			Span::styled("]", search_style),
			Span::raw("  "),
		];
		spans.extend(self.selector(FilterField::Company, "c"));
		spans.extend(self.selector(FilterField::Scope, "s"));
		spans.extend(self.selector(FilterField::Source, "o"));
		spans.push(Span::styled("x ", self.theme.text.dim));
		spans.push(Span::styled("Clear", self.theme.text.normal));
		Line::from(spans)
	}
}

impl Widget for FilterBar<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		let block = Block::default()
			.borders(Borders::ALL)
			.border_type(BorderType::Rounded)
			.border_style(self.theme.border_style_for(self.search_focused));

		let mut lines = vec![self.tabs_line()];
		if self.view_mode.is_paged() {
			lines.push(self.filters_line());
		}

		Paragraph::new(lines).block(block).render(area, buf);
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use jobdash_core::{
	format_timestamp, scope_badge, source_badge, BadgeColor, Job, Locale, STRETCH_BADGE,
};
use jobdash_tui_core::truncate_with_ellipsis;
use jobdash_tui_theme::Theme;
use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::Modifier,
	text::{Line, Span},
	widgets::{Block, BorderType, Borders, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Rows per card: title, meta, badges, description, spacer.
pub const ITEM_HEIGHT: usize = 5;

const EMPTY_MESSAGE: &str = "No jobs found";
const STRETCH_LABEL: &str = "Stretch";

#[derive(Debug, Default, Clone)]
pub struct JobListState {
	selected: usize,
	scroll_offset: usize,
	viewport_items: usize,
}

impl JobListState {
	pub fn clamp_to_total(&mut self, total: usize) {
		if total == 0 {
			self.selected = 0;
			self.scroll_offset = 0;
		} else {
			self.selected = self.selected.min(total - 1);
			self.scroll_offset = self.scroll_offset.min(total.saturating_sub(1));
		}
	}

	pub fn select_next(&mut self, total: usize) {
		if total > 0 {
			self.selected = (self.selected + 1).min(total - 1);
		}
	}

	pub fn select_prev(&mut self) {
		self.selected = self.selected.saturating_sub(1);
	}

	/// Jump by one screenful as measured on the last render.
	pub fn page_down(&mut self, total: usize) {
		if total > 0 {
			self.selected = (self.selected + self.viewport_items.max(1)).min(total - 1);
		}
	}

	pub fn page_up(&mut self) {
		self.selected = self.selected.saturating_sub(self.viewport_items.max(1));
	}

	/// Back to the top, used when a new job set replaces the old one.
	pub fn reset(&mut self) {
		self.selected = 0;
		self.scroll_offset = 0;
	}

	pub fn selected_index(&self) -> usize {
		self.selected
	}

	pub fn scroll_offset(&self) -> usize {
		self.scroll_offset
	}

	pub fn selected_job<'a>(&self, jobs: &'a [Job]) -> Option<&'a Job> {
		jobs.get(self.selected)
	}
}

/// Bordered list of job cards titled with the view name and job count.
pub struct JobList<'a> {
	jobs: &'a [Job],
	title: &'a str,
	theme: &'a Theme,
	locale: Locale,
	focused: bool,
}

impl<'a> JobList<'a> {
	pub fn new(jobs: &'a [Job], title: &'a str, theme: &'a Theme) -> Self {
		Self {
			jobs,
			title,
			theme,
			locale: Locale::POSIX,
			focused: false,
		}
	}

	pub fn locale(mut self, locale: Locale) -> Self {
		self.locale = locale;
		self
	}

	pub fn focused(mut self, focused: bool) -> Self {
		self.focused = focused;
		self
	}

	fn badge(&self, label: &str, color: BadgeColor) -> Span<'static> {
		Span::styled(format!(" {label} "), self.theme.badge_style(color))
	}

	fn render_card(&self, job: &Job, selected: bool, area: Rect, y: u16, buf: &mut Buffer) -> u16 {
		let max_y = area.y + area.height;
		let width = area.width as usize;
		let base = if selected {
			self.theme.selection_style()
		} else {
			self.theme.text.normal
		};
		let marker = if selected { "▌ " } else { "  " };

		let stretch_width = if job.is_stretch {
			UnicodeWidthStr::width(STRETCH_LABEL) + 3
		} else {
			0
		};
		let title = truncate_with_ellipsis(&job.title, width.saturating_sub(2 + stretch_width));
		let mut title_spans = vec![
			Span::styled(marker, base),
			Span::styled(title, base.add_modifier(Modifier::BOLD)),
		];
		if job.is_stretch {
			title_spans.push(Span::raw(" "));
			title_spans.push(self.badge(STRETCH_LABEL, STRETCH_BADGE));
		}

		let meta = format!(
			"{} · {} · {}",
			job.company,
			job.location,
			format_timestamp(&job.created_at, self.locale)
		);
		let meta_line = Line::from(vec![
			Span::styled("  ", base),
			Span::styled(truncate_with_ellipsis(&meta, width.saturating_sub(2)), self.theme.text.dim),
		]);

		let badge_line = Line::from(vec![
			Span::raw("  "),
			self.badge(&job.scope, scope_badge(&job.scope)),
			Span::raw(" "),
			self.badge(&job.source, source_badge(&job.source)),
		]);

		let description = job.description.as_deref().unwrap_or_default();
		let description_line = Line::from(vec![
			Span::raw("  "),
			Span::styled(
				truncate_with_ellipsis(description, width.saturating_sub(2)),
				self.theme.text.dim,
			),
		]);

		let mut y = y;
		for line in [Line::from(title_spans), meta_line, badge_line, description_line] {
			if y >= max_y {
				break;
			}
			buf.set_line(area.x, y, &line, area.width);
			y += 1;
		}
		y + 1
	}
}

impl StatefulWidget for JobList<'_> {
	type State = JobListState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.height == 0 || area.width == 0 {
			return;
		}

		let block = Block::default()
			.borders(Borders::ALL)
			.border_type(BorderType::Rounded)
			.border_style(self.theme.border_style_for(self.focused))
			.title(Span::styled(
				format!(" {} ({}) ", self.title, self.jobs.len()),
				self.theme.text.title,
			));
		let inner = block.inner(area);
		block.render(area, buf);

		state.clamp_to_total(self.jobs.len());

		if self.jobs.is_empty() {
			let width = UnicodeWidthStr::width(EMPTY_MESSAGE) as u16;
			let x = inner.x + inner.width.saturating_sub(width) / 2;
			let y = inner.y + inner.height / 2;
			buf.set_line(
				x,
				y,
				&Line::from(Span::styled(EMPTY_MESSAGE, self.theme.text.dim)),
				inner.right().saturating_sub(x),
			);
			return;
		}

		let visible_items = ((inner.height as usize) / ITEM_HEIGHT).max(1);
		state.viewport_items = visible_items;

		if state.selected >= state.scroll_offset + visible_items {
			state.scroll_offset = state.selected.saturating_sub(visible_items - 1);
		} else if state.selected < state.scroll_offset {
			state.scroll_offset = state.selected;
		}

		let mut y = inner.y;
		let max_y = inner.y + inner.height;
		for (idx, job) in self.jobs.iter().enumerate().skip(state.scroll_offset) {
			if y >= max_y {
				break;
			}
			y = self.render_card(job, idx == state.selected, inner, y, buf);
		}
	}
}

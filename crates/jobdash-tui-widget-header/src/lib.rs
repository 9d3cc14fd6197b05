// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use jobdash_tui_core::truncate_with_ellipsis;
use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::Style,
	text::{Line, Span},
	widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// One-row banner: title and subtitle on the left, a status on the right.
///
/// When space runs out the subtitle goes first, then the title is truncated.
/// The status is always drawn in full.
#[derive(Debug, Clone)]
pub struct Header {
	title: String,
	subtitle: Option<String>,
	status: Option<String>,
	title_style: Style,
	subtitle_style: Style,
	status_style: Style,
	style: Style,
}

impl Header {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			subtitle: None,
			status: None,
			title_style: Style::default(),
			subtitle_style: Style::default(),
			status_style: Style::default(),
			style: Style::default(),
		}
	}

	pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
		self.subtitle = Some(subtitle.into());
		self
	}

	pub fn status(mut self, status: impl Into<String>) -> Self {
		self.status = Some(status.into());
		self
	}

	pub fn title_style(mut self, style: Style) -> Self {
		self.title_style = style;
		self
	}

	pub fn subtitle_style(mut self, style: Style) -> Self {
		self.subtitle_style = style;
		self
	}

	pub fn status_style(mut self, style: Style) -> Self {
		self.status_style = style;
		self
	}

	/// Background style for the whole row.
	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}
}

impl Widget for Header {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.height == 0 || area.width == 0 {
			return;
		}

		buf.set_style(area, self.style);

		let width = area.width as usize;
		let status_width = self
			.status
			.as_ref()
			.map(|s| UnicodeWidthStr::width(s.as_str()) + 1)
			.unwrap_or(0);
		let left_width = width.saturating_sub(status_width);

		let title = truncate_with_ellipsis(&self.title, left_width);
		let mut spans = vec![Span::styled(title.clone(), self.title_style)];

		if let Some(ref subtitle) = self.subtitle {
			let room = left_width.saturating_sub(UnicodeWidthStr::width(title.as_str()) + 2);
			// Dropped entirely rather than shown as a lone ellipsis.
			if room > 3 {
				spans.push(Span::raw("  "));
				spans.push(Span::styled(
					truncate_with_ellipsis(subtitle, room),
					self.subtitle_style,
				));
			}
		}

		buf.set_line(area.x, area.y, &Line::from(spans), left_width as u16);

		if let Some(ref status) = self.status {
			let actual = UnicodeWidthStr::width(status.as_str()) as u16;
			let x = area.right().saturating_sub(actual).max(area.x);
			buf.set_line(
				x,
				area.y,
				&Line::from(Span::styled(status.as_str(), self.status_style)),
				actual,
			);
		}
	}
}

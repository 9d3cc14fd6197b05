// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use jobdash_tui_core::truncate_with_ellipsis;
use ratatui::{
	buffer::Buffer,
	layout::Rect,
	style::{Modifier, Style},
	text::{Line, Span},
	widgets::Widget,
};

#[derive(Debug, Clone)]
pub struct StatusItem {
	pub label: String,
	pub value: String,
}

/// Bottom row: `label: value` items on the left, key hints on the right.
///
/// Key hints win when the row is too narrow; items are truncated to fit.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
	items: Vec<StatusItem>,
	shortcuts: Vec<(String, String)>,
	style: Style,
	key_style: Style,
}

impl StatusBar {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn item(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
		self.items.push(StatusItem {
			label: label.into(),
			value: value.into(),
		});
		self
	}

	pub fn shortcut(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
		self.shortcuts.push((key.into(), desc.into()));
		self
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	pub fn key_style(mut self, style: Style) -> Self {
		self.key_style = style;
		self
	}
}

impl Widget for StatusBar {
	fn render(self, area: Rect, buf: &mut Buffer) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		buf.set_style(area, self.style);

		let mut shortcut_spans = Vec::new();
		for (i, (key, desc)) in self.shortcuts.iter().enumerate() {
			if i > 0 {
				shortcut_spans.push(Span::raw("  "));
			}
			shortcut_spans.push(Span::styled(key.as_str(), self.key_style.add_modifier(Modifier::BOLD)));
			shortcut_spans.push(Span::raw(" "));
			shortcut_spans.push(Span::raw(desc.as_str()));
		}
		let shortcut_line = Line::from(shortcut_spans);
		let shortcut_width = (shortcut_line.width() as u16).min(area.width);

		let available_for_items = area.width.saturating_sub(shortcut_width + 1) as usize;

		let items_text = self
			.items
			.iter()
			.map(|item| format!("{}: {}", item.label, item.value))
			.collect::<Vec<_>>()
			.join(" | ");
		let items_text = truncate_with_ellipsis(&items_text, available_for_items);

		buf.set_line(
			area.x,
			area.y,
			&Line::from(Span::raw(items_text)),
			available_for_items as u16,
		);

		let shortcut_x = area.right().saturating_sub(shortcut_width);
		buf.set_line(shortcut_x, area.y, &shortcut_line, shortcut_width);
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loading spinner.
//!
//! The frame only advances when the owner calls [`SpinnerState::tick`], so the
//! animation speed follows the UI tick rate.

use ratatui::prelude::*;
use ratatui::widgets::StatefulWidget;

const DOTS_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Clone, Debug, Default)]
pub struct SpinnerState {
	frame: usize,
}

impl SpinnerState {
	pub fn tick(&mut self) {
		self.frame = self.frame.wrapping_add(1);
	}

	pub fn symbol(&self) -> &'static str {
		DOTS_FRAMES[self.frame % DOTS_FRAMES.len()]
	}
}

#[derive(Clone, Debug, Default)]
pub struct Spinner {
	label: Option<String>,
	style: Style,
	centered: bool,
}

impl Spinner {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	/// Draw in the middle of the area instead of the top-left corner.
	pub fn centered(mut self, centered: bool) -> Self {
		self.centered = centered;
		self
	}
}

impl StatefulWidget for Spinner {
	type State = SpinnerState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		let text = match &self.label {
			Some(label) => format!("{} {}", state.symbol(), label),
			None => state.symbol().to_string(),
		};
		let line = Line::from(Span::styled(text, self.style));

		let (x, y) = if self.centered {
			let width = line.width() as u16;
			(
				area.x + area.width.saturating_sub(width) / 2,
				area.y + area.height / 2,
			)
		} else {
			(area.x, area.y)
		};

		buf.set_line(x, y, &line, area.right().saturating_sub(x));
	}
}

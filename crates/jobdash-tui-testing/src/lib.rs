// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::VecDeque;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use jobdash_tui_core::{Event, EventSource};
use jobdash_tui_theme::Theme;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Frame, Terminal};

pub struct TestHarness {
	terminal: Terminal<TestBackend>,
	theme: Theme,
}

impl TestHarness {
	pub fn new(width: u16, height: u16) -> Self {
		let backend = TestBackend::new(width, height);
		let terminal = Terminal::new(backend).expect("failed to create terminal");
		Self {
			terminal,
			theme: Theme::dark(),
		}
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	pub fn theme(&self) -> &Theme {
		&self.theme
	}

	pub fn render<F>(&mut self, render_fn: F) -> &TestBackend
	where
		F: FnOnce(&mut Frame, Rect, &Theme),
	{
		let theme = &self.theme;
		self.terminal
			.draw(|frame| {
				let area = frame.area();
				render_fn(frame, area, theme);
			})
			.expect("failed to draw");
		self.terminal.backend()
	}

	pub fn buffer(&self) -> &Buffer {
		self.terminal.backend().buffer()
	}

	pub fn buffer_lines(&self) -> Vec<String> {
		let buffer = self.buffer();
		let area = buffer.area;
		let mut lines = Vec::new();

		for y in area.y..area.y + area.height {
			let mut line = String::new();
			for x in area.x..area.x + area.width {
				line.push_str(buffer[(x, y)].symbol());
			}
			lines.push(line);
		}

		lines
	}

	/// Row and byte column of the first occurrence of `needle`.
	pub fn find_text(&self, needle: &str) -> Option<(usize, usize)> {
		self.buffer_lines()
			.iter()
			.enumerate()
			.find_map(|(row, line)| line.find(needle).map(|col| (row, col)))
	}

	pub fn contains(&self, needle: &str) -> bool {
		self.find_text(needle).is_some()
	}

	pub fn to_text(&self) -> String {
		buffer_to_string(self.buffer())
	}
}

/// Render `buffer` as newline-separated rows.
pub fn buffer_to_string(buffer: &Buffer) -> String {
	let area = buffer.area;
	let mut output = String::new();

	for y in area.y..area.y + area.height {
		for x in area.x..area.x + area.width {
			output.push_str(buffer[(x, y)].symbol());
		}
		if y + 1 < area.y + area.height {
			output.push('\n');
		}
	}

	output
}

pub fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(c: char) -> KeyEvent {
	key(KeyCode::Char(c))
}

pub fn ctrl(c: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// [`EventSource`] that replays a fixed script, then reports exhaustion.
#[derive(Debug, Default)]
pub struct ScriptedEventSource {
	events: VecDeque<Event>,
}

impl ScriptedEventSource {
	pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
		Self {
			events: events.into_iter().collect(),
		}
	}

	/// One key press per character.
	pub fn typed(text: &str) -> Self {
		Self::new(text.chars().map(|c| Event::Key(char_key(c))))
	}

	pub fn then(mut self, event: Event) -> Self {
		self.events.push_back(event);
		self
	}

	pub fn remaining(&self) -> usize {
		self.events.len()
	}
}

#[async_trait]
impl EventSource for ScriptedEventSource {
	async fn next(&mut self) -> Option<Event> {
		self.events.pop_front()
	}
}

#[cfg(feature = "proptest")]
pub mod strategies {
	use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
	use proptest::prelude::*;

	pub fn key_event_strategy() -> impl Strategy<Value = KeyEvent> {
		let key_code = prop_oneof![
			Just(KeyCode::Enter),
			Just(KeyCode::Esc),
			Just(KeyCode::Backspace),
			Just(KeyCode::Up),
			Just(KeyCode::Down),
			Just(KeyCode::Left),
			Just(KeyCode::Right),
			proptest::char::range('a', 'z').prop_map(KeyCode::Char),
			proptest::char::range('A', 'Z').prop_map(KeyCode::Char),
			proptest::sample::select(vec![' ', '/', '-', '.']).prop_map(KeyCode::Char),
		];

		let modifiers = prop_oneof![
			Just(KeyModifiers::NONE),
			Just(KeyModifiers::SHIFT),
			Just(KeyModifiers::CONTROL),
		];

		(key_code, modifiers).prop_map(|(code, mods)| KeyEvent::new(code, mods))
	}

	pub fn key_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<KeyEvent>> {
		proptest::collection::vec(key_event_strategy(), 0..=max_len)
	}
}

#[cfg(feature = "proptest")]
pub use strategies::{key_event_strategy, key_sequence_strategy};

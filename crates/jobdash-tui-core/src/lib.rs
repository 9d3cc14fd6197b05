// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal events, with a synthetic [`Event::Tick`] when the terminal is idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
	/// Key press. Release and repeat events are filtered out.
	Key(KeyEvent),
	/// Terminal resize to (width, height).
	Resize(u16, u16),
	/// No input for one tick interval.
	Tick,
	/// Paste event with pasted text.
	Paste(String),
}

impl Event {
	/// Converts a crossterm event, dropping the kinds the dashboard ignores.
	pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
		match event {
			crossterm::event::Event::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
			crossterm::event::Event::Resize(w, h) => Some(Event::Resize(w, h)),
			crossterm::event::Event::Paste(text) => Some(Event::Paste(text)),
			_ => None,
		}
	}
}

/// Cut `s` to at most `max_width` display columns, marking the cut with `…`.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
	if UnicodeWidthStr::width(s) <= max_width {
		return s.to_string();
	}
	if max_width == 0 {
		return String::new();
	}

	let target_width = max_width - 1;
	let mut result = String::new();
	let mut current_width = 0;
	for c in s.chars() {
		let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
		if current_width + char_width > target_width {
			break;
		}
		result.push(c);
		current_width += char_width;
	}
	result.push('…');
	result
}

/// Which of a fixed ring of regions receives keyboard input.
#[derive(Debug, Clone)]
pub struct FocusState<F> {
	ring: Vec<F>,
	index: usize,
}

impl<F: Copy + PartialEq> FocusState<F> {
	/// `first` starts focused; focus cycles through `rest` in order.
	pub fn new(first: F, rest: impl IntoIterator<Item = F>) -> Self {
		let mut ring = vec![first];
		ring.extend(rest);
		Self { ring, index: 0 }
	}

	pub fn current(&self) -> F {
		self.ring[self.index]
	}

	pub fn is_focused(&self, id: F) -> bool {
		self.current() == id
	}

	pub fn focus_next(&mut self) {
		self.index = (self.index + 1) % self.ring.len();
	}

	pub fn focus_prev(&mut self) {
		self.index = (self.index + self.ring.len() - 1) % self.ring.len();
	}

	/// Focus `id` if it is part of the ring.
	pub fn set_focus(&mut self, id: F) {
		if let Some(index) = self.ring.iter().position(|f| *f == id) {
			self.index = index;
		}
	}
}

/// Trait for mapping key events to actions based on focus state.
pub trait Keymap<A, F> {
	fn key_to_action(&self, key: &KeyEvent, focus: &FocusState<F>) -> Option<A>;
}

#[async_trait]
pub trait EventSource {
	/// `None` once the source is exhausted.
	async fn next(&mut self) -> Option<Event>;
}

/// Reads the real terminal on a dedicated thread.
///
/// crossterm's reader blocks, so polling happens off the runtime and events are
/// forwarded over a channel. The thread exits when the receiver is dropped or
/// the terminal read fails.
pub struct CrosstermEventSource {
	rx: mpsc::UnboundedReceiver<Event>,
}

impl CrosstermEventSource {
	pub fn spawn(tick_rate: Duration) -> Self {
		let (tx, rx) = mpsc::unbounded_channel();
		std::thread::spawn(move || loop {
			let event = match crossterm::event::poll(tick_rate) {
				Ok(true) => match crossterm::event::read() {
					Ok(event) => match Event::from_crossterm(event) {
						Some(event) => event,
						None => continue,
					},
					Err(e) => {
						tracing::error!(error = %e, "terminal read failed");
						break;
					}
				},
				Ok(false) => Event::Tick,
				Err(e) => {
					tracing::error!(error = %e, "terminal poll failed");
					break;
				}
			};
			if tx.send(event).is_err() {
				break;
			}
		});
		Self { rx }
	}
}

#[async_trait]
impl EventSource for CrosstermEventSource {
	async fn next(&mut self) -> Option<Event> {
		self.rx.recv().await
	}
}

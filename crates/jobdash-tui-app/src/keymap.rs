// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use jobdash_core::{FilterField, ViewMode};
use jobdash_tui_core::{FocusState, Keymap};

/// Focusable regions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
	JobList,
	Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	ShowView(ViewMode),
	Refresh,
	FocusSearch,
	LeaveSearch,
	SearchInput(char),
	SearchBackspace,
	CycleFilter { field: FilterField, forward: bool },
	ClearFilters,
	NextPage,
	PrevPage,
	SelectNext,
	SelectPrev,
	PageDown,
	PageUp,
	OpenSelected,
	Quit,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DashboardKeymap;

impl Keymap<Action, Region> for DashboardKeymap {
	fn key_to_action(&self, key: &KeyEvent, focus: &FocusState<Region>) -> Option<Action> {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			return match key.code {
				KeyCode::Char('c') => Some(Action::Quit),
				_ => None,
			};
		}

		match focus.current() {
			Region::Search => match key.code {
				KeyCode::Esc | KeyCode::Enter => Some(Action::LeaveSearch),
				KeyCode::Backspace => Some(Action::SearchBackspace),
				KeyCode::Char(c) => Some(Action::SearchInput(c)),
				_ => None,
			},
			Region::JobList => list_action(key.code),
		}
	}
}

fn list_action(code: KeyCode) -> Option<Action> {
	let cycle = |field, forward| Some(Action::CycleFilter { field, forward });

	match code {
		KeyCode::Char('t') => Some(Action::ShowView(ViewMode::Today)),
		KeyCode::Char('a') => Some(Action::ShowView(ViewMode::All)),
		KeyCode::Char('r') => Some(Action::Refresh),
		KeyCode::Char('/') => Some(Action::FocusSearch),
		KeyCode::Char('c') => cycle(FilterField::Company, true),
		KeyCode::Char('C') => cycle(FilterField::Company, false),
		KeyCode::Char('s') => cycle(FilterField::Scope, true),
		KeyCode::Char('S') => cycle(FilterField::Scope, false),
		KeyCode::Char('o') => cycle(FilterField::Source, true),
		KeyCode::Char('O') => cycle(FilterField::Source, false),
		KeyCode::Char('x') => Some(Action::ClearFilters),
		KeyCode::Char('n') | KeyCode::Right => Some(Action::NextPage),
		KeyCode::Char('p') | KeyCode::Left => Some(Action::PrevPage),
		KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectNext),
		KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectPrev),
		KeyCode::PageDown => Some(Action::PageDown),
		KeyCode::PageUp => Some(Action::PageUp),
		KeyCode::Enter => Some(Action::OpenSelected),
		KeyCode::Char('q') => Some(Action::Quit),
		_ => None,
	}
}

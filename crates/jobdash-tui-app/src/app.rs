// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use jobdash_core::{FilterField, Locale};
use jobdash_store::{cycle_option, update, DashboardState, Effect, FilterOptions, HealthState, Msg};
use jobdash_tui_core::{Event, FocusState, Keymap};
use jobdash_tui_theme::Theme;
use jobdash_tui_widget_filter_bar::FilterBar;
use jobdash_tui_widget_header::Header;
use jobdash_tui_widget_job_list::{JobList, JobListState};
use jobdash_tui_widget_pagination::PaginationBar;
use jobdash_tui_widget_spinner::{Spinner, SpinnerState};
use jobdash_tui_widget_stats::StatsCards;
use jobdash_tui_widget_status_bar::StatusBar;
use ratatui::{
	layout::Rect,
	text::Span,
	widgets::{Block, BorderType, Borders},
	Frame,
};

use crate::keymap::{Action, DashboardKeymap, Region};
use crate::layout::dashboard_layout;

const TITLE: &str = "Job Checker Dashboard";
const SUBTITLE: &str = "Track your job opportunities";
const LOADING: &str = "Loading jobs...";

/// Opens job links outside the terminal.
pub trait UrlOpener: Send {
	fn open(&self, url: &str) -> std::io::Result<()>;
}

/// The platform's default browser.
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
	fn open(&self, url: &str) -> std::io::Result<()> {
		webbrowser::open(url)
	}
}

pub struct App {
	pub state: DashboardState,
	list_state: JobListState,
	spinner_state: SpinnerState,
	focus: FocusState<Region>,
	keymap: DashboardKeymap,
	options: FilterOptions,
	theme: Theme,
	locale: Locale,
	opener: Box<dyn UrlOpener>,
	should_quit: bool,
}

impl App {
	pub fn new(theme: Theme, locale: Locale, opener: Box<dyn UrlOpener>) -> Self {
		let state = DashboardState::new();
		let options = FilterOptions::from_stats(state.stats.as_ref());
		Self {
			state,
			list_state: JobListState::default(),
			spinner_state: SpinnerState::default(),
			focus: FocusState::new(Region::JobList, [Region::Search]),
			keymap: DashboardKeymap,
			options,
			theme,
			locale,
			opener,
			should_quit: false,
		}
	}

	/// Effects for the first frame: stats, today's jobs and a health probe.
	pub fn init(&mut self) -> Vec<Effect> {
		update(&mut self.state, Msg::Init)
	}

	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	pub fn focus(&self) -> Region {
		self.focus.current()
	}

	pub fn handle_event(&mut self, event: Event) -> Vec<Effect> {
		match event {
			Event::Key(key) => match self.keymap.key_to_action(&key, &self.focus) {
				Some(action) => self.handle_action(action),
				None => Vec::new(),
			},
			Event::Tick => {
				self.tick();
				Vec::new()
			}
			Event::Paste(text) if self.focus.is_focused(Region::Search) => {
				let mut search = self.state.filters.search.clone();
				search.extend(text.chars().filter(|c| !c.is_control()));
				update(&mut self.state, Msg::SetFilter(FilterField::Search, search))
			}
			Event::Paste(_) | Event::Resize(..) => Vec::new(),
		}
	}

	pub fn handle_action(&mut self, action: Action) -> Vec<Effect> {
		let paged = self.state.view_mode.is_paged();

		match action {
			Action::ShowView(mode) => {
				if !mode.is_paged() {
					self.focus.set_focus(Region::JobList);
				}
				update(&mut self.state, Msg::SetViewMode(mode))
			}
			Action::Refresh => update(&mut self.state, Msg::Refresh),
			Action::FocusSearch => {
				if paged {
					self.focus.set_focus(Region::Search);
				}
				Vec::new()
			}
			Action::LeaveSearch => {
				self.focus.set_focus(Region::JobList);
				Vec::new()
			}
			Action::SearchInput(c) => {
				let mut search = self.state.filters.search.clone();
				search.push(c);
				update(&mut self.state, Msg::SetFilter(FilterField::Search, search))
			}
			Action::SearchBackspace => {
				let mut search = self.state.filters.search.clone();
				if search.pop().is_none() {
					return Vec::new();
				}
				update(&mut self.state, Msg::SetFilter(FilterField::Search, search))
			}
			Action::CycleFilter { field, forward } => {
				if !paged {
					return Vec::new();
				}
				let current = self.state.filters.get(field);
				match cycle_option(self.options.for_field(field), current, forward) {
					Some(value) => update(&mut self.state, Msg::SetFilter(field, value)),
					None => Vec::new(),
				}
			}
			Action::ClearFilters if paged => update(&mut self.state, Msg::ClearFilters),
			Action::ClearFilters => Vec::new(),
			Action::NextPage => update(&mut self.state, Msg::NextPage),
			Action::PrevPage => update(&mut self.state, Msg::PrevPage),
			Action::SelectNext => {
				self.list_state.select_next(self.state.jobs.len());
				Vec::new()
			}
			Action::SelectPrev => {
				self.list_state.select_prev();
				Vec::new()
			}
			Action::PageDown => {
				self.list_state.page_down(self.state.jobs.len());
				Vec::new()
			}
			Action::PageUp => {
				self.list_state.page_up();
				Vec::new()
			}
			Action::OpenSelected => {
				self.open_selected();
				Vec::new()
			}
			Action::Quit => {
				self.should_quit = true;
				Vec::new()
			}
		}
	}

	/// Apply a result coming back from the dispatcher.
	pub fn handle_msg(&mut self, msg: Msg) -> Vec<Effect> {
		let latest_jobs = self.state.jobs_generation();
		let replaces_jobs = match &msg {
			Msg::TodayJobsLoaded(generation, Ok(_)) | Msg::JobsPageLoaded(generation, Ok(_)) => {
				*generation == latest_jobs
			}
			_ => false,
		};
		let stats_changed = matches!(msg, Msg::StatsLoaded(_, Ok(_)));

		let effects = update(&mut self.state, msg);

		if replaces_jobs {
			self.list_state.reset();
		}
		if stats_changed {
			self.options = FilterOptions::from_stats(self.state.stats.as_ref());
		}
		effects
	}

	pub fn tick(&mut self) {
		if self.state.loading || self.state.refreshing {
			self.spinner_state.tick();
		}
	}

	fn open_selected(&self) {
		let Some(job) = self.list_state.selected_job(&self.state.jobs) else {
			return;
		};
		match self.opener.open(&job.url) {
			Ok(()) => tracing::info!(job_id = %job.id, url = %job.url, "opened job in browser"),
			Err(e) => tracing::warn!(error = %e, url = %job.url, "failed to open browser"),
		}
	}

	pub fn render(&mut self, frame: &mut Frame) {
		let paged = self.state.view_mode.is_paged();
		let show_pagination = paged
			&& !self.state.loading
			&& !self.state.jobs.is_empty()
			&& self.state.pagination.is_visible();
		let areas = dashboard_layout(
			frame.area(),
			self.state.stats.is_some(),
			paged,
			show_pagination,
		);

		let health_style = match self.state.health {
			HealthState::Healthy => self.theme.text.success,
			HealthState::Unknown => self.theme.text.dim,
			HealthState::Degraded(_) | HealthState::Unreachable => self.theme.text.error,
		};
		let header = Header::new(TITLE)
			.subtitle(SUBTITLE)
			.status(format!("● {}", self.state.health.label()))
			.title_style(self.theme.text.title)
			.subtitle_style(self.theme.text.dim)
			.status_style(health_style);
		frame.render_widget(header, areas.header);

		if let (Some(stats), Some(area)) = (self.state.stats.as_ref(), areas.stats) {
			frame.render_widget(StatsCards::new(stats, &self.theme), area);
		}

		let filter_bar = FilterBar::new(self.state.view_mode, &self.state.filters, &self.theme)
			.search_focused(self.focus.is_focused(Region::Search));
		frame.render_widget(filter_bar, areas.controls);

		if self.state.loading {
			self.render_loading(frame, areas.list);
		} else {
			let list = JobList::new(&self.state.jobs, self.state.view_mode.title(), &self.theme)
				.locale(self.locale)
				.focused(self.focus.is_focused(Region::JobList));
			frame.render_stateful_widget(list, areas.list, &mut self.list_state);
		}

		if let Some(area) = areas.pagination {
			frame.render_widget(PaginationBar::new(&self.state.pagination, &self.theme), area);
		}

		frame.render_widget(self.build_status_bar(), areas.status);
	}

	fn render_loading(&mut self, frame: &mut Frame, area: Rect) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_type(BorderType::Rounded)
			.border_style(self.theme.borders.normal)
			.title(Span::styled(
				format!(" {} ", self.state.view_mode.title()),
				self.theme.text.title,
			));
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let spinner = Spinner::new()
			.label(LOADING)
			.style(self.theme.text.dim)
			.centered(true);
		frame.render_stateful_widget(spinner, inner, &mut self.spinner_state);
	}

	fn build_status_bar(&self) -> StatusBar {
		let mut status = StatusBar::new()
			.style(self.theme.text.normal)
			.key_style(self.theme.text.title)
			.item("View", self.state.view_mode.title());

		if self.state.view_mode.is_paged() {
			let pagination = &self.state.pagination;
			status = status.item(
				"Page",
				format!("{}/{}", pagination.page(), pagination.total_pages()),
			);
			let active = self.state.filters.active().count();
			if active > 0 {
				status = status.item("Filters", active.to_string());
			}
		}
		if self.state.refreshing {
			status = status.item("Refresh", format!("{} running", self.spinner_state.symbol()));
		}

		match self.focus() {
			Region::Search => status
				.shortcut("Enter/Esc", "done")
				.shortcut("Ctrl+C", "quit"),
			Region::JobList if self.state.view_mode.is_paged() => status
				.shortcut("/", "search")
				.shortcut("c/s/o", "filter")
				.shortcut("x", "clear")
				.shortcut("n/p", "page")
				.shortcut("Enter", "open")
				.shortcut("r", "refresh")
				.shortcut("q", "quit"),
			Region::JobList => status
				.shortcut("a", "all jobs")
				.shortcut("Enter", "open")
				.shortcut("r", "refresh")
				.shortcut("q", "quit"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crossterm::event::KeyCode;
	use jobdash_core::{Job, JobPage, JobStats, ViewMode};
	use jobdash_store::Generation;
	use jobdash_tui_testing::{char_key, key, TestHarness};
	use std::sync::{Arc, Mutex};

	fn stats() -> JobStats {
		JobStats {
			total_jobs: 150,
			jobs_today: 5,
			jobs_by_company: [("Acme".to_string(), 10), ("Globex".to_string(), 4)]
				.into_iter()
				.collect(),
			jobs_by_scope: [("Austin".to_string(), 3)].into_iter().collect(),
		}
	}

	#[derive(Clone, Default)]
	struct RecordingOpener(Arc<Mutex<Vec<String>>>);

	impl UrlOpener for RecordingOpener {
		fn open(&self, url: &str) -> std::io::Result<()> {
			self.0.lock().unwrap().push(url.to_string());
			Ok(())
		}
	}

	fn app() -> (App, RecordingOpener) {
		let opener = RecordingOpener::default();
		let app = App::new(Theme::dark(), Locale::POSIX, Box::new(opener.clone()));
		(app, opener)
	}

	fn job(id: &str) -> Job {
		Job {
			id: id.to_string(),
			title: format!("Engineer {id}"),
			company: "Acme".to_string(),
			location: "Remote".to_string(),
			url: format!("https://jobs.example.com/{id}"),
			created_at: "2024-01-15T10:00:00".to_string(),
			source: "lever".to_string(),
			scope: "US Remote".to_string(),
			is_stretch: false,
			description: None,
		}
	}

	fn press(app: &mut App, c: char) -> Vec<Effect> {
		app.handle_event(Event::Key(char_key(c)))
	}

	fn load_stats(app: &mut App) {
		let generation = app.state.stats_generation();
		app.handle_msg(Msg::StatsLoaded(generation, Ok(stats())));
	}

	fn load_page(app: &mut App, jobs: Vec<Job>, total: u64) {
		let generation = app.state.jobs_generation();
		app.handle_msg(Msg::JobsPageLoaded(
			generation,
			Ok(JobPage {
				jobs,
				total,
				..Default::default()
			}),
		));
	}

	fn search_of(effects: &[Effect]) -> Option<String> {
		effects.iter().find_map(|e| match e {
			Effect::FetchJobsPage(_, query) => Some(query.filters.search.clone()),
			_ => None,
		})
	}

	#[test]
	fn test_init_fetches_and_probes_health() {
		let (mut app, _) = app();
		let effects = app.init();
		assert!(effects.contains(&Effect::CheckHealth));
		assert!(effects.iter().any(|e| matches!(e, Effect::FetchStats(_))));
		assert!(effects.iter().any(|e| matches!(e, Effect::FetchTodayJobs(_))));
	}

	#[test]
	fn test_search_typing_refetches_and_captures_q() {
		let (mut app, _) = app();
		press(&mut app, 'a');
		press(&mut app, '/');
		assert_eq!(app.focus(), Region::Search);

		press(&mut app, 'r');
		let effects = press(&mut app, 'q');
		assert_eq!(search_of(&effects).as_deref(), Some("rq"));
		assert!(!app.should_quit());

		let effects = app.handle_event(Event::Key(key(KeyCode::Backspace)));
		assert_eq!(search_of(&effects).as_deref(), Some("r"));

		app.handle_event(Event::Key(key(KeyCode::Esc)));
		assert_eq!(app.focus(), Region::JobList);
		press(&mut app, 'q');
		assert!(app.should_quit());
	}

	#[test]
	fn test_filters_ignored_in_today_view() {
		let (mut app, _) = app();
		load_stats(&mut app);

		assert!(press(&mut app, 'c').is_empty());
		assert!(press(&mut app, '/').is_empty());
		assert_eq!(app.focus(), Region::JobList);
		assert!(app.state.filters.is_empty());
	}

	#[test]
	fn test_cycle_company_uses_stats_keys() {
		let (mut app, _) = app();
		load_stats(&mut app);
		press(&mut app, 'a');

		press(&mut app, 'c');
		assert_eq!(app.state.filters.company, "Acme");
		press(&mut app, 'c');
		assert_eq!(app.state.filters.company, "Globex");
		press(&mut app, 'c');
		assert_eq!(app.state.filters.company, "");
		press(&mut app, 'C');
		assert_eq!(app.state.filters.company, "Globex");

		let effects = press(&mut app, 'x');
		assert!(!effects.is_empty());
		assert!(app.state.filters.is_empty());
	}

	#[test]
	fn test_leaving_all_view_drops_search_focus() {
		let (mut app, _) = app();
		press(&mut app, 'a');
		press(&mut app, '/');
		app.handle_event(Event::Key(key(KeyCode::Enter)));
		press(&mut app, '/');
		assert_eq!(app.focus(), Region::Search);

		app.handle_action(Action::ShowView(ViewMode::Today));
		assert_eq!(app.focus(), Region::JobList);
	}

	#[test]
	fn test_paste_appends_to_search() {
		let (mut app, _) = app();
		press(&mut app, 'a');
		press(&mut app, '/');
		let effects = app.handle_event(Event::Paste("rust\n".to_string()));
		assert_eq!(search_of(&effects).as_deref(), Some("rust"));
	}

	#[test]
	fn test_enter_opens_selected_job() {
		let (mut app, opener) = app();
		press(&mut app, 'a');
		load_page(&mut app, vec![job("1"), job("2")], 2);

		press(&mut app, 'j');
		app.handle_event(Event::Key(key(KeyCode::Enter)));

		assert_eq!(
			opener.0.lock().unwrap().as_slice(),
			["https://jobs.example.com/2".to_string()]
		);
	}

	#[test]
	fn test_new_job_set_resets_selection() {
		let (mut app, opener) = app();
		press(&mut app, 'a');
		load_page(&mut app, vec![job("1"), job("2")], 2);
		press(&mut app, 'j');

		press(&mut app, 'r');
		let refreshed = app.handle_msg(Msg::RefreshCompleted(Ok(())));
		assert!(!refreshed.is_empty());
		load_page(&mut app, vec![job("3"), job("4")], 2);

		app.handle_event(Event::Key(key(KeyCode::Enter)));
		assert_eq!(
			opener.0.lock().unwrap().as_slice(),
			["https://jobs.example.com/3".to_string()]
		);
	}

	#[test]
	fn test_stale_page_does_not_reset_selection() {
		let (mut app, _) = app();
		press(&mut app, 'a');
		load_page(&mut app, vec![job("1"), job("2")], 2);
		press(&mut app, 'j');

		app.handle_msg(Msg::JobsPageLoaded(Generation::default(), Ok(JobPage::default())));
		assert_eq!(app.state.jobs.len(), 2);
		assert_eq!(app.list_state.selected_index(), 1);
	}

	#[test]
	fn test_render_loading_then_empty() {
		let (mut app, _) = app();
		app.init();

		let mut harness = TestHarness::new(100, 30);
		harness.render(|frame, _, _| app.render(frame));
		assert!(harness.contains("Job Checker Dashboard"));
		assert!(harness.contains("Track your job opportunities"));
		assert!(harness.contains("● checking"));
		assert!(harness.contains("Loading jobs..."));
		assert!(!harness.contains("Total Jobs"));

		let generation = app.state.jobs_generation();
		app.handle_msg(Msg::TodayJobsLoaded(generation, Ok(Vec::new())));
		load_stats(&mut app);
		harness.render(|frame, _, _| app.render(frame));
		assert!(harness.contains("No jobs found"));
		assert!(harness.contains("Today's Jobs (0)"));
		assert!(harness.contains("Total Jobs"));
		assert!(harness.contains("Acme"));
	}

	#[test]
	fn test_render_pagination_only_with_several_pages() {
		let (mut app, _) = app();
		press(&mut app, 'a');
		load_page(&mut app, vec![job("1")], 1);

		let mut harness = TestHarness::new(100, 30);
		harness.render(|frame, _, _| app.render(frame));
		assert!(harness.contains("All Jobs (1)"));
		assert!(!harness.contains("Next ▶"));

		load_page(&mut app, vec![job("1")], 45);
		harness.render(|frame, _, _| app.render(frame));
		assert!(harness.contains("Page 1 of 3"));
		assert!(harness.contains("Next ▶"));
	}

	#[test]
	fn test_pagination_hidden_while_loading_or_empty() {
		let (mut app, _) = app();
		press(&mut app, 'a');
		load_page(&mut app, vec![job("1")], 45);

		press(&mut app, 'n');
		assert!(app.state.loading);
		let mut harness = TestHarness::new(100, 30);
		harness.render(|frame, _, _| app.render(frame));
		assert!(harness.contains("Loading jobs..."));
		assert!(!harness.contains("Page 2 of 3"));
		assert!(!harness.contains("Next ▶"));

		load_page(&mut app, Vec::new(), 45);
		harness.render(|frame, _, _| app.render(frame));
		assert!(harness.contains("No jobs found"));
		assert!(!harness.contains("Next ▶"));
	}
}

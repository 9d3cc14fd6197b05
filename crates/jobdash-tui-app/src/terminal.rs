// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
	terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
	ExecutableCommand,
};
use jobdash_store::{Dispatcher, Msg};
use jobdash_tui_core::EventSource;
use ratatui::{
	backend::{Backend, CrosstermBackend},
	Terminal,
};
use tokio::sync::mpsc;

use crate::app::App;

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn setup_terminal() -> Result<CrosstermTerminal> {
	enable_raw_mode()?;
	io::stdout().execute(EnterAlternateScreen)?;
	Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?)
}

pub fn restore_terminal() -> Result<()> {
	disable_raw_mode()?;
	io::stdout().execute(LeaveAlternateScreen)?;
	Ok(())
}

/// Combine the run-loop outcome with the terminal restore outcome.
///
/// A run-loop error wins; a restore failure is logged and only surfaces when
/// the run itself succeeded.
pub fn finish_session(result: Result<()>, restored: Result<()>) -> Result<()> {
	if let Err(e) = restored {
		tracing::error!(error = %e, "failed to restore terminal");
		result?;
		return Err(e);
	}
	result
}

/// Draw, then wait for whichever comes first: terminal input or an API result.
///
/// Returns when the app asks to quit or the event source is exhausted.
pub async fn run_app<B, E>(
	terminal: &mut Terminal<B>,
	app: &mut App,
	events: &mut E,
	dispatcher: &Dispatcher,
	messages: &mut mpsc::UnboundedReceiver<Msg>,
) -> Result<()>
where
	B: Backend,
	B::Error: Send + Sync + 'static,
	E: EventSource + Send,
{
	dispatcher.dispatch_all(app.init());

	loop {
		terminal.draw(|frame| app.render(frame))?;

		if app.should_quit() {
			tracing::info!("quit requested");
			break;
		}

		tokio::select! {
			event = events.next() => match event {
				Some(event) => dispatcher.dispatch_all(app.handle_event(event)),
				None => {
					tracing::debug!("event source closed");
					break;
				}
			},
			Some(msg) = messages.recv() => {
				dispatcher.dispatch_all(app.handle_msg(msg));
			}
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::app::UrlOpener;
	use async_trait::async_trait;
	use jobdash_api::{ApiError, JobsApi, Result as ApiResult};
	use jobdash_core::{HealthStatus, Job, JobPage, JobQuery, JobStats, Locale, ViewMode};
	use jobdash_tui_core::Event;
	use jobdash_tui_testing::{buffer_to_string, char_key, ScriptedEventSource};
	use jobdash_tui_theme::Theme;
	use ratatui::backend::TestBackend;
	use std::sync::Arc;

	struct NoBrowser;

	impl UrlOpener for NoBrowser {
		fn open(&self, _url: &str) -> std::io::Result<()> {
			Ok(())
		}
	}

	struct EmptyApi;

	#[async_trait]
	impl JobsApi for EmptyApi {
		async fn stats(&self) -> ApiResult<JobStats> {
			Ok(JobStats::default())
		}

		async fn today_jobs(&self) -> ApiResult<Vec<Job>> {
			Ok(Vec::new())
		}

		async fn jobs_page(&self, _query: &JobQuery) -> ApiResult<JobPage> {
			Ok(JobPage::default())
		}

		async fn trigger_refresh(&self) -> ApiResult<()> {
			Err(ApiError::Decode {
				endpoint: "refresh",
				message: "unused".to_string(),
			})
		}

		async fn health(&self) -> ApiResult<HealthStatus> {
			Ok(HealthStatus {
				status: "healthy".to_string(),
				timestamp: None,
			})
		}
	}

	fn setup() -> (Terminal<TestBackend>, App, Dispatcher, mpsc::UnboundedReceiver<Msg>) {
		let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
		let app = App::new(Theme::dark(), Locale::POSIX, Box::new(NoBrowser));
		let (tx, rx) = mpsc::unbounded_channel();
		let dispatcher = Dispatcher::new(Arc::new(EmptyApi), tx);
		(terminal, app, dispatcher, rx)
	}

	#[test]
	fn test_finish_session_keeps_run_error() {
		let err = finish_session(Err(anyhow::anyhow!("draw failed")), Err(anyhow::anyhow!("raw mode")))
			.unwrap_err();
		assert_eq!(err.to_string(), "draw failed");
	}

	#[test]
	fn test_finish_session_reports_restore_error_after_clean_run() {
		let err = finish_session(Ok(()), Err(anyhow::anyhow!("raw mode"))).unwrap_err();
		assert_eq!(err.to_string(), "raw mode");
		assert!(finish_session(Ok(()), Ok(())).is_ok());
	}

	#[tokio::test]
	async fn test_quit_key_ends_loop() {
		let (mut terminal, mut app, dispatcher, mut rx) = setup();
		let mut events = ScriptedEventSource::new([Event::Key(char_key('a')), Event::Key(char_key('q'))]);

		run_app(&mut terminal, &mut app, &mut events, &dispatcher, &mut rx)
			.await
			.unwrap();

		assert!(app.should_quit());
		assert_eq!(app.state.view_mode, ViewMode::All);
		assert_eq!(events.remaining(), 0);
	}

	#[tokio::test]
	async fn test_exhausted_source_ends_loop() {
		let (mut terminal, mut app, dispatcher, mut rx) = setup();
		let mut events = ScriptedEventSource::new([Event::Tick, Event::Resize(100, 30)]);

		run_app(&mut terminal, &mut app, &mut events, &dispatcher, &mut rx)
			.await
			.unwrap();

		assert!(!app.should_quit());
		let screen = buffer_to_string(terminal.backend().buffer());
		assert!(screen.contains("Job Checker Dashboard"));
	}

	#[tokio::test]
	async fn test_results_flow_back_into_state() {
		let (mut terminal, mut app, dispatcher, mut rx) = setup();
		dispatcher.dispatch_all(app.init());

		// Stats, today's jobs and health.
		for _ in 0..3 {
			let msg = rx.recv().await.unwrap();
			dispatcher.dispatch_all(app.handle_msg(msg));
		}

		assert!(!app.state.loading);
		assert!(app.state.stats.is_some());
		terminal.draw(|frame| app.render(frame)).unwrap();
		let screen = buffer_to_string(terminal.backend().buffer());
		assert!(screen.contains("● healthy"));
		assert!(screen.contains("No jobs found"));
	}
}

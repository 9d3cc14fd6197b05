// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use jobdash_api::JobsApi;
use tokio::sync::mpsc;

use crate::{Effect, Msg};

/// Runs [`Effect`]s against a [`JobsApi`] and feeds results back as [`Msg`]s.
///
/// Each effect runs on its own task; requests are never awaited in sequence,
/// so completion order is whatever the backend gives us. Ordering is settled
/// by the generation check in [`crate::update`].
#[derive(Clone)]
pub struct Dispatcher {
	api: Arc<dyn JobsApi>,
	tx: mpsc::UnboundedSender<Msg>,
}

impl Dispatcher {
	pub fn new(api: Arc<dyn JobsApi>, tx: mpsc::UnboundedSender<Msg>) -> Self {
		Self { api, tx }
	}

	pub fn dispatch_all(&self, effects: impl IntoIterator<Item = Effect>) {
		for effect in effects {
			self.dispatch(effect);
		}
	}

	pub fn dispatch(&self, effect: Effect) {
		tracing::trace!(effect = effect.name(), "dispatching");
		let api = Arc::clone(&self.api);
		let tx = self.tx.clone();
		tokio::spawn(async move {
			let msg = run(api.as_ref(), effect).await;
			if tx.send(msg).is_err() {
				tracing::debug!("message channel closed, dropping result");
			}
		});
	}
}

async fn run(api: &dyn JobsApi, effect: Effect) -> Msg {
	match effect {
		Effect::FetchStats(generation) => Msg::StatsLoaded(generation, api.stats().await),
		Effect::FetchTodayJobs(generation) => Msg::TodayJobsLoaded(generation, api.today_jobs().await),
		Effect::FetchJobsPage(generation, query) => {
			Msg::JobsPageLoaded(generation, api.jobs_page(&query).await)
		}
		Effect::TriggerRefresh => Msg::RefreshCompleted(api.trigger_refresh().await),
		Effect::CheckHealth => Msg::HealthChecked(api.health().await),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{update, DashboardState, Generation};
	use async_trait::async_trait;
	use jobdash_api::{ApiError, Result};
	use jobdash_core::{HealthStatus, Job, JobPage, JobQuery, JobStats, ViewMode};
	use std::sync::Mutex;

	#[derive(Default)]
	struct FakeApi {
		queries: Mutex<Vec<JobQuery>>,
		refreshes: Mutex<u32>,
		fail_refresh: bool,
	}

	#[async_trait]
	impl JobsApi for FakeApi {
		async fn stats(&self) -> Result<JobStats> {
			Ok(JobStats {
				total_jobs: 42,
				jobs_today: 2,
				..Default::default()
			})
		}

		async fn today_jobs(&self) -> Result<Vec<Job>> {
			Ok(Vec::new())
		}

		async fn jobs_page(&self, query: &JobQuery) -> Result<JobPage> {
			self.queries.lock().unwrap().push(query.clone());
			Ok(JobPage {
				jobs: Vec::new(),
				total: 41,
				page: Some(query.page),
				per_page: Some(query.per_page),
			})
		}

		async fn trigger_refresh(&self) -> Result<()> {
			*self.refreshes.lock().unwrap() += 1;
			if self.fail_refresh {
				return Err(ApiError::Decode {
					endpoint: "refresh",
					message: "nope".to_string(),
				});
			}
			Ok(())
		}

		async fn health(&self) -> Result<HealthStatus> {
			Ok(HealthStatus {
				status: "healthy".to_string(),
				timestamp: None,
			})
		}
	}

	#[tokio::test]
	async fn test_effect_results_come_back_as_messages() {
		let api = Arc::new(FakeApi::default());
		let (tx, mut rx) = mpsc::unbounded_channel();
		let dispatcher = Dispatcher::new(api.clone(), tx);

		dispatcher.dispatch(Effect::FetchStats(Generation(7)));
		match rx.recv().await {
			Some(Msg::StatsLoaded(Generation(7), Ok(stats))) => assert_eq!(stats.total_jobs, 42),
			other => panic!("unexpected message {other:?}"),
		}
	}

	#[tokio::test]
	async fn test_all_mode_round_trip_through_reducer() {
		let api = Arc::new(FakeApi::default());
		let (tx, mut rx) = mpsc::unbounded_channel();
		let dispatcher = Dispatcher::new(api.clone(), tx);
		let mut state = DashboardState::new();

		dispatcher.dispatch_all(update(&mut state, Msg::SetViewMode(ViewMode::All)));
		for _ in 0..2 {
			let msg = rx.recv().await.unwrap();
			dispatcher.dispatch_all(update(&mut state, msg));
		}

		assert!(!state.loading);
		assert_eq!(state.pagination.total_pages(), 3);
		assert_eq!(state.stats.as_ref().map(|s| s.total_jobs), Some(42));
		assert_eq!(api.queries.lock().unwrap()[0].page, 1);
	}

	#[tokio::test]
	async fn test_failed_refresh_still_refetches() {
		let api = Arc::new(FakeApi {
			fail_refresh: true,
			..Default::default()
		});
		let (tx, mut rx) = mpsc::unbounded_channel();
		let dispatcher = Dispatcher::new(api.clone(), tx);
		let mut state = DashboardState::new();

		dispatcher.dispatch_all(update(&mut state, Msg::Refresh));
		let msg = rx.recv().await.unwrap();
		assert!(matches!(msg, Msg::RefreshCompleted(Err(_))));

		let effects = update(&mut state, msg);
		assert_eq!(effects.len(), 2);
		assert_eq!(*api.refreshes.lock().unwrap(), 1);
	}
}

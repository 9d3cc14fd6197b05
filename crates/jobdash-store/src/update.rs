// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use jobdash_core::{total_pages_for, ViewMode};

use crate::{DashboardState, Effect, HealthState, Msg};

/// Apply `msg` to `state` and return the effects it requires.
pub fn update(state: &mut DashboardState, msg: Msg) -> Vec<Effect> {
	match msg {
		Msg::Init => {
			let mut effects = state.refetch();
			effects.push(Effect::CheckHealth);
			effects
		}

		Msg::SetViewMode(mode) => {
			if state.view_mode == mode {
				return Vec::new();
			}
			tracing::debug!(from = ?state.view_mode, to = ?mode, "switching view mode");
			state.view_mode = mode;
			state.pagination.reset();
			if mode == ViewMode::Today {
				state.pagination.set_total_pages(1);
			}
			state.refetch()
		}

		Msg::SetFilter(field, value) => {
			let changed = state.filters.set(field, value);
			let moved = state.pagination.reset();
			if !changed && !moved {
				return Vec::new();
			}
			state.refetch()
		}

		Msg::ClearFilters => {
			let had_filters = !state.filters.is_empty();
			state.filters.clear();
			let moved = state.pagination.reset();
			if !had_filters && !moved {
				return Vec::new();
			}
			state.refetch()
		}

		Msg::NextPage => {
			if state.view_mode.is_paged() && state.pagination.next() {
				state.refetch()
			} else {
				Vec::new()
			}
		}

		Msg::PrevPage => {
			if state.view_mode.is_paged() && state.pagination.prev() {
				state.refetch()
			} else {
				Vec::new()
			}
		}

		Msg::Refresh => {
			if state.refreshing {
				return Vec::new();
			}
			state.refreshing = true;
			vec![Effect::TriggerRefresh]
		}

		Msg::RefreshCompleted(result) => {
			state.refreshing = false;
			if let Err(error) = result {
				tracing::error!(%error, "error refreshing jobs");
			}
			state.refetch()
		}

		Msg::StatsLoaded(generation, result) => {
			if generation != state.stats_generation {
				tracing::debug!(?generation, latest = ?state.stats_generation, "dropping stale stats response");
				return Vec::new();
			}
			match result {
				Ok(stats) => state.stats = Some(stats),
				Err(error) => tracing::error!(%error, "error fetching stats"),
			}
			Vec::new()
		}

		Msg::TodayJobsLoaded(generation, result) => {
			if generation != state.jobs_generation {
				tracing::debug!(?generation, latest = ?state.jobs_generation, "dropping stale jobs response");
				return Vec::new();
			}
			state.loading = false;
			match result {
				Ok(jobs) => {
					state.jobs = jobs;
					state.pagination.set_total_pages(1);
				}
				Err(error) => tracing::error!(%error, "error fetching today's jobs"),
			}
			Vec::new()
		}

		Msg::JobsPageLoaded(generation, result) => {
			if generation != state.jobs_generation {
				tracing::debug!(?generation, latest = ?state.jobs_generation, "dropping stale jobs response");
				return Vec::new();
			}
			state.loading = false;
			match result {
				Ok(page) => {
					state.pagination.set_total_pages(total_pages_for(page.total));
					state.jobs = page.jobs;
				}
				Err(error) => tracing::error!(%error, "error fetching jobs"),
			}
			Vec::new()
		}

		Msg::HealthChecked(result) => {
			state.health = match result {
				Ok(status) if status.is_healthy() => HealthState::Healthy,
				Ok(status) => HealthState::Degraded(status.status),
				Err(error) => {
					tracing::warn!(%error, "health check failed");
					HealthState::Unreachable
				}
			};
			Vec::new()
		}
	}
}

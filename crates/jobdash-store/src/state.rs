// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use jobdash_core::{Filters, Job, JobQuery, JobStats, Pagination, ViewMode};

use crate::{Effect, Generation};

/// Backend reachability as last observed by a health probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HealthState {
	#[default]
	Unknown,
	Healthy,
	Degraded(String),
	Unreachable,
}

impl HealthState {
	pub fn label(&self) -> &str {
		match self {
			HealthState::Unknown => "checking",
			HealthState::Healthy => "healthy",
			HealthState::Degraded(status) => status,
			HealthState::Unreachable => "unreachable",
		}
	}
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
	pub jobs: Vec<Job>,
	pub stats: Option<JobStats>,
	pub loading: bool,
	pub refreshing: bool,
	pub view_mode: ViewMode,
	pub pagination: Pagination,
	pub filters: Filters,
	pub health: HealthState,
	pub(crate) stats_generation: Generation,
	pub(crate) jobs_generation: Generation,
}

impl DashboardState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn stats_generation(&self) -> Generation {
		self.stats_generation
	}

	pub fn jobs_generation(&self) -> Generation {
		self.jobs_generation
	}

	/// The request that would fetch the current page with the current filters.
	pub fn current_query(&self) -> JobQuery {
		JobQuery::new(self.pagination.page(), self.filters.clone())
	}

	pub(crate) fn issue_stats_fetch(&mut self) -> Effect {
		self.stats_generation = self.stats_generation.next();
		Effect::FetchStats(self.stats_generation)
	}

	pub(crate) fn issue_jobs_fetch(&mut self) -> Effect {
		self.jobs_generation = self.jobs_generation.next();
		self.loading = true;
		match self.view_mode {
			ViewMode::Today => Effect::FetchTodayJobs(self.jobs_generation),
			ViewMode::All => Effect::FetchJobsPage(self.jobs_generation, self.current_query()),
		}
	}

	/// Stats plus the jobs fetch for the active view.
	pub(crate) fn refetch(&mut self) -> Vec<Effect> {
		vec![self.issue_stats_fetch(), self.issue_jobs_fetch()]
	}
}

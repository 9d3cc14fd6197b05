// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use jobdash_api::ApiError;
use jobdash_core::{FilterField, HealthStatus, Job, JobPage, JobQuery, JobStats, ViewMode};

/// Monotonic request stamp, one sequence per resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(pub u64);

impl Generation {
	pub fn next(self) -> Self {
		Generation(self.0 + 1)
	}
}

#[derive(Debug)]
pub enum Msg {
	/// First render: load everything for the initial view.
	Init,
	SetViewMode(ViewMode),
	SetFilter(FilterField, String),
	ClearFilters,
	NextPage,
	PrevPage,
	Refresh,
	StatsLoaded(Generation, Result<JobStats, ApiError>),
	TodayJobsLoaded(Generation, Result<Vec<Job>, ApiError>),
	JobsPageLoaded(Generation, Result<JobPage, ApiError>),
	RefreshCompleted(Result<(), ApiError>),
	HealthChecked(Result<HealthStatus, ApiError>),
}

/// Side effects requested by [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
	FetchStats(Generation),
	FetchTodayJobs(Generation),
	FetchJobsPage(Generation, JobQuery),
	TriggerRefresh,
	CheckHealth,
}

impl Effect {
	pub fn name(&self) -> &'static str {
		match self {
			Effect::FetchStats(_) => "fetch_stats",
			Effect::FetchTodayJobs(_) => "fetch_today_jobs",
			Effect::FetchJobsPage(..) => "fetch_jobs_page",
			Effect::TriggerRefresh => "trigger_refresh",
			Effect::CheckHealth => "check_health",
		}
	}
}

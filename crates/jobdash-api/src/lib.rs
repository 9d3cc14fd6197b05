// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client for the jobs backend HTTP API.
//!
//! # Endpoints
//!
//! | operation | request |
//! |---|---|
//! | [`JobsApi::stats`] | `GET {base}/stats` |
//! | [`JobsApi::today_jobs`] | `GET {base}/jobs/today` |
//! | [`JobsApi::jobs_page`] | `GET {base}/jobs?page=&per_page=20&...` |
//! | [`JobsApi::trigger_refresh`] | `POST {base}/refresh` |
//! | [`JobsApi::health`] | `GET {base}/health` |
//!
//! Calls are single-shot: no retry, no timeout, no cancellation.

mod client;
mod error;

use async_trait::async_trait;
use jobdash_core::{HealthStatus, Job, JobPage, JobQuery, JobStats};

pub use client::HttpJobsApi;
pub use error::{ApiError, Result};

/// Read/write operations against the jobs backend.
#[async_trait]
pub trait JobsApi: Send + Sync {
	async fn stats(&self) -> Result<JobStats>;

	async fn today_jobs(&self) -> Result<Vec<Job>>;

	async fn jobs_page(&self, query: &JobQuery) -> Result<JobPage>;

	/// Ask the backend to re-ingest. The response body is ignored.
	async fn trigger_refresh(&self) -> Result<()>;

	async fn health(&self) -> Result<HealthStatus>;
}

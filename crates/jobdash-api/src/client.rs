// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use jobdash_core::{HealthStatus, Job, JobPage, JobQuery, JobStats};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{ApiError, JobsApi, Result};

/// [`JobsApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpJobsApi {
	base_url: Url,
	http: reqwest::Client,
}

impl HttpJobsApi {
	/// `base_url` is the API root, e.g. `http://localhost:8000/api`.
	pub fn new(base_url: &str) -> Result<Self> {
		Self::with_client(base_url, jobdash_common_http::new_client())
	}

	pub fn with_client(base_url: &str, http: reqwest::Client) -> Result<Self> {
		let mut base_url = Url::parse(base_url)?;
		// Url::join replaces the last segment unless the path ends in '/'.
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());
			base_url.set_path(&path);
		}
		Ok(Self { base_url, http })
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	fn endpoint(&self, path: &str) -> Result<Url> {
		Ok(self.base_url.join(path)?)
	}

	async fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str, url: Url) -> Result<T> {
		tracing::debug!(%url, endpoint, "GET");
		let response = self.http.get(url).send().await?;
		decode(endpoint, response).await
	}
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
	let status = response.status();
	if status.is_success() {
		return Ok(response);
	}
	let body = response.text().await.unwrap_or_default();
	Err(ApiError::Status { status, body })
}

async fn decode<T: DeserializeOwned>(endpoint: &'static str, response: reqwest::Response) -> Result<T> {
	let response = check_status(response).await?;
	let body = response.text().await?;
	serde_json::from_str(&body).map_err(|e| ApiError::Decode {
		endpoint,
		message: e.to_string(),
	})
}

#[async_trait]
impl JobsApi for HttpJobsApi {
	async fn stats(&self) -> Result<JobStats> {
		let url = self.endpoint("stats")?;
		self.get_json("stats", url).await
	}

	async fn today_jobs(&self) -> Result<Vec<Job>> {
		let url = self.endpoint("jobs/today")?;
		self.get_json("jobs/today", url).await
	}

	async fn jobs_page(&self, query: &JobQuery) -> Result<JobPage> {
		let mut url = self.endpoint("jobs")?;
		url.query_pairs_mut()
			.extend_pairs(query.to_pairs().iter().map(|(k, v)| (*k, v.as_str())));
		self.get_json("jobs", url).await
	}

	async fn trigger_refresh(&self) -> Result<()> {
		let url = self.endpoint("refresh")?;
		tracing::debug!(%url, "POST");
		let response = self.http.post(url).send().await?;
		check_status(response).await?;
		Ok(())
	}

	async fn health(&self) -> Result<HealthStatus> {
		let url = self.endpoint("health")?;
		self.get_json("health", url).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_base_url_gets_trailing_slash() {
		let api = HttpJobsApi::new("http://localhost:8000/api").unwrap();
		assert_eq!(api.base_url().as_str(), "http://localhost:8000/api/");
		assert_eq!(
			api.endpoint("jobs/today").unwrap().as_str(),
			"http://localhost:8000/api/jobs/today"
		);
	}

	#[test]
	fn test_base_url_already_slashed() {
		let api = HttpJobsApi::new("https://jobs.example.com/api/").unwrap();
		assert_eq!(
			api.endpoint("stats").unwrap().as_str(),
			"https://jobs.example.com/api/stats"
		);
	}

	#[test]
	fn test_invalid_base_url() {
		let err = HttpJobsApi::new("not a url").unwrap_err();
		assert!(matches!(err, ApiError::InvalidUrl(_)));
	}
}

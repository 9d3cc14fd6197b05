// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Wire model for the jobs backend.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A single job posting as produced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
	#[serde(deserialize_with = "string_or_number")]
	pub id: String,
	pub title: String,
	pub company: String,
	pub location: String,
	pub url: String,
	/// ISO-8601 timestamp, with or without offset.
	pub created_at: String,
	pub source: String,
	pub scope: String,
	pub is_stretch: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

/// Aggregated counts, recomputed by the backend on every request.
///
/// Map keys keep the order the backend sent them in; "top" entries are the
/// first key, not the largest count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobStats {
	pub total_jobs: u64,
	pub jobs_today: u64,
	#[serde(default)]
	pub jobs_by_company: IndexMap<String, u64>,
	#[serde(default)]
	pub jobs_by_scope: IndexMap<String, u64>,
}

impl JobStats {
	pub fn top_company(&self) -> Option<&str> {
		self.jobs_by_company.keys().next().map(String::as_str)
	}

	/// First scope key. Displayed under the "Top Source" card.
	pub fn top_scope(&self) -> Option<&str> {
		self.jobs_by_scope.keys().next().map(String::as_str)
	}
}

/// One page of filtered jobs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobPage {
	pub jobs: Vec<Job>,
	pub total: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub page: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub per_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
	pub status: String,
	#[serde(default)]
	pub timestamp: Option<String>,
}

impl HealthStatus {
	pub fn is_healthy(&self) -> bool {
		self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
	}
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Id {
		Text(String),
		Int(i64),
		Uint(u64),
	}

	Ok(match Id::deserialize(deserializer)? {
		Id::Text(s) => s,
		Id::Int(n) => n.to_string(),
		Id::Uint(n) => n.to_string(),
	})
}

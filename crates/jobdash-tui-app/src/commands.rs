// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! One-shot subcommands. Output goes to stdout; failures propagate to `main`
//! and end the process with a non-zero status.

use std::fmt::Write as _;

use anyhow::{bail, Context, Result};
use clap::Args;
use jobdash_api::JobsApi;
use jobdash_core::{
	format_count, format_timestamp, total_pages_for, FilterField, Filters, Job, JobQuery,
	JobStats, Locale,
};
use tracing::instrument;

#[derive(Args, Debug, Clone, Default)]
pub struct JobsArgs {
	/// Show today's jobs instead of a filtered page
	#[arg(long, conflicts_with_all = ["page", "company", "scope", "source", "search"])]
	pub today: bool,

	/// Page number, starting at 1
	#[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
	pub page: u32,

	#[arg(long)]
	pub company: Option<String>,

	#[arg(long)]
	pub scope: Option<String>,

	#[arg(long)]
	pub source: Option<String>,

	/// Free-text search
	#[arg(long)]
	pub search: Option<String>,

	/// Print the raw JSON response
	#[arg(long)]
	pub json: bool,
}

impl JobsArgs {
	fn query(&self) -> JobQuery {
		let mut filters = Filters::default();
		let fields = [
			(FilterField::Company, &self.company),
			(FilterField::Scope, &self.scope),
			(FilterField::Source, &self.source),
			(FilterField::Search, &self.search),
		];
		for (field, value) in fields {
			if let Some(value) = value {
				filters.set(field, value.trim());
			}
		}
		JobQuery::new(self.page, filters)
	}
}

#[instrument(skip(api))]
pub async fn stats(api: &dyn JobsApi, json: bool) -> Result<()> {
	let stats = api.stats().await.context("failed to fetch stats")?;
	if json {
		println!("{}", serde_json::to_string_pretty(&stats)?);
	} else {
		print!("{}", render_stats(&stats));
	}
	Ok(())
}

#[instrument(skip(api))]
pub async fn jobs(api: &dyn JobsApi, args: &JobsArgs, locale: Locale) -> Result<()> {
	if args.today {
		let jobs = api.today_jobs().await.context("failed to fetch today's jobs")?;
		if args.json {
			println!("{}", serde_json::to_string_pretty(&jobs)?);
		} else {
			print!("{}", render_jobs(&jobs, locale));
			println!("{} jobs today", jobs.len());
		}
		return Ok(());
	}

	let query = args.query();
	let page = api.jobs_page(&query).await.context("failed to fetch jobs")?;
	if args.json {
		println!("{}", serde_json::to_string_pretty(&page)?);
	} else {
		print!("{}", render_jobs(&page.jobs, locale));
		println!(
			"Page {} of {} ({} jobs)",
			query.page,
			total_pages_for(page.total).max(1),
			format_count(page.total)
		);
	}
	Ok(())
}

#[instrument(skip(api))]
pub async fn refresh(api: &dyn JobsApi) -> Result<()> {
	api.trigger_refresh().await.context("failed to trigger refresh")?;
	println!("Refresh triggered");
	Ok(())
}

/// Prints the backend status; an unhealthy status is an error.
#[instrument(skip(api))]
pub async fn health(api: &dyn JobsApi) -> Result<()> {
	let health = api.health().await.context("backend unreachable")?;
	match &health.timestamp {
		Some(ts) => println!("{} ({ts})", health.status),
		None => println!("{}", health.status),
	}
	if !health.is_healthy() {
		bail!("backend reports status {:?}", health.status);
	}
	Ok(())
}

pub fn render_stats(stats: &JobStats) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Total jobs:  {}", format_count(stats.total_jobs));
	let _ = writeln!(out, "Jobs today:  {}", format_count(stats.jobs_today));
	let sections = [
		("By company", &stats.jobs_by_company),
		("By scope", &stats.jobs_by_scope),
	];
	for (heading, counts) in sections {
		if counts.is_empty() {
			continue;
		}
		let _ = writeln!(out, "\n{heading}:");
		let width = counts.keys().map(|k| k.chars().count()).max().unwrap_or(0);
		for (name, count) in counts {
			let _ = writeln!(out, "  {name:<width$}  {}", format_count(*count));
		}
	}
	out
}

pub fn render_jobs(jobs: &[Job], locale: Locale) -> String {
	if jobs.is_empty() {
		return "No jobs found\n".to_string();
	}

	let mut out = String::new();
	for job in jobs {
		let stretch = if job.is_stretch { "  [Stretch]" } else { "" };
		let _ = writeln!(out, "{}{stretch}", job.title);
		let _ = writeln!(
			out,
			"  {} · {} · {}",
			job.company,
			job.location,
			format_timestamp(&job.created_at, locale)
		);
		let _ = writeln!(out, "  [{}] [{}]  {}", job.scope, job.source, job.url);
		let _ = writeln!(out);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	fn job(title: &str, stretch: bool) -> Job {
		Job {
			id: "7".to_string(),
			title: title.to_string(),
			company: "Acme".to_string(),
			location: "Austin, TX".to_string(),
			url: "https://jobs.example.com/7".to_string(),
			created_at: "not a date".to_string(),
			source: "wwr".to_string(),
			scope: "Austin".to_string(),
			is_stretch: stretch,
			description: None,
		}
	}

	#[test]
	fn test_render_stats() {
		let stats = JobStats {
			total_jobs: 1500,
			jobs_today: 5,
			jobs_by_company: [("Acme".to_string(), 10), ("Initech".to_string(), 2)]
				.into_iter()
				.collect(),
			jobs_by_scope: Default::default(),
		};
		let out = render_stats(&stats);

		assert!(out.starts_with("Total jobs:  1,500\nJobs today:  5\n"));
		assert!(out.contains("By company:\n  Acme     10\n  Initech  2\n"));
		assert!(!out.contains("By scope"));
	}

	#[test]
	fn test_render_jobs() {
		let out = render_jobs(&[job("Rust Dev", true), job("Go Dev", false)], Locale::POSIX);
		assert!(out.contains("Rust Dev  [Stretch]\n"));
		assert!(out.contains("Go Dev\n"));
		assert!(out.contains("  Acme · Austin, TX · not a date\n"));
		assert!(out.contains("  [Austin] [wwr]  https://jobs.example.com/7\n"));
		assert_eq!(out.matches("[Stretch]").count(), 1);
	}

	#[test]
	fn test_render_no_jobs() {
		assert_eq!(render_jobs(&[], Locale::POSIX), "No jobs found\n");
	}

	#[test]
	fn test_query_from_args_skips_blank_filters() {
		let args = JobsArgs {
			page: 3,
			company: Some("Acme".to_string()),
			search: Some("  ".to_string()),
			..Default::default()
		};
		let query = args.query();
		assert_eq!(query.page, 3);
		assert_eq!(query.filters.company, "Acme");
		assert_eq!(query.filters.search, "");
		assert_eq!(
			query.to_pairs(),
			vec![
				("page", "3".to_string()),
				("per_page", "20".to_string()),
				("company", "Acme".to_string()),
			]
		);
	}
}

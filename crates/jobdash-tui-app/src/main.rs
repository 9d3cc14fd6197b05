// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod app;
mod commands;
mod keymap;
mod layout;
mod logging;
mod terminal;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jobdash_api::{HttpJobsApi, JobsApi};
use jobdash_config::{load_config, CliOverrides, DashboardConfig};
use jobdash_core::{resolve_locale, Locale};
use jobdash_store::Dispatcher;
use jobdash_tui_core::CrosstermEventSource;
use jobdash_tui_theme::Theme;
use tokio::sync::mpsc;
use tracing::info;

use app::{App, SystemBrowser};
use commands::JobsArgs;
use logging::{init_tracing, LogTarget};

#[derive(Parser, Debug)]
#[command(name = "jobdash", version, about = "Job listing dashboard", long_about = None)]
struct Args {
	/// Path to custom configuration file
	#[arg(short, long, global = true)]
	config: Option<PathBuf>,

	/// Backend API base URL (overrides config)
	#[arg(long, global = true)]
	api_url: Option<String>,

	/// Log level (overrides config)
	#[arg(short, long, global = true)]
	log_level: Option<String>,

	/// Log format: pretty, json or compact (overrides config)
	#[arg(long, global = true)]
	log_format: Option<String>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Interactive dashboard (default)
	Tui,
	/// Print the stats snapshot
	Stats {
		/// Print the raw JSON response
		#[arg(long)]
		json: bool,
	},
	/// Print one page of jobs
	Jobs(JobsArgs),
	/// Ask the backend to re-ingest job sources
	Refresh,
	/// Print backend health
	Health,
	/// Show version information
	Version,
}

impl From<&Args> for CliOverrides {
	fn from(args: &Args) -> Self {
		CliOverrides {
			api_url: args.api_url.clone(),
			log_level: args.log_level.clone(),
			log_format: args.log_format.clone(),
			config_file: args.config.clone(),
		}
	}
}

fn detect_locale(config: &DashboardConfig) -> Locale {
	let tag = config.ui.locale.clone().or_else(sys_locale::get_locale);
	resolve_locale(tag.as_deref())
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", jobdash_common_version::format_version_info());
		return Ok(());
	}

	let config = load_config(CliOverrides::from(&args)).context("failed to load configuration")?;

	let command = args.command.unwrap_or(Command::Tui);
	let target = match command {
		Command::Tui => LogTarget::File,
		_ => LogTarget::Stderr,
	};
	init_tracing(&config.logging, target)?;

	info!(api_url = %config.api.base_url, "starting jobdash");

	let api: Arc<dyn JobsApi> = Arc::new(
		HttpJobsApi::new(&config.api.base_url).context("invalid API URL")?,
	);
	let locale = detect_locale(&config);

	match command {
		Command::Tui => run_dashboard(&config, api, locale).await,
		Command::Stats { json } => commands::stats(api.as_ref(), json).await,
		Command::Jobs(jobs_args) => commands::jobs(api.as_ref(), &jobs_args, locale).await,
		Command::Refresh => commands::refresh(api.as_ref()).await,
		Command::Health => commands::health(api.as_ref()).await,
		Command::Version => Ok(()),
	}
}

async fn run_dashboard(config: &DashboardConfig, api: Arc<dyn JobsApi>, locale: Locale) -> Result<()> {
	let (tx, mut rx) = mpsc::unbounded_channel();
	let dispatcher = Dispatcher::new(api, tx);
	let mut app = App::new(
		Theme::named(config.ui.theme.as_str()),
		locale,
		Box::new(SystemBrowser),
	);
	let mut events = CrosstermEventSource::spawn(config.ui.tick_rate);

	let mut term = terminal::setup_terminal()?;
	let result = terminal::run_app(&mut term, &mut app, &mut events, &dispatcher, &mut rx).await;
	terminal::finish_session(result, terminal::restore_terminal())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn test_cli_is_well_formed() {
		Args::command().debug_assert();
	}

	#[test]
	fn test_no_subcommand_means_dashboard() {
		let args = Args::parse_from(["jobdash", "--api-url", "http://example.com/api"]);
		assert!(args.command.is_none());
		let overrides = CliOverrides::from(&args);
		assert_eq!(overrides.api_url.as_deref(), Some("http://example.com/api"));
	}

	#[test]
	fn test_jobs_flags() {
		let args = Args::parse_from([
			"jobdash", "jobs", "--page", "2", "--company", "Acme", "--json", "-l", "debug",
		]);
		assert_eq!(args.log_level.as_deref(), Some("debug"));
		match args.command {
			Some(Command::Jobs(jobs)) => {
				assert_eq!(jobs.page, 2);
				assert_eq!(jobs.company.as_deref(), Some("Acme"));
				assert!(jobs.json);
				assert!(!jobs.today);
			}
			other => panic!("unexpected command: {other:?}"),
		}
	}

	#[test]
	fn test_log_format_flag_reaches_overrides() {
		let args = Args::parse_from(["jobdash", "stats", "--log-format", "json"]);
		let overrides = CliOverrides::from(&args);
		assert_eq!(overrides.log_format.as_deref(), Some("json"));
		assert!(CliOverrides::from(&Args::parse_from(["jobdash"])).log_format.is_none());
	}

	#[test]
	fn test_today_conflicts_with_filters() {
		let result = Args::try_parse_from(["jobdash", "jobs", "--today", "--company", "Acme"]);
		assert!(result.is_err());
	}

	#[test]
	fn test_page_zero_rejected() {
		let result = Args::try_parse_from(["jobdash", "jobs", "--page", "0"]);
		assert!(result.is_err());
	}
}

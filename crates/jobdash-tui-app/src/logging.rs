// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use jobdash_config::{runtime::LoggingConfig, LogFormat};
use tracing_subscriber::{
	fmt::{self, writer::BoxMakeWriter},
	layer::SubscriberExt,
	util::SubscriberInitExt,
	EnvFilter,
};

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
	/// The configured log file. Used while the dashboard owns the terminal.
	File,
	Stderr,
}

pub fn init_tracing(logging: &LoggingConfig, target: LogTarget) -> Result<()> {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(format!("jobdash={}", logging.level.as_str())));

	let (writer, ansi) = match target {
		LogTarget::File => {
			let file = open_log_file(&logging.file)?;
			(BoxMakeWriter::new(Mutex::new(file)), false)
		}
		LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
	};

	let registry = tracing_subscriber::registry().with(filter);
	match logging.format {
		LogFormat::Json => registry
			.with(fmt::layer().json().with_writer(writer))
			.try_init()?,
		LogFormat::Compact => registry
			.with(fmt::layer().compact().with_ansi(ansi).with_writer(writer))
			.try_init()?,
		LogFormat::Pretty => registry
			.with(fmt::layer().with_ansi(ansi).with_writer(writer))
			.try_init()?,
	}
	Ok(())
}

/// Open `path` for appending, creating it and its parent directory.
pub fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_open_log_file_creates_parents_and_appends() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("state/jobdash/jobdash.log");

		writeln!(open_log_file(&path).unwrap(), "first").unwrap();
		writeln!(open_log_file(&path).unwrap(), "second").unwrap();

		assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared build and version information for jobdash.
//!
//! Single source of truth for version, git SHA, build timestamp and platform,
//! used by the `version` subcommand and the HTTP User-Agent.

shadow_rs::shadow!(build);

/// Platform string in `{os}-{arch}` format, e.g. "linux-x86_64".
pub const PLATFORM: &str = env!("JOBDASH_PLATFORM");

/// Core build information.
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
	pub version: &'static str,
	pub git_sha: &'static str,
	pub build_timestamp: &'static str,
	pub platform: &'static str,
}

impl BuildInfo {
	/// Get the current build information (compile-time constants).
	#[allow(clippy::const_is_empty)]
	pub const fn current() -> Self {
		Self {
			version: build::PKG_VERSION,
			git_sha: if build::SHORT_COMMIT.is_empty() {
				"unknown"
			} else {
				build::SHORT_COMMIT
			},
			build_timestamp: build::BUILD_TIME,
			platform: PLATFORM,
		}
	}
}

/// Multi-line human readable version block for `jobdash version`.
pub fn format_version_info() -> String {
	let info = BuildInfo::current();
	format!(
		"jobdash {}\ngit sha:   {}\nbuilt:     {}\nplatform:  {}",
		info.version, info.git_sha, info.build_timestamp, info.platform
	)
}

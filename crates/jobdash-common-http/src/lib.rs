// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.
//!
//! Dashboard requests are deliberately plain: no retry layer and no request
//! timeout. A failed call is reported once and the caller keeps its previous
//! state.

use jobdash_common_version::BuildInfo;
use reqwest::{Client, ClientBuilder};

/// Creates a new HTTP client with the standard jobdash User-Agent header.
///
/// The User-Agent format is: `jobdash/{version} ({platform}; {git_sha})`
/// Example: `jobdash/0.1.0 (linux-x86_64; abc1234)`
pub fn new_client() -> Client {
	builder().build().expect("failed to build HTTP client")
}

/// Creates a new HTTP client builder with the standard User-Agent header.
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Returns the standard jobdash User-Agent string.
pub fn user_agent() -> String {
	let info = BuildInfo::current();
	format!("jobdash/{} ({}; {})", info.version, info.platform, info.git_sha)
}

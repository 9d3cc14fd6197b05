// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! API error types.

use reqwest::StatusCode;

/// Errors returned by [`crate::JobsApi`] calls.
///
/// The dashboard treats every variant the same way ("request failed"); the
/// split exists for logs and for the one-shot CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	/// Connection, TLS or transport failure
	#[error("request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// Non-2xx response
	#[error("server returned {status}: {body}")]
	Status { status: StatusCode, body: String },

	/// Body did not match the expected shape
	#[error("failed to decode {endpoint} response: {message}")]
	Decode { endpoint: &'static str, message: String },

	/// Base URL could not be parsed or joined
	#[error("invalid API URL: {0}")]
	InvalidUrl(#[from] url::ParseError),
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

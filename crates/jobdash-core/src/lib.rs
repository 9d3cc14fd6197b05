// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the job dashboard.
//!
//! This crate provides:
//! - The wire model consumed from the jobs backend ([`Job`], [`JobStats`], [`JobPage`])
//! - Client-side view state primitives ([`Filters`], [`Pagination`], [`ViewMode`])
//! - Pure display derivation (badge colors, timestamps, counts)

pub mod badge;
pub mod filters;
pub mod format;
pub mod model;
pub mod pagination;
pub mod query;
pub mod view;

pub use badge::{
	scope_badge, source_badge, BadgeColor, KNOWN_SCOPES, KNOWN_SOURCES, STRETCH_BADGE,
};
pub use filters::{FilterField, Filters};
pub use format::{format_count, format_timestamp, format_timestamp_in, resolve_locale};
pub use chrono::Locale;
pub use model::{HealthStatus, Job, JobPage, JobStats};
pub use pagination::{total_pages_for, Pagination};
pub use query::JobQuery;
pub use view::ViewMode;

/// Fixed page size used for every paged jobs request.
pub const PAGE_SIZE: u32 = 20;

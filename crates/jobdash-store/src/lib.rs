// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dashboard state container.
//!
//! State changes go through one function, [`update`], which mutates
//! [`DashboardState`] in place and returns the [`Effect`]s the change implies.
//! Effects are executed by a [`Dispatcher`], whose results come back in as
//! more [`Msg`]s:
//!
//! ```text
//!   key press ──► Msg ──► update ──► Effect ──► Dispatcher ──► JobsApi
//!                  ▲                                  │
//!                  └──────── Msg::*Loaded ◄───────────┘
//! ```
//!
//! Every stats and jobs request is stamped with a [`Generation`]; a response
//! only lands if it belongs to the newest request of its kind.

mod dispatch;
mod msg;
mod options;
mod state;
mod update;

pub use dispatch::Dispatcher;
pub use msg::{Effect, Generation, Msg};
pub use options::{cycle_option, FilterOptions};
pub use state::{DashboardState, HealthState};
pub use update::update;

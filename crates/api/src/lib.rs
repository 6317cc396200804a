// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation boundary layer for the firdesk case tracker.
//!
//! One function per user-facing operation: the server's route
//! handlers normalize nothing themselves — they hand the raw form and
//! query values to this crate, which normalizes them, applies domain
//! validation, talks to the store, and assembles the view models the
//! templates consume (rows with their display severities attached).
//!
//! Errors cross this boundary only as `ApiError`; store and domain
//! errors are translated explicitly and never leaked.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_store_error};
pub use handlers::{
    case_detail, dashboard, list_cases, register_case, reports, update_case,
};
pub use request_response::{
    CaseBadgeRow, CaseDetailView, CaseListRequest, CaseListRow, CaseListView, CaseView,
    DashboardView, EchoedFilter, NoteView, RegisterCaseRequest, RegisterCaseResponse, ReportView,
    TallyRow, UpdateCaseRequest,
};

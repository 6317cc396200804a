// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request DTOs and template view models.
//!
//! Request structs carry raw form/query values as `Option<String>`;
//! normalization (empty-means-absent, defaults, officer id parsing)
//! happens inside the operation functions. View models are the exact
//! shapes the templates consume and serialize into the Tera context.

use firdesk_domain::{GroupTally, Officer};
use serde::{Deserialize, Serialize};

/// Raw registration form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterCaseRequest {
    pub title: Option<String>,
    pub complainant: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Defaults to `Medium` when absent or empty.
    pub priority: Option<String>,
}

/// Result of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCaseResponse {
    /// The id assigned to the new case.
    pub case_id: i64,
    /// A success message.
    pub message: String,
}

/// Raw case-detail submission fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCaseRequest {
    /// Applied verbatim, even when absent (stored as the empty
    /// string); the update is always written.
    pub status: Option<String>,
    /// Parsed to an officer id; empty or non-numeric means
    /// unassigned. Existence is never checked.
    pub assigned_to: Option<String>,
    /// A note is recorded only when this is non-empty.
    pub notes: Option<String>,
}

/// Raw listing query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseListRequest {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub location: Option<String>,
}

/// A dashboard row: case summary plus display severities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseBadgeRow {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub status_severity: String,
    pub priority: String,
    pub priority_severity: String,
    pub updated_at: String,
}

/// View model for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    pub recent_cases: Vec<CaseBadgeRow>,
}

/// A listing row: joined case plus display severities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseListRow {
    pub id: i64,
    pub title: String,
    pub complainant_name: String,
    pub location: String,
    pub status: String,
    pub status_severity: String,
    pub priority: String,
    pub priority_severity: String,
    pub officer_name: Option<String>,
    pub updated_at: String,
}

/// View model for the case listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseListView {
    pub cases: Vec<CaseListRow>,
    /// The filters the listing was produced with, echoed back so the
    /// filter form can preserve its inputs.
    pub filter: EchoedFilter,
}

/// The listing filters as submitted, for form redisplay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoedFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub location: Option<String>,
}

/// The case panel of the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseView {
    pub id: i64,
    pub title: String,
    pub complainant_name: String,
    pub description: Option<String>,
    pub location: String,
    pub status: String,
    pub status_severity: String,
    pub priority: String,
    pub priority_severity: String,
    pub assigned_to: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

/// An investigation note row of the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteView {
    pub id: i64,
    pub officer_name: Option<String>,
    pub notes: String,
    pub updated_at: String,
}

/// View model for the case detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDetailView {
    pub case: CaseView,
    pub officers: Vec<Officer>,
    pub investigations: Vec<NoteView>,
    /// The fixed status enumeration, as selectable options.
    pub statuses: Vec<String>,
}

/// One badge-decorated aggregate row of the reports page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyRow {
    pub label: String,
    pub count: i64,
    pub severity: String,
}

/// View model for the reports page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportView {
    pub total: i64,
    pub by_status: Vec<TallyRow>,
    pub by_priority: Vec<TallyRow>,
    /// Top 5 locations by case count, descending. Locations carry no
    /// severity badge.
    pub top_locations: Vec<GroupTally>,
}

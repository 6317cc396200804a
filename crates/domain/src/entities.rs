// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain data-transfer structs for the three persisted entities and
//! the read/write contracts the storage layer exposes over them.
//!
//! Timestamps are carried as the store-assigned `CURRENT_TIMESTAMP`
//! strings; the application never parses or does arithmetic on them.

use serde::{Deserialize, Serialize};

/// The role id that marks a user as an officer, eligible for case
/// assignment. Users are created out of band; this is the only role
/// the application ever queries for.
pub const OFFICER_ROLE_ID: i64 = 2;

/// A user with the officer role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officer {
    pub id: i64,
    pub full_name: String,
}

/// A full FIR row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: i64,
    pub title: String,
    pub complainant_name: String,
    pub description: Option<String>,
    pub location: String,
    pub priority: String,
    pub status: String,
    /// Nullable officer reference. Informational only: no referential
    /// integrity is enforced, so the id may not resolve to a user.
    pub assigned_to: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

/// The subset of case fields the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSummary {
    pub id: i64,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub updated_at: String,
}

/// A case row joined with the assigned officer's display name.
///
/// Cases with no assigned officer, or an officer id that does not
/// resolve, still appear with `officer_name` absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseListing {
    pub id: i64,
    pub title: String,
    pub complainant_name: String,
    pub description: Option<String>,
    pub location: String,
    pub priority: String,
    pub status: String,
    pub assigned_to: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    pub officer_name: Option<String>,
}

/// An investigation note joined with the authoring officer's name.
///
/// Notes are append-only: once created they are never edited or
/// deleted. The officer reference stores whatever the form submitted
/// and is not validated against the users table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestigationNote {
    pub id: i64,
    pub fir_id: i64,
    pub officer: Option<i64>,
    pub notes: String,
    pub updated_at: String,
    pub officer_name: Option<String>,
}

/// The fields of a case registration, after normalization.
///
/// Status is absent deliberately: the registration workflow always
/// forces new cases to `Open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCase {
    pub title: String,
    pub complainant_name: String,
    pub description: Option<String>,
    pub location: String,
    pub priority: String,
}

/// The fields of a case-detail submission, after normalization.
///
/// The update is applied unconditionally, even when status or
/// assignment are unchanged or empty; an investigation note is
/// recorded only when `notes` is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseUpdate {
    pub status: String,
    pub assigned_to: Option<i64>,
    pub notes: Option<String>,
}

/// Optional listing filters, combined with logical AND.
///
/// An absent filter is omitted from the predicate entirely; it never
/// narrows the result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFilter {
    /// Exact status match.
    pub status: Option<String>,
    /// Exact priority match.
    pub priority: Option<String>,
    /// Location substring match, using the store's collation.
    pub location: Option<String>,
}

/// One grouped-count row of the reporting aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTally {
    pub label: String,
    pub count: i64,
}

/// The four reporting aggregates over the FIR table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStatistics {
    pub total: i64,
    pub by_status: Vec<GroupTally>,
    pub by_priority: Vec<GroupTally>,
    /// Top 5 locations by case count, descending.
    pub top_locations: Vec<GroupTally>,
}

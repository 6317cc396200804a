// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The per-operation functions behind the HTTP routes.

use firdesk_domain::{
    CaseFilter, CaseListing, CasePriority, CaseRecord, CaseStatus, CaseSummary, CaseUpdate,
    InvestigationNote, NewCase, priority_severity, status_severity, validate_new_case,
};
use firdesk_persistence::Store;
use tracing::{debug, info};

use crate::error::{ApiError, translate_domain_error, translate_store_error};
use crate::request_response::{
    CaseBadgeRow, CaseDetailView, CaseListRequest, CaseListRow, CaseListView, CaseView,
    DashboardView, EchoedFilter, NoteView, RegisterCaseRequest, RegisterCaseResponse, ReportView,
    TallyRow, UpdateCaseRequest,
};

/// Number of cases the dashboard shows.
const DASHBOARD_LIMIT: u32 = 5;

/// Treats an empty or absent form value as absent.
///
/// Browsers submit empty strings for untouched inputs; everywhere in
/// the application those mean "not supplied".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parses a submitted officer reference.
///
/// Empty or non-numeric values mean unassigned. The id is not checked
/// against the users table; an unresolvable reference is stored as-is
/// and simply joins to no name.
fn parse_officer_ref(value: Option<String>) -> Option<i64> {
    non_empty(value).and_then(|v| v.parse::<i64>().ok())
}

fn badge_row(case: CaseSummary) -> CaseBadgeRow {
    CaseBadgeRow {
        id: case.id,
        title: case.title,
        status_severity: status_severity(&case.status).as_str().to_string(),
        status: case.status,
        priority_severity: priority_severity(&case.priority).as_str().to_string(),
        priority: case.priority,
        updated_at: case.updated_at,
    }
}

fn listing_row(case: CaseListing) -> CaseListRow {
    CaseListRow {
        id: case.id,
        title: case.title,
        complainant_name: case.complainant_name,
        location: case.location,
        status_severity: status_severity(&case.status).as_str().to_string(),
        status: case.status,
        priority_severity: priority_severity(&case.priority).as_str().to_string(),
        priority: case.priority,
        officer_name: case.officer_name,
        updated_at: case.updated_at,
    }
}

fn case_view(case: CaseRecord) -> CaseView {
    CaseView {
        id: case.id,
        title: case.title,
        complainant_name: case.complainant_name,
        description: case.description,
        location: case.location,
        status_severity: status_severity(&case.status).as_str().to_string(),
        status: case.status,
        priority_severity: priority_severity(&case.priority).as_str().to_string(),
        priority: case.priority,
        assigned_to: case.assigned_to,
        created_at: case.created_at,
        updated_at: case.updated_at,
    }
}

fn note_view(note: InvestigationNote) -> NoteView {
    NoteView {
        id: note.id,
        officer_name: note.officer_name,
        notes: note.notes,
        updated_at: note.updated_at,
    }
}

/// Assembles the dashboard: the five most-recently-updated cases with
/// their display severities attached.
///
/// # Errors
///
/// Returns `ApiError::Storage` if the store cannot be read.
pub fn dashboard(store: &Store) -> Result<DashboardView, ApiError> {
    let summaries: Vec<CaseSummary> = store
        .recent_cases(DASHBOARD_LIMIT)
        .map_err(|e| translate_store_error(&e))?;

    Ok(DashboardView {
        recent_cases: summaries.into_iter().map(badge_row).collect(),
    })
}

/// Assembles the filtered case listing.
///
/// Absent or empty query parameters are omitted from the predicate
/// entirely; supplied filters combine with logical AND.
///
/// # Errors
///
/// Returns `ApiError::Storage` if the store cannot be read.
pub fn list_cases(store: &Store, request: CaseListRequest) -> Result<CaseListView, ApiError> {
    let filter: CaseFilter = CaseFilter {
        status: non_empty(request.status),
        priority: non_empty(request.priority),
        location: non_empty(request.location),
    };

    let listings: Vec<CaseListing> = store
        .list_cases(&filter)
        .map_err(|e| translate_store_error(&e))?;
    debug!(count = listings.len(), "Listed cases");

    Ok(CaseListView {
        cases: listings.into_iter().map(listing_row).collect(),
        filter: EchoedFilter {
            status: filter.status,
            priority: filter.priority,
            location: filter.location,
        },
    })
}

/// Registers a new case.
///
/// Title, complainant name, and location must be non-empty; a missing
/// one fails the whole submission with a single message and nothing
/// is inserted. Priority defaults to `Medium` when absent or empty
/// and is otherwise stored as supplied; status is forced to `Open`.
///
/// # Errors
///
/// Returns `ApiError::ValidationFailed` for a missing mandatory
/// field, or `ApiError::Storage` if the insert fails.
pub fn register_case(
    store: &Store,
    request: RegisterCaseRequest,
) -> Result<RegisterCaseResponse, ApiError> {
    let new_case: NewCase = NewCase {
        title: request.title.unwrap_or_default(),
        complainant_name: request.complainant.unwrap_or_default(),
        description: non_empty(request.description),
        location: request.location.unwrap_or_default(),
        priority: non_empty(request.priority)
            .unwrap_or_else(|| CasePriority::Medium.as_str().to_string()),
    };

    validate_new_case(&new_case).map_err(|e| translate_domain_error(&e))?;

    let case_id: i64 = store
        .insert_case(&new_case)
        .map_err(|e| translate_store_error(&e))?;
    info!(case_id, title = %new_case.title, "Registered FIR");

    Ok(RegisterCaseResponse {
        case_id,
        message: String::from("FIR registered successfully"),
    })
}

/// Applies a case-detail submission.
///
/// Status, assignment, and the updated timestamp are written
/// unconditionally — even when the submitted values are unchanged or
/// empty, matching the original workflow. When notes text is present
/// an investigation note is recorded in the same transaction,
/// carrying the submitted officer value.
///
/// # Errors
///
/// Returns `ApiError::CaseNotFound` if the id does not resolve
/// (nothing is written), or `ApiError::Storage` on write failure.
pub fn update_case(
    store: &mut Store,
    case_id: i64,
    request: UpdateCaseRequest,
) -> Result<(), ApiError> {
    let update: CaseUpdate = CaseUpdate {
        status: request.status.unwrap_or_default(),
        assigned_to: parse_officer_ref(request.assigned_to),
        notes: non_empty(request.notes),
    };

    store
        .apply_case_update(case_id, &update)
        .map_err(|e| translate_store_error(&e))?;
    info!(case_id, status = %update.status, "Updated case");

    Ok(())
}

/// Assembles the case detail page: the case itself, the officer
/// roster for the assignment dropdown, and the case's investigation
/// notes newest-first.
///
/// # Errors
///
/// Returns `ApiError::CaseNotFound` if the id does not resolve, or
/// `ApiError::Storage` if the store cannot be read.
pub fn case_detail(store: &Store, case_id: i64) -> Result<CaseDetailView, ApiError> {
    let case: CaseRecord = store
        .get_case(case_id)
        .map_err(|e| translate_store_error(&e))?;
    let officers = store.list_officers().map_err(|e| translate_store_error(&e))?;
    let notes: Vec<InvestigationNote> = store
        .list_investigations(case_id)
        .map_err(|e| translate_store_error(&e))?;

    Ok(CaseDetailView {
        case: case_view(case),
        officers,
        investigations: notes.into_iter().map(note_view).collect(),
        statuses: CaseStatus::ALL
            .iter()
            .map(|status| status.as_str().to_string())
            .collect(),
    })
}

/// Assembles the reports page from the four aggregates.
///
/// # Errors
///
/// Returns `ApiError::Storage` if the store cannot be read.
pub fn reports(store: &Store) -> Result<ReportView, ApiError> {
    let stats = store
        .case_statistics()
        .map_err(|e| translate_store_error(&e))?;

    Ok(ReportView {
        total: stats.total,
        by_status: stats
            .by_status
            .into_iter()
            .map(|tally| TallyRow {
                severity: status_severity(&tally.label).as_str().to_string(),
                label: tally.label,
                count: tally.count,
            })
            .collect(),
        by_priority: stats
            .by_priority
            .into_iter()
            .map(|tally| TallyRow {
                severity: priority_severity(&tally.label).as_str().to_string(),
                label: tally.label,
                count: tally.count,
            })
            .collect(),
        top_locations: stats.top_locations,
    })
}

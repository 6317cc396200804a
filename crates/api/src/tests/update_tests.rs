// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use firdesk_persistence::Store;

use crate::tests::{create_test_store, register_test_case, seed_officer};
use crate::{ApiError, UpdateCaseRequest, case_detail, update_case};

#[test]
fn test_update_changes_status_and_assignment() {
    let mut store: Store = create_test_store();
    let officer_id: i64 = seed_officer(&store, "Insp. Rao");
    let case_id: i64 = register_test_case(&store, "Theft", "Sector 5");

    let request: UpdateCaseRequest = UpdateCaseRequest {
        status: Some(String::from("Assigned")),
        assigned_to: Some(officer_id.to_string()),
        notes: None,
    };
    update_case(&mut store, case_id, request).unwrap();

    let detail = case_detail(&store, case_id).unwrap();
    assert_eq!(detail.case.status, "Assigned");
    assert_eq!(detail.case.assigned_to, Some(officer_id));
    assert!(detail.investigations.is_empty());
}

#[test]
fn test_update_with_notes_records_investigation() {
    let mut store: Store = create_test_store();
    let officer_id: i64 = seed_officer(&store, "Insp. Rao");
    let case_id: i64 = register_test_case(&store, "Theft", "Sector 5");

    let request: UpdateCaseRequest = UpdateCaseRequest {
        status: Some(String::from("In Progress")),
        assigned_to: Some(officer_id.to_string()),
        notes: Some(String::from("Visited the scene")),
    };
    update_case(&mut store, case_id, request).unwrap();

    let detail = case_detail(&store, case_id).unwrap();
    assert_eq!(detail.investigations.len(), 1);
    assert_eq!(detail.investigations[0].notes, "Visited the scene");
    assert_eq!(
        detail.investigations[0].officer_name.as_deref(),
        Some("Insp. Rao")
    );
}

#[test]
fn test_update_with_empty_notes_records_no_investigation() {
    let mut store: Store = create_test_store();
    let case_id: i64 = register_test_case(&store, "Theft", "Sector 5");

    let request: UpdateCaseRequest = UpdateCaseRequest {
        status: Some(String::from("In Progress")),
        assigned_to: None,
        notes: Some(String::new()),
    };
    update_case(&mut store, case_id, request).unwrap();

    let detail = case_detail(&store, case_id).unwrap();
    assert!(detail.investigations.is_empty());
}

#[test]
fn test_update_applies_even_when_submission_is_empty() {
    let mut store: Store = create_test_store();
    let case_id: i64 = register_test_case(&store, "Theft", "Sector 5");

    update_case(&mut store, case_id, UpdateCaseRequest::default()).unwrap();

    let detail = case_detail(&store, case_id).unwrap();
    assert_eq!(detail.case.status, "");
    assert_eq!(detail.case.assigned_to, None);
}

#[test]
fn test_update_non_numeric_officer_means_unassigned() {
    let mut store: Store = create_test_store();
    let case_id: i64 = register_test_case(&store, "Theft", "Sector 5");

    let request: UpdateCaseRequest = UpdateCaseRequest {
        status: Some(String::from("Assigned")),
        assigned_to: Some(String::from("not-a-number")),
        notes: None,
    };
    update_case(&mut store, case_id, request).unwrap();

    let detail = case_detail(&store, case_id).unwrap();
    assert_eq!(detail.case.assigned_to, None);
}

#[test]
fn test_update_unresolvable_officer_is_stored() {
    let mut store: Store = create_test_store();
    let case_id: i64 = register_test_case(&store, "Theft", "Sector 5");

    // No user with id 999 exists; the reference is stored anyway.
    let request: UpdateCaseRequest = UpdateCaseRequest {
        status: Some(String::from("Assigned")),
        assigned_to: Some(String::from("999")),
        notes: None,
    };
    update_case(&mut store, case_id, request).unwrap();

    let detail = case_detail(&store, case_id).unwrap();
    assert_eq!(detail.case.assigned_to, Some(999));
}

#[test]
fn test_update_missing_case_is_not_found() {
    let mut store: Store = create_test_store();

    let result = update_case(&mut store, 999, UpdateCaseRequest::default());

    assert_eq!(result, Err(ApiError::CaseNotFound { case_id: 999 }));
}

#[test]
fn test_case_detail_missing_case_is_not_found() {
    let store: Store = create_test_store();

    let result = case_detail(&store, 999);

    assert_eq!(result, Err(ApiError::CaseNotFound { case_id: 999 }));
}

#[test]
fn test_case_detail_lists_fixed_status_options() {
    let store: Store = create_test_store();
    let case_id: i64 = register_test_case(&store, "Theft", "Sector 5");

    let detail = case_detail(&store, case_id).unwrap();

    assert_eq!(
        detail.statuses,
        vec!["Open", "Assigned", "In Progress", "Closed"]
    );
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, NewCase, validate_new_case};

fn create_valid_case() -> NewCase {
    NewCase {
        title: String::from("Theft"),
        complainant_name: String::from("A. Kumar"),
        description: Some(String::from("Bicycle stolen from the market")),
        location: String::from("Sector 5"),
        priority: String::from("Medium"),
    }
}

#[test]
fn test_valid_case_passes() {
    assert!(validate_new_case(&create_valid_case()).is_ok());
}

#[test]
fn test_empty_title_fails() {
    let mut new_case: NewCase = create_valid_case();
    new_case.title = String::new();

    assert_eq!(
        validate_new_case(&new_case),
        Err(DomainError::MissingRequiredFields)
    );
}

#[test]
fn test_empty_complainant_fails() {
    let mut new_case: NewCase = create_valid_case();
    new_case.complainant_name = String::new();

    assert_eq!(
        validate_new_case(&new_case),
        Err(DomainError::MissingRequiredFields)
    );
}

#[test]
fn test_empty_location_fails() {
    let mut new_case: NewCase = create_valid_case();
    new_case.location = String::new();

    assert_eq!(
        validate_new_case(&new_case),
        Err(DomainError::MissingRequiredFields)
    );
}

#[test]
fn test_description_and_priority_are_not_inspected() {
    let mut new_case: NewCase = create_valid_case();
    new_case.description = None;
    new_case.priority = String::new();

    assert!(validate_new_case(&new_case).is_ok());
}

#[test]
fn test_validation_message_is_the_single_user_facing_message() {
    assert_eq!(
        DomainError::MissingRequiredFields.to_string(),
        "Title, complainant name, and location are required"
    );
}

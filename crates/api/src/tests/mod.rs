// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod update_tests;

use firdesk_domain::OFFICER_ROLE_ID;
use firdesk_persistence::Store;

use crate::{RegisterCaseRequest, register_case};

pub fn create_test_store() -> Store {
    Store::new_in_memory().unwrap()
}

pub fn create_valid_request() -> RegisterCaseRequest {
    RegisterCaseRequest {
        title: Some(String::from("Theft")),
        complainant: Some(String::from("A. Kumar")),
        description: Some(String::from("Bicycle stolen from the market")),
        location: Some(String::from("Sector 5")),
        priority: Some(String::from("High")),
    }
}

/// Registers a case with the given title/location and returns its id.
pub fn register_test_case(store: &Store, title: &str, location: &str) -> i64 {
    let request: RegisterCaseRequest = RegisterCaseRequest {
        title: Some(title.to_string()),
        complainant: Some(String::from("A. Kumar")),
        description: None,
        location: Some(location.to_string()),
        priority: None,
    };
    register_case(store, request).unwrap().case_id
}

pub fn seed_officer(store: &Store, full_name: &str) -> i64 {
    store.insert_user(full_name, OFFICER_ROLE_ID).unwrap()
}

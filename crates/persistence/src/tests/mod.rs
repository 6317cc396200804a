// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.


use firdesk_domain::{NewCase, OFFICER_ROLE_ID};

use crate::Store;

pub fn create_test_store() -> Store {
    Store::new_in_memory().unwrap()
}

pub fn create_test_case(title: &str, location: &str) -> NewCase {
    NewCase {
        title: title.to_string(),
        complainant_name: String::from("A. Kumar"),
        description: Some(String::from("Reported at the front desk")),
        location: location.to_string(),
        priority: String::from("Medium"),
    }
}

pub fn seed_officer(store: &Store, full_name: &str) -> i64 {
    store.insert_user(full_name, OFFICER_ROLE_ID).unwrap()
}

/// Pins a case's `updated_at` to a fixed value.
///
/// `CURRENT_TIMESTAMP` has one-second resolution, so ordering tests
/// pin distinct timestamps instead of racing the clock.
pub fn set_updated_at(store: &Store, case_id: i64, timestamp: &str) {
    store
        .conn
        .execute(
            "UPDATE firs SET updated_at = ?1 WHERE id = ?2",
            rusqlite::params![timestamp, case_id],
        )
        .unwrap();
}

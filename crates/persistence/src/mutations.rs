// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use firdesk_domain::{CaseStatus, CaseUpdate, NewCase};
use rusqlite::{Connection, Transaction, params};
use tracing::debug;

use crate::error::StoreError;

/// Inserts a new case record.
///
/// Status is forced to `Open` regardless of anything the submission
/// carried, and both timestamps are set to the current time.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `new_case` - The validated registration fields
///
/// # Returns
///
/// The id assigned to the new case.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_case(conn: &Connection, new_case: &NewCase) -> Result<i64, StoreError> {
    conn.execute(
        "INSERT INTO firs (
            title, complainant_name, description, location,
            priority, status, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)",
        params![
            new_case.title,
            new_case.complainant_name,
            new_case.description,
            new_case.location,
            new_case.priority,
            CaseStatus::Open.as_str(),
        ],
    )?;

    let case_id: i64 = conn.last_insert_rowid();
    debug!(case_id, "Inserted case");

    Ok(case_id)
}

/// Applies a case-detail update: status, assignment, and timestamp
/// unconditionally, plus an investigation note when notes text is
/// present.
///
/// Both writes commit as one transaction. If the note insert fails,
/// the status update is rolled back and never becomes visible.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `case_id` - The case to update
/// * `update` - The normalized submission fields
///
/// # Errors
///
/// Returns `StoreError::CaseNotFound` if the id does not resolve
/// (nothing is written), or a database error if either write fails.
pub fn apply_case_update(
    conn: &mut Connection,
    case_id: i64,
    update: &CaseUpdate,
) -> Result<(), StoreError> {
    let tx: Transaction<'_> = conn.transaction()?;

    let updated: usize = tx.execute(
        "UPDATE firs
         SET status = ?1, assigned_to = ?2, updated_at = CURRENT_TIMESTAMP
         WHERE id = ?3",
        params![update.status, update.assigned_to, case_id],
    )?;

    // Dropping the transaction without commit rolls it back.
    if updated == 0 {
        return Err(StoreError::CaseNotFound(case_id));
    }

    if let Some(notes) = update.notes.as_deref().filter(|n| !n.is_empty()) {
        tx.execute(
            "INSERT INTO investigations (fir_id, officer, notes, updated_at)
             VALUES (?1, ?2, ?3, CURRENT_TIMESTAMP)",
            params![case_id, update.assigned_to, notes],
        )?;
        debug!(case_id, "Recorded investigation note");
    }

    tx.commit()?;
    debug!(case_id, status = %update.status, "Applied case update");

    Ok(())
}

/// Inserts a user row.
///
/// The application itself has no user registration flow; users are
/// created out of band by operational tooling, and this is the
/// mutation that tooling (and the test suites) use.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `full_name` - The user's display name
/// * `role_id` - The user's role (officers are role 2)
///
/// # Returns
///
/// The id assigned to the new user.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_user(conn: &Connection, full_name: &str, role_id: i64) -> Result<i64, StoreError> {
    conn.execute(
        "INSERT INTO users (full_name, role_id) VALUES (?1, ?2)",
        params![full_name, role_id],
    )?;

    Ok(conn.last_insert_rowid())
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use firdesk_domain::{
    CaseFilter, CaseListing, CaseRecord, CaseStatistics, CaseSummary, GroupTally,
    InvestigationNote, OFFICER_ROLE_ID, Officer,
};
use rusqlite::{Connection, Result as SqliteResult, params, params_from_iter};

use crate::error::StoreError;

/// Retrieves the most-recently-updated cases for the dashboard.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `limit` - Maximum number of cases to return
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn recent_cases(conn: &Connection, limit: u32) -> Result<Vec<CaseSummary>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, status, priority, updated_at
         FROM firs
         ORDER BY updated_at DESC
         LIMIT ?1",
    )?;

    let cases: Result<Vec<CaseSummary>, rusqlite::Error> = stmt
        .query_map(params![limit], |row| {
            Ok(CaseSummary {
                id: row.get(0)?,
                title: row.get(1)?,
                status: row.get(2)?,
                priority: row.get(3)?,
                updated_at: row.get(4)?,
            })
        })?
        .collect();

    cases.map_err(Into::into)
}

/// Retrieves the filtered case listing, joined with the assigned
/// officer's display name.
///
/// All supplied filters are combined with logical AND; absent filters
/// are omitted from the predicate entirely. The join is a LEFT JOIN:
/// unassigned cases and cases whose officer id does not resolve still
/// appear, with no officer name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `filter` - The optional status/priority/location filters
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_cases(conn: &Connection, filter: &CaseFilter) -> Result<Vec<CaseListing>, StoreError> {
    let mut sql: String = String::from(
        "SELECT f.id, f.title, f.complainant_name, f.description, f.location,
                f.priority, f.status, f.assigned_to, f.created_at, f.updated_at,
                u.full_name
         FROM firs f
         LEFT JOIN users u ON f.assigned_to = u.id
         WHERE 1=1",
    );
    let mut values: Vec<String> = Vec::new();

    if let Some(status) = &filter.status {
        sql.push_str(" AND f.status = ?");
        values.push(status.clone());
    }
    if let Some(priority) = &filter.priority {
        sql.push_str(" AND f.priority = ?");
        values.push(priority.clone());
    }
    if let Some(location) = &filter.location {
        sql.push_str(" AND f.location LIKE ?");
        values.push(format!("%{location}%"));
    }

    sql.push_str(" ORDER BY f.updated_at DESC");

    let mut stmt = conn.prepare(&sql)?;

    let cases: Result<Vec<CaseListing>, rusqlite::Error> = stmt
        .query_map(params_from_iter(values.iter()), |row| {
            Ok(CaseListing {
                id: row.get(0)?,
                title: row.get(1)?,
                complainant_name: row.get(2)?,
                description: row.get(3)?,
                location: row.get(4)?,
                priority: row.get(5)?,
                status: row.get(6)?,
                assigned_to: row.get(7)?,
                created_at: row.get(8)?,
                updated_at: row.get(9)?,
                officer_name: row.get(10)?,
            })
        })?
        .collect();

    cases.map_err(Into::into)
}

/// Retrieves a single case by id.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `case_id` - The case id to retrieve
///
/// # Errors
///
/// Returns `StoreError::CaseNotFound` if the id does not resolve, or
/// a database error if the query fails.
pub fn get_case(conn: &Connection, case_id: i64) -> Result<CaseRecord, StoreError> {
    let row_result: SqliteResult<CaseRecord> = conn.query_row(
        "SELECT id, title, complainant_name, description, location,
                priority, status, assigned_to, created_at, updated_at
         FROM firs
         WHERE id = ?1",
        params![case_id],
        |row| {
            Ok(CaseRecord {
                id: row.get(0)?,
                title: row.get(1)?,
                complainant_name: row.get(2)?,
                description: row.get(3)?,
                location: row.get(4)?,
                priority: row.get(5)?,
                status: row.get(6)?,
                assigned_to: row.get(7)?,
                created_at: row.get(8)?,
                updated_at: row.get(9)?,
            })
        },
    );

    match row_result {
        Ok(case) => Ok(case),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(StoreError::CaseNotFound(case_id)),
        Err(e) => Err(StoreError::DatabaseError(e.to_string())),
    }
}

/// Retrieves all users with the officer role.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_officers(conn: &Connection) -> Result<Vec<Officer>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, full_name FROM users WHERE role_id = ?1")?;

    let officers: Result<Vec<Officer>, rusqlite::Error> = stmt
        .query_map(params![OFFICER_ROLE_ID], |row| {
            Ok(Officer {
                id: row.get(0)?,
                full_name: row.get(1)?,
            })
        })?
        .collect();

    officers.map_err(Into::into)
}

/// Retrieves all investigation notes for a case, most recent first,
/// joined with the authoring officer's display name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `fir_id` - The owning case id
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_investigations(
    conn: &Connection,
    fir_id: i64,
) -> Result<Vec<InvestigationNote>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT i.id, i.fir_id, i.officer, i.notes, i.updated_at, u.full_name
         FROM investigations i
         LEFT JOIN users u ON i.officer = u.id
         WHERE i.fir_id = ?1
         ORDER BY i.updated_at DESC",
    )?;

    let notes: Result<Vec<InvestigationNote>, rusqlite::Error> = stmt
        .query_map(params![fir_id], |row| {
            Ok(InvestigationNote {
                id: row.get(0)?,
                fir_id: row.get(1)?,
                officer: row.get(2)?,
                notes: row.get(3)?,
                updated_at: row.get(4)?,
                officer_name: row.get(5)?,
            })
        })?
        .collect();

    notes.map_err(Into::into)
}

/// Computes the reporting aggregates over the FIR table.
///
/// # Errors
///
/// Returns an error if any of the aggregate queries fail.
pub fn case_statistics(conn: &Connection) -> Result<CaseStatistics, StoreError> {
    let total: i64 = conn.query_row("SELECT COUNT(*) FROM firs", [], |row| row.get(0))?;

    let by_status: Vec<GroupTally> = group_tally(
        conn,
        "SELECT status, COUNT(*) FROM firs GROUP BY status",
    )?;
    let by_priority: Vec<GroupTally> = group_tally(
        conn,
        "SELECT priority, COUNT(*) FROM firs GROUP BY priority",
    )?;
    let top_locations: Vec<GroupTally> = group_tally(
        conn,
        "SELECT location, COUNT(*) FROM firs
         GROUP BY location
         ORDER BY COUNT(*) DESC
         LIMIT 5",
    )?;

    Ok(CaseStatistics {
        total,
        by_status,
        by_priority,
        top_locations,
    })
}

/// Runs a two-column (label, count) aggregate query.
fn group_tally(conn: &Connection, sql: &str) -> Result<Vec<GroupTally>, StoreError> {
    let mut stmt = conn.prepare(sql)?;

    let tallies: Result<Vec<GroupTally>, rusqlite::Error> = stmt
        .query_map([], |row| {
            Ok(GroupTally {
                label: row.get(0)?,
                count: row.get(1)?,
            })
        })?
        .collect();

    tallies.map_err(Into::into)
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CasePriority, CaseStatus, Severity, priority_severity, status_severity};

#[test]
fn test_status_severity_known_values() {
    assert_eq!(status_severity("Open"), Severity::Info);
    assert_eq!(status_severity("Assigned"), Severity::Secondary);
    assert_eq!(status_severity("In Progress"), Severity::Warning);
    assert_eq!(status_severity("Closed"), Severity::Success);
}

#[test]
fn test_status_severity_unrecognized_is_neutral() {
    assert_eq!(status_severity(""), Severity::Secondary);
    assert_eq!(status_severity("Escalated"), Severity::Secondary);
    assert_eq!(status_severity("open"), Severity::Secondary);
}

#[test]
fn test_priority_severity_known_values() {
    assert_eq!(priority_severity("High"), Severity::Danger);
    assert_eq!(priority_severity("Medium"), Severity::Warning);
    assert_eq!(priority_severity("Low"), Severity::Success);
}

#[test]
fn test_priority_severity_unrecognized_is_neutral() {
    assert_eq!(priority_severity(""), Severity::Secondary);
    assert_eq!(priority_severity("Critical"), Severity::Secondary);
}

#[test]
fn test_severity_matches_enumeration_members() {
    // The total string mapping and the enumerations must agree for
    // every member of the fixed sets.
    for status in CaseStatus::ALL {
        let severity: Severity = status_severity(status.as_str());
        match status {
            CaseStatus::Open => assert_eq!(severity, Severity::Info),
            CaseStatus::Assigned => assert_eq!(severity, Severity::Secondary),
            CaseStatus::InProgress => assert_eq!(severity, Severity::Warning),
            CaseStatus::Closed => assert_eq!(severity, Severity::Success),
        }
    }
    for priority in CasePriority::ALL {
        let severity: Severity = priority_severity(priority.as_str());
        match priority {
            CasePriority::High => assert_eq!(severity, Severity::Danger),
            CasePriority::Medium => assert_eq!(severity, Severity::Warning),
            CasePriority::Low => assert_eq!(severity, Severity::Success),
        }
    }
}

#[test]
fn test_severity_as_str() {
    assert_eq!(Severity::Info.as_str(), "info");
    assert_eq!(Severity::Secondary.as_str(), "secondary");
    assert_eq!(Severity::Warning.as_str(), "warning");
    assert_eq!(Severity::Success.as_str(), "success");
    assert_eq!(Severity::Danger.as_str(), "danger");
}

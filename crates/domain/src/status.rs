// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The fixed case status enumeration offered by the UI.
///
/// Every case starts `Open`; the remaining states are reached through
/// case-detail updates. The storage layer does not constrain the
/// status column to these values — any string a form submits is
/// stored verbatim — so this enumeration drives dropdown options and
/// display mapping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CaseStatus {
    /// Freshly registered, not yet assigned.
    #[default]
    Open,
    /// Assigned to an officer.
    Assigned,
    /// Under active investigation.
    InProgress,
    /// Investigation concluded.
    Closed,
}

impl CaseStatus {
    /// All statuses, in the order the UI presents them.
    pub const ALL: [Self; 4] = [Self::Open, Self::Assigned, Self::InProgress, Self::Closed];

    /// Returns the display and storage representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Assigned => "Assigned",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

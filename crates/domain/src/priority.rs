// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The fixed case priority enumeration offered by the UI.
///
/// Like `CaseStatus`, this is not enforced at the storage layer; the
/// registration workflow stores whatever priority string was submitted
/// and only falls back to `Medium` when none was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CasePriority {
    /// Urgent attention required.
    High,
    /// Default priority for new cases.
    #[default]
    Medium,
    /// Routine.
    Low,
}

impl CasePriority {
    /// All priorities, in the order the UI presents them.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Returns the display and storage representation of the priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for CasePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

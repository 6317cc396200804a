// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display severity mapping for status and priority badges.
//!
//! These are total functions over arbitrary strings: stored values are
//! not guaranteed to be members of the fixed enumerations, so anything
//! unrecognized maps to the neutral severity rather than failing.

use serde::{Deserialize, Serialize};

/// Display severity of a badge, named after the Bootstrap contextual
/// class suffix the templates interpolate (`badge bg-{severity}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational (blue).
    Info,
    /// Neutral (grey). Also the fallback for unrecognized values.
    Secondary,
    /// Warning (yellow).
    Warning,
    /// Success (green).
    Success,
    /// Danger (red).
    Danger,
}

impl Severity {
    /// Returns the Bootstrap contextual class suffix.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Secondary => "secondary",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maps a stored status value to its display severity.
#[must_use]
pub fn status_severity(status: &str) -> Severity {
    match status {
        "Open" => Severity::Info,
        "Assigned" => Severity::Secondary,
        "In Progress" => Severity::Warning,
        "Closed" => Severity::Success,
        _ => Severity::Secondary,
    }
}

/// Maps a stored priority value to its display severity.
#[must_use]
pub fn priority_severity(priority: &str) -> Severity {
    match priority {
        "High" => Severity::Danger,
        "Medium" => Severity::Warning,
        "Low" => Severity::Success,
        _ => Severity::Secondary,
    }
}

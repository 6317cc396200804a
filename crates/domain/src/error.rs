// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more of the mandatory registration fields is empty.
    ///
    /// Registration fails as a whole with a single user-visible
    /// message; there is no field-level error detail.
    MissingRequiredFields,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredFields => {
                write!(f, "Title, complainant name, and location are required")
            }
        }
    }
}

impl std::error::Error for DomainError {}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the operation boundary.

use firdesk_domain::DomainError;
use firdesk_persistence::StoreError;

/// Operation-level errors.
///
/// These represent the contract the server maps to HTTP responses:
/// validation failures redisplay the form, a missing case renders the
/// not-found page, and storage failures are fatal to the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A registration submission failed validation.
    ValidationFailed {
        /// The single user-visible message.
        message: String,
    },
    /// The requested case does not exist.
    CaseNotFound {
        /// The id that did not resolve.
        case_id: i64,
    },
    /// The store could not be read or written.
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed { message } => write!(f, "{message}"),
            Self::CaseNotFound { case_id } => write!(f, "Case #{case_id} was not found"),
            Self::Storage { message } => write!(f, "Storage error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an operation error.
///
/// This translation is explicit and ensures domain errors are not
/// leaked directly.
#[must_use]
pub fn translate_domain_error(err: &DomainError) -> ApiError {
    match err {
        DomainError::MissingRequiredFields => ApiError::ValidationFailed {
            message: err.to_string(),
        },
    }
}

/// Translates a store error into an operation error.
///
/// A missing case becomes `CaseNotFound`; everything else is a
/// storage failure, fatal to the current request.
#[must_use]
pub fn translate_store_error(err: &StoreError) -> ApiError {
    match err {
        StoreError::CaseNotFound(case_id) => ApiError::CaseNotFound { case_id: *case_id },
        StoreError::InitializationError(_) | StoreError::DatabaseError(_) => ApiError::Storage {
            message: err.to_string(),
        },
    }
}

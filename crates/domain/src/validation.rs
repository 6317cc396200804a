// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::entities::NewCase;
use crate::error::DomainError;

/// Validates the mandatory registration fields.
///
/// Title, complainant name, and location must be non-empty.
/// Description and priority are optional and not inspected here.
/// Any missing field fails the submission as a whole; there is no
/// partial save and no field-level error detail.
///
/// # Errors
///
/// Returns `DomainError::MissingRequiredFields` if title, complainant
/// name, or location is empty.
pub fn validate_new_case(new_case: &NewCase) -> Result<(), DomainError> {
    if new_case.title.is_empty()
        || new_case.complainant_name.is_empty()
        || new_case.location.is_empty()
    {
        return Err(DomainError::MissingRequiredFields);
    }

    Ok(())
}

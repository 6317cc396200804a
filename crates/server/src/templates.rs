// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Template registry for the server-rendered pages.
//!
//! Templates are compiled into the binary with `include_str!` and
//! registered together so inheritance resolves regardless of order.

use tera::Tera;

/// Loads the embedded page templates.
///
/// # Errors
///
/// Returns an error if any template fails to parse.
pub fn load() -> Result<Tera, tera::Error> {
    let mut tera: Tera = Tera::default();

    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("landing.html", include_str!("../templates/landing.html")),
        ("cases.html", include_str!("../templates/cases.html")),
        ("register.html", include_str!("../templates/register.html")),
        (
            "case_detail.html",
            include_str!("../templates/case_detail.html"),
        ),
        ("reports.html", include_str!("../templates/reports.html")),
        ("error.html", include_str!("../templates/error.html")),
    ])?;

    Ok(tera)
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Form, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use clap::Parser;
use serde::Deserialize;
use std::sync::Arc;
use tera::{Context, Tera};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use firdesk_api::{
    ApiError, CaseDetailView, CaseListRequest, RegisterCaseRequest, UpdateCaseRequest, case_detail,
    dashboard, list_cases, register_case, reports, update_case,
};
use firdesk_domain::{CasePriority, CaseStatus, DomainError};
use firdesk_persistence::Store;

mod templates;

/// firdesk server - HTTP server for the FIR case tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. Created and bootstrapped
    /// on first run. If not provided, uses an in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The store is behind a mutex: each handler acquires it, runs its
/// statements, and releases it before the response body is built.
#[derive(Clone)]
struct AppState {
    /// The case store.
    store: Arc<Mutex<Store>>,
    /// The parsed page templates.
    templates: Arc<Tera>,
}

/// Query parameters for the case listing.
#[derive(Debug, Deserialize)]
struct ListQuery {
    /// Exact status filter.
    status: Option<String>,
    /// Exact priority filter.
    priority: Option<String>,
    /// Location substring filter.
    location: Option<String>,
    /// Acknowledgment code set by a preceding redirect.
    notice: Option<String>,
}

/// Query parameters for the registration form.
#[derive(Debug, Deserialize)]
struct RegisterQuery {
    /// Failure code set by a preceding redirect.
    error: Option<String>,
}

/// Registration form fields.
#[derive(Debug, Deserialize)]
struct RegisterForm {
    title: Option<String>,
    complainant: Option<String>,
    description: Option<String>,
    location: Option<String>,
    priority: Option<String>,
}

/// Case-detail update form fields.
#[derive(Debug, Deserialize)]
struct CaseUpdateForm {
    status: Option<String>,
    assigned_to: Option<String>,
    notes: Option<String>,
}

/// Fallback body used when the error page itself fails to render.
const FALLBACK_ERROR_PAGE: &str =
    "<!DOCTYPE html><html><body><h1>Server error</h1></body></html>";

/// HTTP error wrapper carrying a pre-rendered HTML body.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The rendered error page.
    body: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, Html(self.body)).into_response()
    }
}

/// Renders the error page for a status/message pair.
fn error_page(templates: &Tera, status: StatusCode, message: &str) -> HttpError {
    let mut context: Context = Context::new();
    context.insert("status", &status.as_u16());
    context.insert("message", message);
    context.insert("notice", &Option::<&str>::None);
    context.insert("error", &Option::<&str>::None);

    let body: String = templates.render("error.html", &context).unwrap_or_else(|e| {
        error!(error = %e, "Error page rendering failed");
        String::from(FALLBACK_ERROR_PAGE)
    });

    HttpError { status, body }
}

/// Maps an operation error to an HTTP error response.
///
/// Storage failures are logged in full here and surfaced to the user
/// as a generic server error.
fn to_http_error(templates: &Tera, err: &ApiError) -> HttpError {
    match err {
        ApiError::ValidationFailed { message } => {
            error_page(templates, StatusCode::BAD_REQUEST, message)
        }
        ApiError::CaseNotFound { .. } => {
            error_page(templates, StatusCode::NOT_FOUND, &err.to_string())
        }
        ApiError::Storage { message } => {
            error!(error = %message, "Storage error");
            error_page(
                templates,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            )
        }
    }
}

/// Renders a page template, mapping render failures to a 500.
fn render_page(templates: &Tera, name: &str, context: &Context) -> Result<Html<String>, HttpError> {
    match templates.render(name, context) {
        Ok(body) => Ok(Html(body)),
        Err(e) => {
            error!(template = name, error = %e, "Template rendering failed");
            Err(HttpError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: String::from(FALLBACK_ERROR_PAGE),
            })
        }
    }
}

/// Creates a template context carrying the shared banner slots.
fn page_context(notice: Option<&str>, error: Option<&str>) -> Context {
    let mut context: Context = Context::new();
    context.insert("notice", &notice);
    context.insert("error", &error);
    context
}

/// Handler for GET `/` endpoint.
///
/// Renders the dashboard with the five most-recently-updated cases.
async fn handle_dashboard(State(app_state): State<AppState>) -> Result<Html<String>, HttpError> {
    info!("Handling dashboard request");

    let store = app_state.store.lock().await;
    let view = dashboard(&store).map_err(|e| to_http_error(&app_state.templates, &e))?;
    drop(store);

    let mut context: Context = page_context(None, None);
    context.insert("recent_cases", &view.recent_cases);

    render_page(&app_state.templates, "landing.html", &context)
}

/// Handler for GET `/cases` endpoint.
///
/// Renders the filtered case listing. A `notice=registered` query
/// code (set by the registration redirect) renders the success
/// acknowledgment banner.
async fn handle_list_cases(
    State(app_state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, HttpError> {
    info!(
        status = ?query.status,
        priority = ?query.priority,
        location = ?query.location,
        "Handling case listing request"
    );

    let notice: Option<&str> = match query.notice.as_deref() {
        Some("registered") => Some("FIR registered successfully"),
        _ => None,
    };

    let request: CaseListRequest = CaseListRequest {
        status: query.status,
        priority: query.priority,
        location: query.location,
    };

    let store = app_state.store.lock().await;
    let view = list_cases(&store, request).map_err(|e| to_http_error(&app_state.templates, &e))?;
    drop(store);

    let mut context: Context = page_context(notice, None);
    context.insert("cases", &view.cases);
    context.insert("filter", &view.filter);
    context.insert(
        "statuses",
        &CaseStatus::ALL.map(|status| status.as_str()),
    );
    context.insert(
        "priorities",
        &CasePriority::ALL.map(|priority| priority.as_str()),
    );

    render_page(&app_state.templates, "cases.html", &context)
}

/// Handler for GET `/register` endpoint.
///
/// Renders the empty registration form. An `error=required-fields`
/// query code (set by a failed submission's redirect) renders the
/// single validation failure message.
async fn handle_register_form(
    State(app_state): State<AppState>,
    Query(query): Query<RegisterQuery>,
) -> Result<Html<String>, HttpError> {
    let error: Option<String> = match query.error.as_deref() {
        Some("required-fields") => Some(DomainError::MissingRequiredFields.to_string()),
        _ => None,
    };

    let mut context: Context = page_context(None, error.as_deref());
    context.insert(
        "priorities",
        &CasePriority::ALL.map(|priority| priority.as_str()),
    );
    context.insert("default_priority", CasePriority::Medium.as_str());

    render_page(&app_state.templates, "register.html", &context)
}

/// Handler for POST `/register` endpoint.
///
/// Submits a new case. A valid submission inserts exactly one row and
/// redirects to the listing with a success acknowledgment; a failed
/// one inserts nothing and redirects back to the empty form.
async fn handle_register_submit(
    State(app_state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, HttpError> {
    info!("Handling FIR registration");

    let request: RegisterCaseRequest = RegisterCaseRequest {
        title: form.title,
        complainant: form.complainant,
        description: form.description,
        location: form.location,
        priority: form.priority,
    };

    let store = app_state.store.lock().await;
    let result = register_case(&store, request);
    drop(store);

    match result {
        Ok(response) => {
            info!(case_id = response.case_id, "Successfully registered FIR");
            Ok(Redirect::to("/cases?notice=registered"))
        }
        Err(ApiError::ValidationFailed { message }) => {
            warn!(%message, "Registration rejected");
            Ok(Redirect::to("/register?error=required-fields"))
        }
        Err(err) => Err(to_http_error(&app_state.templates, &err)),
    }
}

/// Renders the case detail page from its assembled view.
fn render_case_detail(
    app_state: &AppState,
    view: &CaseDetailView,
    notice: Option<&str>,
) -> Result<Html<String>, HttpError> {
    let mut context: Context = page_context(notice, None);
    context.insert("case", &view.case);
    context.insert("officers", &view.officers);
    context.insert("investigations", &view.investigations);
    context.insert("statuses", &view.statuses);

    render_page(&app_state.templates, "case_detail.html", &context)
}

/// Handler for GET `/case/{id}` endpoint.
///
/// Renders the case detail page, or an explicit 404 when the id does
/// not resolve.
async fn handle_case_detail(
    State(app_state): State<AppState>,
    Path(case_id): Path<i64>,
) -> Result<Html<String>, HttpError> {
    info!(case_id, "Handling case detail request");

    let store = app_state.store.lock().await;
    let view = case_detail(&store, case_id).map_err(|e| to_http_error(&app_state.templates, &e))?;
    drop(store);

    render_case_detail(&app_state, &view, None)
}

/// Handler for POST `/case/{id}` endpoint.
///
/// Applies the status/assignment update (unconditionally) and records
/// an investigation note when notes text was submitted, then
/// re-renders the detail page with a success acknowledgment.
async fn handle_case_update(
    State(app_state): State<AppState>,
    Path(case_id): Path<i64>,
    Form(form): Form<CaseUpdateForm>,
) -> Result<Html<String>, HttpError> {
    info!(case_id, "Handling case update request");

    let request: UpdateCaseRequest = UpdateCaseRequest {
        status: form.status,
        assigned_to: form.assigned_to,
        notes: form.notes,
    };

    let mut store = app_state.store.lock().await;
    update_case(&mut store, case_id, request)
        .map_err(|e| to_http_error(&app_state.templates, &e))?;
    let view = case_detail(&store, case_id).map_err(|e| to_http_error(&app_state.templates, &e))?;
    drop(store);

    render_case_detail(&app_state, &view, Some("Case updated successfully"))
}

/// Handler for GET `/reports` endpoint.
///
/// Renders the aggregate statistics page.
async fn handle_reports(State(app_state): State<AppState>) -> Result<Html<String>, HttpError> {
    info!("Handling reports request");

    let store = app_state.store.lock().await;
    let view = reports(&store).map_err(|e| to_http_error(&app_state.templates, &e))?;
    drop(store);

    let mut context: Context = page_context(None, None);
    context.insert("total", &view.total);
    context.insert("by_status", &view.by_status);
    context.insert("by_priority", &view.by_priority);
    context.insert("top_locations", &view.top_locations);

    render_page(&app_state.templates, "reports.html", &context)
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_dashboard))
        .route("/cases", get(handle_list_cases))
        .route(
            "/register",
            get(handle_register_form).post(handle_register_submit),
        )
        .route(
            "/case/{id}",
            get(handle_case_detail).post(handle_case_update),
        )
        .route("/reports", get(handle_reports))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing firdesk server");

    // Open the store (in-memory or file-based based on CLI argument);
    // a missing file is created and bootstrapped before serving.
    let store: Store = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Store::open(db_path)?
    } else {
        info!("Using in-memory database");
        Store::new_in_memory()?
    };

    let templates: Tera = templates::load()?;

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
        templates: Arc::new(templates),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode, header},
    };
    use firdesk_domain::OFFICER_ROLE_ID;
    use tower::ServiceExt;

    /// Helper to create test app state with an in-memory store.
    fn create_test_app_state() -> AppState {
        let store: Store = Store::new_in_memory().expect("Failed to create in-memory store");
        let templates: Tera = templates::load().expect("Failed to parse templates");
        AppState {
            store: Arc::new(Mutex::new(store)),
            templates: Arc::new(templates),
        }
    }

    async fn get(app: Router, uri: &str) -> axum::http::Response<Body> {
        app.oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn post_form(app: Router, uri: &str, body: &str) -> axum::http::Response<Body> {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_text(response: axum::http::Response<Body>) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_dashboard_renders_on_empty_store() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = get(app, "/").await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: String = body_text(response).await;
        assert!(body.contains("Dashboard"));
        assert!(body.contains("No cases registered yet."));
    }

    #[tokio::test]
    async fn test_register_submit_redirects_to_listing() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        let response = post_form(
            app.clone(),
            "/register",
            "title=Theft&complainant=A.+Kumar&location=Sector+5&priority=High",
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/cases?notice=registered"
        );

        // The listing shows the new case and the acknowledgment.
        let listing = get(app, "/cases?notice=registered").await;
        let body: String = body_text(listing).await;
        assert!(body.contains("FIR registered successfully"));
        assert!(body.contains("Theft"));
        assert!(body.contains("badge bg-danger"));
    }

    #[tokio::test]
    async fn test_register_submit_missing_fields_redirects_back() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        let response = post_form(app.clone(), "/register", "title=Theft").await;

        assert_eq!(response.status(), HttpStatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/register?error=required-fields"
        );

        // Nothing was inserted.
        let store = app_state.store.lock().await;
        let listing = list_cases(&store, CaseListRequest::default()).unwrap();
        assert!(listing.cases.is_empty());
        drop(store);

        // The form shows the single failure message.
        let form_page = get(app, "/register?error=required-fields").await;
        let body: String = body_text(form_page).await;
        assert!(body.contains("Title, complainant name, and location are required"));
    }

    #[tokio::test]
    async fn test_case_detail_missing_id_renders_404() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = get(app, "/case/999").await;

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
        let body: String = body_text(response).await;
        assert!(body.contains("Case #999 was not found"));
    }

    #[tokio::test]
    async fn test_case_update_records_note_and_renders_detail() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());

        let store = app_state.store.lock().await;
        let officer_id: i64 = store.insert_user("Insp. Rao", OFFICER_ROLE_ID).unwrap();
        drop(store);

        post_form(
            app.clone(),
            "/register",
            "title=Theft&complainant=A.+Kumar&location=Sector+5",
        )
        .await;

        let response = post_form(
            app.clone(),
            "/case/1",
            &format!("status=In+Progress&assigned_to={officer_id}&notes=Visited+the+scene"),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: String = body_text(response).await;
        assert!(body.contains("Case updated successfully"));
        assert!(body.contains("Visited the scene"));
        assert!(body.contains("Insp. Rao"));

        // The update also shows on a plain view request.
        let detail = get(app, "/case/1").await;
        let detail_body: String = body_text(detail).await;
        assert!(detail_body.contains("In Progress"));
    }

    #[tokio::test]
    async fn test_case_update_of_missing_case_renders_404() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = post_form(app, "/case/999", "status=Closed").await;

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_listing_filters_apply() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        post_form(
            app.clone(),
            "/register",
            "title=In+sector&complainant=A.+Kumar&location=Sector+9",
        )
        .await;
        post_form(
            app.clone(),
            "/register",
            "title=Elsewhere&complainant=B.+Singh&location=Harbor+Road",
        )
        .await;
        post_form(app.clone(), "/case/1", "status=Closed").await;

        let response = get(app, "/cases?status=Closed&location=Sector").await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: String = body_text(response).await;
        assert!(body.contains("In sector"));
        assert!(!body.contains("Elsewhere"));
    }

    #[tokio::test]
    async fn test_register_form_renders_priority_options() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = get(app, "/register").await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: String = body_text(response).await;
        for priority in ["High", "Medium", "Low"] {
            assert!(body.contains(priority));
        }
    }

    #[tokio::test]
    async fn test_reports_render_aggregates() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        post_form(
            app.clone(),
            "/register",
            "title=One&complainant=A.+Kumar&location=Sector+5",
        )
        .await;
        post_form(
            app.clone(),
            "/register",
            "title=Two&complainant=B.+Singh&location=Sector+5",
        )
        .await;

        let response = get(app, "/reports").await;

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: String = body_text(response).await;
        assert!(body.contains("Total cases"));
        assert!(body.contains("Sector 5"));
    }
}

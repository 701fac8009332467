//! HTTP API over a [`CourseFinder`].
//!
//! Routes:
//! - `GET /api/health`
//! - `POST /api/find-courses` with `{"completed_courses": [...]}`
//! - `POST /api/explain` with `{"course": "...", "completed_courses": [...]}`
//!
//! The finder is shared read-only between requests; the only mutable state
//! is its parse cache, which has its own lock.

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};

use crate::catalog::{level_map, CourseFinder, EligibleCourse, UnparsedCourse};
use crate::course::CourseCode;
use crate::error::{PrereqError, Result};
use crate::requirements::RequirementGroup;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub finder: Arc<CourseFinder>,
    pub levels: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(finder: CourseFinder, levels: Vec<String>) -> Self {
        Self {
            finder: Arc::new(finder),
            levels: Arc::new(levels),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub courses: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct FindCoursesRequest {
    #[serde(default)]
    pub completed_courses: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FindCoursesResponse {
    pub success: bool,
    pub completed_count: usize,
    pub eligible_count: usize,
    pub eligible_by_level: BTreeMap<String, Vec<EligibleCourse>>,
    pub ineligible_count: usize,
    /// Strict mode only: courses whose requisites could not be read.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unparsed: Vec<UnparsedCourse>,
}

#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub course: String,
    #[serde(default)]
    pub completed_courses: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub success: bool,
    pub course: CourseCode,
    pub name: String,
    pub eligible: bool,
    pub already_completed: bool,
    pub missing: Vec<RequirementGroup>,
    pub explanation: String,
}

/// Error body: `{"success": false, "error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

/// A failed request with its status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<PrereqError> for ApiError {
    fn from(err: PrereqError) -> Self {
        let status = match err {
            PrereqError::UnknownCourse { .. } => StatusCode::NOT_FOUND,
            PrereqError::UnparsedRequisites { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

fn clean_completed(raw: &[String]) -> Vec<&str> {
    raw.iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect()
}

/// Build the router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/find-courses", post(find_courses))
        .route("/api/explain", post(explain_course))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        courses: state.finder.catalog().len(),
    })
}

async fn find_courses(
    State(state): State<AppState>,
    payload: std::result::Result<Json<FindCoursesRequest>, JsonRejection>,
) -> std::result::Result<Json<FindCoursesResponse>, ApiError> {
    let Json(request) = payload?;
    let completed = clean_completed(&request.completed_courses);
    let result = state.finder.find_eligible(&completed);
    debug!(
        "find-courses: {} completed, {} eligible",
        completed.len(),
        result.eligible.len()
    );

    Ok(Json(FindCoursesResponse {
        success: true,
        completed_count: completed.len(),
        eligible_count: result.eligible.len(),
        eligible_by_level: level_map(&result.eligible, &state.levels),
        ineligible_count: result.ineligible.len(),
        unparsed: result.unparsed,
    }))
}

async fn explain_course(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ExplainRequest>, JsonRejection>,
) -> std::result::Result<Json<ExplainResponse>, ApiError> {
    let Json(request) = payload?;
    let completed = clean_completed(&request.completed_courses);
    let check = state.finder.check_course(&request.course, &completed)?;
    let explanation = check.explanation();

    Ok(Json(ExplainResponse {
        success: true,
        course: check.code,
        name: check.name,
        eligible: check.result.eligible,
        already_completed: check.already_completed,
        missing: check.result.missing_groups,
        explanation,
    }))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn run_server(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "Serving {} courses on http://{}",
        state.finder.catalog().len(),
        listener.local_addr()?
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_levels, Catalog, CourseRecord};
    use crate::course::Normalizer;
    use crate::requirements::PrerequisiteParser;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn record(code: &str, requisites: &str) -> CourseRecord {
        CourseRecord {
            course_code: code.to_string(),
            course_name: format!("{} name", code),
            description: "d".repeat(120),
            requisites: requisites.to_string(),
            ..Default::default()
        }
    }

    fn app() -> Router {
        app_with(
            vec![
                record("CS 170", "None"),
                record("CS 171", "CS 170"),
                record("CS 253", "CS 171 and CS 224"),
                record("MATH 221", ""),
            ],
            false,
        )
    }

    fn app_with(records: Vec<CourseRecord>, strict: bool) -> Router {
        let normalizer = Normalizer::default();
        let catalog = Catalog::from_records(records, &normalizer);
        let finder =
            CourseFinder::new(catalog, PrerequisiteParser::new(normalizer)).with_strict(strict);
        create_router(AppState::new(finder, default_levels()))
    }

    async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        send_to(app(), method, uri, body).await
    }

    async fn send_to(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_success() {
        let (status, body) = send(Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["courses"], 4);
    }

    #[tokio::test]
    async fn find_courses_groups_by_level() {
        let (status, body) = send(
            Method::POST,
            "/api/find-courses",
            Some(json!({"completed_courses": [" cs 170 ", "", "CS_OX 171"]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["completed_count"], 2);
        assert_eq!(body["eligible_count"], 1);
        assert_eq!(body["ineligible_count"], 1);
        assert_eq!(body["eligible_by_level"]["200"][0]["code"], "MATH 221");
        assert_eq!(body["eligible_by_level"]["100"], json!([]));
        let description = body["eligible_by_level"]["200"][0]["description"]
            .as_str()
            .unwrap();
        assert_eq!(description.len(), 103);
    }

    #[tokio::test]
    async fn find_courses_with_missing_field_means_nothing_completed() {
        let (status, body) = send(Method::POST, "/api/find-courses", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["completed_count"], 0);
        assert_eq!(body["eligible_count"], 2);
    }

    #[tokio::test]
    async fn malformed_body_is_client_error() {
        let (status, body) = send(
            Method::POST,
            "/api/find-courses",
            Some(json!({"completed_courses": "CS 170"})),
        )
        .await;
        assert!(status.is_client_error());
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn explain_reports_missing_groups() {
        let (status, body) = send(
            Method::POST,
            "/api/explain",
            Some(json!({"course": "cs 253", "completed_courses": ["CS 171"]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["course"], "CS 253");
        assert_eq!(body["eligible"], false);
        assert_eq!(body["missing"], json!([["CS 224"]]));
        assert_eq!(body["explanation"], "Missing prerequisites:\n• CS 224");
    }

    #[tokio::test]
    async fn explain_unknown_course_is_not_found() {
        let (status, body) = send(
            Method::POST,
            "/api/explain",
            Some(json!({"course": "CS 999"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("CS 999"));
    }

    #[tokio::test]
    async fn strict_server_flags_unreadable_requisites() {
        let records = vec![
            record("CS 171", "CS 170"),
            record("CS 485", "Permission of instructor"),
        ];

        let (status, body) = send_to(
            app_with(records.clone(), true),
            Method::POST,
            "/api/find-courses",
            Some(json!({"completed_courses": ["CS 170"]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["eligible_count"], 1);
        assert_eq!(body["unparsed"][0]["code"], "CS 485");

        let (status, body) = send_to(
            app_with(records, true),
            Method::POST,
            "/api/explain",
            Some(json!({"course": "CS 485"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn lenient_server_omits_unparsed_list() {
        let (_, body) = send(Method::POST, "/api/find-courses", Some(json!({}))).await;
        assert!(body.get("unparsed").is_none());
    }
}

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Json, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::core::{Dashboard, Scenario, Snapshot, build_dashboard};
use crate::data::parse_date;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
}

impl SliderRange {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn apply(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

pub const ROTH_CONTRIBUTION_RANGE: SliderRange = SliderRange::new(0.0, 1_000.0);
pub const SAVINGS_RANGE: SliderRange = SliderRange::new(0.0, 2_000.0);
pub const SALARY_INCREASE_RANGE: SliderRange = SliderRange::new(0.0, 3_000.0);
pub const AUTO_EXTRA_RANGE: SliderRange = SliderRange::new(0.0, 2_000.0);
pub const STUDENT_EXTRA_RANGE: SliderRange = SliderRange::new(0.0, 2_000.0);
pub const ANNUAL_RETURN_RANGE: SliderRange = SliderRange::new(3.0, 12.0);

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ProjectPayload {
    monthly_roth_contribution: Option<f64>,
    monthly_savings: Option<f64>,
    salary_increase: Option<f64>,
    auto_loan_payment: Option<f64>,
    auto_loan_extra: Option<f64>,
    student_loan_payment: Option<f64>,
    student_loan_extra: Option<f64>,
    expected_annual_return: Option<f64>,
    as_of: Option<String>,
}

#[derive(Debug)]
pub(crate) struct ProjectRequest {
    scenario: Scenario,
    today: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectResponse {
    as_of: NaiveDate,
    scenario: Scenario,
    #[serde(flatten)]
    dashboard: Dashboard,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Clone)]
struct AppState {
    snapshot: Arc<Snapshot>,
}

pub async fn run_http_server(snapshot: Snapshot, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = router(snapshot);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "ledgerview HTTP API listening");
    info!("local access: http://127.0.0.1:{port}/api/project");

    axum::serve(listener, app).await
}

fn router(snapshot: Snapshot) -> Router {
    let state = AppState {
        snapshot: Arc::new(snapshot),
    };
    Router::new()
        .route("/api/snapshot", get(snapshot_handler))
        .route("/api/scenario/default", get(default_scenario_handler))
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .fallback(not_found_handler)
        .with_state(state)
}

async fn snapshot_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.snapshot.as_ref())
}

async fn default_scenario_handler() -> Response {
    json_response(StatusCode::OK, Scenario::default())
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn project_get_handler(
    State(state): State<AppState>,
    Query(payload): Query<ProjectPayload>,
) -> Response {
    project_handler_impl(&state.snapshot, payload)
}

async fn project_post_handler(
    State(state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> Response {
    project_handler_impl(&state.snapshot, payload)
}

fn project_handler_impl(snapshot: &Snapshot, payload: ProjectPayload) -> Response {
    let request = match project_request_from_payload(payload, Local::now().date_naive()) {
        Ok(request) => request,
        Err(msg) => {
            warn!(error = %msg, "rejected projection request");
            return error_response(StatusCode::BAD_REQUEST, &msg);
        }
    };

    info!(as_of = %request.today, "projecting scenario");
    json_response(StatusCode::OK, build_project_response(snapshot, &request))
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn project_request_from_json(json: &str, today: NaiveDate) -> Result<ProjectRequest, String> {
    let payload = serde_json::from_str::<ProjectPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    project_request_from_payload(payload, today)
}

pub(crate) fn project_request_from_payload(
    payload: ProjectPayload,
    today: NaiveDate,
) -> Result<ProjectRequest, String> {
    let mut scenario = Scenario::default();

    if let Some(v) = payload.monthly_roth_contribution {
        scenario.monthly_roth_contribution =
            ROTH_CONTRIBUTION_RANGE.apply(finite("monthlyRothContribution", v)?);
    }
    if let Some(v) = payload.monthly_savings {
        scenario.monthly_savings = SAVINGS_RANGE.apply(finite("monthlySavings", v)?);
    }
    if let Some(v) = payload.salary_increase {
        scenario.salary_increase = SALARY_INCREASE_RANGE.apply(finite("salaryIncrease", v)?);
    }
    if let Some(v) = payload.auto_loan_payment {
        scenario.auto_loan_payment = finite("autoLoanPayment", v)?;
    }
    if let Some(v) = payload.auto_loan_extra {
        scenario.auto_loan_extra = AUTO_EXTRA_RANGE.apply(finite("autoLoanExtra", v)?);
    }
    if let Some(v) = payload.student_loan_payment {
        scenario.student_loan_payment = finite("studentLoanPayment", v)?;
    }
    if let Some(v) = payload.student_loan_extra {
        scenario.student_loan_extra = STUDENT_EXTRA_RANGE.apply(finite("studentLoanExtra", v)?);
    }
    if let Some(v) = payload.expected_annual_return {
        scenario.expected_annual_return =
            ANNUAL_RETURN_RANGE.apply(finite("expectedAnnualReturn", v)?);
    }

    let today = match payload.as_of.as_deref() {
        Some(raw) => parse_date(raw).map_err(|e| format!("asOf: {e}"))?,
        None => today,
    };

    Ok(ProjectRequest { scenario, today })
}

fn finite(name: &str, value: f64) -> Result<f64, String> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{name} must be a finite number"))
    }
}

fn build_project_response(snapshot: &Snapshot, request: &ProjectRequest) -> ProjectResponse {
    ProjectResponse {
        as_of: request.today,
        scenario: request.scenario,
        dashboard: build_dashboard(snapshot, &request.scenario, request.today),
    }
}

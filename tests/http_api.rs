//! Integration tests for the HTTP API.
//!
//! These tests drive the full router (middleware included) with
//! `tower::ServiceExt::oneshot`, so no socket is opened.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ai4profit::adapters::http::{build_router, EngineAppState};
use ai4profit::config::{AppConfig, ServerConfig};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with(config: AppConfig) -> Router {
    let state = EngineAppState::from_config(&config);
    build_router(state, &ServerConfig::default())
}

fn app() -> Router {
    app_with(AppConfig::default())
}

fn app_without_pdf() -> Router {
    let mut config = AppConfig::default();
    config.features.enable_pdf_export = false;
    app_with(config)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn post_raw(app: Router, uri: &str, body: &str) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let response = app_without_pdf()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["pdfExport"], false);
}

// =============================================================================
// CORS
// =============================================================================

async fn allowed_origin_for(cors_origins: &str, origin: &str) -> Option<String> {
    let server = ServerConfig {
        cors_origins: Some(cors_origins.to_string()),
        ..Default::default()
    };
    let app = build_router(EngineAppState::from_config(&AppConfig::default()), &server);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|v| v.to_str().unwrap().to_string())
}

#[tokio::test]
async fn configured_origins_restrict_cors() {
    let allowed = allowed_origin_for("https://app.example.com", "https://app.example.com").await;
    assert_eq!(allowed.as_deref(), Some("https://app.example.com"));

    let other = allowed_origin_for("https://app.example.com", "https://evil.example").await;
    assert_eq!(other, None);
}

#[tokio::test]
async fn unparseable_origins_do_not_open_cors() {
    let allowed = allowed_origin_for("http://bad\u{7f}origin", "https://evil.example").await;
    assert_eq!(allowed, None);
}

// =============================================================================
// Scoring
// =============================================================================

#[tokio::test]
async fn empty_current_assessment_scores_defaults() {
    let (status, json) = post_json(app(), "/api/assessments/current/score", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["assessment"], "current");
    assert_eq!(json["total"], 51);
    assert_eq!(json["maxTotal"], 207);
    assert_eq!(json["outcome"], "No potential");
    assert_eq!(json["categories"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn future_assessment_scores_defaults() {
    let (status, json) = post_json(app(), "/api/assessments/future/score", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 42);
    assert_eq!(json["outcome"], "Basic planning stage");
}

#[tokio::test]
async fn out_of_range_likert_is_bad_request() {
    let (status, json) = post_json(
        app(),
        "/api/assessments/current/score",
        json!({ "technologySystems": { "machinesNetworked": 7 } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let response = post_raw(app(), "/api/roi/quick", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Financials
// =============================================================================

#[tokio::test]
async fn quick_roi_worked_scenario() {
    let (status, json) = post_json(
        app(),
        "/api/roi/quick",
        json!({
            "costReduction": { "current": 100000, "future": 80000 },
            "qualityDefects": { "current": 50000, "future": 20000 },
            "efficiency": { "current": 80, "future": 95 },
            "initialInvestment": 500000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!((json["totalMonthlyGain"].as_f64().unwrap() - 68_750.0).abs() < 1e-6);
    assert!((json["totalAnnualGain"].as_f64().unwrap() - 825_000.0).abs() < 1e-6);
    assert!((json["roi"].as_f64().unwrap() - 65.0).abs() < 1e-9);
}

#[tokio::test]
async fn process_roi_categorizes() {
    let (status, json) = post_json(
        app(),
        "/api/roi/process",
        json!({ "capex": 1600000, "revenueImpact": 0 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["paybackPeriodMonths"], 4.0);
    assert_eq!(json["category"], "Excellent");
}

#[tokio::test]
async fn financial_analysis_reports_formula_errors() {
    let (status, json) = post_json(
        app(),
        "/api/financials/analysis",
        json!({
            "customSections": [{
                "name": "Energy",
                "current": { "name": "Energy", "fields": [{ "name": "kwh", "value": 100 }], "formula": "{kwh} * (2" },
                "future": { "name": "Energy", "fields": [{ "name": "kwh", "value": 60 }], "formula": "{kwh} * 2" }
            }]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let errors = json["formulaErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["side"], "current");
    assert!(json["roi"].as_f64().unwrap().is_finite());
}

#[tokio::test]
async fn oversized_formulas_are_reported_not_fatal() {
    let nested = format!("{}1{}", "(".repeat(50_000), ")".repeat(50_000));
    let body = json!({
        "customSections": [{
            "name": "x",
            "current": { "fields": [], "formula": nested },
            "future": { "fields": [], "formula": "1" }
        }]
    });

    let (status, json) = post_json(app(), "/api/financials/analysis", body.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["formulaErrors"][0]["code"], "TOO_LONG");

    let response = post_raw(app(), "/api/reports/financial-analysis", &body.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Reports
// =============================================================================

#[tokio::test]
async fn text_report_is_an_attachment() {
    let response = post_raw(app(), "/api/reports/quick-roi", "").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(content_type, "text/plain; charset=utf-8");
    assert!(disposition.starts_with("attachment; filename=\"Quick_ROI_"));
    assert!(disposition.ends_with(".txt\""));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with("QUICK ROI REPORT\n"));
    assert!(text.ends_with("END OF QUICK ROI REPORT\n"));
}

#[tokio::test]
async fn csv_report_for_current_assessment() {
    let response = post_raw(
        app(),
        "/api/reports/current-assessment?format=csv",
        r#"{"companyInfo":{"companyName":"Acme, Inc."}}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(csv.starts_with("Section,Field,Value\n"));
    assert!(csv.contains("\"Acme, Inc.\""));
    assert!(csv.contains("SCORE SUMMARY,Total Score,51/207"));
}

#[tokio::test]
async fn html_report_for_financial_analysis() {
    let response = post_raw(app(), "/api/reports/financial-analysis?format=html", "{}").await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<title>FINANCIAL ANALYSIS REPORT</title>"));
    assert!(html.contains("<table>"));
}

#[tokio::test]
async fn unknown_report_kind_is_unprocessable() {
    let response = post_raw(app(), "/api/reports/balance-sheet", "{}").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["code"], "UNSUPPORTED_REPORT");
    assert_eq!(json["details"]["kind"], "balance-sheet");
}

#[tokio::test]
async fn unknown_report_format_is_unprocessable() {
    let response = post_raw(app(), "/api/reports/process-roi?format=docx", "{}").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn pdf_report_when_disabled_is_unavailable() {
    let response = post_raw(app_without_pdf(), "/api/reports/process-roi?format=pdf", "{}").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["code"], "EXPORT_UNAVAILABLE");
}

#[tokio::test]
async fn invalid_report_body_is_bad_request() {
    let response = post_raw(app(), "/api/reports/quick-roi", "[1, 2").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

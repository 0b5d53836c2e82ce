//! Integration tests for the calculator API
//!
//! Requests go straight through the router with `oneshot`, so no listener
//! is bound.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mortgage_desk::application::http::{paths, router, MAX_REQUEST_BODY_BYTES};
use mortgage_desk::domain::{CalculatorBounds, CalculatorSettings};
use mortgage_desk::infrastructure::InMemorySettingsProvider;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    router(Arc::new(InMemorySettingsProvider::default()))
}

fn post_json(path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn number(value: &Value) -> f64 {
    value.as_f64().expect("numeric field")
}

fn loan_scenario() -> Value {
    json!({
        "homePrice": 400000,
        "downPaymentPercent": 20,
        "interestRateAnnualPercent": 6.5,
        "loanTermYears": 30,
        "propertyTaxPercent": 1.2,
        "monthlyHomeInsurance": 100,
        "monthlyHoaFees": 0,
        "pmiPercent": 0.5
    })
}

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder()
        .uri(paths::HEALTH)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_settings_are_served_in_camel_case() {
    let request = Request::builder()
        .uri(paths::SETTINGS)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bounds"]["loanTermOptions"], json!([10, 15, 20, 30]));
    assert_eq!(number(&body["bounds"]["homePriceMin"]), 50000.0);
    assert_eq!(number(&body["defaults"]["interestRateAnnualPercent"]), 6.5);
}

#[tokio::test]
async fn test_custom_settings_drive_validation() {
    let settings = CalculatorSettings {
        bounds: CalculatorBounds {
            loan_term_options: vec![15],
            ..CalculatorBounds::default()
        },
        ..CalculatorSettings::default()
    };
    let provider = InMemorySettingsProvider::new(settings).unwrap();
    let app = router(Arc::new(provider));

    let (status, body) = send(app, post_json(paths::PAYMENT, &loan_scenario())).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["violations"][0]["field"], "loanTermYears");
    assert_eq!(body["violations"][0]["reason"]["kind"], "not_allowed_option");
    assert_eq!(body["violations"][0]["reason"]["allowed"], json!([15]));
}

#[tokio::test]
async fn test_payment_breakdown_is_rounded() {
    let (status, body) = send(app(), post_json(paths::PAYMENT, &loan_scenario())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(number(&body["downPaymentAmount"]), 80000.0);
    assert_eq!(number(&body["loanAmount"]), 320000.0);
    assert_eq!(number(&body["monthlyPrincipalAndInterest"]), 2023.0);
    assert_eq!(number(&body["monthlyPropertyTax"]), 400.0);
    assert_eq!(number(&body["monthlyPmi"]), 0.0);
    assert_eq!(number(&body["totalMonthlyPayment"]), 2523.0);
    assert_eq!(body["formattedTotalMonthlyPayment"], "$2,523");
}

#[tokio::test]
async fn test_payment_charges_pmi_below_twenty_percent() {
    let mut scenario = loan_scenario();
    scenario["downPaymentPercent"] = json!(10);
    let (status, body) = send(app(), post_json(paths::PAYMENT, &scenario)).await;

    assert_eq!(status, StatusCode::OK);
    // 0.5% of 360,000 spread over twelve months
    assert_eq!(number(&body["monthlyPmi"]), 150.0);
}

#[tokio::test]
async fn test_affordability() {
    let scenario = json!({
        "annualIncome": 120000,
        "monthlyDebt": 600,
        "downPaymentAmount": 60000,
        "interestRateAnnualPercent": 6.5,
        "loanTermYears": 30,
        "debtToIncomeRatioPercent": 36
    });
    let (status, body) = send(app(), post_json(paths::AFFORDABILITY, &scenario)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(number(&body["maxMonthlyPayment"]), 3000.0);
    assert_eq!(number(&body["maxLoanAmount"]), 474632.0);
    assert_eq!(number(&body["maxHomePrice"]), 534632.0);
    assert_eq!(body["formattedMaxHomePrice"], "$534,632");
}

#[tokio::test]
async fn test_affordability_with_excess_debt_is_not_an_error() {
    let scenario = json!({
        "annualIncome": 60000,
        "monthlyDebt": 2500,
        "downPaymentAmount": 40000,
        "interestRateAnnualPercent": 6,
        "loanTermYears": 30,
        "debtToIncomeRatioPercent": 36
    });
    let (status, body) = send(app(), post_json(paths::AFFORDABILITY, &scenario)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(number(&body["maxMonthlyPayment"]), 0.0);
    assert_eq!(number(&body["maxHomePrice"]), 40000.0);
}

#[tokio::test]
async fn test_amortization_schedule_has_a_row_per_year() {
    let mut scenario = loan_scenario();
    scenario["loanTermYears"] = json!(15);
    let (status, body) = send(app(), post_json(paths::AMORTIZATION, &scenario)).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("schedule array");
    assert_eq!(rows.len(), 15);
    assert_eq!(rows[0]["year"], 1);
    assert_eq!(number(&rows[14]["endingBalance"]), 0.0);
}

#[tokio::test]
async fn test_validation_failure_lists_every_field() {
    let mut scenario = loan_scenario();
    scenario["homePrice"] = json!(0);
    scenario["loanTermYears"] = json!(-5);
    let (status, body) = send(app(), post_json(paths::PAYMENT, &scenario)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "validation_failed");
    let fields: Vec<&str> = body["violations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["homePrice", "loanTermYears"]);
    assert!(body["message"].as_str().unwrap().contains("homePrice"));
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri(paths::PAYMENT)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_json");
}

#[tokio::test]
async fn test_incomplete_scenario_uses_error_response_shape() {
    let response = app()
        .oneshot(post_json(paths::PAYMENT, &json!({"homePrice": 1})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "invalid_json");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("downPaymentPercent"));
}

#[tokio::test]
async fn test_mistyped_field_uses_error_response_shape() {
    let mut scenario = loan_scenario();
    scenario["loanTermYears"] = json!("thirty");
    let (status, body) = send(app(), post_json(paths::PAYMENT, &scenario)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "invalid_json");
}

#[tokio::test]
async fn test_missing_content_type_uses_error_response_shape() {
    let request = Request::builder()
        .method("POST")
        .uri(paths::AFFORDABILITY)
        .body(Body::from("{}"))
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["code"], "invalid_json");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let padding = "x".repeat(MAX_REQUEST_BODY_BYTES + 1);
    let request = Request::builder()
        .method("POST")
        .uri(paths::PAYMENT)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(format!(r#"{{"padding":"{padding}"}}"#)))
        .unwrap();
    let (status, _) = send(app(), request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

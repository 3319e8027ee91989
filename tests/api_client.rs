//! Gateway behavior against a stub backend: success payloads come back
//! unmodified, failures surface the backend's detail text.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use freight_rate_optimizer::domain::{
    QuoteResponse, RecommendationRequest, ShipmentRequest, ValidationReport,
};
use freight_rate_optimizer::infra::api::{FreightApiClient, FreightApiError};

fn option_json(mode: &str, price: f64, days: u32) -> serde_json::Value {
    json!({
        "mode": mode,
        "price": price,
        "transitDays": days,
        "route": [
            {"mode": mode, "origin": "Shanghai, China", "destination": "Rotterdam, Netherlands", "duration": format!("{days} days")}
        ]
    })
}

fn quote_json() -> serde_json::Value {
    json!({
        "cheapest": option_json("Ocean", 1450.0, 32),
        "fastest": option_json("Air", 8200.0, 3),
        "bestValue": option_json("Rail", 2100.0, 18),
        "options": [
            option_json("Air", 8200.0, 3),
            option_json("Rail", 2100.0, 18),
            option_json("Ocean", 1450.0, 32),
        ],
        "aiSummary": "Ocean is the cheapest by a wide margin; air only pays off for urgent cargo.",
        "requestId": "req-7f3a"
    })
}

fn sample_request() -> ShipmentRequest {
    let mut request = ShipmentRequest::default();
    request.toggle_shipment_type("Ocean (FCL)");
    request.set_field("weight", "1200");
    request.set_field("weightUnit", "kg");
    request.set_field("volume", "8.5");
    request.set_field("commodity", "Electronics");
    request.set_field("origin", "Shanghai, China");
    request.set_field("destination", "Rotterdam, Netherlands");
    request.set_field("insurance", "true");
    request
}

#[tokio::test]
async fn get_quotes_returns_backend_payload_unmodified() {
    let server = MockServer::start().await;
    let request = sample_request();

    Mock::given(method("POST"))
        .and(path("/multimodal/quote"))
        .and(body_json(serde_json::to_value(&request).unwrap()))
        .respond_with(ResponseTemplate::new(200).set_body_json(quote_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = FreightApiClient::with_base_url(&server.uri()).unwrap();
    let response = client.get_quotes(&request).await.unwrap();

    let expected: QuoteResponse = serde_json::from_value(quote_json()).unwrap();
    assert_eq!(response, expected);
    assert_eq!(response.cheapest, response.options[2]);
}

#[tokio::test]
async fn error_response_detail_reaches_the_caller() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/multimodal/quote"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string("weight must be greater than 0"),
        )
        .mount(&server)
        .await;

    let client = FreightApiClient::with_base_url(&server.uri()).unwrap();
    let err = client
        .get_quotes(&ShipmentRequest::default())
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, FreightApiError::Api(_)), "got {err:?}");
    assert!(message.contains("422"), "missing status in {message:?}");
    assert!(
        message.contains("weight must be greater than 0"),
        "missing backend detail in {message:?}"
    );
}

#[tokio::test]
async fn error_response_without_body_still_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/multimodal/quote"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = FreightApiClient::with_base_url(&server.uri()).unwrap();
    let err = client
        .get_quotes(&ShipmentRequest::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("503"), "got {err}");
}

#[tokio::test]
async fn malformed_success_body_is_rejected() {
    let server = MockServer::start().await;
    // Missing aiSummary/requestId, so the schema check must fail.
    Mock::given(method("POST"))
        .and(path("/multimodal/quote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"options": []})))
        .mount(&server)
        .await;

    let client = FreightApiClient::with_base_url(&server.uri()).unwrap();
    let err = client
        .get_quotes(&ShipmentRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, FreightApiError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn validate_posts_to_the_agent_endpoint() {
    let server = MockServer::start().await;
    let request = sample_request();

    Mock::given(method("POST"))
        .and(path("/agent/validate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "valid": true,
            "normalized": serde_json::to_value(&request).unwrap(),
            "warnings": ["departure window is in the past"],
            "errors": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = FreightApiClient::with_base_url(&server.uri()).unwrap();
    let report: ValidationReport = client.validate(&request).await.unwrap();
    assert!(report.valid);
    assert_eq!(report.normalized, request);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.errors.is_empty());
}

#[tokio::test]
async fn recommendations_post_options_back_to_the_backend() {
    let server = MockServer::start().await;
    let quotes: QuoteResponse = serde_json::from_value(quote_json()).unwrap();
    let request = RecommendationRequest {
        shipment_details: sample_request(),
        options: quotes.options.clone(),
        priorities: None,
    };

    Mock::given(method("POST"))
        .and(path("/agent/recommend"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendations": [{"reason": "lowest landed cost"}],
            "analysis": "Ocean FCL remains the best fit for non-urgent electronics.",
            "selectedOption": option_json("Ocean", 1450.0, 32)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = FreightApiClient::with_base_url(&server.uri()).unwrap();
    let report = client.get_recommendations(&request).await.unwrap();
    assert_eq!(report.selected_option.mode, "Ocean");
    assert!(report.analysis.contains("Ocean FCL"));
    assert_eq!(report.recommendations.len(), 1);
}

#[tokio::test]
async fn unreachable_backend_maps_to_a_transport_error() {
    // Nothing listens on this port; the request fails at the transport layer.
    let client = FreightApiClient::with_base_url("http://127.0.0.1:1").unwrap();
    let err = client
        .get_quotes(&ShipmentRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, FreightApiError::Http(_)), "got {err:?}");
}

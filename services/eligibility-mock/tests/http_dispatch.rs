use std::collections::BTreeSet;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use eligibility_mock::catalog::standard;
use eligibility_mock::config::AllowedOrigins;
use eligibility_mock::{router, AppState};

fn app() -> Router {
    router(AppState::new(standard().unwrap()), &AllowedOrigins::Any, true)
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Bytes) {
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, headers, bytes)
}

async fn get(path: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(path).body(Body::empty()).unwrap();
    let (status, _, bytes) = send(app(), req).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn leaf_paths(value: &Value, prefix: String, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (k, v) in map {
                leaf_paths(v, format!("{prefix}/{k}"), out);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (i, v) in items.iter().enumerate() {
                leaf_paths(v, format!("{prefix}/{i}"), out);
            }
        }
        _ => {
            out.insert(prefix);
        }
    }
}

fn paths_of(value: &Value) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    leaf_paths(value, String::new(), &mut out);
    out
}

#[tokio::test]
async fn member_success_has_single_active_member() {
    let (status, body) = get("/searchMemberById/m-a").await;
    assert_eq!(status, StatusCode::OK);
    let members = body["members"].as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["active"], true);
    assert_eq!(members[0]["masterRecordID"], "123qwerty");
    assert_eq!(members[0]["ESRDIndicator"], false);
    assert_eq!(members[0]["name"]["memberName"]["fullName"], "TEST USER");
}

#[tokio::test]
async fn member_error_is_plain_text_body_with_ok_status() {
    let (status, body) = get("/searchMemberById/m-e-r").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"text": "error, no info found"}));
}

#[tokio::test]
async fn coverage_error_is_plain_text_body_with_ok_status() {
    let (status, body) = get("/searchCoverageById/c-e-r").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"text": "error, no info found"}));
}

#[tokio::test]
async fn remaining_amount_missing_only_on_first_maximum() {
    let (status, body) = get("/searchAccums/acc-rem-amt-miss").await;
    assert_eq!(status, StatusCode::OK);
    let maxima = &body["planBenefitsAndAccums"][0]["planLevelBenefitInfo"]["benefitMaximums"]["benefitMaximum"];
    assert!(maxima[0].get("remainingAmount").is_none());
    assert_eq!(maxima[1]["remainingAmount"], "6450.0");
}

#[tokio::test]
async fn accumulator_failure_keeps_data_next_to_outcome() {
    let (status, failed) = get("/searchAccums/acc-f").await;
    assert_eq!(status, StatusCode::OK);
    let issue = &failed["operationOutcome"]["issue"];
    assert_eq!(issue[0]["code"], "00027");
    assert_eq!(issue[0]["severity"], "warning");
    assert_eq!(issue[0]["details"][0]["text"], "NASCO error: XXXXX");

    let (_, succ) = get("/searchAccums/acc-succ").await;
    assert!(succ.get("operationOutcome").is_none());
    assert_eq!(failed["member"], succ["member"]);

    let strip = |v: &Value| {
        paths_of(v)
            .into_iter()
            .filter(|p| !p.starts_with("/operationOutcome") && !p.ends_with("/remainingAmount"))
            .collect::<BTreeSet<_>>()
    };
    assert_eq!(strip(&failed), strip(&succ));
}

#[tokio::test]
async fn coverage_not_active_is_short_lived() {
    let (status, cnac) = get("/searchCoverageById/c-n-a-c").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cnac["coverages"][0]["coveragePeriod"], json!({"start": "2025-08-25", "end": "2025-09-04"}));

    let (_, cs) = get("/searchCoverageById/c-s").await;
    assert_eq!(cs["coverages"][0]["coveragePeriod"]["end"], "3000-12-31");
    assert_eq!(cnac["coverages"][1], cs["coverages"][1]);
}

#[tokio::test]
async fn unknown_member_is_404_not_a_plain_error() {
    let (status, body) = get("/searchMemberById/unknown-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("text").is_none());
    assert!(body["error"].as_str().unwrap().contains("unknown-id"));
}

#[tokio::test]
async fn identifiers_are_scoped_to_their_domain() {
    for path in ["/searchCoverageById/m-a", "/searchAccums/c-s", "/searchMemberById/acc-f"] {
        let (status, body) = get(path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(body.get("error").is_some());
    }
}

#[tokio::test]
async fn malformed_paths_are_not_found() {
    for path in ["/searchClaims/m-a", "/searchMemberById/", "/searchAccums/acc-f/extra", "/nope"] {
        let (status, body) = get(path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(body.get("text").is_none(), "{path}");
    }
}

#[tokio::test]
async fn omission_fixtures_differ_from_baseline_only_by_documented_fields() {
    let cases = [
        ("/searchMemberById/m-a", "/searchMemberById/m-b-m-n", vec!["/members/0/masterRecordID"]),
        (
            "/searchCoverageById/c-s",
            "/searchCoverageById/c-n-m-id",
            vec!["/coverages/0/businessIdentifier/masterRecordID"],
        ),
        (
            "/searchAccums/acc-succ",
            "/searchAccums/acc-rem-amt-miss",
            vec![
                "/planBenefitsAndAccums/0/planLevelBenefitInfo/benefitMaximums/benefitMaximum/0/remainingAmount",
                "/planBenefitsAndAccums/0/planLevelBenefitInfo/memberCost/memberCostComponent/0/remainingAmount",
            ],
        ),
    ];
    let catalog = standard().unwrap();
    for (baseline, omission, documented) in cases {
        let (_, full) = get(baseline).await;
        let (_, partial) = get(omission).await;
        let full = paths_of(&full);
        let partial = paths_of(&partial);
        assert!(partial.is_subset(&full), "{omission} adds fields");
        let missing = full.difference(&partial).cloned().collect::<Vec<_>>();
        assert_eq!(missing, documented, "{omission}");

        let (domain, id) = omission.trim_start_matches('/').split_once('/').unwrap();
        let domain = eligibility_mock::domain::Domain::from_segment(domain).unwrap();
        assert_eq!(catalog.lookup(domain, id).unwrap().payload.omitted(), documented.as_slice());
    }
}

#[tokio::test]
async fn every_fixture_is_served_byte_for_byte_and_repeatably() {
    let catalog = standard().unwrap();
    let app = app();
    for fixture in catalog.fixtures() {
        let mut seen = Vec::new();
        for _ in 0..2 {
            let req = Request::builder().uri(fixture.path()).body(Body::empty()).unwrap();
            let (status, headers, bytes) = send(app.clone(), req).await;
            assert_eq!(status, StatusCode::OK, "{}", fixture.path());
            assert_eq!(headers[header::CONTENT_TYPE], "application/json");
            assert!(headers.contains_key("x-request-id"));
            seen.push(bytes);
        }
        assert_eq!(seen[0], seen[1]);
        assert_eq!(seen[0], fixture.body());
    }
}

#[tokio::test]
async fn concurrent_lookups_are_independent() {
    let app = app();
    let mut tasks = Vec::new();
    for i in 0..32 {
        let app = app.clone();
        let path = if i % 2 == 0 { "/searchAccums/acc-f" } else { "/searchMemberById/unknown-id" };
        tasks.push(tokio::spawn(async move {
            let req = Request::builder().uri(path).body(Body::empty()).unwrap();
            let (status, _, _) = send(app, req).await;
            (path, status)
        }));
    }
    for task in tasks {
        let (path, status) = task.await.unwrap();
        let expected = if path.ends_with("acc-f") { StatusCode::OK } else { StatusCode::NOT_FOUND };
        assert_eq!(status, expected);
    }
}

#[tokio::test]
async fn root_lists_every_catalogued_route() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Healthcare Mock API Service");
    let endpoints = body["endpoints"].as_array().unwrap();
    assert_eq!(endpoints.len(), 11);
    assert_eq!(endpoints[0]["path"], "/searchMemberById/m-a");
    assert_eq!(endpoints[0]["methods"], json!(["GET"]));
    assert_eq!(endpoints[3]["variant"], "plainError");
    assert_eq!(endpoints[10]["domain"], "accumulator");
    assert_eq!(endpoints[10]["description"], "Search for accumulator with ID 'acc-f' (failure case)");
}

#[tokio::test]
async fn health_is_static() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "service": "Healthcare Mock API"}));
}

#[tokio::test]
async fn openapi_document_is_served_when_enabled() {
    let (status, body) = get("/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/searchAccums/acc-f"]["get"].is_object());

    let disabled = router(AppState::new(standard().unwrap()), &AllowedOrigins::Any, false);
    let req = Request::builder().uri("/openapi.json").body(Body::empty()).unwrap();
    let (status, _, _) = send(disabled, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn request_id_is_echoed() {
    let req = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(app(), req).await;
    assert_eq!(headers["x-request-id"], "abc-123");
}

#[tokio::test]
async fn cors_allow_list_is_applied() {
    let origins = AllowedOrigins::parse(&["https://portal.example"]).unwrap();
    let app = router(AppState::new(standard().unwrap()), &origins, false);

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/searchMemberById/m-a")
        .header(header::ORIGIN, "https://portal.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(app.clone(), req).await;
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://portal.example");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");

    let req = Request::builder()
        .uri("/searchMemberById/m-a")
        .header(header::ORIGIN, "https://evil.example")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

// Integration tests for the NeighborFit HTTP API

use actix_web::http::{header::ContentType, StatusCode};
use actix_web::{test, web, App};
use neighborfit::config::MatchingSettings;
use neighborfit::core::Matcher;
use neighborfit::models::ScoringParams;
use neighborfit::routes::{configure_routes, AppState};
use neighborfit::services::NeighborhoodDataset;
use serde_json::{json, Value};
use std::sync::Arc;

fn create_state(matcher: Matcher, max_results: usize) -> AppState {
    AppState {
        dataset: Arc::new(NeighborhoodDataset::builtin().unwrap()),
        matcher,
        matching: MatchingSettings {
            max_results,
            ..MatchingSettings::default()
        },
    }
}

fn family_preferences() -> Value {
    json!({
        "budget": [2500],
        "walkability": [9],
        "safety": [8],
        "nightlife": [3],
        "familyFriendly": [7],
        "publicTransit": [6],
        "lifestyle": "family",
        "priorities": ["Good schools"]
    })
}

fn names(matches: &Value) -> Vec<String> {
    matches
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect()
}

fn assert_sorted_by_score(matches: &Value) {
    let scores: Vec<u64> = matches
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["overallScore"].as_u64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "not sorted: {:?}", scores);
}

#[actix_web::test]
async fn test_matching_end_to_end() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(Matcher::default(), 10)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/matching")
        .set_json(json!({ "preferences": family_preferences() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let matches = &body["matches"];
    assert_eq!(matches.as_array().unwrap().len(), 8);
    assert_sorted_by_score(matches);

    let ranked = names(matches);
    let fremont = ranked.iter().position(|n| n == "Fremont").unwrap();
    let belltown = ranked.iter().position(|n| n == "Belltown").unwrap();
    assert!(fremont < belltown);

    // Record fields are inlined next to the scores
    let first = &matches[0];
    assert!(first["id"].is_string());
    assert!(first["scores"]["familyFriendly"].is_u64());
    assert!(first["categoryScores"]["safety"].is_u64());
    assert!(first["matchReasons"].as_array().unwrap().len() <= 4);
    assert_eq!(first["confidenceScore"], 95);

    assert_eq!(body["metadata"]["totalNeighborhoods"], 8);
    assert_eq!(body["metadata"]["algorithmVersion"], "2.1");
    assert!(body["metadata"]["processingTime"].as_f64().unwrap() >= 0.0);
}

#[actix_web::test]
async fn test_matching_respects_result_cap() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(Matcher::default(), 3)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/matching")
        .set_json(json!({ "preferences": family_preferences() }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["matches"].as_array().unwrap().len(), 3);
    assert_eq!(body["metadata"]["totalNeighborhoods"], 8);
}

#[actix_web::test]
async fn test_matching_rejects_invalid_preferences() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(Matcher::default(), 10)))
            .configure(configure_routes),
    )
    .await;

    let mut without_walkability = family_preferences();
    without_walkability.as_object_mut().unwrap().remove("walkability");

    let mut too_many_priorities = family_preferences();
    too_many_priorities["priorities"] = json!([
        "Good schools",
        "Safe neighborhood",
        "Short commute",
        "Parks & recreation"
    ]);

    let mut unknown_lifestyle = family_preferences();
    unknown_lifestyle["lifestyle"] = json!("astronaut");

    let bodies = vec![
        json!({}),
        json!({ "preferences": { "walkability": [5] } }),
        json!({ "preferences": without_walkability }),
        json!({ "preferences": too_many_priorities }),
        json!({ "preferences": unknown_lifestyle }),
    ];

    for body in bodies {
        let req = test::TestRequest::post()
            .uri("/api/matching")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);

        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error["error"], "Invalid preferences data");
        assert!(error["details"].is_string());
    }
}

#[actix_web::test]
async fn test_malformed_json_is_client_error() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(Matcher::default(), 10)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/matching")
        .insert_header(ContentType::json())
        .set_payload("{\"preferences\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "Invalid JSON");
}

#[actix_web::test]
async fn test_scoring_failure_is_server_error() {
    let broken = Matcher::new(ScoringParams {
        priority_bonus: f64::NAN,
        ..ScoringParams::default()
    });
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(broken, 10)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/matching")
        .set_json(json!({ "preferences": family_preferences() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "Failed to calculate matches");
    assert!(error["details"].as_str().unwrap().contains("non-finite"));
    assert!(error.get("matches").is_none());
}

#[actix_web::test]
async fn test_get_neighborhood_by_id() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(Matcher::default(), 10)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/neighborhoods?id=2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Fremont");
    assert_eq!(body["housing"]["averageRent"], 2400);

    let req = test::TestRequest::get().uri("/api/neighborhoods?id=404").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "Neighborhood not found");
}

#[actix_web::test]
async fn test_browse_neighborhoods() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(Matcher::default(), 10)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/neighborhoods").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.as_array().unwrap().len(), 8);
    assert_eq!(all[0]["name"], "Ballard");

    let req = test::TestRequest::get().uri("/api/neighborhoods?sortBy=rent").to_request();
    let by_rent: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(by_rent[0]["name"], "Georgetown");

    let req = test::TestRequest::get().uri("/api/neighborhoods?search=good%20schools").to_request();
    let schools: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(names(&schools), vec!["Green Lake", "Wallingford"]);

    let req = test::TestRequest::get().uri("/api/neighborhoods?sortBy=vibes").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_rank_all_neighborhoods() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(Matcher::default(), 3)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/neighborhoods")
        .set_json(json!({ "preferences": family_preferences() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // No cap on this endpoint, whatever the matching limit is
    let matches: Value = test::read_body_json(resp).await;
    assert_eq!(matches.as_array().unwrap().len(), 8);
    assert_sorted_by_score(&matches);
}

#[actix_web::test]
async fn test_rank_all_failure_has_no_details() {
    let broken = Matcher::new(ScoringParams {
        priority_bonus: f64::NAN,
        ..ScoringParams::default()
    });
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(broken, 10)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/neighborhoods")
        .set_json(json!({ "preferences": family_preferences() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error, json!({ "error": "Internal server error" }));
}

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(create_state(Matcher::default(), 10)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["neighborhoods"], 8);
}

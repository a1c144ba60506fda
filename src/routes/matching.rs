use actix_web::{web, HttpResponse, Responder};
use std::time::Instant;
use crate::models::{ErrorResponse, HealthResponse, MatchingMetadata, MatchingRequest, MatchingResponse};
use crate::routes::AppState;

/// Configure matching and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matching", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        neighborhoods: state.dataset.len(),
    })
}

/// Find matches endpoint
///
/// POST /api/matching
///
/// Request body:
/// ```json
/// {
///   "preferences": {
///     "budget": [2500],
///     "walkability": [7],
///     "safety": [8],
///     "nightlife": [5],
///     "familyFriendly": [5],
///     "publicTransit": [6],
///     "lifestyle": "family",
///     "priorities": ["Good schools"]
///   }
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<MatchingRequest>,
) -> impl Responder {
    let started = Instant::now();

    let preferences = match req.into_inner().into_preferences() {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::info!("Validation failed for matching request: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse::with_details("Invalid preferences data", e));
        }
    };

    tracing::debug!(
        "Matching {} neighborhoods, lifestyle: {:?}, priorities: {:?}",
        state.dataset.len(),
        preferences.lifestyle,
        preferences.priorities
    );

    let ranked = match state
        .matcher
        .rank(&preferences, state.dataset.all(), Some(state.matching.max_results))
    {
        Ok(ranked) => ranked,
        Err(e) => {
            tracing::error!("Matching algorithm error: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse::with_details("Failed to calculate matches", e));
        }
    };

    let response = MatchingResponse {
        metadata: MatchingMetadata {
            total_neighborhoods: ranked.total_neighborhoods,
            algorithm_version: state.matching.algorithm_version.clone(),
            processing_time: started.elapsed().as_secs_f64() * 1000.0,
            generated_at: chrono::Utc::now(),
        },
        matches: ranked.matches,
    };

    tracing::info!(
        "Returning {} matches (from {} neighborhoods)",
        response.matches.len(),
        response.metadata.total_neighborhoods
    );

    HttpResponse::Ok().json(response)
}

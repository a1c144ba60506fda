use actix_web::{web, HttpResponse, Responder};
use crate::core::browse;
use crate::models::{BrowseQuery, ErrorResponse, MatchingRequest};
use crate::routes::AppState;

/// Configure neighborhood browse routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/neighborhoods")
            .route(web::get().to(get_neighborhoods))
            .route(web::post().to(rank_neighborhoods)),
    );
}

/// Browse neighborhoods
///
/// GET /api/neighborhoods?id={id}
/// GET /api/neighborhoods?search={term}&sortBy={name|walkability|safety|affordability|rent}
///
/// With `id` returns that single record (404 if unknown); otherwise the
/// filtered and sorted list.
async fn get_neighborhoods(
    state: web::Data<AppState>,
    query: web::Query<BrowseQuery>,
) -> impl Responder {
    if let Some(id) = query.id.as_deref() {
        return match state.dataset.get(id) {
            Some(neighborhood) => HttpResponse::Ok().json(neighborhood),
            None => {
                tracing::debug!("Neighborhood {} not found", id);
                HttpResponse::NotFound().json(ErrorResponse::new("Neighborhood not found"))
            }
        };
    }

    let results = browse(state.dataset.all(), &query);
    tracing::debug!("Browse returned {} of {} neighborhoods", results.len(), state.dataset.len());

    HttpResponse::Ok().json(results)
}

/// Score and rank every neighborhood, without a result cap
///
/// POST /api/neighborhoods
///
/// Takes the same body as `/api/matching` and returns a bare array.
async fn rank_neighborhoods(
    state: web::Data<AppState>,
    req: web::Json<MatchingRequest>,
) -> impl Responder {
    let preferences = match req.into_inner().into_preferences() {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::info!("Validation failed for neighborhood ranking: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse::with_details("Invalid preferences data", e));
        }
    };

    match state.matcher.rank(&preferences, state.dataset.all(), None) {
        Ok(ranked) => HttpResponse::Ok().json(ranked.matches),
        Err(e) => {
            tracing::error!("Error calculating matches: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}

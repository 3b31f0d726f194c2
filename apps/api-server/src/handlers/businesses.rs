//! Business lookup and scoring handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use leadscout_shared::dto::{BusinessSearchResponse, ScoreResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    query: String,
    page_token: Option<String>,
}

/// GET /api/businesses?query=...&page_token=...
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner();
    if params.query.trim().is_empty() {
        return Err(AppError::BadRequest("query must not be empty".to_string()));
    }

    let page = state
        .service
        .search_businesses(&params.query, params.page_token.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(BusinessSearchResponse::from(page)))
}

/// GET /api/businesses/{place_id}
pub async fn details(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let place_id = path.into_inner();
    let business = state.service.get_business_details(&place_id).await?;
    Ok(HttpResponse::Ok().json(business))
}

/// GET /api/businesses/score/{place_id}
pub async fn score(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let place_id = path.into_inner();
    let score = state.service.get_score(&place_id).await?;
    Ok(HttpResponse::Ok().json(ScoreResponse { place_id, score }))
}

/// GET /api/businesses/web-analytics/{place_id}
pub async fn web_analytics(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let place_id = path.into_inner();
    let stats = state.service.get_website_stats(&place_id).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// GET /api/businesses/trends/{name}
pub async fn trends(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let name = path.into_inner();
    let report = state.service.get_search_trends(&name).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /api/businesses/summary/{place_id}
pub async fn summary(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let place_id = path.into_inner();
    let summary = state.service.get_ai_summary(&place_id).await?;
    Ok(HttpResponse::Ok().json(summary))
}

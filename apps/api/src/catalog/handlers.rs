//! Axum route handlers for the Career Explorer.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::catalog::careers::INDUSTRIES;
use crate::catalog::explorer::ExploreQuery;
use crate::errors::AppError;
use crate::models::career::Career;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    pub careers: Vec<Career>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct IndustriesResponse {
    pub industries: &'static [&'static str],
}

/// GET /api/careers?search=&industry=&sort_by=
pub async fn handle_list_careers(
    State(state): State<AppState>,
    Query(query): Query<ExploreQuery>,
) -> Json<CareerListResponse> {
    let careers = state.catalog.explore(&query);
    Json(CareerListResponse {
        count: careers.len(),
        careers,
    })
}

/// GET /api/careers/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Career>, AppError> {
    state
        .catalog
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))
}

/// GET /api/industries
pub async fn handle_list_industries() -> Json<IndustriesResponse> {
    Json(IndustriesResponse {
        industries: INDUSTRIES,
    })
}

//! Axum route handler for career analysis.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::matching::rules::match_careers;

pub const MISSING_ANALYZE_FIELDS: &str = "Skills and interests are required!";

#[derive(Debug, Deserialize)]
pub struct AnalyzeCareerRequest {
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeCareerResponse {
    pub suggestions: Vec<String>,
}

/// POST /api/analyzeCareer
///
/// An empty suggestion list is a successful response; only an absent or
/// empty field is rejected.
pub async fn handle_analyze_career(
    Json(request): Json<AnalyzeCareerRequest>,
) -> Result<Json<AnalyzeCareerResponse>, AppError> {
    let (skills, interests) = match (request.skills.as_deref(), request.interests.as_deref()) {
        (Some(s), Some(i)) if !s.is_empty() && !i.is_empty() => (s, i),
        _ => return Err(AppError::MissingField(MISSING_ANALYZE_FIELDS)),
    };

    let suggestions = match_careers(skills, interests);
    debug!(count = suggestions.len(), "Career analysis complete");

    Ok(Json(AnalyzeCareerResponse { suggestions }))
}

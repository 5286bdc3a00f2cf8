use axum::Json;
use serde::Deserialize;

use crate::models::skill::SkillLevel;
use crate::skills::progress::{compute_progress_report, ProgressReport};

#[derive(Debug, Deserialize)]
pub struct SkillProgressRequest {
    #[serde(default)]
    pub skills: Vec<SkillLevel>,
}

/// POST /api/skills/progress
pub async fn handle_skill_progress(
    Json(request): Json<SkillProgressRequest>,
) -> Json<ProgressReport> {
    Json(compute_progress_report(&request.skills))
}

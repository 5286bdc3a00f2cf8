//! Axum route handler for saving profiles.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::ProfileRecord;
use crate::state::AppState;

pub const PROFILE_SAVED: &str = "Profile saved successfully!";
pub const MISSING_PROFILE_FIELDS: &str = "Name and email are required!";

#[derive(Debug, Deserialize)]
pub struct SaveProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveProfileResponse {
    pub message: &'static str,
}

/// POST /api/saveProfile
///
/// Presence check only: the email is used as the key exactly as sent.
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Json(request): Json<SaveProfileRequest>,
) -> Result<Json<SaveProfileResponse>, AppError> {
    let (name, email) = match (request.name, request.email) {
        (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => (name, email),
        _ => return Err(AppError::MissingField(MISSING_PROFILE_FIELDS)),
    };

    let previous = state
        .profiles
        .upsert(ProfileRecord::new(name, email))
        .await?;
    info!(replaced = previous.is_some(), "Profile saved");

    Ok(Json(SaveProfileResponse {
        message: PROFILE_SAVED,
    }))
}

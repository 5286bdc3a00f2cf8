use serde::{Deserialize, Serialize};

/// A skill the user is tracking, as submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillLevel {
    pub skill: String,
    pub current_level: u32,
    pub target_level: u32,
}

/// A tracked skill with its computed progress toward the target level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillProgress {
    pub skill: String,
    pub current_level: u32,
    pub target_level: u32,
    pub progress: f64, // percent; exceeds 100 once past the target
    pub completed: bool,
}

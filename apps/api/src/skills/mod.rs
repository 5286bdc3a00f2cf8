// Skill tracking: progress of each skill toward its target level.

pub mod handlers;
pub mod progress;

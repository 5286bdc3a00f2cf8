use serde::Serialize;

use crate::models::skill::{SkillLevel, SkillProgress};

#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub skills: Vec<SkillProgress>,
    pub overall_progress: f64, // mean of per-skill progress
    pub active_skills: usize,
}

/// Percent of the target level reached. Not capped at 100.
/// A zero target has nothing to measure against and reports 0.
pub fn skill_progress(current_level: u32, target_level: u32) -> f64 {
    if target_level == 0 {
        return 0.0;
    }
    f64::from(current_level) / f64::from(target_level) * 100.0
}

/// Computes progress for each tracked skill plus the overall mean.
///
/// Skill names are trimmed; entries left with an empty name are skipped
/// and do not count toward the mean.
pub fn compute_progress_report(levels: &[SkillLevel]) -> ProgressReport {
    let skills: Vec<SkillProgress> = levels
        .iter()
        .filter_map(|level| {
            let name = level.skill.trim();
            if name.is_empty() {
                return None;
            }
            let progress = skill_progress(level.current_level, level.target_level);
            Some(SkillProgress {
                skill: name.to_string(),
                current_level: level.current_level,
                target_level: level.target_level,
                progress,
                completed: progress >= 100.0,
            })
        })
        .collect();

    let overall_progress = if skills.is_empty() {
        0.0
    } else {
        skills.iter().map(|s| s.progress).sum::<f64>() / skills.len() as f64
    };

    ProgressReport {
        active_skills: skills.len(),
        overall_progress,
        skills,
    }
}

use serde::{Deserialize, Serialize};

/// One entry of the career catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: String,
    pub title: String,
    pub description: String,
    pub match_percentage: u8, // 0 – 100
    pub required_skills: Vec<String>,
    /// Display string, e.g. "$75,000 - $120,000".
    pub average_salary: String,
    /// Display string, e.g. "13%".
    pub growth_rate: String,
    pub industry: String,
}

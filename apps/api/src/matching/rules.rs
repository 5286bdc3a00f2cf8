//! Category rule table and the matcher that evaluates it.
//!
//! Each rule fires when the skills text contains its skills trigger OR the
//! interests text contains its interests trigger. Every rule is evaluated,
//! in table order, and all firing rules contribute their titles. Output
//! order is part of the API contract.

/// One row of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub skills_trigger: &'static str,
    pub interests_trigger: &'static str,
    pub titles: &'static [&'static str],
}

impl CategoryRule {
    /// Both inputs must already be lower-cased.
    fn fires(&self, skills: &str, interests: &str) -> bool {
        skills.contains(self.skills_trigger) || interests.contains(self.interests_trigger)
    }
}

pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        skills_trigger: "coding",
        interests_trigger: "tech",
        titles: &["Software Developer", "AI Engineer", "Cybersecurity Analyst"],
    },
    CategoryRule {
        skills_trigger: "design",
        interests_trigger: "art",
        titles: &["UX/UI Designer", "Creative Director", "Game Designer"],
    },
    CategoryRule {
        skills_trigger: "leadership",
        interests_trigger: "business",
        titles: &["Project Manager", "Startup Consultant", "Business Analyst"],
    },
    CategoryRule {
        skills_trigger: "communication",
        interests_trigger: "media",
        titles: &["Marketing Specialist", "Content Creator", "PR Manager"],
    },
    CategoryRule {
        skills_trigger: "empathy",
        interests_trigger: "healthcare",
        titles: &["Psychologist", "Nutritionist", "Medical Researcher"],
    },
];

/// Returns the career titles suggested for the given skills and interests.
///
/// Matching is case-insensitive substring search; the text is never split
/// into tokens, so "artist" triggers on "art". Titles are not de-duplicated.
pub fn match_careers(skills: &str, interests: &str) -> Vec<String> {
    let skills = skills.to_lowercase();
    let interests = interests.to_lowercase();

    CATEGORY_RULES
        .iter()
        .filter(|rule| rule.fires(&skills, &interests))
        .flat_map(|rule| rule.titles.iter().map(|t| t.to_string()))
        .collect()
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved user profile. Keyed by `email`; a later save replaces the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub email: String,
    pub saved_at: DateTime<Utc>,
}

impl ProfileRecord {
    pub fn new(name: String, email: String) -> Self {
        ProfileRecord {
            name,
            email,
            saved_at: Utc::now(),
        }
    }
}

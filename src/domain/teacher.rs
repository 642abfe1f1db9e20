use serde::{Deserialize, Serialize};

/// An account allowed to manage announcements. Existence is the only check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Teacher {
    pub username: String,
    pub display_name: Option<String>,
    pub role: String,
}

impl Teacher {
    pub fn new(username: impl Into<String>, display_name: Option<String>, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name,
            role: role.into(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// A timed notice. Dates are ISO 8601 `YYYY-MM-DD` strings and are compared
/// lexicographically, which only orders correctly for that exact format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub text: Option<String>,
    pub start_date: Option<String>,
    pub expiration_date: Option<String>,
    pub created_by: Option<String>,
}

impl Announcement {
    /// Not yet expired, and either no start date or already started.
    pub fn is_active_on(&self, today: &str) -> bool {
        let not_expired = self
            .expiration_date
            .as_deref()
            .map(|expires| expires >= today)
            .unwrap_or(false);
        let started = self
            .start_date
            .as_deref()
            .map(|start| start <= today)
            .unwrap_or(true);

        not_expired && started
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub text: Option<String>,
    pub start_date: Option<String>,
    pub expiration_date: Option<String>,
}

/// Wire payload for an update. `null` and a missing key both mean "leave as is".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAnnouncementRequest {
    pub text: Option<String>,
    pub start_date: Option<String>,
    pub expiration_date: Option<String>,
}

/// The fields an update actually writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncementChanges {
    pub text: Option<String>,
    pub start_date: Option<String>,
    pub expiration_date: Option<String>,
}

impl AnnouncementChanges {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.start_date.is_none() && self.expiration_date.is_none()
    }

    /// Field-wise overwrite, mirroring the SQL `COALESCE` update. Only the
    /// in-memory test store applies changes in Rust.
    #[cfg(test)]
    pub fn apply_to(&self, announcement: &mut Announcement) {
        if let Some(ref text) = self.text {
            announcement.text = Some(text.clone());
        }
        if let Some(ref start_date) = self.start_date {
            announcement.start_date = Some(start_date.clone());
        }
        if let Some(ref expiration_date) = self.expiration_date {
            announcement.expiration_date = Some(expiration_date.clone());
        }
    }
}

impl From<UpdateAnnouncementRequest> for AnnouncementChanges {
    fn from(request: UpdateAnnouncementRequest) -> Self {
        Self {
            text: request.text,
            start_date: request.start_date,
            expiration_date: request.expiration_date,
        }
    }
}

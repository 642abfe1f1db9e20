use std::sync::Arc;
use mockable::Clock;
use uuid::Uuid;

use crate::{
    domain::{
        Announcement, AnnouncementChanges, CreateAnnouncementRequest, Teacher,
        UpdateAnnouncementRequest,
    },
    error::{AppError, Result},
    repository::{AnnouncementRepository, TeacherRepository},
};

const NOT_FOUND: &str = "Announcement not found";

pub struct AnnouncementService {
    announcements: Arc<dyn AnnouncementRepository>,
    teachers: Arc<dyn TeacherRepository>,
    clock: Arc<dyn Clock>,
}

impl AnnouncementService {
    pub fn new(
        announcements: Arc<dyn AnnouncementRepository>,
        teachers: Arc<dyn TeacherRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { announcements, teachers, clock }
    }

    /// Local calendar date as `YYYY-MM-DD`.
    fn today(&self) -> String {
        self.clock.local().date_naive().format("%Y-%m-%d").to_string()
    }

    /// Resolve the caller to a teacher account. `action` names the operation
    /// in the rejection message.
    pub async fn authorize(&self, caller: Option<&str>, action: &str) -> Result<Teacher> {
        let username = match caller {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(AppError::Unauthorized(format!(
                    "Authentication required to {} announcements",
                    action
                )));
            }
        };

        self.teachers
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Rejected announcement {} by unknown teacher {}", action, username);
                AppError::Unauthorized("Invalid teacher credentials".to_string())
            })
    }

    /// Announcements visible today, soonest expiry first.
    pub async fn list_active(&self) -> Result<Vec<Announcement>> {
        let today = self.today();
        let announcements = self.announcements.list_active(&today).await?;
        tracing::debug!("{} active announcements on {}", announcements.len(), today);
        Ok(announcements)
    }

    /// Every announcement regardless of dates, soonest expiry first.
    pub async fn list_all(&self) -> Result<Vec<Announcement>> {
        self.announcements.list_all().await
    }

    pub async fn create(
        &self,
        request: CreateAnnouncementRequest,
        caller: Option<&str>,
    ) -> Result<Announcement> {
        let teacher = self.authorize(caller, "create").await?;

        let expiration_date = match request.expiration_date {
            Some(date) if !date.is_empty() => date,
            _ => return Err(AppError::BadRequest("expiration_date is required".to_string())),
        };

        let announcement = Announcement {
            id: Uuid::new_v4().to_string(),
            text: request.text,
            start_date: request.start_date,
            expiration_date: Some(expiration_date),
            created_by: Some(teacher.username),
        };

        let created = self.announcements.create(announcement).await?;
        tracing::info!(
            "Announcement {} created by {:?}",
            created.id,
            created.created_by
        );

        Ok(created)
    }

    /// Replace the supplied fields and return the stored record as re-read.
    pub async fn update(
        &self,
        id: &str,
        request: UpdateAnnouncementRequest,
        caller: Option<&str>,
    ) -> Result<Announcement> {
        let teacher = self.authorize(caller, "update").await?;

        if self.announcements.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }

        let changes = AnnouncementChanges::from(request);
        if changes.is_empty() {
            return Err(AppError::BadRequest("No update fields provided".to_string()));
        }

        if !self.announcements.update(id, changes).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }
        tracing::info!("Announcement {} updated by {}", id, teacher.username);

        // A concurrent delete can land between the write and this read.
        self.announcements
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn delete(&self, id: &str, caller: Option<&str>) -> Result<()> {
        let teacher = self.authorize(caller, "delete").await?;

        if !self.announcements.delete(id).await? {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }
        tracing::info!("Announcement {} deleted by {}", id, teacher.username);

        Ok(())
    }
}

use async_trait::async_trait;
use crate::domain::*;
use crate::error::Result;

pub mod announcement_repository;
pub mod teacher_repository;
#[cfg(test)]
pub mod memory;

pub use announcement_repository::SqliteAnnouncementRepository;
pub use teacher_repository::SqliteTeacherRepository;

#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    async fn create(&self, announcement: Announcement) -> Result<Announcement>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Announcement>>;
    /// Every announcement, ordered by expiration date.
    async fn list_all(&self) -> Result<Vec<Announcement>>;
    /// Announcements visible on `today` (`YYYY-MM-DD`), ordered by expiration date.
    async fn list_active(&self, today: &str) -> Result<Vec<Announcement>>;
    /// Returns whether a row with `id` existed.
    async fn update(&self, id: &str, changes: AnnouncementChanges) -> Result<bool>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: &str) -> Result<bool>;
}

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Teacher>>;
    async fn create(&self, teacher: Teacher) -> Result<Teacher>;
}

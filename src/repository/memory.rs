//! In-memory stores for exercising the service layer without SQLite.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    domain::{Announcement, AnnouncementChanges, Teacher},
    error::{AppError, Result},
    repository::{AnnouncementRepository, TeacherRepository},
};

#[derive(Default)]
pub struct InMemoryAnnouncementRepository {
    records: Mutex<HashMap<String, Announcement>>,
}

impl InMemoryAnnouncementRepository {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Announcement>>> {
        self.records
            .lock()
            .map_err(|_| AppError::Internal("announcement store poisoned".to_string()))
    }

    fn sorted(mut announcements: Vec<Announcement>) -> Vec<Announcement> {
        announcements.sort_by(|a, b| {
            a.expiration_date
                .cmp(&b.expiration_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        announcements
    }
}

#[async_trait]
impl AnnouncementRepository for InMemoryAnnouncementRepository {
    async fn create(&self, announcement: Announcement) -> Result<Announcement> {
        let mut records = self.lock()?;
        if records.contains_key(&announcement.id) {
            return Err(AppError::Database(format!("duplicate id {}", announcement.id)));
        }
        records.insert(announcement.id.clone(), announcement.clone());
        Ok(announcement)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Announcement>> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Announcement>> {
        Ok(Self::sorted(self.lock()?.values().cloned().collect()))
    }

    async fn list_active(&self, today: &str) -> Result<Vec<Announcement>> {
        let active = self
            .lock()?
            .values()
            .filter(|a| a.is_active_on(today))
            .cloned()
            .collect();
        Ok(Self::sorted(active))
    }

    async fn update(&self, id: &str, changes: AnnouncementChanges) -> Result<bool> {
        let mut records = self.lock()?;
        match records.get_mut(id) {
            Some(existing) => {
                changes.apply_to(existing);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.lock()?.remove(id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryTeacherRepository {
    teachers: Mutex<HashMap<String, Teacher>>,
}

impl InMemoryTeacherRepository {
    pub fn with_teachers(usernames: &[&str]) -> Self {
        let teachers = usernames
            .iter()
            .map(|name| (name.to_string(), Teacher::new(*name, None, "teacher")))
            .collect();
        Self { teachers: Mutex::new(teachers) }
    }
}

#[async_trait]
impl TeacherRepository for InMemoryTeacherRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Teacher>> {
        let teachers = self
            .teachers
            .lock()
            .map_err(|_| AppError::Internal("teacher store poisoned".to_string()))?;
        Ok(teachers.get(username).cloned())
    }

    async fn create(&self, teacher: Teacher) -> Result<Teacher> {
        let mut teachers = self
            .teachers
            .lock()
            .map_err(|_| AppError::Internal("teacher store poisoned".to_string()))?;
        teachers.insert(teacher.username.clone(), teacher.clone());
        Ok(teacher)
    }
}

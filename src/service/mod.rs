pub mod announcement_service;

use std::sync::Arc;
use mockable::Clock;
use crate::repository::*;

pub use announcement_service::AnnouncementService;

pub struct ServiceContext {
    pub announcement_service: Arc<AnnouncementService>,
}

impl ServiceContext {
    pub fn new(
        announcement_repo: Arc<dyn AnnouncementRepository>,
        teacher_repo: Arc<dyn TeacherRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let announcement_service = Arc::new(AnnouncementService::new(
            announcement_repo,
            teacher_repo,
            clock,
        ));

        Self { announcement_service }
    }
}

use async_trait::async_trait;
use sqlx::{SqlitePool, FromRow};

use crate::{
    domain::{Announcement, AnnouncementChanges},
    error::{AppError, Result},
    repository::AnnouncementRepository,
};

#[derive(FromRow)]
struct AnnouncementRow {
    id: String,
    text: Option<String>,
    start_date: Option<String>,
    expiration_date: Option<String>,
    created_by: Option<String>,
}

impl From<AnnouncementRow> for Announcement {
    fn from(row: AnnouncementRow) -> Self {
        Self {
            id: row.id,
            text: row.text,
            start_date: row.start_date,
            expiration_date: row.expiration_date,
            created_by: row.created_by,
        }
    }
}

pub struct SqliteAnnouncementRepository {
    pool: SqlitePool,
}

impl SqliteAnnouncementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnnouncementRepository for SqliteAnnouncementRepository {
    async fn create(&self, announcement: Announcement) -> Result<Announcement> {
        sqlx::query(
            r#"
            INSERT INTO announcements (id, text, start_date, expiration_date, created_by)
            VALUES (?, ?, ?, ?, ?)
            "#
        )
        .bind(&announcement.id)
        .bind(&announcement.text)
        .bind(&announcement.start_date)
        .bind(&announcement.expiration_date)
        .bind(&announcement.created_by)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        self.find_by_id(&announcement.id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve created announcement".to_string())
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Announcement>> {
        let row = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT id, text, start_date, expiration_date, created_by
            FROM announcements
            WHERE id = ?
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.map(Announcement::from))
    }

    async fn list_all(&self) -> Result<Vec<Announcement>> {
        let rows = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT id, text, start_date, expiration_date, created_by
            FROM announcements
            ORDER BY expiration_date ASC, id ASC
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Announcement::from).collect())
    }

    async fn list_active(&self, today: &str) -> Result<Vec<Announcement>> {
        let rows = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT id, text, start_date, expiration_date, created_by
            FROM announcements
            WHERE expiration_date >= ?
              AND (start_date IS NULL OR start_date <= ?)
            ORDER BY expiration_date ASC, id ASC
            "#
        )
        .bind(today)
        .bind(today)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Announcement::from).collect())
    }

    async fn update(&self, id: &str, changes: AnnouncementChanges) -> Result<bool> {
        // NULL binds keep the stored value.
        let result = sqlx::query(
            r#"
            UPDATE announcements
            SET text = COALESCE(?, text),
                start_date = COALESCE(?, start_date),
                expiration_date = COALESCE(?, expiration_date)
            WHERE id = ?
            "#
        )
        .bind(&changes.text)
        .bind(&changes.start_date)
        .bind(&changes.expiration_date)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

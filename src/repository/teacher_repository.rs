use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::{
    domain::Teacher,
    error::{AppError, Result},
    repository::TeacherRepository,
};

pub struct SqliteTeacherRepository {
    pool: SqlitePool,
}

impl SqliteTeacherRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeacherRepository for SqliteTeacherRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Teacher>> {
        let teacher = sqlx::query_as::<_, Teacher>(
            "SELECT username, display_name, role FROM teachers WHERE username = ?"
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(teacher)
    }

    async fn create(&self, teacher: Teacher) -> Result<Teacher> {
        sqlx::query("INSERT INTO teachers (username, display_name, role) VALUES (?, ?, ?)")
            .bind(&teacher.username)
            .bind(&teacher.display_name)
            .bind(&teacher.role)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(teacher)
    }
}

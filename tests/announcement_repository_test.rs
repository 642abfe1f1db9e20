use bulletin::{
    db,
    domain::{Announcement, AnnouncementChanges, Teacher},
    repository::{
        AnnouncementRepository, SqliteAnnouncementRepository,
        SqliteTeacherRepository, TeacherRepository,
    },
};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

async fn test_pool() -> anyhow::Result<SqlitePool> {
    // One connection: every new :memory: connection is a separate database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    db::migrate(&pool).await?;
    Ok(pool)
}

fn announcement(id: &str, start: Option<&str>, expires: &str) -> Announcement {
    Announcement {
        id: id.to_string(),
        text: Some(format!("notice {}", id)),
        start_date: start.map(str::to_string),
        expiration_date: Some(expires.to_string()),
        created_by: Some("mchen".to_string()),
    }
}

#[tokio::test]
async fn test_announcement_crud() -> anyhow::Result<()> {
    let pool = test_pool().await?;
    let repo = SqliteAnnouncementRepository::new(pool);

    // Create
    let created = repo.create(announcement("a1", None, "2099-01-01")).await?;
    assert_eq!(created.id, "a1");
    assert_eq!(created.start_date, None);

    // Find
    let found = repo.find_by_id("a1").await?;
    assert_eq!(found, Some(created.clone()));
    assert!(repo.find_by_id("nope").await?.is_none());

    // Partial update keeps untouched columns
    let matched = repo
        .update("a1", AnnouncementChanges {
            start_date: Some("2026-01-01".to_string()),
            ..Default::default()
        })
        .await?;
    assert!(matched);
    let updated = repo.find_by_id("a1").await?.expect("row exists");
    assert_eq!(updated.start_date.as_deref(), Some("2026-01-01"));
    assert_eq!(updated.text, created.text);
    assert_eq!(updated.expiration_date, created.expiration_date);
    assert_eq!(updated.created_by, created.created_by);

    assert!(!repo.update("nope", AnnouncementChanges::default()).await?);

    // Delete
    assert!(repo.delete("a1").await?);
    assert!(!repo.delete("a1").await?);
    assert!(repo.find_by_id("a1").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_list_active_and_all() -> anyhow::Result<()> {
    let pool = test_pool().await?;
    let repo = SqliteAnnouncementRepository::new(pool);

    repo.create(announcement("late", None, "2026-12-31")).await?;
    repo.create(announcement("today", Some("2026-10-18"), "2026-10-18")).await?;
    repo.create(announcement("expired", None, "2020-01-01")).await?;
    repo.create(announcement("pending", Some("2026-11-01"), "2026-11-30")).await?;

    let active: Vec<String> = repo
        .list_active("2026-10-18")
        .await?
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(active, vec!["today", "late"]);

    let all: Vec<String> = repo.list_all().await?.into_iter().map(|a| a.id).collect();
    assert_eq!(all, vec!["expired", "today", "pending", "late"]);

    Ok(())
}

#[tokio::test]
async fn test_teacher_lookup() -> anyhow::Result<()> {
    let pool = test_pool().await?;
    let repo = SqliteTeacherRepository::new(pool);

    assert!(repo.find_by_username("mchen").await?.is_none());

    repo.create(Teacher::new("mchen", Some("Mr. Chen".to_string()), "teacher")).await?;

    let found = repo.find_by_username("mchen").await?.expect("teacher exists");
    assert_eq!(found.display_name.as_deref(), Some("Mr. Chen"));
    assert_eq!(found.role, "teacher");
    assert!(repo.find_by_username("MCHEN").await?.is_none());

    Ok(())
}

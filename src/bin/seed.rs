use bulletin::{
    config::DatabaseConfig,
    db,
    domain::{Announcement, Teacher},
    repository::{
        AnnouncementRepository, SqliteAnnouncementRepository,
        SqliteTeacherRepository, TeacherRepository,
    },
};
use chrono::{Duration, Local};
use clap::Parser;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(about = "Seed the bulletin database with teachers and sample announcements")]
struct Args {
    /// SQLite connection string
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://bulletin.db?mode=rwc")]
    database_url: String,

    /// Only create teacher accounts
    #[arg(long)]
    skip_announcements: bool,
}

const TEACHERS: &[(&str, &str, &str)] = &[
    ("mrodriguez", "Ms. Rodriguez", "teacher"),
    ("mchen", "Mr. Chen", "teacher"),
    ("principal", "Principal Martinez", "admin"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("🌱 Starting database seeding...");

    let db_pool = db::connect(&DatabaseConfig {
        url: args.database_url,
        max_connections: 1,
    })
    .await?;

    let teacher_repo = SqliteTeacherRepository::new(db_pool.clone());
    let announcement_repo = SqliteAnnouncementRepository::new(db_pool);

    println!("👩‍🏫 Creating teachers...");
    for (username, display_name, role) in TEACHERS {
        if teacher_repo.find_by_username(username).await?.is_some() {
            println!("  ⏭️  {} already exists", username);
            continue;
        }
        teacher_repo
            .create(Teacher::new(*username, Some(display_name.to_string()), *role))
            .await?;
        println!("  ✅ Created {}", username);
    }

    if args.skip_announcements {
        println!("\n✨ Database seeding complete!");
        return Ok(());
    }

    println!("📢 Creating announcements...");
    let today = Local::now().date_naive();
    let fmt = |d: chrono::NaiveDate| d.format("%Y-%m-%d").to_string();

    let samples = [
        Announcement {
            id: Uuid::new_v4().to_string(),
            text: Some("Activity registration is open until the end of the month!".to_string()),
            start_date: None,
            expiration_date: Some(fmt(today + Duration::days(30))),
            created_by: Some("principal".to_string()),
        },
        Announcement {
            id: Uuid::new_v4().to_string(),
            text: Some("Chess Club tryouts start next week.".to_string()),
            start_date: Some(fmt(today + Duration::days(3))),
            expiration_date: Some(fmt(today + Duration::days(14))),
            created_by: Some("principal".to_string()),
        },
    ];

    for announcement in samples {
        announcement_repo.create(announcement).await?;
    }
    println!("  ✅ Created 2 announcements");

    println!("\n✨ Database seeding complete!");
    println!("\n📝 Teacher usernames: mrodriguez, mchen, principal");

    Ok(())
}

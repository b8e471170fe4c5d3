use engine::MoneyCents;
use migration::{Migrator, MigratorTrait};
use settings::Database;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;
    let mut tasks = tokio::task::JoinSet::new();

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "spendlog={level},telegram_bot={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let limits = bot_limits(&settings.limits);
    let database = settings.database;
    let telegram = settings.telegram;

    tasks.spawn(async move {
        tracing::info!("Found telegram settings...");
        let db = match parse_database(&database).await {
            Ok(db) => db,
            Err(err) => {
                tracing::error!("failed to initialize database: {err}");
                return;
            }
        };

        let engine = match engine::Engine::builder().database(db).build().await {
            Ok(engine) => engine,
            Err(err) => {
                tracing::error!("failed to build engine from database: {err}");
                return;
            }
        };

        match telegram_bot::Bot::builder()
            .token(&telegram.token)
            .engine(std::sync::Arc::new(engine))
            .limits(limits)
            .build()
        {
            Ok(bot) => bot.run().await,
            Err(err) => tracing::error!("failed to initialize telegram bot: {err}"),
        }
    });

    while tasks.join_next().await.is_some() {
        tasks.shutdown().await;
    }

    Ok(())
}

async fn parse_database(
    config: &Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let url = match config {
        Database::Memory => String::from("sqlite::memory:"),
        Database::Sqlite(path) => format!("sqlite:{}?mode=rwc", path),
    };

    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}

fn bot_limits(limits: &settings::Limits) -> telegram_bot::Limits {
    let defaults = telegram_bot::Limits::default();

    telegram_bot::Limits {
        max_amount: limits
            .max_amount
            .map(|units| MoneyCents::new(units * 100))
            .unwrap_or(defaults.max_amount),
        max_description: limits.max_description.unwrap_or(defaults.max_description),
        list_limit: limits.list_limit.unwrap_or(defaults.list_limit),
    }
}

use chrono::{Datelike, Utc};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{Category, Engine, EngineError, MoneyCents};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

async fn set_all_dates(db: &DatabaseConnection, user_id: i64, date: &str) {
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        "UPDATE expenses SET date = ? WHERE user_id = ?",
        vec![date.into(), user_id.into()],
    ))
    .await
    .unwrap();
}

#[tokio::test]
async fn add_then_list_returns_matching_record() {
    let (engine, _db) = engine_with_db().await;

    let id = engine
        .add_expense(1, MoneyCents::new(15_50), Category::Food, "lunch at cafe")
        .await
        .unwrap();
    assert!(id > 0);

    let expenses = engine.recent_expenses(1, 10).await.unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].id, id);
    assert_eq!(expenses[0].user_id, 1);
    assert_eq!(expenses[0].amount, MoneyCents::new(15_50));
    assert_eq!(expenses[0].category, Category::Food);
    assert_eq!(expenses[0].description, "lunch at cafe");
}

#[tokio::test]
async fn list_returns_most_recent_first() {
    let (engine, _db) = engine_with_db().await;

    engine
        .add_expense(1, MoneyCents::new(15_50), Category::Food, "lunch at cafe")
        .await
        .unwrap();
    engine
        .add_expense(1, MoneyCents::new(50_00), Category::Transport, "monthly bus pass")
        .await
        .unwrap();

    let expenses = engine.recent_expenses(1, 10).await.unwrap();
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].category, Category::Transport);
    assert_eq!(expenses[0].amount, MoneyCents::new(50_00));
    assert_eq!(expenses[1].category, Category::Food);
}

#[tokio::test]
async fn equal_timestamps_break_ties_by_insertion_order() {
    let (engine, db) = engine_with_db().await;

    let first = engine
        .add_expense(1, MoneyCents::new(1_00), Category::Food, "first")
        .await
        .unwrap();
    let second = engine
        .add_expense(1, MoneyCents::new(2_00), Category::Food, "second")
        .await
        .unwrap();

    set_all_dates(&db, 1, "2026-03-10T12:00:00+00:00").await;

    let expenses = engine.recent_expenses(1, 10).await.unwrap();
    assert_eq!(expenses[0].id, second);
    assert_eq!(expenses[1].id, first);
}

#[tokio::test]
async fn ids_increase_across_users() {
    let (engine, _db) = engine_with_db().await;

    let first = engine
        .add_expense(1, MoneyCents::new(5_00), Category::Food, "")
        .await
        .unwrap();
    let second = engine
        .add_expense(2, MoneyCents::new(5_00), Category::Health, "")
        .await
        .unwrap();
    let third = engine
        .add_expense(1, MoneyCents::new(5_00), Category::Other, "")
        .await
        .unwrap();

    assert!(second > first);
    assert!(third > second);
}

#[tokio::test]
async fn list_respects_limit_and_user_scoping() {
    let (engine, _db) = engine_with_db().await;

    for n in 1..=3i64 {
        engine
            .add_expense(1, MoneyCents::new(n * 100), Category::Food, "")
            .await
            .unwrap();
    }
    engine
        .add_expense(2, MoneyCents::new(9_99), Category::Shopping, "someone else")
        .await
        .unwrap();

    let expenses = engine.recent_expenses(1, 2).await.unwrap();
    assert_eq!(expenses.len(), 2);
    assert!(expenses.iter().all(|e| e.user_id == 1));
}

#[tokio::test]
async fn summary_groups_by_category() {
    let (engine, _db) = engine_with_db().await;

    engine
        .add_expense(123, MoneyCents::new(25_50), Category::Food, "lunch")
        .await
        .unwrap();
    engine
        .add_expense(123, MoneyCents::new(15_00), Category::Food, "dinner")
        .await
        .unwrap();
    engine
        .add_expense(123, MoneyCents::new(30_00), Category::Transport, "taxi")
        .await
        .unwrap();

    let now = Utc::now();
    let summary = engine
        .monthly_summary(123, now.year(), now.month())
        .await
        .unwrap();

    assert_eq!(summary.len(), 2);

    let food = summary
        .iter()
        .find(|s| s.category == Category::Food)
        .unwrap();
    assert_eq!(food.total, MoneyCents::new(40_50));
    assert_eq!(food.count, 2);

    let transport = summary
        .iter()
        .find(|s| s.category == Category::Transport)
        .unwrap();
    assert_eq!(transport.total, MoneyCents::new(30_00));
    assert_eq!(transport.count, 1);

    let total_count: i64 = summary.iter().map(|s| s.count).sum();
    assert_eq!(total_count, 3);
}

#[tokio::test]
async fn summary_uses_calendar_month_of_record_date() {
    let (engine, db) = engine_with_db().await;

    engine
        .add_expense(7, MoneyCents::new(10_00), Category::Food, "groceries")
        .await
        .unwrap();
    set_all_dates(&db, 7, "2020-01-15T10:00:00+00:00").await;

    let now = Utc::now();
    let current = engine
        .monthly_summary(7, now.year(), now.month())
        .await
        .unwrap();
    assert!(current.is_empty());

    let past = engine.monthly_summary(7, 2020, 1).await.unwrap();
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].category, Category::Food);
    assert_eq!(past[0].total, MoneyCents::new(10_00));
    assert_eq!(past[0].count, 1);
}

#[tokio::test]
async fn summary_is_scoped_per_user() {
    let (engine, _db) = engine_with_db().await;

    engine
        .add_expense(1, MoneyCents::new(12_00), Category::Food, "")
        .await
        .unwrap();
    engine
        .add_expense(2, MoneyCents::new(99_00), Category::Food, "")
        .await
        .unwrap();

    let now = Utc::now();
    let summary = engine
        .monthly_summary(1, now.year(), now.month())
        .await
        .unwrap();

    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].total, MoneyCents::new(12_00));
    assert_eq!(summary[0].count, 1);
}

#[tokio::test]
async fn fresh_user_gets_empty_results_not_errors() {
    let (engine, _db) = engine_with_db().await;

    let expenses = engine.recent_expenses(2, 10).await.unwrap();
    assert!(expenses.is_empty());

    let now = Utc::now();
    let summary = engine
        .monthly_summary(2, now.year(), now.month())
        .await
        .unwrap();
    assert!(summary.is_empty());
}

#[tokio::test]
async fn reads_are_idempotent() {
    let (engine, _db) = engine_with_db().await;

    engine
        .add_expense(1, MoneyCents::new(7_25), Category::Utilities, "power bill")
        .await
        .unwrap();

    let first_list = engine.recent_expenses(1, 10).await.unwrap();
    let second_list = engine.recent_expenses(1, 10).await.unwrap();
    assert_eq!(first_list, second_list);

    let now = Utc::now();
    let first_summary = engine
        .monthly_summary(1, now.year(), now.month())
        .await
        .unwrap();
    let second_summary = engine
        .monthly_summary(1, now.year(), now.month())
        .await
        .unwrap();
    assert_eq!(first_summary, second_summary);
}

#[tokio::test]
async fn empty_description_is_allowed() {
    let (engine, _db) = engine_with_db().await;

    engine
        .add_expense(1, MoneyCents::new(3_00), Category::Other, "")
        .await
        .unwrap();

    let expenses = engine.recent_expenses(1, 10).await.unwrap();
    assert_eq!(expenses[0].description, "");
}

#[tokio::test]
async fn store_rejects_non_positive_amounts() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .add_expense(1, MoneyCents::ZERO, Category::Food, "free lunch")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidAmount("amount must be > 0".to_string())
    );

    assert!(engine.recent_expenses(1, 10).await.unwrap().is_empty());
}

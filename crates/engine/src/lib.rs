//! Core expense store.
//!
//! The engine owns the persisted expense records and exposes the three
//! operations the bot needs: insert, recent list and monthly aggregate.
//! Every record belongs to a single user id supplied by the transport.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ConnectionTrait, QueryFilter, QueryOrder, QuerySelect, Statement, prelude::*,
};

pub use categories::Category;
pub use error::EngineError;
pub use expenses::Expense;
pub use money::MoneyCents;

mod categories;
mod error;
mod expenses;
mod money;

type ResultEngine<T> = Result<T, EngineError>;

/// Per-category aggregate returned by [`Engine::monthly_summary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    pub total: MoneyCents,
    pub count: i64,
}

/// Handle to the expense store.
///
/// One long-lived instance is built at startup and shared by every command
/// handler; all operations take `&self`.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Record a new expense and return its store-assigned id.
    ///
    /// Ids are unique and strictly increasing within a database; the
    /// timestamp is assigned here, not by the caller.
    pub async fn add_expense(
        &self,
        user_id: i64,
        amount: MoneyCents,
        category: Category,
        description: &str,
    ) -> ResultEngine<i64> {
        if !amount.is_positive() {
            return Err(EngineError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }

        let model = expenses::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id),
            amount_minor: ActiveValue::Set(amount.cents()),
            category: ActiveValue::Set(category.as_str().to_string()),
            description: ActiveValue::Set(description.to_string()),
            date: ActiveValue::Set(Utc::now()),
        };
        let inserted = model.insert(&self.database).await?;

        Ok(inserted.id)
    }

    /// Up to `limit` most recent expenses of a user, newest first.
    ///
    /// Records sharing a timestamp come back in reverse insertion order.
    pub async fn recent_expenses(&self, user_id: i64, limit: u64) -> ResultEngine<Vec<Expense>> {
        let models = expenses::Entity::find()
            .filter(expenses::Column::UserId.eq(user_id))
            .order_by_desc(expenses::Column::Date)
            .order_by_desc(expenses::Column::Id)
            .limit(limit)
            .all(&self.database)
            .await?;

        models.into_iter().map(Expense::try_from).collect()
    }

    /// Per-category totals over the user's expenses dated in the given
    /// calendar year and month.
    ///
    /// Categories without matching records are omitted; an empty result
    /// means "no expenses this month", not a failure.
    pub async fn monthly_summary(
        &self,
        user_id: i64,
        year: i32,
        month: u32,
    ) -> ResultEngine<Vec<CategorySummary>> {
        let backend = self.database.get_database_backend();
        let stmt = Statement::from_sql_and_values(
            backend,
            "SELECT category, COALESCE(SUM(amount_minor), 0) AS total_minor, COUNT(*) AS count \
             FROM expenses \
             WHERE user_id = ? AND strftime('%Y', date) = ? AND strftime('%m', date) = ? \
             GROUP BY category",
            vec![
                user_id.into(),
                year.to_string().into(),
                format!("{month:02}").into(),
            ],
        );

        let rows = self.database.query_all(stmt).await?;
        let mut summaries = Vec::with_capacity(rows.len());
        for row in rows {
            let category: String = row.try_get("", "category")?;
            let total_minor: i64 = row.try_get("", "total_minor")?;
            let count: i64 = row.try_get("", "count")?;

            summaries.push(CategorySummary {
                category: Category::try_from(category.as_str())?,
                total: MoneyCents::new(total_minor),
                count,
            });
        }

        Ok(summaries)
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`, verifying the database is reachable.
    pub async fn build(self) -> ResultEngine<Engine> {
        self.database.ping().await?;

        Ok(Engine {
            database: self.database,
        })
    }
}

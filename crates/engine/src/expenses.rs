//! Expense primitives.
//!
//! An `Expense` is a single recorded spending event. Records are immutable
//! once stored; there is no update or delete.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

use crate::{Category, EngineError, MoneyCents};

/// A stored expense record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    pub amount: MoneyCents,
    pub category: Category,
    pub description: String,
    pub date: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub amount_minor: i64,
    pub category: String,
    pub description: String,
    pub date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Expense {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            amount: MoneyCents::new(model.amount_minor),
            category: Category::try_from(model.category.as_str())?,
            description: model.description,
            date: model.date,
        })
    }
}

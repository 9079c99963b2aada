//! Sweet primitives.
//!
//! A `Sweet` is one inventory record: identity, categorization, price and
//! stock level, plus its audit timestamps.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, DbErr, entity::prelude::*};
use uuid::Uuid;

use crate::{Category, EngineError, PriceCents, validate::ValidSweet};

/// One sweet in the shop inventory.
#[derive(Clone, Debug, PartialEq)]
pub struct Sweet {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub price: PriceCents,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sweet {
    /// Materializes a validated command into a record, assigning the id and
    /// both timestamps.
    #[must_use]
    pub fn new(valid: ValidSweet) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: valid.name,
            category: valid.category,
            price: valid.price,
            quantity: valid.quantity,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sweets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub category: String,
    pub price_cents: i64,
    pub quantity: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Sweet> for ActiveModel {
    fn from(sweet: &Sweet) -> Self {
        Self {
            id: ActiveValue::Set(sweet.id.to_string()),
            name: ActiveValue::Set(sweet.name.clone()),
            category: ActiveValue::Set(sweet.category.as_str().to_string()),
            price_cents: ActiveValue::Set(sweet.price.cents()),
            quantity: ActiveValue::Set(sweet.quantity),
            created_at: ActiveValue::Set(sweet.created_at),
            updated_at: ActiveValue::Set(sweet.updated_at),
        }
    }
}

impl TryFrom<Model> for Sweet {
    type Error = EngineError;

    // A row that fails here is corrupt storage, not a client fault, so both
    // failure paths surface as database errors.
    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&model.id).map_err(|_| {
            EngineError::Database(DbErr::Custom(format!(
                "invalid sweet id in store: {}",
                model.id
            )))
        })?;
        let category = Category::try_from(model.category.as_str()).map_err(|_| {
            EngineError::Database(DbErr::Custom(format!(
                "invalid category in store: {}",
                model.category
            )))
        })?;

        Ok(Self {
            id,
            name: model.name,
            category,
            price: PriceCents::new(model.price_cents),
            quantity: model.quantity,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

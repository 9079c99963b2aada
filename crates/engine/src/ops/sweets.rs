use chrono::Utc;
use uuid::Uuid;

use sea_orm::{
    QueryFilter, TransactionTrait,
    prelude::*,
    sea_query::{Expr, LikeExpr},
};

use crate::{
    EngineError, PriceCents, ResultEngine, Sweet, commands::NewSweet, sweet,
    validate::validate_new_sweet,
};

use super::{Engine, normalize_optional_text, with_tx};

/// Filters for searching sweets.
///
/// Every field is optional; the empty filter matches the whole inventory.
/// Conditions combine with AND.
#[derive(Clone, Debug, Default)]
pub struct SweetFilter {
    /// Case-insensitive substring match on the name.
    pub name: Option<String>,
    /// Exact label match. An unknown label matches nothing.
    pub category: Option<String>,
    /// Inclusive lower bound on the price.
    pub min_price: Option<PriceCents>,
    /// Inclusive upper bound on the price.
    pub max_price: Option<PriceCents>,
}

/// Escapes `LIKE` metacharacters so the needle matches literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn require_units(quantity: Option<i64>) -> ResultEngine<i64> {
    match quantity {
        Some(units) if units > 0 => Ok(units),
        _ => Err(EngineError::InvalidQuantity(
            "please provide a valid quantity".to_string(),
        )),
    }
}

trait ApplySweetFilters: QueryFilter + Sized {
    fn apply_sweet_filters(self, filter: &SweetFilter) -> Self;
}

impl<T> ApplySweetFilters for T
where
    T: QueryFilter + Sized,
{
    fn apply_sweet_filters(mut self, filter: &SweetFilter) -> Self {
        if let Some(name) = normalize_optional_text(filter.name.as_deref()) {
            let needle = format!("%{}%", escape_like(&name.to_lowercase()));
            self = self.filter(
                Expr::expr(Expr::cust("LOWER(name)")).like(LikeExpr::new(needle).escape('\\')),
            );
        }
        if let Some(category) = normalize_optional_text(filter.category.as_deref()) {
            self = self.filter(sweet::Column::Category.eq(category));
        }
        if let Some(min_price) = filter.min_price {
            self = self.filter(sweet::Column::PriceCents.gte(min_price.cents()));
        }
        if let Some(max_price) = filter.max_price {
            self = self.filter(sweet::Column::PriceCents.lte(max_price.cents()));
        }

        self
    }
}

impl Engine {
    /// Validates and stores a new sweet, returning the stored record.
    ///
    /// A rejected command stores nothing and reports every broken field at
    /// once.
    pub async fn create_sweet(&self, cmd: NewSweet) -> ResultEngine<Sweet> {
        let valid = validate_new_sweet(&cmd).map_err(EngineError::Validation)?;
        let record = Sweet::new(valid);

        with_tx!(self, |db_tx| {
            sweet::ActiveModel::from(&record).insert(&db_tx).await?;
            Ok(record)
        })
    }

    /// Return every sweet in the inventory.
    pub async fn sweets(&self) -> ResultEngine<Vec<Sweet>> {
        with_tx!(self, |db_tx| {
            let models = sweet::Entity::find().all(&db_tx).await?;
            models.into_iter().map(Sweet::try_from).collect()
        })
    }

    /// Return the sweets matching `filter`.
    pub async fn search_sweets(&self, filter: &SweetFilter) -> ResultEngine<Vec<Sweet>> {
        with_tx!(self, |db_tx| {
            let models = sweet::Entity::find()
                .apply_sweet_filters(filter)
                .all(&db_tx)
                .await?;
            models.into_iter().map(Sweet::try_from).collect()
        })
    }

    /// Return a [`Sweet`] (snapshot from DB).
    pub async fn sweet(&self, sweet_id: Uuid) -> ResultEngine<Sweet> {
        with_tx!(self, |db_tx| {
            let model = sweet::Entity::find_by_id(sweet_id.to_string())
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("sweet not found".to_string()))?;
            Sweet::try_from(model)
        })
    }

    /// Delete a sweet from the inventory.
    pub async fn delete_sweet(&self, sweet_id: Uuid) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let deleted = sweet::Entity::delete_by_id(sweet_id.to_string())
                .exec(&db_tx)
                .await?;
            if deleted.rows_affected == 0 {
                return Err(EngineError::KeyNotFound("sweet not found".to_string()));
            }
            Ok(())
        })
    }

    /// Purchase units of a sweet, decrementing its stock.
    ///
    /// The stock check lives inside the UPDATE's WHERE clause, so the
    /// decrement only happens when enough units are present. Competing
    /// purchases can never drive the quantity negative.
    pub async fn purchase_sweet(
        &self,
        sweet_id: Uuid,
        quantity: Option<i64>,
    ) -> ResultEngine<Sweet> {
        let units = require_units(quantity)?;

        with_tx!(self, |db_tx| {
            let updated = sweet::Entity::update_many()
                .col_expr(
                    sweet::Column::Quantity,
                    Expr::col(sweet::Column::Quantity).sub(units),
                )
                .col_expr(sweet::Column::UpdatedAt, Expr::value(Utc::now()))
                .filter(sweet::Column::Id.eq(sweet_id.to_string()))
                .filter(sweet::Column::Quantity.gte(units))
                .exec(&db_tx)
                .await?;

            if updated.rows_affected == 0 {
                let exists = sweet::Entity::find_by_id(sweet_id.to_string())
                    .one(&db_tx)
                    .await?
                    .is_some();
                return Err(if exists {
                    EngineError::InsufficientStock("insufficient stock".to_string())
                } else {
                    EngineError::KeyNotFound("sweet not found".to_string())
                });
            }

            let model = sweet::Entity::find_by_id(sweet_id.to_string())
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("sweet not found".to_string()))?;
            Sweet::try_from(model)
        })
    }

    /// Restock units of a sweet, incrementing its stock.
    pub async fn restock_sweet(
        &self,
        sweet_id: Uuid,
        quantity: Option<i64>,
    ) -> ResultEngine<Sweet> {
        let units = require_units(quantity)?;

        with_tx!(self, |db_tx| {
            let updated = sweet::Entity::update_many()
                .col_expr(
                    sweet::Column::Quantity,
                    Expr::col(sweet::Column::Quantity).add(units),
                )
                .col_expr(sweet::Column::UpdatedAt, Expr::value(Utc::now()))
                .filter(sweet::Column::Id.eq(sweet_id.to_string()))
                .exec(&db_tx)
                .await?;

            if updated.rows_affected == 0 {
                return Err(EngineError::KeyNotFound("sweet not found".to_string()));
            }

            let model = sweet::Entity::find_by_id(sweet_id.to_string())
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("sweet not found".to_string()))?;
            Sweet::try_from(model)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_neutralizes_metacharacters() {
        assert_eq!(escape_like("caramel"), "caramel");
        assert_eq!(escape_like("100% cocoa"), "100\\% cocoa");
        assert_eq!(escape_like("choc_chip"), "choc\\_chip");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn require_units_accepts_only_positive_quantities() {
        assert_eq!(require_units(Some(3)).unwrap(), 3);
        assert!(require_units(Some(0)).is_err());
        assert!(require_units(Some(-5)).is_err());
        assert!(require_units(None).is_err());
    }
}

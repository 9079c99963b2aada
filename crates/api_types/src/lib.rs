use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category labels accepted and returned on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Chocolate,
    Candy,
    Pastry,
    #[serde(rename = "Nut-Based")]
    NutBased,
    #[serde(rename = "Milk-Based")]
    MilkBased,
}

/// Plain message payload, used for delete confirmations and error bodies.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

pub mod sweet {
    use super::*;

    /// Request body for `POST /sweets`.
    ///
    /// Every field is optional on the wire; the service validates presence
    /// and reports each broken field in the error message. `category` stays
    /// a raw string so an unknown label reaches validation intact.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct SweetNew {
        pub name: Option<String>,
        pub category: Option<String>,
        pub price: Option<f64>,
        pub quantity: Option<i64>,
    }

    /// A sweet as returned by the API.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SweetView {
        pub id: Uuid,
        pub name: String,
        pub category: Category,
        /// Decimal price in major units (e.g. `25.99`).
        pub price: f64,
        pub quantity: i64,
        /// RFC3339 timestamp, UTC.
        pub created_at: DateTime<Utc>,
        /// RFC3339 timestamp, UTC.
        pub updated_at: DateTime<Utc>,
    }

    /// Query parameters for `GET /sweets/search`.
    ///
    /// Prices arrive as raw strings and are parsed by the service, so a bad
    /// number turns into the service's own 400 body.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SweetSearch {
        pub name: Option<String>,
        pub category: Option<String>,
        pub min_price: Option<String>,
        pub max_price: Option<String>,
    }

    /// Request body for `POST /sweets/{id}/purchase` and
    /// `POST /sweets/{id}/restock`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct StockChange {
        pub quantity: Option<i64>,
    }
}

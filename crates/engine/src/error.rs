//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`Validation`] thrown when a new [`Sweet`] fails field validation.
//! - [`KeyNotFound`] thrown when an item is not found.
//! - [`InsufficientStock`] thrown when a purchase asks for more units than stored.
//!
//!  [`Validation`]: EngineError::Validation
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`InsufficientStock`]: EngineError::InsufficientStock
//!  [`Sweet`]: super::sweet::Sweet
use sea_orm::DbErr;
use thiserror::Error;

use crate::validate::ValidationErrors;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error("{0}")]
    InvalidQuantity(String),
    #[error("{0}")]
    InvalidPrice(String),
    #[error("{0}")]
    InsufficientStock(String),
    #[error("{0}")]
    KeyNotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::InvalidQuantity(a), Self::InvalidQuantity(b)) => a == b,
            (Self::InvalidPrice(a), Self::InvalidPrice(b)) => a == b,
            (Self::InsufficientStock(a), Self::InsufficientStock(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

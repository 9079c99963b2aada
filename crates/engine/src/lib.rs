pub use category::Category;
pub use commands::NewSweet;
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder, SweetFilter};
pub use price::PriceCents;
pub use sweet::Sweet;
pub use validate::{FieldError, ValidSweet, ValidationErrors, validate_new_sweet};

mod category;
mod commands;
mod error;
mod ops;
mod price;
mod sweet;
mod validate;

type ResultEngine<T> = Result<T, EngineError>;

use serde::{Deserialize, Serialize};

use crate::EngineError;
use crate::validate::ValidationErrors;

/// Closed set of sweet categories.
///
/// The store persists the canonical label as text, so the label set doubles
/// as the storage format. Matching is case-sensitive: `"chocolate"` is not a
/// category, `"Chocolate"` is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Chocolate,
    Candy,
    Pastry,
    #[serde(rename = "Nut-Based")]
    NutBased,
    #[serde(rename = "Milk-Based")]
    MilkBased,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Chocolate,
        Category::Candy,
        Category::Pastry,
        Category::NutBased,
        Category::MilkBased,
    ];

    /// Canonical label, as stored and as accepted on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Chocolate => "Chocolate",
            Category::Candy => "Candy",
            Category::Pastry => "Pastry",
            Category::NutBased => "Nut-Based",
            Category::MilkBased => "Milk-Based",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Chocolate" => Ok(Category::Chocolate),
            "Candy" => Ok(Category::Candy),
            "Pastry" => Ok(Category::Pastry),
            "Nut-Based" => Ok(Category::NutBased),
            "Milk-Based" => Ok(Category::MilkBased),
            other => Err(EngineError::Validation(ValidationErrors::single(
                "category",
                format!("{other} is not a valid category"),
            ))),
        }
    }
}

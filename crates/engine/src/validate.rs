//! Field validation for incoming sweets.
//!
//! Validation is a pure function from a [`NewSweet`] command to either a
//! record ready to store or the full list of field-level failures. It never
//! touches the database, so the rules stay testable in isolation and every
//! broken field is reported in one round trip.

use core::fmt;

use crate::{Category, PriceCents, commands::NewSweet};

/// A single failed check, tagged with the field it concerns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every check that failed for a command, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Builds a list holding exactly one failure.
    #[must_use]
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sweet validation failed")?;
        for (index, err) in self.errors.iter().enumerate() {
            let sep = if index == 0 { ": " } else { "; " };
            write!(f, "{sep}{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

/// The outcome of a successful validation: every field present, normalized
/// and typed.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidSweet {
    pub name: String,
    pub category: Category,
    pub price: PriceCents,
    pub quantity: i64,
}

/// Checks every field of `cmd` independently and aggregates all failures.
///
/// Rules:
/// - `name` required, non-empty after trimming; stored trimmed
/// - `category` required, one of the known labels
/// - `price` required, strictly positive, at most 2 decimal places
/// - `quantity` optional, non-negative; absent means 0
pub fn validate_new_sweet(cmd: &NewSweet) -> Result<ValidSweet, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = match cmd.name.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Some(trimmed.to_string()),
        _ => {
            errors.push("name", "sweet name is required");
            None
        }
    };

    let category = match cmd.category.as_deref().map(str::trim) {
        None | Some("") => {
            errors.push("category", "sweet category is required");
            None
        }
        Some(label) => match Category::try_from(label) {
            Ok(category) => Some(category),
            Err(_) => {
                errors.push("category", format!("{label} is not a valid category"));
                None
            }
        },
    };

    let price = match cmd.price {
        None => {
            errors.push("price", "sweet price is required");
            None
        }
        Some(value) => match PriceCents::try_from_major(value) {
            Ok(price) if price.is_positive() => Some(price),
            Ok(_) => {
                errors.push("price", "price must be greater than 0");
                None
            }
            Err(err) => {
                errors.push("price", err.to_string());
                None
            }
        },
    };

    let quantity = match cmd.quantity {
        None => Some(0),
        Some(quantity) if quantity >= 0 => Some(quantity),
        Some(_) => {
            errors.push("quantity", "quantity cannot be negative");
            None
        }
    };

    match (name, category, price, quantity) {
        (Some(name), Some(category), Some(price), Some(quantity)) => Ok(ValidSweet {
            name,
            category,
            price,
            quantity,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_complete_command() {
        let cmd = NewSweet::new()
            .name("  Dark Truffle ")
            .category("Chocolate")
            .price(25.99)
            .quantity(100);

        let valid = validate_new_sweet(&cmd).unwrap();
        assert_eq!(valid.name, "Dark Truffle");
        assert_eq!(valid.category, Category::Chocolate);
        assert_eq!(valid.price, PriceCents::new(2599));
        assert_eq!(valid.quantity, 100);
    }

    #[test]
    fn quantity_defaults_to_zero() {
        let cmd = NewSweet::new()
            .name("Nougat")
            .category("Candy")
            .price(3.50);

        let valid = validate_new_sweet(&cmd).unwrap();
        assert_eq!(valid.quantity, 0);
    }

    #[test]
    fn reports_every_missing_field_at_once() {
        let errs = validate_new_sweet(&NewSweet::new()).unwrap_err();
        let fields: Vec<_> = errs.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, ["name", "category", "price"]);
    }

    #[test]
    fn rejects_blank_name() {
        let cmd = NewSweet::new()
            .name("   ")
            .category("Pastry")
            .price(4.00);

        let errs = validate_new_sweet(&cmd).unwrap_err();
        assert_eq!(errs.errors()[0].field, "name");
        assert_eq!(errs.errors()[0].message, "sweet name is required");
    }

    #[test]
    fn rejects_unknown_category_with_the_offending_label() {
        let cmd = NewSweet::new()
            .name("Gummy Bears")
            .category("Gummy")
            .price(2.00);

        let errs = validate_new_sweet(&cmd).unwrap_err();
        assert_eq!(errs.errors()[0].message, "Gummy is not a valid category");
    }

    #[test]
    fn rejects_non_positive_price() {
        for price in [0.0, -1.0] {
            let cmd = NewSweet::new()
                .name("Baklava")
                .category("Pastry")
                .price(price);

            let errs = validate_new_sweet(&cmd).unwrap_err();
            assert_eq!(errs.errors()[0].field, "price");
            assert_eq!(errs.errors()[0].message, "price must be greater than 0");
        }
    }

    #[test]
    fn rejects_price_with_three_decimals() {
        let cmd = NewSweet::new()
            .name("Baklava")
            .category("Pastry")
            .price(1.999);

        let errs = validate_new_sweet(&cmd).unwrap_err();
        assert_eq!(
            errs.errors()[0].message,
            "price cannot have more than 2 decimal places"
        );
    }

    #[test]
    fn rejects_negative_quantity() {
        let cmd = NewSweet::new()
            .name("Pralines")
            .category("Nut-Based")
            .price(12.00)
            .quantity(-1);

        let errs = validate_new_sweet(&cmd).unwrap_err();
        assert_eq!(errs.errors()[0].field, "quantity");
        assert_eq!(errs.errors()[0].message, "quantity cannot be negative");
    }

    #[test]
    fn display_lists_fields_in_order() {
        let cmd = NewSweet::new().name("  ").category("Plastic").price(-2.0);
        let errs = validate_new_sweet(&cmd).unwrap_err();
        assert_eq!(
            errs.to_string(),
            "sweet validation failed: name: sweet name is required; \
             category: Plastic is not a valid category; \
             price: price must be greater than 0"
        );
    }
}

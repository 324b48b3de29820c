//! Input validation for record fields.
//!
//! Quantity and price arrive as user-entered text and are checked textually
//! before being parsed:
//! - quantity: one or more ASCII digits, nothing else
//! - price: ASCII digits with at most one decimal point, and at least one digit
//!
//! Signs, exponents and thousands separators are rejected for both.

use crate::model::RecordDraft;

/// Validates raw field text and parses it into a [`RecordDraft`].
///
/// Surrounding whitespace is trimmed from every field. All fields are checked,
/// so the error reports every failing field at once.
///
/// # Examples
/// ```
/// use stockpad::validation::validate_record;
///
/// let draft = validate_record("Pen", "10", "5.50").unwrap();
/// assert_eq!(draft.quantity, 10);
/// assert_eq!(draft.price, 5.5);
///
/// assert!(validate_record("Pen", "-3", "5").is_err());
/// assert!(validate_record("Pen", "3", "12..5").is_err());
/// assert!(validate_record("  ", "3", "5").is_err());
/// ```
pub fn validate_record(
    name: &str,
    quantity: &str,
    price: &str,
) -> Result<RecordDraft, ValidationError> {
    let mut errors = Vec::new();

    let name = name.trim();
    if name.is_empty() {
        errors.push(FieldError::EmptyName);
    }

    let quantity = quantity.trim();
    let parsed_quantity = if is_quantity_text(quantity) {
        match quantity.parse::<u64>() {
            Ok(q) => Some(q),
            Err(_) => {
                errors.push(FieldError::QuantityTooLarge(quantity.to_string()));
                None
            }
        }
    } else {
        errors.push(FieldError::InvalidQuantity(quantity.to_string()));
        None
    };

    let price = price.trim();
    let parsed_price = match price.parse::<f64>() {
        Ok(p) if is_price_text(price) && p.is_finite() => Some(p),
        _ => {
            errors.push(FieldError::InvalidPrice(price.to_string()));
            None
        }
    };

    match (parsed_quantity, parsed_price) {
        (Some(quantity), Some(price)) if errors.is_empty() => Ok(RecordDraft {
            name: name.to_string(),
            quantity,
            price,
        }),
        _ => Err(ValidationError { errors }),
    }
}

/// True if `text` is non-empty and made only of ASCII digits.
pub fn is_quantity_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// True if `text`, after dropping at most one `.`, is non-empty and made only
/// of ASCII digits.
pub fn is_price_text(text: &str) -> bool {
    let stripped = text.replacen('.', "", 1);
    is_quantity_text(&stripped)
}

/// The record field a [`FieldError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Quantity,
    Price,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Quantity => write!(f, "quantity"),
            Field::Price => write!(f, "price"),
        }
    }
}

/// A single field failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Name is empty or whitespace only
    EmptyName,
    /// Quantity is not a plain non-negative whole number
    InvalidQuantity(String),
    /// Quantity is all digits but does not fit
    QuantityTooLarge(String),
    /// Price is not a plain non-negative decimal
    InvalidPrice(String),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::EmptyName => Field::Name,
            FieldError::InvalidQuantity(_) | FieldError::QuantityTooLarge(_) => Field::Quantity,
            FieldError::InvalidPrice(_) => Field::Price,
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::EmptyName => write!(f, "name cannot be empty"),
            FieldError::InvalidQuantity(q) => {
                write!(f, "quantity must be a whole number, got '{}'", q)
            }
            FieldError::QuantityTooLarge(q) => write!(f, "quantity '{}' is too large", q),
            FieldError::InvalidPrice(p) => {
                write!(f, "price must be a non-negative decimal, got '{}'", p)
            }
        }
    }
}

/// Error type for record validation failures. Holds one entry per failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(FieldError::field).collect()
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

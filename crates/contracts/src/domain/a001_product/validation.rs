//! Field validators for the product form
//!
//! Every validator returns `None` when the value is acceptable. Empty input is
//! always accepted here: emptiness is reported once, by `validate_required`.

use super::aggregate::ProductField;

pub const NAME_MIN_LEN: usize = 5;
pub const PRICE_MIN: f64 = 10.0;
pub const PRICE_MAX: f64 = 100.0;
pub const VALUE_MIN: f64 = 0.0;

/// Reason a single field failed validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldFailure {
    Required,
    CodeInvalid,
    NameTooShort,
    CostInvalid,
    PriceOutOfRange { value: f64 },
    BelowMinimum { min: f64, actual: f64 },
}

impl FieldFailure {
    /// Stable reason key
    pub const fn key(&self) -> &'static str {
        match self {
            FieldFailure::Required => "required",
            FieldFailure::CodeInvalid => "codigo-invalid",
            FieldFailure::NameTooShort => "nombre-too-short",
            FieldFailure::CostInvalid => "costo-invalid",
            FieldFailure::PriceOutOfRange { .. } => "precio-out-of-range",
            FieldFailure::BelowMinimum { .. } => "min",
        }
    }

    /// Message shown under the field
    pub fn message(&self, field: ProductField) -> String {
        match self {
            FieldFailure::Required => format!("{} is required", field.label()),
            FieldFailure::CodeInvalid => {
                "Code must start with a letter followed by digits (e.g. A001)".to_string()
            }
            FieldFailure::NameTooShort => format!(
                "Product name must have at least {} characters",
                NAME_MIN_LEN
            ),
            FieldFailure::CostInvalid => "Enter a valid cost".to_string(),
            FieldFailure::PriceOutOfRange { .. } => "Price is out of range".to_string(),
            FieldFailure::BelowMinimum { min, .. } if *min == 0.0 => {
                format!("{} must be greater than or equal to zero", field.label())
            }
            FieldFailure::BelowMinimum { min, .. } => {
                format!("{} must be greater than or equal to {}", field.label(), min)
            }
        }
    }
}

/// Required check shared by every field.
///
/// Only empty text is missing; whitespace is left to the field rule, and
/// blank numeric text is reported as missing when it fails to parse.
pub fn validate_required(raw: &str) -> Option<FieldFailure> {
    if raw.is_empty() {
        return Some(FieldFailure::Required);
    }
    None
}

/// One ASCII letter followed by one or more ASCII digits (`^[A-Za-z]\d+$`)
pub fn validate_code(code: &str) -> Option<FieldFailure> {
    if code.is_empty() {
        return None;
    }

    let mut chars = code.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let digits = chars.as_str();

    if !starts_with_letter || digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Some(FieldFailure::CodeInvalid);
    }
    None
}

/// Trimmed length of at least `NAME_MIN_LEN` characters
pub fn validate_name(name: &str) -> Option<FieldFailure> {
    if name.is_empty() {
        return None;
    }
    if name.trim().chars().count() < NAME_MIN_LEN {
        return Some(FieldFailure::NameTooShort);
    }
    None
}

/// Cost must be strictly positive
pub fn validate_cost(cost: Option<f64>) -> Option<FieldFailure> {
    let cost = cost?;
    if cost <= 0.0 {
        return Some(FieldFailure::CostInvalid);
    }
    None
}

/// Price must lie in `[PRICE_MIN, PRICE_MAX]`, bounds inclusive
pub fn validate_price(price: Option<f64>) -> Option<FieldFailure> {
    let price = price?;
    if !(PRICE_MIN..=PRICE_MAX).contains(&price) {
        return Some(FieldFailure::PriceOutOfRange { value: price });
    }
    None
}

/// Generic lower bound, used for the product value
pub fn validate_min(value: Option<f64>, min: f64) -> Option<FieldFailure> {
    let actual = value?;
    if actual < min {
        return Some(FieldFailure::BelowMinimum { min, actual });
    }
    None
}

/// Parse numeric input; text that is not a finite number counts as no value
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Full check of one raw field value: required first, then the field rule
pub fn validate_field(field: ProductField, raw: &str) -> Option<FieldFailure> {
    if let Some(failure) = validate_required(raw) {
        return Some(failure);
    }

    let number = || parse_number(raw).ok_or(FieldFailure::Required);

    match field {
        ProductField::Code => validate_code(raw),
        ProductField::Name => validate_name(raw),
        ProductField::Cost => number().map_or_else(Some, |v| validate_cost(Some(v))),
        ProductField::Price => number().map_or_else(Some, |v| validate_price(Some(v))),
        ProductField::Value => number().map_or_else(Some, |v| validate_min(Some(v), VALUE_MIN)),
    }
}

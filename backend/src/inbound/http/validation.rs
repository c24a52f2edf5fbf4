//! Shared validation helpers for inbound HTTP adapters.
//!
//! Handlers turn loosely typed request bodies and path segments into domain
//! values here, so driving ports never see unchecked input.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::domain::{Error, OrderId, OrderStatus, OrderValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidId,
    InvalidStatus,
    InvalidScore,
    InvalidDecimal,
    NegativeAmount,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidId => "invalid_id",
            Self::InvalidStatus => "invalid_status",
            Self::InvalidScore => "invalid_score",
            Self::InvalidDecimal => "invalid_decimal",
            Self::NegativeAmount => "negative_amount",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<Value>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }

    fn with_index(self, code: ErrorCode, index: usize) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "index": index,
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("missing required field: {name}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Parse a path segment into a positive order id.
pub(crate) fn parse_order_id(value: &str, field: FieldName) -> Result<OrderId, Error> {
    value
        .parse::<i32>()
        .ok()
        .and_then(|raw| OrderId::new(raw).ok())
        .ok_or_else(|| {
            let name = field.as_str();
            ValidationError::new(field, format!("{name} must be a positive integer"))
                .with_value(ErrorCode::InvalidId, value)
        })
}

pub(crate) fn parse_status(value: String, field: FieldName) -> Result<OrderStatus, Error> {
    OrderStatus::from_str(&value).map_err(|_| {
        let name = field.as_str();
        ValidationError::new(field, format!("{name} must be pending or completed"))
            .with_value(ErrorCode::InvalidStatus, value)
    })
}

/// Accept only JSON integers that fit in `i32`.
pub(crate) fn parse_score(value: Value, field: FieldName) -> Result<i32, Error> {
    value
        .as_i64()
        .and_then(|raw| i32::try_from(raw).ok())
        .ok_or_else(|| {
            let name = field.as_str();
            ValidationError::new(field, format!("{name} must be a 32-bit integer"))
                .with_value(ErrorCode::InvalidScore, value)
        })
}

/// Accept a JSON number or numeric string as a fixed-point decimal.
pub(crate) fn parse_decimal(value: Value, field: FieldName) -> Result<Decimal, Error> {
    let parsed = match &value {
        Value::Number(number) => {
            let text = number.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        Value::String(text) => Decimal::from_str(text.trim()).ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        let name = field.as_str();
        ValidationError::new(field, format!("{name} must be a decimal number"))
            .with_value(ErrorCode::InvalidDecimal, value)
    })
}

/// Map order construction failures onto the request fields that caused them.
pub(crate) fn order_validation_error(
    error: &OrderValidationError,
    total_field: FieldName,
    items_field: FieldName,
) -> Error {
    match error {
        OrderValidationError::NegativeTotal(total) => {
            let name = total_field.as_str();
            ValidationError::new(total_field, format!("{name} must not be negative"))
                .with_value(ErrorCode::NegativeAmount, total.to_string())
        }
        OrderValidationError::NegativeItemPrice { index } => {
            let name = items_field.as_str();
            ValidationError::new(items_field, format!("{name} prices must not be negative"))
                .with_index(ErrorCode::NegativeAmount, *index)
        }
        other => Error::invalid_request(other.to_string()),
    }
}

//! Request body validation for inbound HTTP adapters.
//!
//! Actix rejects malformed JSON bodies with a plain-text 400 by default.
//! [`json_config`] routes those failures through the domain [`Error`] so they
//! surface as 422 responses with the usual `{"detail": ...}` envelope.
//! [`deserialize_age`] gives `age` the lenient integer coercion clients rely
//! on: whole floats and numeric strings are accepted.

use std::fmt;

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use serde::Deserializer;
use serde::de::{self, Unexpected, Visitor};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Largest accepted request body, in bytes.
pub const JSON_BODY_LIMIT: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyErrorCode {
    InvalidBody,
    UnsupportedContentType,
    PayloadTooLarge,
    UnreadablePayload,
}

impl BodyErrorCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidBody => "invalid_body",
            Self::UnsupportedContentType => "unsupported_content_type",
            Self::PayloadTooLarge => "payload_too_large",
            Self::UnreadablePayload => "unreadable_payload",
        }
    }
}

fn classify(err: &JsonPayloadError) -> (BodyErrorCode, String) {
    match err {
        JsonPayloadError::Deserialize(inner) => (BodyErrorCode::InvalidBody, inner.to_string()),
        JsonPayloadError::ContentType => (
            BodyErrorCode::UnsupportedContentType,
            "expected Content-Type: application/json".to_owned(),
        ),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => (
            BodyErrorCode::PayloadTooLarge,
            format!("request body exceeds {JSON_BODY_LIMIT} bytes"),
        ),
        other => (BodyErrorCode::UnreadablePayload, other.to_string()),
    }
}

/// Map a JSON extraction failure onto a domain validation error.
#[must_use]
pub fn body_error(err: &JsonPayloadError) -> Error {
    let (code, message) = classify(err);
    debug!(code = code.as_str(), error = %err, "rejected request body");
    Error::invalid_request(message).with_details(json!({ "code": code.as_str() }))
}

/// JSON extractor configuration shared by every route.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req: &HttpRequest| body_error(&err).into())
}

struct AgeVisitor;

impl Visitor<'_> for AgeVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, a whole number, or an integer string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        // Whole finite floats print without a fraction or exponent.
        format!("{v}")
            .parse()
            .map_err(|_| E::invalid_value(Unexpected::Float(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.trim()
            .parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

struct OptionalAgeVisitor;

impl<'de> Visitor<'de> for OptionalAgeVisitor {
    type Value = Option<i64>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an optional integer")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(AgeVisitor).map(Some)
    }
}

/// Deserialize an optional age with lenient integer coercion.
///
/// Accepts integers, floats without a fractional part (`36.0`) and strings
/// holding an integer (`"36"`). Fractional numbers, booleans and other
/// strings are rejected.
///
/// # Errors
/// Returns the deserializer's error when the value cannot be read as an
/// `i64`.
pub fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(OptionalAgeVisitor)
}

//! Form field extraction for browser submissions.
//!
//! [`FormFields`] collects `(name, value)` pairs from the request body and the
//! URL query string, in that order. Body values therefore shadow query values
//! with the same name.
//!
//! # Accepted bodies
//!
//! - `application/x-www-form-urlencoded` - parsed strictly: a `%` must be
//!   followed by two hex digits and `;` is not a valid pair separator
//! - `multipart/form-data` - text parts become fields, file parts are skipped
//! - anything else, or no `Content-Type` - contributes no fields
//!
//! Names and values must decode to valid UTF-8; nothing is decoded lossily.

use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header,
};
use percent_encoding::percent_decode;

use crate::error::AppError;

/// Reasons a form submission could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("invalid percent-encoding")]
    InvalidEscape,

    #[error("invalid semicolon separator")]
    InvalidSeparator,

    #[error("field is not valid UTF-8")]
    InvalidUtf8,

    #[error("failed to read request body: {0}")]
    Body(String),

    #[error("malformed multipart body: {0}")]
    Multipart(String),
}

/// Ordered form fields gathered from one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    /// First value submitted for `name`, or `""` when absent.
    pub fn get(&self, name: &str) -> &str {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }

    fn push(&mut self, name: String, value: String) {
        self.pairs.push((name, value));
    }

    fn extend_urlencoded(&mut self, input: &[u8]) -> Result<(), FormError> {
        self.pairs.extend(parse_urlencoded(input)?);
        Ok(())
    }
}

/// Decodes an `application/x-www-form-urlencoded` payload.
///
/// Empty segments (`a=1&&b=2`) are skipped and a segment without `=` yields
/// an empty value. `+` decodes to a space.
///
/// # Errors
///
/// - [`FormError::InvalidSeparator`] if the input contains `;`
/// - [`FormError::InvalidEscape`] if a `%` is not followed by two hex digits
/// - [`FormError::InvalidUtf8`] if a decoded name or value is not UTF-8
pub fn parse_urlencoded(input: &[u8]) -> Result<Vec<(String, String)>, FormError> {
    check_urlencoded(input)?;

    let mut pairs = Vec::new();
    for segment in input.split(|&b| b == b'&') {
        if segment.is_empty() {
            continue;
        }

        let (key, value) = match segment.iter().position(|&b| b == b'=') {
            Some(eq) => (&segment[..eq], &segment[eq + 1..]),
            None => (segment, &[][..]),
        };

        let key = decode_component(key)?;
        if key.is_empty() {
            continue;
        }
        pairs.push((key, decode_component(value)?));
    }

    Ok(pairs)
}

fn decode_component(raw: &[u8]) -> Result<String, FormError> {
    let spaced: Vec<u8> = raw
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    let decoded: Vec<u8> = percent_decode(&spaced).collect();

    String::from_utf8(decoded).map_err(|_| FormError::InvalidUtf8)
}

fn check_urlencoded(input: &[u8]) -> Result<(), FormError> {
    let mut i = 0;
    while i < input.len() {
        match input[i] {
            b';' => return Err(FormError::InvalidSeparator),
            b'%' => {
                let escape = input.get(i + 1..i + 3).ok_or(FormError::InvalidEscape)?;
                if !escape.iter().all(u8::is_ascii_hexdigit) {
                    return Err(FormError::InvalidEscape);
                }
                i += 3;
            }
            _ => i += 1,
        }
    }
    Ok(())
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().map(str::to_owned);
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(|mime| mime.trim().to_ascii_lowercase())
            .unwrap_or_default();

        let mut fields = FormFields::default();

        match content_type.as_str() {
            "application/x-www-form-urlencoded" => {
                let body = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| FormError::Body(e.to_string()))?;
                fields.extend_urlencoded(&body)?;
            }
            "multipart/form-data" => {
                let mut multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| FormError::Multipart(e.to_string()))?;

                while let Some(field) = multipart
                    .next_field()
                    .await
                    .map_err(|e| FormError::Multipart(e.to_string()))?
                {
                    if field.file_name().is_some() {
                        continue;
                    }
                    let Some(name) = field.name().map(str::to_owned) else {
                        continue;
                    };
                    let value = field
                        .bytes()
                        .await
                        .map_err(|e| FormError::Multipart(e.to_string()))?;
                    let value =
                        String::from_utf8(value.to_vec()).map_err(|_| FormError::InvalidUtf8)?;
                    fields.push(name, value);
                }
            }
            _ => {}
        }

        if let Some(query) = query {
            fields.extend_urlencoded(query.as_bytes())?;
        }

        Ok(fields)
    }
}

//! Response envelope, pagination metadata and error bodies.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Header carrying the total number of items behind a list endpoint.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Metadata derived from response headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Meta {
    /// Total item count reported by the API, zero when not reported.
    pub total: u64,
}

impl Meta {
    /// Extract metadata from response headers.
    ///
    /// A missing or non-numeric `X-Total-Count` yields zero.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            total: headers
                .get(TOTAL_COUNT_HEADER)
                .map_or(0, parse_total),
        }
    }
}

fn parse_total(value: &HeaderValue) -> u64 {
    value
        .to_str()
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0)
}

/// Response envelope returned for every executed request.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
    meta: Meta,
}

impl Response {
    /// Assemble an envelope from its parts.
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, url: Url, meta: Meta) -> Self {
        Self {
            status,
            headers,
            url,
            meta,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Fully resolved URL the request was sent to.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Derived metadata.
    #[must_use]
    pub const fn meta(&self) -> Meta {
        self.meta
    }

    /// Shortcut for `meta().total`.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.meta.total
    }
}

/// Error body returned by the API for non-2xx responses.
///
/// Most endpoints answer with `{"code": 400, "message": "..."}`; some answer
/// with `{"errors": [...]}` or `{"error": "..."}`. All three shapes land here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    /// Numeric error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Human readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// List of error strings.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Single error string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Decode an error body without ever failing.
    ///
    /// Structured decoding is attempted first. When a field has an unexpected
    /// type the remaining fields are still picked up one by one; anything that
    /// is not a JSON object produces an empty body.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        if let Ok(body) = serde_json::from_slice::<Self>(bytes) {
            return body;
        }

        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Self {
                code: map.get("code").and_then(value_as_code),
                message: map.get("message").and_then(value_as_text),
                errors: map
                    .get("errors")
                    .map(value_as_list)
                    .unwrap_or_default(),
                error: map.get("error").and_then(value_as_text),
            },
            _ => Self::default(),
        }
    }

    /// Returns true when no field was populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.message.is_none() && self.errors.is_empty() && self.error.is_none()
    }

    /// Best available message, falling back to the status reason phrase.
    #[must_use]
    pub fn summary(&self, status: StatusCode) -> String {
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return message.to_string();
        }
        if !self.errors.is_empty() {
            return self.errors.join("; ");
        }
        if let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) {
            return error.to_string();
        }
        status
            .canonical_reason()
            .map_or_else(|| status.as_str().to_string(), ToString::to_string)
    }

    /// Decoded code, falling back to the HTTP status.
    #[must_use]
    pub fn code_or(&self, status: StatusCode) -> i64 {
        self.code.unwrap_or_else(|| i64::from(status.as_u16()))
    }
}

fn value_as_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn value_as_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(value_as_text).collect(),
        other => value_as_text(other).into_iter().collect(),
    }
}

/// A list result together with the envelope it arrived in.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items decoded from the response body.
    pub items: Vec<T>,
    /// Response envelope.
    pub response: Response,
}

impl<T> Page<T> {
    /// Create a page from decoded items and their envelope.
    #[must_use]
    pub fn new(items: Vec<T>, response: Response) -> Self {
        Self { items, response }
    }

    /// Total reported by `X-Total-Count`, zero when absent.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.response.total()
    }

    /// Number of items in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Discard the envelope and keep the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

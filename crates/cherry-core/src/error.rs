//! Error types for Cherry Servers API operations.
//!
//! Every failure the executor can report maps to one variant here: transport
//! failures are passed through untouched, non-2xx responses become
//! [`Error::Api`] with a best-effort decoded [`ErrorBody`], and successful
//! responses that cannot be decoded become [`Error::Decode`].

use reqwest::{Method, StatusCode};
use thiserror::Error;

use crate::response::{ErrorBody, Response};

/// Main error type for Cherry Servers API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Network, DNS, TLS or timeout failure reported by the transport
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Path could not be resolved against the configured base URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Method outside GET/POST/PUT/PATCH/DELETE
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(Method),

    /// Request body could not be encoded as JSON
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The API answered with a status code of 299 or above
    #[error("{}", api_error_text(.status, .body))]
    Api {
        /// HTTP status of the response
        status: StatusCode,
        /// Decoded error body, empty when the body was missing or malformed
        body: ErrorBody,
        /// Response envelope
        response: Box<Response>,
    },

    /// A successful response body did not match the requested type
    #[error("Failed to decode response body: {source}")]
    Decode {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
        /// Response envelope
        response: Box<Response>,
    },

    /// Raw response bytes could not be written to the caller's sink
    #[error("Failed to write response body: {0}")]
    Sink(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Identifier could not be parsed
    #[error("Invalid identifier: {0}")]
    InvalidId(String),
}

/// Specialized result type for Cherry Servers API operations.
pub type Result<T> = std::result::Result<T, Error>;

fn api_error_text(status: &StatusCode, body: &ErrorBody) -> String {
    format!(
        "Error response from API: {} (error code: {})",
        body.summary(*status),
        body.code_or(*status)
    )
}

impl Error {
    /// HTTP status attached to this error, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Decode { response, .. } => Some(response.status()),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Response envelope attached to this error, if a response was received.
    #[must_use]
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::Api { response, .. } | Self::Decode { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Returns true for API errors answered with 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns true if the error came from the network layer rather than the API.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(format!("Invalid configuration: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Meta;
    use reqwest::header::HeaderMap;

    fn envelope(status: StatusCode) -> Box<Response> {
        Box::new(Response::new(
            status,
            HeaderMap::new(),
            url::Url::parse("https://api.cherryservers.com/v1/servers").unwrap(),
            Meta::default(),
        ))
    }

    #[test]
    fn test_api_error_display_with_code_and_message() {
        let err = Error::Api {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                code: Some(400),
                message: Some("Bad Request".to_string()),
                ..ErrorBody::default()
            },
            response: envelope(StatusCode::BAD_REQUEST),
        };

        assert_eq!(
            err.to_string(),
            "Error response from API: Bad Request (error code: 400)"
        );
    }

    #[test]
    fn test_api_error_display_with_empty_body() {
        let err = Error::Api {
            status: StatusCode::NOT_FOUND,
            body: ErrorBody::default(),
            response: envelope(StatusCode::NOT_FOUND),
        };

        assert_eq!(
            err.to_string(),
            "Error response from API: Not Found (error code: 404)"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_status_and_response_accessors() {
        let err = Error::Api {
            status: StatusCode::CONFLICT,
            body: ErrorBody::default(),
            response: envelope(StatusCode::CONFLICT),
        };
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));
        assert_eq!(
            err.response().map(Response::status),
            Some(StatusCode::CONFLICT)
        );

        let err = Error::Config("missing token".to_string());
        assert!(err.status().is_none());
        assert!(err.response().is_none());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_decode_error_keeps_envelope() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = Error::Decode {
            source,
            response: envelope(StatusCode::OK),
        };
        assert!(err.to_string().starts_with("Failed to decode response body"));
        assert_eq!(err.status(), Some(StatusCode::OK));
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let cherry_err: Error = err.into();
        assert!(matches!(cherry_err, Error::InvalidEndpoint(_)));
    }


    #[test]
    fn test_unsupported_method_display() {
        let err = Error::UnsupportedMethod(Method::OPTIONS);
        assert_eq!(err.to_string(), "Unsupported HTTP method: OPTIONS");
    }
}

//! Blocking request executor.
//!
//! [`ApiClient`] turns a method, a path, an optional JSON body and a
//! [`Destination`] into one HTTP round-trip against the configured base URL.
//! Responses with a status of 299 or above become [`Error::Api`]; successful
//! bodies are decoded into the destination. Nothing is retried.

use reqwest::blocking::{Client, ClientBuilder, Request};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::response::{ErrorBody, Meta, Response};

/// Media type for request and response bodies.
pub const MEDIA_TYPE: &str = "application/json";

/// First status code treated as an API error.
const ERROR_STATUS_FLOOR: u16 = 299;

/// Where a successful response body goes.
pub enum Destination<'a, T> {
    /// Ignore the body.
    Discard,
    /// Decode the body as JSON into the target.
    Json(&'a mut T),
    /// Copy the raw body bytes into the sink.
    Raw(&'a mut dyn Write),
}

struct Inner {
    http: Client,
    config: ClientConfig,
    authorization: HeaderValue,
    user_agent: HeaderValue,
}

/// Blocking executor shared by every resource caller.
///
/// Cloning is cheap; clones share the same configuration and transport.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

impl ApiClient {
    /// Build an executor from a finished configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the token or user agent cannot be sent as
    /// header values, or if the HTTP transport cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", config.auth_token().expose_secret()))
                .map_err(|_| {
                    Error::Config("auth token contains characters not allowed in a header".to_string())
                })?;
        authorization.set_sensitive(true);

        let user_agent = HeaderValue::from_str(config.user_agent()).map_err(|_| {
            Error::Config(format!("Invalid user agent `{}`", config.user_agent()))
        })?;

        let http = ClientBuilder::new()
            .timeout(config.timeout())
            .pool_max_idle_per_host(config.pool_max_idle_per_host())
            .build()
            .map_err(|err| Error::Config(format!("Failed to build HTTP client: {err}")))?;

        if config.debug() {
            info!(base_url = %config.base_url(), "API wire dumps enabled");
        }

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                config,
                authorization,
                user_agent,
            }),
        })
    }

    /// Configuration this executor was built from.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.inner.config.base_url()
    }

    /// Execute one request.
    ///
    /// `path` is resolved against the base URL and may carry a query string.
    /// `body`, when present, is sent as JSON. A `DELETE` answered with
    /// `204 No Content` never touches the destination.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedMethod`] for methods other than GET/POST/PUT/PATCH/DELETE
    /// - [`Error::InvalidEndpoint`] if the path cannot be resolved
    /// - [`Error::Encode`] if the body cannot be serialized
    /// - [`Error::Transport`] for network failures
    /// - [`Error::Api`] for statuses of 299 and above
    /// - [`Error::Decode`] if a JSON destination cannot be filled
    /// - [`Error::Sink`] if a raw destination cannot be written
    pub fn execute<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        destination: Destination<'_, T>,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        ensure_supported(&method)?;

        let url = self.inner.config.resolve(path)?;
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(Error::Encode)?;

        let request = self.build_request(method.clone(), url.clone(), payload)?;
        if self.inner.config.debug() {
            info!("{}", render_request(&request));
        }

        debug!(%method, %url, "sending API request");
        let response = self.inner.http.execute(request)?;

        let status = response.status();
        let headers = response.headers().clone();
        let meta = Meta::from_headers(&headers);
        let bytes = response.bytes()?;
        let envelope = Response::new(status, headers, url, meta);

        if self.inner.config.debug() {
            info!("{}", render_response(&envelope, &bytes));
        }
        debug!(%status, total = meta.total, "received API response");

        if status.as_u16() >= ERROR_STATUS_FLOOR {
            let body = ErrorBody::from_slice(&bytes);
            if body.is_empty() && !bytes.is_empty() {
                warn!(%status, "API error body could not be decoded");
            }
            return Err(Error::Api {
                status,
                body,
                response: Box::new(envelope),
            });
        }

        if method == Method::DELETE && status == StatusCode::NO_CONTENT {
            return Ok(envelope);
        }

        match destination {
            Destination::Discard => {}
            Destination::Raw(sink) => sink.write_all(&bytes)?,
            Destination::Json(target) => match serde_json::from_slice(&bytes) {
                Ok(value) => *target = value,
                Err(source) => {
                    return Err(Error::Decode {
                        source,
                        response: Box::new(envelope),
                    })
                }
            },
        }

        Ok(envelope)
    }

    /// Execute a request and decode the JSON response into `T`.
    ///
    /// `T::default()` is returned for a `DELETE` answered with `204 No Content`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(T, Response)>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let mut target = T::default();
        let response = self.execute(method, path, body, Destination::Json(&mut target))?;
        Ok((target, response))
    }

    /// Execute a request and ignore any response body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.execute::<B, ()>(method, path, body, Destination::Discard)
    }

    /// Execute a body-less request and copy the raw response bytes into `sink`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub fn fetch_raw(&self, method: Method, path: &str, sink: &mut dyn Write) -> Result<Response> {
        self.execute::<(), ()>(method, path, None, Destination::Raw(sink))
    }

    fn build_request(&self, method: Method, url: Url, payload: Option<Vec<u8>>) -> Result<Request> {
        let mut request = self
            .inner
            .http
            .request(method, url)
            .header(AUTHORIZATION, self.inner.authorization.clone())
            .header(USER_AGENT, self.inner.user_agent.clone())
            .header(ACCEPT, MEDIA_TYPE);

        if let Some(payload) = payload {
            request = request.header(CONTENT_TYPE, MEDIA_TYPE).body(payload);
        }

        request.build().map_err(Error::from)
    }
}

fn ensure_supported(method: &Method) -> Result<()> {
    match *method {
        Method::GET | Method::POST | Method::PUT | Method::PATCH | Method::DELETE => Ok(()),
        _ => Err(Error::UnsupportedMethod(method.clone())),
    }
}

fn render_headers(out: &mut String, headers: &HeaderMap) {
    for (name, value) in headers {
        let shown = if value.is_sensitive() {
            "[REDACTED]"
        } else {
            value.to_str().unwrap_or("<binary>")
        };
        let _ = writeln!(out, "{name}: {shown}");
    }
}

fn render_request(request: &Request) -> String {
    let mut out = String::from("\n+++++++++++++REQUEST+++++++++++++\n");
    let _ = writeln!(out, "{} {}", request.method(), request.url());
    render_headers(&mut out, request.headers());
    if let Some(bytes) = request.body().and_then(|body| body.as_bytes()) {
        let _ = writeln!(out, "\n{}", String::from_utf8_lossy(bytes));
    }
    out.push_str("+++++++++++++++++++++++++++++++++");
    out
}

fn render_response(response: &Response, bytes: &[u8]) -> String {
    let mut out = String::from("\n+++++++++++++RESPONSE+++++++++++++\n");
    let _ = writeln!(out, "{} {}", response.status(), response.url());
    render_headers(&mut out, response.headers());
    if !bytes.is_empty() {
        let _ = writeln!(out, "\n{}", String::from_utf8_lossy(bytes));
    }
    out.push_str("+++++++++++++++++++++++++++++++++");
    out
}

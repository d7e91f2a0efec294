//! Configuration for Cherry Servers API clients.
//!
//! A [`ClientConfig`] is built once from an explicit bearer token and an
//! ordered list of [`ClientOption`]s. Options run in the order given and see
//! whatever earlier options produced, so a user agent option prefixes the
//! current value instead of replacing it.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::time::Duration;
use url::Url;
use validator::Validate;

use crate::error::{Error, Result};

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("cherry-agent-rust/", env!("CARGO_PKG_VERSION"));

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.cherryservers.com/v1/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default idle connections kept per host (zero closes connections after use).
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 0;

/// Configuration for a Cherry Servers API client.
#[derive(Debug, Validate)]
pub struct ClientConfig {
    base_url: Url,

    auth_token: SecretString,

    /// User agent header value
    #[validate(length(min = 1))]
    user_agent: String,

    /// Dump every request and response through `tracing`
    debug: bool,

    /// Request timeout in milliseconds
    #[validate(range(min = 1, max = 600_000))]
    request_timeout_ms: u64,

    /// Maximum idle connections per host
    #[validate(range(max = 64))]
    pool_max_idle_per_host: usize,
}

impl ClientConfig {
    /// Build a configuration from a bearer token and construction options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the token is empty, if any option fails,
    /// or if the resulting configuration does not validate.
    pub fn new<I>(auth_token: impl Into<String>, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ClientOption>,
    {
        let mut config = Self::with_token(auth_token.into())?;

        for option in options {
            option.apply(&mut config)?;
        }

        if config.auth_token.expose_secret().trim().is_empty() {
            return Err(Error::Config(
                "an API auth token is required to construct a client".to_string(),
            ));
        }

        config.validate()?;

        Ok(config)
    }

    fn with_token(auth_token: String) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(DEFAULT_BASE_URL)?,
            auth_token: SecretString::from(auth_token),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            debug: false,
            request_timeout_ms: DEFAULT_TIMEOUT_SECS * 1000,
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
        })
    }

    /// API root every request path is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Bearer token presented in the `Authorization` header.
    #[must_use]
    pub const fn auth_token(&self) -> &SecretString {
        &self.auth_token
    }

    /// User agent header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Whether wire dumps are enabled.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Maximum idle connections kept per host.
    #[must_use]
    pub const fn pool_max_idle_per_host(&self) -> usize {
        self.pool_max_idle_per_host
    }

    /// Resolve a request path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if the path cannot be joined.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|err| Error::InvalidEndpoint(format!("Invalid API path `{path}`: {err}")))
    }
}

type Mutator = Box<dyn FnOnce(&mut ClientConfig) -> Result<()> + Send>;

/// A construction-time mutation of a [`ClientConfig`].
pub struct ClientOption(Mutator);

impl ClientOption {
    /// Wrap an arbitrary, possibly failing, mutation.
    pub fn custom<F>(mutate: F) -> Self
    where
        F: FnOnce(&mut ClientConfig) -> Result<()> + Send + 'static,
    {
        Self(Box::new(mutate))
    }

    /// Prefix the current user agent with `user_agent`.
    #[must_use]
    pub fn user_agent(user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        Self::custom(move |config| {
            config.user_agent = format!("{user_agent} {}", config.user_agent);
            Ok(())
        })
    }

    /// Point the client at a different API root.
    ///
    /// A trailing slash is added when missing so relative paths append to it.
    #[must_use]
    pub fn base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self::custom(move |config| {
            let mut raw = base_url;
            if !raw.ends_with('/') {
                raw.push('/');
            }
            config.base_url = Url::parse(&raw)
                .map_err(|e| Error::Config(format!("Invalid base URL `{raw}`: {e}")))?;
            Ok(())
        })
    }

    /// Replace the bearer token.
    #[must_use]
    pub fn auth_token(auth_token: impl Into<String>) -> Self {
        let auth_token = auth_token.into();
        Self::custom(move |config| {
            config.auth_token = SecretString::from(auth_token);
            Ok(())
        })
    }

    /// Enable or disable request/response dumps.
    #[must_use]
    pub fn debug(enabled: bool) -> Self {
        Self::custom(move |config| {
            config.debug = enabled;
            Ok(())
        })
    }

    /// Set the request timeout.
    ///
    /// Millisecond precision is kept; a timeout under one millisecond fails.
    #[must_use]
    pub fn timeout(timeout: Duration) -> Self {
        Self::custom(move |config| {
            let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
            if millis == 0 {
                return Err(Error::Config(format!(
                    "request timeout must be at least 1ms, got {timeout:?}"
                )));
            }
            config.request_timeout_ms = millis;
            Ok(())
        })
    }

    /// Set the number of idle connections kept per host.
    #[must_use]
    pub fn pool_max_idle_per_host(max: usize) -> Self {
        Self::custom(move |config| {
            config.pool_max_idle_per_host = max;
            Ok(())
        })
    }

    fn apply(self, config: &mut ClientConfig) -> Result<()> {
        (self.0)(config)
    }
}

impl fmt::Debug for ClientOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOption").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::new("token", []).unwrap();
        assert_eq!(config.base_url().as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(config.auth_token().expose_secret(), "token");
        assert!(!config.debug());
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.pool_max_idle_per_host(), 0);
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let err = ClientConfig::new("", []).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("auth token"));
    }

    #[test]
    fn test_auth_token_option_can_supply_missing_token() {
        let config = ClientConfig::new("", [ClientOption::auth_token("late")]).unwrap();
        assert_eq!(config.auth_token().expose_secret(), "late");
    }

    #[test]
    fn test_user_agent_prefixes_default() {
        let config = ClientConfig::new("token", [ClientOption::user_agent("testing/1.0")]).unwrap();
        assert_eq!(
            config.user_agent(),
            format!("testing/1.0 {DEFAULT_USER_AGENT}")
        );
    }

    #[test]
    fn test_options_apply_in_order() {
        let config = ClientConfig::new(
            "token",
            [
                ClientOption::user_agent("inner/1"),
                ClientOption::user_agent("outer/2"),
            ],
        )
        .unwrap();
        assert_eq!(
            config.user_agent(),
            format!("outer/2 inner/1 {DEFAULT_USER_AGENT}")
        );
    }

    #[test]
    fn test_failing_option_aborts_construction() {
        let result = ClientConfig::new(
            "token",
            [
                ClientOption::debug(true),
                ClientOption::custom(|_| Err(Error::Config("boom".to_string()))),
            ],
        );
        assert!(matches!(result, Err(Error::Config(message)) if message == "boom"));
    }

    #[test]
    fn test_invalid_base_url_fails() {
        let result = ClientConfig::new("token", [ClientOption::base_url("not a url")]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config =
            ClientConfig::new("token", [ClientOption::base_url("http://127.0.0.1:8080")]).unwrap();
        assert_eq!(config.base_url().as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_timeout_validation() {
        let result = ClientConfig::new("token", [ClientOption::timeout(Duration::from_secs(601))]);
        assert!(matches!(result, Err(Error::Config(ref m)) if m.contains("request_timeout_ms")));

        let config =
            ClientConfig::new("token", [ClientOption::timeout(Duration::from_secs(45))]).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(45));
    }

    #[test]
    fn test_sub_second_timeout_is_kept() {
        let config =
            ClientConfig::new("token", [ClientOption::timeout(Duration::from_millis(1500))]).unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(1500));

        let config =
            ClientConfig::new("token", [ClientOption::timeout(Duration::from_millis(500))]).unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_zero_timeout_is_rejected_with_reason() {
        let err = ClientConfig::new("token", [ClientOption::timeout(Duration::from_micros(200))])
            .unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains("at least 1ms")));
    }

    #[test]
    fn test_resolve_absolute_and_relative_paths() {
        let config = ClientConfig::new("token", []).unwrap();

        let url = config.resolve("/v1/servers/383531").unwrap();
        assert_eq!(url.as_str(), "https://api.cherryservers.com/v1/servers/383531");

        let url = config.resolve("regions?limit=5").unwrap();
        assert_eq!(url.as_str(), "https://api.cherryservers.com/v1/regions?limit=5");
    }

    #[test]
    fn test_debug_output_redacts_token() {
        let config = ClientConfig::new("super-secret", []).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
    }
}

//! Blocking Cherry Servers client facade.

use cherry_core::query::ResourcePath;
use cherry_core::{ApiClient, ClientConfig, ClientOption, Error, Page, Response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::resources::{
    BackupsResource, ImagesResource, IpAddressesResource, PlansResource, ProjectsResource,
    RegionsResource, ServersResource, SshKeysResource, StoragesResource, TeamsResource,
    UsersResource,
};
use crate::Result;

/// Environment variable holding the API bearer token.
pub const AUTH_TOKEN_ENV: &str = "CHERRY_AUTH_TOKEN";

/// Environment variable that enables wire dumps when set to any non-empty value.
pub const DEBUG_ENV: &str = "CHERRY_DEBUG";

/// Blocking Cherry Servers client.
///
/// Cheap to clone; every clone shares one configuration and transport.
#[derive(Clone)]
pub struct CherryClient {
    inner: ApiClient,
}

impl CherryClient {
    /// Construct a client from an explicit bearer token and options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the token is empty, an option fails, or
    /// the transport cannot be built.
    pub fn new<I>(auth_token: impl Into<String>, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ClientOption>,
    {
        Self::from_config(ClientConfig::new(auth_token, options)?)
    }

    /// Construct a client from a finished configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the transport cannot be built.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            inner: ApiClient::new(config)?,
        })
    }

    /// Construct a client from `CHERRY_AUTH_TOKEN` and `CHERRY_DEBUG`.
    ///
    /// The debug flag is applied before `options`, so an explicit
    /// [`ClientOption::debug`] wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `CHERRY_AUTH_TOKEN` is unset or empty.
    pub fn from_env<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = ClientOption>,
    {
        Self::from_lookup(|name| std::env::var(name).ok(), options)
    }

    /// Same as [`CherryClient::from_env`] with a caller supplied variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no token is found.
    pub fn from_lookup<F, I>(lookup: F, options: I) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = ClientOption>,
    {
        let token = lookup(AUTH_TOKEN_ENV)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                Error::Config(format!(
                    "{AUTH_TOKEN_ENV} must be set to construct a client from the environment"
                ))
            })?;

        let debug = lookup(DEBUG_ENV).is_some_and(|value| !value.is_empty());

        let mut all = Vec::new();
        if debug {
            all.push(ClientOption::debug(true));
        }
        all.extend(options);

        Self::new(token, all)
    }

    /// Underlying request executor, for endpoints not covered here.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.inner.base_url()
    }

    /// Team operations.
    #[must_use]
    pub fn teams(&self) -> TeamsResource<'_> {
        TeamsResource::new(self)
    }

    /// Project operations.
    #[must_use]
    pub fn projects(&self) -> ProjectsResource<'_> {
        ProjectsResource::new(self)
    }

    /// Plan catalogue.
    #[must_use]
    pub fn plans(&self) -> PlansResource<'_> {
        PlansResource::new(self)
    }

    /// Operating system images.
    #[must_use]
    pub fn images(&self) -> ImagesResource<'_> {
        ImagesResource::new(self)
    }

    /// Regions.
    #[must_use]
    pub fn regions(&self) -> RegionsResource<'_> {
        RegionsResource::new(self)
    }

    /// SSH key operations.
    #[must_use]
    pub fn ssh_keys(&self) -> SshKeysResource<'_> {
        SshKeysResource::new(self)
    }

    /// Server operations.
    #[must_use]
    pub fn servers(&self) -> ServersResource<'_> {
        ServersResource::new(self)
    }

    /// IP address operations.
    #[must_use]
    pub fn ip_addresses(&self) -> IpAddressesResource<'_> {
        IpAddressesResource::new(self)
    }

    /// Block storage operations.
    #[must_use]
    pub fn storages(&self) -> StoragesResource<'_> {
        StoragesResource::new(self)
    }

    /// Backup storage operations.
    #[must_use]
    pub fn backups(&self) -> BackupsResource<'_> {
        BackupsResource::new(self)
    }

    /// User operations.
    #[must_use]
    pub fn users(&self) -> UsersResource<'_> {
        UsersResource::new(self)
    }

    pub(crate) fn fetch<T>(&self, path: &ResourcePath) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let (value, _) = self
            .inner
            .send_json::<(), T>(Method::GET, &path.render()?, None)?;
        Ok(value)
    }

    pub(crate) fn fetch_page<T>(&self, path: &ResourcePath) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let (items, response) = self
            .inner
            .send_json::<(), Vec<T>>(Method::GET, &path.render()?, None)?;
        Ok(Page::new(items, response))
    }

    pub(crate) fn submit<B, T>(&self, method: Method, path: &ResourcePath, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let (value, _) = self.inner.send_json(method, &path.render()?, Some(body))?;
        Ok(value)
    }

    pub(crate) fn remove(&self, path: &ResourcePath) -> Result<Response> {
        self.inner.send::<()>(Method::DELETE, &path.render()?, None)
    }
}

impl std::fmt::Debug for CherryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CherryClient")
            .field("base_url", &self.base_url().as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn from_lookup_requires_token() {
        let err = CherryClient::from_lookup(lookup(&[]), []).unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains(AUTH_TOKEN_ENV)));

        let err = CherryClient::from_lookup(lookup(&[(AUTH_TOKEN_ENV, "  ")]), []).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn from_lookup_reads_token_and_debug() {
        let client = CherryClient::from_lookup(
            lookup(&[(AUTH_TOKEN_ENV, "env-token"), (DEBUG_ENV, "1")]),
            [],
        )
        .unwrap();
        assert!(client.api().config().debug());
        assert_eq!(
            client.base_url().as_str(),
            cherry_core::config::DEFAULT_BASE_URL
        );
    }

    #[test]
    fn empty_debug_variable_is_off() {
        let client =
            CherryClient::from_lookup(lookup(&[(AUTH_TOKEN_ENV, "t"), (DEBUG_ENV, "")]), [])
                .unwrap();
        assert!(!client.api().config().debug());
    }

    #[test]
    fn explicit_options_follow_environment() {
        let client = CherryClient::from_lookup(
            lookup(&[(AUTH_TOKEN_ENV, "t"), (DEBUG_ENV, "yes")]),
            [
                ClientOption::debug(false),
                ClientOption::base_url("http://127.0.0.1:8080/v1"),
            ],
        )
        .unwrap();
        assert!(!client.api().config().debug());
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/v1/");
    }

    #[test]
    fn new_rejects_empty_token() {
        let err = CherryClient::new("", []).unwrap_err();
        assert!(err.to_string().contains("auth token"));
    }

    #[test]
    fn debug_output_hides_token() {
        let client = CherryClient::new("very-secret", []).unwrap();
        assert!(!format!("{client:?}").contains("very-secret"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn client_is_send_and_sync() {
        assert_send_sync::<CherryClient>();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn resource_calls_share_one_client_across_threads() {
        use crate::resources::test_support::{blocking, client_for};
        use crate::TeamId;
        use wiremock::matchers::{method, path_regex};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/v1/teams/\d+$"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": 123, "name": "Team"})),
            )
            .expect(6)
            .mount(&server)
            .await;

        let uri = server.uri();
        let names = blocking(move || {
            let client = client_for(&uri);
            std::thread::scope(|scope| {
                let handles: Vec<_> = (1..=6u64)
                    .map(|id| {
                        let client = &client;
                        scope.spawn(move || client.teams().get(TeamId::new(id), None))
                    })
                    .collect();
                handles
                    .into_iter()
                    .map(|handle| handle.join().unwrap().unwrap().name)
                    .collect::<Vec<_>>()
            })
        })
        .await;

        assert_eq!(names.len(), 6);
        assert!(names.iter().all(|name| name == "Team"));
        assert_eq!(server.received_requests().await.unwrap().len(), 6);
    }
}

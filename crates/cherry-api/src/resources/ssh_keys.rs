//! SSH key resource.

use cherry_core::query::{GetOptions, ResourcePath};
use cherry_core::{Page, Response};
use reqwest::Method;

use crate::client::CherryClient;
use crate::models::{CreateSshKey, SshKey, UpdateSshKey};
use crate::{Result, SshKeyId};

const SSH_KEYS_PATH: &str = "/v1/ssh-keys";

/// Operations on stored SSH keys.
pub struct SshKeysResource<'c> {
    client: &'c CherryClient,
}

impl<'c> SshKeysResource<'c> {
    pub(crate) fn new(client: &'c CherryClient) -> Self {
        Self { client }
    }

    /// List stored keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn list(&self, opts: Option<&GetOptions>) -> Result<Page<SshKey>> {
        self.client
            .fetch_page(&ResourcePath::new(SSH_KEYS_PATH).options(opts))
    }

    /// Fetch a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn get(&self, id: SshKeyId, opts: Option<&GetOptions>) -> Result<SshKey> {
        self.client
            .fetch(&ResourcePath::new(SSH_KEYS_PATH).segment(id).options(opts))
    }

    /// Store a new key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn create(&self, request: &CreateSshKey) -> Result<SshKey> {
        self.client
            .submit(Method::POST, &ResourcePath::new(SSH_KEYS_PATH), request)
    }

    /// Update a key's label or value.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn update(&self, id: SshKeyId, request: &UpdateSshKey) -> Result<SshKey> {
        self.client.submit(
            Method::PUT,
            &ResourcePath::new(SSH_KEYS_PATH).segment(id),
            request,
        )
    }

    /// Delete a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn delete(&self, id: SshKeyId) -> Result<Response> {
        self.client
            .remove(&ResourcePath::new(SSH_KEYS_PATH).segment(id))
    }
}

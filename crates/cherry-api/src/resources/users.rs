//! User resource.

use cherry_core::query::{GetOptions, ResourcePath};

use crate::client::CherryClient;
use crate::models::User;
use crate::Result;

/// Operations on users.
pub struct UsersResource<'c> {
    client: &'c CherryClient,
}

impl<'c> UsersResource<'c> {
    pub(crate) fn new(client: &'c CherryClient) -> Self {
        Self { client }
    }

    /// Fetch the user owning the API token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn current(&self, opts: Option<&GetOptions>) -> Result<User> {
        self.client
            .fetch(&ResourcePath::new("/v1/user").options(opts))
    }
}

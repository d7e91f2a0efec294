//! Team resource.

use cherry_core::query::{GetOptions, ResourcePath};
use cherry_core::{Page, Response};

use crate::client::CherryClient;
use crate::models::Team;
use crate::{Result, TeamId};

const TEAMS_PATH: &str = "/v1/teams";

/// Operations on teams.
pub struct TeamsResource<'c> {
    client: &'c CherryClient,
}

impl<'c> TeamsResource<'c> {
    pub(crate) fn new(client: &'c CherryClient) -> Self {
        Self { client }
    }

    /// List the teams the token has access to.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn list(&self, opts: Option<&GetOptions>) -> Result<Page<Team>> {
        self.client
            .fetch_page(&ResourcePath::new(TEAMS_PATH).options(opts))
    }

    /// Fetch a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn get(&self, id: TeamId, opts: Option<&GetOptions>) -> Result<Team> {
        self.client
            .fetch(&ResourcePath::new(TEAMS_PATH).segment(id).options(opts))
    }

    /// Delete a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn delete(&self, id: TeamId) -> Result<Response> {
        self.client
            .remove(&ResourcePath::new(TEAMS_PATH).segment(id))
    }
}

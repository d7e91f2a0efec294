//! Read-only catalogue resources: plans, images and regions.

use cherry_core::query::{GetOptions, ResourcePath};
use cherry_core::Page;

use crate::client::CherryClient;
use crate::models::{Image, Plan, Region};
use crate::{PlanId, Result, TeamId};

/// Plans available to a team.
pub struct PlansResource<'c> {
    client: &'c CherryClient,
}

impl<'c> PlansResource<'c> {
    pub(crate) fn new(client: &'c CherryClient) -> Self {
        Self { client }
    }

    /// List the plans a team can order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn list(&self, team: TeamId, opts: Option<&GetOptions>) -> Result<Page<Plan>> {
        let path = ResourcePath::new("/v1/teams")
            .segment(team)
            .segment("plans")
            .options(opts);
        self.client.fetch_page(&path)
    }
}

/// Images installable on a plan.
pub struct ImagesResource<'c> {
    client: &'c CherryClient,
}

impl<'c> ImagesResource<'c> {
    pub(crate) fn new(client: &'c CherryClient) -> Self {
        Self { client }
    }

    /// List the images offered for a plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn list(&self, plan: PlanId, opts: Option<&GetOptions>) -> Result<Page<Image>> {
        let path = ResourcePath::new("/v1/plans")
            .segment(plan)
            .segment("images")
            .options(opts);
        self.client.fetch_page(&path)
    }
}

const REGIONS_PATH: &str = "/v1/regions";

/// Data center regions.
pub struct RegionsResource<'c> {
    client: &'c CherryClient,
}

impl<'c> RegionsResource<'c> {
    pub(crate) fn new(client: &'c CherryClient) -> Self {
        Self { client }
    }

    /// List all regions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn list(&self, opts: Option<&GetOptions>) -> Result<Page<Region>> {
        self.client
            .fetch_page(&ResourcePath::new(REGIONS_PATH).options(opts))
    }

    /// Fetch a region by slug, e.g. `eu_nord_1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn get(&self, slug: &str, opts: Option<&GetOptions>) -> Result<Region> {
        self.client
            .fetch(&ResourcePath::new(REGIONS_PATH).segment(slug).options(opts))
    }
}

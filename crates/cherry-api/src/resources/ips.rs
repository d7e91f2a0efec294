//! IP address resource.

use cherry_core::query::{GetOptions, ResourcePath};
use cherry_core::{Page, Response};
use reqwest::Method;

use crate::client::CherryClient;
use crate::models::{CreateIpAddress, IpAddress, UpdateIpAddress};
use crate::{IpAddressId, ProjectId, Result};

const IPS_PATH: &str = "/v1/ips";

fn project_ips(project: ProjectId) -> ResourcePath {
    ResourcePath::new("/v1/projects").segment(project).segment("ips")
}

/// Operations on IP addresses and subnets.
pub struct IpAddressesResource<'c> {
    client: &'c CherryClient,
}

impl<'c> IpAddressesResource<'c> {
    pub(crate) fn new(client: &'c CherryClient) -> Self {
        Self { client }
    }

    /// List the addresses of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn list(&self, project: ProjectId, opts: Option<&GetOptions>) -> Result<Page<IpAddress>> {
        self.client.fetch_page(&project_ips(project).options(opts))
    }

    /// Fetch an address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn get(&self, id: IpAddressId, opts: Option<&GetOptions>) -> Result<IpAddress> {
        self.client
            .fetch(&ResourcePath::new(IPS_PATH).segment(id).options(opts))
    }

    /// Allocate an address in a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn create(&self, project: ProjectId, request: &CreateIpAddress) -> Result<IpAddress> {
        self.client
            .submit(Method::POST, &project_ips(project), request)
    }

    /// Update DNS records, routing, assignment or tags.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn update(&self, id: IpAddressId, request: &UpdateIpAddress) -> Result<IpAddress> {
        self.client
            .submit(Method::PUT, &ResourcePath::new(IPS_PATH).segment(id), request)
    }

    /// Release an address.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn delete(&self, id: IpAddressId) -> Result<Response> {
        self.client
            .remove(&ResourcePath::new(IPS_PATH).segment(id))
    }
}

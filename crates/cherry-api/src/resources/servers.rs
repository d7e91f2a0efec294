//! Server resource.

use cherry_core::query::{GetOptions, ResourcePath};
use cherry_core::{Page, Response};
use reqwest::Method;
use tracing::debug;

use crate::client::CherryClient;
use crate::models::{CreateServer, PowerState, Server, ServerAction, ServerActionRequest, UpdateServer};
use crate::{ProjectId, Result, ServerId};

const SERVERS_PATH: &str = "/v1/servers";

fn server_path(id: ServerId) -> ResourcePath {
    ResourcePath::new(SERVERS_PATH).segment(id)
}

fn project_servers(project: ProjectId) -> ResourcePath {
    ResourcePath::new("/v1/projects")
        .segment(project)
        .segment("servers")
}

/// Operations on servers.
pub struct ServersResource<'c> {
    client: &'c CherryClient,
}

impl<'c> ServersResource<'c> {
    pub(crate) fn new(client: &'c CherryClient) -> Self {
        Self { client }
    }

    /// List the servers of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn list(&self, project: ProjectId, opts: Option<&GetOptions>) -> Result<Page<Server>> {
        self.client.fetch_page(&project_servers(project).options(opts))
    }

    /// Fetch a server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn get(&self, id: ServerId, opts: Option<&GetOptions>) -> Result<Server> {
        self.client.fetch(&server_path(id).options(opts))
    }

    /// Deploy a server into `request.project_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn create(&self, request: &CreateServer) -> Result<Server> {
        self.client
            .submit(Method::POST, &project_servers(request.project_id), request)
    }

    /// Update a server's name, hostname, tags or BGP flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn update(&self, id: ServerId, request: &UpdateServer) -> Result<Server> {
        self.client.submit(Method::PUT, &server_path(id), request)
    }

    /// Terminate a server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn delete(&self, id: ServerId) -> Result<Response> {
        self.client.remove(&server_path(id))
    }

    /// Fetch only the power state of a server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn power_state(&self, id: ServerId) -> Result<PowerState> {
        let opts = GetOptions::new().with_fields(["power"]);
        self.client.fetch(&server_path(id).options(Some(&opts)))
    }

    /// Power a server on.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn power_on(&self, id: ServerId) -> Result<Server> {
        self.action(id, ServerAction::PowerOn)
    }

    /// Power a server off.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn power_off(&self, id: ServerId) -> Result<Server> {
        self.action(id, ServerAction::PowerOff)
    }

    /// Reboot a server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn reboot(&self, id: ServerId) -> Result<Server> {
        self.action(id, ServerAction::Reboot)
    }

    /// Reset the BMC password of a server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn reset_bmc_password(&self, id: ServerId) -> Result<Server> {
        self.action(id, ServerAction::ResetBmcPassword)
    }

    /// Run any server action.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn action(&self, id: ServerId, action: ServerAction) -> Result<Server> {
        debug!(server = %id, ?action, "requesting server action");
        self.client.submit(
            Method::POST,
            &server_path(id).segment("actions"),
            &ServerActionRequest { action },
        )
    }
}

//! Project resource.

use cherry_core::query::{GetOptions, ResourcePath};
use cherry_core::{Page, Response};
use reqwest::Method;

use crate::client::CherryClient;
use crate::models::{CreateProject, Project, UpdateProject};
use crate::{ProjectId, Result, TeamId};

const PROJECTS_PATH: &str = "/v1/projects";

fn team_projects(team: TeamId) -> ResourcePath {
    ResourcePath::new("/v1/teams").segment(team).segment("projects")
}

/// Operations on projects.
pub struct ProjectsResource<'c> {
    client: &'c CherryClient,
}

impl<'c> ProjectsResource<'c> {
    pub(crate) fn new(client: &'c CherryClient) -> Self {
        Self { client }
    }

    /// List the projects of a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn list(&self, team: TeamId, opts: Option<&GetOptions>) -> Result<Page<Project>> {
        self.client.fetch_page(&team_projects(team).options(opts))
    }

    /// Fetch a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn get(&self, id: ProjectId, opts: Option<&GetOptions>) -> Result<Project> {
        self.client
            .fetch(&ResourcePath::new(PROJECTS_PATH).segment(id).options(opts))
    }

    /// Create a project in a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn create(&self, team: TeamId, request: &CreateProject) -> Result<Project> {
        self.client
            .submit(Method::POST, &team_projects(team), request)
    }

    /// Update a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn update(&self, id: ProjectId, request: &UpdateProject) -> Result<Project> {
        self.client.submit(
            Method::PUT,
            &ResourcePath::new(PROJECTS_PATH).segment(id),
            request,
        )
    }

    /// Delete a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn delete(&self, id: ProjectId) -> Result<Response> {
        self.client
            .remove(&ResourcePath::new(PROJECTS_PATH).segment(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::test_support::{blocking, client_for};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test(flavor = "multi_thread")]
    async fn list_projects_of_team() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/teams/123/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 321, "name": "My Project", "href": "/projects/321"},
                {"id": 322, "name": "My New Project", "href": "/projects/322"}
            ])))
            .mount(&server)
            .await;

        let uri = server.uri();
        let page = blocking(move || client_for(&uri).projects().list(TeamId::new(123), None))
            .await
            .unwrap();

        let names: Vec<&str> = page.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["My Project", "My New Project"]);
        assert_eq!(page.total(), 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn get_project_with_bgp() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/projects/321"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 321,
                "name": "My Project",
                "href": "/projects/321",
                "bgp": {"enabled": true, "local_asn": 123}
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let project = blocking(move || client_for(&uri).projects().get(ProjectId::new(321), None))
            .await
            .unwrap();

        assert_eq!(
            project,
            Project {
                id: ProjectId::new(321),
                name: "My Project".into(),
                bgp: crate::models::ProjectBgp {
                    enabled: true,
                    local_asn: 123
                },
                href: "/projects/321".into(),
            }
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_project_sends_name_only() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/teams/123/projects"))
            .and(body_json(json!({"name": "My Custom Project"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"id": 322, "name": "My Custom Project"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let project = blocking(move || {
            client_for(&uri).projects().create(
                TeamId::new(123),
                &CreateProject {
                    name: "My Custom Project".into(),
                    bgp: None,
                },
            )
        })
        .await
        .unwrap();
        assert_eq!(project.id, ProjectId::new(322));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn update_project_uses_put() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v1/projects/321"))
            .and(body_json(json!({"name": "My Updated Project", "bgp": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 321})))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        blocking(move || {
            client_for(&uri).projects().update(
                ProjectId::new(321),
                &UpdateProject {
                    name: Some("My Updated Project".into()),
                    bgp: Some(true),
                },
            )
        })
        .await
        .unwrap();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn delete_project() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/projects/321"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        blocking(move || client_for(&uri).projects().delete(ProjectId::new(321)))
            .await
            .unwrap();
    }
}

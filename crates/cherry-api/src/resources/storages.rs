//! Block storage resource.

use cherry_core::query::{GetOptions, ResourcePath};
use cherry_core::{Page, Response};
use reqwest::Method;

use crate::client::CherryClient;
use crate::models::{AttachStorage, BlockStorage, CreateStorage, UpdateStorage};
use crate::{ProjectId, Result, StorageId};

const STORAGES_PATH: &str = "/v1/storages";

fn storage_path(id: StorageId) -> ResourcePath {
    ResourcePath::new(STORAGES_PATH).segment(id)
}

fn project_storages(project: ProjectId) -> ResourcePath {
    ResourcePath::new("/v1/projects")
        .segment(project)
        .segment("storages")
}

/// Operations on block storage volumes.
pub struct StoragesResource<'c> {
    client: &'c CherryClient,
}

impl<'c> StoragesResource<'c> {
    pub(crate) fn new(client: &'c CherryClient) -> Self {
        Self { client }
    }

    /// List the volumes of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn list(&self, project: ProjectId, opts: Option<&GetOptions>) -> Result<Page<BlockStorage>> {
        self.client
            .fetch_page(&project_storages(project).options(opts))
    }

    /// Fetch a volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn get(&self, id: StorageId, opts: Option<&GetOptions>) -> Result<BlockStorage> {
        self.client.fetch(&storage_path(id).options(opts))
    }

    /// Create a volume in `request.project_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn create(&self, request: &CreateStorage) -> Result<BlockStorage> {
        self.client
            .submit(Method::POST, &project_storages(request.project_id), request)
    }

    /// Resize or relabel `request.storage_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn update(&self, request: &UpdateStorage) -> Result<BlockStorage> {
        self.client
            .submit(Method::PUT, &storage_path(request.storage_id), request)
    }

    /// Delete a volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn delete(&self, id: StorageId) -> Result<Response> {
        self.client.remove(&storage_path(id))
    }

    /// Attach `request.storage_id` to a server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn attach(&self, request: &AttachStorage) -> Result<BlockStorage> {
        self.client.submit(
            Method::POST,
            &storage_path(request.storage_id).segment("attachments"),
            request,
        )
    }

    /// Detach a volume from its server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn detach(&self, id: StorageId) -> Result<Response> {
        self.client
            .remove(&storage_path(id).segment("attachments"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::test_support::{blocking, client_for};
    use crate::ServerId;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test(flavor = "multi_thread")]
    async fn get_volume() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/storages/123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 123,
                "name": "name",
                "href": "/storages/123",
                "size": 256,
                "allow_edit_size": true,
                "unit": "GB",
                "description": "string",
                "attached_to": {"href": "/servers/1"},
                "vlan_id": "1",
                "vlan_ip": "1.1.1.1",
                "initiator": "com.cherryservers:initiator",
                "discovery_ip": "1.1.1.1"
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let volume = blocking(move || client_for(&uri).storages().get(StorageId::new(123), None))
            .await
            .unwrap();

        assert_eq!(volume.size, 256);
        assert!(volume.allow_edit_size);
        assert_eq!(volume.attached_to.href, "/servers/1");
        assert_eq!(volume.initiator, "com.cherryservers:initiator");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_volume_in_project() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/projects/321/storages"))
            .and(body_json(json!({
                "project_id": 321,
                "description": "desc",
                "size": 521,
                "region": "EU-Nord-1"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 123})))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let volume = blocking(move || {
            client_for(&uri).storages().create(&CreateStorage {
                project_id: ProjectId::new(321),
                description: "desc".into(),
                size: 521,
                region: "EU-Nord-1".into(),
            })
        })
        .await
        .unwrap();
        assert_eq!(volume.id, StorageId::new(123));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn update_volume() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v1/storages/123"))
            .and(body_json(json!({
                "storage_id": 123,
                "size": 500,
                "description": "volume 1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 123, "size": 500})))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let volume = blocking(move || {
            client_for(&uri).storages().update(&UpdateStorage {
                storage_id: StorageId::new(123),
                size: Some(500),
                description: Some("volume 1".into()),
            })
        })
        .await
        .unwrap();
        assert_eq!(volume.size, 500);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn attach_and_detach() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/storages/123/attachments"))
            .and(body_json(json!({"storage_id": 123, "attach_to": 1234})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 123})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/v1/storages/123/attachments"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        blocking(move || {
            let client = client_for(&uri);
            client
                .storages()
                .attach(&AttachStorage {
                    storage_id: StorageId::new(123),
                    attach_to: ServerId::new(1234),
                })
                .unwrap();
            client.storages().detach(StorageId::new(123)).unwrap();
        })
        .await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn list_and_delete_volume() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/projects/321/storages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 123}])))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/v1/storages/123"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        blocking(move || {
            let client = client_for(&uri);
            let page = client.storages().list(ProjectId::new(321), None).unwrap();
            assert_eq!(page.len(), 1);
            client.storages().delete(page.items[0].id).unwrap();
        })
        .await;
    }
}

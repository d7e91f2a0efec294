//! Backup storage resource.

use cherry_core::query::{GetOptions, ResourcePath};
use cherry_core::{Page, Response};
use reqwest::Method;

use crate::client::CherryClient;
use crate::models::{
    BackupService, BackupStorage, BackupStoragePlan, CreateBackup, UpdateBackupService,
    UpdateBackupStorage,
};
use crate::{BackupStorageId, ProjectId, Result, ServerId};

const BACKUPS_PATH: &str = "/v1/backup-storages";

fn backup_path(id: BackupStorageId) -> ResourcePath {
    ResourcePath::new(BACKUPS_PATH).segment(id)
}

fn server_path(server: ServerId) -> ResourcePath {
    ResourcePath::new("/v1/servers").segment(server)
}

/// Operations on backup storages.
pub struct BackupsResource<'c> {
    client: &'c CherryClient,
}

impl<'c> BackupsResource<'c> {
    pub(crate) fn new(client: &'c CherryClient) -> Self {
        Self { client }
    }

    /// Fetch a backup storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn get(&self, id: BackupStorageId, opts: Option<&GetOptions>) -> Result<BackupStorage> {
        self.client.fetch(&backup_path(id).options(opts))
    }

    /// List the backup storages of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn list(
        &self,
        project: ProjectId,
        opts: Option<&GetOptions>,
    ) -> Result<Page<BackupStorage>> {
        let path = ResourcePath::new("/v1/projects")
            .segment(project)
            .segment("backup-storages")
            .options(opts);
        self.client.fetch_page(&path)
    }

    /// List the backup plans available for a server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn list_plans(
        &self,
        server: ServerId,
        opts: Option<&GetOptions>,
    ) -> Result<Page<BackupStoragePlan>> {
        self.client.fetch_page(
            &server_path(server)
                .segment("backup-storage-plans")
                .options(opts),
        )
    }

    /// Order a backup storage for `request.server_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn create(&self, request: &CreateBackup) -> Result<BackupStorage> {
        self.client.submit(
            Method::POST,
            &server_path(request.server_id).segment("backup-storages"),
            request,
        )
    }

    /// Change the plan or password of `request.id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn update(&self, request: &UpdateBackupStorage) -> Result<BackupStorage> {
        self.client
            .submit(Method::PUT, &backup_path(request.id), request)
    }

    /// Change one access method of `request.id`.
    ///
    /// The method name is sent as a path segment and percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn update_service(&self, request: &UpdateBackupService) -> Result<Vec<BackupService>> {
        self.client.submit(
            Method::PATCH,
            &backup_path(request.id)
                .segment("services")
                .segment(&request.name),
            request,
        )
    }

    /// Delete a backup storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn delete(&self, id: BackupStorageId) -> Result<Response> {
        self.client.remove(&backup_path(id))
    }
}

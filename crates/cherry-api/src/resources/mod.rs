//! Per-resource endpoint handles.
//!
//! Each handle borrows the [`CherryClient`](crate::CherryClient) and maps one
//! method call to exactly one API request.

mod backups;
mod catalog;
mod ips;
mod projects;
mod servers;
mod ssh_keys;
mod storages;
mod teams;
mod users;

pub use backups::BackupsResource;
pub use catalog::{ImagesResource, PlansResource, RegionsResource};
pub use ips::IpAddressesResource;
pub use projects::ProjectsResource;
pub use servers::ServersResource;
pub use ssh_keys::SshKeysResource;
pub use storages::StoragesResource;
pub use teams::TeamsResource;
pub use users::UsersResource;

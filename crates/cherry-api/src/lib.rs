//! # cherry-api
//!
//! Blocking bindings for the Cherry Servers REST API.
//!
//! [`CherryClient`] wraps the shared executor from `cherry-core` and hands out
//! one lightweight handle per resource family:
//!
//! ```no_run
//! use cherry_api::{CherryClient, GetOptions, TeamId};
//!
//! # fn main() -> cherry_api::Result<()> {
//! let client = CherryClient::from_env([])?;
//! let projects = client
//!     .projects()
//!     .list(TeamId::new(123), Some(&GetOptions::new().with_limit(10)))?;
//! println!("{} of {} projects", projects.len(), projects.total());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod models;
pub mod resources;

pub use cherry_core::id::{
    BackupStorageId, IpAddressId, PlanId, ProjectId, ServerId, SshKeyId, StorageId, TeamId,
};
pub use cherry_core::query::{GetOptions, QueryParams};
pub use cherry_core::{ClientConfig, ClientOption, Error, ErrorBody, Meta, Page, Response};
pub use client::{CherryClient, AUTH_TOKEN_ENV, DEBUG_ENV};
pub use models::*;

/// Result type used throughout the crate.
pub type Result<T> = cherry_core::Result<T>;

//! # cherry-core
//!
//! Request plumbing shared by the Cherry Servers API bindings.
//!
//! This crate owns everything that is common to every endpoint: client
//! configuration, bearer authentication, JSON encoding and decoding, error
//! response normalisation and pagination metadata.
//!
//! ## Modules
//!
//! - [`config`] - Client configuration and construction-time options
//! - [`client`] - The blocking request executor
//! - [`response`] - Response envelope, metadata and error bodies
//! - [`error`] - Error taxonomy for every failure the executor can report
//! - [`query`] - Resource path and query string builders
//! - [`id`] - Strongly-typed resource identifiers

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod id;
pub mod query;
pub mod response;

// Re-export commonly used types
pub use client::{ApiClient, Destination};
pub use config::{ClientConfig, ClientOption};
pub use error::{Error, Result};
pub use response::{ErrorBody, Meta, Page, Response};

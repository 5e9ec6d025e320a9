//! Cloud Controller v2 client for the `describe` plugin.
//!
//! This crate provides the host connection seam ([`CliConnection`]) the
//! plugin talks through, an HTTP implementation of it
//! ([`HttpConnection`]), the endpoint paths the plugin queries, and typed
//! models for the JSON envelopes the control plane returns.

pub mod client;
pub mod connection;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::HttpConnection;
pub use client::builder::HttpConnectionBuilder;
pub use connection::CliConnection;
pub use error::{ClientError, Result};
pub use models::{
    CurlResponse, Organization, Resource, ResourceMetadata, ServiceBroker, ServiceInstance,
    ServicePlan, Space, SpaceEntity,
};

//! Data models for Cloud Controller v2 responses.
//!
//! Every v2 list endpoint returns the same paged envelope
//! ([`CurlResponse`]); the per-endpoint `entity` payload is typed by the
//! resource modules so that a missing key or wrong JSON type surfaces as a
//! decode error instead of a panic later on.

pub mod brokers;
pub mod common;
pub mod instances;
pub mod organizations;
pub mod plans;
pub mod spaces;

pub use brokers::ServiceBroker;
pub use common::{CfErrorBody, CurlResponse, Resource, ResourceMetadata};
pub use instances::ServiceInstance;
pub use organizations::Organization;
pub use plans::ServicePlan;
pub use spaces::{Space, SpaceEntity};

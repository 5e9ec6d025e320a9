//! Cloud Controller v2 endpoints consumed by the plugin.
//!
//! Path builders return endpoint strings relative to the API root, in the
//! form the host's `curl` command expects.

mod paths;
pub mod request;
pub mod url_encoding;

pub use paths::{
    SPACES_PATH, organizations_by_space, service_brokers_by_name, service_plans_by_broker,
};
pub use request::get_text;

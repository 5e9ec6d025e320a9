//! Space models.
//!
//! [`SpaceEntity`] is the wire shape from `/v2/spaces`; [`Space`] is the
//! flattened host model (guid + name) the plugin works with.

use serde::{Deserialize, Serialize};

use super::common::Resource;

/// Entity of a space resource.
#[derive(Debug, Deserialize, Clone)]
pub struct SpaceEntity {
    pub name: String,
    #[serde(default)]
    pub organization_guid: Option<String>,
}

/// A space visible to the current user.
///
/// The default value (empty guid and name) stands in for a space that could
/// not be found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub guid: String,
    pub name: String,
}

impl Space {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
        }
    }
}

impl From<Resource<SpaceEntity>> for Space {
    fn from(resource: Resource<SpaceEntity>) -> Self {
        Self {
            guid: resource.metadata.guid,
            name: resource.entity.name,
        }
    }
}

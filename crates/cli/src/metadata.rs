//! Registration data the host CLI reads when installing the plugin.
//!
//! Field names serialize in the host's PascalCase form so the JSON printed
//! for `SendMetadata` matches what the host decodes.

use std::collections::BTreeMap;

use serde::Serialize;

/// Plugin name and its single command.
pub const PLUGIN_NAME: &str = "describe";

/// A `major.minor.build` version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VersionType {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl std::fmt::Display for VersionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

/// Usage text and per-option help for a command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Usage {
    pub usage: String,
    pub options: BTreeMap<String, String>,
}

/// A command contributed by the plugin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Command {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub help_text: String,
    pub usage_details: Usage,
}

/// Everything the host needs to register the plugin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PluginMetadata {
    pub name: String,
    pub version: VersionType,
    pub min_cli_version: VersionType,
    pub commands: Vec<Command>,
}

impl PluginMetadata {
    /// Metadata for the `describe` plugin.
    pub fn describe() -> Self {
        let options = BTreeMap::from([
            ("-b".to_string(), "The name of the broker".to_string()),
            (
                "-s".to_string(),
                "The name of the service instance".to_string(),
            ),
            (
                "-show-guids".to_string(),
                "If set, will display the service instances guid".to_string(),
            ),
        ]);

        Self {
            name: PLUGIN_NAME.to_string(),
            version: VersionType {
                major: 1,
                minor: 0,
                build: 0,
            },
            min_cli_version: VersionType {
                major: 6,
                minor: 7,
                build: 0,
            },
            commands: vec![Command {
                name: PLUGIN_NAME.to_string(),
                alias: None,
                help_text: "Show information about brokers or service instances".to_string(),
                usage_details: Usage {
                    usage: "cf describe [-b broker-name] [-s service-instance-name]".to_string(),
                    options,
                },
            }],
        }
    }
}

//! The `describe` plugin.
//!
//! Responsibilities:
//! - Expose the plugin's registration metadata.
//! - Parse the `describe` flags.
//! - Resolve a broker name to its plans, their instances, and the spaces and
//!   organizations those instances live in, producing a buffered report.
//!
//! Does NOT handle:
//! - Printing or exit codes (see `main` and `error`).
//! - Transport, authentication or pagination of the space listing (see
//!   `cf_client::CliConnection`).
//!
//! Invariants:
//! - Plans and instances are reported in API order.
//! - Only the first page of plans and of each plan's instances is read.
//! - Nothing is returned for printing unless every call succeeded.
//! - Organizations are looked up once per distinct space guid.

use std::collections::HashMap;

use cf_client::endpoints::{
    organizations_by_space, service_brokers_by_name, service_plans_by_broker,
};
use cf_client::{
    CliConnection, ClientError, CurlResponse, Organization, ServiceBroker, ServiceInstance,
    ServicePlan, Space,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::args::DescribeFlags;
use crate::metadata::{PLUGIN_NAME, PluginMetadata};
use crate::report::{BrokerReport, InstanceLine, PlanSection};

/// Failures reported as `FAILED: <message>. Error: <cause>`.
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("cannot parse flags. Error: {0}")]
    FlagParse(String),

    #[error("could not unmarshal response. Error: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{action}. Error: {source}")]
    Client {
        action: &'static str,
        #[source]
        source: ClientError,
    },

    #[error("could not resolve organization. Error: no organization owns space {space_guid}")]
    OrganizationNotFound { space_guid: String },

    #[error("could not read broker. Error: {broker} was reported but not listed")]
    BrokerMissingFromResponse { broker: String },

    #[error("not connected. Error: describing a broker requires an API connection")]
    NotConnected,
}

impl PluginError {
    /// Endpoint whose response could not be decoded, if that is the failure.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Decode { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }
}

/// What a successful invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A finished broker report.
    Report(BrokerReport),
    /// Nothing to show; printed as-is and still a success.
    Warning(String),
    /// No output.
    Nothing,
}

/// Plugin state for one invocation.
#[derive(Debug, Default)]
pub struct DescribePlugin {
    broker_name: String,
    service_name: String,
    show_guids: bool,
    invoked: bool,
}

impl DescribePlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metadata(&self) -> PluginMetadata {
        PluginMetadata::describe()
    }

    /// Parse `-b`, `-s` and `-show-guids` from `args[1..]`.
    ///
    /// Previous flag state is discarded first.
    pub fn parse_flags(&mut self, args: &[String]) -> Result<(), PluginError> {
        self.broker_name.clear();
        self.service_name.clear();
        self.show_guids = false;

        let flags = DescribeFlags::try_parse_args(args).map_err(|e| {
            let rendered = e.to_string();
            let first_line = rendered.lines().next().unwrap_or_default();
            PluginError::FlagParse(first_line.trim_start_matches("error: ").to_string())
        })?;

        if !flags.ignored.is_empty() {
            debug!(ignored = ?flags.ignored, "Ignoring trailing arguments");
        }

        self.broker_name = flags.broker;
        self.service_name = flags.service;
        self.show_guids = flags.show_guids;
        Ok(())
    }

    /// Record the invocation and parse its flags if it targets `describe`.
    ///
    /// Any other command name leaves the plugin with nothing to do.
    pub fn parse_invocation(&mut self, args: &[String]) -> Result<(), PluginError> {
        self.invoked = args.first().map(String::as_str) == Some(PLUGIN_NAME);
        if self.invoked {
            self.parse_flags(args)?;
        }
        Ok(())
    }

    /// Whether executing the parsed invocation calls the API.
    pub fn needs_connection(&self) -> bool {
        self.invoked && !self.broker_name.is_empty()
    }

    /// Parse `args` and run the requested descriptions.
    ///
    /// Parsing discards earlier flag state, so an invocation already
    /// inspected with [`Self::parse_invocation`] can be run again as-is.
    pub async fn run<C>(&mut self, connection: &C, args: &[String]) -> Result<Outcome, PluginError>
    where
        C: CliConnection + ?Sized,
    {
        self.parse_invocation(args)?;
        self.execute(Some(connection)).await
    }

    /// Run the descriptions selected by the last parsed invocation.
    ///
    /// A broker warning ends the invocation before the service description.
    pub async fn execute<C>(&self, connection: Option<&C>) -> Result<Outcome, PluginError>
    where
        C: CliConnection + ?Sized,
    {
        if !self.invoked {
            return Ok(Outcome::Nothing);
        }

        let mut outcome = Outcome::Nothing;

        if !self.broker_name.is_empty() {
            let connection = connection.ok_or(PluginError::NotConnected)?;
            outcome = self.describe_broker(connection).await?;
            if matches!(outcome, Outcome::Warning(_)) {
                return Ok(outcome);
            }
        }

        if !self.service_name.is_empty() {
            self.describe_service();
        }

        Ok(outcome)
    }

    /// Build the plan/instance report for the configured broker.
    pub async fn describe_broker<C>(&self, connection: &C) -> Result<Outcome, PluginError>
    where
        C: CliConnection + ?Sized,
    {
        info!(broker = %self.broker_name, "Describing broker");

        let brokers: CurlResponse<ServiceBroker> =
            curl(connection, &service_brokers_by_name(&self.broker_name)).await?;
        if brokers.total_results == 0 {
            return Ok(Outcome::Warning(format!("{} not found", self.broker_name)));
        }

        let broker_guid = brokers
            .first()
            .map(|b| b.metadata.guid.clone())
            .ok_or_else(|| PluginError::BrokerMissingFromResponse {
                broker: self.broker_name.clone(),
            })?;
        if brokers.total_results > 1 {
            debug!(count = brokers.total_results, guid = %broker_guid, "Several brokers match, using the first");
        }

        let username = match connection.username().await {
            Ok(name) => name,
            Err(e) => {
                warn!(error = %e, "Could not determine the current user");
                String::new()
            }
        };
        let mut report = BrokerReport::new(&self.broker_name, &username, self.show_guids);

        let plans_endpoint = service_plans_by_broker(&broker_guid);
        let plans: CurlResponse<ServicePlan> = curl(connection, &plans_endpoint).await?;
        if plans.total_results == 0 {
            return Ok(Outcome::Warning(format!("{} has no plans", self.broker_name)));
        }
        warn_if_truncated(&plans_endpoint, &plans);

        let spaces = connection
            .get_spaces()
            .await
            .map_err(|source| PluginError::Client {
                action: "could not list spaces",
                source,
            })?;
        let orgs = org_names_by_space(connection, &spaces).await?;

        for plan in &plans.resources {
            let endpoint = &plan.entity.service_instances_url;
            let instances: CurlResponse<ServiceInstance> = curl(connection, endpoint).await?;
            warn_if_truncated(endpoint, &instances);

            if instances.total_results == 0 {
                continue;
            }

            let lines = instances
                .resources
                .iter()
                .map(|instance| {
                    let space = find_space(&spaces, &instance.entity.space_guid);
                    InstanceLine {
                        guid: instance.metadata.guid.clone(),
                        name: instance.entity.name.clone(),
                        org: orgs.get(&space.guid).cloned().unwrap_or_default(),
                        space: space.name,
                    }
                })
                .collect();

            report.plans.push(PlanSection {
                name: plan.entity.name.clone(),
                instances: lines,
            });
        }

        Ok(Outcome::Report(report))
    }

    /// Describing a single service instance is not implemented yet; it
    /// produces no output and makes no API call.
    pub fn describe_service(&self) {
        debug!(service = %self.service_name, "Service instance description is not implemented");
    }
}

/// GET `endpoint` through the connection and decode the joined lines.
async fn curl<E, C>(connection: &C, endpoint: &str) -> Result<CurlResponse<E>, PluginError>
where
    E: DeserializeOwned,
    C: CliConnection + ?Sized,
{
    debug!(endpoint, "curl");
    let lines = connection
        .curl(endpoint)
        .await
        .map_err(|source| PluginError::Client {
            action: "could not query the API",
            source,
        })?;

    CurlResponse::from_lines(&lines).map_err(|source| PluginError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

/// Map each distinct space guid to its organization's name.
async fn org_names_by_space<C>(
    connection: &C,
    spaces: &[Space],
) -> Result<HashMap<String, String>, PluginError>
where
    C: CliConnection + ?Sized,
{
    let mut orgs = HashMap::with_capacity(spaces.len());
    for space in spaces {
        if orgs.contains_key(&space.guid) {
            continue;
        }
        let response: CurlResponse<Organization> =
            curl(connection, &organizations_by_space(&space.guid)).await?;
        let org = response
            .first()
            .ok_or_else(|| PluginError::OrganizationNotFound {
                space_guid: space.guid.clone(),
            })?;
        orgs.insert(space.guid.clone(), org.entity.name.clone());
    }
    Ok(orgs)
}

/// The space with `guid`, or an empty space when it is not visible.
fn find_space(spaces: &[Space], guid: &str) -> Space {
    spaces
        .iter()
        .find(|s| s.guid == guid)
        .cloned()
        .unwrap_or_default()
}

fn warn_if_truncated<E>(endpoint: &str, response: &CurlResponse<E>) {
    if response.has_more_pages() {
        warn!(
            endpoint,
            total = response.total_results,
            shown = response.resources.len(),
            "Only the first page of results is shown"
        );
    }
}

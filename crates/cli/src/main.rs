//! cf-describe - summarize a service broker's plans and instances.
//!
//! Responsibilities:
//! - Parse global connection options and the plugin invocation.
//! - Answer the host's metadata probe.
//! - Build configuration and an API connection only when the invocation
//!   needs one, then run the plugin and print its outcome.
//!
//! Does NOT handle:
//! - Control-plane requests or response models (see `crates/client`).
//! - Configuration precedence or validation (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Reports, warnings and failures go to stdout; tracing goes to stderr.

mod args;
mod error;
mod metadata;
mod plugin;
mod report;

use anyhow::{Context, Result};
use args::Cli;
use cf_client::HttpConnection;
use cf_config::{Config, ConfigLoader};
use clap::Parser;
use error::{ExitCode, ExitCodeExt, failure_message};
use plugin::{DescribePlugin, Outcome};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        println!("FAILED: could not load environment. Error: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut plugin = DescribePlugin::new();

    if cli.is_metadata_probe() {
        let exit_code = match serde_json::to_string(&plugin.metadata()) {
            Ok(json) => {
                println!("{json}");
                ExitCode::Success
            }
            Err(e) => {
                println!("FAILED: could not encode metadata. Error: {e}");
                ExitCode::GeneralError
            }
        };
        std::process::exit(exit_code.as_i32());
    }

    let exit_code = match run(&cli, &mut plugin).await {
        Ok(outcome) => {
            print_outcome(&outcome);
            ExitCode::Success
        }
        Err(e) => {
            if let Some(endpoint) = e
                .downcast_ref::<plugin::PluginError>()
                .and_then(|p| p.endpoint())
            {
                tracing::debug!(endpoint, "Undecodable response");
            }
            println!("{}", failure_message(&e));
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

async fn run(cli: &Cli, plugin: &mut DescribePlugin) -> Result<Outcome> {
    // Configuration is only required when the invocation reaches the API.
    plugin.parse_invocation(&cli.plugin_args)?;
    if !plugin.needs_connection() {
        return Ok(plugin.execute::<HttpConnection>(None).await?);
    }

    let config = load_config(cli).context("could not load configuration")?;
    let connection = HttpConnection::builder()
        .from_config(&config)
        .build()
        .context("could not create API connection")?;

    Ok(plugin.run(&connection, &cli.plugin_args).await?)
}

/// Host config file, then environment, then command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    if let Some(path) = cli.config_path_override() {
        loader = loader.with_config_path(path);
    }

    loader = loader.from_host_file()?.from_env()?;

    if let Some(ref api) = cli.api {
        loader = loader.with_api_endpoint(api.clone());
    }
    if let Some(ref token) = cli.access_token {
        loader = loader.with_access_token(token.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    Ok(loader.build()?)
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        // The report already ends in a newline; println adds the trailing blank line.
        Outcome::Report(report) => println!("{}", report.render()),
        Outcome::Warning(message) => println!("{message}"),
        Outcome::Nothing => {}
    }
}

//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the binary's global connection options (clap derive, env fallbacks).
//! - Define the `describe` command's own flags and accept the host's
//!   single-dash long flag spelling (`-show-guids`).
//!
//! Non-responsibilities:
//! - Does not run the command (see `plugin` module).
//! - Does not validate connection settings (see `cf_config::ConfigLoader`).

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "cf-describe")]
#[command(about = "Summarize a service broker's plans and instances", long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true)]
#[command(
    after_help = "Examples:\n  cf-describe describe -b p-mysql\n  cf-describe describe -b p-mysql -show-guids\n  cf-describe --api https://api.sys.example.com describe -b p-mysql\n  cf-describe SendMetadata\n"
)]
pub struct Cli {
    /// Control-plane API endpoint (e.g., https://api.sys.example.com)
    #[arg(long, env = "CF_DESCRIBE_API")]
    pub api: Option<String>,

    /// OAuth access token, with or without the `bearer ` prefix
    #[arg(long, env = "CF_DESCRIBE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Username shown in the report header (defaults to the token's user)
    #[arg(long, env = "CF_DESCRIBE_USERNAME")]
    pub username: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, env = "CF_DESCRIBE_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Request timeout in seconds
    #[arg(long, env = "CF_DESCRIBE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Path to the host CLI config file (defaults to $CF_HOME/.cf/config.json).
    ///
    /// Can also be set via CF_DESCRIBE_CONFIG_PATH environment variable.
    #[arg(long, env = "CF_DESCRIBE_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Plugin invocation as the host passes it, e.g. `describe -b my-broker`
    #[arg(value_name = "ARGS", trailing_var_arg = true)]
    pub plugin_args: Vec<String>,
}

impl Cli {
    /// Whether the host is probing for plugin metadata.
    pub fn is_metadata_probe(&self) -> bool {
        self.plugin_args.first().map(String::as_str) == Some("SendMetadata")
    }

    /// Config path override, ignoring blank values.
    pub fn config_path_override(&self) -> Option<PathBuf> {
        self.config_path
            .as_ref()
            .filter(|p| !p.to_string_lossy().trim().is_empty())
            .cloned()
    }
}

/// Flags of the `describe` command.
///
/// The first argument is the command name. Parsing stops at the first
/// positional argument; everything after it is ignored.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "describe", disable_help_flag = true)]
pub struct DescribeFlags {
    /// The name of the broker
    #[arg(
        short = 'b',
        value_name = "broker-name",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub broker: String,

    /// The name of the service instance
    #[arg(
        short = 's',
        value_name = "service-instance-name",
        default_value = "",
        allow_hyphen_values = true
    )]
    pub service: String,

    /// If set, will display the service instances guid
    #[arg(
        long = "show-guids",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub show_guids: bool,

    #[arg(hide = true, trailing_var_arg = true)]
    pub ignored: Vec<String>,
}

impl DescribeFlags {
    /// Parse the command's argument vector.
    pub fn try_parse_args(args: &[String]) -> Result<Self, clap::Error> {
        Self::try_parse_from(normalize_flag_args(args))
    }
}

/// Rewrite the host's flag spellings into the form clap understands.
///
/// `-show-guids[=v]` gains a second dash; `--b`/`--s` lose one. Values of
/// `-b`/`-s` and anything after the first positional or `--` are left alone.
pub fn normalize_flag_args(args: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(args.len());
    let mut iter = args.iter();

    if let Some(command) = iter.next() {
        out.push(command.clone());
    }

    let mut expecting_value = false;
    let mut done = false;
    for arg in iter {
        if done || expecting_value {
            expecting_value = false;
            out.push(arg.clone());
            continue;
        }

        let normalized = if is_flag(arg, "-show-guids") {
            format!("-{arg}")
        } else if is_flag(arg, "--b") || is_flag(arg, "--s") {
            arg[1..].to_string()
        } else {
            arg.clone()
        };

        match normalized.as_str() {
            "--" => done = true,
            "-b" | "-s" => expecting_value = true,
            a if !a.starts_with('-') => done = true,
            _ => {}
        }
        out.push(normalized);
    }
    out
}

/// `arg` is `flag` exactly or `flag=<value>`.
fn is_flag(arg: &str, flag: &str) -> bool {
    arg.strip_prefix(flag)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('='))
}

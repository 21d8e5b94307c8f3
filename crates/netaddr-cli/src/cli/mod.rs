//! CLI for inspecting URLs, authorities and IP literals.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use netaddr_core::config::{self, NetConfig};

use commands::{run_check_ip, run_host_port, run_keepalive_support, run_split};

/// Top-level CLI for netaddr.
#[derive(Debug, Parser)]
#[command(name = "netaddr")]
#[command(about = "netaddr: inspect URLs, host:port strings and IP literals", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a URL into scheme, netloc, path, query and fragment.
    Split {
        url: String,
        /// Treat `#` as ordinary data instead of starting a fragment.
        #[arg(long)]
        no_fragments: bool,
        /// Keep every value of repeated query parameters.
        #[arg(long)]
        all_values: bool,
    },

    /// Split a `host:port` authority (IPv6 may be bracketed).
    HostPort {
        authority: String,
        /// Port used when the authority has none (overrides config).
        #[arg(long, value_name = "PORT")]
        default_port: Option<u16>,
    },

    /// Check whether a string is a valid IPv4 or IPv6 literal.
    CheckIp { literal: String },

    /// List the TCP keepalive options this build can set.
    KeepaliveSupport,
}

impl CliCommand {
    /// Runs the parsed command and returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        cli.command.execute(config::load_or_init)
    }

    /// Runs this command. `load_config` is only called when a command needs
    /// a config value the arguments did not supply.
    pub fn execute<F>(self, load_config: F) -> Result<i32>
    where
        F: FnOnce() -> Result<NetConfig>,
    {
        match self {
            CliCommand::Split {
                url,
                no_fragments,
                all_values,
            } => run_split(&url, !no_fragments, !all_values),
            CliCommand::HostPort {
                authority,
                default_port,
            } => {
                let default_port = match default_port {
                    Some(port) => Some(port),
                    None => {
                        let cfg = load_config()?;
                        tracing::debug!("loaded config: {:?}", cfg);
                        cfg.default_port
                    }
                };
                run_host_port(&authority, default_port)
            }
            CliCommand::CheckIp { literal } => Ok(run_check_ip(&literal)),
            CliCommand::KeepaliveSupport => run_keepalive_support(),
        }
    }
}

//! tunnel-inventory CLI - Ansible dynamic inventory for tunneled SSH hosts
//!
//! This module contains the shared CLI implementation used by the binary.
//! Stdout carries nothing but the JSON Ansible asked for; diagnostics and
//! logging go to stderr.

mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tunnel_inventory_core::{generate, get_version_long, Settings};

/// Emit an Ansible dynamic inventory for SSH hosts behind Cloudflare tunnels
#[derive(Parser)]
#[command(name = "tunnel-inventory")]
#[command(version = &*get_version_long().leak())]
#[command(
    about = "Emit an Ansible dynamic inventory for SSH hosts behind Cloudflare tunnels",
    long_about = None
)]
struct Cli {
    /// Print the full inventory document (the default behavior)
    #[arg(long)]
    list: bool,

    /// Print connection variables for a single host
    #[arg(long, value_name = "HOSTNAME", conflicts_with = "list")]
    host: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

pub fn run() -> Result<()> {
    // Logging goes to stderr; Ansible parses stdout as JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let settings = Settings::from_env();
    let document = match generate(&settings) {
        Ok(document) => document,
        Err(err) => {
            output::show_inventory_error(&err);
            std::process::exit(1);
        }
    };

    tracing::debug!(
        list = cli.list,
        host = cli.host.as_deref(),
        pretty = cli.pretty,
        "Emitting inventory"
    );

    match &cli.host {
        Some(hostname) => commands::cmd_host(&document, hostname, cli.pretty),
        None => commands::cmd_list(&document, cli.pretty),
    }
}

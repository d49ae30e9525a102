//! --host - Emit connection variables for a single host

use anyhow::{Context, Result};
use tunnel_inventory_core::InventoryDocument;

/// Print one host's variable map to stdout
///
/// Unknown hosts emit an empty object, which Ansible treats as "no vars".
pub fn cmd_host(document: &InventoryDocument, hostname: &str, pretty: bool) -> Result<()> {
    let json = document
        .host_vars_json(hostname, pretty)
        .with_context(|| format!("Failed to serialize variables for host '{hostname}'"))?;
    println!("{json}");
    Ok(())
}

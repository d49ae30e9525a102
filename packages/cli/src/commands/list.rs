//! --list - Emit the full inventory document

use anyhow::{Context, Result};
use tunnel_inventory_core::InventoryDocument;

/// Print the document to stdout, one line unless pretty-printed
pub fn cmd_list(document: &InventoryDocument, pretty: bool) -> Result<()> {
    let json = document
        .to_json(pretty)
        .context("Failed to serialize inventory document")?;
    println!("{json}");
    Ok(())
}

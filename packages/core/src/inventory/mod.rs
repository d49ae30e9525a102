//! Inventory generation module
//!
//! Provides the dynamic inventory pipeline:
//! - Host-source parsing (flat hostname list or JSON hosts document)
//! - Inventory document construction
//! - Typed validation errors

mod build;
mod error;
mod parse;
mod schema;

// Public exports
pub use build::build_inventory;
pub use error::InventoryError;
pub use parse::parse_host_source;
pub use schema::{proxy_command, AllGroup, Group, HostEntry, HostVars, InventoryDocument, Meta};

use crate::settings::Settings;

/// Run the full pipeline: settings → entries → document
pub fn generate(settings: &Settings) -> Result<InventoryDocument, InventoryError> {
    let source = settings
        .host_source
        .as_deref()
        .ok_or(InventoryError::MissingHostSource)?;

    let entries = parse_host_source(source)?;
    Ok(build_inventory(&entries, &settings.ssh_key_path))
}

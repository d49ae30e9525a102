//! Output utilities for CLI commands
//!
//! Centralized styled error formatting so every validation failure renders
//! the same way on stderr.

pub mod errors;

pub use errors::show_inventory_error;

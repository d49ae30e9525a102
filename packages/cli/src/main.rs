//! tunnel-inventory - Ansible dynamic inventory for tunneled SSH hosts
//!
//! Thin entry point; the CLI implementation lives in the library crate.

use anyhow::Result;

fn main() -> Result<()> {
    tunnel_inventory::run()
}

//! CLI command implementations
//!
//! One file per emission mode, mirroring the Ansible dynamic inventory
//! protocol (`--list` and `--host`).

mod host;
mod list;

pub use host::cmd_host;
pub use list::cmd_list;

//! Inventory document schema
//!
//! Data structures for the emitted Ansible inventory document. Ordered
//! containers throughout so identical input serializes to identical bytes.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Administrative user Ansible connects as
pub const ANSIBLE_USER: &str = "root";

/// SSH port, emitted as a string per the inventory contract
pub const ANSIBLE_PORT: &str = "22";

/// Remote interpreter hint attached to the `all` group
pub const PYTHON_INTERPRETER: &str = "/usr/bin/python3";

/// Path of the cloudflared binary on the controller
pub const CLOUDFLARED_BIN: &str = "/usr/local/bin/cloudflared";

/// A single host parsed from the host source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    /// Hostname, non-empty after trimming
    pub hostname: String,

    /// Group names declared for this host (trimmed, deduplicated, sorted)
    pub groups: BTreeSet<String>,
}

impl HostEntry {
    /// Create an entry with no groups
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            groups: BTreeSet::new(),
        }
    }

    /// Builder pattern: add a group
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.insert(group.into());
        self
    }
}

/// Per-host connection variables
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HostVars {
    pub ansible_host: String,
    pub ansible_user: String,
    pub ansible_port: String,
    pub ansible_ssh_private_key_file: String,
    pub ansible_ssh_common_args: String,
}

impl HostVars {
    /// Build the variable map for one host
    pub fn new(hostname: &str, ssh_key_path: &str) -> Self {
        Self {
            ansible_host: hostname.to_string(),
            ansible_user: ANSIBLE_USER.to_string(),
            ansible_port: ANSIBLE_PORT.to_string(),
            ansible_ssh_private_key_file: ssh_key_path.to_string(),
            ansible_ssh_common_args: proxy_command(hostname, ssh_key_path),
        }
    }
}

/// SSH common args that proxy the connection through cloudflared
///
/// The key path is inserted verbatim; it may be empty and is never checked
/// for existence.
pub fn proxy_command(hostname: &str, ssh_key_path: &str) -> String {
    format!(
        "-o ProxyCommand=\"{CLOUDFLARED_BIN} access ssh --hostname {hostname}\" \
         -o IdentityFile={ssh_key_path}"
    )
}

/// The `all` group: every hostname plus shared vars
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AllGroup {
    pub hosts: Vec<String>,
    pub vars: BTreeMap<String, String>,
}

/// A tag-derived group and its member hostnames
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Group {
    pub hosts: Vec<String>,
}

/// The `_meta` block Ansible reads hostvars from
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Meta {
    pub hostvars: BTreeMap<String, HostVars>,
}

/// The full emitted inventory document
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InventoryDocument {
    pub all: AllGroup,

    #[serde(rename = "_meta")]
    pub meta: Meta,

    /// One top-level entry per distinct group name
    #[serde(flatten)]
    pub groups: BTreeMap<String, Group>,
}

impl InventoryDocument {
    /// Look up one host's variable map
    pub fn host_vars(&self, hostname: &str) -> Option<&HostVars> {
        self.meta.hostvars.get(hostname)
    }

    /// Serialize the full document
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Serialize one host's variable map; unknown hosts yield an empty
    /// object, which is what Ansible expects from `--host`
    pub fn host_vars_json(&self, hostname: &str, pretty: bool) -> serde_json::Result<String> {
        match self.host_vars(hostname) {
            Some(vars) if pretty => serde_json::to_string_pretty(vars),
            Some(vars) => serde_json::to_string(vars),
            None => Ok("{}".to_string()),
        }
    }
}

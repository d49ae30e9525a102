//! Environment-derived settings
//!
//! All environment reads happen here, so parsing and building stay pure and
//! tests never have to mutate the process environment.

use std::env;

/// Primary host-source variable (flat list or JSON hosts document)
pub const HOST_SOURCE_VAR: &str = "SSH_HOSTNAMES";

/// Legacy structured-hosts variable, read when the primary is unset
pub const HOST_SOURCE_FALLBACK_VAR: &str = "PULUMI_HOSTS";

/// Path to the SSH private key, inserted verbatim into host vars
pub const SSH_KEY_PATH_VAR: &str = "SSH_KEY_PATH";

/// Inputs the inventory run is built from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Raw host-source value; `None` when neither variable is set to a
    /// non-blank value
    pub host_source: Option<String>,

    /// Key path, possibly empty; never checked for existence
    pub ssh_key_path: String,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        let host_source =
            read_nonblank(HOST_SOURCE_VAR).or_else(|| read_nonblank(HOST_SOURCE_FALLBACK_VAR));
        match &host_source {
            Some(_) => tracing::debug!("Host source found in environment"),
            None => tracing::debug!(
                "Neither {} nor {} is set",
                HOST_SOURCE_VAR,
                HOST_SOURCE_FALLBACK_VAR
            ),
        }

        Self {
            host_source,
            ssh_key_path: env::var(SSH_KEY_PATH_VAR)
                .map(|value| value.trim().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Read a variable, treating unset and whitespace-only as absent
fn read_nonblank(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: from_env() is not exercised here. Mutating the process
    // environment is unsafe in edition 2024 and breaks test isolation; the
    // CLI is the integration point for real environment reads.

    #[test]
    fn test_default_has_no_host_source() {
        let settings = Settings::default();
        assert!(settings.host_source.is_none());
        assert!(settings.ssh_key_path.is_empty());
    }
}

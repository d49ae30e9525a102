//! Inventory-specific error types
//!
//! Every failure is a validation failure detected while reading the host
//! source; there is no recoverable class and no partial output.

use thiserror::Error;

/// Errors that can occur while parsing the host source
#[derive(Error, Debug)]
pub enum InventoryError {
    /// Neither host-source variable is set to a non-blank value
    #[error(
        "SSH_HOSTNAMES (or PULUMI_HOSTS) must be set with one or more hostnames \
         (comma- or whitespace-separated, or a JSON hosts document)"
    )]
    MissingHostSource,

    /// Input began with `{` or `[` but is not valid JSON
    #[error("Host source looks like JSON but could not be parsed: {0}")]
    MalformedJson(String),

    /// Top-level JSON object has no "hosts" key
    #[error("Host source JSON object has no \"hosts\" array")]
    HostsMissing,

    /// "hosts" key present but not an array
    #[error("\"hosts\" must be a JSON array")]
    HostsNotAnArray,

    /// Top-level JSON is neither an object with "hosts" nor an array
    #[error("Host source JSON must be an object with a \"hosts\" array, or a JSON array")]
    UnsupportedRoot,

    /// "hosts" array contains no entries
    #[error("\"hosts\" array is empty")]
    EmptyHosts,

    /// Array element is not a JSON object
    #[error("Host entry at index {index} is not a JSON object")]
    EntryNotAnObject { index: usize },

    /// Array element has no "hostname" field
    #[error("Host entry at index {index} is missing the \"hostname\" field")]
    HostnameMissing { index: usize },

    /// "hostname" field is not a string, or blank after trimming
    #[error("Host entry at index {index} has a non-string or blank \"hostname\"")]
    HostnameInvalid { index: usize },

    /// "tags" or "roles" field is not an array
    #[error("Host {hostname}: \"{field}\" must be an array of strings")]
    GroupListInvalid { hostname: String, field: String },

    /// "tags" or "roles" entry is not a string, or blank after trimming
    #[error("Host {hostname}: \"{field}\" contains a non-string or blank entry")]
    GroupMemberInvalid { hostname: String, field: String },

    /// Flat input normalized to zero tokens
    #[error("Host source did not contain any usable hostnames")]
    NoUsableHostnames,
}

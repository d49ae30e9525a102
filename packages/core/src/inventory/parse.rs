//! Host source parsing
//!
//! Resolves the two accepted encodings into one normalized entry sequence:
//! a JSON hosts document (object with a `hosts` array, or a bare array) or
//! a flat comma/whitespace-separated hostname list. The encoding is decided
//! by a single sniff of the first character, so malformed JSON is reported
//! as such instead of degrading into a one-token flat list.

use std::collections::BTreeSet;

use serde_json::Value;

use super::error::InventoryError;
use super::schema::HostEntry;

/// Separator characters recognized by the flat encoding
const FLAT_SEPARATORS: [char; 4] = [',', '\t', '\n', ' '];

/// Structured input fields whose members become group names
const GROUP_FIELDS: [&str; 2] = ["tags", "roles"];

/// Parse the raw host-source value into an ordered entry sequence
pub fn parse_host_source(raw: &str) -> Result<Vec<HostEntry>, InventoryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::MissingHostSource);
    }

    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        parse_structured(trimmed)
    } else {
        parse_flat(trimmed)
    }
}

/// Flat encoding: commas, tabs, newlines, and spaces all separate tokens
/// and collapse; input order is preserved
fn parse_flat(raw: &str) -> Result<Vec<HostEntry>, InventoryError> {
    let entries: Vec<HostEntry> = raw
        .split(FLAT_SEPARATORS)
        .filter(|token| !token.is_empty())
        .map(HostEntry::new)
        .collect();

    if entries.is_empty() {
        return Err(InventoryError::NoUsableHostnames);
    }

    tracing::debug!("Parsed {} hosts from flat host list", entries.len());
    Ok(entries)
}

/// Structured encoding: JSON object with a `hosts` array, or a bare array
fn parse_structured(raw: &str) -> Result<Vec<HostEntry>, InventoryError> {
    let root: Value =
        serde_json::from_str(raw).map_err(|e| InventoryError::MalformedJson(e.to_string()))?;

    let elements = match &root {
        Value::Object(object) => match object.get("hosts") {
            Some(Value::Array(elements)) => elements,
            Some(_) => return Err(InventoryError::HostsNotAnArray),
            None => return Err(InventoryError::HostsMissing),
        },
        Value::Array(elements) => elements,
        _ => return Err(InventoryError::UnsupportedRoot),
    };

    if elements.is_empty() {
        return Err(InventoryError::EmptyHosts);
    }

    let mut entries = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        entries.push(parse_entry(index, element)?);
    }

    tracing::debug!("Parsed {} hosts from JSON hosts document", entries.len());
    Ok(entries)
}

/// Validate one element of the hosts array
///
/// Unknown fields are ignored; the producer emits more than the inventory
/// consumes (e.g. `effective_domain`).
fn parse_entry(index: usize, element: &Value) -> Result<HostEntry, InventoryError> {
    let object = element
        .as_object()
        .ok_or(InventoryError::EntryNotAnObject { index })?;

    let hostname = match object.get("hostname") {
        Some(Value::String(hostname)) => hostname.trim(),
        Some(_) => return Err(InventoryError::HostnameInvalid { index }),
        None => return Err(InventoryError::HostnameMissing { index }),
    };
    if hostname.is_empty() {
        return Err(InventoryError::HostnameInvalid { index });
    }

    let mut groups = BTreeSet::new();
    for field in GROUP_FIELDS {
        if let Some(value) = object.get(field) {
            collect_groups(hostname, field, value, &mut groups)?;
        }
    }

    Ok(HostEntry {
        hostname: hostname.to_string(),
        groups,
    })
}

/// Fold a `tags`/`roles` array into the entry's group set
fn collect_groups(
    hostname: &str,
    field: &str,
    value: &Value,
    groups: &mut BTreeSet<String>,
) -> Result<(), InventoryError> {
    let members = value
        .as_array()
        .ok_or_else(|| InventoryError::GroupListInvalid {
            hostname: hostname.to_string(),
            field: field.to_string(),
        })?;

    for member in members {
        let group = member
            .as_str()
            .map(str::trim)
            .filter(|group| !group.is_empty())
            .ok_or_else(|| InventoryError::GroupMemberInvalid {
                hostname: hostname.to_string(),
                field: field.to_string(),
            })?;
        groups.insert(group.to_string());
    }

    Ok(())
}

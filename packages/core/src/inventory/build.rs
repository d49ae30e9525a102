//! Inventory document construction
//!
//! Transforms the normalized entry sequence into the document Ansible
//! consumes: the `all` group, `_meta.hostvars`, and one group per tag.

use std::collections::{BTreeMap, BTreeSet};

use super::schema::{AllGroup, Group, HostEntry, HostVars, InventoryDocument, Meta, PYTHON_INTERPRETER};

/// Build the full inventory document
///
/// Hostvars are keyed by hostname, so duplicate entries overwrite the same
/// key (last write wins). Host lists are sorted and deduplicated.
pub fn build_inventory(entries: &[HostEntry], ssh_key_path: &str) -> InventoryDocument {
    let mut hostvars = BTreeMap::new();
    let mut members: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for entry in entries {
        hostvars.insert(
            entry.hostname.clone(),
            HostVars::new(&entry.hostname, ssh_key_path),
        );
        for group in &entry.groups {
            members
                .entry(group.clone())
                .or_default()
                .insert(entry.hostname.clone());
        }
    }

    let hosts: Vec<String> = hostvars.keys().cloned().collect();
    let groups: BTreeMap<String, Group> = members
        .into_iter()
        .map(|(name, hosts)| (name, Group { hosts: hosts.into_iter().collect() }))
        .collect();

    tracing::debug!(
        "Built inventory: {} hosts, {} groups",
        hosts.len(),
        groups.len()
    );

    let mut vars = BTreeMap::new();
    vars.insert(
        "ansible_python_interpreter".to_string(),
        PYTHON_INTERPRETER.to_string(),
    );

    InventoryDocument {
        all: AllGroup { hosts, vars },
        meta: Meta { hostvars },
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(specs: &[(&str, &[&str])]) -> Vec<HostEntry> {
        specs
            .iter()
            .map(|(hostname, groups)| {
                groups
                    .iter()
                    .fold(HostEntry::new(*hostname), |e, g| e.with_group(*g))
            })
            .collect()
    }

    #[test]
    fn test_all_hosts_sorted_and_deduplicated() {
        let doc = build_inventory(&entries(&[("z", &[]), ("a", &[]), ("z", &[])]), "");
        assert_eq!(doc.all.hosts, vec!["a", "z"]);
    }

    #[test]
    fn test_all_vars_interpreter() {
        let doc = build_inventory(&entries(&[("h1", &[])]), "");
        assert_eq!(
            doc.all.vars.get("ansible_python_interpreter").map(String::as_str),
            Some("/usr/bin/python3")
        );
    }

    #[test]
    fn test_hostvars_match_all_hosts() {
        let doc = build_inventory(&entries(&[("h2", &[]), ("h1", &["web"]), ("h2", &[])]), "/k");
        let hostvar_keys: Vec<&String> = doc.meta.hostvars.keys().collect();
        let all_hosts: Vec<&String> = doc.all.hosts.iter().collect();
        assert_eq!(hostvar_keys, all_hosts);
    }

    #[test]
    fn test_duplicate_hostname_last_write_wins() {
        let doc = build_inventory(&entries(&[("h1", &["a"]), ("h1", &["b"])]), "");
        assert_eq!(doc.all.hosts, vec!["h1"]);
        assert_eq!(doc.meta.hostvars.len(), 1);
        // Both declarations still contribute group membership
        assert_eq!(doc.groups["a"].hosts, vec!["h1"]);
        assert_eq!(doc.groups["b"].hosts, vec!["h1"]);
    }

    #[test]
    fn test_group_membership_sorted() {
        let doc = build_inventory(
            &entries(&[("h3", &["web"]), ("h1", &["web", "db"]), ("h2", &["web"])]),
            "",
        );
        assert_eq!(doc.groups["web"].hosts, vec!["h1", "h2", "h3"]);
        assert_eq!(doc.groups["db"].hosts, vec!["h1"]);
    }

    #[test]
    fn test_no_groups_in_flat_style_input() {
        let doc = build_inventory(&entries(&[("h1", &[]), ("h2", &[])]), "");
        assert!(doc.groups.is_empty());
    }

    #[test]
    fn test_key_path_threaded_into_hostvars() {
        let doc = build_inventory(&entries(&[("h1", &[])]), "/keys/id_ed25519");
        let vars = doc.host_vars("h1").unwrap();
        assert_eq!(vars.ansible_ssh_private_key_file, "/keys/id_ed25519");
        assert!(vars.ansible_ssh_common_args.contains("-o IdentityFile=/keys/id_ed25519"));
    }

    #[test]
    fn test_identical_input_serializes_identically() {
        let input = entries(&[("h2", &["web"]), ("h1", &["db", "web"])]);
        let first = build_inventory(&input, "/k").to_json(false).unwrap();
        let second = build_inventory(&input, "/k").to_json(false).unwrap();
        assert_eq!(first, second);
    }
}

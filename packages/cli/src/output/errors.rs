//! Styled rendering of inventory validation failures

use console::style;
use tunnel_inventory_core::settings::HOST_SOURCE_VAR;
use tunnel_inventory_core::InventoryError;

/// Print a styled diagnostic for an inventory failure
///
/// The error itself carries the actionable detail (offending index or
/// hostname); this adds a recovery hint where one exists.
pub fn show_inventory_error(err: &InventoryError) {
    eprintln!("{} {}", style("Error:").red().bold(), err);

    match err {
        InventoryError::MissingHostSource => {
            eprintln!();
            eprintln!(
                "  {} Export a host list before invoking the inventory:",
                style("Tip:").cyan()
            );
            eprintln!(
                "       {}",
                style(format!(
                    "export {HOST_SOURCE_VAR}=\"ssh-a.example.com,ssh-b.example.com\""
                ))
                .green()
            );
        }
        InventoryError::MalformedJson(_) => {
            eprintln!();
            eprintln!(
                "  {} A value starting with '{{' or '[' must be a valid JSON hosts document.",
                style("Tip:").cyan()
            );
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // show_inventory_error only writes to stderr; these tests pin the
    // message text the styling wraps.

    #[test]
    fn test_missing_source_message_names_both_variables() {
        let message = InventoryError::MissingHostSource.to_string();
        assert!(message.contains("SSH_HOSTNAMES"));
        assert!(message.contains("PULUMI_HOSTS"));
    }

    #[test]
    fn test_structural_message_names_index() {
        let message = InventoryError::HostnameMissing { index: 3 }.to_string();
        assert!(message.contains("index 3"));
    }

    #[test]
    fn test_show_does_not_panic() {
        show_inventory_error(&InventoryError::MalformedJson("expected value".to_string()));
        show_inventory_error(&InventoryError::NoUsableHostnames);
    }
}

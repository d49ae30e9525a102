//! Version information for tunnel-inventory

/// Get the current version string
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the long version string with build information
///
/// Returns version plus build metadata when available (git commit, build
/// date), set via environment variables by CI or build scripts.
pub fn get_version_long() -> String {
    let version = get_version();
    let git_hash = option_env!("TI_GIT_HASH").unwrap_or("unknown");
    let build_date = option_env!("TI_BUILD_DATE").unwrap_or("unknown");

    format!("{version} (git: {git_hash}, built: {build_date})")
}

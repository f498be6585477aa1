//! Build metadata exported by `build.rs`.

/// Short commit hash of the build, or `unknown` outside a git checkout.
pub fn git_commit_hash() -> &'static str {
    match option_env!("NXVET_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// Whether the working tree had uncommitted changes at build time.
pub fn git_dirty() -> bool {
    option_env!("NXVET_WEB_GIT_DIRTY") == Some("true")
}

/// Version label shown in the page footer, e.g. `0.1.0 (a1b2c3d)`.
pub fn version_label() -> String {
    let suffix = if git_dirty() { "-dirty" } else { "" };
    format!(
        "{} ({}{suffix})",
        env!("CARGO_PKG_VERSION"),
        git_commit_hash()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_label_includes_package_version_and_hash() {
        let label = version_label();
        assert!(label.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(label.contains(git_commit_hash()));
    }
}

//! Version details for `--version`. `BUILD_COMMIT` and `BUILD_DATE` come from
//! `build.rs`; either can be pinned through the environment variable of the
//! same name for reproducible builds.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// e.g. `edutainment 0.1.0 (2026-10-19, 3f9c2ab)`
pub fn version_line() -> String {
    format!(
        "{} {} ({}, {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_is_short_hash_or_unknown() {
        assert!(
            BUILD_COMMIT == "unknown"
                || (BUILD_COMMIT.len() == 7 && BUILD_COMMIT.chars().all(|c| c.is_ascii_hexdigit())),
            "unexpected commit {:?}",
            BUILD_COMMIT
        );
    }

    #[test]
    fn test_version_line_names_package_and_build() {
        let line = version_line();
        assert!(line.starts_with(concat!("edutainment ", env!("CARGO_PKG_VERSION"))));
        assert!(line.contains(BUILD_DATE));
        assert!(line.ends_with(&format!("{})", BUILD_COMMIT)));
    }
}

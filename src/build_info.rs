//! Compile-time build information, shown by `flappy-nano --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version banner: package version, build date and commit.
pub fn version_line() -> String {
    format!(
        "flappy-nano {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_version_line_mentions_commit() {
        let line = version_line();
        assert!(line.starts_with("flappy-nano "));
        assert!(line.contains(BUILD_COMMIT));
    }
}

//! Base URL resolution

/// Backend used when nothing overrides it
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Environment variable that overrides the backend URL
pub const API_BASE_ENV: &str = "BABBAGEBOX_API_BASE_URL";

/// Pick the backend base URL.
///
/// Precedence: environment override, then the runtime override from the
/// settings file, then [`DEFAULT_API_BASE`]. Blank values are skipped and
/// trailing slashes trimmed.
pub fn resolve_api_base(env_override: Option<&str>, runtime_override: Option<&str>) -> String {
    [env_override, runtime_override]
        .into_iter()
        .flatten()
        .map(|url| url.trim().trim_end_matches('/'))
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .to_string()
}

/// Resolve the base URL from the process environment and the given runtime override.
pub fn api_base_from_env(runtime_override: Option<&str>) -> String {
    let env_override = std::env::var(API_BASE_ENV).ok();
    let base = resolve_api_base(env_override.as_deref(), runtime_override);
    tracing::info!("Using backend at {}", base);
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base() {
        assert_eq!(resolve_api_base(None, None), "http://localhost:8000");
    }

    #[test]
    fn test_env_wins_over_runtime() {
        assert_eq!(
            resolve_api_base(Some("http://env:9000"), Some("http://settings:7000")),
            "http://env:9000"
        );
    }

    #[test]
    fn test_runtime_override() {
        assert_eq!(
            resolve_api_base(None, Some("http://settings:7000/")),
            "http://settings:7000"
        );
    }

    #[test]
    fn test_blank_values_are_skipped() {
        assert_eq!(
            resolve_api_base(Some("  "), Some("http://settings:7000")),
            "http://settings:7000"
        );
        assert_eq!(resolve_api_base(Some(""), Some("")), DEFAULT_API_BASE);
    }
}

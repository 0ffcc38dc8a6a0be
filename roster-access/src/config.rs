//! Process-wide configuration, read once at startup and shared read-only.

use log::debug;

/// Environment variable holding the backdoor key
pub const BACKDOOR_KEY_ENV: &str = "ROSTER_BACKDOOR_KEY";

/// Immutable gate configuration.
///
/// The backdoor key is never logged or serialized.
#[derive(Clone, Default)]
pub struct GateConfig {
    backdoor_key: Option<String>,
}

impl GateConfig {
    /// Configuration with the backdoor override disabled
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backdoor_key(key: impl Into<String>) -> Self {
        Self::from_key(Some(key.into()))
    }

    /// Load from `ROSTER_BACKDOOR_KEY`. Unset or empty disables the override.
    pub fn from_env() -> Self {
        Self::from_key(std::env::var(BACKDOOR_KEY_ENV).ok())
    }

    /// Build from an optional key, treating an empty key as absent
    pub fn from_key(key: Option<String>) -> Self {
        let backdoor_key = key.filter(|k| !k.is_empty());
        debug!(
            "Backdoor override {}",
            if backdoor_key.is_some() {
                "enabled"
            } else {
                "disabled"
            }
        );
        Self { backdoor_key }
    }

    /// Returns true if `candidate` equals the configured backdoor key
    pub fn matches_backdoor_key(&self, candidate: Option<&str>) -> bool {
        match (&self.backdoor_key, candidate) {
            (Some(key), Some(candidate)) => key == candidate,
            _ => false,
        }
    }

    pub fn backdoor_enabled(&self) -> bool {
        self.backdoor_key.is_some()
    }
}

impl std::fmt::Debug for GateConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateConfig")
            .field("backdoor_key", &self.backdoor_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_only_exact_key() {
        let config = GateConfig::with_backdoor_key("s3cret");
        assert!(config.matches_backdoor_key(Some("s3cret")));
        assert!(!config.matches_backdoor_key(Some("S3CRET")));
        assert!(!config.matches_backdoor_key(Some("")));
        assert!(!config.matches_backdoor_key(None));
    }

    #[test]
    fn test_empty_key_disables_override() {
        let config = GateConfig::from_key(Some(String::new()));
        assert!(!config.backdoor_enabled());
        assert!(!config.matches_backdoor_key(Some("")));
    }

    #[test]
    fn test_from_env_reads_backdoor_key() {
        std::env::set_var(BACKDOOR_KEY_ENV, "from-env");
        let config = GateConfig::from_env();
        assert!(config.matches_backdoor_key(Some("from-env")));

        std::env::set_var(BACKDOOR_KEY_ENV, "");
        assert!(!GateConfig::from_env().backdoor_enabled());

        std::env::remove_var(BACKDOOR_KEY_ENV);
        assert!(!GateConfig::from_env().backdoor_enabled());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GateConfig::with_backdoor_key("s3cret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }
}

//! Platform recovery profiles, embedded at build time.
//!
//! The profiles describe per-platform install options, troubleshooting
//! steps, runtime start guidance, and startup setup instructions. They are
//! parsed once at startup and shared by reference from then on.

use std::collections::BTreeMap;

use serde::Deserialize;

use dockhand_core::error::{DockError, Result};

const EMBEDDED_PROFILES: &str = include_str!("resources/platforms.yaml");

/// Guidance for one container runtime on a platform.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RuntimeGuide {
    #[serde(default)]
    pub manual_start: Vec<String>,
    #[serde(default)]
    pub auto_start: Vec<String>,
    #[serde(default)]
    pub commands: Vec<String>,
}

/// How to get the daemon running next time, manually or on login.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StartupGuide {
    #[serde(default)]
    pub manual: Vec<String>,
    #[serde(default)]
    pub auto: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PlatformProfile {
    #[serde(default)]
    pub install_options: Vec<String>,
    #[serde(default)]
    pub troubleshooting: Vec<String>,
    #[serde(default)]
    pub runtimes: BTreeMap<String, RuntimeGuide>,
    #[serde(default)]
    pub startup: StartupGuide,
}

static FALLBACK_PROFILE: PlatformProfile = PlatformProfile {
    install_options: Vec::new(),
    troubleshooting: Vec::new(),
    runtimes: BTreeMap::new(),
    startup: StartupGuide {
        manual: Vec::new(),
        auto: Vec::new(),
    },
};

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformCatalog {
    platforms: BTreeMap<String, PlatformProfile>,
}

impl PlatformCatalog {
    /// Parses the embedded profile data. Malformed data is a startup error.
    pub fn load_embedded() -> Result<Self> {
        Self::parse(EMBEDDED_PROFILES)
    }

    fn parse(contents: &str) -> Result<Self> {
        let catalog: Self = serde_yaml_ng::from_str(contents)?;
        if !catalog.platforms.contains_key("linux") {
            return Err(DockError::Config(
                "platform catalog is missing the linux fallback profile".into(),
            ));
        }
        Ok(catalog)
    }

    /// Looks up a platform profile. Unknown keys resolve to the linux
    /// profile, so a lookup never fails.
    pub fn profile(&self, key: &str) -> &PlatformProfile {
        self.platforms
            .get(key)
            .or_else(|| self.platforms.get("linux"))
            .unwrap_or(&FALLBACK_PROFILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profiles_parse() {
        let catalog = PlatformCatalog::load_embedded().expect("embedded profiles must parse");
        for key in ["darwin", "windows", "linux"] {
            let profile = catalog.profile(key);
            assert!(
                !profile.install_options.is_empty(),
                "{key} should list install options"
            );
            assert!(
                !profile.troubleshooting.is_empty(),
                "{key} should list troubleshooting steps"
            );
            assert!(
                !profile.startup.manual.is_empty(),
                "{key} should list manual startup steps"
            );
        }
    }

    #[test]
    fn test_unknown_platform_falls_back_to_linux() {
        let catalog = PlatformCatalog::load_embedded().expect("embedded profiles must parse");
        let linux = catalog.profile("linux");
        let unknown = catalog.profile("freebsd");
        assert_eq!(unknown.install_options, linux.install_options);
        assert_eq!(unknown.troubleshooting, linux.troubleshooting);
    }

    #[test]
    fn test_darwin_profile_lists_expected_runtimes() {
        let catalog = PlatformCatalog::load_embedded().expect("embedded profiles must parse");
        let darwin = catalog.profile("darwin");
        for runtime in ["orbstack", "colima", "docker_desktop"] {
            assert!(
                darwin.runtimes.contains_key(runtime),
                "darwin profile should carry guidance for {runtime}"
            );
        }
    }

    #[test]
    fn test_catalog_without_linux_profile_is_rejected() {
        let result = PlatformCatalog::parse("platforms:\n  darwin:\n    install_options: []\n");
        assert!(matches!(result, Err(DockError::Config(_))));
    }

    #[test]
    fn test_malformed_catalog_is_a_serialization_error() {
        let result = PlatformCatalog::parse("platforms: [not, a, map]");
        assert!(matches!(result, Err(DockError::Serialization(_))));
    }
}

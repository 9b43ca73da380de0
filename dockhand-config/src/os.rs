use std::fmt;

/// Host operating system family, as the recovery flows distinguish them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    MacOs,
    Windows,
    Linux,
}

impl HostPlatform {
    /// Detects the current platform from the compile-time OS constant.
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Maps an OS name to a platform family.
    ///
    /// Anything unrecognized is treated as Linux so callers always end up
    /// with usable guidance.
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "macos" | "darwin" => HostPlatform::MacOs,
            "windows" => HostPlatform::Windows,
            _ => HostPlatform::Linux,
        }
    }

    /// Key used to look up this platform's profile in the catalog.
    pub fn catalog_key(&self) -> &'static str {
        match self {
            HostPlatform::MacOs => "darwin",
            HostPlatform::Windows => "windows",
            HostPlatform::Linux => "linux",
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostPlatform::MacOs => "macOS",
            HostPlatform::Windows => "Windows",
            HostPlatform::Linux => "Linux",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_os_names_map_to_their_family() {
        assert_eq!(HostPlatform::from_os_name("macos"), HostPlatform::MacOs);
        assert_eq!(HostPlatform::from_os_name("darwin"), HostPlatform::MacOs);
        assert_eq!(HostPlatform::from_os_name("windows"), HostPlatform::Windows);
        assert_eq!(HostPlatform::from_os_name("linux"), HostPlatform::Linux);
    }

    #[test]
    fn test_unknown_os_names_fall_back_to_linux() {
        assert_eq!(HostPlatform::from_os_name("freebsd"), HostPlatform::Linux);
        assert_eq!(HostPlatform::from_os_name("solaris"), HostPlatform::Linux);
        assert_eq!(HostPlatform::from_os_name(""), HostPlatform::Linux);
    }

    #[test]
    fn test_catalog_keys_are_stable() {
        assert_eq!(HostPlatform::MacOs.catalog_key(), "darwin");
        assert_eq!(HostPlatform::Windows.catalog_key(), "windows");
        assert_eq!(HostPlatform::Linux.catalog_key(), "linux");
    }
}

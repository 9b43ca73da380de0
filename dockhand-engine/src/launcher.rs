//! Container runtime detection and automatic start.

use std::fmt;

use tracing::debug;

use dockhand_core::command::{is_tool_installed, run_captured};
use dockhand_core::error::{DockError, Result};

/// Container runtimes the monitor knows how to start on macOS.
///
/// Detection prefers OrbStack, then Colima, and falls back to Docker
/// Desktop, matching how most hosts layer these tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeKind {
    OrbStack,
    Colima,
    DockerDesktop,
}

impl RuntimeKind {
    /// Key into the platform profile's `runtimes` table.
    pub fn guide_key(&self) -> &'static str {
        match self {
            RuntimeKind::OrbStack => "orbstack",
            RuntimeKind::Colima => "colima",
            RuntimeKind::DockerDesktop => "docker_desktop",
        }
    }
}

impl fmt::Display for RuntimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuntimeKind::OrbStack => "OrbStack",
            RuntimeKind::Colima => "Colima",
            RuntimeKind::DockerDesktop => "Docker Desktop",
        };
        write!(f, "{}", name)
    }
}

pub trait RuntimeLauncher {
    /// Picks the runtime to start based on what is installed.
    fn detect(&self) -> RuntimeKind;

    /// Asks the host to start `runtime`. Success means the start request
    /// was accepted, not that the daemon is up; callers follow with a
    /// wait loop.
    fn launch(&self, runtime: RuntimeKind) -> Result<()>;
}

/// Launcher that drives the real host tools.
pub struct HostLauncher;

impl HostLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HostLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeLauncher for HostLauncher {
    fn detect(&self) -> RuntimeKind {
        if is_tool_installed("orbctl") {
            RuntimeKind::OrbStack
        } else if is_tool_installed("colima") {
            RuntimeKind::Colima
        } else {
            RuntimeKind::DockerDesktop
        }
    }

    fn launch(&self, runtime: RuntimeKind) -> Result<()> {
        let (program, args): (&str, &[&str]) = match runtime {
            RuntimeKind::OrbStack => ("open", &["-a", "OrbStack"]),
            RuntimeKind::Colima => ("colima", &["start"]),
            RuntimeKind::DockerDesktop => ("open", &["-a", "Docker"]),
        };

        debug!("Launching {} via {} {:?}", runtime, program, args);
        let output = run_captured(program, args, None)?;
        if output.success() {
            Ok(())
        } else {
            Err(DockError::Command(output.combined().trim().to_string()))
        }
    }
}

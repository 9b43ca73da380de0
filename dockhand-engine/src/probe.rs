//! Daemon reachability probe.
//!
//! The probe answers two narrow questions: is the engine binary on PATH, and
//! does the daemon answer within a deadline. Every call runs a fresh check
//! against the host, so callers see the current state rather than a cached
//! answer from an earlier command. On top of that it can pull richer server
//! facts (version, system counters) for detail views.

use std::time::Duration;

use tracing::debug;

use dockhand_core::command::{is_tool_installed, run_captured_with_timeout};
use dockhand_core::error::{DockError, Result};

/// `docker version` format with the server-side fields tab-separated.
const VERSION_FORMAT: &str =
    "{{.Server.Version}}\t{{.Server.APIVersion}}\t{{.Server.Os}}\t{{.Server.Arch}}";

/// `docker info` format with the daemon-wide counters tab-separated.
const SYSTEM_FORMAT: &str = "{{.Containers}}\t{{.ContainersRunning}}\t{{.ContainersPaused}}\t{{.ContainersStopped}}\t{{.Images}}\t{{.ServerVersion}}\t{{.Driver}}\t{{.MemTotal}}\t{{.NCPU}}";

/// Server-side version facts reported by the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineVersion {
    pub version: String,
    pub api_version: String,
    pub os: String,
    pub arch: String,
}

/// Daemon-wide counters and host capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSystemInfo {
    pub containers: u64,
    pub containers_running: u64,
    pub containers_paused: u64,
    pub containers_stopped: u64,
    pub images: u64,
    pub server_version: String,
    pub storage_driver: String,
    pub memory_bytes: u64,
    pub cpus: u64,
}

pub trait DaemonProbe {
    /// Whether the engine binary is installed and on PATH.
    fn binary_present(&self) -> bool;

    /// One bounded round trip to the daemon. `Ok(())` means the daemon
    /// answered; the error carries a short diagnostic line otherwise.
    fn ping(&self, timeout: Duration) -> Result<()>;

    /// Server version facts, fetched within the deadline.
    fn version_info(&self, timeout: Duration) -> Result<EngineVersion>;

    /// Daemon-wide counters and capacity, fetched within the deadline.
    fn system_info(&self, timeout: Duration) -> Result<EngineSystemInfo>;
}

/// Probe backed by the `docker` CLI.
pub struct CliProbe;

impl CliProbe {
    pub fn new() -> Self {
        Self
    }

    /// Runs one formatted query, returning stdout on success and the
    /// trimmed stderr (or exit code) as the error otherwise.
    fn query(&self, args: &[&str], timeout: Duration) -> Result<String> {
        let output = run_captured_with_timeout("docker", args, timeout)?;
        if output.success() {
            return Ok(output.stdout);
        }

        let detail = output.stderr.trim();
        if detail.is_empty() {
            Err(DockError::Command(format!(
                "docker {} exited with code {:?}",
                args.first().copied().unwrap_or("?"),
                output.exit_code
            )))
        } else {
            Err(DockError::Command(detail.to_string()))
        }
    }
}

impl Default for CliProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl DaemonProbe for CliProbe {
    fn binary_present(&self) -> bool {
        is_tool_installed("docker")
    }

    fn ping(&self, timeout: Duration) -> Result<()> {
        // Asking for a server-side field forces a daemon round trip; the
        // client-only parts of `docker version` succeed even when the
        // daemon is down.
        let answer = self.query(&["version", "--format", "{{.Server.Os}}"], timeout)?;
        debug!("Daemon answered: {}", answer.trim());
        Ok(())
    }

    fn version_info(&self, timeout: Duration) -> Result<EngineVersion> {
        let line = self.query(&["version", "--format", VERSION_FORMAT], timeout)?;
        parse_version_line(&line)
    }

    fn system_info(&self, timeout: Duration) -> Result<EngineSystemInfo> {
        let line = self.query(&["info", "--format", SYSTEM_FORMAT], timeout)?;
        parse_system_line(&line)
    }
}

fn parse_version_line(line: &str) -> Result<EngineVersion> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    if fields.len() != 4 {
        return Err(DockError::Command(format!(
            "unexpected version output: {}",
            line.trim()
        )));
    }
    Ok(EngineVersion {
        version: fields[0].to_string(),
        api_version: fields[1].to_string(),
        os: fields[2].to_string(),
        arch: fields[3].to_string(),
    })
}

fn parse_system_line(line: &str) -> Result<EngineSystemInfo> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    if fields.len() != 9 {
        return Err(DockError::Command(format!(
            "unexpected info output: {}",
            line.trim()
        )));
    }
    let count = |raw: &str| -> Result<u64> {
        raw.parse()
            .map_err(|_| DockError::Command(format!("unexpected info field: {}", raw)))
    };
    Ok(EngineSystemInfo {
        containers: count(fields[0])?,
        containers_running: count(fields[1])?,
        containers_paused: count(fields[2])?,
        containers_stopped: count(fields[3])?,
        images: count(fields[4])?,
        server_version: fields[5].to_string(),
        storage_driver: fields[6].to_string(),
        memory_bytes: count(fields[7])?,
        cpus: count(fields[8])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_line() {
        let version = parse_version_line("24.0.5\t1.43\tlinux\tarm64\n").unwrap();
        assert_eq!(version.version, "24.0.5");
        assert_eq!(version.api_version, "1.43");
        assert_eq!(version.os, "linux");
        assert_eq!(version.arch, "arm64");
    }

    #[test]
    fn test_parse_version_line_rejects_short_output() {
        assert!(parse_version_line("24.0.5\t1.43\n").is_err());
        assert!(parse_version_line("").is_err());
    }

    #[test]
    fn test_parse_system_line() {
        let info =
            parse_system_line("5\t2\t0\t3\t42\t24.0.5\toverlay2\t8232747008\t4\n").unwrap();
        assert_eq!(info.containers, 5);
        assert_eq!(info.containers_running, 2);
        assert_eq!(info.containers_paused, 0);
        assert_eq!(info.containers_stopped, 3);
        assert_eq!(info.images, 42);
        assert_eq!(info.server_version, "24.0.5");
        assert_eq!(info.storage_driver, "overlay2");
        assert_eq!(info.memory_bytes, 8_232_747_008);
        assert_eq!(info.cpus, 4);
    }

    #[test]
    fn test_parse_system_line_rejects_non_numeric_counter() {
        let line = "five\t2\t0\t3\t42\t24.0.5\toverlay2\t8232747008\t4";
        assert!(parse_system_line(line).is_err());
    }
}

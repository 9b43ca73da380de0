pub use anyhow::bail;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockError {
    Config(String),
    Io(#[from] std::io::Error),
    Command(String),
    Timeout(String),
    Serialization(String),
    Internal(String),
    Interrupted,
    EngineNotInstalled,
    DaemonUnreachable(String),
    RecoveryExhausted(u32),
    RegistryAuth { registry: String },
    Other(#[from] anyhow::Error),
}

impl Display for DockError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DockError::Config(s) => write!(f, "Configuration error: {}", s),
            DockError::Io(e) => write!(f, "I/O error: {}", e),
            DockError::Command(s) => write!(f, "Command failed: {}", s),
            DockError::Timeout(s) => write!(f, "Timed out: {}", s),
            DockError::Serialization(s) => write!(f, "Serialization error: {}", s),
            DockError::Internal(s) => write!(f, "Internal error: {}", s),
            DockError::Interrupted => write!(f, "Interrupted by user"),
            DockError::EngineNotInstalled => {
                write!(f, "Docker is not installed or not on PATH\n\n")?;
                write!(f, "Fix:\n")?;
                write!(f, "  • Install Docker Desktop, OrbStack, or colima\n")?;
                write!(f, "  • Verify: docker version")
            }
            DockError::DaemonUnreachable(detail) => {
                write!(f, "Docker daemon is not responding: {}\n\n", detail)?;
                write!(f, "Fix:\n")?;
                write!(f, "  • Start your Docker runtime, or\n")?;
                write!(f, "  • Run: sudo systemctl start docker\n")?;
                write!(f, "  • Verify: docker ps")
            }
            DockError::RecoveryExhausted(attempts) => {
                write!(f, "Docker did not become ready after {} attempts\n\n", attempts)?;
                write!(f, "Fix:\n")?;
                write!(f, "  • Start your Docker runtime manually\n")?;
                write!(f, "  • Verify: docker ps")
            }
            DockError::RegistryAuth { registry } => {
                write!(f, "Registry authentication failed\n\n")?;
                write!(f, "Fix:\n")?;
                write!(f, "  • Log in: docker login {}\n", registry)?;
                write!(f, "  • Or run: dockhand auth")
            }
            DockError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

impl From<serde_yaml_ng::Error> for DockError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        DockError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for DockError {
    fn from(err: serde_json::Error) -> Self {
        DockError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DockError>;

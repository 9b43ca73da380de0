//! Docker engine integration library.
//!
//! This library owns every interaction with the Docker CLI: daemon health
//! checks with guided recovery, registry error classification, compose file
//! discovery, and the compose project operations the commands drive.

pub mod compose;
pub mod interaction;
pub mod launcher;
pub mod monitor;
pub mod probe;
pub mod registry;

#[cfg(any(test, feature = "test-helpers"))]
pub mod doubles;

// Re-export common types for convenience
pub use compose::{ComposeFile, ComposeProject, ContainerStatus};
pub use interaction::UserInteraction;
pub use launcher::{HostLauncher, RuntimeKind, RuntimeLauncher};
pub use monitor::{EngineStatus, HealthMonitor, RetryPolicy};
pub use probe::{CliProbe, DaemonProbe, EngineSystemInfo, EngineVersion};
pub use registry::{classify, AuthCategory, RegistryFailure};

//! All user-facing message templates, in one place.
//!
//! This module is organized by command area:
//! - `engine` - daemon health, recovery, and wait-loop messages
//! - `compose` - project lifecycle messages (start, stop, build, logs, status)
//! - `registry` - registry authentication messages
//! - `projects` - projects-file management messages
//! - `common` - shared/reusable messages across commands
//!
//! Messages are accessed through the `MESSAGES` constant:
//!
//! ```rust
//! use dockhand_messages::MESSAGES;
//!
//! let msg = MESSAGES.engine.daemon_ready;
//! let msg = MESSAGES.compose.start_header;
//! let msg = MESSAGES.common.cancelled;
//! ```

mod common;
mod compose;
mod engine;
mod projects;
mod registry;

pub use common::{CommonMessages, COMMON_MESSAGES};
pub use compose::{ComposeMessages, COMPOSE_MESSAGES};
pub use engine::{EngineMessages, ENGINE_MESSAGES};
pub use projects::{ProjectsMessages, PROJECTS_MESSAGES};
pub use registry::{RegistryMessages, REGISTRY_MESSAGES};

/// Unified messages struct containing all domain-specific message modules
pub struct Messages {
    pub engine: EngineMessages,
    pub compose: ComposeMessages,
    pub registry: RegistryMessages,
    pub projects: ProjectsMessages,
    pub common: CommonMessages,
}

/// Global messages constant - main entry point for all message templates
pub const MESSAGES: Messages = Messages {
    engine: ENGINE_MESSAGES,
    compose: COMPOSE_MESSAGES,
    registry: REGISTRY_MESSAGES,
    projects: PROJECTS_MESSAGES,
    common: COMMON_MESSAGES,
};

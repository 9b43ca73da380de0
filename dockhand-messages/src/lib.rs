//! dockhand-messages
//!
//! Centralized messaging system for the dockhand CLI.
//! Provides standardized templates for user-facing output, grouped by
//! command area.

pub mod messages;

pub use messages::{Messages, MESSAGES};

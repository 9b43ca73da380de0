//! Configuration layer for dockhand.
//!
//! Holds the project registry (the projects file), the embedded platform
//! recovery profiles, and host OS detection. Everything here is constructed
//! explicitly and passed by reference; there is no ambient global state.

pub mod os;
pub mod platform;
pub mod registry;

pub use os::HostPlatform;
pub use platform::{PlatformCatalog, PlatformProfile, RuntimeGuide, StartupGuide};
pub use registry::ProjectRegistry;

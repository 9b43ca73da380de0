//! Shared context threaded through the command handlers.
//!
//! Everything the handlers need is constructed once here and passed by
//! reference. There are no ambient globals; tests drive the same flows by
//! substituting the collaborators behind the engine's traits.

use std::path::{Path, PathBuf};

use dockhand_cli::msg;
use dockhand_config::{HostPlatform, PlatformCatalog, ProjectRegistry};
use dockhand_core::error::{DockError, Result};
use dockhand_core::{dock_println, CancelToken};
use dockhand_engine::{
    CliProbe, ComposeProject, DaemonProbe, HealthMonitor, HostLauncher, RetryPolicy,
    UserInteraction,
};
use dockhand_messages::messages::MESSAGES;

use crate::terminal::TerminalInteraction;

pub struct AppContext {
    pub registry_path: PathBuf,
    pub registry: ProjectRegistry,
    pub catalog: PlatformCatalog,
    pub platform: HostPlatform,
    pub policy: RetryPolicy,
    pub cancel: CancelToken,
    probe: CliProbe,
    launcher: HostLauncher,
    interaction: TerminalInteraction,
}

impl AppContext {
    /// Loads the projects file (absent file yields an empty registry) and
    /// wires up the engine collaborators.
    pub fn load(registry_path: &Path) -> Result<Self> {
        Ok(Self {
            registry_path: registry_path.to_path_buf(),
            registry: ProjectRegistry::load_or_default(registry_path)?,
            catalog: PlatformCatalog::load_embedded()?,
            platform: HostPlatform::detect(),
            policy: RetryPolicy::default(),
            cancel: CancelToken::new(),
            probe: CliProbe::new(),
            launcher: HostLauncher::new(),
            interaction: TerminalInteraction::new(),
        })
    }

    /// Health monitor borrowing this context's collaborators.
    pub fn monitor(&self) -> HealthMonitor<'_> {
        HealthMonitor::new(
            &self.probe,
            &self.launcher,
            &self.interaction,
            &self.catalog,
            self.platform,
            self.policy,
            &self.cancel,
        )
    }

    pub fn interaction(&self) -> &dyn UserInteraction {
        &self.interaction
    }

    pub fn probe(&self) -> &dyn DaemonProbe {
        &self.probe
    }

    /// Writes the registry back to the projects file.
    pub fn save_registry(&self) -> Result<()> {
        self.registry.save(&self.registry_path)
    }

    /// Resolves a project name to its compose project.
    ///
    /// Unknown names print the known-projects hint before failing, so the
    /// user sees what the registry actually holds.
    pub fn project(&self, name: &str) -> Result<ComposeProject> {
        if !self.registry.contains(name) {
            dock_println!("{}", msg!(MESSAGES.projects.unknown_project, name = name));
            if !self.registry.is_empty() {
                dock_println!(
                    "{}",
                    msg!(
                        MESSAGES.projects.known_projects_hint,
                        names = self.registry.names().join(", ")
                    )
                );
            }
            return Err(DockError::Config(format!("Unknown project '{}'", name)));
        }

        let dir = self.registry.resolve_path(name)?;
        ComposeProject::new(&dir)
    }
}

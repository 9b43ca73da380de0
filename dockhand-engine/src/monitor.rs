//! Daemon health monitoring and guided recovery.
//!
//! Every command that needs the daemon goes through [`HealthMonitor`]:
//! one probe pass, then platform-specific recovery when the daemon is not
//! ready. Recovery on macOS can launch a runtime and wait for the daemon
//! to come up; other platforms get troubleshooting steps and a terminal
//! error. The monitor holds no state between calls beyond the borrowed
//! collaborators, so each command sees a fresh picture of the host.

use std::time::Duration;

use tracing::debug;

use dockhand_cli::msg;
use dockhand_config::{HostPlatform, PlatformCatalog, PlatformProfile};
use dockhand_core::cancel::CancelToken;
use dockhand_core::dock_println;
use dockhand_core::error::{DockError, Result};
use dockhand_messages::messages::MESSAGES;

use crate::interaction::UserInteraction;
use crate::launcher::{RuntimeKind, RuntimeLauncher};
use crate::probe::DaemonProbe;

pub const PING_TIMEOUT: Duration = Duration::from_secs(5);
pub const RETRY_INTERVAL: Duration = Duration::from_secs(5);
pub const MAX_RETRIES: u32 = 12;

/// Snapshot of engine and daemon reachability.
#[derive(Debug, Clone)]
pub struct EngineStatus {
    pub installed: bool,
    pub daemon_reachable: bool,
    pub error_detail: Option<String>,
}

impl EngineStatus {
    pub fn ready(&self) -> bool {
        self.installed && self.daemon_reachable
    }

    fn not_installed() -> Self {
        Self {
            installed: false,
            daemon_reachable: false,
            error_detail: None,
        }
    }

    fn unreachable(detail: String) -> Self {
        Self {
            installed: true,
            daemon_reachable: false,
            error_detail: Some(detail),
        }
    }

    fn reachable() -> Self {
        Self {
            installed: true,
            daemon_reachable: true,
            error_detail: None,
        }
    }
}

/// Bounds for the wait-and-retry loop.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
    pub ping_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_RETRIES,
            interval: RETRY_INTERVAL,
            ping_timeout: PING_TIMEOUT,
        }
    }
}

/// Drives health checks and recovery against borrowed collaborators.
pub struct HealthMonitor<'a> {
    probe: &'a dyn DaemonProbe,
    launcher: &'a dyn RuntimeLauncher,
    interaction: &'a dyn UserInteraction,
    catalog: &'a PlatformCatalog,
    platform: HostPlatform,
    policy: RetryPolicy,
    cancel: &'a CancelToken,
}

impl<'a> HealthMonitor<'a> {
    pub fn new(
        probe: &'a dyn DaemonProbe,
        launcher: &'a dyn RuntimeLauncher,
        interaction: &'a dyn UserInteraction,
        catalog: &'a PlatformCatalog,
        platform: HostPlatform,
        policy: RetryPolicy,
        cancel: &'a CancelToken,
    ) -> Self {
        Self {
            probe,
            launcher,
            interaction,
            catalog,
            platform,
            policy,
            cancel,
        }
    }

    fn profile(&self) -> &PlatformProfile {
        self.catalog.profile(self.platform.catalog_key())
    }

    /// One probe pass. The daemon ping is skipped entirely when the
    /// engine binary is absent.
    pub fn check_status(&self) -> EngineStatus {
        if !self.probe.binary_present() {
            return EngineStatus::not_installed();
        }
        match self.probe.ping(self.policy.ping_timeout) {
            Ok(()) => EngineStatus::reachable(),
            Err(e) => EngineStatus::unreachable(e.to_string()),
        }
    }

    /// Checks the daemon and drives recovery when it is not ready.
    ///
    /// Returns `Ok(())` only once the daemon answers a ping. Recovery can
    /// prompt the user, launch a runtime, and wait, so this may block for
    /// up to `max_attempts * interval`.
    pub fn ensure_ready(&self) -> Result<()> {
        dock_println!("{}", MESSAGES.engine.checking);
        let status = self.check_status();

        if status.ready() {
            dock_println!("{}", MESSAGES.engine.daemon_ready);
            return Ok(());
        }

        if !status.installed {
            dock_println!("{}", MESSAGES.engine.not_installed);
            dock_println!("{}", MESSAGES.engine.install_options_header);
            self.print_bullets(&self.profile().install_options);
            return Err(DockError::EngineNotInstalled);
        }

        let detail = status
            .error_detail
            .unwrap_or_else(|| "no response".to_string());
        self.recover_unreachable(detail)
    }

    /// Recovery for an installed engine whose daemon does not answer.
    ///
    /// macOS offers automatic start, wait-and-retry, or manual
    /// instructions. Windows and Linux print troubleshooting steps and
    /// fail, since those hosts start Docker outside this process.
    pub fn recover_unreachable(&self, detail: String) -> Result<()> {
        dock_println!("{}", MESSAGES.engine.daemon_unreachable);
        dock_println!(
            "{}",
            msg!(
                MESSAGES.engine.daemon_unreachable_detail,
                detail = detail.as_str()
            )
        );
        dock_println!("{}", MESSAGES.engine.troubleshooting_header);
        self.print_bullets(&self.profile().troubleshooting);
        dock_println!();

        match self.platform {
            HostPlatform::MacOs => self.recover_interactive(detail),
            HostPlatform::Windows | HostPlatform::Linux => {
                dock_println!("{}", MESSAGES.engine.manual_required);
                Err(DockError::DaemonUnreachable(detail))
            }
        }
    }

    fn recover_interactive(&self, detail: String) -> Result<()> {
        let options = vec![
            MESSAGES.engine.recovery_option_auto.to_string(),
            MESSAGES.engine.recovery_option_wait.to_string(),
            MESSAGES.engine.recovery_option_manual.to_string(),
        ];
        let choice = self
            .interaction
            .select_one(MESSAGES.engine.recovery_prompt, &options)?;

        match choice {
            0 => self.auto_start(),
            1 => self.wait_for_daemon(),
            _ => {
                self.show_manual_startup();
                Err(DockError::DaemonUnreachable(detail))
            }
        }
    }

    fn auto_start(&self) -> Result<()> {
        let runtime = self.launcher.detect();
        debug!("Selected runtime for automatic start: {}", runtime);
        dock_println!(
            "{}",
            msg!(
                MESSAGES.engine.auto_start_attempting,
                runtime = runtime.to_string()
            )
        );

        if let Err(e) = self.launcher.launch(runtime) {
            dock_println!(
                "{}",
                msg!(
                    MESSAGES.engine.auto_start_failed,
                    runtime = runtime.to_string(),
                    error = e.to_string()
                )
            );
            self.show_runtime_guide(runtime);
            return Err(DockError::DaemonUnreachable(format!(
                "{} must be started manually",
                runtime
            )));
        }

        self.wait_for_daemon()
    }

    fn show_runtime_guide(&self, runtime: RuntimeKind) {
        if let Some(guide) = self.profile().runtimes.get(runtime.guide_key()) {
            dock_println!(
                "{}",
                msg!(
                    MESSAGES.engine.manual_start_header,
                    runtime = runtime.to_string()
                )
            );
            self.print_bullets(&guide.manual_start);
            if !guide.auto_start.is_empty() {
                dock_println!();
                self.print_bullets(&guide.auto_start);
            }
            if !guide.commands.is_empty() {
                dock_println!();
                self.print_bullets(&guide.commands);
            }
        }
    }

    /// Bounded wait for the daemon to come up.
    ///
    /// Sleeps before each probe so a runtime that was just launched gets a
    /// moment to boot, and exits on the first successful ping. The sleep
    /// goes through the cancel token, so cancellation cuts the wait short
    /// instead of stalling through a full interval.
    pub fn wait_for_daemon(&self) -> Result<()> {
        let total = self.policy.max_attempts;
        dock_println!(
            "{}",
            msg!(MESSAGES.engine.wait_header, total = total.to_string())
        );

        for attempt in 1..=total {
            if !self.cancel.wait(self.policy.interval) {
                dock_println!("{}", MESSAGES.engine.wait_cancelled);
                return Err(DockError::Interrupted);
            }

            match self.probe.ping(self.policy.ping_timeout) {
                Ok(()) => {
                    dock_println!("{}", MESSAGES.engine.wait_success);
                    return Ok(());
                }
                Err(e) => {
                    debug!("Ping attempt {}/{} failed: {}", attempt, total, e);
                    self.interaction.progress(&msg!(
                        MESSAGES.engine.wait_attempt,
                        attempt = attempt.to_string(),
                        total = total.to_string()
                    ));
                }
            }
        }

        dock_println!(
            "{}",
            msg!(MESSAGES.engine.wait_exhausted, total = total.to_string())
        );
        self.show_startup_options()?;
        Err(DockError::RecoveryExhausted(total))
    }

    /// Asks how the user wants Docker started next time and prints the
    /// matching steps from the platform profile.
    fn show_startup_options(&self) -> Result<()> {
        let options = vec![
            MESSAGES.engine.startup_option_manual.to_string(),
            MESSAGES.engine.startup_option_auto.to_string(),
        ];
        let choice = self
            .interaction
            .select_one(MESSAGES.engine.startup_prompt, &options)?;

        dock_println!("{}", MESSAGES.engine.startup_steps_header);
        let startup = &self.profile().startup;
        let steps = if choice == 0 {
            &startup.manual
        } else {
            &startup.auto
        };
        self.print_bullets(steps);
        Ok(())
    }

    fn show_manual_startup(&self) {
        dock_println!("{}", MESSAGES.engine.startup_steps_header);
        self.print_bullets(&self.profile().startup.manual);
    }

    fn print_bullets(&self, lines: &[String]) {
        for line in lines {
            dock_println!("{}", msg!(MESSAGES.common.bullet_item, item = line.as_str()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doubles::{ScriptedInteraction, ScriptedLauncher, ScriptedProbe};

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            interval: Duration::from_millis(1),
            ping_timeout: Duration::from_millis(10),
        }
    }

    fn catalog() -> PlatformCatalog {
        PlatformCatalog::load_embedded().expect("embedded profiles should parse")
    }

    #[test]
    fn test_default_policy_bounds() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 12);
        assert_eq!(policy.interval, Duration::from_secs(5));
        assert_eq!(policy.ping_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_absent_engine_skips_the_ping() {
        let probe = ScriptedProbe::absent();
        let launcher = ScriptedLauncher::new(RuntimeKind::DockerDesktop, true);
        let interaction = ScriptedInteraction::new();
        let catalog = catalog();
        let cancel = CancelToken::new();
        let monitor = HealthMonitor::new(
            &probe,
            &launcher,
            &interaction,
            &catalog,
            HostPlatform::MacOs,
            fast_policy(3),
            &cancel,
        );

        let status = monitor.check_status();
        assert!(!status.installed);
        assert!(!status.ready());
        assert_eq!(probe.ping_count(), 0);
    }

    #[test]
    fn test_ensure_ready_passes_on_healthy_daemon() {
        let probe = ScriptedProbe::ready();
        let launcher = ScriptedLauncher::new(RuntimeKind::DockerDesktop, true);
        // No scripted answers: any prompt would fail the test.
        let interaction = ScriptedInteraction::new();
        let catalog = catalog();
        let cancel = CancelToken::new();
        let monitor = HealthMonitor::new(
            &probe,
            &launcher,
            &interaction,
            &catalog,
            HostPlatform::MacOs,
            fast_policy(3),
            &cancel,
        );

        assert!(monitor.ensure_ready().is_ok());
        assert_eq!(probe.ping_count(), 1);
        assert!(launcher.launched().is_empty());
    }

    #[test]
    fn test_ensure_ready_fails_when_engine_missing() {
        let probe = ScriptedProbe::absent();
        let launcher = ScriptedLauncher::new(RuntimeKind::DockerDesktop, true);
        let interaction = ScriptedInteraction::new();
        let catalog = catalog();
        let cancel = CancelToken::new();
        let monitor = HealthMonitor::new(
            &probe,
            &launcher,
            &interaction,
            &catalog,
            HostPlatform::MacOs,
            fast_policy(3),
            &cancel,
        );

        let result = monitor.ensure_ready();
        assert!(matches!(result, Err(DockError::EngineNotInstalled)));
        assert_eq!(probe.ping_count(), 0);
    }

    #[test]
    fn test_wait_exits_on_first_successful_ping() {
        let probe = ScriptedProbe::new(true, vec![false, false, true]);
        let launcher = ScriptedLauncher::new(RuntimeKind::DockerDesktop, true);
        let interaction = ScriptedInteraction::new();
        let catalog = catalog();
        let cancel = CancelToken::new();
        let monitor = HealthMonitor::new(
            &probe,
            &launcher,
            &interaction,
            &catalog,
            HostPlatform::MacOs,
            fast_policy(10),
            &cancel,
        );

        assert!(monitor.wait_for_daemon().is_ok());
        assert_eq!(probe.ping_count(), 3);
        assert_eq!(interaction.progress_seen().len(), 2);
    }

    #[test]
    fn test_wait_succeeds_on_final_attempt() {
        let probe = ScriptedProbe::new(true, vec![false, false, false, true]);
        let launcher = ScriptedLauncher::new(RuntimeKind::DockerDesktop, true);
        let interaction = ScriptedInteraction::new();
        let catalog = catalog();
        let cancel = CancelToken::new();
        let monitor = HealthMonitor::new(
            &probe,
            &launcher,
            &interaction,
            &catalog,
            HostPlatform::MacOs,
            fast_policy(4),
            &cancel,
        );

        assert!(monitor.wait_for_daemon().is_ok());
        assert_eq!(probe.ping_count(), 4);
    }

    #[test]
    fn test_wait_exhaustion_pings_exactly_max_attempts() {
        let probe = ScriptedProbe::down();
        let launcher = ScriptedLauncher::new(RuntimeKind::DockerDesktop, true);
        // Exhaustion asks how to start Docker next time; pick manual.
        let interaction = ScriptedInteraction::with_selections([0]);
        let catalog = catalog();
        let cancel = CancelToken::new();
        let monitor = HealthMonitor::new(
            &probe,
            &launcher,
            &interaction,
            &catalog,
            HostPlatform::MacOs,
            fast_policy(3),
            &cancel,
        );

        let result = monitor.wait_for_daemon();
        assert!(matches!(result, Err(DockError::RecoveryExhausted(3))));
        assert_eq!(probe.ping_count(), 3);
    }

    #[test]
    fn test_cancelled_wait_stops_before_pinging() {
        let probe = ScriptedProbe::down();
        let launcher = ScriptedLauncher::new(RuntimeKind::DockerDesktop, true);
        let interaction = ScriptedInteraction::new();
        let catalog = catalog();
        let cancel = CancelToken::new();
        cancel.cancel();
        let monitor = HealthMonitor::new(
            &probe,
            &launcher,
            &interaction,
            &catalog,
            HostPlatform::MacOs,
            fast_policy(5),
            &cancel,
        );

        let result = monitor.wait_for_daemon();
        assert!(matches!(result, Err(DockError::Interrupted)));
        assert_eq!(probe.ping_count(), 0);
    }

    #[test]
    fn test_macos_auto_start_launches_detected_runtime() {
        // First ping fails during the status check, second succeeds once
        // the runtime was launched.
        let probe = ScriptedProbe::new(true, vec![false, true]);
        let launcher = ScriptedLauncher::new(RuntimeKind::OrbStack, true);
        let interaction = ScriptedInteraction::with_selections([0]);
        let catalog = catalog();
        let cancel = CancelToken::new();
        let monitor = HealthMonitor::new(
            &probe,
            &launcher,
            &interaction,
            &catalog,
            HostPlatform::MacOs,
            fast_policy(5),
            &cancel,
        );

        assert!(monitor.ensure_ready().is_ok());
        assert_eq!(launcher.launched(), vec![RuntimeKind::OrbStack]);
        assert_eq!(probe.ping_count(), 2);
    }

    #[test]
    fn test_macos_launch_failure_is_terminal() {
        let probe = ScriptedProbe::down();
        let launcher = ScriptedLauncher::new(RuntimeKind::Colima, false);
        let interaction = ScriptedInteraction::with_selections([0]);
        let catalog = catalog();
        let cancel = CancelToken::new();
        let monitor = HealthMonitor::new(
            &probe,
            &launcher,
            &interaction,
            &catalog,
            HostPlatform::MacOs,
            fast_policy(5),
            &cancel,
        );

        let result = monitor.ensure_ready();
        assert!(matches!(result, Err(DockError::DaemonUnreachable(_))));
        assert_eq!(launcher.launched(), vec![RuntimeKind::Colima]);
        // Only the initial status check pinged; the wait loop never ran.
        assert_eq!(probe.ping_count(), 1);
    }

    #[test]
    fn test_manual_choice_fails_after_instructions() {
        let probe = ScriptedProbe::down();
        let launcher = ScriptedLauncher::new(RuntimeKind::DockerDesktop, true);
        let interaction = ScriptedInteraction::with_selections([2]);
        let catalog = catalog();
        let cancel = CancelToken::new();
        let monitor = HealthMonitor::new(
            &probe,
            &launcher,
            &interaction,
            &catalog,
            HostPlatform::MacOs,
            fast_policy(5),
            &cancel,
        );

        let result = monitor.ensure_ready();
        assert!(matches!(result, Err(DockError::DaemonUnreachable(_))));
        assert!(launcher.launched().is_empty());
    }

    #[test]
    fn test_windows_recovery_never_prompts() {
        let probe = ScriptedProbe::down();
        let launcher = ScriptedLauncher::new(RuntimeKind::DockerDesktop, true);
        // No scripted answers: a prompt would surface as Interrupted, not
        // DaemonUnreachable.
        let interaction = ScriptedInteraction::new();
        let catalog = catalog();
        let cancel = CancelToken::new();
        let monitor = HealthMonitor::new(
            &probe,
            &launcher,
            &interaction,
            &catalog,
            HostPlatform::Windows,
            fast_policy(3),
            &cancel,
        );

        let result = monitor.ensure_ready();
        assert!(matches!(result, Err(DockError::DaemonUnreachable(_))));
        assert!(launcher.launched().is_empty());
    }

    #[test]
    fn test_linux_recovery_is_terminal() {
        let probe = ScriptedProbe::down();
        let launcher = ScriptedLauncher::new(RuntimeKind::DockerDesktop, true);
        let interaction = ScriptedInteraction::new();
        let catalog = catalog();
        let cancel = CancelToken::new();
        let monitor = HealthMonitor::new(
            &probe,
            &launcher,
            &interaction,
            &catalog,
            HostPlatform::Linux,
            fast_policy(3),
            &cancel,
        );

        let result = monitor.ensure_ready();
        assert!(matches!(result, Err(DockError::DaemonUnreachable(_))));
    }

    #[test]
    fn test_wait_recovery_choice_runs_the_wait_loop() {
        let probe = ScriptedProbe::new(true, vec![false, true]);
        let launcher = ScriptedLauncher::new(RuntimeKind::DockerDesktop, true);
        // Option 1 is wait-and-retry.
        let interaction = ScriptedInteraction::with_selections([1]);
        let catalog = catalog();
        let cancel = CancelToken::new();
        let monitor = HealthMonitor::new(
            &probe,
            &launcher,
            &interaction,
            &catalog,
            HostPlatform::MacOs,
            fast_policy(5),
            &cancel,
        );

        assert!(monitor.ensure_ready().is_ok());
        assert!(launcher.launched().is_empty());
        assert_eq!(probe.ping_count(), 2);
    }
}

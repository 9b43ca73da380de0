//! Scripted doubles for exercising recovery flows without a host engine.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use dockhand_core::error::{DockError, Result};

use crate::interaction::UserInteraction;
use crate::launcher::{RuntimeKind, RuntimeLauncher};
use crate::probe::{DaemonProbe, EngineSystemInfo, EngineVersion};

/// Probe whose answers are scripted per call.
pub struct ScriptedProbe {
    installed: bool,
    // Outcome per ping; the last entry repeats once the script runs out.
    ping_script: Vec<bool>,
    ping_calls: AtomicUsize,
    version: Option<EngineVersion>,
    system: Option<EngineSystemInfo>,
}

impl ScriptedProbe {
    pub fn new(installed: bool, ping_script: Vec<bool>) -> Self {
        Self {
            installed,
            ping_script,
            ping_calls: AtomicUsize::new(0),
            version: None,
            system: None,
        }
    }

    /// Engine installed, daemon answering.
    pub fn ready() -> Self {
        Self::new(true, vec![true])
    }

    /// Engine installed, daemon never answering.
    pub fn down() -> Self {
        Self::new(true, vec![false])
    }

    /// Engine binary not on PATH.
    pub fn absent() -> Self {
        Self::new(false, Vec::new())
    }

    /// Attaches canned answers for the detail queries.
    pub fn with_details(mut self, version: EngineVersion, system: EngineSystemInfo) -> Self {
        self.version = Some(version);
        self.system = Some(system);
        self
    }

    pub fn ping_count(&self) -> usize {
        self.ping_calls.load(Ordering::SeqCst)
    }
}

impl DaemonProbe for ScriptedProbe {
    fn binary_present(&self) -> bool {
        self.installed
    }

    fn ping(&self, _timeout: Duration) -> Result<()> {
        let call = self.ping_calls.fetch_add(1, Ordering::SeqCst);
        let answered = self
            .ping_script
            .get(call)
            .or_else(|| self.ping_script.last())
            .copied()
            .unwrap_or(false);
        if answered {
            Ok(())
        } else {
            Err(DockError::Command(
                "Cannot connect to the Docker daemon".to_string(),
            ))
        }
    }

    fn version_info(&self, _timeout: Duration) -> Result<EngineVersion> {
        self.version
            .clone()
            .ok_or_else(|| DockError::Command("no version facts scripted".to_string()))
    }

    fn system_info(&self, _timeout: Duration) -> Result<EngineSystemInfo> {
        self.system
            .clone()
            .ok_or_else(|| DockError::Command("no system facts scripted".to_string()))
    }
}

/// Launcher that records launch requests and returns a scripted outcome.
pub struct ScriptedLauncher {
    runtime: RuntimeKind,
    succeed: bool,
    launches: Mutex<Vec<RuntimeKind>>,
}

impl ScriptedLauncher {
    pub fn new(runtime: RuntimeKind, succeed: bool) -> Self {
        Self {
            runtime,
            succeed,
            launches: Mutex::new(Vec::new()),
        }
    }

    pub fn launched(&self) -> Vec<RuntimeKind> {
        self.launches
            .lock()
            .expect("Mutex should not be poisoned")
            .clone()
    }
}

impl RuntimeLauncher for ScriptedLauncher {
    fn detect(&self) -> RuntimeKind {
        self.runtime
    }

    fn launch(&self, runtime: RuntimeKind) -> Result<()> {
        self.launches
            .lock()
            .expect("Mutex should not be poisoned")
            .push(runtime);
        if self.succeed {
            Ok(())
        } else {
            Err(DockError::Command("launch request refused".to_string()))
        }
    }
}

/// Interaction double that replays queued answers and records progress
/// lines. An empty selection queue makes any prompt fail, which lets
/// tests assert a flow never asked the user anything.
pub struct ScriptedInteraction {
    selections: Mutex<VecDeque<usize>>,
    confirmations: Mutex<VecDeque<bool>>,
    progress_lines: Mutex<Vec<String>>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self {
            selections: Mutex::new(VecDeque::new()),
            confirmations: Mutex::new(VecDeque::new()),
            progress_lines: Mutex::new(Vec::new()),
        }
    }

    pub fn with_selections(selections: impl IntoIterator<Item = usize>) -> Self {
        let scripted = Self::new();
        scripted
            .selections
            .lock()
            .expect("Mutex should not be poisoned")
            .extend(selections);
        scripted
    }

    pub fn queue_confirm(&self, answer: bool) {
        self.confirmations
            .lock()
            .expect("Mutex should not be poisoned")
            .push_back(answer);
    }

    pub fn progress_seen(&self) -> Vec<String> {
        self.progress_lines
            .lock()
            .expect("Mutex should not be poisoned")
            .clone()
    }
}

impl Default for ScriptedInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInteraction for ScriptedInteraction {
    fn select_one(&self, _prompt: &str, options: &[String]) -> Result<usize> {
        let next = self
            .selections
            .lock()
            .expect("Mutex should not be poisoned")
            .pop_front();
        match next {
            Some(index) if index < options.len() => Ok(index),
            Some(index) => Err(DockError::Internal(format!(
                "scripted selection {} out of range for {} options",
                index,
                options.len()
            ))),
            None => Err(DockError::Interrupted),
        }
    }

    fn confirm(&self, _prompt: &str, default: bool) -> Result<bool> {
        Ok(self
            .confirmations
            .lock()
            .expect("Mutex should not be poisoned")
            .pop_front()
            .unwrap_or(default))
    }

    fn progress(&self, message: &str) {
        self.progress_lines
            .lock()
            .expect("Mutex should not be poisoned")
            .push(message.to_string());
    }
}

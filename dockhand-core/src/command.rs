// Standard library
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;
use std::thread;
use std::time::{Duration, Instant};

// External crates
use duct::cmd;
use tracing::debug;
use which::which;

// Internal imports
use crate::error::{DockError, Result};

/// Captured result of a finished subprocess.
///
/// Both streams are captured so callers can match error patterns against
/// the full transcript regardless of which stream the tool wrote to.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Stdout followed by stderr, for pattern matching over the whole transcript.
    pub fn combined(&self) -> String {
        let mut text = String::with_capacity(self.stdout.len() + self.stderr.len() + 1);
        text.push_str(&self.stdout);
        if !self.stdout.is_empty() && !self.stderr.is_empty() {
            text.push('\n');
        }
        text.push_str(&self.stderr);
        text
    }
}

fn render_command<A: AsRef<OsStr>>(program: &str, args: &[A]) -> String {
    format!(
        "{} {}",
        program,
        args.iter()
            .map(|a| a.as_ref().to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    )
}

/// Runs a command to completion, capturing both output streams.
///
/// Non-zero exit codes are returned in the output, not as errors; callers
/// decide how to classify failures.
pub fn run_captured<A: AsRef<OsStr>>(
    program: &str,
    args: &[A],
    dir: Option<&Path>,
) -> Result<CommandOutput> {
    let full_command = render_command(program, args);
    debug!("Executing: {}", full_command);

    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = dir {
        command.current_dir(dir);
    }

    let output = command
        .output()
        .map_err(|e| DockError::Command(format!("Failed to execute '{}': {}", full_command, e)))?;

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Runs a command with both streams captured, killing it when the timeout
/// elapses before it finishes.
pub fn run_captured_with_timeout<A: AsRef<OsStr>>(
    program: &str,
    args: &[A],
    timeout: Duration,
) -> Result<CommandOutput> {
    let full_command = render_command(program, args);
    debug!("Executing with {:?} timeout: {}", timeout, full_command);

    let handle = cmd(program, args)
        .stdout_capture()
        .stderr_capture()
        .unchecked()
        .start()
        .map_err(|e| {
            DockError::Internal(format!("Failed to start command '{}': {}", full_command, e))
        })?;

    let start = Instant::now();
    loop {
        if start.elapsed() >= timeout {
            let _ = handle.kill();
            return Err(DockError::Timeout(format!(
                "Command timed out after {}s: {}",
                timeout.as_secs(),
                full_command
            )));
        }

        match handle.try_wait() {
            Ok(Some(output)) => {
                return Ok(CommandOutput {
                    exit_code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                });
            }
            Ok(None) => {
                thread::sleep(Duration::from_millis(50));
            }
            Err(e) => {
                return Err(DockError::Internal(format!(
                    "Error waiting for command '{}': {}",
                    full_command, e
                )));
            }
        }
    }
}

/// Runs a command with the given bytes piped to its stdin, capturing both
/// output streams.
///
/// Use this for tools that read secrets from stdin, like
/// `docker login --password-stdin`.
pub fn run_captured_with_input<A: AsRef<OsStr>>(
    program: &str,
    args: &[A],
    input: &[u8],
) -> Result<CommandOutput> {
    let full_command = render_command(program, args);
    debug!("Executing with piped stdin: {}", full_command);

    let output = cmd(program, args)
        .stdin_bytes(input.to_vec())
        .stdout_capture()
        .stderr_capture()
        .unchecked()
        .run()
        .map_err(|e| DockError::Command(format!("Failed to execute '{}': {}", full_command, e)))?;

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Runs a command with stdio inherited from the parent.
///
/// Use this for long-running commands where the user watches the output
/// directly, like attached compose runs or followed logs.
pub fn run_visible<A: AsRef<OsStr>>(program: &str, args: &[A], dir: Option<&Path>) -> Result<()> {
    let full_command = render_command(program, args);
    debug!("Executing (visible): {}", full_command);

    let mut expression = cmd(program, args).unchecked();
    if let Some(dir) = dir {
        expression = expression.dir(dir);
    }

    let output = expression
        .run()
        .map_err(|e| DockError::Command(format!("Failed to execute '{}': {}", full_command, e)))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(DockError::Command(format!(
            "Command failed with exit code {:?}: {}",
            output.status.code(),
            full_command
        )))
    }
}

/// Checks if a command-line tool is available in the system's PATH.
pub fn is_tool_installed(tool_name: &str) -> bool {
    which(tool_name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_joins_both_streams() {
        let output = CommandOutput {
            exit_code: Some(1),
            stdout: "pulling image".into(),
            stderr: "unauthorized: authentication required".into(),
        };
        let combined = output.combined();
        assert!(combined.contains("pulling image"));
        assert!(combined.contains("unauthorized"));
    }

    #[test]
    fn test_combined_skips_separator_when_one_stream_empty() {
        let output = CommandOutput {
            exit_code: Some(0),
            stdout: String::new(),
            stderr: "warning only".into(),
        };
        assert_eq!(output.combined(), "warning only");
    }

    #[test]
    fn test_success_requires_zero_exit() {
        let ok = CommandOutput {
            exit_code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        };
        let failed = CommandOutput {
            exit_code: Some(125),
            stdout: String::new(),
            stderr: String::new(),
        };
        let killed = CommandOutput {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }

    #[test]
    fn test_render_command_joins_args() {
        let rendered = render_command("docker", &["compose", "-f", "compose.yaml", "up"]);
        assert_eq!(rendered, "docker compose -f compose.yaml up");
    }

    #[test]
    #[cfg(unix)]
    fn test_run_captured_with_input_pipes_stdin() {
        let output = run_captured_with_input("cat", &[] as &[&str], b"secret-token\n")
            .expect("cat should run");
        assert!(output.success());
        assert_eq!(output.stdout, "secret-token\n");
    }
}

//! Compose file discovery and project operations.
//!
//! A [`ComposeProject`] wraps a project directory and its discovered
//! compose file and exposes the lifecycle operations as `docker compose`
//! subprocess runs. Most operations run captured so failures can be
//! classified against the registry error patterns; attached runs and log
//! following stream to the terminal instead.

use std::path::{Path, PathBuf};

use tracing::debug;

use dockhand_cli::msg;
use dockhand_core::command::{run_captured, run_visible, CommandOutput};
use dockhand_core::dock_println;
use dockhand_core::error::{DockError, Result};
use dockhand_messages::messages::MESSAGES;

use crate::registry::{classify, RegistryFailure};

/// Compose file names in discovery order; the modern names win.
const COMPOSE_CANDIDATES: [&str; 4] = [
    "compose.yaml",
    "compose.yml",
    "docker-compose.yaml",
    "docker-compose.yml",
];

const OVERRIDE_CANDIDATES: [&str; 4] = [
    "compose.override.yaml",
    "compose.override.yml",
    "docker-compose.override.yaml",
    "docker-compose.override.yml",
];

/// `docker ps` format with one tab-separated container per line.
const STATUS_FORMAT: &str = "{{.Names}}\t{{.Label \"com.docker.compose.service\"}}\t{{.ID}}\t{{.State}}\t{{.Status}}\t{{.Image}}\t{{.Ports}}";

/// A discovered compose file.
#[derive(Debug, Clone)]
pub struct ComposeFile {
    path: PathBuf,
}

impl ComposeFile {
    /// Finds the project's compose file, trying the candidate names in
    /// order.
    pub fn find(dir: &Path) -> Result<Self> {
        for candidate in COMPOSE_CANDIDATES {
            let path = dir.join(candidate);
            if path.is_file() {
                debug!("Using compose file {}", path.display());
                return Ok(Self { path });
            }
        }
        Err(DockError::Config(format!(
            "No compose file found in {} (looked for {})",
            dir.display(),
            COMPOSE_CANDIDATES.join(", ")
        )))
    }

    /// Whether any compose candidate exists in `dir`.
    pub fn exists_in(dir: &Path) -> bool {
        COMPOSE_CANDIDATES.iter().any(|name| dir.join(name).is_file())
    }

    /// Override files present in `dir`, by file name.
    pub fn overrides(dir: &Path) -> Vec<String> {
        OVERRIDE_CANDIDATES
            .iter()
            .filter(|name| dir.join(name).is_file())
            .map(|name| name.to_string())
            .collect()
    }

    pub fn candidate_names() -> &'static [&'static str] {
        &COMPOSE_CANDIDATES
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Builds `docker compose -f <file> <subcommand> [extra...]` argv.
    pub fn command_args(&self, subcommand: &str, extra: &[&str]) -> Result<Vec<String>> {
        let path = self.path.to_str().ok_or_else(|| {
            DockError::Internal(format!(
                "Compose file path '{}' contains invalid UTF-8 and cannot be passed to docker",
                self.path.display()
            ))
        })?;

        let mut args = vec![
            "compose".to_string(),
            "-f".to_string(),
            path.to_string(),
            subcommand.to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Ok(args)
    }
}

/// One container row from `docker ps`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerStatus {
    pub name: String,
    pub service: String,
    pub id: String,
    pub state: String,
    pub status: String,
    pub image: String,
    pub ports: String,
}

impl ContainerStatus {
    pub fn is_running(&self) -> bool {
        self.state == "running"
    }

    /// Exit codes that mean the container failed rather than being
    /// stopped deliberately.
    pub fn exited_with_error(&self) -> bool {
        ["Exited (1)", "Exited (125)", "Exited (127)"]
            .iter()
            .any(|marker| self.status.contains(marker))
    }
}

/// A project directory with a discovered compose file.
pub struct ComposeProject {
    dir: PathBuf,
    file: ComposeFile,
}

impl ComposeProject {
    pub fn new(dir: &Path) -> Result<Self> {
        let file = ComposeFile::find(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            file,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file(&self) -> &ComposeFile {
        &self.file
    }

    /// Project name as compose derives it, for label filters.
    fn compose_name(&self) -> String {
        self.dir
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }

    /// `docker compose up`. Detached runs are captured and classified;
    /// attached runs stream to the terminal until interrupted.
    pub fn up(&self, detach: bool, remove_orphans: bool) -> Result<()> {
        let mut extra: Vec<&str> = Vec::new();
        if detach {
            extra.push("-d");
        }
        if remove_orphans {
            extra.push("--remove-orphans");
        }
        let args = self.file.command_args("up", &extra)?;
        if detach {
            self.run_classified("up", &args)
        } else {
            run_visible("docker", &args, Some(&self.dir))
        }
    }

    /// `docker compose down`, optionally removing volumes and locally
    /// built images.
    pub fn down(&self, remove_volumes: bool, remove_images: bool) -> Result<()> {
        let mut extra: Vec<&str> = Vec::new();
        if remove_volumes {
            extra.push("-v");
        }
        if remove_images {
            extra.push("--rmi");
            extra.push("local");
        }
        let args = self.file.command_args("down", &extra)?;
        self.run_classified("down", &args)
    }

    pub fn restart(&self) -> Result<()> {
        let args = self.file.command_args("restart", &[])?;
        self.run_classified("restart", &args)
    }

    pub fn pause(&self) -> Result<()> {
        let args = self.file.command_args("pause", &[])?;
        self.run_classified("pause", &args)
    }

    pub fn unpause(&self) -> Result<()> {
        let args = self.file.command_args("unpause", &[])?;
        self.run_classified("unpause", &args)
    }

    pub fn pull(&self) -> Result<()> {
        let args = self.file.command_args("pull", &[])?;
        self.run_classified("pull", &args)
    }

    pub fn build(&self, no_cache: bool) -> Result<()> {
        let mut extra: Vec<&str> = Vec::new();
        if no_cache {
            extra.push("--no-cache");
        }
        let args = self.file.command_args("build", &extra)?;
        self.run_classified("build", &args)
    }

    /// Streams logs to the terminal, optionally limited to `services` and
    /// optionally following.
    pub fn logs(&self, services: &[String], follow: bool) -> Result<()> {
        let mut extra: Vec<&str> = Vec::new();
        if follow {
            extra.push("-f");
        }
        extra.extend(services.iter().map(String::as_str));
        let args = self.file.command_args("logs", &extra)?;
        run_visible("docker", &args, Some(&self.dir))
    }

    /// All containers belonging to this project, including stopped ones.
    pub fn status(&self) -> Result<Vec<ContainerStatus>> {
        let filter = format!("label=com.docker.compose.project={}", self.compose_name());
        let output = run_captured(
            "docker",
            &[
                "ps",
                "-a",
                "--filter",
                filter.as_str(),
                "--format",
                STATUS_FORMAT,
            ],
            Some(&self.dir),
        )?;

        if !output.success() {
            return Err(DockError::Command(format!(
                "docker ps: {}",
                summarize_failure(&output)
            )));
        }
        Ok(parse_status_lines(&output.stdout))
    }

    fn run_classified(&self, subcommand: &str, args: &[String]) -> Result<()> {
        let output = run_captured("docker", args, Some(&self.dir))?;
        if output.success() {
            debug!("docker compose {} finished", subcommand);
            return Ok(());
        }
        Err(classified_error(subcommand, &output))
    }
}

/// Turns a failed compose run into the right error. Registry failures are
/// reported with their remediation steps and become
/// [`DockError::RegistryAuth`]; anything else propagates as a plain command
/// failure carrying the last stderr line.
fn classified_error(subcommand: &str, output: &CommandOutput) -> DockError {
    let transcript = output.combined();
    if let Some(failure) = classify(&transcript) {
        report_registry_failure(&failure);
        return DockError::RegistryAuth {
            registry: failure.login_host(),
        };
    }
    DockError::Command(format!(
        "docker compose {}: {}",
        subcommand,
        summarize_failure(output)
    ))
}

/// Prints the classified failure with its remediation steps.
fn report_registry_failure(failure: &RegistryFailure) {
    dock_println!(
        "{}",
        msg!(
            MESSAGES.registry.issue_detected,
            category = failure.category.label()
        )
    );
    if let Some(registry) = &failure.registry {
        dock_println!(
            "{}",
            msg!(MESSAGES.registry.registry_line, registry = registry.as_str())
        );
    }
    if let Some(image) = &failure.image {
        dock_println!("{}", msg!(MESSAGES.registry.image_line, image = image.as_str()));
    }
    dock_println!("{}", MESSAGES.registry.remediation_header);
    for (index, fix) in failure.remediations().iter().enumerate() {
        dock_println!(
            "{}",
            msg!(
                MESSAGES.registry.remediation_item,
                step = (index + 1).to_string(),
                fix = fix.as_str()
            )
        );
    }
    dock_println!();
    dock_println!("{}", MESSAGES.registry.skip_hint);
}

/// Last non-empty stderr line, or the exit code when stderr was silent.
fn summarize_failure(output: &CommandOutput) -> String {
    output
        .stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.to_string())
        .unwrap_or_else(|| match output.exit_code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        })
}

fn parse_status_lines(text: &str) -> Vec<ContainerStatus> {
    text.lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() < 7 {
                return None;
            }
            let service = if fields[1].is_empty() {
                "unknown"
            } else {
                fields[1]
            };
            let id = fields[2];
            let id = if id.len() > 12 { &id[..12] } else { id };
            Some(ContainerStatus {
                name: fields[0].to_string(),
                service: service.to_string(),
                id: id.to_string(),
                state: fields[3].to_string(),
                status: fields[4].to_string(),
                image: fields[5].to_string(),
                ports: fields[6].to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn dir_with(files: &[&str]) -> TempDir {
        let dir = TempDir::new().expect("tempdir");
        for name in files {
            fs::write(dir.path().join(name), "services: {}\n").expect("write compose file");
        }
        dir
    }

    #[test]
    fn test_find_prefers_modern_name() {
        let dir = dir_with(&["docker-compose.yml", "compose.yaml"]);
        let file = ComposeFile::find(dir.path()).expect("file should be found");
        assert!(file.path().ends_with("compose.yaml"));
    }

    #[test]
    fn test_find_falls_back_through_candidates() {
        let dir = dir_with(&["docker-compose.yml"]);
        let file = ComposeFile::find(dir.path()).expect("file should be found");
        assert!(file.path().ends_with("docker-compose.yml"));
    }

    #[test]
    fn test_find_error_lists_candidates() {
        let dir = dir_with(&[]);
        let err = ComposeFile::find(dir.path()).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("compose.yaml"));
        assert!(text.contains("docker-compose.yml"));
    }

    #[test]
    fn test_overrides_are_reported() {
        let dir = dir_with(&["compose.yaml", "compose.override.yaml"]);
        assert_eq!(
            ComposeFile::overrides(dir.path()),
            vec!["compose.override.yaml".to_string()]
        );
        assert!(ComposeFile::exists_in(dir.path()));
    }

    #[test]
    fn test_command_args_shape() {
        let dir = dir_with(&["compose.yaml"]);
        let file = ComposeFile::find(dir.path()).expect("file should be found");
        let args = file
            .command_args("up", &["-d", "--remove-orphans"])
            .expect("args should build");

        assert_eq!(args[0], "compose");
        assert_eq!(args[1], "-f");
        assert!(args[2].ends_with("compose.yaml"));
        assert_eq!(args[3], "up");
        assert_eq!(args[4], "-d");
        assert_eq!(args[5], "--remove-orphans");
    }

    #[test]
    fn test_project_requires_compose_file() {
        let dir = dir_with(&[]);
        assert!(ComposeProject::new(dir.path()).is_err());

        let dir = dir_with(&["compose.yml"]);
        let project = ComposeProject::new(dir.path()).expect("project should open");
        assert_eq!(project.dir(), dir.path());
    }

    #[test]
    fn test_compose_name_is_lowercased_dir_name() {
        let parent = TempDir::new().expect("tempdir");
        let dir = parent.path().join("MyApp");
        fs::create_dir(&dir).expect("create project dir");
        fs::write(dir.join("compose.yaml"), "services: {}\n").expect("write compose file");

        let project = ComposeProject::new(&dir).expect("project should open");
        assert_eq!(project.compose_name(), "myapp");
    }

    #[test]
    fn test_parse_status_lines() {
        let text = "myapp-web-1\tweb\tabc123def456789\trunning\tUp 2 hours\tnginx:1.27\t0.0.0.0:8080->80/tcp\n\
                    myapp-db-1\t\tdeadbeef0000\texited\tExited (1) 5 minutes ago\tpostgres:16\t\n";
        let statuses = parse_status_lines(text);
        assert_eq!(statuses.len(), 2);

        let web = &statuses[0];
        assert_eq!(web.service, "web");
        assert_eq!(web.id, "abc123def456");
        assert!(web.is_running());
        assert!(!web.exited_with_error());

        let db = &statuses[1];
        assert_eq!(db.service, "unknown");
        assert!(!db.is_running());
        assert!(db.exited_with_error());
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let statuses = parse_status_lines("not a container line\n\n");
        assert!(statuses.is_empty());
    }

    #[test]
    fn test_clean_exit_is_not_an_error() {
        let status = ContainerStatus {
            name: "myapp-worker-1".to_string(),
            service: "worker".to_string(),
            id: "0123456789ab".to_string(),
            state: "exited".to_string(),
            status: "Exited (0) 2 minutes ago".to_string(),
            image: "myapp-worker".to_string(),
            ports: String::new(),
        };
        assert!(!status.exited_with_error());
    }

    #[test]
    fn test_classified_error_maps_registry_failures() {
        let output = CommandOutput {
            exit_code: Some(18),
            stdout: String::new(),
            stderr: "error from registry.gitlab.com: HTTP Basic: Access denied".to_string(),
        };
        let err = classified_error("pull", &output);
        assert!(matches!(
            err,
            DockError::RegistryAuth { ref registry } if registry == "registry.gitlab.com"
        ));
    }

    #[test]
    fn test_classified_error_keeps_plain_failures_as_command_errors() {
        let output = CommandOutput {
            exit_code: Some(1),
            stdout: String::new(),
            stderr: "network bridge already exists\n".to_string(),
        };
        let err = classified_error("up", &output);
        match err {
            DockError::Command(text) => {
                assert!(text.contains("docker compose up"));
                assert!(text.contains("network bridge already exists"));
            }
            other => panic!("expected a command error, got {other:?}"),
        }
    }

    #[test]
    fn test_summarize_failure_takes_last_stderr_line() {
        let output = CommandOutput {
            exit_code: Some(18),
            stdout: String::new(),
            stderr: "first line\n\nError response from daemon: pull failed\n".to_string(),
        };
        assert_eq!(
            summarize_failure(&output),
            "Error response from daemon: pull failed"
        );

        let silent = CommandOutput {
            exit_code: Some(18),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert_eq!(summarize_failure(&silent), "exit code 18");

        let killed = CommandOutput {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert_eq!(summarize_failure(&killed), "terminated by signal");
    }
}

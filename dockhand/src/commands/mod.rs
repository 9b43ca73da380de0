// Command handlers for dockhand

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, shells};
use tracing::debug;

use dockhand_core::error::{DockError, Result};
use dockhand_core::{dock_error, dock_println};

use crate::cli::{Args, Command};
use crate::context::AppContext;

pub mod auth;
pub mod health;
pub mod interactive;
pub mod list;
pub mod manage;
pub mod ops;
pub mod status;

/// Main command dispatcher
pub fn execute_command(args: Args) -> Result<()> {
    match &args.command {
        // Completions never touch the projects file.
        Some(Command::Completion { shell }) => {
            debug!("Generating shell completions for: {}", shell);
            handle_completion(shell)
        }
        _ => handle_project_command(args),
    }
}

/// Commands that operate on the projects file and the Docker engine.
fn handle_project_command(args: Args) -> Result<()> {
    let mut ctx = AppContext::load(&args.projects_file)?;

    match args.command {
        None => {
            debug!("No subcommand given; entering interactive start flow");
            interactive::handle_root(&mut ctx)
        }
        Some(Command::Start {
            project,
            detach,
            remove_orphans,
        }) => {
            debug!("Handling start command");
            ops::handle_start(&ctx, &project, detach, remove_orphans)
        }
        Some(Command::Stop {
            project,
            volumes,
            rmi,
        }) => {
            debug!("Handling stop command");
            ops::handle_stop(&ctx, &project, volumes, rmi)
        }
        Some(Command::Restart { project }) => {
            debug!("Handling restart command");
            ops::handle_restart(&ctx, &project)
        }
        Some(Command::Pause { project }) => {
            debug!("Handling pause command");
            ops::handle_pause(&ctx, &project)
        }
        Some(Command::Unpause { project }) => {
            debug!("Handling unpause command");
            ops::handle_unpause(&ctx, &project)
        }
        Some(Command::Build { project, no_cache }) => {
            debug!("Handling build command");
            ops::handle_build(&ctx, &project, no_cache)
        }
        Some(Command::Pull { project }) => {
            debug!("Handling pull command");
            ops::handle_pull(&ctx, &project)
        }
        Some(Command::Logs {
            project,
            services,
            follow,
        }) => {
            debug!("Handling logs command");
            ops::handle_logs(&ctx, &project, &services, follow)
        }
        Some(Command::List) => {
            debug!("Handling list command");
            list::handle_list(&ctx)
        }
        Some(Command::Status { project }) => {
            debug!("Handling status command");
            status::handle_status(&ctx, project.as_deref())
        }
        Some(Command::Health { project }) => {
            debug!("Handling health command");
            health::handle_health(&ctx, project.as_deref())
        }
        Some(Command::Auth) => {
            debug!("Handling auth command");
            auth::handle_auth(&ctx)
        }
        Some(Command::Manage) => {
            debug!("Handling manage command");
            manage::handle_manage(&mut ctx)
        }
        Some(cmd) => {
            dock_error!(
                "Command {:?} should have been handled in an earlier match statement",
                cmd
            );
            Err(DockError::Internal(format!("Command {cmd:?} not handled")))
        }
    }
}

/// Generates completions for the given shell on stdout.
fn handle_completion(shell: &str) -> Result<()> {
    let mut cmd = Args::command();

    match shell.to_lowercase().as_str() {
        "bash" => {
            generate(shells::Bash, &mut cmd, "dockhand", &mut io::stdout());
            Ok(())
        }
        "zsh" => {
            generate(shells::Zsh, &mut cmd, "dockhand", &mut io::stdout());
            Ok(())
        }
        "fish" => {
            generate(shells::Fish, &mut cmd, "dockhand", &mut io::stdout());
            Ok(())
        }
        "powershell" => {
            generate(shells::PowerShell, &mut cmd, "dockhand", &mut io::stdout());
            Ok(())
        }
        _ => {
            dock_println!(
                "Unsupported shell: {}. Supported shells: bash, zsh, fish, powershell",
                shell
            );
            Err(DockError::Config(format!("Unsupported shell '{}'", shell)))
        }
    }
}

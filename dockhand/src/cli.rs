// CLI argument parsing and definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dockhand")]
#[command(about = "Manage local Docker Compose projects by name")]
#[command(version)]
pub struct Args {
    /// Run without a subcommand to pick and start projects interactively
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the projects file
    #[arg(long, global = true, default_value = "projects.json")]
    pub projects_file: PathBuf,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start a project's containers
    Start {
        /// Project name from the projects file
        project: String,

        /// Run containers in the background (pass false to stay attached)
        #[arg(
            short = 'd',
            long,
            default_value_t = true,
            action = ArgAction::Set,
            num_args = 0..=1,
            default_missing_value = "true"
        )]
        detach: bool,

        /// Remove containers for services no longer in the compose file
        #[arg(
            long,
            default_value_t = true,
            action = ArgAction::Set,
            num_args = 0..=1,
            default_missing_value = "true"
        )]
        remove_orphans: bool,
    },
    /// Stop a project and remove its containers
    Stop {
        /// Project name from the projects file
        project: String,

        /// Also remove named volumes
        #[arg(short = 'v', long)]
        volumes: bool,

        /// Also remove locally built images
        #[arg(long)]
        rmi: bool,
    },
    /// Restart a project's containers
    Restart {
        /// Project name from the projects file
        project: String,
    },
    /// Pause a running project
    Pause {
        /// Project name from the projects file
        project: String,
    },
    /// Resume a paused project
    Unpause {
        /// Project name from the projects file
        project: String,
    },
    /// Build a project's images
    Build {
        /// Project name from the projects file
        project: String,

        /// Build without using the layer cache
        #[arg(long)]
        no_cache: bool,
    },
    /// Pull a project's images
    Pull {
        /// Project name from the projects file
        project: String,
    },
    /// Show logs for a project's services
    Logs {
        /// Project name from the projects file
        project: String,

        /// Limit output to these services (omit for all)
        services: Vec<String>,

        /// Follow log output
        #[arg(short, long)]
        follow: bool,
    },

    /// List configured projects
    List,
    /// Show container status for one or all projects
    Status {
        /// Project name (omit for all projects)
        project: Option<String>,
    },
    /// Check container health and offer fixes
    Health {
        /// Project name (omit for all projects)
        project: Option<String>,
    },

    /// Log in to a Docker registry
    Auth,
    /// Add, list, or remove projects
    Manage,

    /// Generate shell completions (bash, zsh, fish, powershell)
    Completion {
        /// Target shell
        shell: String,
    },
}

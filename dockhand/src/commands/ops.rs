//! Project lifecycle command handlers
//!
//! Each handler resolves the project name, makes sure the Docker daemon is
//! reachable (driving recovery when it is not), then runs the compose
//! operation. Captured operations show a spinner; attached ones stream
//! straight to the terminal.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info_span};

use dockhand_cli::msg;
use dockhand_core::dock_println;
use dockhand_core::error::Result;
use dockhand_engine::ComposeFile;
use dockhand_messages::messages::MESSAGES;

use crate::context::AppContext;

fn op_spinner(subcommand: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("docker compose {subcommand}"));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Runs a captured compose operation behind a spinner.
fn run_with_spinner(subcommand: &str, op: impl FnOnce() -> Result<()>) -> Result<()> {
    let pb = op_spinner(subcommand);
    let result = op();
    pb.finish_and_clear();
    result
}

/// Handle project start
pub fn handle_start(ctx: &AppContext, name: &str, detach: bool, remove_orphans: bool) -> Result<()> {
    let span = info_span!("project_operation", operation = "start");
    let _enter = span.enter();
    debug!("Starting project '{}'", name);

    let project = ctx.project(name)?;
    ctx.monitor().ensure_ready()?;

    dock_println!("{}", msg!(MESSAGES.compose.start_header, name = name));
    for file in ComposeFile::overrides(project.dir()) {
        dock_println!("{}", msg!(MESSAGES.compose.override_detected, file = file));
    }

    if detach {
        run_with_spinner("up", || project.up(true, remove_orphans))?;
    } else {
        // Attached runs stream compose output until the user stops them.
        dock_println!("{}", MESSAGES.common.press_ctrl_c_to_stop);
        project.up(false, remove_orphans)?;
    }

    dock_println!("{}", msg!(MESSAGES.compose.start_success, name = name));
    Ok(())
}

/// Handle project stop
pub fn handle_stop(ctx: &AppContext, name: &str, volumes: bool, rmi: bool) -> Result<()> {
    let span = info_span!("project_operation", operation = "stop");
    let _enter = span.enter();
    debug!("Stopping project '{}'", name);

    let project = ctx.project(name)?;
    ctx.monitor().ensure_ready()?;

    dock_println!("{}", msg!(MESSAGES.compose.stop_header, name = name));
    run_with_spinner("down", || project.down(volumes, rmi))?;
    dock_println!("{}", msg!(MESSAGES.compose.stop_success, name = name));
    Ok(())
}

/// Handle project restart
pub fn handle_restart(ctx: &AppContext, name: &str) -> Result<()> {
    let span = info_span!("project_operation", operation = "restart");
    let _enter = span.enter();

    let project = ctx.project(name)?;
    ctx.monitor().ensure_ready()?;

    dock_println!("{}", msg!(MESSAGES.compose.restart_header, name = name));
    run_with_spinner("restart", || project.restart())?;
    dock_println!("{}", msg!(MESSAGES.compose.restart_success, name = name));
    Ok(())
}

/// Handle project pause
pub fn handle_pause(ctx: &AppContext, name: &str) -> Result<()> {
    let span = info_span!("project_operation", operation = "pause");
    let _enter = span.enter();

    let project = ctx.project(name)?;
    ctx.monitor().ensure_ready()?;

    dock_println!("{}", msg!(MESSAGES.compose.pause_header, name = name));
    run_with_spinner("pause", || project.pause())?;
    dock_println!("{}", msg!(MESSAGES.compose.pause_success, name = name));
    Ok(())
}

/// Handle project unpause
pub fn handle_unpause(ctx: &AppContext, name: &str) -> Result<()> {
    let span = info_span!("project_operation", operation = "unpause");
    let _enter = span.enter();

    let project = ctx.project(name)?;
    ctx.monitor().ensure_ready()?;

    dock_println!("{}", msg!(MESSAGES.compose.unpause_header, name = name));
    run_with_spinner("unpause", || project.unpause())?;
    dock_println!("{}", msg!(MESSAGES.compose.unpause_success, name = name));
    Ok(())
}

/// Handle project image build
pub fn handle_build(ctx: &AppContext, name: &str, no_cache: bool) -> Result<()> {
    let span = info_span!("project_operation", operation = "build");
    let _enter = span.enter();
    debug!("Building project '{}' (no_cache={})", name, no_cache);

    let project = ctx.project(name)?;
    ctx.monitor().ensure_ready()?;

    dock_println!("{}", msg!(MESSAGES.compose.build_header, name = name));
    run_with_spinner("build", || project.build(no_cache))?;
    dock_println!("{}", msg!(MESSAGES.compose.build_success, name = name));
    Ok(())
}

/// Handle project image pull
pub fn handle_pull(ctx: &AppContext, name: &str) -> Result<()> {
    let span = info_span!("project_operation", operation = "pull");
    let _enter = span.enter();

    let project = ctx.project(name)?;
    ctx.monitor().ensure_ready()?;

    dock_println!("{}", msg!(MESSAGES.compose.pull_header, name = name));
    run_with_spinner("pull", || project.pull())?;
    dock_println!("{}", msg!(MESSAGES.compose.pull_success, name = name));
    Ok(())
}

/// Handle project logs
pub fn handle_logs(ctx: &AppContext, name: &str, services: &[String], follow: bool) -> Result<()> {
    let span = info_span!("project_operation", operation = "logs");
    let _enter = span.enter();

    let project = ctx.project(name)?;
    ctx.monitor().ensure_ready()?;

    dock_println!("{}", msg!(MESSAGES.compose.logs_header, name = name));
    if follow {
        dock_println!("{}", MESSAGES.common.press_ctrl_c_to_stop);
    }
    project.logs(services, follow)
}

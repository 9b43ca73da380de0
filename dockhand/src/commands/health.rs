//! Container health handlers
//!
//! Health goes one step past status: it classifies stopped containers by
//! exit code, then offers to fix what it found. A project is healthy when
//! it has containers and every one of them is running.

use std::time::Duration;

use tracing::debug;

use dockhand_cli::msg;
use dockhand_core::dock_println;
use dockhand_core::error::{DockError, Result};
use dockhand_engine::ComposeProject;
use dockhand_messages::messages::MESSAGES;

use super::list::first_line;
use crate::context::AppContext;
use crate::terminal;

/// How long restarted containers get before the follow-up check.
const RECHECK_DELAY: Duration = Duration::from_secs(3);

pub fn handle_health(ctx: &AppContext, name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => health_single(ctx, name),
        None => health_all(ctx),
    }
}

fn health_single(ctx: &AppContext, name: &str) -> Result<()> {
    let project = ctx.project(name)?;
    ctx.monitor().ensure_ready()?;

    dock_println!("{}", msg!(MESSAGES.compose.health_header, name = name));

    let containers = project.status()?;
    if containers.is_empty() {
        dock_println!("{}", msg!(MESSAGES.compose.status_empty, name = name));
        dock_println!("{}", msg!(MESSAGES.compose.status_start_hint, name = name));
        return Ok(());
    }

    let running = containers.iter().filter(|c| c.is_running()).count();
    if running == containers.len() {
        dock_println!("{}", MESSAGES.compose.health_ok);
        return Ok(());
    }

    let stopped = containers.iter().filter(|c| c.state == "exited").count();
    let errors = containers.iter().filter(|c| c.exited_with_error()).count();
    dock_println!(
        "{}",
        msg!(
            MESSAGES.compose.health_counts,
            running = running.to_string(),
            stopped = stopped.to_string(),
            errors = errors.to_string()
        )
    );

    for container in containers.iter().filter(|c| !c.is_running()) {
        let detail = if container.state == "exited" {
            container.status.clone()
        } else {
            format!("{} ({})", container.state, container.status)
        };
        dock_println!(
            "{}",
            msg!(
                MESSAGES.compose.health_problem_item,
                container = container.service.as_str(),
                status = detail
            )
        );
    }

    offer_fix(ctx, name, &project)
}

fn offer_fix(ctx: &AppContext, name: &str, project: &ComposeProject) -> Result<()> {
    let options = vec![
        MESSAGES.compose.health_fix_logs.to_string(),
        MESSAGES.compose.health_fix_restart.to_string(),
        MESSAGES.compose.health_fix_skip.to_string(),
    ];
    let prompt = msg!(MESSAGES.compose.health_fix_prompt, name = name);

    match ctx.interaction().select_one(&prompt, &options)? {
        0 => {
            dock_println!("{}", msg!(MESSAGES.compose.logs_header, name = name));
            project.logs(&[], false)
        }
        1 => {
            dock_println!("{}", msg!(MESSAGES.compose.restart_header, name = name));
            project.restart()?;
            dock_println!("{}", msg!(MESSAGES.compose.restart_success, name = name));

            // Give containers a moment to settle before judging them again.
            ctx.cancel.wait(RECHECK_DELAY);
            if is_healthy(project) {
                dock_println!("{}", MESSAGES.compose.health_ok);
            } else {
                dock_println!(
                    "{}",
                    msg!(MESSAGES.compose.health_line_attention, name = name)
                );
            }
            Ok(())
        }
        _ => {
            dock_println!("{}", MESSAGES.common.status_tip);
            Ok(())
        }
    }
}

fn health_all(ctx: &AppContext) -> Result<()> {
    if ctx.registry.is_empty() {
        dock_println!("{}", MESSAGES.projects.list_empty);
        return Ok(());
    }

    ctx.monitor().ensure_ready()?;
    dock_println!("{}", MESSAGES.compose.health_all_header);

    let mut healthy = 0usize;
    let mut attention: Vec<String> = Vec::new();
    for name in ctx.registry.names() {
        let ok = ctx.project(name).map(|p| is_healthy(&p)).unwrap_or(false);
        if ok {
            dock_println!("{}", msg!(MESSAGES.compose.health_line_ok, name = name));
            healthy += 1;
        } else {
            dock_println!(
                "{}",
                msg!(MESSAGES.compose.health_line_attention, name = name)
            );
            attention.push(name.to_string());
        }
    }

    dock_println!(
        "{}",
        msg!(
            MESSAGES.compose.health_summary,
            healthy = healthy.to_string(),
            attention = attention.len().to_string()
        )
    );

    if attention.is_empty() {
        return Ok(());
    }

    let options = vec![
        MESSAGES.compose.health_sweep_fix_all.to_string(),
        MESSAGES.compose.health_sweep_choose.to_string(),
        MESSAGES.compose.health_sweep_manual.to_string(),
    ];
    match ctx
        .interaction()
        .select_one(MESSAGES.compose.health_sweep_prompt, &options)?
    {
        0 => restart_projects(ctx, &attention),
        1 => {
            let picked = terminal::multi_select(MESSAGES.compose.health_sweep_prompt, &attention)?;
            let chosen: Vec<String> = picked.into_iter().map(|i| attention[i].clone()).collect();
            restart_projects(ctx, &chosen)
        }
        _ => {
            for name in &attention {
                if let Ok(project) = ctx.project(name) {
                    dock_println!(
                        "{}",
                        msg!(
                            MESSAGES.compose.health_sweep_manual_hint,
                            file = project.file().path().display().to_string()
                        )
                    );
                }
            }
            Ok(())
        }
    }
}

/// Restarts each project in turn; failures are reported and skipped so one
/// broken project does not block the rest of the sweep.
fn restart_projects(ctx: &AppContext, names: &[String]) -> Result<()> {
    for name in names {
        dock_println!("{}", msg!(MESSAGES.compose.restart_header, name = name));
        match ctx.project(name).and_then(|p| p.restart()) {
            Ok(()) => {
                dock_println!("{}", msg!(MESSAGES.compose.restart_success, name = name));
            }
            Err(e) if fatal_daemon_error(&e) => return Err(e),
            Err(e) => {
                debug!("Restart of '{}' failed: {}", name, e);
                dock_println!(
                    "{}",
                    msg!(
                        MESSAGES.projects.list_entry_error,
                        name = name,
                        error = first_line(&e.to_string())
                    )
                );
            }
        }
    }
    Ok(())
}

fn is_healthy(project: &ComposeProject) -> bool {
    match project.status() {
        Ok(containers) => !containers.is_empty() && containers.iter().all(|c| c.is_running()),
        Err(_) => false,
    }
}

/// Errors that mean the daemon itself is gone, not just one project.
pub(crate) fn fatal_daemon_error(e: &DockError) -> bool {
    matches!(
        e,
        DockError::EngineNotInstalled
            | DockError::DaemonUnreachable(_)
            | DockError::RecoveryExhausted(_)
    )
}

//! Interactive start flow (running `dockhand` with no subcommand)
//!
//! Picks projects with a checkbox prompt, starts them detached one at a
//! time, then summarizes what happened and offers one retry pass over the
//! failures. A daemon-level failure stops the loop instead of failing every
//! remaining project the same way.

use colored::Colorize;
use tracing::debug;

use dockhand_cli::msg;
use dockhand_core::dock_println;
use dockhand_core::error::{DockError, Result};
use dockhand_engine::monitor::PING_TIMEOUT;
use dockhand_messages::messages::MESSAGES;

use super::health::fatal_daemon_error;
use super::list::first_line;
use super::{manage, status};
use crate::context::AppContext;
use crate::terminal;

pub fn handle_root(ctx: &mut AppContext) -> Result<()> {
    ensure_projects_file(ctx)?;
    print_welcome();

    if ctx.registry.is_empty() {
        dock_println!("{}", MESSAGES.projects.list_empty);
        return Ok(());
    }

    ctx.monitor().ensure_ready()?;
    offer_engine_details(ctx);

    let names: Vec<String> = ctx.registry.names().iter().map(|n| n.to_string()).collect();
    let picked = terminal::multi_select(MESSAGES.common.select_projects_prompt, &names)?;
    if picked.is_empty() {
        dock_println!("{}", MESSAGES.common.none_selected);
        return Ok(());
    }
    let selected: Vec<String> = picked.into_iter().map(|i| names[i].clone()).collect();

    dock_println!(
        "{}",
        msg!(
            MESSAGES.common.starting_count,
            count = selected.len().to_string()
        )
    );
    let (started, failed) = start_projects(ctx, &selected);

    dock_println!("{}", MESSAGES.common.summary_header);
    if !started.is_empty() {
        dock_println!(
            "{}",
            msg!(MESSAGES.common.summary_started, names = started.join(", "))
        );
    }
    if !failed.is_empty() {
        dock_println!(
            "{}",
            msg!(MESSAGES.common.summary_failed, names = failed.join(", "))
        );
        offer_retry(ctx, &failed)?;
    }

    if started.is_empty() {
        dock_println!("{}", MESSAGES.common.status_tip);
    } else {
        dock_println!("{}", MESSAGES.common.footer_header);
        for name in &selected {
            status::print_summary_line(ctx, name);
        }
    }
    Ok(())
}

/// Offers to create the projects file when it does not exist yet, walking
/// straight into the add flow on a yes.
fn ensure_projects_file(ctx: &mut AppContext) -> Result<()> {
    if ctx.registry_path.exists() {
        return Ok(());
    }

    let path = ctx.registry_path.display().to_string();
    dock_println!(
        "{}",
        msg!(MESSAGES.projects.file_missing, path = path.as_str())
    );

    let create = ctx
        .interaction()
        .confirm(MESSAGES.projects.create_offer, true)?;
    if !create || !manage::add_project(ctx)? {
        return Err(DockError::Config(format!("Projects file not found: {}", path)));
    }

    dock_println!(
        "{}",
        msg!(MESSAGES.projects.file_created, path = path.as_str())
    );
    Ok(())
}

fn print_welcome() {
    let banner = msg!(MESSAGES.common.welcome, version = env!("CARGO_PKG_VERSION"));
    dock_println!("{}", banner.as_str().cyan().bold());
}

/// Optional peek at engine internals after a successful readiness check.
/// Declining, a failed prompt, and failed queries all fall through without
/// touching the start flow.
fn offer_engine_details(ctx: &AppContext) {
    match ctx
        .interaction()
        .confirm(MESSAGES.engine.details_prompt, false)
    {
        Ok(true) => show_engine_details(ctx),
        Ok(false) => {}
        Err(e) => debug!("Details prompt failed: {}", e),
    }
}

fn show_engine_details(ctx: &AppContext) {
    dock_println!("{}", MESSAGES.engine.details_header);

    match ctx.probe().version_info(PING_TIMEOUT) {
        Ok(version) => {
            dock_println!(
                "{}",
                msg!(
                    MESSAGES.engine.details_version_line,
                    version = version.version.as_str()
                )
            );
            dock_println!(
                "{}",
                msg!(
                    MESSAGES.engine.details_api_line,
                    api = version.api_version.as_str()
                )
            );
            dock_println!(
                "{}",
                msg!(
                    MESSAGES.engine.details_platform_line,
                    os = version.os.as_str(),
                    arch = version.arch.as_str()
                )
            );
        }
        Err(e) => {
            debug!("Version query failed: {}", e);
            dock_println!("{}", MESSAGES.engine.details_version_unavailable);
        }
    }

    match ctx.probe().system_info(PING_TIMEOUT) {
        Ok(info) => {
            dock_println!("{}", MESSAGES.engine.details_system_header);
            dock_println!(
                "{}",
                msg!(
                    MESSAGES.engine.details_containers_line,
                    total = info.containers.to_string(),
                    running = info.containers_running.to_string(),
                    paused = info.containers_paused.to_string(),
                    stopped = info.containers_stopped.to_string()
                )
            );
            dock_println!(
                "{}",
                msg!(
                    MESSAGES.engine.details_images_line,
                    images = info.images.to_string()
                )
            );
            dock_println!(
                "{}",
                msg!(
                    MESSAGES.engine.details_server_line,
                    version = info.server_version.as_str()
                )
            );
            dock_println!(
                "{}",
                msg!(
                    MESSAGES.engine.details_storage_line,
                    driver = info.storage_driver.as_str()
                )
            );
            dock_println!(
                "{}",
                msg!(
                    MESSAGES.engine.details_memory_line,
                    memory = format_memory_gb(info.memory_bytes)
                )
            );
            dock_println!(
                "{}",
                msg!(MESSAGES.engine.details_cpus_line, cpus = info.cpus.to_string())
            );
        }
        Err(e) => {
            debug!("System info query failed: {}", e);
            dock_println!("{}", MESSAGES.engine.details_system_unavailable);
        }
    }
    dock_println!();
}

fn format_memory_gb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
}

/// Starts each project detached, returning who started and who failed.
/// Projects after a daemon-level failure are not attempted and end up in
/// neither list.
fn start_projects(ctx: &AppContext, names: &[String]) -> (Vec<String>, Vec<String>) {
    let mut started = Vec::new();
    let mut failed = Vec::new();

    for name in names {
        match start_one(ctx, name) {
            Ok(()) => {
                dock_println!(
                    "{}",
                    msg!(MESSAGES.compose.start_success, name = name.as_str())
                );
                started.push(name.clone());
            }
            Err(e) => {
                debug!("Start of '{}' failed: {}", name, e);
                dock_println!(
                    "{}",
                    msg!(
                        MESSAGES.compose.op_failed,
                        operation = "Start",
                        name = name.as_str(),
                        error = first_line(&e.to_string())
                    )
                );
                failed.push(name.clone());
                if fatal_daemon_error(&e) {
                    dock_println!("{}", MESSAGES.common.daemon_stop);
                    break;
                }
            }
        }
    }
    (started, failed)
}

fn start_one(ctx: &AppContext, name: &str) -> Result<()> {
    dock_println!("{}", msg!(MESSAGES.compose.start_header, name = name));

    // Probe before each start; a dead daemon should stop the whole loop,
    // not fail every project in turn with the same message.
    let engine = ctx.monitor().check_status();
    if !engine.installed {
        return Err(DockError::EngineNotInstalled);
    }
    if !engine.ready() {
        let detail = engine
            .error_detail
            .unwrap_or_else(|| "no response".to_string());
        return Err(DockError::DaemonUnreachable(detail));
    }

    let project = ctx.project(name)?;
    project.up(true, true)
}

fn offer_retry(ctx: &AppContext, failed: &[String]) -> Result<()> {
    if !ctx
        .interaction()
        .confirm(MESSAGES.common.retry_prompt, false)?
    {
        return Ok(());
    }

    dock_println!("{}", MESSAGES.common.retry_header);
    let (_, still_failing) = start_projects(ctx, failed);
    if !still_failing.is_empty() {
        dock_println!(
            "{}",
            msg!(
                MESSAGES.common.summary_failed,
                names = still_failing.join(", ")
            )
        );
        dock_println!("{}", MESSAGES.registry.skip_hint);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_memory_gb() {
        assert_eq!(format_memory_gb(8_589_934_592), "8.00");
        assert_eq!(format_memory_gb(8_232_747_008), "7.67");
        assert_eq!(format_memory_gb(0), "0.00");
    }
}

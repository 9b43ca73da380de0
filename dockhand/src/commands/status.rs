//! Container status handlers
//!
//! `status <project>` prints a per-container table. `status` without a
//! project prints a one-line summary per project. Neither drives daemon
//! recovery: when the daemon is down they degrade to whatever can be shown
//! from the projects file alone and exit cleanly.

use tracing::debug;

use dockhand_cli::msg;
use dockhand_core::dock_println;
use dockhand_core::error::Result;
use dockhand_engine::ContainerStatus;
use dockhand_messages::messages::MESSAGES;

use super::list::first_line;
use crate::context::AppContext;

pub fn handle_status(ctx: &AppContext, name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => status_single(ctx, name),
        None => status_all(ctx),
    }
}

fn status_single(ctx: &AppContext, name: &str) -> Result<()> {
    let project = ctx.project(name)?;

    let engine = ctx.monitor().check_status();
    if !engine.ready() {
        debug!("Daemon not ready; showing project location only");
        dock_println!("{}", MESSAGES.engine.daemon_unreachable);
        dock_println!(
            "{}",
            msg!(
                MESSAGES.compose.status_location,
                name = name,
                path = project.dir().display().to_string()
            )
        );
        return Ok(());
    }

    let containers = project.status()?;
    if containers.is_empty() {
        dock_println!("{}", msg!(MESSAGES.compose.status_empty, name = name));
        dock_println!("{}", msg!(MESSAGES.compose.status_start_hint, name = name));
        return Ok(());
    }

    dock_println!("{}", msg!(MESSAGES.compose.status_header, name = name));
    dock_println!("{}", MESSAGES.compose.status_table_header);
    dock_println!("{}", MESSAGES.compose.status_table_separator);
    for container in &containers {
        dock_println!("{}", format_row(container));
    }
    Ok(())
}

fn status_all(ctx: &AppContext) -> Result<()> {
    if ctx.registry.is_empty() {
        dock_println!("{}", MESSAGES.projects.list_empty);
        return Ok(());
    }

    dock_println!("{}", MESSAGES.compose.status_all_header);

    let engine = ctx.monitor().check_status();
    if !engine.ready() {
        // Daemon is down; fall back to a plain project list.
        dock_println!("{}", MESSAGES.compose.status_offline_list);
        for (name, path) in ctx.registry.iter() {
            dock_println!(
                "{}",
                msg!(MESSAGES.projects.list_entry, name = name, path = path)
            );
        }
        return Ok(());
    }

    for name in ctx.registry.names() {
        print_summary_line(ctx, name);
    }
    Ok(())
}

/// One-line status summary for a project, also used by the interactive
/// flow's closing status block.
pub(crate) fn print_summary_line(ctx: &AppContext, name: &str) {
    match count_running(ctx, name) {
        Ok((0, 0)) => {
            dock_println!("{}", msg!(MESSAGES.compose.status_line_none, name = name));
        }
        Ok((0, total)) => {
            dock_println!(
                "{}",
                msg!(
                    MESSAGES.compose.status_line_stopped,
                    name = name,
                    total = total.to_string()
                )
            );
        }
        Ok((running, total)) => {
            dock_println!(
                "{}",
                msg!(
                    MESSAGES.compose.status_line_running,
                    name = name,
                    running = running.to_string(),
                    total = total.to_string()
                )
            );
        }
        Err(e) => {
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

/// Running and total container counts for one project.
fn count_running(ctx: &AppContext, name: &str) -> Result<(usize, usize)> {
    let project = ctx.project(name)?;
    let containers = project.status()?;
    let running = containers.iter().filter(|c| c.is_running()).count();
    Ok((running, containers.len()))
}

fn format_row(container: &ContainerStatus) -> String {
    format!(
        "{:<20} {:<14} {:<11} {:<26} {}",
        container.service, container.id, container.state, container.status, container.ports
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(service: &str, state: &str, status: &str) -> ContainerStatus {
        ContainerStatus {
            name: format!("{service}-1"),
            service: service.to_string(),
            id: "0123456789ab".to_string(),
            state: state.to_string(),
            status: status.to_string(),
            image: "example:latest".to_string(),
            ports: "0.0.0.0:8080->80/tcp".to_string(),
        }
    }

    #[test]
    fn test_row_columns_line_up_with_the_header() {
        let row = format_row(&container("web", "running", "Up 2 hours"));
        let header = MESSAGES.compose.status_table_header;

        assert_eq!(header.find("ID"), row.find("0123456789ab"));
        assert_eq!(header.find("STATE"), row.find("running"));
        assert_eq!(header.find("STATUS"), row.find("Up 2 hours"));
        assert_eq!(header.find("PORTS"), row.find("0.0.0.0:8080->80/tcp"));
    }

    #[test]
    fn test_row_keeps_long_fields_unclipped() {
        let row = format_row(&container(
            "a-service-with-a-very-long-name",
            "running",
            "Up 2 hours",
        ));
        assert!(row.contains("a-service-with-a-very-long-name"));
        assert!(row.contains("running"));
    }
}

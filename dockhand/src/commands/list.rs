//! Projects listing handler

use tracing::debug;

use dockhand_cli::msg;
use dockhand_core::dock_println;
use dockhand_core::error::Result;
use dockhand_engine::ComposeFile;
use dockhand_messages::messages::MESSAGES;

use crate::context::AppContext;

/// Lists every configured project with its discovered compose file.
///
/// A project whose directory no longer holds a compose file shows an error
/// line instead; the rest of the list still prints.
pub fn handle_list(ctx: &AppContext) -> Result<()> {
    debug!(
        "Listing {} project(s) from {}",
        ctx.registry.len(),
        ctx.registry_path.display()
    );

    if ctx.registry.is_empty() {
        dock_println!("{}", MESSAGES.projects.list_empty);
        return Ok(());
    }

    dock_println!("{}", MESSAGES.projects.list_header);
    for name in ctx.registry.names() {
        match compose_file_for(ctx, name) {
            Ok(path) => {
                dock_println!("{}", msg!(MESSAGES.projects.list_entry, name = name, path = path));
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
    Ok(())
}

fn compose_file_for(ctx: &AppContext, name: &str) -> Result<String> {
    let dir = ctx.registry.resolve_path(name)?;
    let file = ComposeFile::find(&dir)?;
    Ok(file.path().display().to_string())
}

pub(crate) fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or_default().to_string()
}

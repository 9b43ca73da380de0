//! Projects-file management (add, list, remove)
//!
//! Adding a project walks a directory browser starting at the home
//! directory, warns when the chosen directory has no Docker files, and only
//! writes the projects file after a final confirmation.

use std::path::{Path, PathBuf};

use tracing::debug;

use dockhand_cli::msg;
use dockhand_core::dock_println;
use dockhand_core::error::Result;
use dockhand_engine::ComposeFile;
use dockhand_messages::messages::MESSAGES;

use super::list;
use crate::context::AppContext;

/// Handle the manage menu
pub fn handle_manage(ctx: &mut AppContext) -> Result<()> {
    let options = vec![
        MESSAGES.projects.manage_option_add.to_string(),
        MESSAGES.projects.manage_option_list.to_string(),
        MESSAGES.projects.manage_option_remove.to_string(),
    ];

    match ctx
        .interaction()
        .select_one(MESSAGES.projects.manage_prompt, &options)?
    {
        0 => {
            add_project(ctx)?;
            Ok(())
        }
        1 => list::handle_list(ctx),
        _ => remove_project(ctx),
    }
}

/// Interactive add flow. Returns whether a project was actually written to
/// the projects file.
pub(crate) fn add_project(ctx: &mut AppContext) -> Result<bool> {
    let name = crate::terminal::input_text(MESSAGES.projects.name_prompt)?;
    let name = name.trim().to_string();
    if name.is_empty() {
        dock_println!("{}", MESSAGES.projects.add_cancelled);
        return Ok(false);
    }

    if ctx.registry.contains(&name) {
        let prompt = msg!(MESSAGES.projects.overwrite_confirm, name = name.as_str());
        if !ctx.interaction().confirm(&prompt, false)? {
            dock_println!("{}", MESSAGES.projects.add_cancelled);
            return Ok(false);
        }
    }

    dock_println!("{}", MESSAGES.projects.browse_prompt);
    let dir = browse_for_directory(ctx)?;

    if has_docker_files(&dir) {
        report_docker_files(&dir);
    } else {
        dock_println!(
            "{}",
            msg!(
                MESSAGES.projects.no_compose_warning,
                path = dir.display().to_string()
            )
        );
        if !ctx
            .interaction()
            .confirm(MESSAGES.projects.no_compose_confirm, false)?
        {
            dock_println!("{}", MESSAGES.projects.add_cancelled);
            return Ok(false);
        }
    }

    let path = dir.display().to_string();
    let prompt = msg!(
        MESSAGES.projects.add_confirm,
        name = name.as_str(),
        path = path.as_str()
    );
    if !ctx.interaction().confirm(&prompt, true)? {
        dock_println!("{}", MESSAGES.projects.add_cancelled);
        return Ok(false);
    }

    ctx.registry.insert(name.as_str(), path);
    ctx.save_registry()?;
    dock_println!("{}", msg!(MESSAGES.projects.added, name = name.as_str()));
    Ok(true)
}

fn remove_project(ctx: &mut AppContext) -> Result<()> {
    if ctx.registry.is_empty() {
        dock_println!("{}", MESSAGES.projects.list_empty);
        return Ok(());
    }

    let names: Vec<String> = ctx.registry.names().iter().map(|n| n.to_string()).collect();
    let choice = ctx
        .interaction()
        .select_one(MESSAGES.projects.remove_select, &names)?;
    let name = &names[choice];

    let prompt = msg!(MESSAGES.projects.remove_confirm, name = name.as_str());
    if !ctx.interaction().confirm(&prompt, false)? {
        dock_println!("{}", MESSAGES.common.cancelled);
        return Ok(());
    }

    ctx.registry.remove(name);
    ctx.save_registry()?;
    dock_println!("{}", msg!(MESSAGES.projects.removed, name = name.as_str()));
    Ok(())
}

/// Directory picker. Walks from the home directory; hidden directories are
/// skipped. Selecting the current-directory entry ends the walk.
fn browse_for_directory(ctx: &AppContext) -> Result<PathBuf> {
    let mut current = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));

    loop {
        let mut options: Vec<String> = Vec::new();
        let mut targets: Vec<Option<PathBuf>> = Vec::new();

        if let Some(parent) = current.parent() {
            options.push(MESSAGES.projects.browse_up.to_string());
            targets.push(Some(parent.to_path_buf()));
        }
        options.push(MESSAGES.projects.browse_here.to_string());
        targets.push(None);

        for name in subdirectories(&current)? {
            options.push(msg!(
                MESSAGES.projects.browse_dir_entry,
                name = name.as_str()
            ));
            targets.push(Some(current.join(&name)));
        }

        let prompt = msg!(
            MESSAGES.projects.browse_nav_prompt,
            path = current.display().to_string()
        );
        let choice = ctx.interaction().select_one(&prompt, &options)?;
        match targets[choice].take() {
            Some(next) => {
                debug!("Browsing into {}", next.display());
                current = next;
            }
            None => return Ok(current),
        }
    }
}

/// Visible subdirectory names, sorted. Symlinks are not followed.
fn subdirectories(dir: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();
    Ok(names)
}

fn has_docker_files(dir: &Path) -> bool {
    ComposeFile::exists_in(dir) || dir.join("Dockerfile").is_file()
}

fn report_docker_files(dir: &Path) {
    for candidate in ComposeFile::candidate_names() {
        if dir.join(candidate).is_file() {
            dock_println!("{}", msg!(MESSAGES.projects.compose_found, file = *candidate));
        }
    }
    if dir.join("Dockerfile").is_file() {
        dock_println!("{}", MESSAGES.projects.dockerfile_found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_subdirectories_skips_hidden_and_files() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("beta")).unwrap();
        std::fs::create_dir(dir.path().join("alpha")).unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        assert_eq!(subdirectories(dir.path()).unwrap(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_has_docker_files_accepts_compose_or_dockerfile() {
        let compose_dir = TempDir::new().unwrap();
        std::fs::write(compose_dir.path().join("compose.yaml"), "services: {}").unwrap();
        assert!(has_docker_files(compose_dir.path()));

        let dockerfile_dir = TempDir::new().unwrap();
        std::fs::write(dockerfile_dir.path().join("Dockerfile"), "FROM scratch").unwrap();
        assert!(has_docker_files(dockerfile_dir.path()));

        let empty_dir = TempDir::new().unwrap();
        assert!(!has_docker_files(empty_dir.path()));
    }
}

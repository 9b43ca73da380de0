//! Registry authentication wizard
//!
//! Walks through `docker login` for the common registries. The password or
//! token always goes over stdin, never the command line.

use tracing::debug;

use dockhand_cli::msg;
use dockhand_core::error::{DockError, Result};
use dockhand_core::{dock_println, run_captured, run_captured_with_input};
use dockhand_messages::messages::MESSAGES;

use crate::context::AppContext;
use crate::terminal;

pub fn handle_auth(ctx: &AppContext) -> Result<()> {
    dock_println!("{}", MESSAGES.registry.wizard_header);
    ctx.monitor().ensure_ready()?;

    let options = vec![
        MESSAGES.registry.wizard_option_gitlab.to_string(),
        MESSAGES.registry.wizard_option_github.to_string(),
        MESSAGES.registry.wizard_option_dockerhub.to_string(),
        MESSAGES.registry.wizard_option_custom.to_string(),
        MESSAGES.registry.wizard_option_status.to_string(),
    ];

    match ctx
        .interaction()
        .select_one(MESSAGES.registry.wizard_select_prompt, &options)?
    {
        0 => {
            dock_println!("{}", MESSAGES.registry.token_hint_gitlab);
            login(Some("registry.gitlab.com"))
        }
        1 => {
            dock_println!("{}", MESSAGES.registry.token_hint_github);
            login(Some("ghcr.io"))
        }
        2 => {
            dock_println!("{}", MESSAGES.registry.token_hint_dockerhub);
            login(None)
        }
        3 => {
            let host = terminal::input_text(MESSAGES.registry.registry_prompt)?;
            login(Some(host.trim()))
        }
        _ => show_status(),
    }
}

/// Runs `docker login`, piping the secret over stdin.
///
/// `registry` of `None` logs in to Docker Hub, which takes no host
/// argument.
fn login(registry: Option<&str>) -> Result<()> {
    let display = registry.unwrap_or("Docker Hub");

    let username = terminal::input_text(MESSAGES.registry.username_prompt)?;
    let password = terminal::input_password(MESSAGES.registry.password_prompt)?;

    dock_println!(
        "{}",
        msg!(MESSAGES.registry.login_running, registry = display)
    );

    let mut args = vec!["login"];
    if let Some(host) = registry {
        args.push(host);
    }
    args.extend(["-u", username.as_str(), "--password-stdin"]);

    let output = run_captured_with_input("docker", &args, password.as_bytes())?;
    if !output.success() {
        let detail = output.combined().trim().to_string();
        dock_println!(
            "{}",
            msg!(
                MESSAGES.registry.login_failed,
                registry = display,
                error = detail
            )
        );
        return Err(DockError::Command(format!(
            "docker login to {} failed",
            display
        )));
    }

    dock_println!(
        "{}",
        msg!(MESSAGES.registry.login_success, registry = display)
    );
    Ok(())
}

/// Reports whether `docker info` shows a logged-in user.
fn show_status() -> Result<()> {
    dock_println!("{}", MESSAGES.registry.status_header);

    let output = run_captured("docker", &["info"], None)?;
    match logged_in_user(&output.combined()) {
        Some(user) => {
            dock_println!("{}", msg!(MESSAGES.registry.status_logged_in, user = user));
        }
        None => {
            debug!("No Username line in docker info output");
            dock_println!("{}", MESSAGES.registry.status_not_logged_in);
        }
    }
    Ok(())
}

fn logged_in_user(info_output: &str) -> Option<String> {
    info_output
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("Username:"))
        .map(|user| user.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_in_user_parses_the_username_line() {
        let info = "Client:\n Version: 27.0\nServer:\n Username: alice\n Registry: https://index.docker.io/v1/\n";
        assert_eq!(logged_in_user(info), Some("alice".to_string()));
    }

    #[test]
    fn test_logged_in_user_absent_when_not_authenticated() {
        let info = "Client:\n Version: 27.0\nServer:\n Registry: https://index.docker.io/v1/\n";
        assert_eq!(logged_in_user(info), None);
    }
}

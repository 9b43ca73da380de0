//! Registry authentication error classification.
//!
//! Compose operations fail with raw CLI output when a registry rejects a
//! pull. This module turns that text into a category with concrete
//! remediation steps. Classification is a pure function of the output
//! text; it never touches the network or the Docker config.

use std::sync::OnceLock;

use regex::Regex;

/// Known registry failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthCategory {
    GitlabAuth,
    GithubAuth,
    DockerhubAuth,
    GenericAuth,
    RegistryAccess,
}

impl AuthCategory {
    pub fn label(&self) -> &'static str {
        match self {
            AuthCategory::GitlabAuth => "gitlab-auth",
            AuthCategory::GithubAuth => "github-auth",
            AuthCategory::DockerhubAuth => "dockerhub-auth",
            AuthCategory::GenericAuth => "generic-auth",
            AuthCategory::RegistryAccess => "registry-access",
        }
    }
}

/// A classified registry failure with whatever context the output carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryFailure {
    pub category: AuthCategory,
    /// Registry host extracted from the output, e.g. "gitlab.com".
    pub registry: Option<String>,
    /// Image reference the engine could not fetch.
    pub image: Option<String>,
}

// Ordered, first match wins. The registry-specific auth patterns sit above
// the generic ones so "unauthorized" text from a known registry is not
// swallowed by the catch-all, and registry_access stays last because its
// pattern is a prefix of the GitLab one.
fn patterns() -> &'static [(AuthCategory, Regex)] {
    static PATTERNS: OnceLock<Vec<(AuthCategory, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let compile = |pattern: &str| {
            Regex::new(pattern).expect("Hardcoded registry error pattern should always compile")
        };
        vec![
            (
                AuthCategory::GitlabAuth,
                compile(r"error from registry.*gitlab\.com.*HTTP Basic.*Access denied"),
            ),
            (
                AuthCategory::GithubAuth,
                compile(r"error from registry.*ghcr\.io.*unauthorized"),
            ),
            (
                AuthCategory::DockerhubAuth,
                compile(r"pull access denied.*repository does not exist or may require.*docker login"),
            ),
            (
                AuthCategory::GenericAuth,
                compile(r"unauthorized.*authentication required"),
            ),
            (
                AuthCategory::RegistryAccess,
                compile(r"error from registry.*Access denied"),
            ),
        ]
    })
}

fn registry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"registry\.([a-zA-Z0-9.-]+)")
            .expect("Hardcoded registry host pattern should always compile")
    })
}

fn image_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"unable to get image '([^']+)'")
            .expect("Hardcoded image reference pattern should always compile")
    })
}

fn capture_first(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Classifies raw command output against the known registry failure
/// patterns. Returns `None` when the output matches none of them, which
/// callers treat as an ordinary command failure.
pub fn classify(output: &str) -> Option<RegistryFailure> {
    let category = patterns()
        .iter()
        .find(|(_, pattern)| pattern.is_match(output))
        .map(|(category, _)| *category)?;

    Some(RegistryFailure {
        category,
        registry: capture_first(registry_pattern(), output),
        image: capture_first(image_pattern(), output),
    })
}

/// Maps an extracted host to the host `docker login` expects.
fn resolve_login_host(host: &str) -> String {
    if host.contains("gitlab.com") {
        "registry.gitlab.com".to_string()
    } else if host.contains("github.com") || host.contains("ghcr.io") {
        "ghcr.io".to_string()
    } else {
        host.to_string()
    }
}

impl RegistryFailure {
    /// Host to pass to `docker login` for this failure.
    pub fn login_host(&self) -> String {
        match self.category {
            AuthCategory::GitlabAuth => "registry.gitlab.com".to_string(),
            AuthCategory::GithubAuth => "ghcr.io".to_string(),
            AuthCategory::DockerhubAuth => "docker.io".to_string(),
            AuthCategory::GenericAuth | AuthCategory::RegistryAccess => self
                .registry
                .as_deref()
                .map(resolve_login_host)
                .unwrap_or_else(|| "docker.io".to_string()),
        }
    }

    /// Ordered remediation steps for this category.
    pub fn remediations(&self) -> Vec<String> {
        match self.category {
            AuthCategory::GitlabAuth => vec![
                "Create a GitLab Personal Access Token with the 'read_registry' scope".to_string(),
                format!("Run: docker login {}", self.login_host()),
                "Use your GitLab username and the token as the password".to_string(),
                "GitLab tokens: https://gitlab.com/-/user_settings/personal_access_tokens"
                    .to_string(),
            ],
            AuthCategory::GithubAuth => vec![
                "Create a GitHub Personal Access Token with the 'read:packages' scope".to_string(),
                "Run: docker login ghcr.io".to_string(),
                "Use your GitHub username and the token as the password".to_string(),
                "GitHub tokens: https://github.com/settings/tokens".to_string(),
            ],
            AuthCategory::DockerhubAuth => vec![
                "Run: docker login".to_string(),
                "Use your Docker Hub username and password".to_string(),
                "Or create an access token in Docker Hub settings".to_string(),
            ],
            AuthCategory::GenericAuth | AuthCategory::RegistryAccess => {
                let host = self
                    .registry
                    .as_deref()
                    .map(resolve_login_host)
                    .unwrap_or_else(|| "<registry-url>".to_string());
                vec![
                    format!("Run: docker login {}", host),
                    "Use the credentials your registry provider issued".to_string(),
                    "Check that the image exists and you have permission to access it".to_string(),
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GITLAB_FAILURE: &str = "Error response from daemon: Head \
        \"https://registry.gitlab.com/v2/acme/app/manifests/latest\": \
        error from registry.gitlab.com: HTTP Basic: Access denied. \
        unable to get image 'registry.gitlab.com/acme/app:latest'";

    #[test]
    fn test_gitlab_failure_is_classified_with_context() {
        let failure = classify(GITLAB_FAILURE).expect("gitlab output should classify");
        assert_eq!(failure.category, AuthCategory::GitlabAuth);
        assert_eq!(failure.category.label(), "gitlab-auth");
        assert_eq!(failure.registry.as_deref(), Some("gitlab.com"));
        assert_eq!(
            failure.image.as_deref(),
            Some("registry.gitlab.com/acme/app:latest")
        );
    }

    #[test]
    fn test_gitlab_login_host_and_remediation() {
        let failure = classify(GITLAB_FAILURE).expect("gitlab output should classify");
        assert_eq!(failure.login_host(), "registry.gitlab.com");

        let steps = failure.remediations();
        assert!(steps[0].contains("read_registry"));
        assert!(steps
            .iter()
            .any(|step| step.contains("docker login registry.gitlab.com")));
    }

    #[test]
    fn test_github_failure_maps_to_ghcr() {
        let output = "error from registry ghcr.io: unauthorized: access token lacks scope";
        let failure = classify(output).expect("github output should classify");
        assert_eq!(failure.category, AuthCategory::GithubAuth);
        assert_eq!(failure.login_host(), "ghcr.io");
        assert!(failure.remediations()[0].contains("read:packages"));
    }

    #[test]
    fn test_dockerhub_pull_denied() {
        let output = "pull access denied for acme/private, repository does not exist \
            or may require 'docker login': denied: requested access to the resource is denied";
        let failure = classify(output).expect("dockerhub output should classify");
        assert_eq!(failure.category, AuthCategory::DockerhubAuth);
        assert_eq!(failure.login_host(), "docker.io");
        assert_eq!(failure.remediations()[0], "Run: docker login");
    }

    #[test]
    fn test_generic_auth_without_host() {
        let output = "unauthorized: authentication required";
        let failure = classify(output).expect("generic output should classify");
        assert_eq!(failure.category, AuthCategory::GenericAuth);
        assert_eq!(failure.registry, None);
        assert!(failure.remediations()[0].contains("<registry-url>"));
    }

    #[test]
    fn test_registry_access_uses_extracted_host() {
        let output = "error from registry.example.com: Access denied";
        let failure = classify(output).expect("access output should classify");
        assert_eq!(failure.category, AuthCategory::RegistryAccess);
        assert_eq!(failure.registry.as_deref(), Some("example.com"));
        assert_eq!(failure.login_host(), "example.com");
    }

    #[test]
    fn test_specific_pattern_wins_over_generic() {
        // Contains both the GitLab signature and the generic
        // "unauthorized ... authentication required" text on one line.
        let output = "error from registry.gitlab.com: HTTP Basic: Access denied, \
            unauthorized: authentication required";
        let failure = classify(output).expect("overlapping output should classify");
        assert_eq!(failure.category, AuthCategory::GitlabAuth);
    }

    #[test]
    fn test_unrelated_output_is_not_classified() {
        assert!(classify("network bridge already exists").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn test_classification_is_stable_across_calls() {
        let first = classify(GITLAB_FAILURE);
        let second = classify(GITLAB_FAILURE);
        assert_eq!(first, second);
    }
}

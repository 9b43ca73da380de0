//! Registry authentication messages (failure reports and the auth wizard)

pub struct RegistryMessages {
    // ============================================================================
    // Failure Report Messages (alphabetically sorted)
    // ============================================================================
    pub image_line: &'static str,
    pub issue_detected: &'static str,
    pub registry_line: &'static str,
    pub remediation_header: &'static str,
    pub remediation_item: &'static str,
    pub skip_hint: &'static str,

    // ============================================================================
    // Auth Wizard Messages (alphabetically sorted)
    // ============================================================================
    pub login_failed: &'static str,
    pub login_running: &'static str,
    pub login_success: &'static str,
    pub password_prompt: &'static str,
    pub registry_prompt: &'static str,
    pub status_header: &'static str,
    pub status_logged_in: &'static str,
    pub status_not_logged_in: &'static str,
    pub token_hint_dockerhub: &'static str,
    pub token_hint_github: &'static str,
    pub token_hint_gitlab: &'static str,
    pub username_prompt: &'static str,
    pub wizard_header: &'static str,
    pub wizard_option_custom: &'static str,
    pub wizard_option_dockerhub: &'static str,
    pub wizard_option_github: &'static str,
    pub wizard_option_gitlab: &'static str,
    pub wizard_option_status: &'static str,
    pub wizard_select_prompt: &'static str,
}

pub const REGISTRY_MESSAGES: RegistryMessages = RegistryMessages {
    // Failure Report
    image_line: "   Image: {image}",
    issue_detected: "\n🔐 Registry authentication issue detected ({category})",
    registry_line: "   Registry: {registry}",
    remediation_header: "\n💡 Suggested fixes:",
    remediation_item: "   {step}. {fix}",
    skip_hint: "💡 Run 'dockhand auth' when you're ready to authenticate",

    // Auth Wizard
    login_failed: "❌ Login to {registry} failed\n   Error: {error}",
    login_running: "▶ Logging in to {registry}...",
    login_success: "✅ Logged in to {registry}",
    password_prompt: "Password or token",
    registry_prompt: "Registry host",
    status_header: "🔑 Authentication status:",
    status_logged_in: "   Logged in as: {user}",
    status_not_logged_in: "   Not logged in to any registry",
    token_hint_dockerhub: "Use an access token instead of your password:\n   https://hub.docker.com/settings/security",
    token_hint_github: "Create a personal access token with the read:packages scope:\n   https://github.com/settings/tokens",
    token_hint_gitlab: "Create a personal access token with the read_registry scope:\n   https://gitlab.com/-/user_settings/personal_access_tokens",
    username_prompt: "Username",
    wizard_header: "🔐 Registry authentication",
    wizard_option_custom: "Custom registry",
    wizard_option_dockerhub: "Docker Hub",
    wizard_option_github: "GitHub (ghcr.io)",
    wizard_option_gitlab: "GitLab (registry.gitlab.com)",
    wizard_option_status: "Show authentication status",
    wizard_select_prompt: "Which registry?",
};

//! Common/shared messages across commands

pub struct CommonMessages {
    // ============================================================================
    // Shared Messages (alphabetically sorted)
    // ============================================================================
    pub bullet_item: &'static str,
    pub cancelled: &'static str,
    pub press_ctrl_c_to_stop: &'static str,
    pub welcome: &'static str,

    // ============================================================================
    // Interactive Flow Messages (alphabetically sorted)
    // ============================================================================
    pub daemon_stop: &'static str,
    pub footer_header: &'static str,
    pub none_selected: &'static str,
    pub retry_header: &'static str,
    pub retry_prompt: &'static str,
    pub select_projects_prompt: &'static str,
    pub starting_count: &'static str,
    pub status_tip: &'static str,
    pub summary_failed: &'static str,
    pub summary_header: &'static str,
    pub summary_started: &'static str,
}

pub const COMMON_MESSAGES: CommonMessages = CommonMessages {
    // Shared
    bullet_item: "  • {item}",
    cancelled: "Operation cancelled",
    press_ctrl_c_to_stop: "Press Ctrl+C to stop",
    welcome: "🐳 dockhand v{version}",

    // Interactive Flow
    daemon_stop: "\n🛑 Docker daemon issue detected. Stopping further operations.",
    footer_header: "\n📈 Current project status:",
    none_selected: "Nothing selected, nothing to do",
    retry_header: "\n🔄 Retrying failed projects...",
    retry_prompt: "Retry the failed projects?",
    select_projects_prompt: "Select projects to start",
    starting_count: "🚀 Starting {count} selected project(s)...\n",
    status_tip: "💡 Tip: Run 'dockhand status' to check your projects",
    summary_failed: "  ❌ Failed: {names}",
    summary_header: "\n📊 Summary",
    summary_started: "  ✅ Started: {names}",
};

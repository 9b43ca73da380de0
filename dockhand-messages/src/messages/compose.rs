//! Project lifecycle messages (start, stop, build, pull, logs, status, health)

pub struct ComposeMessages {
    // ============================================================================
    // Operation Messages (alphabetically sorted)
    // ============================================================================
    pub build_header: &'static str,
    pub build_success: &'static str,
    pub logs_header: &'static str,
    pub op_failed: &'static str,
    pub pause_header: &'static str,
    pub pause_success: &'static str,
    pub pull_header: &'static str,
    pub pull_success: &'static str,
    pub restart_header: &'static str,
    pub restart_success: &'static str,
    pub start_header: &'static str,
    pub start_success: &'static str,
    pub stop_header: &'static str,
    pub stop_success: &'static str,
    pub unpause_header: &'static str,
    pub unpause_success: &'static str,

    // ============================================================================
    // Compose File Discovery Messages
    // ============================================================================
    pub override_detected: &'static str,

    // ============================================================================
    // Status Messages
    // ============================================================================
    pub status_all_header: &'static str,
    pub status_empty: &'static str,
    pub status_header: &'static str,
    pub status_line_none: &'static str,
    pub status_line_running: &'static str,
    pub status_line_stopped: &'static str,
    pub status_location: &'static str,
    pub status_offline_list: &'static str,
    pub status_start_hint: &'static str,
    pub status_table_header: &'static str,
    pub status_table_separator: &'static str,

    // ============================================================================
    // Container Health Messages
    // ============================================================================
    pub health_all_header: &'static str,
    pub health_counts: &'static str,
    pub health_fix_logs: &'static str,
    pub health_fix_prompt: &'static str,
    pub health_fix_restart: &'static str,
    pub health_fix_skip: &'static str,
    pub health_header: &'static str,
    pub health_line_attention: &'static str,
    pub health_line_ok: &'static str,
    pub health_ok: &'static str,
    pub health_problem_item: &'static str,
    pub health_summary: &'static str,
    pub health_sweep_choose: &'static str,
    pub health_sweep_fix_all: &'static str,
    pub health_sweep_manual: &'static str,
    pub health_sweep_manual_hint: &'static str,
    pub health_sweep_prompt: &'static str,
}

pub const COMPOSE_MESSAGES: ComposeMessages = ComposeMessages {
    // Operations
    build_header: "🔨 Building '{name}'...",
    build_success: "✅ '{name}' built",
    logs_header: "📜 Logs for '{name}'",
    op_failed: "❌ {operation} failed for '{name}'\n   Error: {error}",
    pause_header: "⏸️  Pausing '{name}'...",
    pause_success: "✅ '{name}' paused",
    pull_header: "⬇️  Pulling images for '{name}'...",
    pull_success: "✅ Images for '{name}' pulled",
    restart_header: "🔄 Restarting '{name}'...",
    restart_success: "✅ '{name}' restarted",
    start_header: "🚀 Starting '{name}'...",
    start_success: "✅ '{name}' is up",
    stop_header: "🛑 Stopping '{name}'...",
    stop_success: "✅ '{name}' stopped",
    unpause_header: "▶️  Resuming '{name}'...",
    unpause_success: "✅ '{name}' resumed",

    // Compose File Discovery
    override_detected: "ℹ️  Override file detected: {file}",

    // Status
    status_all_header: "📊 Status for all projects:",
    status_empty: "No containers found for '{name}'",
    status_header: "📦 Status for '{name}':",
    status_line_none: "📭 {name}: No containers",
    status_line_running: "🟢 {name}: {running}/{total} containers running",
    status_line_stopped: "⏹️  {name}: 0/{total} containers running",
    status_location: "📁 Project '{name}' location: {path}",
    status_offline_list: "📋 Projects (daemon offline):",
    status_start_hint: "💡 Start it with: dockhand start {name}",
    status_table_header: "SERVICE              ID             STATE       STATUS                     PORTS",
    status_table_separator: "────────────────────────────────────────────────────────────────────────────────────",

    // Container Health
    health_all_header: "🩺 Container health",
    health_counts: "📊 {running} running, {stopped} stopped, {errors} with errors",
    health_fix_logs: "View recent logs",
    health_fix_prompt: "What would you like to do about '{name}'?",
    health_fix_restart: "Restart the project",
    health_fix_skip: "Nothing for now",
    health_header: "🩺 Container health for '{name}'",
    health_line_attention: "⚠️  {name}: Needs attention",
    health_line_ok: "✅ {name}: Healthy",
    health_ok: "✅ All containers look healthy",
    health_problem_item: "  ❌ {container}: {status}",
    health_summary: "\n📊 Health: {healthy} healthy, {attention} need attention",
    health_sweep_choose: "Choose per project",
    health_sweep_fix_all: "Restart every affected project",
    health_sweep_manual: "Show manual commands",
    health_sweep_manual_hint: "   Restart manually: docker compose -f {file} restart",
    health_sweep_prompt: "Issues found. How do you want to handle them?",
};

//! Daemon health, recovery, and wait-loop messages

pub struct EngineMessages {
    // ============================================================================
    // Status Check Messages (alphabetically sorted)
    // ============================================================================
    pub checking: &'static str,
    pub daemon_ready: &'static str,
    pub daemon_unreachable: &'static str,
    pub daemon_unreachable_detail: &'static str,
    pub not_installed: &'static str,
    pub install_options_header: &'static str,

    // ============================================================================
    // Detail View Messages (alphabetically sorted)
    // ============================================================================
    pub details_api_line: &'static str,
    pub details_containers_line: &'static str,
    pub details_cpus_line: &'static str,
    pub details_header: &'static str,
    pub details_images_line: &'static str,
    pub details_memory_line: &'static str,
    pub details_platform_line: &'static str,
    pub details_prompt: &'static str,
    pub details_server_line: &'static str,
    pub details_storage_line: &'static str,
    pub details_system_header: &'static str,
    pub details_system_unavailable: &'static str,
    pub details_version_line: &'static str,
    pub details_version_unavailable: &'static str,

    // ============================================================================
    // Recovery Messages (alphabetically sorted)
    // ============================================================================
    pub auto_start_attempting: &'static str,
    pub auto_start_failed: &'static str,
    pub manual_required: &'static str,
    pub manual_start_header: &'static str,
    pub recovery_option_auto: &'static str,
    pub recovery_option_manual: &'static str,
    pub recovery_option_wait: &'static str,
    pub recovery_prompt: &'static str,
    pub troubleshooting_header: &'static str,

    // ============================================================================
    // Wait Loop Messages (alphabetically sorted)
    // ============================================================================
    pub wait_attempt: &'static str,
    pub wait_cancelled: &'static str,
    pub wait_exhausted: &'static str,
    pub wait_header: &'static str,
    pub wait_success: &'static str,

    // ============================================================================
    // Startup Options Messages (shown after wait exhaustion)
    // ============================================================================
    pub startup_option_auto: &'static str,
    pub startup_option_manual: &'static str,
    pub startup_prompt: &'static str,
    pub startup_steps_header: &'static str,
}

pub const ENGINE_MESSAGES: EngineMessages = EngineMessages {
    // Status Check
    checking: "🔍 Checking Docker daemon status...",
    daemon_ready: "✅ Docker daemon is running",
    daemon_unreachable: "❌ Docker daemon is not responding",
    daemon_unreachable_detail: "   Error: {detail}",
    not_installed: "❌ Docker is not installed or not on PATH",
    install_options_header: "\n📦 Install options:",

    // Detail View
    details_api_line: "   API version: {api}",
    details_containers_line:
        "   Containers: {total} (running: {running}, paused: {paused}, stopped: {stopped})",
    details_cpus_line: "   CPUs: {cpus}",
    details_header: "\n📊 Detailed engine status",
    details_images_line: "   Images: {images}",
    details_memory_line: "   Total memory: {memory} GB",
    details_platform_line: "   Platform: {os}/{arch}",
    details_prompt: "Show detailed engine status?",
    details_server_line: "   Server version: {version}",
    details_storage_line: "   Storage driver: {driver}",
    details_system_header: "\n🔧 System information",
    details_system_unavailable: "⚠️  Could not retrieve system information",
    details_version_line: "🐳 Docker Engine {version}",
    details_version_unavailable: "⚠️  Could not retrieve engine version info",

    // Recovery
    auto_start_attempting: "▶ Starting {runtime}...",
    auto_start_failed: "❌ Could not start {runtime}\n   Error: {error}",
    manual_required: "Docker must be started manually on this platform",
    manual_start_header: "\n📋 To start {runtime} manually:",
    recovery_option_auto: "Start Docker automatically",
    recovery_option_manual: "Show manual startup instructions",
    recovery_option_wait: "Wait and retry (I'll start it myself)",
    recovery_prompt: "How would you like to proceed?",
    troubleshooting_header: "\n🔧 Troubleshooting:",

    // Wait Loop
    wait_attempt: "   Still waiting... ({attempt}/{total})",
    wait_cancelled: "\n⚠️  Wait cancelled",
    wait_exhausted: "❌ Docker did not become ready after {total} attempts",
    wait_header: "⏳ Waiting for the Docker daemon (up to {total} attempts)...",
    wait_success: "✅ Docker daemon is now reachable",

    // Startup Options
    startup_option_auto: "Show automatic startup setup",
    startup_option_manual: "Show manual startup steps",
    startup_prompt: "How do you want to start Docker next time?",
    startup_steps_header: "\n🚀 Startup steps:",
};

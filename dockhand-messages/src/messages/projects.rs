//! Projects-file management messages (list, add, remove, browse)

pub struct ProjectsMessages {
    // ============================================================================
    // Projects File Messages (alphabetically sorted)
    // ============================================================================
    pub create_offer: &'static str,
    pub file_created: &'static str,
    pub file_missing: &'static str,

    // ============================================================================
    // List Messages (alphabetically sorted)
    // ============================================================================
    pub known_projects_hint: &'static str,
    pub list_empty: &'static str,
    pub list_entry: &'static str,
    pub list_entry_error: &'static str,
    pub list_header: &'static str,
    pub unknown_project: &'static str,

    // ============================================================================
    // Manage Messages (alphabetically sorted)
    // ============================================================================
    pub add_cancelled: &'static str,
    pub add_confirm: &'static str,
    pub added: &'static str,
    pub browse_dir_entry: &'static str,
    pub browse_here: &'static str,
    pub browse_nav_prompt: &'static str,
    pub browse_prompt: &'static str,
    pub browse_up: &'static str,
    pub compose_found: &'static str,
    pub dockerfile_found: &'static str,
    pub manage_option_add: &'static str,
    pub manage_option_list: &'static str,
    pub manage_option_remove: &'static str,
    pub manage_prompt: &'static str,
    pub name_prompt: &'static str,
    pub no_compose_confirm: &'static str,
    pub no_compose_warning: &'static str,
    pub overwrite_confirm: &'static str,
    pub remove_confirm: &'static str,
    pub remove_select: &'static str,
    pub removed: &'static str,
}

pub const PROJECTS_MESSAGES: ProjectsMessages = ProjectsMessages {
    // Projects File
    create_offer: "Create it and add your first project?",
    file_created: "✅ Created {path}",
    file_missing: "⚠️  Projects file not found: {path}",

    // List
    known_projects_hint: "   Known projects: {names}",
    list_empty: "No projects configured\n\n💡 Add one with: dockhand manage",
    list_entry: "  {name}  {path}",
    list_entry_error: "  ❌ {name}: {error}",
    list_header: "📁 Configured projects:",
    unknown_project: "❌ Unknown project '{name}'",

    // Manage
    add_cancelled: "Add cancelled",
    add_confirm: "Add '{name}' ({path})?",
    added: "✅ Added project '{name}'",
    browse_dir_entry: "📁 {name}/",
    browse_here: ". (Use this directory)",
    browse_nav_prompt: "Select project directory (current: {path})",
    browse_prompt: "Browse to the project directory",
    browse_up: ".. (Go up)",
    compose_found: "✓ Found {file}",
    dockerfile_found: "✓ Found Dockerfile",
    manage_option_add: "Add a project",
    manage_option_list: "List projects",
    manage_option_remove: "Remove a project",
    manage_prompt: "What would you like to do?",
    name_prompt: "Project name",
    no_compose_confirm: "Continue anyway?",
    no_compose_warning: "⚠️  No compose file found in {path}",
    overwrite_confirm: "Project '{name}' already exists. Overwrite?",
    remove_confirm: "Remove '{name}' from the projects file?",
    remove_select: "Remove which project?",
    removed: "✅ Removed project '{name}'",
};

//! The project registry: a JSON object mapping project names to paths.
//!
//! The file is the tool's only persistent state. Names iterate in sorted
//! order because the backing store is a `BTreeMap`. Paths may contain `~`,
//! which is expanded when a path is resolved, not when it is stored.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use dockhand_core::error::{DockError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectRegistry {
    projects: BTreeMap<String, String>,
}

impl ProjectRegistry {
    /// Loads the registry from a projects file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let registry: Self = serde_json::from_str(&contents)?;
        debug!("Loaded {} project(s) from {}", registry.len(), path.display());
        Ok(registry)
    }

    /// Loads the registry, returning an empty one when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Saves the registry as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.projects.contains_key(name)
    }

    /// Project names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.projects.keys().map(String::as_str).collect()
    }

    /// Name and raw (unexpanded) path pairs, in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.projects
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_str()))
    }

    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.projects.insert(name.into(), path.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.projects.remove(name)
    }

    /// Resolves a project's directory with `~` expanded.
    pub fn resolve_path(&self, name: &str) -> Result<PathBuf> {
        let raw = self
            .projects
            .get(name)
            .ok_or_else(|| DockError::Config(format!("Unknown project '{}'", name)))?;
        Ok(PathBuf::from(shellexpand::tilde(raw).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_preserves_entries() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("projects.json");

        let mut registry = ProjectRegistry::default();
        registry.insert("web", "/srv/web");
        registry.insert("api", "~/code/api");
        registry.save(&file).unwrap();

        let loaded = ProjectRegistry::load(&file).unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(loaded.contains("web"));
        assert!(loaded.contains("api"));
    }

    #[test]
    fn test_file_format_is_a_bare_json_object() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("projects.json");

        let mut registry = ProjectRegistry::default();
        registry.insert("api", "/srv/api");
        registry.save(&file).unwrap();

        let raw = std::fs::read_to_string(&file).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["api"], "/srv/api");
    }

    #[test]
    fn test_names_iterate_in_sorted_order() {
        let mut registry = ProjectRegistry::default();
        registry.insert("zeta", "/z");
        registry.insert("alpha", "/a");
        registry.insert("mid", "/m");

        assert_eq!(registry.names(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = TempDir::new().unwrap();
        let registry = ProjectRegistry::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_malformed_file_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("projects.json");
        std::fs::write(&file, "not json at all").unwrap();

        let result = ProjectRegistry::load(&file);
        assert!(matches!(result, Err(DockError::Serialization(_))));
    }

    #[test]
    fn test_resolve_path_expands_tilde() {
        let mut registry = ProjectRegistry::default();
        registry.insert("api", "~/code/api");

        let resolved = registry.resolve_path("api").unwrap();
        let rendered = resolved.to_string_lossy();
        assert!(!rendered.starts_with('~'));
        assert!(rendered.ends_with("code/api"));
    }

    #[test]
    fn test_resolve_path_unknown_project() {
        let registry = ProjectRegistry::default();
        let result = registry.resolve_path("ghost");
        assert!(matches!(result, Err(DockError::Config(_))));
    }

    #[test]
    fn test_remove_returns_the_old_path() {
        let mut registry = ProjectRegistry::default();
        registry.insert("api", "/srv/api");

        assert_eq!(registry.remove("api"), Some("/srv/api".to_string()));
        assert_eq!(registry.remove("api"), None);
        assert!(registry.is_empty());
    }
}

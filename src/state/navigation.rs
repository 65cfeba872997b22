// src/state/navigation.rs
// Navigation state - the single directory being browsed
use std::path::{Path, PathBuf};

/// How far "go up" may climb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ascent {
    /// Never above the workspace root.
    #[default]
    Confined,
    /// Up to the filesystem root.
    Unbounded,
}

#[derive(Debug)]
pub struct NavigationState {
    root_path: PathBuf,
    current_path: PathBuf,
    ascent: Ascent,
}

impl NavigationState {
    pub fn new(root_path: PathBuf, ascent: Ascent) -> Self {
        Self {
            current_path: root_path.clone(),
            root_path,
            ascent,
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn at_root(&self) -> bool {
        self.current_path == self.root_path
    }

    /// Replace the current location with `target`.
    pub fn enter(&mut self, target: PathBuf) {
        self.current_path = target;
    }

    pub fn can_go_up(&self) -> bool {
        match self.ascent {
            Ascent::Confined => !self.at_root() && self.current_path.parent().is_some(),
            Ascent::Unbounded => self.current_path.parent().is_some(),
        }
    }

    /// Move to the parent directory. Returns false when the move is not allowed.
    pub fn go_up(&mut self) -> bool {
        if !self.can_go_up() {
            return false;
        }
        match self.current_path.parent() {
            Some(parent) => {
                self.current_path = parent.to_path_buf();
                true
            }
            None => false,
        }
    }

    /// Location shown in menus: relative to the root, or absolute once outside it.
    pub fn display_location(&self) -> String {
        match self.current_path.strip_prefix(&self.root_path) {
            Ok(rel) if rel.as_os_str().is_empty() => "/".to_string(),
            Ok(rel) => format!("/{}", rel.display()),
            Err(_) => self.current_path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuf {
        PathBuf::from("/work/projects")
    }

    #[test]
    fn test_starts_at_root() {
        let nav = NavigationState::new(root(), Ascent::Confined);
        assert_eq!(nav.current_path(), root());
        assert!(nav.at_root());
        assert_eq!(nav.display_location(), "/");
    }

    #[test]
    fn test_go_up_from_direct_child_returns_to_root() {
        let mut nav = NavigationState::new(root(), Ascent::Confined);
        nav.enter(root().join("beta"));
        assert!(nav.go_up());
        assert_eq!(nav.current_path(), root());
    }

    #[test]
    fn test_confined_stops_at_root() {
        let mut nav = NavigationState::new(root(), Ascent::Confined);
        assert!(!nav.can_go_up());
        assert!(!nav.go_up());
        assert_eq!(nav.current_path(), root());
    }

    #[test]
    fn test_unbounded_climbs_past_root() {
        let mut nav = NavigationState::new(root(), Ascent::Unbounded);
        assert!(nav.go_up());
        assert_eq!(nav.current_path(), Path::new("/work"));
        assert_eq!(nav.display_location(), "/work");
        assert!(nav.go_up());
        assert!(!nav.go_up());
        assert_eq!(nav.current_path(), Path::new("/"));
    }

    #[test]
    fn test_enter_replaces_location() {
        let mut nav = NavigationState::new(root(), Ascent::Confined);
        nav.enter(root().join("a"));
        nav.enter(root().join("a").join("b"));
        assert_eq!(nav.current_path(), root().join("a/b"));
        assert_eq!(nav.display_location(), "/a/b");
        assert!(nav.go_up());
        assert!(nav.go_up());
        assert!(nav.at_root());
    }
}

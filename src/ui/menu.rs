// src/ui/menu.rs
use crate::error::WorkspaceResult;
use crate::file::{Entry, EntryKind};
use crate::input::Action;
use crate::state::AppState;

pub struct MenuItem {
    pub label: String,
    pub action: Action,
}

pub struct Menu {
    pub title: String,
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(|item| item.label.clone()).collect()
    }

    pub fn action(&self, index: usize) -> Option<&Action> {
        self.items.get(index).map(|item| &item.action)
    }
}

/// Lists the current directory and lays out the menu for it.
pub fn build_menu(state: &AppState) -> WorkspaceResult<Menu> {
    let current = state.navigation.current_path();
    let projects = state.file_manager.list_projects(current)?;
    let files = state.file_manager.list_files(current)?;

    let mut items = Vec::with_capacity(projects.len() + files.len() + 4);
    items.push(MenuItem {
        label: ">>> Create project".to_string(),
        action: Action::CreateProject,
    });
    items.extend(projects.into_iter().map(|entry| MenuItem {
        label: label(&entry, false),
        action: Action::EnterProject(entry.path),
    }));
    items.push(MenuItem {
        label: ">>> Create file".to_string(),
        action: Action::CreateFile,
    });
    items.extend(files.into_iter().map(|entry| MenuItem {
        label: label(&entry, state.show_modified),
        action: Action::OpenFile(entry.path),
    }));
    if state.navigation.can_go_up() {
        items.push(MenuItem {
            label: "<<  Go up".to_string(),
            action: Action::GoUp,
        });
    }
    items.push(MenuItem {
        label: "<<< Exit".to_string(),
        action: Action::Exit,
    });

    Ok(Menu {
        title: format!("Workspace Manager  {}", state.navigation.display_location()),
        items,
    })
}

fn label(entry: &Entry, show_modified: bool) -> String {
    match (entry.kind, &entry.modified) {
        (EntryKind::Project, _) => format!("{}/", entry.name),
        (EntryKind::File, Some(modified)) if show_modified => {
            format!("{}  ({})", entry.name, modified.format("%Y-%m-%d %H:%M"))
        }
        (EntryKind::File, _) => entry.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorLauncher;
    use crate::file::{FileManager, Template};
    use crate::state::navigation::Ascent;
    use std::fs;
    use std::path::Path;

    fn state_at(root: &Path, ascent: Ascent) -> AppState {
        let mut state = AppState::new(
            root.to_path_buf(),
            ascent,
            FileManager::new("slvs", Template::Bundled, false),
            EditorLauncher::new("solvespace"),
        );
        state.show_modified = false;
        state
    }

    #[test]
    fn test_order_at_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();
        fs::create_dir(dir.path().join("Alpha Test")).unwrap();
        fs::write(dir.path().join("top.slvs"), "").unwrap();

        let state = state_at(dir.path(), Ascent::Confined);
        let menu = build_menu(&state).unwrap();
        let actions: Vec<&Action> = menu.items.iter().map(|i| &i.action).collect();

        assert_eq!(
            actions,
            vec![
                &Action::CreateProject,
                &Action::EnterProject(dir.path().join("Alpha Test")),
                &Action::EnterProject(dir.path().join("beta")),
                &Action::CreateFile,
                &Action::OpenFile(dir.path().join("top.slvs")),
                &Action::Exit,
            ]
        );
        assert_eq!(menu.labels()[1], "Alpha Test/");
        assert_eq!(menu.labels()[4], "top.slvs");
        assert!(menu.title.ends_with('/'));
    }

    #[test]
    fn test_go_up_offered_below_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("beta")).unwrap();

        let mut state = state_at(dir.path(), Ascent::Confined);
        state.navigation.enter(dir.path().join("beta"));
        let menu = build_menu(&state).unwrap();
        let n = menu.items.len();

        assert_eq!(menu.action(n - 2), Some(&Action::GoUp));
        assert_eq!(menu.action(n - 1), Some(&Action::Exit));
        assert!(menu.title.ends_with("/beta"));
        assert!(menu.action(n).is_none());
    }

    #[test]
    fn test_unbounded_offers_go_up_at_root() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_at(dir.path(), Ascent::Unbounded);
        let menu = build_menu(&state).unwrap();
        assert!(menu.items.iter().any(|i| i.action == Action::GoUp));
    }

    #[test]
    fn test_file_label_with_modified_time() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("part.slvs"), "").unwrap();
        let mut state = state_at(dir.path(), Ascent::Confined);
        state.show_modified = true;

        let menu = build_menu(&state).unwrap();
        let label = &menu.labels()[2];
        assert!(label.starts_with("part.slvs  ("), "{label}");
        assert!(label.ends_with(')'));
    }
}

//! bevy_scene_editor - Scene editor for Bevy with a multi-selection property grid
//!
//! This crate provides:
//! - A property grid for the selected instances of a scene (position, angle,
//!   z-order, layer, lock state, custom size and per-type custom properties)
//! - Batch editing: one edit is written to every selected instance
//! - An instance list for picking the selection
//! - Project document load/save and user preferences
//!
//! # Usage
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use bevy_scene_editor::EditorPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(EditorPlugin::new().with_project_path("assets/game.json"))
//!         .run();
//! }
//! ```
//!
//! Edits are reported through the [`InstancesModified`] message.

pub mod inspector;
pub mod preferences;
pub mod project;
pub mod ui;

pub use bevy_scene_core;

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_scene_core::Project;
use std::path::PathBuf;
use uuid::Uuid;

use inspector::InspectorState;
use preferences::InspectorPreferences;
use project::SceneDocument;
use ui::{EditorUiPlugin, SettingsDialog};

/// Sent once per batch edit with the instances that were written
#[derive(Message, Debug, Clone, PartialEq)]
pub struct InstancesModified {
    pub layout: String,
    pub instances: Vec<Uuid>,
}

/// The layout shown in the editor and the instances selected in it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceSelection {
    pub layout: Option<String>,
    /// Selected instance ids, in the order they were picked
    pub instances: Vec<Uuid>,
}

impl InstanceSelection {
    /// Switch to another layout, clearing the selection
    pub fn select_layout(&mut self, name: &str) {
        if self.layout.as_deref() != Some(name) {
            self.layout = Some(name.to_string());
            self.instances.clear();
        }
    }

    /// Select only `id`
    pub fn select(&mut self, id: Uuid) {
        self.instances.clear();
        self.instances.push(id);
    }

    /// Add `id` to the selection, or remove it if already selected
    pub fn toggle(&mut self, id: Uuid) {
        if let Some(pos) = self.instances.iter().position(|i| *i == id) {
            self.instances.remove(pos);
        } else {
            self.instances.push(id);
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.instances.contains(&id)
    }

    /// Drop references to layouts and instances that no longer exist.
    /// Falls back to the first layout when none is shown.
    pub fn sync_with(&mut self, project: &Project) {
        let layout = self
            .layout
            .as_deref()
            .and_then(|name| project.get_layout(name))
            .or_else(|| project.layouts.first());

        match layout {
            Some(layout) => {
                if self.layout.as_deref() != Some(layout.name.as_str()) {
                    self.layout = Some(layout.name.clone());
                    self.instances.clear();
                }
                self.instances
                    .retain(|id| layout.get_instance(*id).is_some());
            }
            None => {
                self.layout = None;
                self.instances.clear();
            }
        }
    }
}

/// Global editor state
#[derive(Resource, Default)]
pub struct EditorState {
    pub selection: InstanceSelection,
    pub settings_dialog: SettingsDialog,
    pub error_message: Option<String>,
    pub pending_save: bool,
}

/// Main editor plugin
///
/// # Example
///
/// ```rust,ignore
/// use bevy::prelude::*;
/// use bevy_scene_editor::EditorPlugin;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(
///         EditorPlugin::new()
///             .with_project_path("game.json")
///             .with_inspector_width(320.0)
///             .with_multiple_values_label("<mixed>"),
///     )
///     .run();
/// ```
#[derive(Default)]
pub struct EditorPlugin {
    /// Project opened on startup. If None, an empty project is created.
    pub project_path: Option<PathBuf>,
    /// Overrides the saved inspector width
    pub inspector_width: Option<f32>,
    /// Overrides the saved placeholder for differing values
    pub multiple_values_label: Option<String>,
}

impl EditorPlugin {
    /// Create an editor plugin with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Open this project file on startup
    pub fn with_project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    /// Set the inspector panel width (150 to 600)
    pub fn with_inspector_width(mut self, width: f32) -> Self {
        self.inspector_width = Some(width.clamp(150.0, 600.0));
        self
    }

    /// Set the text shown when selected instances have different values
    pub fn with_multiple_values_label(mut self, label: impl Into<String>) -> Self {
        self.multiple_values_label = Some(label.into());
        self
    }

    fn open_document(&self) -> (SceneDocument, Option<String>) {
        let Some(path) = &self.project_path else {
            return (SceneDocument::default(), None);
        };

        match SceneDocument::load(path) {
            Ok(document) => {
                bevy::log::info!("Opened project '{}' from {:?}", document.name(), path);
                (document, None)
            }
            Err(e) => {
                bevy::log::error!("Failed to open project {:?}: {}", path, e);
                (
                    SceneDocument::default(),
                    Some(format!("Failed to open project: {}", e)),
                )
            }
        }
    }
}

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        // Plugin config takes precedence over saved preferences
        let mut preferences = InspectorPreferences::load();
        bevy::log::info!("Loaded editor preferences");
        if let Some(width) = self.inspector_width {
            preferences.inspector_width = width;
        }
        if let Some(label) = &self.multiple_values_label {
            preferences.multiple_values_label = label.clone();
        }

        let (document, error_message) = self.open_document();
        let mut editor_state = EditorState {
            error_message,
            ..Default::default()
        };
        editor_state.selection.sync_with(&document.project);

        app.add_plugins(EguiPlugin::default())
            .add_plugins(EditorUiPlugin)
            .add_message::<InstancesModified>()
            .insert_resource(editor_state)
            .insert_resource(preferences)
            .insert_resource(document)
            .init_resource::<InspectorState>()
            .add_systems(Startup, setup_editor_camera)
            .add_systems(Update, (handle_pending_save, log_instance_modifications));
    }
}

/// System to save the document when requested from the UI
fn handle_pending_save(
    mut editor_state: ResMut<EditorState>,
    mut document: ResMut<SceneDocument>,
    mut preferences: ResMut<InspectorPreferences>,
) {
    if !editor_state.pending_save {
        return;
    }
    editor_state.pending_save = false;

    match document.save_current() {
        Ok(()) => {
            if let Some(path) = &document.path {
                bevy::log::info!("Saved project to {:?}", path);
                preferences.set_last_project(path.to_string_lossy());
                if let Err(e) = preferences.save() {
                    bevy::log::error!("Failed to save preferences: {}", e);
                }
            }
        }
        Err(e) => {
            editor_state.error_message = Some(format!("Failed to save project: {}", e));
        }
    }
}

fn log_instance_modifications(mut events: MessageReader<InstancesModified>) {
    for event in events.read() {
        bevy::log::debug!(
            "{} instance(s) modified in '{}'",
            event.instances.len(),
            event.layout
        );
    }
}

/// Spawns the editor camera if one doesn't exist
fn setup_editor_camera(mut commands: Commands, camera_query: Query<&Camera2d>) {
    if camera_query.is_empty() {
        commands.spawn(Camera2d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_scene_core::{Instance, Layout};

    fn project() -> Project {
        let mut project = Project::new("Test");
        let mut level = Layout::new("Level");
        level.add_instance(Instance::new("A", 0.0, 0.0));
        level.add_instance(Instance::new("B", 0.0, 0.0));
        project.add_layout(level);
        project.add_layout(Layout::new("Menu"));
        project
    }

    #[test]
    fn test_toggle_and_select() {
        let mut selection = InstanceSelection::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        selection.toggle(a);
        selection.toggle(b);
        assert_eq!(selection.instances, vec![a, b]);

        selection.toggle(a);
        assert_eq!(selection.instances, vec![b]);

        selection.select(a);
        assert_eq!(selection.instances, vec![a]);
        assert!(selection.is_selected(a));
        assert!(!selection.is_selected(b));
    }

    #[test]
    fn test_sync_picks_first_layout() {
        let project = project();
        let mut selection = InstanceSelection::default();
        selection.sync_with(&project);
        assert_eq!(selection.layout.as_deref(), Some("Level"));
    }

    #[test]
    fn test_sync_drops_missing_instances() {
        let project = project();
        let existing = project.layouts[0].instances[1].id;
        let mut selection = InstanceSelection::default();
        selection.select_layout("Level");
        selection.toggle(Uuid::new_v4());
        selection.toggle(existing);

        selection.sync_with(&project);
        assert_eq!(selection.instances, vec![existing]);
    }

    #[test]
    fn test_switching_layout_clears_selection() {
        let project = project();
        let mut selection = InstanceSelection::default();
        selection.sync_with(&project);
        selection.select(project.layouts[0].instances[0].id);

        selection.select_layout("Menu");
        assert!(selection.instances.is_empty());

        selection.layout = Some("Removed".to_string());
        selection.sync_with(&project);
        assert_eq!(selection.layout.as_deref(), Some("Level"));
    }
}

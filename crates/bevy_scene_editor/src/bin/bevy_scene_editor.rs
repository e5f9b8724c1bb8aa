//! Standalone scene editor binary
//!
//! Run with: bevy_scene_editor [project.json]
//!
//! Without an argument the last project is reopened if enabled in the
//! preferences, otherwise a demo project is shown.

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_scene_editor::preferences::InspectorPreferences;
use bevy_scene_editor::project::SceneDocument;
use bevy_scene_editor::EditorPlugin;
use std::path::PathBuf;

fn main() {
    let project_path = std::env::args().nth(1).map(PathBuf::from);

    let mut plugin = EditorPlugin::new();
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Bevy Scene Editor".to_string(),
            resolution: WindowResolution::new(1280, 800),
            ..default()
        }),
        ..default()
    }));

    match project_path {
        Some(path) => plugin = plugin.with_project_path(path),
        None => {
            app.add_systems(Startup, open_last_project_or_demo);
        }
    }

    app.add_plugins(plugin).run();
}

/// System to auto-open the last project on startup if enabled in preferences,
/// falling back to the demo project
fn open_last_project_or_demo(
    mut document: ResMut<SceneDocument>,
    preferences: Res<InspectorPreferences>,
) {
    if preferences.auto_open_last_project {
        if let Some(last) = &preferences.last_project {
            let path = PathBuf::from(last);
            if path.exists() {
                match SceneDocument::load(&path) {
                    Ok(loaded) => {
                        info!("Auto-opened last project: {}", loaded.name());
                        *document = loaded;
                        return;
                    }
                    Err(e) => {
                        warn!("Failed to auto-open project {:?}: {}", path, e);
                    }
                }
            } else {
                warn!("Last project file not found: {}", last);
            }
        }
    }

    *document = SceneDocument::demo();
    info!("Opened demo project");
}

//! Project document for the scene editor
//!
//! This module handles project file save/load and the `SceneDocument` resource.

mod demo;
mod file;

pub use file::*;

use bevy::prelude::Resource;
use bevy_scene_core::{Layout, Project};
use std::path::PathBuf;

/// The project being edited
#[derive(Resource, Debug, Clone)]
pub struct SceneDocument {
    pub project: Project,
    /// File the project was loaded from or last saved to
    pub path: Option<PathBuf>,
    /// Unsaved changes
    pub dirty: bool,
}

impl Default for SceneDocument {
    fn default() -> Self {
        let mut project = Project::new("Untitled");
        project.add_layout(Layout::new("Untitled scene"));
        Self::from_project(project)
    }
}

impl SceneDocument {
    pub fn from_project(project: Project) -> Self {
        Self {
            project,
            path: None,
            dirty: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.project.name
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Window/title text, with a marker for unsaved changes
    pub fn title(&self) -> String {
        if self.dirty {
            format!("{} *", self.project.name)
        } else {
            self.project.name.clone()
        }
    }
}

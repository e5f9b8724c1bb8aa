//! User preferences for the scene editor
//!
//! Stored as JSON in the platform config directory and loaded once at startup.

mod file;

pub use file::*;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Label shown for string fields whose values differ across the selection
pub const DEFAULT_MULTIPLE_VALUES_LABEL: &str = "(Multiple values)";

/// Persisted editor preferences
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorPreferences {
    /// Reopen `last_project` on startup
    pub auto_open_last_project: bool,
    pub last_project: Option<String>,

    // Panels
    pub show_instance_list: bool,
    pub show_inspector: bool,
    pub instance_list_width: f32,
    pub inspector_width: f32,

    // Property grid
    pub multiple_values_label: String,
    /// Left margin of grouped fields, in points
    pub group_indent: f32,
    pub show_custom_properties: bool,
}

impl Default for InspectorPreferences {
    fn default() -> Self {
        Self {
            auto_open_last_project: false,
            last_project: None,
            show_instance_list: true,
            show_inspector: true,
            instance_list_width: 200.0,
            inspector_width: 280.0,
            multiple_values_label: DEFAULT_MULTIPLE_VALUES_LABEL.to_string(),
            group_indent: 15.0,
            show_custom_properties: true,
        }
    }
}

impl InspectorPreferences {
    /// Remember the project that was last opened
    pub fn set_last_project(&mut self, path: impl Into<String>) {
        self.last_project = Some(path.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let prefs: InspectorPreferences =
            serde_json::from_str(r#"{"inspector_width": 400.0}"#).unwrap();
        assert_eq!(prefs.inspector_width, 400.0);
        assert_eq!(prefs.multiple_values_label, DEFAULT_MULTIPLE_VALUES_LABEL);
        assert_eq!(prefs.group_indent, 15.0);
        assert!(prefs.show_custom_properties);
    }

    #[test]
    fn test_round_trip() {
        let mut prefs = InspectorPreferences::default();
        prefs.set_last_project("/tmp/game.json");
        prefs.multiple_values_label = "<mixed>".to_string();

        let json = serde_json::to_string(&prefs).unwrap();
        let back: InspectorPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}

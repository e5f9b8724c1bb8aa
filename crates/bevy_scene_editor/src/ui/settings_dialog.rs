//! Settings/Preferences dialog

use bevy_egui::egui;

use crate::preferences::{InspectorPreferences, DEFAULT_MULTIPLE_VALUES_LABEL};

/// Open state of the Settings dialog.
///
/// Holds the preferences as they were when the dialog opened so Cancel can put
/// them back, including values that were never written to disk.
#[derive(Debug, Default)]
pub struct SettingsDialog {
    snapshot: Option<InspectorPreferences>,
}

impl SettingsDialog {
    pub fn is_open(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Open the dialog. Does nothing if it is already open.
    pub fn open(&mut self, preferences: &InspectorPreferences) {
        if self.snapshot.is_none() {
            self.snapshot = Some(preferences.clone());
        }
    }

    /// Close the dialog and restore the preferences it was opened with
    pub fn cancel(&mut self, preferences: &mut InspectorPreferences) {
        if let Some(snapshot) = self.snapshot.take() {
            *preferences = snapshot;
        }
    }

    /// Close the dialog keeping the edited preferences
    pub fn close(&mut self) {
        self.snapshot = None;
    }
}

/// Render the Settings dialog
pub fn render_settings_dialog(
    ctx: &egui::Context,
    dialog: &mut SettingsDialog,
    preferences: &mut InspectorPreferences,
) {
    if !dialog.is_open() {
        return;
    }

    let mut close_dialog = false;
    let mut save_and_close = false;

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(true)
        .default_size([400.0, 340.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Startup");
                ui.separator();

                ui.checkbox(
                    &mut preferences.auto_open_last_project,
                    "Auto-open last project on startup",
                );
                match &preferences.last_project {
                    Some(path) => ui.label(format!("Last project: {}", path)),
                    None => ui.label("No project saved yet"),
                };

                ui.add_space(16.0);

                ui.heading("Properties");
                ui.separator();

                ui.checkbox(
                    &mut preferences.show_custom_properties,
                    "Show custom properties",
                );

                ui.horizontal(|ui| {
                    ui.label("Multiple values label:");
                    ui.text_edit_singleline(&mut preferences.multiple_values_label);
                    if ui.small_button("Reset").clicked() {
                        preferences.multiple_values_label =
                            DEFAULT_MULTIPLE_VALUES_LABEL.to_string();
                    }
                });

                ui.horizontal(|ui| {
                    ui.label("Group indent:");
                    ui.add(egui::DragValue::new(&mut preferences.group_indent).range(0.0..=64.0));
                });

                ui.add_space(16.0);

                ui.heading("Panel Defaults");
                ui.separator();

                ui.checkbox(&mut preferences.show_instance_list, "Show Instance List");
                ui.checkbox(&mut preferences.show_inspector, "Show Properties");

                ui.horizontal(|ui| {
                    ui.label("Instance List Width:");
                    ui.add(
                        egui::DragValue::new(&mut preferences.instance_list_width)
                            .range(100.0..=500.0),
                    );
                });

                ui.horizontal(|ui| {
                    ui.label("Properties Width:");
                    ui.add(
                        egui::DragValue::new(&mut preferences.inspector_width).range(150.0..=600.0),
                    );
                });
            });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    save_and_close = true;
                }
                if ui.button("Cancel").clicked() {
                    close_dialog = true;
                }
            });
        });

    if save_and_close {
        if let Err(e) = preferences.save() {
            bevy::log::error!("Failed to save preferences: {}", e);
        }
        dialog.close();
    }

    if close_dialog {
        dialog.cancel(preferences);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_restores_preferences_from_open() {
        // Session values that were never saved, like a plugin width override
        let mut preferences = InspectorPreferences {
            inspector_width: 420.0,
            show_instance_list: false,
            ..Default::default()
        };
        let mut dialog = SettingsDialog::default();
        assert!(!dialog.is_open());

        dialog.open(&preferences);
        assert!(dialog.is_open());
        preferences.inspector_width = 200.0;
        preferences.multiple_values_label = "<mixed>".to_string();

        dialog.cancel(&mut preferences);
        assert!(!dialog.is_open());
        assert_eq!(preferences.inspector_width, 420.0);
        assert!(!preferences.show_instance_list);
        assert_eq!(preferences.multiple_values_label, DEFAULT_MULTIPLE_VALUES_LABEL);
    }

    #[test]
    fn test_reopen_keeps_first_snapshot() {
        let mut preferences = InspectorPreferences::default();
        let mut dialog = SettingsDialog::default();

        dialog.open(&preferences);
        preferences.group_indent = 40.0;
        dialog.open(&preferences);
        dialog.cancel(&mut preferences);

        assert_eq!(preferences, InspectorPreferences::default());
    }

    #[test]
    fn test_close_keeps_edits() {
        let mut preferences = InspectorPreferences::default();
        let mut dialog = SettingsDialog::default();

        dialog.open(&preferences);
        preferences.show_custom_properties = false;
        dialog.close();
        dialog.cancel(&mut preferences);

        assert!(!dialog.is_open());
        assert!(!preferences.show_custom_properties);
    }

    #[test]
    fn test_closed_dialog_draws_nothing() {
        let ctx = egui::Context::default();
        let mut dialog = SettingsDialog::default();
        let mut preferences = InspectorPreferences::default();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            render_settings_dialog(ctx, &mut dialog, &mut preferences);
        });

        assert!(!dialog.is_open());
        assert_eq!(preferences, InspectorPreferences::default());
    }
}

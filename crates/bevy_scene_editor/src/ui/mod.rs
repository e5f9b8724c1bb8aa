//! Editor UI components using bevy_egui
//!
//! Top bar, instance list on the left, property grid on the right.

mod instance_list;
mod settings_dialog;
mod theme;

pub use instance_list::render_instance_list;
pub use settings_dialog::{render_settings_dialog, SettingsDialog};
pub use theme::EditorTheme;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use bevy_scene_core::Project;
use uuid::Uuid;

use crate::inspector::{render_instance_properties, select_instances, InspectorState};
use crate::preferences::InspectorPreferences;
use crate::project::SceneDocument;
use crate::{EditorState, InstanceSelection, InstancesModified};

pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, render_ui);
    }
}

fn render_ui(
    mut contexts: EguiContexts,
    mut editor_state: ResMut<EditorState>,
    mut document: ResMut<SceneDocument>,
    mut preferences: ResMut<InspectorPreferences>,
    mut inspector_state: ResMut<InspectorState>,
    mut modified_events: MessageWriter<InstancesModified>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    EditorTheme::apply(ctx);

    // Instances may have been removed since the last frame
    let editor_state = &mut *editor_state;
    editor_state.selection.sync_with(&document.project);

    render_top_bar(ctx, editor_state, &mut preferences, &document);

    render_settings_dialog(ctx, &mut editor_state.settings_dialog, &mut preferences);

    if let Some(message) = editor_state.error_message.clone() {
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.colored_label(EditorTheme::ERROR, message);
                if ui.button("OK").clicked() {
                    editor_state.error_message = None;
                }
            });
    }

    if preferences.show_instance_list {
        egui::SidePanel::left("instance_list")
            .resizable(true)
            .default_width(preferences.instance_list_width)
            .show(ctx, |ui| {
                render_instance_list(ui, &mut editor_state.selection, &document.project);
            });
    }

    if preferences.show_inspector {
        let mut modified: Option<Vec<Uuid>> = None;
        egui::SidePanel::right("inspector")
            .resizable(true)
            .default_width(preferences.inspector_width)
            .show(ctx, |ui| {
                ui.heading("Properties");
                ui.separator();
                modified = render_properties_panel(
                    ui,
                    &editor_state.selection,
                    &mut document.project,
                    &mut inspector_state,
                    &preferences,
                );
            });

        if let (Some(instances), Some(layout)) = (modified, editor_state.selection.layout.clone()) {
            document.mark_dirty();
            modified_events.write(InstancesModified { layout, instances });
        }
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        render_scene_summary(ui, &editor_state.selection, &document.project);
    });
}

fn render_top_bar(
    ctx: &egui::Context,
    editor_state: &mut EditorState,
    preferences: &mut InspectorPreferences,
    document: &SceneDocument,
) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.strong(document.title());
            ui.separator();

            if ui
                .add_enabled(document.path.is_some(), egui::Button::new("Save"))
                .on_disabled_hover_text("Project has no file yet")
                .clicked()
            {
                editor_state.pending_save = true;
            }

            ui.menu_button("View", |ui| {
                ui.checkbox(&mut preferences.show_instance_list, "Instance List");
                ui.checkbox(&mut preferences.show_inspector, "Properties");
                ui.checkbox(&mut preferences.show_custom_properties, "Custom Properties");
            });

            if ui.button("Settings...").clicked() {
                editor_state.settings_dialog.open(preferences);
            }
        });
    });

    let ctrl_s = ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::S));
    if ctrl_s && document.path.is_some() {
        editor_state.pending_save = true;
    }
}

/// Returns the ids of the instances written this frame, if any
fn render_properties_panel(
    ui: &mut egui::Ui,
    selection: &InstanceSelection,
    project: &mut Project,
    state: &mut InspectorState,
    preferences: &InspectorPreferences,
) -> Option<Vec<Uuid>> {
    let Some(layout_name) = selection.layout.as_deref() else {
        ui.label("No scene open");
        return None;
    };
    let Some((scope, instances)) = project.edit_layout(layout_name) else {
        ui.label("Scene not found");
        return None;
    };

    let mut selected = select_instances(instances, &selection.instances);
    if selected.is_empty() {
        ui.label(egui::RichText::new("No instance selected").color(EditorTheme::TEXT_PLACEHOLDER));
        return None;
    }
    if selected.len() > 1 {
        ui.label(format!("{} instances selected", selected.len()));
    }

    let mut modified = None;
    render_instance_properties(ui, state, preferences, &scope, &mut selected, |ids| {
        modified = Some(ids.to_vec());
    });
    modified
}

fn render_scene_summary(ui: &mut egui::Ui, selection: &InstanceSelection, project: &Project) {
    let Some(layout) = selection
        .layout
        .as_deref()
        .and_then(|name| project.get_layout(name))
    else {
        ui.centered_and_justified(|ui| ui.label("No scene"));
        return;
    };

    ui.heading(layout.name.as_str());
    ui.label(format!(
        "{} instance(s) on {} layer(s), {} selected",
        layout.instances.len(),
        layout.layers.len(),
        selection.instances.len()
    ));
}

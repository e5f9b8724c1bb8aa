//! Layout picker and instance list, grouped by layer

use bevy_egui::egui;
use bevy_scene_core::{Instance, Layout, Project};

use super::EditorTheme;
use crate::InstanceSelection;

/// Render the instance list. Click selects one instance, Ctrl/Cmd-click or
/// Shift-click adds to or removes from the selection.
pub fn render_instance_list(ui: &mut egui::Ui, selection: &mut InstanceSelection, project: &Project) {
    ui.heading("Scene");

    let current = selection.layout.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("layout_picker")
        .selected_text(current.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for layout in &project.layouts {
                if ui
                    .selectable_label(layout.name == current, layout.name.as_str())
                    .clicked()
                {
                    selection.select_layout(&layout.name);
                }
            }
        });

    let Some(layout) = selection
        .layout
        .as_deref()
        .and_then(|name| project.get_layout(name))
    else {
        ui.label("No scene");
        return;
    };

    ui.horizontal(|ui| {
        if ui.small_button("Select all").clicked() {
            selection.instances = layout.instances.iter().map(|i| i.id).collect();
        }
        if ui.small_button("Clear").clicked() {
            selection.clear();
        }
    });
    ui.separator();

    let additive = ui.input(|i| i.modifiers.command || i.modifiers.shift);

    egui::ScrollArea::vertical()
        .id_salt("instance_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if layout.instances.is_empty() {
                ui.label(egui::RichText::new("No instances").color(EditorTheme::TEXT_PLACEHOLDER));
                return;
            }

            for layer in &layout.layers {
                let mut instances = layout.instances_on_layer(&layer.name).peekable();
                if instances.peek().is_none() {
                    continue;
                }
                ui.label(egui::RichText::new(layer.display_name()).color(EditorTheme::TEXT_SUBHEADER));
                for instance in instances {
                    render_instance_row(ui, selection, instance, additive);
                }
            }

            // Instances whose layer was removed from the layout
            let orphans: Vec<&Instance> = orphan_instances(layout).collect();
            if !orphans.is_empty() {
                ui.label(egui::RichText::new("Unknown layer").color(EditorTheme::WARNING));
                for instance in orphans {
                    render_instance_row(ui, selection, instance, additive);
                }
            }
        });
}

fn render_instance_row(
    ui: &mut egui::Ui,
    selection: &mut InstanceSelection,
    instance: &Instance,
    additive: bool,
) {
    let mut text = format!(
        "{} ({:.0}, {:.0})",
        instance.object_name(),
        instance.x(),
        instance.y()
    );
    if instance.is_locked() {
        text.push_str(" [locked]");
    }

    let response = ui.push_id(instance.id, |ui| {
        ui.selectable_label(selection.is_selected(instance.id), text)
    });
    if response.inner.clicked() {
        if additive {
            selection.toggle(instance.id);
        } else {
            selection.select(instance.id);
        }
    }
}

fn orphan_instances(layout: &Layout) -> impl Iterator<Item = &Instance> {
    layout
        .instances
        .iter()
        .filter(|instance| !layout.has_layer(instance.layer()))
}

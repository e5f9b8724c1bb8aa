//! Instance property grid
//!
//! Shows the built-in fields and custom properties of the selected instances.
//! Values shared by the whole selection are displayed as-is; differing string
//! values show a placeholder and differing booleans/numbers show the first
//! instance's value. An edit is written to every selected instance and the
//! host is notified once.

mod custom_properties;
mod form;
mod reconcile;
mod render;
mod schema;

pub use custom_properties::{discover_fields, format_number, parse_number, parse_raw, to_raw};
pub use form::{apply_edit, build_form, FieldEdit, FieldInput, FormField, FormNode};
pub use reconcile::{common_value, values_agree};
pub use render::{field_id, render_form};
pub use schema::{
    build_schema, builtin_schema, resolve_field, Accessor, Field, Getter, SchemaNode, Setter,
};

use bevy::log::debug;
use bevy::prelude::Resource;
use bevy_egui::egui;
use bevy_scene_core::{Instance, ObjectScope};
use std::collections::HashMap;
use uuid::Uuid;

use crate::preferences::InspectorPreferences;

/// Widget state kept between frames
#[derive(Resource, Default, Debug)]
pub struct InspectorState {
    /// Selection the buffers belong to
    selection: Vec<Uuid>,
    /// Text of focused number fields, by schema path
    number_buffers: HashMap<Vec<usize>, String>,
}

impl InspectorState {
    /// Reset widget state when the selection changes
    pub fn sync_selection(&mut self, ids: &[Uuid]) {
        if self.selection != ids {
            self.selection = ids.to_vec();
            self.number_buffers.clear();
        }
    }
}

/// Base id of the property form shown for the selection `ids`
pub fn form_id(ids: &[Uuid]) -> egui::Id {
    egui::Id::new("instance_properties").with(ids)
}

/// Mutable references to the instances with `ids`, in selection order.
/// Unknown ids are skipped.
pub fn select_instances<'a>(instances: &'a mut [Instance], ids: &[Uuid]) -> Vec<&'a mut Instance> {
    let mut by_id: HashMap<Uuid, &'a mut Instance> = instances
        .iter_mut()
        .filter(|instance| ids.contains(&instance.id))
        .map(|instance| (instance.id, instance))
        .collect();

    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}

/// Apply `edit` to the selection and notify the host once.
/// Returns `true` when at least one instance was written.
pub fn commit_edit(
    schema: &[SchemaNode],
    edit: &FieldEdit,
    instances: &mut [&mut Instance],
    scope: &ObjectScope,
    on_instances_modified: &mut dyn FnMut(&[Uuid]),
) -> bool {
    let written = apply_edit(schema, edit, instances, scope);
    if written == 0 {
        return false;
    }

    debug!(
        "Set {:?} to '{}' on {} instance(s) in '{}'",
        edit.path,
        edit.value,
        written,
        scope.layout_name()
    );

    let ids: Vec<Uuid> = instances.iter().map(|instance| instance.id).collect();
    on_instances_modified(&ids);
    true
}

/// Render the property grid for `instances`.
///
/// Draws nothing for an empty selection. Returns `true` when an edit was applied
/// (and `on_instances_modified` called) this frame.
pub fn render_instance_properties(
    ui: &mut egui::Ui,
    state: &mut InspectorState,
    preferences: &InspectorPreferences,
    scope: &ObjectScope,
    instances: &mut [&mut Instance],
    mut on_instances_modified: impl FnMut(&[Uuid]),
) -> bool {
    if instances.is_empty() {
        return false;
    }

    let ids: Vec<Uuid> = instances.iter().map(|instance| instance.id).collect();
    state.sync_selection(&ids);

    let (schema, form) = {
        let views: Vec<&Instance> = instances.iter().map(|instance| &**instance).collect();
        let schema = build_schema(&views, scope, preferences.show_custom_properties);
        let form = build_form(&schema, &views, scope, &preferences.multiple_values_label);
        (schema, form)
    };

    let edit = egui::ScrollArea::vertical()
        .id_salt("instance_properties")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // Keyed by selection so widget memory does not leak between selections
            ui.push_id(&ids, |ui| render_form(ui, form_id(&ids), &form, state, preferences))
                .inner
        })
        .inner;

    match edit {
        Some(edit) => commit_edit(&schema, &edit, instances, scope, &mut on_instances_modified),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_scene_core::PropertyValue;

    fn run_ui(mut add_contents: impl FnMut(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
        });
    }

    #[test]
    fn test_select_instances_keeps_selection_order() {
        let mut instances = vec![
            Instance::new("A", 0.0, 0.0),
            Instance::new("B", 0.0, 0.0),
            Instance::new("C", 0.0, 0.0),
        ];
        let ids = vec![instances[2].id, Uuid::new_v4(), instances[0].id];

        let selected = select_instances(&mut instances, &ids);
        let names: Vec<&str> = selected.iter().map(|i| i.object_name()).collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[test]
    fn test_sync_selection_clears_buffers() {
        let mut state = InspectorState::default();
        let a = Uuid::new_v4();
        state.sync_selection(&[a]);
        state.number_buffers.insert(vec![1], "1.".to_string());

        state.sync_selection(&[a]);
        assert!(!state.number_buffers.is_empty());

        state.sync_selection(&[a, Uuid::new_v4()]);
        assert!(state.number_buffers.is_empty());
    }

    #[test]
    fn test_commit_edit_notifies_once() {
        let scope = ObjectScope::new(&[], &[], "Test", &[]);
        let mut instances = vec![
            Instance::new("A", 0.0, 0.0),
            Instance::new("B", 3.0, 0.0),
            Instance::new("C", 9.0, 0.0),
        ];
        let ids: Vec<Uuid> = instances.iter().map(|i| i.id).collect();
        let schema = builtin_schema();

        let mut calls = Vec::new();
        let edit = FieldEdit {
            path: vec![1],
            value: PropertyValue::Number(42.0),
        };
        {
            let mut selected = select_instances(&mut instances, &ids);
            assert!(commit_edit(
                &schema,
                &edit,
                &mut selected,
                &scope,
                &mut |modified| calls.push(modified.to_vec()),
            ));
        }

        assert_eq!(calls, vec![ids]);
        assert!(instances.iter().all(|i| i.x() == 42.0));
    }

    #[test]
    fn test_commit_disabled_field_does_not_notify() {
        let scope = ObjectScope::new(&[], &[], "Test", &[]);
        let mut instance = Instance::new("A", 0.0, 0.0);
        let schema = builtin_schema();
        let edit = FieldEdit {
            path: vec![0],
            value: "B".into(),
        };

        let mut calls = 0;
        let mut selected = [&mut instance];
        assert!(!commit_edit(
            &schema,
            &edit,
            &mut selected,
            &scope,
            &mut |_| calls += 1,
        ));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_render_without_input_does_not_modify() {
        let scope = ObjectScope::new(&[], &[], "Test", &[]);
        let preferences = InspectorPreferences::default();
        let mut state = InspectorState::default();
        let mut a = Instance::new("A", 1.0, 2.0);
        let mut b = Instance::new("B", 3.0, 4.0);
        let before = (a.clone(), b.clone());

        let mut calls = 0;
        let mut applied = false;
        run_ui(|ui| {
            let mut selected = [&mut a, &mut b];
            applied |= render_instance_properties(
                ui,
                &mut state,
                &preferences,
                &scope,
                &mut selected,
                |_| calls += 1,
            );
        });

        assert!(!applied);
        assert_eq!(calls, 0);
        assert_eq!((a, b), before);
        assert!(state.number_buffers.is_empty());
    }

    #[test]
    fn test_typing_over_mixed_layer_writes_every_instance() {
        let scope = ObjectScope::new(&[], &[], "Test", &[]);
        let preferences = InspectorPreferences::default();
        let mut state = InspectorState::default();
        let mut a = Instance::new("A", 0.0, 0.0);
        a.set_layer("UI");
        let mut b = Instance::new("B", 0.0, 0.0);
        let ids = vec![a.id, b.id];
        let layer = field_id(form_id(&ids), &[5]);

        let ctx = egui::Context::default();
        let mut calls = Vec::new();
        let mut applied = false;
        let _ = ctx.run(
            egui::RawInput {
                events: vec![egui::Event::Text("HUD".to_string())],
                ..Default::default()
            },
            |ctx| {
                ctx.memory_mut(|m| m.request_focus(layer));
                egui::CentralPanel::default().show(ctx, |ui| {
                    let mut selected = [&mut a, &mut b];
                    applied |= render_instance_properties(
                        ui,
                        &mut state,
                        &preferences,
                        &scope,
                        &mut selected,
                        |modified| calls.push(modified.to_vec()),
                    );
                });
            },
        );

        assert!(applied);
        assert_eq!(calls, vec![ids]);
        assert_eq!(a.layer(), "HUD");
        assert_eq!(b.layer(), "HUD");
    }

    #[test]
    fn test_render_empty_selection() {
        let scope = ObjectScope::new(&[], &[], "Test", &[]);
        let preferences = InspectorPreferences::default();
        let mut state = InspectorState::default();

        run_ui(|ui| {
            assert!(!render_instance_properties(
                ui,
                &mut state,
                &preferences,
                &scope,
                &mut [],
                |_| panic!("no edit expected"),
            ));
        });
    }
}

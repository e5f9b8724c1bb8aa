//! egui rendering of the property form

use bevy_egui::egui;
use bevy_scene_core::PropertyValue;

use super::custom_properties::{format_number, parse_number};
use super::form::{FieldEdit, FieldInput, FormField, FormNode};
use super::InspectorState;
use crate::preferences::InspectorPreferences;
use crate::ui::EditorTheme;

/// Id of the input widget for the field at `path` in the form `form_id`
pub fn field_id(form_id: egui::Id, path: &[usize]) -> egui::Id {
    form_id.with(path)
}

/// Paint `form` and return the edit made this frame, if any.
/// Text inputs get ids derived from `form_id` (see [`field_id`]).
pub fn render_form(
    ui: &mut egui::Ui,
    form_id: egui::Id,
    form: &[FormNode],
    state: &mut InspectorState,
    preferences: &InspectorPreferences,
) -> Option<FieldEdit> {
    let mut edit = None;
    render_nodes(ui, form_id, form, state, preferences, &mut edit);
    edit
}

fn render_nodes(
    ui: &mut egui::Ui,
    form_id: egui::Id,
    nodes: &[FormNode],
    state: &mut InspectorState,
    preferences: &InspectorPreferences,
    edit: &mut Option<FieldEdit>,
) {
    for node in nodes {
        match node {
            FormNode::Field(field) => {
                ui.push_id(&field.path, |ui| {
                    let value = render_field(ui, field_id(form_id, &field.path), field, state);
                    // One edit per frame; later ones are dropped
                    if let Some(value) = value {
                        if edit.is_none() {
                            *edit = Some(FieldEdit {
                                path: field.path.clone(),
                                value,
                            });
                        }
                    }
                });
                ui.add_space(4.0);
            }
            FormNode::Group { label, children } => {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(label)
                        .strong()
                        .color(EditorTheme::TEXT_SUBHEADER),
                );
                ui.horizontal(|ui| {
                    ui.add_space(preferences.group_indent);
                    ui.vertical(|ui| {
                        render_nodes(ui, form_id, children, state, preferences, edit);
                    });
                });
            }
        }
    }
}

fn field_label(ui: &mut egui::Ui, field: &FormField) {
    let mut text = egui::RichText::new(&field.label).color(EditorTheme::TEXT_SECONDARY);
    if field.mixed {
        text = text.italics();
    }
    let response = ui.label(text);
    if !field.description.is_empty() {
        response.on_hover_text(field.description.as_str());
    }
}

fn render_field(
    ui: &mut egui::Ui,
    id: egui::Id,
    field: &FormField,
    state: &mut InspectorState,
) -> Option<PropertyValue> {
    let enabled = !field.disabled;

    match &field.input {
        FieldInput::Checkbox(checked) => {
            let mut checked = *checked;
            let response = ui.add_enabled(
                enabled,
                egui::Checkbox::new(&mut checked, field.label.as_str()),
            );
            if !field.description.is_empty() {
                response.clone().on_hover_text(field.description.as_str());
            }
            response.changed().then_some(PropertyValue::Bool(checked))
        }
        FieldInput::Number(value) => {
            field_label(ui, field);

            // Keep the typed text while focused so "1." or "-" are not reformatted
            let mut text = state
                .number_buffers
                .get(&field.path)
                .cloned()
                .unwrap_or_else(|| format_number(*value));

            let response = ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut text)
                    .id(id)
                    .desired_width(f32::INFINITY),
            );

            let edited = response
                .changed()
                .then(|| PropertyValue::Number(parse_number(&text)));

            if response.has_focus() {
                state.number_buffers.insert(field.path.clone(), text);
            } else {
                state.number_buffers.remove(&field.path);
            }
            edited
        }
        FieldInput::Text(value) => {
            field_label(ui, field);

            // A mixed value is shown as a hint so typing replaces it
            let mut text = if field.mixed {
                String::new()
            } else {
                value.clone()
            };
            let mut edit = egui::TextEdit::singleline(&mut text)
                .id(id)
                .desired_width(f32::INFINITY);
            if field.mixed {
                edit = edit.hint_text(
                    egui::RichText::new(value.as_str()).color(EditorTheme::TEXT_PLACEHOLDER),
                );
            }
            let response = ui.add_enabled(enabled, edit);
            response
                .changed()
                .then(|| PropertyValue::String(text.clone()))
        }
        FieldInput::Choice { selected, options } => {
            field_label(ui, field);

            let mut chosen = None;
            ui.add_enabled_ui(enabled, |ui| {
                egui::ComboBox::from_id_salt(id)
                    .selected_text(selected.as_str())
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for option in options {
                            if ui
                                .selectable_label(option == selected, option.as_str())
                                .clicked()
                                && option != selected
                            {
                                chosen = Some(option.clone());
                            }
                        }
                    });
            });
            chosen.map(PropertyValue::String)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::{build_form, builtin_schema};
    use bevy_scene_core::{Instance, ObjectScope};

    fn form_id() -> egui::Id {
        egui::Id::new("test_form")
    }

    fn key(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Run one frame with `events`, focusing `focus` before the form is drawn.
    /// Edits from every pass of the frame are collected.
    fn run_frame(
        ctx: &egui::Context,
        events: Vec<egui::Event>,
        focus: Option<egui::Id>,
        form: &[FormNode],
        state: &mut InspectorState,
    ) -> Vec<FieldEdit> {
        let preferences = InspectorPreferences::default();
        let mut edits = Vec::new();
        let _ = ctx.run(
            egui::RawInput {
                events,
                ..Default::default()
            },
            |ctx| {
                if let Some(id) = focus {
                    ctx.memory_mut(|m| m.request_focus(id));
                }
                egui::CentralPanel::default().show(ctx, |ui| {
                    edits.extend(render_form(ui, form_id(), form, state, &preferences));
                });
            },
        );
        edits
    }

    fn instance_form(instance: &Instance) -> Vec<FormNode> {
        let scope = ObjectScope::new(&[], &[], "Test", &[]);
        build_form(&builtin_schema(), &[instance], &scope, "(Multiple values)")
    }

    #[test]
    fn test_typing_in_number_field_keeps_buffer() {
        let ctx = egui::Context::default();
        let mut state = InspectorState::default();
        let form = instance_form(&Instance::new("Player", 3.0, 0.0));
        let x = field_id(form_id(), &[1]);

        let edits = run_frame(
            &ctx,
            vec![egui::Event::Text(".".to_string())],
            Some(x),
            &form,
            &mut state,
        );

        assert_eq!(
            edits,
            vec![FieldEdit {
                path: vec![1],
                value: PropertyValue::Number(3.0),
            }]
        );
        assert_eq!(state.number_buffers.get(&vec![1]).map(String::as_str), Some("3."));

        // Next keystroke continues from the buffer, not the formatted value
        let edits = run_frame(
            &ctx,
            vec![egui::Event::Text("5".to_string())],
            None,
            &form,
            &mut state,
        );
        assert_eq!(
            edits,
            vec![FieldEdit {
                path: vec![1],
                value: PropertyValue::Number(3.5),
            }]
        );
    }

    #[test]
    fn test_unfocused_number_field_drops_buffer() {
        let ctx = egui::Context::default();
        let mut state = InspectorState::default();
        let form = instance_form(&Instance::new("Player", 3.0, 0.0));
        state.number_buffers.insert(vec![1], "3.".to_string());

        let edits = run_frame(&ctx, Vec::new(), None, &form, &mut state);

        assert!(edits.is_empty());
        assert!(state.number_buffers.is_empty());
    }

    #[test]
    fn test_disabled_field_ignores_typing() {
        let ctx = egui::Context::default();
        let mut state = InspectorState::default();
        let form = instance_form(&Instance::new("Player", 0.0, 0.0));
        let name = field_id(form_id(), &[0]);

        let edits = run_frame(
            &ctx,
            vec![egui::Event::Text("Enemy".to_string())],
            Some(name),
            &form,
            &mut state,
        );

        assert!(edits.is_empty());
    }

    #[test]
    fn test_checkbox_toggled_from_keyboard() {
        let ctx = egui::Context::default();
        let mut state = InspectorState::default();
        let form = vec![FormNode::Field(FormField {
            path: vec![6],
            label: "Locked".to_string(),
            description: String::new(),
            disabled: false,
            mixed: false,
            input: FieldInput::Checkbox(false),
        })];

        // Tab focuses the checkbox, space clicks it
        let edits = run_frame(&ctx, vec![key(egui::Key::Tab)], None, &form, &mut state);
        assert!(edits.is_empty());
        let edits = run_frame(&ctx, vec![key(egui::Key::Space)], None, &form, &mut state);

        assert_eq!(
            edits,
            vec![FieldEdit {
                path: vec![6],
                value: PropertyValue::Bool(true),
            }]
        );
    }

    #[test]
    fn test_first_edit_of_frame_wins() {
        let ctx = egui::Context::default();
        let mut state = InspectorState::default();
        let preferences = InspectorPreferences::default();
        let form = instance_form(&Instance::new("Player", 3.0, 0.0));
        let x = field_id(form_id(), &[1]);
        let first = FieldEdit {
            path: vec![2],
            value: PropertyValue::Number(7.0),
        };

        let mut edit = Some(first.clone());
        let _ = ctx.run(
            egui::RawInput {
                events: vec![egui::Event::Text("5".to_string())],
                ..Default::default()
            },
            |ctx| {
                ctx.memory_mut(|m| m.request_focus(x));
                egui::CentralPanel::default().show(ctx, |ui| {
                    render_nodes(ui, form_id(), &form, &mut state, &preferences, &mut edit);
                });
            },
        );

        assert_eq!(edit, Some(first));
        // The later field still took the keystroke
        assert_eq!(state.number_buffers.get(&vec![1]).map(String::as_str), Some("35"));
    }
}

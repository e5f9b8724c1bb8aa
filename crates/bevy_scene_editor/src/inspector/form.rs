//! Form view model built from a schema and a selection, and the batch setter
//! that applies an edit back to the selection.

use bevy_scene_core::{Instance, ObjectScope, PropertyValue, ValueType};

use super::reconcile::{common_value, values_agree};
use super::schema::{resolve_field, Field, SchemaNode};

/// Widget and displayed value for one field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Checkbox(bool),
    Number(f64),
    Text(String),
    Choice {
        selected: String,
        options: Vec<String>,
    },
}

/// A rendered leaf
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    /// Child indices of the field in the schema
    pub path: Vec<usize>,
    pub label: String,
    pub description: String,
    pub disabled: bool,
    /// Selected instances disagree on this field
    pub mixed: bool,
    pub input: FieldInput,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormNode {
    Field(FormField),
    Group {
        label: String,
        children: Vec<FormNode>,
    },
}

/// A value entered in the form for the field at `path`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEdit {
    pub path: Vec<usize>,
    pub value: PropertyValue,
}

/// Build the form for `instances`. String fields whose values differ show
/// `placeholder`; boolean and number fields show the first instance's value.
pub fn build_form(
    schema: &[SchemaNode],
    instances: &[&Instance],
    scope: &ObjectScope,
    placeholder: &str,
) -> Vec<FormNode> {
    if instances.is_empty() {
        return Vec::new();
    }
    let mut path = Vec::new();
    build_nodes(schema, instances, scope, placeholder, &mut path)
}

fn build_nodes(
    nodes: &[SchemaNode],
    instances: &[&Instance],
    scope: &ObjectScope,
    placeholder: &str,
    path: &mut Vec<usize>,
) -> Vec<FormNode> {
    let mut form = Vec::with_capacity(nodes.len());

    for (index, node) in nodes.iter().enumerate() {
        path.push(index);
        match node {
            SchemaNode::Field(field) => {
                if let Some(form_field) = build_field(field, instances, scope, placeholder, path) {
                    form.push(FormNode::Field(form_field));
                }
            }
            SchemaNode::Group { name, children } => {
                form.push(FormNode::Group {
                    label: name.clone(),
                    children: build_nodes(children, instances, scope, placeholder, path),
                });
            }
        }
        path.pop();
    }

    form
}

fn build_field(
    field: &Field,
    instances: &[&Instance],
    scope: &ObjectScope,
    placeholder: &str,
    path: &[usize],
) -> Option<FormField> {
    let mixed = !values_agree(instances, field, scope);

    let input = match field.value_type {
        ValueType::Boolean => {
            FieldInput::Checkbox(common_value(instances, field, scope, None)?.as_bool())
        }
        ValueType::Number => {
            FieldInput::Number(common_value(instances, field, scope, None)?.as_number())
        }
        ValueType::String => {
            let value =
                common_value(instances, field, scope, Some(placeholder.into()))?.to_string();
            if field.choices.is_empty() {
                FieldInput::Text(value)
            } else {
                FieldInput::Choice {
                    selected: value,
                    options: field.choices.clone(),
                }
            }
        }
    };

    Some(FormField {
        path: path.to_vec(),
        label: field.name.clone(),
        description: field.description.clone(),
        disabled: field.disabled,
        mixed,
        input,
    })
}

/// Write `edit` to every instance. Returns the number of instances written,
/// 0 when the path does not name an enabled field.
pub fn apply_edit(
    schema: &[SchemaNode],
    edit: &FieldEdit,
    instances: &mut [&mut Instance],
    scope: &ObjectScope,
) -> usize {
    let Some(field) = resolve_field(schema, &edit.path) else {
        return 0;
    };
    if field.disabled {
        return 0;
    }

    for instance in instances.iter_mut() {
        field.set(instance, &edit.value, scope);
    }
    instances.len()
}

//! Field schema for the instance property grid
//!
//! A schema is a tree of [`SchemaNode`]s. Leaves are [`Field`]s that know how
//! to read and write one value on an [`Instance`]; groups only carry a label
//! and children. Built-in fields are static, custom property fields are
//! discovered per render from the selected instances.

use bevy_scene_core::{Instance, ObjectScope, PropertyValue, ValueType};

use super::custom_properties;

/// Reads a built-in value from an instance
pub type Getter = fn(&Instance) -> PropertyValue;
/// Writes a built-in value to an instance
pub type Setter = fn(&mut Instance, &PropertyValue);

/// How a field reaches its value on an instance
#[derive(Debug, Clone)]
pub enum Accessor {
    /// Direct accessor/mutator pair on the instance
    Builtin { get: Getter, set: Setter },
    /// String-stored custom property resolved through the object scope
    CustomProperty { name: String },
}

/// A leaf of the schema
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub value_type: ValueType,
    pub disabled: bool,
    /// Hover text
    pub description: String,
    /// Allowed values; a non-empty list renders as a drop-down
    pub choices: Vec<String>,
    pub accessor: Accessor,
}

impl Field {
    pub fn builtin(name: &str, value_type: ValueType, get: Getter, set: Setter) -> Self {
        Self {
            name: name.to_string(),
            value_type,
            disabled: false,
            description: String::new(),
            choices: Vec::new(),
            accessor: Accessor::Builtin { get, set },
        }
    }

    pub fn custom_property(name: &str, value_type: ValueType) -> Self {
        Self {
            name: name.to_string(),
            value_type,
            disabled: false,
            description: String::new(),
            choices: Vec::new(),
            accessor: Accessor::CustomProperty {
                name: name.to_string(),
            },
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_choices(mut self, choices: Vec<String>) -> Self {
        self.choices = choices;
        self
    }

    /// Current value of this field on `instance`
    pub fn get(&self, instance: &Instance, scope: &ObjectScope) -> PropertyValue {
        match &self.accessor {
            Accessor::Builtin { get, .. } => get(instance),
            Accessor::CustomProperty { name } => {
                custom_properties::read(instance, name, self.value_type, scope)
            }
        }
    }

    /// Write `value` to `instance`. The value is coerced to the field's type first.
    pub fn set(&self, instance: &mut Instance, value: &PropertyValue, scope: &ObjectScope) {
        let value = value.clone().coerce(self.value_type);
        match &self.accessor {
            Accessor::Builtin { set, .. } => set(instance, &value),
            Accessor::CustomProperty { name } => {
                custom_properties::write(instance, name, &value, scope);
            }
        }
    }
}

/// A node of the schema tree
#[derive(Debug, Clone)]
pub enum SchemaNode {
    Field(Field),
    Group {
        name: String,
        children: Vec<SchemaNode>,
    },
}

impl SchemaNode {
    pub fn name(&self) -> &str {
        match self {
            SchemaNode::Field(field) => &field.name,
            SchemaNode::Group { name, .. } => name,
        }
    }
}

/// Find the field at `path` (child indices from the root)
pub fn resolve_field<'a>(schema: &'a [SchemaNode], path: &[usize]) -> Option<&'a Field> {
    let (first, rest) = path.split_first()?;
    match schema.get(*first)? {
        SchemaNode::Field(field) if rest.is_empty() => Some(field),
        SchemaNode::Group { children, .. } if !rest.is_empty() => resolve_field(children, rest),
        _ => None,
    }
}

/// The fixed fields every instance has
pub fn builtin_schema() -> Vec<SchemaNode> {
    vec![
        SchemaNode::Field(
            Field::builtin(
                "Object name",
                ValueType::String,
                |i| i.object_name().into(),
                |i, v| i.set_object_name(v.to_string()),
            )
            .disabled(),
        ),
        SchemaNode::Field(Field::builtin(
            "X",
            ValueType::Number,
            |i| i.x().into(),
            |i, v| i.set_x(v.as_number() as f32),
        )),
        SchemaNode::Field(Field::builtin(
            "Y",
            ValueType::Number,
            |i| i.y().into(),
            |i, v| i.set_y(v.as_number() as f32),
        )),
        SchemaNode::Field(Field::builtin(
            "Angle",
            ValueType::Number,
            |i| i.angle().into(),
            |i, v| i.set_angle(v.as_number() as f32),
        )),
        SchemaNode::Field(Field::builtin(
            "Z Order",
            ValueType::Number,
            |i| i.z_order().into(),
            |i, v| i.set_z_order(v.as_number() as i32),
        )),
        SchemaNode::Field(Field::builtin(
            "Layer",
            ValueType::String,
            |i| i.layer().into(),
            |i, v| i.set_layer(v.to_string()),
        )),
        SchemaNode::Field(Field::builtin(
            "Locked",
            ValueType::Boolean,
            |i| i.is_locked().into(),
            |i, v| i.set_locked(v.as_bool()),
        )),
        SchemaNode::Group {
            name: "Custom size".to_string(),
            children: vec![
                SchemaNode::Field(Field::builtin(
                    "Enabled?",
                    ValueType::Boolean,
                    |i| i.has_custom_size().into(),
                    |i, v| i.set_has_custom_size(v.as_bool()),
                )),
                SchemaNode::Field(Field::builtin(
                    "Width",
                    ValueType::Number,
                    |i| i.custom_width().into(),
                    |i, v| i.set_custom_width(v.as_number() as f32),
                )),
                SchemaNode::Field(Field::builtin(
                    "Height",
                    ValueType::Number,
                    |i| i.custom_height().into(),
                    |i, v| i.set_custom_height(v.as_number() as f32),
                )),
            ],
        },
    ]
}

/// Built-in fields followed by the custom properties shared by `instances`
pub fn build_schema(
    instances: &[&Instance],
    scope: &ObjectScope,
    include_custom_properties: bool,
) -> Vec<SchemaNode> {
    let mut schema = builtin_schema();
    if include_custom_properties {
        schema.extend(custom_properties::discover_fields(instances, scope));
    }
    schema
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_schema_layout() {
        let schema = builtin_schema();
        let names: Vec<&str> = schema.iter().map(|n| n.name()).collect();
        assert_eq!(
            names,
            vec!["Object name", "X", "Y", "Angle", "Z Order", "Layer", "Locked", "Custom size"]
        );

        let SchemaNode::Group { children, .. } = &schema[7] else {
            panic!("Expected custom size group");
        };
        let child_names: Vec<&str> = children.iter().map(|n| n.name()).collect();
        assert_eq!(child_names, vec!["Enabled?", "Width", "Height"]);
    }

    #[test]
    fn test_object_name_is_disabled() {
        let schema = builtin_schema();
        let field = resolve_field(&schema, &[0]).unwrap();
        assert!(field.disabled);
        assert_eq!(field.value_type, ValueType::String);
        assert!(!resolve_field(&schema, &[1]).unwrap().disabled);
    }

    #[test]
    fn test_resolve_field_paths() {
        let schema = builtin_schema();
        assert_eq!(resolve_field(&schema, &[7, 2]).unwrap().name, "Height");
        // A group is not a field
        assert!(resolve_field(&schema, &[7]).is_none());
        // Fields have no children
        assert!(resolve_field(&schema, &[1, 0]).is_none());
        assert!(resolve_field(&schema, &[42]).is_none());
        assert!(resolve_field(&schema, &[]).is_none());
    }

    #[test]
    fn test_builtin_accessors() {
        let scope = ObjectScope::new(&[], &[], "Test", &[]);
        let schema = builtin_schema();
        let mut instance = Instance::new("Player", 1.0, 2.0);

        resolve_field(&schema, &[3])
            .unwrap()
            .set(&mut instance, &PropertyValue::Number(45.0), &scope);
        resolve_field(&schema, &[4])
            .unwrap()
            .set(&mut instance, &PropertyValue::Number(3.9), &scope);
        resolve_field(&schema, &[6])
            .unwrap()
            .set(&mut instance, &PropertyValue::Bool(true), &scope);
        resolve_field(&schema, &[7, 1])
            .unwrap()
            .set(&mut instance, &PropertyValue::Number(64.0), &scope);

        assert_eq!(instance.angle(), 45.0);
        assert_eq!(instance.z_order(), 3);
        assert!(instance.is_locked());
        assert_eq!(instance.custom_width(), 64.0);
        assert_eq!(
            resolve_field(&schema, &[1]).unwrap().get(&instance, &scope),
            PropertyValue::Number(1.0)
        );
    }
}

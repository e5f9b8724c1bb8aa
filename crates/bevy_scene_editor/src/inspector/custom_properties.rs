//! Custom property adapter
//!
//! Instance custom properties are always stored as strings. This module
//! turns them into typed schema fields, parses the stored string on read
//! and formats typed values back to a string on write.

use bevy::log::warn;
use bevy_scene_core::{Instance, ObjectScope, PropertyMap, PropertyType, PropertyValue, ValueType};

use super::schema::{Field, SchemaNode};

/// Fields for the custom properties declared on every instance of the selection,
/// in the first instance's declaration order. A property is kept only when all
/// instances declare it with the same value type.
pub fn discover_fields(instances: &[&Instance], scope: &ObjectScope) -> Vec<SchemaNode> {
    let Some((first, rest)) = instances.split_first() else {
        return Vec::new();
    };

    let others: Vec<PropertyMap> = rest.iter().map(|i| i.custom_properties(scope)).collect();

    first
        .custom_properties(scope)
        .iter()
        .filter(|property| {
            let value_type = property.prop_type.value_type();
            others.iter().all(|map| {
                map.get(&property.name)
                    .is_some_and(|other| other.prop_type.value_type() == value_type)
            })
        })
        .map(|property| {
            let mut field = Field::custom_property(&property.name, property.prop_type.value_type())
                .with_description(property.description.clone());
            if property.prop_type == PropertyType::Choice {
                field = field.with_choices(property.choices.clone());
            }
            SchemaNode::Field(field)
        })
        .collect()
}

/// Read a custom property as `value_type`. Undeclared properties read as the
/// type's default.
pub fn read(
    instance: &Instance,
    name: &str,
    value_type: ValueType,
    scope: &ObjectScope,
) -> PropertyValue {
    let declared = scope
        .instance_properties(instance.object_name())
        .iter()
        .find(|def| def.name == name);
    match declared {
        Some(def) => {
            let raw = instance.raw_custom_property(name).unwrap_or(def.default.as_str());
            parse_raw(raw, value_type)
        }
        None => PropertyValue::default_for(value_type),
    }
}

/// Write a typed value to a custom property. Returns `false` when the
/// property is not declared for the instance's object.
pub fn write(
    instance: &mut Instance,
    name: &str,
    value: &PropertyValue,
    scope: &ObjectScope,
) -> bool {
    let updated = instance.update_custom_property(name, to_raw(value), scope);
    if !updated {
        warn!(
            "Instance of '{}' has no custom property '{}' in layout '{}'",
            instance.object_name(),
            name,
            scope.layout_name()
        );
    }
    updated
}

/// Parse a stored string. Booleans are stored as "1"/"0" but "true" is accepted too.
pub fn parse_raw(raw: &str, value_type: ValueType) -> PropertyValue {
    match value_type {
        ValueType::Boolean => PropertyValue::Bool(matches!(raw.trim(), "true" | "1")),
        ValueType::Number => PropertyValue::Number(parse_number(raw)),
        ValueType::String => PropertyValue::String(raw.to_string()),
    }
}

/// Format a typed value for storage
pub fn to_raw(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
        PropertyValue::Number(n) => format_number(*n),
        PropertyValue::String(s) => s.clone(),
    }
}

/// Shortest decimal text for a number ("5", "2.5")
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Parse user or stored numeric text. Leading numeric text is used
/// ("12px" is 12); anything unparseable, NaN or infinite is 0.
pub fn parse_number(text: &str) -> f64 {
    let value = parse_leading_number(text.trim()).unwrap_or(0.0);
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn parse_leading_number(text: &str) -> Option<f64> {
    if let Ok(value) = text.parse::<f64>() {
        return Some(value);
    }

    let prefix_len = text
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);

    (1..=prefix_len)
        .rev()
        .find_map(|len| text[..len].parse::<f64>().ok())
}

//! Common value of a field across a multi-selection

use bevy_scene_core::{Instance, ObjectScope, PropertyValue};

use super::schema::Field;

/// Value to display for `field` over `instances`.
///
/// Returns the first instance's value when every instance agrees. At the first
/// disagreement the result is `default` if one is given, otherwise the first
/// instance's value is kept. `None` for an empty selection.
pub fn common_value(
    instances: &[&Instance],
    field: &Field,
    scope: &ObjectScope,
    default: Option<PropertyValue>,
) -> Option<PropertyValue> {
    let (first, rest) = instances.split_first()?;
    let value = field.get(first, scope);

    for instance in rest {
        if field.get(instance, scope) != value {
            return Some(default.unwrap_or(value));
        }
    }

    Some(value)
}

/// Whether every instance has the same value for `field`
pub fn values_agree(instances: &[&Instance], field: &Field, scope: &ObjectScope) -> bool {
    let Some((first, rest)) = instances.split_first() else {
        return true;
    };
    let value = field.get(first, scope);
    rest.iter().all(|instance| field.get(instance, scope) == value)
}

//! Placed object instances

use crate::{ObjectScope, PropertyType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// An object placed in a layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: Uuid,
    object_name: String,
    x: f32,
    y: f32,
    #[serde(default)]
    angle: f32,
    #[serde(default)]
    z_order: i32,
    #[serde(default)]
    layer: String,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    has_custom_size: bool,
    #[serde(default)]
    custom_width: f32,
    #[serde(default)]
    custom_height: f32,
    /// Custom property overrides, always stored as strings
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    custom_properties: HashMap<String, String>,
}

impl Instance {
    /// Create an instance of `object_name` at a position on the base layer
    pub fn new(object_name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            object_name: object_name.into(),
            x,
            y,
            angle: 0.0,
            z_order: 0,
            layer: String::new(),
            locked: false,
            has_custom_size: false,
            custom_width: 0.0,
            custom_height: 0.0,
            custom_properties: HashMap::new(),
        }
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn set_object_name(&mut self, name: impl Into<String>) {
        self.object_name = name.into();
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    /// Angle in degrees
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    pub fn z_order(&self) -> i32 {
        self.z_order
    }

    pub fn set_z_order(&mut self, z_order: i32) {
        self.z_order = z_order;
    }

    pub fn layer(&self) -> &str {
        &self.layer
    }

    pub fn set_layer(&mut self, layer: impl Into<String>) {
        self.layer = layer.into();
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn has_custom_size(&self) -> bool {
        self.has_custom_size
    }

    pub fn set_has_custom_size(&mut self, enabled: bool) {
        self.has_custom_size = enabled;
    }

    pub fn custom_width(&self) -> f32 {
        self.custom_width
    }

    pub fn set_custom_width(&mut self, width: f32) {
        self.custom_width = width;
    }

    pub fn custom_height(&self) -> f32 {
        self.custom_height
    }

    pub fn set_custom_height(&mut self, height: f32) {
        self.custom_height = height;
    }

    /// Declared custom properties of this instance's object type with their
    /// current values. Properties without an override report the declared default.
    pub fn custom_properties(&self, scope: &ObjectScope) -> PropertyMap {
        let entries = scope
            .instance_properties(&self.object_name)
            .iter()
            .map(|def| PropertyDescriptor {
                name: def.name.clone(),
                value: self
                    .custom_properties
                    .get(&def.name)
                    .cloned()
                    .unwrap_or_else(|| def.default.clone()),
                prop_type: def.prop_type,
                description: def.description.clone(),
                choices: def.choices.clone(),
            })
            .collect();
        PropertyMap { entries }
    }

    /// Store a custom property value. Returns `false` (and changes nothing)
    /// when the property is not declared for this instance's object type.
    pub fn update_custom_property(
        &mut self,
        name: &str,
        value: impl Into<String>,
        scope: &ObjectScope,
    ) -> bool {
        let declared = scope
            .instance_properties(&self.object_name)
            .iter()
            .any(|def| def.name == name);
        if !declared {
            return false;
        }
        self.custom_properties.insert(name.to_string(), value.into());
        true
    }

    /// Raw override for a custom property, if one has been set
    pub fn raw_custom_property(&self, name: &str) -> Option<&str> {
        self.custom_properties.get(name).map(|s| s.as_str())
    }
}

/// A custom property resolved for one instance
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    pub name: String,
    /// Current value, always a string
    pub value: String,
    pub prop_type: PropertyType,
    pub description: String,
    pub choices: Vec<String>,
}

/// Ordered set of resolved custom properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap {
    entries: Vec<PropertyDescriptor>,
}

impl PropertyMap {
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.entries.iter().find(|p| p.name == name)
    }

    /// Property names in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = &'a PropertyDescriptor;
    type IntoIter = std::slice::Iter<'a, PropertyDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ObjectTypeDef, PropertyDef, SceneObject};

    fn text_type() -> Vec<ObjectTypeDef> {
        vec![ObjectTypeDef::new("Text")
            .with_property(PropertyDef::new("Bold", PropertyType::Boolean, "0"))
            .with_property(PropertyDef::new("Size", PropertyType::Number, "20"))]
    }

    #[test]
    fn test_new_instance() {
        let instance = Instance::new("Player", 10.0, 20.0);
        assert_eq!(instance.object_name(), "Player");
        assert_eq!(instance.x(), 10.0);
        assert_eq!(instance.y(), 20.0);
        assert_eq!(instance.layer(), "");
        assert!(!instance.is_locked());
        assert!(!instance.has_custom_size());
    }

    #[test]
    fn test_custom_properties_defaults_and_overrides() {
        let types = text_type();
        let objects = vec![SceneObject::new("Title", "Text")];
        let scope = ObjectScope::new(&types, &[], "Menu", &objects);

        let mut instance = Instance::new("Title", 0.0, 0.0);
        let props = instance.custom_properties(&scope);
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["Bold", "Size"]);
        assert_eq!(props.get("Size").unwrap().value, "20");

        assert!(instance.update_custom_property("Size", "32", &scope));
        let props = instance.custom_properties(&scope);
        assert_eq!(props.get("Size").unwrap().value, "32");
        assert_eq!(props.get("Size").unwrap().prop_type, PropertyType::Number);
    }

    #[test]
    fn test_update_undeclared_property_is_rejected() {
        let types = text_type();
        let objects = vec![SceneObject::new("Title", "Text")];
        let scope = ObjectScope::new(&types, &[], "Menu", &objects);

        let mut instance = Instance::new("Title", 0.0, 0.0);
        assert!(!instance.update_custom_property("Italic", "1", &scope));
        assert!(instance.raw_custom_property("Italic").is_none());
    }

    #[test]
    fn test_unknown_object_has_no_properties() {
        let types = text_type();
        let scope = ObjectScope::new(&types, &[], "Menu", &[]);
        let instance = Instance::new("Nobody", 0.0, 0.0);
        assert!(instance.custom_properties(&scope).is_empty());
    }
}

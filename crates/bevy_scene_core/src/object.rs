//! Object and object type definitions

use crate::ValueType;
use serde::{Deserialize, Serialize};

/// Declared type of an instance property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Boolean,
    Number,
    #[default]
    String,
    /// One of a fixed list of strings
    Choice,
    /// Color stored as "r;g;b"
    Color,
    /// Name of a project resource
    Resource,
}

impl PropertyType {
    /// The type used to edit and coerce the stored string.
    /// Anything that is not a boolean or a number is edited as a string.
    pub fn value_type(&self) -> ValueType {
        match self {
            PropertyType::Boolean => ValueType::Boolean,
            PropertyType::Number => ValueType::Number,
            _ => ValueType::String,
        }
    }
}

/// Definition of an instance property declared by an object type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDef {
    pub name: String,
    #[serde(rename = "type", default)]
    pub prop_type: PropertyType,
    /// Value used when the instance has no override, always stored as a string
    #[serde(default)]
    pub default: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Allowed values for `PropertyType::Choice`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

impl PropertyDef {
    pub fn new(name: impl Into<String>, prop_type: PropertyType, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prop_type,
            default: default.into(),
            description: String::new(),
            choices: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_choices(mut self, choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }
}

/// An object type (e.g. "Sprite", "Text") and the properties its instances carry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectTypeDef {
    pub name: String,
    #[serde(default)]
    pub instance_properties: Vec<PropertyDef>,
}

impl ObjectTypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instance_properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: PropertyDef) -> Self {
        self.instance_properties.push(property);
        self
    }
}

/// A named object that instances are placed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    /// Name of the `ObjectTypeDef` this object is built from
    pub type_name: String,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

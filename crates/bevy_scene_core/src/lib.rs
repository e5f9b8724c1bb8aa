//! Core data structures for bevy_scene_editor
//!
//! This crate provides the scene model edited by the property grid:
//! - `Project` - Object types, global objects and layouts
//! - `Layout` - A scene with layers, scene objects and placed instances
//! - `Instance` - A placed object with position, size and custom properties
//! - `ObjectTypeDef` - Declares the custom properties of every instance of a type
//! - `PropertyValue` - Typed value used when reading and writing fields
//! - `ObjectScope` - Project + layout pair used to resolve custom properties

mod instance;
mod layer;
mod layout;
mod object;
mod project;
mod value;

pub use instance::{Instance, PropertyDescriptor, PropertyMap};
pub use layer::{Layer, BASE_LAYER};
pub use layout::Layout;
pub use object::{ObjectTypeDef, PropertyDef, PropertyType, SceneObject};
pub use project::{ObjectScope, Project};
pub use value::{PropertyValue, ValueType};

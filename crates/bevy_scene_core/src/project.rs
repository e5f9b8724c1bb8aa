//! Project: object types, global objects and layouts

use crate::{Instance, Layout, ObjectTypeDef, PropertyDef, SceneObject};
use serde::{Deserialize, Serialize};

/// A complete project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub object_types: Vec<ObjectTypeDef>,
    /// Objects shared by every layout
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    #[serde(default)]
    pub layouts: Vec<Layout>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_object_type(&mut self, object_type: ObjectTypeDef) {
        self.object_types.push(object_type);
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn add_layout(&mut self, layout: Layout) {
        self.layouts.push(layout);
    }

    pub fn get_layout(&self, name: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.name == name)
    }

    pub fn get_object_type(&self, name: &str) -> Option<&ObjectTypeDef> {
        self.object_types.iter().find(|t| t.name == name)
    }

    /// Scope used to resolve custom properties of instances in `layout`
    pub fn scope<'a>(&'a self, layout: &'a Layout) -> ObjectScope<'a> {
        ObjectScope::new(&self.object_types, &self.objects, &layout.name, &layout.objects)
    }

    /// Borrow a layout's instances mutably alongside the scope needed to edit them
    pub fn edit_layout(&mut self, name: &str) -> Option<(ObjectScope<'_>, &mut Vec<Instance>)> {
        let layout = self.layouts.iter_mut().find(|l| l.name == name)?;
        let scope = ObjectScope::new(
            &self.object_types,
            &self.objects,
            &layout.name,
            &layout.objects,
        );
        Some((scope, &mut layout.instances))
    }

    /// Check that every object has a known type and every instance a known
    /// object and an existing layer
    pub fn validate(&self) -> Result<(), String> {
        let mut errors = Vec::new();

        for object in &self.objects {
            if self.get_object_type(&object.type_name).is_none() {
                errors.push(format!(
                    "Global object '{}' has unknown type '{}'",
                    object.name, object.type_name
                ));
            }
        }

        for layout in &self.layouts {
            for object in &layout.objects {
                if self.get_object_type(&object.type_name).is_none() {
                    errors.push(format!(
                        "Object '{}' in layout '{}' has unknown type '{}'",
                        object.name, layout.name, object.type_name
                    ));
                }
            }

            let scope = self.scope(layout);
            for instance in &layout.instances {
                if scope.find_object(instance.object_name()).is_none() {
                    errors.push(format!(
                        "Instance {} in layout '{}' references unknown object '{}'",
                        instance.id, layout.name, instance.object_name()
                    ));
                }
                if !layout.has_layer(instance.layer()) {
                    errors.push(format!(
                        "Instance {} in layout '{}' is on missing layer '{}'",
                        instance.id, layout.name, instance.layer()
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.join("\n"))
        }
    }
}

/// The project + layout pair custom property lookups are resolved against
#[derive(Debug, Clone, Copy)]
pub struct ObjectScope<'a> {
    object_types: &'a [ObjectTypeDef],
    global_objects: &'a [SceneObject],
    layout_name: &'a str,
    layout_objects: &'a [SceneObject],
}

impl<'a> ObjectScope<'a> {
    pub fn new(
        object_types: &'a [ObjectTypeDef],
        global_objects: &'a [SceneObject],
        layout_name: &'a str,
        layout_objects: &'a [SceneObject],
    ) -> Self {
        Self {
            object_types,
            global_objects,
            layout_name,
            layout_objects,
        }
    }

    pub fn layout_name(&self) -> &'a str {
        self.layout_name
    }

    /// Find an object by name. Layout objects shadow global ones.
    pub fn find_object(&self, name: &str) -> Option<&'a SceneObject> {
        self.layout_objects
            .iter()
            .find(|o| o.name == name)
            .or_else(|| self.global_objects.iter().find(|o| o.name == name))
    }

    pub fn object_type(&self, type_name: &str) -> Option<&'a ObjectTypeDef> {
        self.object_types.iter().find(|t| t.name == type_name)
    }

    /// Instance properties declared for the type of `object_name`.
    /// Empty when the object or its type is unknown.
    pub fn instance_properties(&self, object_name: &str) -> &'a [PropertyDef] {
        self.find_object(object_name)
            .and_then(|object| self.object_type(&object.type_name))
            .map(|t| t.instance_properties.as_slice())
            .unwrap_or(&[])
    }
}

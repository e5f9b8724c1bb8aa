//! Layout (scene) containing layers, objects and instances

use crate::{Instance, Layer, SceneObject};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A layout: one scene of the project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    pub layers: Vec<Layer>,
    /// Objects only available in this layout
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    #[serde(default)]
    pub instances: Vec<Instance>,
}

impl Layout {
    /// Create a new empty layout with the base layer
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: vec![Layer::base()],
            objects: Vec::new(),
            instances: Vec::new(),
        }
    }

    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn has_layer(&self, name: &str) -> bool {
        self.layers.iter().any(|l| l.name == name)
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Add an instance to the layout
    pub fn add_instance(&mut self, instance: Instance) {
        self.instances.push(instance);
    }

    /// Get instance by ID
    pub fn get_instance(&self, id: Uuid) -> Option<&Instance> {
        self.instances.iter().find(|i| i.id == id)
    }

    /// Instances drawn on a layer, in placement order
    pub fn instances_on_layer<'a>(&'a self, layer: &'a str) -> impl Iterator<Item = &'a Instance> {
        self.instances.iter().filter(move |i| i.layer() == layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layout() {
        let layout = Layout::new("Level 1");
        assert_eq!(layout.name, "Level 1");
        assert_eq!(layout.layers.len(), 1);
        assert!(layout.has_layer(""));
        assert!(layout.instances.is_empty());
    }

    #[test]
    fn test_instance_operations() {
        let mut layout = Layout::new("Test");
        let instance = Instance::new("Player", 100.0, 100.0);
        let id = instance.id;

        layout.add_instance(instance);
        assert_eq!(layout.get_instance(id).unwrap().object_name(), "Player");
        assert!(layout.get_instance(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_instances_on_layer() {
        let mut layout = Layout::new("Test");
        layout.add_layer(Layer::new("UI"));
        let mut hud = Instance::new("Hud", 0.0, 0.0);
        hud.set_layer("UI");
        layout.add_instance(hud);
        layout.add_instance(Instance::new("Player", 0.0, 0.0));

        assert_eq!(layout.instances_on_layer("UI").count(), 1);
        assert_eq!(layout.instances_on_layer("").count(), 1);
    }
}

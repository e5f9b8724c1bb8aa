//! Sample project shown when the editor starts without a file

use super::SceneDocument;
use bevy_scene_core::{
    Instance, Layer, Layout, ObjectTypeDef, Project, PropertyDef, PropertyType, SceneObject,
};

impl SceneDocument {
    /// A small platformer level with sprites, texts and enemies
    pub fn demo() -> Self {
        let mut project = Project::new("Demo");

        project.add_object_type(ObjectTypeDef::new("Sprite"));
        project.add_object_type(
            ObjectTypeDef::new("Text")
                .with_property(PropertyDef::new("Text", PropertyType::String, "Hello"))
                .with_property(
                    PropertyDef::new("Size", PropertyType::Number, "20")
                        .with_description("Font size in pixels"),
                )
                .with_property(PropertyDef::new("Bold", PropertyType::Boolean, "false"))
                .with_property(
                    PropertyDef::new("Align", PropertyType::Choice, "left")
                        .with_choices(["left", "center", "right"]),
                )
                .with_property(PropertyDef::new("Color", PropertyType::Color, "255;255;255")),
        );
        project.add_object_type(
            ObjectTypeDef::new("Enemy")
                .with_property(PropertyDef::new("Health", PropertyType::Number, "100"))
                .with_property(PropertyDef::new("Boss", PropertyType::Boolean, "false")),
        );

        // Shared across every layout
        project.add_object(SceneObject::new("Player", "Sprite"));

        let mut level = Layout::new("Level 1");
        level.add_layer(Layer::new("UI"));
        level.add_object(SceneObject::new("Ground", "Sprite"));
        level.add_object(SceneObject::new("Goblin", "Enemy"));
        level.add_object(SceneObject::new("Orc", "Enemy"));
        level.add_object(SceneObject::new("Score", "Text"));

        level.add_instance(Instance::new("Player", 64.0, 320.0));
        let mut ground = Instance::new("Ground", 0.0, 384.0);
        ground.set_has_custom_size(true);
        ground.set_custom_width(1280.0);
        ground.set_custom_height(64.0);
        ground.set_locked(true);
        ground.set_z_order(-1);
        level.add_instance(ground);
        for x in [400.0, 560.0] {
            level.add_instance(Instance::new("Goblin", x, 320.0));
        }
        level.add_instance(Instance::new("Orc", 800.0, 300.0));
        let mut score = Instance::new("Score", 16.0, 16.0);
        score.set_layer("UI");
        level.add_instance(score);

        let mut menu = Layout::new("Main Menu");
        menu.add_object(SceneObject::new("Title", "Text"));
        menu.add_object(SceneObject::new("Subtitle", "Text"));
        menu.add_instance(Instance::new("Title", 320.0, 120.0));
        menu.add_instance(Instance::new("Subtitle", 320.0, 180.0));

        project.add_layout(level);
        project.add_layout(menu);

        let mut document = Self::from_project(project);
        if let Some((scope, instances)) = document.project.edit_layout("Level 1") {
            if let Some(orc) = instances.iter_mut().find(|i| i.object_name() == "Orc") {
                orc.update_custom_property("Health", "250", &scope);
                orc.update_custom_property("Boss", "1", &scope);
            }
            if let Some(score) = instances.iter_mut().find(|i| i.object_name() == "Score") {
                score.update_custom_property("Text", "Score: 0", &scope);
            }
        }
        if let Some((scope, instances)) = document.project.edit_layout("Main Menu") {
            for instance in instances.iter_mut() {
                instance.update_custom_property("Align", "center", &scope);
            }
            if let Some(title) = instances.first_mut() {
                title.update_custom_property("Size", "48", &scope);
                title.update_custom_property("Bold", "true", &scope);
            }
        }
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_project_is_valid() {
        let doc = SceneDocument::demo();
        assert!(doc.project.validate().is_ok());
        assert!(!doc.dirty);
        assert_eq!(doc.project.layouts.len(), 2);
    }

    #[test]
    fn test_demo_overrides_are_applied() {
        let doc = SceneDocument::demo();
        let level = doc.project.get_layout("Level 1").unwrap();
        let orc = level
            .instances
            .iter()
            .find(|i| i.object_name() == "Orc")
            .unwrap();
        assert_eq!(orc.raw_custom_property("Health"), Some("250"));
        assert_eq!(orc.raw_custom_property("Boss"), Some("1"));
    }
}

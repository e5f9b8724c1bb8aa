//! Layout layers

use serde::{Deserialize, Serialize};

/// Name of the base layer every layout has
pub const BASE_LAYER: &str = "";

/// A layer instances are drawn on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
        }
    }

    /// The unnamed base layer
    pub fn base() -> Self {
        Self::new(BASE_LAYER)
    }

    pub fn is_base(&self) -> bool {
        self.name == BASE_LAYER
    }

    /// Name shown in the editor ("Base layer" for the unnamed one)
    pub fn display_name(&self) -> &str {
        if self.is_base() {
            "Base layer"
        } else {
            &self.name
        }
    }
}

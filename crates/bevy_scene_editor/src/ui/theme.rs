//! Editor theme and styling for egui
//!
//! Flat dark theme in the Bevy Feathers palette.

use bevy_egui::egui::{self, Color32, CornerRadius, Stroke, Visuals};

pub struct EditorTheme;

impl EditorTheme {
    // Backgrounds
    pub const BG_WINDOW: Color32 = Color32::from_rgb(40, 41, 47);
    pub const BG_PANEL: Color32 = Color32::from_rgb(52, 54, 60);
    pub const BG_WIDGET: Color32 = Color32::from_rgb(67, 68, 75);
    pub const BG_HOVER: Color32 = Color32::from_rgb(85, 86, 94);
    pub const BG_INPUT: Color32 = Color32::from_rgb(34, 35, 40);

    pub const BORDER_WIDGET: Color32 = Color32::from_rgb(85, 86, 90);

    pub const ACCENT_BLUE: Color32 = Color32::from_rgb(45, 130, 209);
    pub const SELECTION_BG: Color32 = Color32::from_rgb(50, 70, 100);

    // Text
    pub const TEXT_BRIGHT: Color32 = Color32::from_rgb(191, 191, 193);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(185, 185, 187);
    /// Field labels in the property grid
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 162);
    /// Group headers in the property grid
    pub const TEXT_SUBHEADER: Color32 = Color32::from_rgb(200, 200, 202);
    /// Hint text of inputs whose selected values differ
    pub const TEXT_PLACEHOLDER: Color32 = Color32::from_rgb(120, 120, 122);
    pub const TEXT_WHITE: Color32 = Color32::WHITE;

    pub const ERROR: Color32 = Color32::from_rgb(156, 82, 92);
    pub const WARNING: Color32 = Color32::from_rgb(200, 160, 60);

    /// Apply the editor theme to the egui context.
    pub fn apply(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let mut visuals = Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.faint_bg_color = Self::BG_WINDOW;
        visuals.extreme_bg_color = Self::BG_INPUT;
        visuals.popup_shadow = egui::Shadow::NONE;
        visuals.window_shadow = egui::Shadow::NONE;

        visuals.widgets.noninteractive.bg_fill = Self::BG_WIDGET;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, Self::BORDER_WIDGET);

        visuals.widgets.inactive.bg_fill = Self::BG_WIDGET;
        visuals.widgets.inactive.weak_bg_fill = Self::BG_WIDGET;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.hovered.bg_fill = Self::BG_HOVER;
        visuals.widgets.hovered.weak_bg_fill = Self::BG_HOVER;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Self::TEXT_BRIGHT);

        // Solid accent while pressed, white text on top
        visuals.widgets.active.bg_fill = Self::ACCENT_BLUE;
        visuals.widgets.active.weak_bg_fill = Self::ACCENT_BLUE;
        visuals.widgets.active.fg_stroke = Stroke::new(1.5, Self::TEXT_WHITE);

        for widget in [
            &mut visuals.widgets.noninteractive,
            &mut visuals.widgets.inactive,
            &mut visuals.widgets.hovered,
            &mut visuals.widgets.active,
            &mut visuals.widgets.open,
        ] {
            widget.corner_radius = CornerRadius::same(4);
        }

        visuals.selection.bg_fill = Self::SELECTION_BG;
        visuals.selection.stroke = Stroke::new(1.0, Self::ACCENT_BLUE);
        visuals.window_corner_radius = CornerRadius::same(6);
        visuals.warn_fg_color = Self::WARNING;
        visuals.error_fg_color = Self::ERROR;

        style.spacing.item_spacing = egui::vec2(6.0, 4.0);
        style.spacing.button_padding = egui::vec2(6.0, 3.0);
        style.spacing.interact_size = egui::vec2(40.0, 20.0);

        style.visuals = visuals;
        ctx.set_style(style);
    }
}

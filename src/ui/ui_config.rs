use eframe::egui::Color32;

/// Accent colors shared by both themes
#[derive(Clone, Copy)]
pub struct UiColors {
    pub error: Color32,
    pub success: Color32,
    pub danger: Color32,
    pub hint: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub row_image_size: f32,
    pub export_panel_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        error: Color32::from_rgb(220, 80, 80),
        success: Color32::from_rgb(70, 170, 90),
        danger: Color32::from_rgb(230, 60, 60),
        hint: Color32::GRAY,
    },
    row_image_size: 28.0,
    export_panel_height: 160.0,
};

use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::config::Theme;
use crate::ui::UI_CONFIG;

/// Applies the persisted theme. Called every frame so a toggle on the
/// settings screen takes effect immediately.
pub(crate) fn apply_theme(ctx: &Context, theme: Theme) {
    let visuals = match theme {
        Theme::Dark => Visuals::dark(),
        Theme::Light => Visuals::light(),
    };
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

pub(crate) fn error_text(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.error)
}

pub(crate) fn success_text(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.success)
}

pub(crate) fn hint_text(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.hint).small()
}

pub(crate) fn section_heading(ui: &mut Ui, text: &str) {
    ui.add_space(10.0);
    ui.heading(text);
    ui.separator();
}

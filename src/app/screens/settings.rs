use std::time::Duration;

use eframe::egui::{
    CentralPanel, Context, Grid, RichText, ScrollArea, TextEdit, TextStyle, TopBottomPanel, Ui,
};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::app::state::{PopupScreen, Screen, SettingsScreen};
use crate::app::{App, screens::screen_view::ScreenView};
use crate::config::Theme;
use crate::domain::Pair;
use crate::ui::{
    UI_CONFIG, UI_TEXT, error_text, format_storage_kb, hint_text, section_heading, success_text,
};

const SUCCESS_VISIBLE: Duration = Duration::from_secs(3);
const COPIED_LABEL_VISIBLE: Duration = Duration::from_secs(2);

impl ScreenView for SettingsScreen {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Screen {
        let mut go_back = false;

        TopBottomPanel::top("settings_header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button(UI_TEXT.btn_back).clicked() {
                    go_back = true;
                }
                ui.heading(UI_TEXT.settings_title);
            });
            ui.add_space(4.0);
        });

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_success_message(ui, ctx);
                    self.render_stats(app, ui);
                    self.render_theme_picker(app, ui);
                    self.render_export(app, ui, ctx);
                    self.render_danger_zone(app, ui);
                });
        });

        if go_back {
            Screen::Popup(PopupScreen::default())
        } else {
            Screen::Settings(self.clone())
        }
    }
}

impl SettingsScreen {
    fn render_success_message(&mut self, ui: &mut Ui, ctx: &Context) {
        let Some(message) = &self.success else {
            return;
        };
        if message.shown_at.elapsed() > SUCCESS_VISIBLE {
            self.success = None;
            return;
        }
        ui.label(success_text(&message.text));
        ui.add_space(6.0);
        ctx.request_repaint_after(Duration::from_millis(250));
    }

    fn render_stats(&mut self, app: &App, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.stats_heading);
        Grid::new("settings_stats")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label(UI_TEXT.label_total_pairs);
                ui.label(RichText::new(app.watchlist.len().to_string()).strong());
                ui.end_row();

                ui.label(UI_TEXT.label_storage_used);
                ui.label(RichText::new(format_storage_kb(app.store.bytes_used())).strong());
                ui.end_row();
            });
    }

    fn render_theme_picker(&mut self, app: &mut App, ui: &mut Ui) {
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.label_theme);
            for theme in Theme::iter() {
                if ui
                    .selectable_label(app.theme == theme, theme.to_string())
                    .clicked()
                {
                    app.theme = theme;
                }
            }
        });
    }

    fn render_export(&mut self, app: &App, ui: &mut Ui, ctx: &Context) {
        section_heading(ui, UI_TEXT.export_heading);
        if ui.button(UI_TEXT.btn_export).clicked() {
            self.export_text = Some(export_pairs_text(app.watchlist.pairs()));
        }

        let Some(text) = &self.export_text else {
            return;
        };
        ui.add_space(4.0);
        ScrollArea::vertical()
            .id_salt("pairs_export")
            .max_height(UI_CONFIG.export_panel_height)
            .show(ui, |ui| {
                ui.add(
                    TextEdit::multiline(&mut text.as_str())
                        .font(TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
            });
        ui.add_space(4.0);

        let copied_recently = self
            .copied_at
            .is_some_and(|at| at.elapsed() < COPIED_LABEL_VISIBLE);
        let copy_label = if copied_recently {
            UI_TEXT.btn_copied
        } else {
            UI_TEXT.btn_copy
        };
        if ui.button(copy_label).clicked() {
            ctx.copy_text(text.clone());
            self.copied_at = Some(std::time::Instant::now());
            self.show_success(UI_TEXT.msg_copied);
        }
        if copied_recently {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }

    fn render_danger_zone(&mut self, app: &mut App, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.danger_heading);
        if self.confirm_clear {
            ui.label(hint_text(UI_TEXT.clear_warning));
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .button(error_text(UI_TEXT.btn_confirm_clear))
                    .clicked()
                {
                    app.clear_all_pairs();
                    self.export_text = None;
                    self.confirm_clear = false;
                    self.show_success(UI_TEXT.msg_cleared);
                }
                if ui.button(UI_TEXT.btn_cancel).clicked() {
                    self.confirm_clear = false;
                }
            });
        } else if ui.button(UI_TEXT.btn_clear).clicked() {
            self.confirm_clear = true;
        }
    }
}

#[derive(Serialize)]
struct ExportPair<'a> {
    name: &'a str,
    address: &'a str,
}

/// `{name, address}` pairs as indented JSON, or the literal empty-list
/// message.
fn export_pairs_text(pairs: &[Pair]) -> String {
    if pairs.is_empty() {
        return UI_TEXT.export_empty.to_owned();
    }
    let entries: Vec<ExportPair<'_>> = pairs
        .iter()
        .map(|p| ExportPair {
            name: &p.name,
            address: p.address.as_str(),
        })
        .collect();
    serde_json::to_string_pretty(&entries).unwrap_or_else(|e| {
        log::error!("Failed to serialize pair export: {e}");
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PairUpdate, WatchList};

    #[test]
    fn export_with_no_pairs_is_the_literal_message() {
        assert_eq!(export_pairs_text(&[]), "No pairs to export.");
    }

    #[test]
    fn export_is_indented_name_address_json() {
        let mut list = WatchList::default();
        let pair = list
            .validate_new("Test", "0x0000000000000000000000000000000000000000")
            .unwrap();
        list.apply(PairUpdate::Add(pair));

        let text = export_pairs_text(list.pairs());
        assert!(text.starts_with("[\n"));
        assert!(text.contains("\"name\": \"Test\""));
        assert!(text.contains("\"address\": \"0x0000000000000000000000000000000000000000\""));
        // Only name and address are exported.
        assert!(!text.contains("price"));
        assert!(!text.contains("\"id\""));
    }
}

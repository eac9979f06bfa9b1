use eframe::egui::{
    Align, Button, CentralPanel, Context, Key, Layout, OpenUrl, TextEdit, TopBottomPanel, Ui, vec2,
};

use crate::app::state::{PopupScreen, Screen, SettingsScreen};
use crate::app::{App, screens::screen_view::ScreenView};
use crate::ui::{ICON_SETTINGS, PairListEvent, UI_TEXT, error_text, render_pair_list};

impl ScreenView for PopupScreen {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Screen {
        let mut go_settings = false;

        TopBottomPanel::top("popup_header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading(UI_TEXT.app_title);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .button(ICON_SETTINGS)
                        .on_hover_text(UI_TEXT.hint_settings)
                        .clicked()
                    {
                        go_settings = true;
                    }
                    let refreshing = app.is_refreshing();
                    let label = if refreshing {
                        UI_TEXT.btn_refreshing
                    } else {
                        UI_TEXT.btn_refresh_all
                    };
                    if ui.add_enabled(!refreshing, Button::new(label)).clicked() {
                        app.refresh_all();
                    }
                });
            });
            ui.add_space(4.0);
        });

        TopBottomPanel::top("popup_add_form").show(ctx, |ui| {
            self.render_add_form(app, ui);
        });

        CentralPanel::default().show(ctx, |ui| {
            let events = render_pair_list(ui, app.watchlist.pairs());
            let mut removed = false;
            for event in events {
                match event {
                    PairListEvent::Remove(id) => {
                        app.remove_pair(&id);
                        removed = true;
                    }
                    PairListEvent::OpenUrl(url) => {
                        if !removed {
                            ctx.open_url(OpenUrl::new_tab(url));
                        }
                    }
                }
            }
        });

        if go_settings {
            Screen::Settings(SettingsScreen::default())
        } else {
            Screen::Popup(self.clone())
        }
    }
}

impl PopupScreen {
    fn render_add_form(&mut self, app: &mut App, ui: &mut Ui) {
        ui.add_space(6.0);
        let name_response = ui.add(
            TextEdit::singleline(&mut self.name_input)
                .hint_text(UI_TEXT.hint_name)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(4.0);
        let address_response = ui.add(
            TextEdit::singleline(&mut self.address_input)
                .hint_text(UI_TEXT.hint_address)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(4.0);

        let add_clicked = ui
            .add(Button::new(UI_TEXT.btn_add).min_size(vec2(ui.available_width(), 0.0)))
            .clicked();
        let enter_pressed = (name_response.lost_focus() || address_response.lost_focus())
            && ui.input(|i| i.key_pressed(Key::Enter));

        if add_clicked || enter_pressed {
            match app.submit_new_pair(&self.name_input, &self.address_input) {
                Ok(()) => {
                    self.name_input.clear();
                    self.address_input.clear();
                    self.form_error = None;
                }
                Err(e) => self.form_error = Some(e.to_string()),
            }
        }

        if let Some(error) = &self.form_error {
            ui.add_space(2.0);
            ui.label(error_text(error));
        }
        ui.add_space(6.0);
    }
}

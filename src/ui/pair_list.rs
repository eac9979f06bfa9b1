use eframe::egui::{
    Align, CursorIcon, Frame, Image, Label, Layout, Margin, RichText, ScrollArea, Sense, Spinner,
    Ui, Vec2, load::TexturePoll,
};

use crate::domain::Pair;
use crate::ui::row_view::{RowStatus, row_status};
use crate::ui::styles::error_text;
use crate::ui::ui_text::{ICON_HOURGLASS, ICON_PLACEHOLDER, ICON_REMOVE};
use crate::ui::{UI_CONFIG, UI_TEXT};

/// Interactions reported by the list. The caller owns the state, the
/// list only renders and reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PairListEvent {
    Remove(String),
    OpenUrl(String),
}

pub(crate) fn render_pair_list(ui: &mut Ui, pairs: &[Pair]) -> Vec<PairListEvent> {
    let mut events = Vec::new();

    if pairs.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(UI_TEXT.empty_state).color(UI_CONFIG.colors.hint));
        });
        return events;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for pair in pairs {
                render_row(ui, pair, &mut events);
                ui.add_space(4.0);
            }
        });

    events
}

fn render_row(ui: &mut Ui, pair: &Pair, events: &mut Vec<PairListEvent>) {
    let frame = Frame::group(ui.style())
        .inner_margin(Margin::same(6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                render_pair_image(ui, pair);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&pair.name).strong());
                    render_status_line(ui, pair);
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .button(ICON_REMOVE)
                        .on_hover_text(UI_TEXT.hint_remove)
                        .clicked()
                    {
                        events.push(PairListEvent::Remove(pair.id.clone()));
                    }
                });
            });
        });

    // Rows with a resolved pair page are clickable as a whole; the
    // remove button above still takes precedence for its own rect.
    if let Some(url) = &pair.url {
        let response = frame
            .response
            .interact(Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand)
            .on_hover_text(UI_TEXT.row_open_hint);
        if response.clicked() {
            events.push(PairListEvent::OpenUrl(url.clone()));
        }
    }
}

fn render_status_line(ui: &mut Ui, pair: &Pair) {
    match row_status(pair) {
        RowStatus::Loading => {
            ui.horizontal(|ui| {
                ui.add(Spinner::new().size(12.0));
                ui.label(RichText::new(UI_TEXT.loading_label).small());
            });
        }
        RowStatus::Error(error) => {
            ui.label(error_text(format!("{}{error}", UI_TEXT.error_prefix)).small());
        }
        RowStatus::Prices { usd, native } => {
            ui.label(RichText::new(format!("USD: {usd} | Base: {native}")).small());
        }
    }
}

/// Remote token image with glyph fallbacks: hourglass while the pair is
/// fetching, spinner while the image itself streams in, gem when there
/// is no image or it failed to load.
fn render_pair_image(ui: &mut Ui, pair: &Pair) {
    let size = Vec2::splat(UI_CONFIG.row_image_size);

    if pair.loading {
        ui.add_sized(size, Label::new(ICON_HOURGLASS));
        return;
    }
    let Some(url) = &pair.image_url else {
        ui.add_sized(size, Label::new(ICON_PLACEHOLDER));
        return;
    };

    let image = Image::new(url.as_str()).fit_to_exact_size(size);
    match image.load_for_size(ui.ctx(), size) {
        Ok(TexturePoll::Ready { .. }) => {
            ui.add_sized(size, image);
        }
        Ok(TexturePoll::Pending { .. }) => {
            ui.add_sized(size, Spinner::new());
        }
        Err(_) => {
            ui.add_sized(size, Label::new(ICON_PLACEHOLDER));
        }
    }
}

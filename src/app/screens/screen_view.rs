use eframe::egui::Context;

use crate::app::App;
use crate::app::state::Screen;

pub(crate) trait ScreenView {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Screen;
}

pub(super) mod popup;
pub(super) mod screen_view;
pub(super) mod settings;

pub(crate) use screen_view::ScreenView;

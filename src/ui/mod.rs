mod pair_list;
mod row_view;
mod styles;
mod ui_config;
mod ui_text;

pub(crate) use pair_list::{PairListEvent, render_pair_list};
pub(crate) use row_view::format_storage_kb;
pub(crate) use styles::{apply_theme, error_text, hint_text, section_heading, success_text};
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::{ICON_SETTINGS, UI_TEXT};

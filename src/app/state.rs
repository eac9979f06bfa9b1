use std::time::Instant;

/// Which surface is on screen. The popup and settings screens share the
/// one persisted store owned by `App`; only transient view state lives
/// here.
pub(crate) enum Screen {
    Popup(PopupScreen),
    Settings(SettingsScreen),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Popup(PopupScreen::default())
    }
}

#[derive(Clone, Default)]
pub(crate) struct PopupScreen {
    pub(crate) name_input: String,
    pub(crate) address_input: String,
    /// Inline validation message, cleared by the next successful add.
    pub(crate) form_error: Option<String>,
}

#[derive(Clone, Default)]
pub(crate) struct SettingsScreen {
    pub(crate) export_text: Option<String>,
    pub(crate) copied_at: Option<Instant>,
    pub(crate) confirm_clear: bool,
    pub(crate) success: Option<SuccessMessage>,
}

#[derive(Clone)]
pub(crate) struct SuccessMessage {
    pub(crate) text: String,
    pub(crate) shown_at: Instant,
}

impl SettingsScreen {
    pub(crate) fn show_success(&mut self, text: &str) {
        self.success = Some(SuccessMessage {
            text: text.to_owned(),
            shown_at: Instant::now(),
        });
    }
}

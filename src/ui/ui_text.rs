pub const ICON_SETTINGS: &str = "⚙";
pub const ICON_REMOVE: &str = "✕";
pub const ICON_PLACEHOLDER: &str = "💎";
pub const ICON_HOURGLASS: &str = "⏳";

pub struct UiText {
    pub app_title: &'static str,

    // --- Popup ---
    pub hint_name: &'static str,
    pub hint_address: &'static str,
    pub btn_add: &'static str,
    pub btn_refresh_all: &'static str,
    pub btn_refreshing: &'static str,
    pub hint_settings: &'static str,
    pub empty_state: &'static str,
    pub loading_label: &'static str,
    pub error_prefix: &'static str,
    pub row_open_hint: &'static str,
    pub hint_remove: &'static str,

    // --- Settings ---
    pub settings_title: &'static str,
    pub btn_back: &'static str,
    pub stats_heading: &'static str,
    pub label_total_pairs: &'static str,
    pub label_storage_used: &'static str,
    pub label_theme: &'static str,
    pub export_heading: &'static str,
    pub btn_export: &'static str,
    pub btn_copy: &'static str,
    pub btn_copied: &'static str,
    pub msg_copied: &'static str,
    pub export_empty: &'static str,
    pub danger_heading: &'static str,
    pub btn_clear: &'static str,
    pub btn_confirm_clear: &'static str,
    pub btn_cancel: &'static str,
    pub clear_warning: &'static str,
    pub msg_cleared: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Pair Pulse",

    hint_name: "Pair name (e.g. PLSX/WPLS)",
    hint_address: "Pair address (0x...)",
    btn_add: "Add Pair",
    btn_refresh_all: "🔄 Refresh All",
    btn_refreshing: "🔄 Refreshing...",
    hint_settings: "Settings",
    empty_state: "No pairs added yet. Add your first pair above!",
    loading_label: "Loading...",
    error_prefix: "Error: ",
    row_open_hint: "Click to open on DexScreener",
    hint_remove: "Remove pair",

    settings_title: "Settings",
    btn_back: "← Back",
    stats_heading: "Statistics",
    label_total_pairs: "Total pairs",
    label_storage_used: "Storage used",
    label_theme: "Theme",
    export_heading: "Export",
    btn_export: "📤 Export Pairs",
    btn_copy: "📋 Copy to Clipboard",
    btn_copied: "✅ Copied!",
    msg_copied: "Copied to clipboard!",
    export_empty: "No pairs to export.",
    danger_heading: "Danger Zone",
    btn_clear: "🗑 Clear All Data",
    btn_confirm_clear: "⚠ Confirm Clear",
    btn_cancel: "Cancel",
    clear_warning: "This removes every tracked pair. The theme preference is kept.",
    msg_cleared: "All data has been cleared!",
};

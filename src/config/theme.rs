use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Color scheme preference, persisted in the eframe state file so it
/// survives a pair list clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

//! File persistence configuration

/// Configuration for the pair list store
pub struct PairsPersistenceConfig {
    /// Filename of the JSON pair list inside the data directory
    pub filename: &'static str,
}

/// Configuration for application UI state persistence
pub struct AppPersistenceConfig {
    /// Filename of the eframe state file (theme, window geometry)
    pub state_filename: &'static str,
}

/// The master persistence configuration
pub struct PersistenceConfig {
    pub pairs: PairsPersistenceConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    pairs: PairsPersistenceConfig {
        filename: "pairs.json",
    },
    app: AppPersistenceConfig {
        state_filename: ".pair_pulse_state.json",
    },
};

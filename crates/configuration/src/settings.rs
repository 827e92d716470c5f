use serde::Deserialize;
use std::path::PathBuf;

/// The root settings structure for the application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub store: StoreSettings,
}

/// Settings for the trade log store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    /// Location of the backing file, relative to the invocation directory
    /// unless absolute.
    pub path: PathBuf,
}

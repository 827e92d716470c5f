// Declare the modules that make up this crate.
pub mod error;
pub mod listing;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use listing::ReferenceTable;
pub use settings::{Settings, StoreSettings};

/// Loads the application settings from an optional `config.toml` file.
///
/// Every key has a built-in default, so a missing file yields a fully
/// populated `Settings`. The trade log lives in the invocation directory
/// unless `store.path` overrides it.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("store.path", "recorded_trades.json")?
        // The file is optional; defaults above apply when it is absent.
        .add_source(config::File::with_name("config").required(false))
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let settings = load_settings().unwrap();
        assert_eq!(
            settings.store.path.file_name().unwrap(),
            "recorded_trades.json"
        );
    }
}

use config::builder::DefaultState;
use config::ConfigBuilder;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{AnalysisSettings, Config, ProfitTieredParams, StrategySettings};

/// Prefix for environment overrides, e.g. `SALESBOARD__ANALYSIS__TOP_PRODUCTS_LIMIT=5`.
const ENV_PREFIX: &str = "SALESBOARD";

/// Loads the application configuration.
///
/// With no explicit path, an optional `config.toml` in the working directory is
/// read. An explicit path must exist. Environment variables prefixed with
/// `SALESBOARD__` override file values in both cases.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config.toml").required(false),
    };

    let builder = config::Config::builder().add_source(file).add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    build(builder)
}

/// Parses configuration from TOML text. Environment overrides are not applied.
pub fn load_config_from_str(toml: &str) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml));
    build(builder)
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<Config, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.build()?.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

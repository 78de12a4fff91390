use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse tool manifest: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Tool manifest entry '{name}' must set exactly one of 'source' or 'formula'.")]
    InvalidManifestEntry { name: String },
}

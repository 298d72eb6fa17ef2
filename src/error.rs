use thiserror::Error;

/// Errors raised while loading label settings.
///
/// Building a label never fails; only configuration can.
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("Invalid label configuration: {0}")]
    Config(String),

    #[error("Failed to parse label configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

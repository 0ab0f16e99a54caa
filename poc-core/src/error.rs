use thiserror::Error;

/// Failures mounting a chart through a `ChartRenderer`.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("chart library is not loaded")]
    LibraryMissing,

    #[error("mount point not found: {0}")]
    MountMissing(String),

    #[error("chart construction failed: {0}")]
    Construct(String),

    #[error("chart config serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failures loading the shared content snippet.
///
/// The `Display` text is what ends up in the container after the error
/// prefix, so a bad status reads exactly "Failed to load shared content".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Failed to load shared content")]
    Status(u16),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Body(String),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("reference data error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("bad reference data: {0}")]
    BadReference(String),

    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("schema version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

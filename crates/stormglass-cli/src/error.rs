use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] stormglass_core::ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Csv(#[from] stormglass_core::CsvError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] stormglass_store::StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Command(_) => 2,
            Self::Csv(_) => 3,
            Self::Serialization(_) => 4,
            Self::Store(_) => 7,
            Self::Io(_) => 10,
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required field: disks")]
    MissingDisks,

    #[error("Invalid disk count")]
    InvalidDiskCount,

    #[error("Too many disks")]
    TooManyDisks,

    #[error("Invalid rod names")]
    InvalidRodNames,

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Internal { .. } => 500,
            _ => 400,
        }
    }

    /// Short machine-facing label, the `error` field of an error body.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingDisks => "Missing required field: disks",
            Self::InvalidDiskCount => "Invalid disk count",
            Self::TooManyDisks => "Too many disks",
            Self::InvalidRodNames => "Invalid rod names",
            Self::InvalidJson(_) => "Invalid JSON",
            Self::Internal { .. } => "Internal server error",
        }
    }

    /// User-facing explanation, the `message` field of an error body.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingDisks => "Please provide the number of disks (1-20)".to_string(),
            Self::InvalidDiskCount => "Disks must be a positive integer".to_string(),
            Self::TooManyDisks => {
                "Maximum 20 disks allowed (20 disks = 1,048,575 moves)".to_string()
            }
            Self::InvalidRodNames => "Rod names must be non-empty strings".to_string(),
            Self::InvalidJson(_) => "Request body must be valid JSON".to_string(),
            Self::Internal { message } => message.clone(),
        }
    }
}

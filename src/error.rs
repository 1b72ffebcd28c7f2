use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvestabilityError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown industry: {0}")]
    UnknownIndustry(String),

    #[error("invalid allocation: {0}")]
    InvalidAllocation(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl InvestabilityError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) | Self::UnknownIndustry(_) | Self::InvalidAllocation(_) => {
                crate::exit_code::INVALID_INPUT
            }
            _ => crate::exit_code::RUNTIME_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, InvestabilityError>;

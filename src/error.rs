pub type OnduleResult<T> = Result<T, OnduleError>;

#[derive(thiserror::Error, Debug)]
pub enum OnduleError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("channel error: {0}")]
    Channel(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OnduleError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn channel(msg: impl Into<String>) -> Self {
        Self::Channel(msg.into())
    }
}

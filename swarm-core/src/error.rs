#[derive(Debug, thiserror::Error)]
pub enum CoordinatorError {
    #[error("pattern catalog is empty: at least one coordination pattern must be registered")]
    EmptyCatalog,

    #[error("knowledge base error: {0}")]
    Knowledge(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoordinatorError>;

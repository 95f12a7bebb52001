#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("serde_json `{0}`")]
    SerdeJson(#[from] serde_json::Error),

    #[error("validation `{0}`")]
    Validation(#[from] validator::ValidationErrors),
}

pub type Result<T> = std::result::Result<T, ModelError>;

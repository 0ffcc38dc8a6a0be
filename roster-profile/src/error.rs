use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ProfileResult<T> = Result<T, ProfileError>;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Username already taken")]
    UsernameTaken(String),

    #[error("Project not found")]
    ProjectNotFound(u64),

    #[error("User not found")]
    UserNotFound(u64),
}

pub type StoreResult<T> = Result<T, StoreError>;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("email {0} is already registered")]
    EmailTaken(String),

    #[error("user {0} does not exist")]
    NotFound(u64),

    #[error("user id {0} is seeded more than once")]
    DuplicateId(u64),
}

pub type Result<T> = std::result::Result<T, StoreError>;

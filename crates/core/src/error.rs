use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Base password must not be empty")]
    InvalidInput,

    #[error("Password is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Hashing backend unavailable: {0}")]
    HashingUnavailable(String),

    #[error("Invalid hash record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, Error>;

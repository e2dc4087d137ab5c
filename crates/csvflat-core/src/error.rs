use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlatError>;

#[derive(Debug, Error)]
pub enum FlatError {
    #[error("config error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

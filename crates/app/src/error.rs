use store::{ApiError, pages::FormError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("http client error: {0}")]
    Client(#[from] ApiError),
    #[error("invalid form: {0}")]
    Form(#[from] FormError),
    #[error("invalid input: {0}")]
    Input(String),
}

use thiserror::Error;
pub type Result<T> = std::result::Result<T, Error>;
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid color: {0:?}, expected #RRGGBB")]
    InvalidColor(String),
    #[error("image error: {0}")]
    Image(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

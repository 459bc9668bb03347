use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("shader: {0}")]
    Shader(String),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

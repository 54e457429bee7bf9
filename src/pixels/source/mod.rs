use super::PixelBuffer;
use crate::ErrorKind;

#[cfg(test)]
use mockall::automock;

pub mod image;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("pixel access denied: {0}")]
    AccessDenied(String),
    #[error("no usable image: {0}")]
    Unresolved(String),
}

impl SourceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SourceError::AccessDenied(_) => ErrorKind::AccessDenied,
            SourceError::Unresolved(_) => ErrorKind::EmptySource,
        }
    }
}

/// Renders an already resolved image into a fresh pixel buffer.
#[cfg_attr(test, automock)]
pub trait PixelSource {
    fn pixels(&self) -> Result<PixelBuffer, SourceError>;
}

impl PixelSource for PixelBuffer {
    fn pixels(&self) -> Result<PixelBuffer, SourceError> {
        Ok(self.clone())
    }
}

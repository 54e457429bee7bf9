use super::{PixelSource, SourceError};
use crate::pixels::PixelBuffer;
use ::image::{DynamicImage, ImageError};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone)]
enum Origin {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// An encoded image (file on disk or bytes in memory) decoded with the `image` crate on every
/// call, so no decoded surface outlives a single estimation.
#[derive(Debug, Clone)]
pub struct ImageSource {
    origin: Origin,
}

impl ImageSource {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::Path(path.into()),
        }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            origin: Origin::Bytes(bytes),
        }
    }

    fn decode(&self) -> Result<DynamicImage, ImageError> {
        match &self.origin {
            Origin::Path(path) => ::image::open(path),
            Origin::Bytes(bytes) => ::image::load_from_memory(bytes),
        }
    }
}

impl PixelSource for ImageSource {
    fn pixels(&self) -> Result<PixelBuffer, SourceError> {
        let img = self.decode().map_err(|err| match err {
            ImageError::IoError(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                SourceError::AccessDenied(e.to_string())
            }
            e => SourceError::Unresolved(e.to_string()),
        })?;

        log::trace!("Decoded {}x{} image", img.width(), img.height());
        Ok(PixelBuffer::from(img.to_rgba8()))
    }
}

use super::source::SourceError;

pub const CHANNELS: usize = 4;

/// Row-major RGBA8 pixels of a rendered image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, SourceError> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(SourceError::Unresolved(format!(
                "buffer of {} bytes does not match {}x{} RGBA pixels",
                data.len(),
                width,
                height
            )));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_pixel(width: u32, height: u32, rgba: [u8; CHANNELS]) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            data: rgba.repeat(pixels),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.len() < CHANNELS
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// RGBA bytes of pixel `k`, `None` past the last pixel.
    pub fn pixel(&self, k: usize) -> Option<&[u8]> {
        let start = k.checked_mul(CHANNELS)?;
        self.data.get(start..start.checked_add(CHANNELS)?)
    }
}

impl From<image::RgbaImage> for PixelBuffer {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

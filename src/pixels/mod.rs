pub mod buffer;
pub mod source;

pub use buffer::PixelBuffer;

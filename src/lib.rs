//! Estimates the average color of an image by sampling a bounded number of random pixels.
//!
//! ```no_run
//! use averagecolor::{estimate, ImageSource, SampleConfig};
//!
//! let color = estimate(&ImageSource::open("cover.png"), &SampleConfig::default());
//! println!("{} (brightness {})", color.hex(), color.brightness());
//! ```

pub mod color;
pub mod config;
pub mod decoration;
pub mod estimate;
pub mod estimator;
pub mod pixels;
pub mod sampler;

pub use color::ColorResult;
pub use config::SampleConfig;
pub use decoration::{Decoration, DecorationConfig, Edge};
pub use estimate::{estimate, estimate_with_rng, estimate_with_status, ErrorKind, Outcome};
pub use pixels::source::image::ImageSource;
pub use pixels::source::{PixelSource, SourceError};
pub use pixels::PixelBuffer;

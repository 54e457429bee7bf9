use crate::pixels::PixelBuffer;
use crate::ErrorKind;
use rand::Rng;

/// Running channel totals over `count` sampled pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sums {
    pub r: u64,
    pub g: u64,
    pub b: u64,
    pub count: u32,
}

/// Draws `samples` pixels uniformly at random, with replacement, and adds up their color
/// channels. Alpha is never read.
pub fn sample<R: Rng + ?Sized>(
    buffer: &PixelBuffer,
    samples: u32,
    rng: &mut R,
) -> Result<Sums, ErrorKind> {
    if buffer.is_empty() {
        return Err(ErrorKind::EmptySource);
    }

    let pixels = buffer.pixel_count();
    let sums = (0..samples).fold(Sums::default(), |mut acc, _| {
        let Some(px) = buffer.pixel(rng.random_range(0..pixels)) else {
            return acc;
        };
        acc.r += px[0] as u64;
        acc.g += px[1] as u64;
        acc.b += px[2] as u64;
        acc.count += 1;
        acc
    });

    log::trace!("Sampled {} of {} pixels: {:?}", samples, pixels, sums);
    Ok(sums)
}

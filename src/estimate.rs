use crate::color::ColorResult;
use crate::config::SampleConfig;
use crate::pixels::source::PixelSource;
use crate::{estimator, sampler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Why an estimate fell back to the default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("pixel access denied")]
    AccessDenied,
    #[error("empty or unusable image source")]
    EmptySource,
    #[error("sample count must be positive")]
    InvalidConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Sampled(ColorResult),
    Fallback { color: ColorResult, reason: ErrorKind },
}

impl Outcome {
    pub fn color(&self) -> &ColorResult {
        match self {
            Outcome::Sampled(color) => color,
            Outcome::Fallback { color, .. } => color,
        }
    }

    pub fn into_color(self) -> ColorResult {
        match self {
            Outcome::Sampled(color) => color,
            Outcome::Fallback { color, .. } => color,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback { .. })
    }
}

/// Estimates the average color of `source`. Always returns a color: any failure yields
/// `config.default_color`.
pub fn estimate(source: &dyn PixelSource, config: &SampleConfig) -> ColorResult {
    estimate_with_status(source, config).into_color()
}

/// Like [`estimate`], but tells a sampled color apart from a fallback.
pub fn estimate_with_status(source: &dyn PixelSource, config: &SampleConfig) -> Outcome {
    match config.seed {
        Some(seed) => estimate_with_rng(source, config, &mut StdRng::seed_from_u64(seed)),
        None => estimate_with_rng(source, config, &mut rand::rng()),
    }
}

pub fn estimate_with_rng<R: Rng + ?Sized>(
    source: &dyn PixelSource,
    config: &SampleConfig,
    rng: &mut R,
) -> Outcome {
    match sample_color(source, config.samples, rng) {
        Ok(color) => {
            log::debug!("Estimated {} from {} samples", color, config.samples);
            Outcome::Sampled(color)
        }
        Err(reason) => {
            match reason {
                ErrorKind::AccessDenied => log::warn!("Using default color: {}", reason),
                _ => log::debug!("Using default color: {}", reason),
            }
            Outcome::Fallback {
                color: config.default_color.clone(),
                reason,
            }
        }
    }
}

fn sample_color<R: Rng + ?Sized>(
    source: &dyn PixelSource,
    samples: u32,
    rng: &mut R,
) -> Result<ColorResult, ErrorKind> {
    if samples == 0 {
        return Err(ErrorKind::InvalidConfig);
    }

    let buffer = source.pixels().map_err(|err| {
        log::trace!("Pixel source failed: {}", err);
        err.kind()
    })?;
    let sums = sampler::sample(&buffer, samples, rng)?;
    let (r, g, b) = estimator::reduce(&sums)?;

    Ok(ColorResult::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::source::{MockPixelSource, SourceError};
    use crate::pixels::PixelBuffer;
    use itertools::iproduct;

    fn config(samples: u32) -> SampleConfig {
        SampleConfig {
            samples,
            default_color: ColorResult::from_hex("#1e1e2e").unwrap(),
            ..SampleConfig::default()
        }
    }

    fn noisy_buffer() -> PixelBuffer {
        let data: Vec<u8> = iproduct!(0..16u8, 0..16u8)
            .flat_map(|(y, x)| [x * 16, y * 16, x.wrapping_mul(y), 255])
            .collect();
        PixelBuffer::new(16, 16, data).unwrap()
    }

    #[test]
    fn test_estimate_uniform_image_is_exact() {
        for samples in [1, 7, 1000] {
            let buffer = PixelBuffer::from_pixel(31, 17, [12, 200, 99, 128]);

            let color = estimate(&buffer, &config(samples));

            assert_eq!(ColorResult::new(12, 200, 99), color);
            assert_eq!("#0cc863", color.hex());
        }
    }

    #[test]
    fn test_estimate_channels_stay_in_range() {
        let buffer = PixelBuffer::from_pixel(2, 2, [255, 255, 255, 255]);

        let color = estimate(&buffer, &config(u16::MAX as u32));

        assert_eq!((255, 255, 255), color.rgb());
        assert_eq!(255.0, color.brightness());
    }

    #[test]
    fn test_estimate_zero_samples_does_not_touch_source() {
        let mut source = MockPixelSource::new();
        source.expect_pixels().times(0);

        let outcome = estimate_with_status(&source, &config(0));

        assert_eq!(
            Outcome::Fallback {
                color: config(0).default_color,
                reason: ErrorKind::InvalidConfig
            },
            outcome
        );
    }

    #[test]
    fn test_estimate_access_denied_returns_default_unchanged() {
        let mut source = MockPixelSource::new();
        source
            .expect_pixels()
            .times(1)
            .returning(|| Err(SourceError::AccessDenied("tainted canvas".to_string())));

        let outcome = estimate_with_status(&source, &config(100));

        assert_eq!(Some(ErrorKind::AccessDenied), reason(&outcome));
        assert_eq!(&config(100).default_color, outcome.color());
        assert_eq!("#1e1e2e", outcome.color().hex());
    }

    #[test]
    fn test_estimate_unresolved_source_returns_default() {
        let mut source = MockPixelSource::new();
        source
            .expect_pixels()
            .returning(|| Err(SourceError::Unresolved("no src".to_string())));

        let outcome = estimate_with_status(&source, &config(100));

        assert_eq!(Some(ErrorKind::EmptySource), reason(&outcome));
        assert_eq!(config(100).default_color, estimate(&source, &config(100)));
    }

    #[test]
    fn test_estimate_zero_area_image_returns_default() {
        let mut source = MockPixelSource::new();
        source
            .expect_pixels()
            .returning(|| PixelBuffer::new(0, 0, vec![]));

        let outcome = estimate_with_status(&source, &config(100));

        assert_eq!(Some(ErrorKind::EmptySource), reason(&outcome));
        assert_eq!(&config(100).default_color, outcome.color());
    }

    #[test]
    fn test_estimate_sampled_result_replaces_default() {
        let buffer = PixelBuffer::from_pixel(3, 3, [0, 0, 0, 255]);
        let config = SampleConfig {
            default_color: ColorResult::new(255, 255, 255),
            ..config(10)
        };

        let outcome = estimate_with_status(&buffer, &config);

        assert_eq!(Outcome::Sampled(ColorResult::new(0, 0, 0)), outcome);
        assert_eq!(0.0, outcome.color().brightness());
        assert!(!outcome.is_fallback());
    }

    #[test]
    fn test_estimate_is_deterministic_with_seed() {
        let buffer = noisy_buffer();
        let config = SampleConfig {
            seed: Some(1234),
            ..config(50)
        };

        let first = estimate(&buffer, &config);
        for _ in 0..5 {
            assert_eq!(first, estimate(&buffer, &config));
        }
    }

    #[test]
    fn test_estimate_with_rng_matches_seeded_config() {
        let buffer = noisy_buffer();
        let config = SampleConfig {
            seed: Some(99),
            ..config(64)
        };

        assert_eq!(
            estimate_with_status(&buffer, &config),
            estimate_with_rng(&buffer, &config, &mut StdRng::seed_from_u64(99))
        );
    }

    #[test]
    fn test_estimate_approximates_mean_of_two_halves() {
        let data: Vec<u8> = (0..100)
            .flat_map(|k| if k < 50 { [0, 0, 0, 255] } else { [200, 100, 50, 255] })
            .collect();
        let buffer = PixelBuffer::new(10, 10, data).unwrap();

        let color = estimate_with_rng(&buffer, &config(5000), &mut StdRng::seed_from_u64(3)).into_color();

        assert!((80..=120).contains(&color.r()), "r was {}", color.r());
        assert!((40..=60).contains(&color.g()), "g was {}", color.g());
        assert!((20..=30).contains(&color.b()), "b was {}", color.b());
    }

    fn reason(outcome: &Outcome) -> Option<ErrorKind> {
        match outcome {
            Outcome::Fallback { reason, .. } => Some(*reason),
            Outcome::Sampled(_) => None,
        }
    }
}

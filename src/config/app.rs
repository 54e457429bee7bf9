use crate::color::ColorResult;
use crate::decoration::DecorationConfig;

pub const DEFAULT_SAMPLES: u32 = 1000;

/// Everything a single estimation needs, validated up front.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    /// Pixels to draw. Zero makes every estimate fall back to `default_color`.
    pub samples: u32,
    pub default_color: ColorResult,
    /// Seeds the pixel selection for reproducible estimates.
    pub seed: Option<u64>,
    pub decoration: Option<DecorationConfig>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            default_color: ColorResult::default(),
            seed: None,
            decoration: None,
        }
    }
}

use crate::decoration::{Edge, DEFAULT_FADE_WIDTH};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Sampling {
    pub samples: i64,
    pub seed: Option<u64>,
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            samples: super::app::DEFAULT_SAMPLES.into(),
            seed: None,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Color {
    pub r: Option<u8>,
    pub g: Option<u8>,
    pub b: Option<u8>,
    pub hex: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct Decoration {
    #[serde(default)]
    pub color_parent: bool,
    #[serde(default = "default_fade_width")]
    pub fade_width: u32,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

fn default_fade_width() -> u32 {
    DEFAULT_FADE_WIDTH
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub sampling: Sampling,
    pub default_color: Color,
    pub decoration: Option<Decoration>,
}

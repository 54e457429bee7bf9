use crate::color::{hex_decode, ColorResult};
use crate::decoration::DecorationConfig;
use anyhow::{bail, Context};
use std::fs;

pub mod app;
pub mod file;

pub use app::SampleConfig;

/// Loads `averagecolor/config.toml` from the XDG config directories, falling back to the
/// built-in defaults when there is none.
pub fn load() -> anyhow::Result<SampleConfig> {
    let path = xdg::BaseDirectories::with_prefix("averagecolor")?.find_config_file("config.toml");

    match path {
        Some(path) => {
            log::debug!("Reading config from {}", path.display());
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Unable to read {}", path.display()))?;
            parse(&raw).with_context(|| format!("Invalid config in {}", path.display()))
        }
        None => parse(include_str!("../../config.toml")),
    }
}

pub fn parse(raw: &str) -> anyhow::Result<SampleConfig> {
    let cfg: file::Config = toml::from_str(raw)?;

    Ok(SampleConfig {
        samples: parse_samples(cfg.sampling.samples),
        seed: cfg.sampling.seed,
        default_color: parse_color(cfg.default_color)?,
        decoration: cfg.decoration.map(|d| DecorationConfig {
            color_parent: d.color_parent,
            fade_width: d.fade_width,
            edges: d.edges,
        }),
    })
}

fn parse_samples(samples: i64) -> u32 {
    if samples < 0 {
        log::warn!("Negative sample count {}, estimates will use the default color", samples);
        return 0;
    }
    u32::try_from(samples).unwrap_or(u32::MAX)
}

fn parse_color(color: file::Color) -> anyhow::Result<ColorResult> {
    let hex = color.hex.as_deref().map(hex_decode).transpose()?;
    let rgb = match (color.r, color.g, color.b) {
        (None, None, None) => None,
        (r, g, b) => Some((r.unwrap_or(0), g.unwrap_or(0), b.unwrap_or(0))),
    };

    let (r, g, b) = match (rgb, hex) {
        (Some(rgb), Some(hex)) if rgb != hex => bail!(
            "default_color hex {} does not match rgb({}, {}, {})",
            color.hex.unwrap_or_default(),
            rgb.0,
            rgb.1,
            rgb.2
        ),
        (Some(rgb), _) => rgb,
        (None, Some(hex)) => hex,
        (None, None) => (0, 0, 0),
    };

    Ok(ColorResult::new(r, g, b))
}

use crate::color::ColorResult;
use itertools::Itertools;
use serde::Deserialize;
use std::fmt;

pub const DEFAULT_FADE_WIDTH: u32 = 20;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationConfig {
    pub color_parent: bool,
    pub fade_width: u32,
    pub edges: Vec<Edge>,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            color_parent: true,
            fade_width: DEFAULT_FADE_WIDTH,
            edges: vec![Edge::Top, Edge::Right, Edge::Bottom, Edge::Left],
        }
    }
}

/// One edge of an inset fade, in CSS `box-shadow` terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsetShadow {
    pub edge: Edge,
    pub offset_x: i64,
    pub offset_y: i64,
    pub blur: u32,
    pub spread: i64,
    pub color: (u8, u8, u8),
}

/// Presentation data derived from an estimate. Nothing here touches any presentation layer,
/// a decorator applies it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoration {
    pub background: Option<String>,
    pub insets: Vec<InsetShadow>,
}

impl InsetShadow {
    fn new(edge: Edge, width: u32, color: (u8, u8, u8)) -> Self {
        let w = width as i64;
        let (offset_x, offset_y) = match edge {
            Edge::Top => (0, w),
            Edge::Bottom => (0, -w),
            Edge::Left => (w, 0),
            Edge::Right => (-w, 0),
        };

        Self {
            edge,
            offset_x,
            offset_y,
            blur: width,
            spread: -w,
            color,
        }
    }
}

impl fmt::Display for InsetShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.color;
        write!(
            f,
            "inset {}px {}px {}px {}px rgb({}, {}, {})",
            self.offset_x, self.offset_y, self.blur, self.spread, r, g, b
        )
    }
}

impl Decoration {
    pub fn plan(color: &ColorResult, config: &DecorationConfig) -> Self {
        Self {
            background: config.color_parent.then(|| color.hex().to_string()),
            insets: config
                .edges
                .iter()
                .unique()
                .map(|&edge| InsetShadow::new(edge, config.fade_width, color.rgb()))
                .collect(),
        }
    }

    /// All insets as a single `box-shadow` value.
    pub fn box_shadow(&self) -> Option<String> {
        if self.insets.is_empty() {
            return None;
        }
        Some(self.insets.iter().join(", "))
    }
}

use std::fmt;

/// An estimated color together with its derived hex string and perceptual brightness.
///
/// Channels are only settable through the constructors, which always recompute the derived
/// fields, so `hex` and `brightness` can never disagree with `r`, `g` and `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorResult {
    r: u8,
    g: u8,
    b: u8,
    hex: String,
    brightness: f64,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color '{0}', expected '#rrggbb'")]
pub struct ParseColorError(String);

impl ColorResult {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            hex: hex_encode(r, g, b),
            brightness: brightness(r, g, b),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let (r, g, b) = hex_decode(hex)?;
        Ok(Self::new(r, g, b))
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }
}

impl Default for ColorResult {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl fmt::Display for ColorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

pub fn hex_encode(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

pub fn hex_decode(hex: &str) -> Result<(u8, u8, u8), ParseColorError> {
    let err = || ParseColorError(hex.to_string());

    let digits = hex.strip_prefix('#').ok_or_else(err)?;
    if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(err());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| err());
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// W3C perceived brightness, in `[0, 255]`.
pub fn brightness(r: u8, g: u8, b: u8) -> f64 {
    (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) as f64 / 1000.0
}

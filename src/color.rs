//! RGBA colors for sprite drawing
//!
//! Catalog files may spell a color in either of these forms:
//! - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - Channel arrays: `[r, g, b]` or `[r, g, b, a]`

use image::Rgba;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
    /// Channel array with the wrong number of entries
    #[error("color array has {0} channels, expected 3 or 4")]
    InvalidChannelCount(usize),
}

/// A straight (non-premultiplied) RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "ColorSpec")]
pub struct Color(pub [u8; 4]);

impl Color {
    /// Fully transparent black, the color of a fresh canvas.
    pub const TRANSPARENT: Color = Color([0, 0, 0, 0]);

    /// Opaque color from red, green and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color([r, g, b, 255])
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color([r, g, b, a])
    }

    pub fn alpha(self) -> u8 {
        self.0[3]
    }

    /// Subtract `amount` from the red, green and blue channels, stopping at zero.
    ///
    /// Alpha is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use farm_sprites::color::Color;
    ///
    /// let grass = Color::rgba(51, 153, 30, 200);
    /// assert_eq!(grass.darken(40), Color::rgba(11, 113, 0, 200));
    /// ```
    pub fn darken(self, amount: u8) -> Self {
        let [r, g, b, a] = self.0;
        Color([r.saturating_sub(amount), g.saturating_sub(amount), b.saturating_sub(amount), a])
    }

    /// Format as `#RRGGBBAA`.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.0;
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba(color.0)
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        Color(pixel.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_hex())
    }
}

/// Raw color as written in a catalog file
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorSpec {
    Hex(String),
    Channels(Vec<u8>),
}

impl TryFrom<ColorSpec> for Color {
    type Error = ColorError;

    fn try_from(spec: ColorSpec) -> Result<Self, Self::Error> {
        match spec {
            ColorSpec::Hex(s) => parse_color(&s),
            ColorSpec::Channels(channels) => match channels.as_slice() {
                [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Color::rgba(*r, *g, *b, *a)),
                other => Err(ColorError::InvalidChannelCount(other.len())),
            },
        }
    }
}

/// Parse a hex color string into a [`Color`].
///
/// # Examples
///
/// ```
/// use farm_sprites::color::{parse_color, Color};
///
/// assert_eq!(parse_color("#F00").unwrap(), Color::rgb(255, 0, 0));
/// assert_eq!(parse_color("#339933").unwrap(), Color::rgb(51, 153, 51));
/// assert_eq!(parse_color("#4C4CCC80").unwrap(), Color::rgba(76, 76, 204, 128));
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is empty, lacks the leading `#`, has the wrong
/// length, or contains a non-hex character.
pub fn parse_color(s: &str) -> Result<Color, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    let hex = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

    let digits = hex.chars().map(parse_hex_digit).collect::<Result<Vec<u8>, _>>()?;

    match digits.as_slice() {
        // #RGB -> #RRGGBB (doubled digits), alpha = 255
        [r, g, b] => Ok(Color::rgb(r * 17, g * 17, b * 17)),
        // #RGBA -> #RRGGBBAA
        [r, g, b, a] => Ok(Color::rgba(r * 17, g * 17, b * 17, a * 17)),
        [r1, r0, g1, g0, b1, b0] => Ok(Color::rgb(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0)),
        [r1, r0, g1, g0, b1, b0, a1, a0] => {
            Ok(Color::rgba(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0, a1 * 16 + a0))
        }
        other => Err(ColorError::InvalidLength(other.len())),
    }
}

/// Parse a single hex digit (0-9, A-F, a-f) to u8 (0-15)
fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(ColorError::InvalidHex(c)),
    }
}

//! Image encoding behind a narrow interface
//!
//! The generator only needs "canvas in, file bytes out". Keeping that behind
//! [`SpriteEncoder`] lets the startup capability check and the encoding itself
//! be swapped out without touching rendering or file output.

use crate::canvas::Canvas;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use thiserror::Error;

/// Error type for encoding operations
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The encoder can't produce output at all
    #[error("{format} encoding is not available: {reason}")]
    Unavailable { format: &'static str, reason: String },
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl EncodeError {
    /// What the user can do about an unavailable encoder.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            EncodeError::Unavailable { .. } => Some(concat!(
                "Rebuild farm-sprites with the `image` crate's default features ",
                "(PNG support) enabled."
            )),
            EncodeError::Image(_) => None,
        }
    }
}

/// Turns a finished canvas into the bytes of an image file.
pub trait SpriteEncoder {
    /// Short format name used in messages, e.g. `"PNG"`.
    fn format(&self) -> &'static str;

    fn encode(&self, canvas: &Canvas) -> Result<Vec<u8>, EncodeError>;

    /// Check up front that encoding works at all.
    ///
    /// The default encodes a 1×1 canvas and reports any failure as
    /// [`EncodeError::Unavailable`].
    fn probe(&self) -> Result<(), EncodeError> {
        self.encode(&Canvas::new(1)).map(|_| ()).map_err(|e| match e {
            EncodeError::Image(inner) => {
                EncodeError::Unavailable { format: self.format(), reason: inner.to_string() }
            }
            unavailable => unavailable,
        })
    }
}

/// Lossless RGBA PNG output via the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngSpriteEncoder;

impl SpriteEncoder for PngSpriteEncoder {
    fn format(&self) -> &'static str {
        "PNG"
    }

    fn encode(&self, canvas: &Canvas) -> Result<Vec<u8>, EncodeError> {
        let image = canvas.as_image();
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ColorType::Rgba8,
        )?;
        Ok(bytes)
    }
}

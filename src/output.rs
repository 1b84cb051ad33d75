//! Sprite file output and scaling

use image::imageops::FilterType;
use image::RgbaImage;
use std::io;
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;

/// Error type for output operations
#[derive(Debug)]
pub enum OutputError {
    /// IO error while writing the file at `path`
    Io { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io { path, source } => {
                write!(f, "Failed to write '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io { source, .. } => Some(source),
        }
    }
}

/// Write encoded sprite bytes to `path`, replacing any existing file.
///
/// Missing parent directories are created.
pub fn write_sprite(bytes: &[u8], path: &Path) -> Result<(), OutputError> {
    let io_err = |source| OutputError::Io { path: path.to_path_buf(), source };

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    std::fs::write(path, bytes).map_err(io_err)
}

/// Scale a canvas by an integer factor using nearest-neighbor interpolation.
///
/// This preserves crisp pixel edges. A factor of 0 or 1 returns the canvas unchanged.
pub fn scale_canvas(canvas: Canvas, factor: u8) -> Canvas {
    if factor <= 1 {
        return canvas;
    }
    Canvas::from(scale_image(&canvas.into_image(), factor))
}

fn scale_image(image: &RgbaImage, factor: u8) -> RgbaImage {
    let (w, h) = image.dimensions();
    image::imageops::resize(image, w * factor as u32, h * factor as u32, FilterType::Nearest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_write_sprite_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dirs/test.png");

        write_sprite(b"abc", &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"abc");
    }

    #[test]
    fn test_write_sprite_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grass.png");

        std::fs::write(&path, b"old contents that are longer").unwrap();
        write_sprite(b"new", &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_write_sprite_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory is in the way of the file
        let path = dir.path().join("taken");
        std::fs::create_dir(&path).unwrap();

        let err = write_sprite(b"x", &path).unwrap_err();
        assert!(err.to_string().contains("taken"));
    }

    #[test]
    fn test_scale_factor_one_returns_original() {
        let mut canvas = Canvas::new(2);
        canvas.draw_point(0, 0, Color::rgb(255, 0, 0));
        let scaled = scale_canvas(canvas.clone(), 1);
        assert_eq!(scaled, canvas);
    }

    #[test]
    fn test_scale_factor_two() {
        let red = Color::rgb(255, 0, 0);
        let mut canvas = Canvas::new(2);
        canvas.draw_point(0, 0, red);

        let scaled = scale_canvas(canvas, 2);
        assert_eq!(scaled.size(), 4);

        // The red pixel becomes a 2x2 block, the rest stays transparent
        for (x, y, c) in scaled.pixels() {
            if x < 2 && y < 2 {
                assert_eq!(c, red);
            } else {
                assert_eq!(c, Color::TRANSPARENT);
            }
        }
    }
}

//! Square RGBA drawing surface
//!
//! A [`Canvas`] starts fully transparent and is painted with the shapes from
//! [`crate::shapes`]. Paint replaces pixels outright; there is no blending.
//! Coordinates outside the canvas are dropped.

use crate::color::Color;
use crate::shapes::{
    rasterize_ellipse, rasterize_line, rasterize_points, rasterize_polygon, rasterize_rect,
};
use image::RgbaImage;
use std::collections::HashSet;

/// Edge length of every sprite the game loads.
pub const SPRITE_SIZE: u32 = 32;

/// In-memory pixel buffer a sprite is drawn into before encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a transparent `size`×`size` canvas.
    pub fn new(size: u32) -> Self {
        Self { image: RgbaImage::from_pixel(size, size, Color::TRANSPARENT.into()) }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.image.width() && y < self.image.height() {
            Some(Color::from(*self.image.get_pixel(x, y)))
        } else {
            None
        }
    }

    /// Iterate `(x, y, color)` over every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        self.image.enumerate_pixels().map(|(x, y, p)| (x, y, Color::from(*p)))
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Paint the whole canvas.
    pub fn fill(&mut self, color: Color) {
        let last = self.size() as i32 - 1;
        self.fill_rect(0, 0, last, last, color);
    }

    /// Paint the inclusive box `(x0, y0)`..=`(x1, y1)`.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.paint(&rasterize_rect(x0, y0, x1, y1), color);
    }

    /// Paint the ellipse inscribed in the inclusive box `(x0, y0)`..=`(x1, y1)`.
    pub fn fill_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.paint(&rasterize_ellipse(x0, y0, x1, y1), color);
    }

    pub fn fill_polygon(&mut self, vertices: &[(i32, i32)], color: Color) {
        self.paint(&rasterize_polygon(vertices), color);
    }

    pub fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), color: Color) {
        self.paint(&rasterize_line(from, to), color);
    }

    pub fn draw_point(&mut self, x: i32, y: i32, color: Color) {
        self.paint(&rasterize_points(&[(x, y)]), color);
    }

    fn paint(&mut self, pixels: &HashSet<(i32, i32)>, color: Color) {
        let (w, h) = (self.image.width() as i32, self.image.height() as i32);
        for &(x, y) in pixels {
            if x >= 0 && x < w && y >= 0 && y < h {
                self.image.put_pixel(x as u32, y as u32, color.into());
            }
        }
    }
}

impl From<RgbaImage> for Canvas {
    fn from(image: RgbaImage) -> Self {
        Self { image }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(SPRITE_SIZE)
    }
}

//! farm-sprites - Procedural placeholder sprites for the farm game
//!
//! This library provides functionality to:
//! - Rasterize simple shapes (points, lines, rectangles, ellipses, polygons)
//! - Render named sprite patterns onto transparent 32x32 canvases
//! - Encode canvases as PNG and write a whole sprite catalog to disk

pub mod canvas;
pub mod catalog;
pub mod cli;
pub mod color;
pub mod encoder;
pub mod generator;
pub mod output;
pub mod pattern;
pub mod renderer;
pub mod shapes;

//! Sprite rendering to canvases

use crate::canvas::{Canvas, SPRITE_SIZE};
use crate::color::Color;
use crate::pattern::Pattern;

/// Spacing of the blade grid on grass tiles
const GRASS_CELL: usize = 6;
/// Spacing of the speckle grid on soil tiles
const SOIL_CELL: usize = 4;

const GRASS_SHADE: u8 = 40;
const SOIL_SHADE: u8 = 20;

const SEED_BROWN: Color = Color::rgb(139, 115, 85);
const STEM_GREEN: Color = Color::rgb(100, 200, 100);
const LEAF_GREEN: Color = Color::rgb(120, 220, 120);
const DARK_STEM_GREEN: Color = Color::rgb(80, 180, 80);
const WHEAT_STALK: Color = Color::rgb(180, 140, 60);
const WHEAT_HEAD: Color = Color::rgb(230, 200, 80);
const WHEAT_HEAD_LIGHT: Color = Color::rgb(240, 210, 90);
const CARROT_ORANGE: Color = Color::rgb(255, 140, 60);
const TOMATO_RED: Color = Color::rgb(220, 60, 60);
const TOMATO_STEM: Color = Color::rgb(100, 180, 100);
const TOMATO_CALYX: Color = Color::rgb(120, 200, 120);

/// Render a standard 32×32 sprite.
///
/// # Examples
///
/// ```
/// use farm_sprites::color::Color;
/// use farm_sprites::pattern::Pattern;
/// use farm_sprites::renderer::render;
///
/// let tile = render(Color::rgb(51, 153, 51), Pattern::Solid);
/// assert_eq!(tile.size(), 32);
/// assert_eq!(tile.pixel(31, 31), Some(Color::rgb(51, 153, 51)));
/// ```
pub fn render(color: Color, pattern: Pattern) -> Canvas {
    render_sized(SPRITE_SIZE, color, pattern)
}

/// Render a sprite onto a fresh transparent `size`×`size` canvas.
///
/// The tile patterns (`solid`, `grass`, `soil`) cover the whole canvas at any
/// size. Crop and player figures are laid out for 32×32 and are clipped on
/// smaller canvases.
pub fn render_sized(size: u32, color: Color, pattern: Pattern) -> Canvas {
    let mut canvas = Canvas::new(size);

    match pattern {
        Pattern::Solid => canvas.fill(color),
        Pattern::Grass => draw_grass(&mut canvas, color),
        Pattern::Soil => draw_soil(&mut canvas, color),
        Pattern::Seed => canvas.fill_ellipse(14, 14, 18, 18, SEED_BROWN),
        Pattern::Sprout => {
            canvas.fill_rect(15, 20, 17, 28, STEM_GREEN);
            canvas.fill_ellipse(14, 18, 18, 22, LEAF_GREEN);
        }
        Pattern::Growing => {
            canvas.fill_rect(14, 16, 16, 28, DARK_STEM_GREEN);
            canvas.fill_rect(17, 18, 19, 28, DARK_STEM_GREEN);
            canvas.fill_ellipse(12, 14, 20, 20, STEM_GREEN);
        }
        Pattern::WheatMature => {
            canvas.fill_rect(14, 20, 16, 28, WHEAT_STALK);
            canvas.fill_ellipse(10, 12, 22, 20, WHEAT_HEAD);
            canvas.fill_ellipse(11, 14, 21, 22, WHEAT_HEAD_LIGHT);
        }
        Pattern::CarrotMature => {
            canvas.fill_ellipse(14, 12, 18, 16, STEM_GREEN);
            canvas.fill_polygon(&[(16, 16), (13, 24), (19, 24)], CARROT_ORANGE);
        }
        Pattern::TomatoMature => {
            canvas.fill_ellipse(10, 16, 22, 26, TOMATO_RED);
            canvas.fill_rect(15, 14, 17, 18, TOMATO_STEM);
            canvas.fill_ellipse(14, 14, 18, 16, TOMATO_CALYX);
        }
        Pattern::Player => draw_player(&mut canvas, color),
        Pattern::Blank => {}
    }

    canvas
}

fn draw_grass(canvas: &mut Canvas, color: Color) {
    canvas.fill(color);
    let blade = color.darken(GRASS_SHADE);
    let size = canvas.size() as i32;

    for i in (0..size).step_by(GRASS_CELL) {
        for j in (0..size).step_by(GRASS_CELL) {
            canvas.draw_line((i + 2, j + 4), (i + 2, j), blade);
            canvas.draw_line((i + 4, j + 5), (i + 4, j + 1), blade);
        }
    }
}

fn draw_soil(canvas: &mut Canvas, color: Color) {
    canvas.fill(color);
    let speck = color.darken(SOIL_SHADE);
    let size = canvas.size() as i32;

    for i in (0..size).step_by(SOIL_CELL) {
        for j in (0..size).step_by(SOIL_CELL) {
            if (i + j) % 8 == 0 {
                canvas.draw_point(i + 1, j + 1, speck);
            }
        }
    }
}

fn draw_player(canvas: &mut Canvas, color: Color) {
    // Head
    canvas.fill_ellipse(10, 8, 22, 20, color);
    // Torso
    canvas.fill_rect(12, 20, 20, 26, color);
    // Arms
    canvas.fill_rect(8, 20, 12, 24, color);
    canvas.fill_rect(20, 20, 24, 24, color);
    // Legs
    canvas.fill_rect(12, 26, 15, 30, color);
    canvas.fill_rect(17, 26, 20, 30, color);
}

//! Shape rasterization primitives for pixel-perfect rendering.
//!
//! Every function converts a geometric shape into the set of integer pixel
//! coordinates it covers. Boxes are given as inclusive corner pairs
//! `(x0, y0, x1, y1)`, so `(0, 0, 0, 0)` covers exactly one pixel. No
//! anti-aliasing is performed and nothing is clipped here; callers decide
//! what to do with coordinates outside their canvas.

use std::collections::HashSet;

/// Rasterize a set of points.
///
/// # Examples
///
/// ```
/// use farm_sprites::shapes::rasterize_points;
///
/// let pixels = rasterize_points(&[(0, 0), (1, 1), (1, 1)]);
/// assert_eq!(pixels.len(), 2);
/// ```
pub fn rasterize_points(points: &[(i32, i32)]) -> HashSet<(i32, i32)> {
    points.iter().copied().collect()
}

/// Rasterize a one pixel wide line using Bresenham's line algorithm.
///
/// Both endpoints are included.
///
/// # Examples
///
/// ```
/// use farm_sprites::shapes::rasterize_line;
///
/// let pixels = rasterize_line((2, 4), (2, 0));
/// assert_eq!(pixels.len(), 5);
/// assert!(pixels.contains(&(2, 0)));
/// assert!(pixels.contains(&(2, 4)));
/// ```
pub fn rasterize_line(p0: (i32, i32), p1: (i32, i32)) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        pixels.insert((x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }

    pixels
}

/// Rasterize a filled rectangle spanning the inclusive box `(x0, y0)`..=`(x1, y1)`.
///
/// An inverted box (`x1 < x0` or `y1 < y0`) covers nothing.
///
/// # Examples
///
/// ```
/// use farm_sprites::shapes::rasterize_rect;
///
/// let pixels = rasterize_rect(15, 20, 17, 28);
/// assert_eq!(pixels.len(), 3 * 9);
/// assert!(pixels.contains(&(17, 28)));
/// ```
pub fn rasterize_rect(x0: i32, y0: i32, x1: i32, y1: i32) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    if x1 < x0 || y1 < y0 {
        return pixels;
    }

    for y in y0..=y1 {
        for x in x0..=x1 {
            pixels.insert((x, y));
        }
    }

    pixels
}

/// Rasterize a filled ellipse inscribed in the inclusive box `(x0, y0)`..=`(x1, y1)`.
///
/// A pixel belongs to the ellipse when its center lies inside or on the ellipse
/// touching the outer edges of the box. The test runs in half-pixel integer units
/// so the result is exact and symmetric about both axes of the box.
///
/// # Examples
///
/// ```
/// use farm_sprites::shapes::rasterize_ellipse;
///
/// let pixels = rasterize_ellipse(14, 14, 18, 18);
/// assert!(pixels.contains(&(16, 16))); // Center
/// assert!(pixels.contains(&(14, 16))); // Touches the left edge
/// assert!(!pixels.contains(&(14, 14))); // Corners are cut
/// ```
pub fn rasterize_ellipse(x0: i32, y0: i32, x1: i32, y1: i32) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    if x1 < x0 || y1 < y0 {
        return pixels;
    }

    // Convert to i64 to avoid overflow in calculations
    let w = (x1 - x0) as i64 + 1;
    let h = (y1 - y0) as i64 + 1;
    let w_sq = w * w;
    let h_sq = h * h;
    let limit = w_sq * h_sq;

    for y in y0..=y1 {
        // Doubled offset of the pixel center from the box center
        let dy = 2 * (y - y0) as i64 + 1 - h;
        for x in x0..=x1 {
            let dx = 2 * (x - x0) as i64 + 1 - w;
            if dx * dx * h_sq + dy * dy * w_sq <= limit {
                pixels.insert((x, y));
            }
        }
    }

    pixels
}

/// Rasterize a filled polygon using scanline fill algorithm.
///
/// Returns all pixels within a polygon defined by a list of vertices.
/// Uses an even-odd fill rule. Each edge covers the rows from its upper end up
/// to, but not including, its lower end; horizontal edges and the vertices
/// themselves are always painted.
///
/// # Examples
///
/// ```
/// use farm_sprites::shapes::rasterize_polygon;
///
/// let pixels = rasterize_polygon(&[(16, 16), (13, 24), (19, 24)]);
/// assert!(pixels.contains(&(16, 16))); // Tip
/// assert!(pixels.contains(&(13, 24))); // Base corners
/// assert!(pixels.contains(&(19, 24)));
/// ```
pub fn rasterize_polygon(vertices: &[(i32, i32)]) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    if vertices.len() < 3 {
        return pixels;
    }

    // Find vertical extent
    let (Some(min_y), Some(max_y)) =
        (vertices.iter().map(|(_, y)| *y).min(), vertices.iter().map(|(_, y)| *y).max())
    else {
        return pixels;
    };

    // Scanline fill
    for y in min_y..=max_y {
        let mut intersections = Vec::new();

        for i in 0..vertices.len() {
            let j = (i + 1) % vertices.len();
            let (x1, y1) = vertices[i];
            let (x2, y2) = vertices[j];

            if y1 == y2 {
                if y == y1 {
                    // Horizontal edges are drawn directly
                    for x in x1.min(x2)..=x1.max(x2) {
                        pixels.insert((x, y));
                    }
                }
                continue;
            }

            // Half-open span so a vertex shared by two edges counts once
            if y >= y1.min(y2) && y < y1.max(y2) {
                let x = x1 + (y - y1) * (x2 - x1) / (y2 - y1);
                intersections.push(x);
            }
        }

        intersections.sort_unstable();

        // Fill between pairs of intersections
        for chunk in intersections.chunks(2) {
            if let [x_start, x_end] = chunk {
                for x in *x_start..=*x_end {
                    pixels.insert((x, y));
                }
            }
        }
    }

    // Bottom vertices fall outside every half-open span
    pixels.extend(vertices.iter().copied());

    pixels
}

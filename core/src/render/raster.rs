//! Translation of vector shapes into discrete pixels in the framebuffer.
//!
//! Rasterization turns a primitive such as a triangle into a sequence of
//! *scanlines*, each corresponding to a horizontal span of pixels covered
//! by the primitive on a given line, or, in the case of lines, directly
//! into individual pixels.
//!
//! The functions in this module do not write anything themselves. They
//! invoke a callback for each scanline or pixel covered, and only ever
//! with coordinates inside the `width` × `height` bounds given to them.
//! Intermediate arithmetic is done in `i64`, so any `i32` coordinates are
//! accepted, however far outside the bounds they lie.

use core::ops::Range;

use crate::math::{Vec2i, vec2i};

/// A horizontal, 1-pixel-thick "slice" of a primitive being rasterized.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scanline {
    /// The row of the scanline.
    pub y: usize,
    /// The columns covered, `xs.end` exclusive. Never empty.
    pub xs: Range<usize>,
}

/// Rasterizes a one-pixel-thick line from `p0` to `p1`, both endpoints
/// included, with Bresenham's algorithm.
///
/// Invokes `plot_fn` for each pixel drawn, in order from `p0` to `p1`.
/// Pixels outside `dims` are skipped. The part of the line preceding its
/// first pixel within `dims` is skipped in constant time, so the cost is
/// proportional to the number of pixels drawn.
///
/// # Examples
/// ```
/// use quadrast_core::{math::vec2i, render::raster::line};
///
/// let mut pts = vec![];
/// line([vec2i(0, 0), vec2i(4, 2)], (8, 8), |p| pts.push((p.x, p.y)));
/// assert_eq!(pts, [(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
/// ```
pub fn line<F>([p0, p1]: [Vec2i; 2], dims: (usize, usize), mut plot_fn: F)
where
    F: FnMut(Vec2i),
{
    let (w, h) = (dims.0 as i64, dims.1 as i64);
    let [x0, y0, x1, y1] = [p0.x, p0.y, p1.x, p1.y].map(i64::from);

    // Trivially reject lines entirely past one edge of the bounds
    if (x0 < 0 && x1 < 0)
        || (y0 < 0 && y1 < 0)
        || (x0 >= w && x1 >= w)
        || (y0 >= h && y1 >= h)
    {
        return;
    }

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    let mut entered = false;

    if !((0..w).contains(&x) && (0..h).contains(&y)) {
        let Some((i, j)) = steps_to_bounds([x0, y0], [dx, -dy], (w, h)) else {
            return;
        };
        x += sx * i;
        y += sy * j;
        err = line_err(dx, -dy, i, j);
        if !((0..w).contains(&x) && (0..h).contains(&y)) {
            return;
        }
    }

    loop {
        if (0..w).contains(&x) && (0..h).contains(&y) {
            entered = true;
            // In bounds, so fits in i32
            plot_fn(vec2i(x as i32, y as i32));
        } else if entered {
            // A line is monotonic in both x and y, so it cannot re-enter
            break;
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Returns the number of x and y steps after which the line starting at
/// `p0`, with absolute deltas `adx` and `ady`, first reaches a pixel within
/// the bounds.
///
/// The returned pixel is the one Bresenham's algorithm would visit at that
/// point, but it is only in bounds if the line enters the bounds at all. Returns
/// `None` if the line ends first.
fn steps_to_bounds(
    p0: [i64; 2],
    [adx, ady]: [i64; 2],
    (w, h): (i64, i64),
) -> Option<(i64, i64)> {
    let dist = |v: i64, n: i64| {
        if v < 0 {
            -v
        } else if v >= n {
            v - n + 1
        } else {
            0
        }
    };
    let [dist_x, dist_y] = [dist(p0[0], w), dist(p0[1], h)];

    // Every iteration steps along the major axis; the minor coordinate
    // after k major steps is round(k * min / maj), rounding halves up.
    let x_major = adx >= ady;
    let (maj, min, k_maj, m) = if x_major {
        (adx, ady, dist_x, dist_y)
    } else {
        (ady, adx, dist_y, dist_x)
    };
    let [maj, min] = [maj, min].map(i128::from);
    let k_min = match (m, min) {
        (0, _) => 0,
        (_, 0) => return None,
        // Least k with (2k * min + maj) / (2 * maj) >= m
        (m, min) => ((i128::from(2 * m - 1) * maj + 2 * min - 1) / (2 * min)) as i64,
    };
    let k = k_maj.max(k_min);
    if i128::from(k) > maj {
        return None;
    }
    let j = ((2 * i128::from(k) * min + maj) / (2 * maj)) as i64;
    Some(if x_major { (k, j) } else { (j, k) })
}

/// Returns the Bresenham error term after `i` x steps and `j` y steps.
fn line_err(adx: i64, ady: i64, i: i64, j: i64) -> i64 {
    let [adx, ady, i, j] = [adx, ady, i, j].map(i128::from);
    // Bounded by the deltas, so fits back in i64
    (adx * (j + 1) - ady * (i + 1)) as i64
}

/// Rasterizes a filled triangle defined by three vertices.
///
/// The vertices are sorted by y. Each row from the topmost to the
/// bottommost vertex, both included, is covered from the x coordinate of
/// the long edge, from the top vertex to the bottom one, to that of the
/// two short edges, both endpoints included. Edge x coordinates are
/// interpolated as `x0 + dx * i / dy` with integer division truncating
/// toward zero; a horizontal edge contributes its starting x.
///
/// Invokes `scanline_fn` for each row, top to bottom, clipped to `dims`.
/// Rows that fall entirely outside `dims` are skipped.
pub fn tri_fill<F>(mut verts: [Vec2i; 3], dims: (usize, usize), mut scanline_fn: F)
where
    F: FnMut(Scanline),
{
    verts.sort_by_key(|v| v.y);
    let [(x0, y0), (x1, y1), (x2, y2)] =
        verts.map(|v| (i64::from(v.x), i64::from(v.y)));
    let (w, h) = (dims.0 as i64, dims.1 as i64);

    let (dx01, dy01) = (x1 - x0, y1 - y0);
    let (dx12, dy12) = (x2 - x1, y2 - y1);
    let (dx02, dy02) = (x2 - x0, y2 - y0);

    let long_x = |i| if dy02 == 0 { x0 } else { edge_x(x0, dx02, i, dy02) };
    let short_x = |i| {
        if i < dy01 {
            edge_x(x0, dx01, i, dy01)
        } else if dy12 == 0 {
            x1
        } else {
            edge_x(x1, dx12, i - dy01, dy12)
        }
    };

    for y in y0.max(0)..=y2.min(h - 1) {
        let i = y - y0;
        let (xa, xb) = (long_x(i), short_x(i));
        let (l, r) = (xa.min(xb).max(0), xa.max(xb).min(w - 1));
        if l <= r {
            // Clamped to the bounds, so non-negative and within usize
            let xs = l as usize..r as usize + 1;
            scanline_fn(Scanline { y: y as usize, xs });
        }
    }
}

/// Returns `x0 + dx * i / dy`, truncated toward zero.
///
/// Requires `0 <= i <= dy`, so the result lies between `x0` and `x0 + dx`.
#[inline]
fn edge_x(x0: i64, dx: i64, i: i64, dy: i64) -> i64 {
    // The product needs up to 65 bits
    x0 + (i128::from(dx) * i128::from(i) / i128::from(dy)) as i64
}

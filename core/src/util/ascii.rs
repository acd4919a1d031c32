//! Conversion of framebuffer contents to plain text.
//!
//! Both converters take pixels as returned by
//! [`Pipeline::read_pixels`][crate::render::Pipeline::read_pixels]: RGB
//! triples in row-major order, top row first. Every row of output ends
//! with a newline.

use alloc::string::String;

use crate::math::Color3f;

/// Characters of increasing brightness.
pub const RAMP: &str = " .:-=+*#%@";

/// Converts pixels to text by thresholding their red channel.
///
/// A pixel whose red channel is greater than `threshold` becomes `#`,
/// any other pixel a space.
///
/// # Examples
/// ```
/// use quadrast_core::util::ascii::threshold;
///
/// let px = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.05, 0.0, 0.0], [0.5; 3]];
/// assert_eq!(threshold(&px, 2, 0.1), "# \n #\n");
/// ```
pub fn threshold(pixels: &[[f32; 3]], width: usize, threshold: f32) -> String {
    convert(pixels, width, |[r, _, _]| if r > threshold { '#' } else { ' ' })
}

/// Converts pixels to text by mapping their luma to a character in
/// [`RAMP`].
///
/// Luma is clamped to 0..=1; a NaN luma maps to the darkest character.
pub fn ramp(pixels: &[[f32; 3]], width: usize) -> String {
    let chars: alloc::vec::Vec<char> = RAMP.chars().collect();
    let max = chars.len() - 1;
    convert(pixels, width, |px| {
        let l = Color3f(px).luma();
        // NaN casts to zero
        let i = (l.clamp(0.0, 1.0) * max as f32 + 0.5) as usize;
        chars[i.min(max)]
    })
}

fn convert(
    pixels: &[[f32; 3]],
    width: usize,
    mut f: impl FnMut([f32; 3]) -> char,
) -> String {
    let mut out = String::with_capacity(pixels.len() + pixels.len() / width.max(1));
    for row in pixels.chunks(width.max(1)) {
        out.extend(row.iter().map(|&px| f(px)));
        out.push('\n');
    }
    out
}

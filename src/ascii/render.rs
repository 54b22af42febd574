//! Resize, grayscale and row layout for the ASCII conversion.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use super::dimensions::target_dimensions;
use super::ramp::map_to_chars;

/// Render a decoded image as ASCII art.
///
/// Resizes to the target character grid, reduces to luminance, maps every
/// pixel through the ramp and lays the glyphs out as newline-joined rows.
///
/// # Arguments
/// * `image` - The decoded source image
/// * `new_width` - Target output width in characters
/// * `ar_multiplier` - Aspect-ratio correction factor
///
/// # Returns
/// The rendered text. A grid with zero rows or columns renders as an
/// empty string.
pub fn render(image: &DynamicImage, new_width: u32, ar_multiplier: f32) -> String {
    let (img_width, img_height) = image.dimensions();
    let (new_width, new_height) =
        target_dimensions(img_width, img_height, new_width, ar_multiplier);

    // The resampler is not defined for empty targets; short-circuit.
    if new_width == 0 || new_height == 0 {
        return String::new();
    }

    let resized = image.resize_exact(new_width, new_height, FilterType::Triangle);
    let gray = resized.to_luma8();
    let chars = map_to_chars(gray.as_raw());
    split_rows(&chars, new_width)
}

/// Lay a flat glyph sequence out as rows of `width` characters.
///
/// Chunks start at offsets `0, width, 2*width, ...`; the final row may be
/// shorter when the sequence length is not a multiple of `width`. Rows are
/// joined with `\n` and no trailing newline is appended.
pub fn split_rows(chars: &[char], width: u32) -> String {
    if width == 0 || chars.is_empty() {
        return String::new();
    }

    chars
        .chunks(width as usize)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

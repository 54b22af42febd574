//! Output grid sizing from source dimensions and aspect ratio.

/// Default aspect-ratio multiplier.
///
/// Text characters are taller than wide, so callers can compensate by
/// scaling the height with a multiplier below 1.0. The default leaves
/// the source ratio untouched.
pub const DEFAULT_AR_MULTIPLIER: f32 = 1.0;

/// Compute the output grid dimensions for a target character width.
///
/// The height follows the source aspect ratio, scaled by `ar_multiplier`
/// and truncated:
///
/// `new_height = floor(img_height / img_width * ar_multiplier * new_width)`
///
/// A degenerate source or a zero target width yields a zero-row grid; the
/// rest of the pipeline turns that into empty output rather than failing.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `new_width` - Target output width in characters
/// * `ar_multiplier` - Aspect-ratio correction factor
///
/// # Returns
/// A tuple of (width, height) for the output character grid.
pub fn target_dimensions(
    img_width: u32,
    img_height: u32,
    new_width: u32,
    ar_multiplier: f32,
) -> (u32, u32) {
    if img_width == 0 || img_height == 0 || new_width == 0 {
        return (new_width, 0);
    }

    let aspect_ratio = img_height as f32 / img_width as f32 * ar_multiplier;
    let new_height = (aspect_ratio * new_width as f32) as u32;
    (new_width, new_height)
}

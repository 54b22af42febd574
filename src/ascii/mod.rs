//! ASCII rendering pipeline for converting decoded images to text.
//!
//! The conversion runs in four steps:
//!
//! 1. **Dimension calculation** - target grid size from the source aspect
//!    ratio and a character-cell correction multiplier
//! 2. **Resize + grayscale** - downsample to the grid and reduce to
//!    luminance, both delegated to the `image` crate
//! 3. **Quantization** - map each luminance value to one glyph of [`RAMP`]
//! 4. **Row layout** - split the flat glyph sequence into newline-joined
//!    rows of the target width

mod dimensions;
mod ramp;
mod render;

pub use dimensions::{target_dimensions, DEFAULT_AR_MULTIPLIER};
pub use ramp::{luminance_to_char, map_to_chars, BUCKET_SIZE, RAMP};
pub use render::{render, split_rows};

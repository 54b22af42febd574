//! End-to-end conversion pipeline: load, render, write.

use std::path::{Path, PathBuf};

use image::GenericImageView;

use crate::ascii;
use crate::loader::{self, InputSource, LoadError};

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 100;

/// Options controlling a single conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Target output width in characters.
    pub width: u32,
    /// Aspect-ratio correction factor for character cells.
    pub ar_multiplier: f32,
}

impl ConvertOptions {
    /// Merge CLI and config-file settings.
    /// A CLI flag beats the config file, which beats the built-in default.
    pub fn resolve(cli_width: Option<u32>, config: &crate::config::Config) -> Self {
        Self {
            width: cli_width.or(config.output.width).unwrap_or(DEFAULT_WIDTH),
            ar_multiplier: config
                .output
                .ar_multiplier
                .unwrap_or(ascii::DEFAULT_AR_MULTIPLIER),
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            ar_multiplier: ascii::DEFAULT_AR_MULTIPLIER,
        }
    }
}

/// Errors that can occur during a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Run the full conversion: resolve the input, decode, render, write.
///
/// The output file is written in a single call, only after the whole text
/// has been rendered in memory; a failing run never leaves partial output.
///
/// # Arguments
/// * `infile` - Local path or `http://`/`https://` URL of the source image
/// * `outfile` - Path the rendered text is written to (created or truncated)
/// * `options` - Width and aspect-ratio settings
pub async fn run(
    infile: &str,
    outfile: &Path,
    options: &ConvertOptions,
) -> Result<(), PipelineError> {
    let source = InputSource::parse(infile);
    let image = loader::load(&source).await?;

    let (width, height) = image.dimensions();
    log::info!("decoded {}x{} image", width, height);

    let text = ascii::render(&image, options.width, options.ar_multiplier);

    std::fs::write(outfile, &text).map_err(|source| PipelineError::Write {
        path: outfile.to_path_buf(),
        source,
    })?;
    log::info!("wrote {} bytes to {}", text.len(), outfile.display());

    Ok(())
}

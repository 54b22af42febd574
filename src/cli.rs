//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

/// Convert an image to ASCII art
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Convert an image to ASCII art", long_about = None)]
pub struct Args {
    /// Image to convert (path or url)
    #[arg(short, long, value_name = "PATH")]
    pub infile: String,

    /// File to write result in
    #[arg(short, long, value_name = "PATH")]
    pub outfile: PathBuf,

    /// Width of output in chars [default: 100]
    #[arg(short, long, value_name = "N")]
    pub width: Option<u32>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Wavescape")]
#[command(about = "Animated shader-colored ocean plane with a live tuning panel", long_about = None)]
pub struct Args {
    /// Background sky image
    #[arg(long, value_name = "PATH", default_value = "assets/sky.png")]
    pub sky: PathBuf,

    /// Initial window width (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "1280")]
    pub width: u32,

    /// Initial window height (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "720")]
    pub height: u32,
}

pub mod build;

use clap::Parser;

/// tilemerge - Compose tilesets from XML definitions into PNG images
#[derive(Parser, Debug)]
#[command(name = "tilemerge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub build: build::BuildArgs,
}

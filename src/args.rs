//! Command-line and environment configuration.

use std::{ffi::OsString, num::NonZeroU32, path::PathBuf};

use clap::Parser;

use crate::{
    arg_parsers::{
        numbers::{parse_byte_size, parse_edge_length},
        Background, Location, OutputEncoding,
    },
    batch::DEFAULT_MAX_TOTAL_BYTES,
    canvas::{CanvasSpec, Strip},
    error::CanvasError,
    help,
    plan::ExecutionPlan,
};

/// Centers images, unscaled, on a fixed-size square canvas.
///
/// Images larger than the canvas are skipped, never resized.
#[derive(Parser, Debug)]
#[command(name = "canvasfit", version, long_version = help::version_string(), about)]
pub struct Cli {
    /// Input image, or a directory whose images are all processed. Repeatable.
    #[arg(short, long = "input", value_name = "PATH", required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output file, directory, `.zip` archive, or `-` for stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: OsString,

    /// Width and height of the canvas in pixels.
    #[arg(long, env = "CANVASFIT_SIZE", default_value = "1200", value_parser = parse_edge_length)]
    pub size: NonZeroU32,

    /// Background: `transparent` or a hex color such as `#ffffff`.
    #[arg(long, env = "CANVASFIT_BG", default_value = "transparent")]
    pub bg: Background,

    /// Output encoding; defaults to the output file's extension, then PNG.
    #[arg(long, env = "CANVASFIT_FORMAT", value_parser = parse_encoding)]
    pub format: Option<OutputEncoding>,

    /// Do not carry Exif and ICC metadata over to the outputs.
    #[arg(long)]
    pub strip: bool,

    /// Largest combined size of all inputs, e.g. `100MiB`.
    #[arg(
        long,
        env = "CANVASFIT_MAX_TOTAL_SIZE",
        default_value_t = DEFAULT_MAX_TOTAL_BYTES,
        value_parser = parse_byte_size
    )]
    pub max_total_size: u64,
}

impl Cli {
    pub fn canvas_spec(&self) -> CanvasSpec {
        let strip = if self.strip {
            Strip::all()
        } else {
            Strip::default()
        };
        CanvasSpec::new(self.size)
            .with_background(self.bg)
            .with_strip(strip)
    }

    pub fn into_plan(self) -> Result<ExecutionPlan, CanvasError> {
        let spec = self.canvas_spec();
        ExecutionPlan::new(
            &self.inputs,
            Location::from(self.output.as_os_str()),
            self.format,
            spec,
            self.max_total_size,
        )
    }
}

fn parse_encoding(value: &str) -> Result<OutputEncoding, String> {
    value
        .parse()
        .map_err(|_| format!("unsupported output format `{value}', expected `png' or `webp'"))
}

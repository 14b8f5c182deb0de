use image::{metadata::Orientation, DynamicImage};

use crate::{arg_parsers::OutputEncoding, utils::filename::replace_extension};

/// A decoded input image together with the metadata that travels with it.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub pixels: DynamicImage,
    /// Rotation/flip needed to display `pixels` the right way up.
    pub orientation: Orientation,
    /// Raw Exif block, starting at the TIFF header.
    pub exif: Option<Vec<u8>>,
    pub icc: Option<Vec<u8>>,
}

impl SourceImage {
    /// An image with no metadata, e.g. one generated in memory.
    pub fn from_pixels(pixels: DynamicImage) -> Self {
        Self {
            pixels,
            orientation: Orientation::NoTransforms,
            exif: None,
            icc: None,
        }
    }
}

/// An encoded square canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputImage {
    pub bytes: Vec<u8>,
    pub encoding: OutputEncoding,
    pub edge_length: u32,
}

impl OutputImage {
    /// Output file name for the given input name: same stem, extension of the encoding.
    pub fn file_name(&self, source_name: &str) -> String {
        replace_extension(source_name, self.encoding.extension())
    }
}

use std::num::NonZeroU32;

use crate::arg_parsers::{Background, OutputEncoding};

pub const DEFAULT_EDGE_LENGTH: NonZeroU32 = match NonZeroU32::new(1200) {
    Some(edge) => edge,
    None => unreachable!(),
};

/// Everything that determines how an image is placed and written:
/// the canvas size, what fills it, and how the result is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    /// Width and height of the square canvas, in pixels.
    pub edge_length: NonZeroU32,
    pub background: Background,
    pub output_encoding: OutputEncoding,
    /// Metadata that is not carried over to the output.
    pub strip: Strip,
}

impl CanvasSpec {
    pub fn new(edge_length: NonZeroU32) -> Self {
        Self {
            edge_length,
            ..Default::default()
        }
    }

    pub fn edge(&self) -> u32 {
        self.edge_length.get()
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn with_encoding(mut self, output_encoding: OutputEncoding) -> Self {
        self.output_encoding = output_encoding;
        self
    }

    pub fn with_strip(mut self, strip: Strip) -> Self {
        self.strip = strip;
        self
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            edge_length: DEFAULT_EDGE_LENGTH,
            background: Background::default(),
            output_encoding: OutputEncoding::default(),
            strip: Strip::default(),
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)] // bools default to false
pub struct Strip {
    pub exif: bool,
    pub icc: bool,
}

impl Strip {
    pub fn all() -> Self {
        // enumerate the fields exhaustively so that the compiler complains if we miss any
        Self {
            exif: true,
            icc: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let spec = CanvasSpec::default();
        assert_eq!(spec.edge(), 1200);
        assert_eq!(spec.background, Background::Transparent);
        assert_eq!(spec.output_encoding, OutputEncoding::Png);
        assert_eq!(spec.strip, Strip::default());
    }

    #[test]
    fn builder() {
        let spec = CanvasSpec::new(NonZeroU32::new(64).unwrap())
            .with_background(Background::Color([1, 2, 3]))
            .with_encoding(OutputEncoding::WebP)
            .with_strip(Strip::all());
        assert_eq!(spec.edge(), 64);
        assert_eq!(spec.background, Background::Color([1, 2, 3]));
        assert_eq!(spec.output_encoding, OutputEncoding::WebP);
        assert!(spec.strip.exif && spec.strip.icc);
    }
}

use image::error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::{DynamicImage, ImageError};

use crate::{
    arg_parsers::OutputEncoding, canvas::Strip, encoders, error::ComposeError, image::OutputImage,
};

/// Opaque metadata blocks copied verbatim from the source into the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub exif: Option<Vec<u8>>,
    pub icc: Option<Vec<u8>>,
}

impl Metadata {
    /// Removes the blocks the caller asked not to carry over.
    ///
    /// Unstripped images may reveal where a photo was taken when phone cameras embed GPS
    /// coordinates, so this happens here once rather than in each format handler.
    pub fn strip(mut self, strip: Strip) -> Self {
        if strip.exif {
            self.exif = None;
        }
        if strip.icc {
            self.icc = None;
        }
        self
    }
}

/// Encodes a finished canvas in memory.
pub fn encode(
    canvas: &DynamicImage,
    encoding: OutputEncoding,
    metadata: &Metadata,
) -> Result<OutputImage, ComposeError> {
    let mut bytes = Vec::new();
    let result = match encoding {
        #[cfg(feature = "png")]
        OutputEncoding::Png => encoders::png::encode(canvas, &mut bytes, metadata),
        #[cfg(feature = "webp")]
        OutputEncoding::WebP => encoders::webp::encode(canvas, &mut bytes, metadata),
        #[allow(unreachable_patterns)]
        _ => {
            let hint = ImageFormatHint::Exact(encoding.image_format());
            Err(ImageError::Unsupported(UnsupportedError::from_format_and_kind(
                hint.clone(),
                UnsupportedErrorKind::Format(hint),
            )))
        }
    };
    result.map_err(ComposeError::Encode)?;
    Ok(OutputImage {
        bytes,
        encoding,
        edge_length: canvas.width(),
    })
}

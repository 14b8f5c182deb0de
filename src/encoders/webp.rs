use std::io::Write;

use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ImageResult};

use crate::encode::Metadata;
use crate::encoders::common::{to_8bit_rgb_maybe_a, write_icc_and_exif};

/// Lossless WebP. The format only stores 8 bits per channel,
/// so 16-bit canvases are reduced to 8 bits here.
pub fn encode<W: Write>(canvas: &DynamicImage, writer: W, metadata: &Metadata) -> ImageResult<()> {
    let mut encoder = WebPEncoder::new_lossless(writer);
    write_icc_and_exif(&mut encoder, metadata);
    let pixels_to_write = to_8bit_rgb_maybe_a(canvas);
    pixels_to_write.write_with_encoder(encoder)
}

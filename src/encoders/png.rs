use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageResult};

use crate::encode::Metadata;
use crate::encoders::common::{shrink_canvas_format, write_icc_and_exif};

pub fn encode<W: Write>(canvas: &DynamicImage, writer: W, metadata: &Metadata) -> ImageResult<()> {
    let mut encoder =
        PngEncoder::new_with_quality(writer, CompressionType::Default, FilterType::Adaptive);
    write_icc_and_exif(&mut encoder, metadata);
    // PNG is lossless, so storing fewer channels or fewer bits changes nothing visible
    let pixels_to_write = shrink_canvas_format(canvas);
    pixels_to_write.write_with_encoder(encoder)
}

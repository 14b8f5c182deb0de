//! Helpers shared between all encoders

use image::ImageEncoder;

use crate::encode::Metadata;

mod pixel_format_optimization;

pub(crate) use pixel_format_optimization::{shrink_canvas_format, to_8bit_rgb_maybe_a};

/// Attaches whatever metadata the encoder accepts.
/// A block the format cannot carry is dropped on its own without failing the encode.
pub fn write_icc_and_exif(encoder: &mut impl ImageEncoder, metadata: &Metadata) {
    if let Some(icc) = metadata.icc.clone() {
        if let Err(e) = encoder.set_icc_profile(icc) {
            log::debug!("dropping ICC profile: {e}");
        }
    }
    if let Some(exif) = metadata.exif.clone() {
        if let Err(e) = encoder.set_exif_metadata(exif) {
            log::debug!("dropping Exif metadata: {e}");
        }
    }
}

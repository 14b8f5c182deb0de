use image::metadata::Orientation;

use crate::image::SourceImage;

/// Rotates/flips the pixels so they are stored the way they are meant to be viewed.
///
/// The orientation entry inside the Exif block is reset to "normal" at the same time,
/// so the Exif carried into the output does not make viewers rotate the image again.
pub fn auto_orient(image: &mut SourceImage) {
    let orientation = std::mem::replace(&mut image.orientation, Orientation::NoTransforms);
    if let Some(exif) = &mut image.exif {
        Orientation::remove_from_exif_chunk(exif);
    }
    image.pixels.apply_orientation(orientation);
}

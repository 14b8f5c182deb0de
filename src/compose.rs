//! Placing one image on one canvas.
//!
//! The work is split into steps that each live in their own function:
//! decode, orient, check the size, add alpha, paint onto the canvas, encode.
//! Nothing is shared between calls, so images may be composed from any number of threads.

use image::GenericImageView;

use crate::{
    canvas::CanvasSpec,
    decode::decode,
    encode::{encode, Metadata},
    error::ComposeError,
    image::{OutputImage, SourceImage},
    operations::{
        auto_orient, ensure_canvas_allocatable, ensure_fits, normalize_alpha, place_centered,
    },
};

/// Decodes `source_bytes` and centers the image, unscaled, on the canvas described by `spec`.
///
/// Fails with [`ComposeError::Decode`] if the bytes are not a supported image
/// and with [`ComposeError::Oversize`] if the image is larger than the canvas
/// once its orientation is applied. An edge length whose canvas would exceed the
/// allocation limit fails with [`ComposeError::CanvasTooLarge`].
pub fn compose(source_bytes: &[u8], spec: &CanvasSpec) -> Result<OutputImage, ComposeError> {
    let source = decode(source_bytes)?;
    compose_image(source, spec)
}

/// Same as [`compose`] for an image that has already been decoded.
pub fn compose_image(
    mut source: SourceImage,
    spec: &CanvasSpec,
) -> Result<OutputImage, ComposeError> {
    auto_orient(&mut source);
    ensure_fits(source.pixels.dimensions(), spec.edge())?;

    let SourceImage {
        pixels, exif, icc, ..
    } = source;
    let pixels = normalize_alpha(pixels);
    // checked before the canvas is allocated
    ensure_canvas_allocatable(spec.edge(), pixels.color())?;
    let canvas = place_centered(&pixels, spec.edge(), spec.background);

    let metadata = Metadata { exif, icc }.strip(spec.strip);
    encode(&canvas, spec.output_encoding, &metadata)
}

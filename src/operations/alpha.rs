use image::{ColorType, DynamicImage};

/// Converts the pixels to RGBA so they can be painted onto any canvas.
///
/// 8-bit sources become RGBA8. Sources with more precision become RGBA16,
/// which keeps 16-bit data intact all the way to a PNG output.
/// Images without an alpha channel come out fully opaque.
pub fn normalize_alpha(pixels: DynamicImage) -> DynamicImage {
    match pixels.color() {
        ColorType::Rgba8 | ColorType::Rgba16 => pixels,
        ColorType::L8 | ColorType::La8 | ColorType::Rgb8 => {
            DynamicImage::ImageRgba8(pixels.into_rgba8())
        }
        _ => DynamicImage::ImageRgba16(pixels.into_rgba16()),
    }
}

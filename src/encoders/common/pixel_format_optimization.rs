use image::{ColorType, DynamicImage, ImageBuffer, Pixel, Primitive, Rgba};
use std::borrow::Cow;

/// Picks the smallest pixel format that still holds the canvas exactly.
///
/// The canvas is always RGBA8 or RGBA16. The alpha channel is dropped if every pixel is opaque,
/// the color channels collapse to gray if every pixel is gray,
/// and 16-bit data that is really 8-bit (every channel a multiple of 257) becomes 8-bit.
pub(crate) fn shrink_canvas_format(canvas: &DynamicImage) -> Cow<'_, DynamicImage> {
    let reductions = match canvas {
        DynamicImage::ImageRgba8(pixels) => scan(pixels),
        DynamicImage::ImageRgba16(pixels) => scan(pixels),
        _ => return Cow::Borrowed(canvas),
    };
    convert(canvas, reductions.target(canvas.color()))
}

/// Converts the canvas to RGB8 or RGBA8 for encoders that only take 8-bit color,
/// keeping alpha only when some pixel actually uses it.
pub(crate) fn to_8bit_rgb_maybe_a(canvas: &DynamicImage) -> Cow<'_, DynamicImage> {
    let opaque = match canvas {
        DynamicImage::ImageRgba8(pixels) => scan(pixels).opaque,
        DynamicImage::ImageRgba16(pixels) => scan(pixels).opaque,
        DynamicImage::ImageRgb8(_) => return Cow::Borrowed(canvas),
        other => !other.color().has_alpha(),
    };
    if opaque {
        convert(canvas, ColorType::Rgb8)
    } else {
        convert(canvas, ColorType::Rgba8)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Reductions {
    grayscale: bool,
    opaque: bool,
    eight_bit: bool,
}

impl Reductions {
    fn none() -> Self {
        Self {
            grayscale: false,
            opaque: false,
            eight_bit: false,
        }
    }

    fn target(self, color: ColorType) -> ColorType {
        let sixteen_bit = color == ColorType::Rgba16 && !self.eight_bit;
        match (sixteen_bit, self.grayscale, self.opaque) {
            (false, false, false) => ColorType::Rgba8,
            (false, false, true) => ColorType::Rgb8,
            (false, true, false) => ColorType::La8,
            (false, true, true) => ColorType::L8,
            (true, false, false) => ColorType::Rgba16,
            (true, false, true) => ColorType::Rgb16,
            (true, true, false) => ColorType::La16,
            (true, true, true) => ColorType::L16,
        }
    }
}

/// Checks all three properties in a single pass over the pixels.
fn scan<S>(pixels: &ImageBuffer<Rgba<S>, Vec<S>>) -> Reductions
where
    S: Primitive,
    Rgba<S>: Pixel<Subpixel = S>,
{
    // every reduction is valid until a pixel proves otherwise
    let mut result = Reductions {
        grayscale: true,
        opaque: true,
        eight_bit: true,
    };
    // u16 subpixels hold 8-bit data as v * 257; u8 subpixels cannot hold 257 at all
    let eight_bit_step = S::from(257u16);
    for row in pixels.rows() {
        for pixel in row {
            let [r, g, b, a] = pixel.0;
            result.grayscale &= (r == g) & (r == b);
            result.opaque &= a == S::DEFAULT_MAX_VALUE;
            if let Some(step) = eight_bit_step {
                result.eight_bit &= pixel
                    .channels()
                    .iter()
                    .all(|&channel| channel % step == S::DEFAULT_MIN_VALUE);
            }
        }
        // checked once per row so the loop above stays branch-free
        if result == Reductions::none() {
            return result;
        }
    }
    result
}

fn convert(image: &DynamicImage, color: ColorType) -> Cow<'_, DynamicImage> {
    if image.color() == color {
        return Cow::Borrowed(image);
    }
    let converted = match color {
        ColorType::L8 => DynamicImage::ImageLuma8(image.to_luma8()),
        ColorType::La8 => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(image.to_rgb8()),
        ColorType::L16 => DynamicImage::ImageLuma16(image.to_luma16()),
        ColorType::La16 => DynamicImage::ImageLumaA16(image.to_luma_alpha16()),
        ColorType::Rgb16 => DynamicImage::ImageRgb16(image.to_rgb16()),
        ColorType::Rgba16 => DynamicImage::ImageRgba16(image.to_rgba16()),
        _ => DynamicImage::ImageRgba8(image.to_rgba8()),
    };
    Cow::Owned(converted)
}

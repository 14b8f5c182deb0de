use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel, Primitive, Rgba};

use crate::{arg_parsers::Background, operations::fit::centered_offset};

/// Creates a square canvas filled with the background and paints `pixels` in its center.
///
/// `pixels` must already fit on the canvas and be in RGBA8 or RGBA16
/// (see [`super::normalize_alpha`]); anything else is converted to RGBA8 first.
pub fn place_centered(pixels: &DynamicImage, edge: u32, background: Background) -> DynamicImage {
    let offset = centered_offset(pixels.dimensions(), edge);
    match pixels {
        DynamicImage::ImageRgba16(src) => {
            let mut canvas = blank_canvas(edge, background);
            paint(&mut canvas, src, offset);
            DynamicImage::ImageRgba16(canvas)
        }
        DynamicImage::ImageRgba8(src) => {
            let mut canvas = blank_canvas(edge, background);
            paint(&mut canvas, src, offset);
            DynamicImage::ImageRgba8(canvas)
        }
        other => {
            let mut canvas = blank_canvas(edge, background);
            paint(&mut canvas, &other.to_rgba8(), offset);
            DynamicImage::ImageRgba8(canvas)
        }
    }
}

fn blank_canvas<S>(edge: u32, background: Background) -> ImageBuffer<Rgba<S>, Vec<S>>
where
    S: Primitive,
    Rgba<S>: Pixel<Subpixel = S>,
{
    // 1 for u8, 257 for u16, so 0xff maps exactly onto 0xffff
    let scale = S::DEFAULT_MAX_VALUE / S::from(255u8).unwrap_or(S::DEFAULT_MAX_VALUE);
    let [r, g, b, a] = background.to_rgba8().map(|channel| {
        S::from(channel).unwrap_or(S::DEFAULT_MIN_VALUE) * scale
    });
    ImageBuffer::from_pixel(edge, edge, Rgba([r, g, b, a]))
}

/// Source-over compositing of `src` onto `canvas` with its top-left corner at `(x, y)`.
/// Pixels are copied one for one; nothing is ever resampled.
fn paint<S>(
    canvas: &mut ImageBuffer<Rgba<S>, Vec<S>>,
    src: &ImageBuffer<Rgba<S>, Vec<S>>,
    (x, y): (u32, u32),
) where
    S: Primitive,
    Rgba<S>: Pixel<Subpixel = S>,
{
    for (sx, sy, src_pixel) in src.enumerate_pixels() {
        let dst_pixel = canvas.get_pixel_mut(x + sx, y + sy);
        *dst_pixel = source_over(*src_pixel, *dst_pixel);
    }
}

fn source_over<S: Primitive>(src: Rgba<S>, dst: Rgba<S>) -> Rgba<S> {
    let max = S::DEFAULT_MAX_VALUE;
    let zero = S::DEFAULT_MIN_VALUE;
    let (src_a, dst_a) = (src.0[3], dst.0[3]);
    // the common cases are exact copies, no arithmetic involved
    if src_a == max || dst_a == zero {
        return src;
    }
    if src_a == zero {
        return dst;
    }

    let max_f = max.to_f32().unwrap_or(1.0);
    let sa = src_a.to_f32().unwrap_or(0.0) / max_f;
    let da = dst_a.to_f32().unwrap_or(0.0) / max_f;
    let out_a = sa + da * (1.0 - sa);
    let mut out = [zero; 4];
    for c in 0..3 {
        let sc = src.0[c].to_f32().unwrap_or(0.0);
        let dc = dst.0[c].to_f32().unwrap_or(0.0);
        let blended = (sc * sa + dc * da * (1.0 - sa)) / out_a;
        out[c] = S::from(blended.round().clamp(0.0, max_f)).unwrap_or(max);
    }
    out[3] = S::from((out_a * max_f).round().clamp(0.0, max_f)).unwrap_or(max);
    Rgba(out)
}

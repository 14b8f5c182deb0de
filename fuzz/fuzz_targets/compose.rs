#![no_main]

use std::num::{NonZeroU32, NonZeroU8};

use arbitrary::Unstructured;
use canvasfit::{
    arg_parsers::{Background, OutputEncoding},
    canvas::CanvasSpec,
    compose::compose_image,
    error::ComposeError,
    image::SourceImage,
};
use image::{DynamicImage, GenericImageView, RgbaImage};
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct StructuredImage {
    width: NonZeroU8,
    height: NonZeroU8,
    rgba_data: Vec<u8>,
}

impl StructuredImage {
    fn to_dynamic(&self) -> DynamicImage {
        let pixels = RgbaImage::from_raw(
            self.width.get() as u32,
            self.height.get() as u32,
            self.rgba_data.clone(),
        )
        .expect("buffer length matches the dimensions");
        DynamicImage::ImageRgba8(pixels)
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgba_data_len = width.get() as usize * height.get() as usize * 4;
        let rgba_data = unstructured.bytes(rgba_data_len)?;

        Ok(Self {
            width,
            height,
            rgba_data: rgba_data.to_vec(),
        })
    }
}

fuzz_target!(|input: (StructuredImage, NonZeroU8, Option<[u8; 3]>, bool)| {
    let (image, edge, color, webp) = input;
    let edge = NonZeroU32::from(edge);
    let background = color.map_or(Background::Transparent, Background::Color);
    let encoding = if webp {
        OutputEncoding::WebP
    } else {
        OutputEncoding::Png
    };
    let spec = CanvasSpec::new(edge)
        .with_background(background)
        .with_encoding(encoding);

    let pixels = image.to_dynamic();
    let fits = pixels.width() <= edge.get() && pixels.height() <= edge.get();

    match compose_image(SourceImage::from_pixels(pixels), &spec) {
        Ok(output) => {
            assert!(fits, "an oversized image was accepted");
            let canvas = image::load_from_memory(&output.bytes)
                .expect("could not decode the canvas we just encoded");
            assert_eq!(canvas.dimensions(), (edge.get(), edge.get()));
        }
        Err(ComposeError::Oversize { .. }) => assert!(!fits, "a fitting image was rejected"),
        Err(other) => panic!("unexpected failure: {other}"),
    }
});

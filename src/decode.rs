use std::{io::Cursor, path::Path};

use image::{
    metadata::Orientation, DynamicImage, ImageDecoder, ImageError, ImageReader, ImageResult,
};

use crate::{error::ComposeError, image::SourceImage};

/// File extensions that are worth attempting to decode, lowercase.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff", "bmp", "webp"];

/// Rejects file names whose extension is not a supported input format,
/// without looking at the contents.
pub fn check_extension(file_name: &str) -> Result<(), ComposeError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");
    if SUPPORTED_EXTENSIONS
        .iter()
        .any(|supported| ext.eq_ignore_ascii_case(supported))
    {
        Ok(())
    } else {
        Err(ComposeError::UnsupportedFormat(ext.to_owned()))
    }
}

/// Decodes an in-memory image, guessing the format from its contents.
///
/// Metadata that cannot be read is logged and treated as absent;
/// only failing to decode the pixels is an error.
pub fn decode(bytes: &[u8]) -> Result<SourceImage, ComposeError> {
    decode_inner(bytes).map_err(ComposeError::Decode)
}

fn decode_inner(bytes: &[u8]) -> ImageResult<SourceImage> {
    if bytes.is_empty() {
        return Err(ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input is empty",
        )));
    }
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let mut decoder = reader.into_decoder()?;

    let orientation = decoder.orientation().unwrap_or_else(|e| {
        log::warn!("could not read orientation, leaving image as stored: {e}");
        Orientation::NoTransforms
    });
    let icc = decoder.icc_profile().unwrap_or_else(|e| {
        log::warn!("could not read ICC profile, dropping it: {e}");
        None
    });
    let exif = decoder.exif_metadata().unwrap_or_else(|e| {
        log::warn!("could not read Exif metadata, dropping it: {e}");
        None
    });
    let pixels = DynamicImage::from_decoder(decoder)?;

    Ok(SourceImage {
        pixels,
        orientation,
        exif,
        icc,
    })
}

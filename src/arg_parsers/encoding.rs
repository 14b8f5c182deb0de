use std::path::Path;

use image::ImageFormat;

/// Lossless, alpha-capable formats the canvas can be written in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputEncoding {
    #[default]
    Png,
    WebP,
}

impl OutputEncoding {
    /// File extension used for outputs, without the leading dot.
    pub fn extension(self) -> &'static str {
        self.into()
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputEncoding::Png => ImageFormat::Png,
            OutputEncoding::WebP => ImageFormat::WebP,
        }
    }

    /// Picks the encoding from the extension of an output path, if it names one.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        ext.parse().ok()
    }
}

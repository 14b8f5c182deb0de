use std::fmt::{Debug, Display};

/// A fatal error that ends the whole run, e.g. an unreadable input path
/// or an output that could not be written.
pub struct CanvasError(pub String);

impl Display for CanvasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for CanvasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CanvasError").field(&self.0).finish()
    }
}

impl std::error::Error for CanvasError {}

#[macro_export]
macro_rules! cf_err {
    ($($arg:tt)*) => {
        $crate::error::CanvasError(format!(
            "canvasfit: {} @ {}:{}:{}",
            format_args!($($arg)*),
            file!(),
            line!(),
            column!()
        ))
    };
}

#[macro_export]
macro_rules! cf_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::cf_err!("{}", err));
            }
        }
    };
}

/// Why a single image was not placed on the canvas.
///
/// These never abort a batch: the driver records them next to the input name
/// and carries on with the remaining images.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("unreadable image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("image is {width}x{height}, which does not fit on a {edge}x{edge} canvas")]
    Oversize { width: u32, height: u32, edge: u32 },

    #[error("a {edge}x{edge} canvas needs {needed} bytes, more than the {limit} byte limit")]
    CanvasTooLarge { edge: u32, needed: u128, limit: u64 },

    #[error("unsupported file type `{0}'")]
    UnsupportedFormat(String),

    #[error("could not encode image: {0}")]
    Encode(#[source] image::ImageError),
}

impl ComposeError {
    /// Short explanation suitable for showing to the person who submitted the image.
    pub fn reason(&self) -> &'static str {
        match self {
            ComposeError::Decode(_) => "skipped: unreadable image",
            ComposeError::Oversize { .. } => "skipped: too large for canvas",
            ComposeError::CanvasTooLarge { .. } => "skipped: canvas size too large",
            ComposeError::UnsupportedFormat(_) => "skipped: unsupported file type",
            ComposeError::Encode(_) => "skipped: could not encode",
        }
    }
}

//! Output format handlers. Each writes a finished canvas plus its metadata.

mod common;
#[cfg(feature = "png")]
pub mod png;
#[cfg(feature = "webp")]
pub mod webp;

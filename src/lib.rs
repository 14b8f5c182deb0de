//! `canvasfit` places images, unscaled, in the center of a fixed-size square canvas.
//!
//! The heart of the crate is [`compose::compose`]: bytes of one image in,
//! bytes of one canvas out, or a [`error::ComposeError`] saying why the image was left out.
//! [`batch`] and [`plan`] run it over many files and package the results.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod arg_parse_err;
pub mod arg_parsers;
pub mod archive;
pub mod args;
pub mod batch;
pub mod canvas;
pub mod compose;
pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod help;
pub mod image;
pub mod init;
pub mod operations;
pub mod plan;
mod utils;

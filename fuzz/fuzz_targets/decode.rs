#![no_main]

use std::num::NonZeroU32;

use canvasfit::{canvas::CanvasSpec, compose::compose};
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes must come back as a canvas or a per-image error, never a panic.
fuzz_target!(|data: &[u8]| {
    let spec = CanvasSpec::new(NonZeroU32::new(64).unwrap());
    let _ = compose(data, &spec);
});

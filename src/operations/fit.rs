use image::{ColorType, Limits};

use crate::error::ComposeError;

/// Checks that an image of the given dimensions fits on the canvas without scaling.
pub fn ensure_fits((width, height): (u32, u32), edge: u32) -> Result<(), ComposeError> {
    if width > edge || height > edge {
        Err(ComposeError::Oversize {
            width,
            height,
            edge,
        })
    } else {
        Ok(())
    }
}

/// Checks that an `edge`×`edge` canvas of the given pixel type can be allocated
/// within the default allocation limit of the `image` crate.
pub fn ensure_canvas_allocatable(edge: u32, color: ColorType) -> Result<(), ComposeError> {
    let limit = Limits::default()
        .max_alloc
        .unwrap_or(u64::MAX)
        .min(u64::try_from(usize::MAX).unwrap_or(u64::MAX));
    let needed = u128::from(edge) * u128::from(edge) * u128::from(color.bytes_per_pixel());
    if needed > u128::from(limit) {
        Err(ComposeError::CanvasTooLarge {
            edge,
            needed,
            limit,
        })
    } else {
        Ok(())
    }
}

/// Top-left corner that centers an image on the canvas.
/// Odd leftovers go to the right and bottom.
pub fn centered_offset((width, height): (u32, u32), edge: u32) -> (u32, u32) {
    ((edge - width) / 2, (edge - height) / 2)
}

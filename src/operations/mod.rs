//! The individual steps of placing an image on a canvas, in the order they run.

mod alpha;
mod auto_orient;
mod composite;
mod fit;

pub use alpha::normalize_alpha;
pub use auto_orient::auto_orient;
pub use composite::place_centered;
pub use fit::{centered_offset, ensure_canvas_allocatable, ensure_fits};

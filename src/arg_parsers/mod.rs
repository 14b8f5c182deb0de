//! Parsers for the values of command-line options and environment variables.

mod background;
pub use background::*;
mod encoding;
pub use encoding::*;
mod location;
pub use location::*;
pub mod numbers;

//! Renderers for finished canvases.
//!
//! Exporters only read a canvas through its public interface; they work on
//! any canvas state, treating unwritten modules as light.

/// Grayscale raster and PNG output
pub mod raster;
/// SVG output
pub mod svg;
/// Console output
pub mod text;

pub use raster::{save_png, to_image};
pub use svg::{save_svg, to_svg_string};
pub use text::to_text;

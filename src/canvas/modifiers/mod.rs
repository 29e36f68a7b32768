//! Service pattern modifiers
//!
//! Each modifier stamps one kind of structural information onto a canvas as
//! service modules:
//! - Finder: corner patterns, separators and the dark module
//! - Timing: alternating strips on row and column 6
//! - Format: correction level and mask number
//! - Version: version number (v7+)
//! - Alignment: 5x5 patterns (v2+)

/// Alignment patterns
pub mod alignment;
/// Finder patterns, separators and the dark module
pub mod finder;
/// Format information
pub mod format;
/// Timing strips
pub mod timing;
/// Version information
pub mod version;

pub use alignment::AlignmentModifier;
pub use finder::FinderModifier;
pub use format::FormatModifier;
pub use timing::TimingModifier;
pub use version::VersionModifier;

use crate::canvas::qr_canvas::QrCanvas;
use crate::error::Result;

/// In-place transformation of a canvas
pub trait CanvasModifier {
    /// Write this modifier's modules onto `canvas`
    fn modify(&self, canvas: &mut QrCanvas) -> Result<()>;
}

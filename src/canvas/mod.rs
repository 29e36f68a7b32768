//! Module grid, service patterns, masking and the painting pipeline

/// Mask patterns, penalty scoring and mask selection
pub mod masking;
/// Service pattern modifiers
pub mod modifiers;
/// Pipeline stages from empty canvas to bordered symbol
pub mod painter;
/// Canvas and module types
pub mod qr_canvas;

pub use masking::{MaskPattern, PenaltyBreakdown};
pub use modifiers::CanvasModifier;
pub use qr_canvas::{BORDER_WIDTH, CanvasBit, CanvasState, QrCanvas, WritingPositions};

//! Data masking and automatic mask selection

/// Mask selection by penalty score
pub mod determiner;
/// The eight mask patterns
pub mod mask;
/// Penalty rules
pub mod penalty;

pub use determiner::{MaskEvaluation, apply_best_mask, evaluate_masks};
pub use mask::MaskPattern;
pub use penalty::{PenaltyBreakdown, penalty_breakdown, penalty_score};

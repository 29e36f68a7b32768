use crate::canvas::masking::mask::MaskPattern;
use crate::canvas::masking::penalty::{PenaltyBreakdown, penalty_breakdown};
use crate::canvas::modifiers::{CanvasModifier, FormatModifier};
use crate::canvas::qr_canvas::QrCanvas;
use crate::error::Result;
use rayon::prelude::*;
use tracing::{debug, trace};

/// One candidate of the mask search
#[derive(Debug, Clone)]
pub struct MaskEvaluation {
    /// Candidate mask
    pub mask: MaskPattern,
    /// Masked canvas with matching format info
    pub canvas: QrCanvas,
    /// Penalty of `canvas`
    pub penalty: PenaltyBreakdown,
}

fn evaluate(canvas: &QrCanvas, mask: MaskPattern) -> Result<MaskEvaluation> {
    let mut masked = canvas.apply_mask(mask)?;
    FormatModifier::new(canvas.ec_level(), mask).modify(&mut masked)?;
    let penalty = penalty_breakdown(&masked);
    trace!(
        mask = mask.number(),
        runs = penalty.runs,
        finder_like = penalty.finder_like,
        blocks = penalty.blocks,
        balance = penalty.balance,
        total = penalty.total(),
        "evaluated mask"
    );
    Ok(MaskEvaluation {
        mask,
        canvas: masked,
        penalty,
    })
}

/// Mask and score `canvas` with all eight masks, in mask number order.
///
/// With `parallel` the candidates are built on the rayon pool; the result is
/// identical to the sequential evaluation.
pub fn evaluate_masks(canvas: &QrCanvas, parallel: bool) -> Result<Vec<MaskEvaluation>> {
    if parallel {
        MaskPattern::ALL
            .par_iter()
            .map(|&mask| evaluate(canvas, mask))
            .collect()
    } else {
        MaskPattern::ALL
            .iter()
            .map(|&mask| evaluate(canvas, mask))
            .collect()
    }
}

/// Masked copy of `canvas` with the lowest total penalty.
///
/// Ties go to the lowest mask number. Fails if `canvas` is already masked or
/// bordered.
pub fn apply_best_mask(canvas: &QrCanvas, parallel: bool) -> Result<QrCanvas> {
    let mut best: Option<MaskEvaluation> = None;
    for candidate in evaluate_masks(canvas, parallel)? {
        let better = best
            .as_ref()
            .is_none_or(|current| candidate.penalty.total() < current.penalty.total());
        if better {
            best = Some(candidate);
        }
    }

    match best {
        Some(best) => {
            debug!(
                mask = best.mask.number(),
                penalty = best.penalty.total(),
                parallel,
                "selected mask"
            );
            Ok(best.canvas)
        }
        // MaskPattern::ALL is never empty
        None => canvas.apply_mask(MaskPattern::Pattern0),
    }
}

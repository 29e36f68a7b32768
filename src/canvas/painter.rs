//! Canvas painting pipeline
//!
//! Each stage takes a canvas by value and hands back the next one:
//! service info, data placement, masking, quiet zone.

use crate::canvas::masking::{MaskPattern, determiner};
use crate::canvas::modifiers::{
    AlignmentModifier, CanvasModifier, FinderModifier, FormatModifier, TimingModifier,
    VersionModifier,
};
use crate::canvas::qr_canvas::QrCanvas;
use crate::config::Masking;
use crate::error::{Error, Result};
use tracing::debug;

/// Stamp finder, timing, reserved format, alignment (v2+) and version (v7+)
/// patterns
pub fn add_service_info(mut canvas: QrCanvas) -> Result<QrCanvas> {
    let version = canvas.version().number();
    let mut modifiers: Vec<Box<dyn CanvasModifier>> = vec![
        Box::new(FinderModifier),
        Box::new(TimingModifier),
        Box::new(FormatModifier::new(canvas.ec_level(), MaskPattern::Unmasked)),
    ];
    if version >= 2 {
        modifiers.push(Box::new(AlignmentModifier));
    }
    if version >= 7 {
        modifiers.push(Box::new(VersionModifier));
    }

    for modifier in &modifiers {
        modifier.modify(&mut canvas)?;
    }
    Ok(canvas)
}

/// Place the canvas's data stream along the writing order.
///
/// Service modules are skipped. Non-service modules left over once the stream
/// is exhausted are written light; data left over once the modules run out is
/// an error.
pub fn write_data(mut canvas: QrCanvas) -> Result<QrCanvas> {
    let mut stream = canvas.data().stream().clone();
    stream.rewind();

    let mut padding = 0usize;
    for position in canvas.writing_positions() {
        if canvas.is_service(position.x, position.y) {
            continue;
        }
        let bit = if stream.can_read(1) {
            stream.read_bit()?
        } else {
            padding += 1;
            false
        };
        canvas.set_bit(position, bit, false)?;
    }

    if stream.can_read(1) {
        return Err(Error::CanvasOverflow {
            remaining: stream.len() - stream.pointer(),
        });
    }
    debug!(data_bits = stream.len(), padding, "placed data");
    Ok(canvas)
}

/// Apply a fixed mask and write the matching format info
pub fn apply_mask(canvas: QrCanvas, mask: MaskPattern) -> Result<QrCanvas> {
    let mut masked = canvas.apply_mask(mask)?;
    FormatModifier::new(masked.ec_level(), mask).modify(&mut masked)?;
    Ok(masked)
}

/// Apply the mask with the lowest penalty
pub fn apply_best_mask(canvas: QrCanvas, parallel: bool) -> Result<QrCanvas> {
    determiner::apply_best_mask(&canvas, parallel)
}

/// Surround the canvas with the quiet zone
pub fn add_borders(canvas: QrCanvas) -> Result<QrCanvas> {
    canvas.add_borders()
}

/// Run the whole pipeline on a fresh canvas
pub fn paint(canvas: QrCanvas, masking: Masking, parallel: bool) -> Result<QrCanvas> {
    let canvas = write_data(add_service_info(canvas)?)?;
    let canvas = match masking {
        Masking::Auto => apply_best_mask(canvas, parallel)?,
        Masking::Fixed(mask) => apply_mask(canvas, mask)?,
    };
    add_borders(canvas)
}

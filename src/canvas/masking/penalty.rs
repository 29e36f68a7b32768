//! Mask penalty rules.
//!
//! Unwritten modules count as light, as do the virtual modules outside the
//! symbol used by the finder-like rule.

use crate::canvas::qr_canvas::QrCanvas;

const N1_RUN: u32 = 3;
const N2_BLOCK: u32 = 3;
const N3_FINDER_LIKE: u32 = 40;
const N4_BALANCE: u32 = 10;

/// Minimum run length that is penalised
const MIN_RUN: usize = 5;

/// Light modules assumed on both sides of every row and column
const VIRTUAL_MARGIN: usize = 4;

/// 1:1:3:1:1 dark pattern preceded by four light modules
const FINDER_LIKE: [bool; 11] = [
    false, false, false, false, true, false, true, true, true, false, true,
];

/// Scores of the four penalty rules for one canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PenaltyBreakdown {
    /// Rule 1: runs of five or more same-coloured modules
    pub runs: u32,
    /// Rule 2: finder-like 1:1:3:1:1 patterns next to four light modules
    pub finder_like: u32,
    /// Rule 3: uniform 2x2 blocks
    pub blocks: u32,
    /// Rule 4: deviation of the dark ratio from 50%
    pub balance: u32,
}

impl PenaltyBreakdown {
    /// Sum of all rules
    pub fn total(&self) -> u32 {
        self.runs + self.finder_like + self.blocks + self.balance
    }
}

/// Evaluate every rule on `canvas`
pub fn penalty_breakdown(canvas: &QrCanvas) -> PenaltyBreakdown {
    let size = canvas.size();
    let grid: Vec<bool> = (0..size * size)
        .map(|i| canvas.is_dark(i % size, i / size))
        .collect();

    let mut breakdown = PenaltyBreakdown::default();
    let mut column = vec![false; size];
    for i in 0..size {
        let row = &grid[i * size..(i + 1) * size];
        for (y, cell) in column.iter_mut().enumerate() {
            *cell = grid[y * size + i];
        }
        for line in [row, column.as_slice()] {
            breakdown.runs += run_penalty(line);
            breakdown.finder_like += finder_like_penalty(line);
        }
    }
    breakdown.blocks = block_penalty(&grid, size);
    breakdown.balance = balance_penalty(grid.iter().filter(|&&dark| dark).count(), size * size);
    breakdown
}

/// Total penalty of `canvas`
pub fn penalty_score(canvas: &QrCanvas) -> u32 {
    penalty_breakdown(canvas).total()
}

/// Each run of `len >= 5` equal modules adds `len - 2`
fn run_penalty(line: &[bool]) -> u32 {
    let mut penalty = 0;
    let mut run = 0usize;
    let mut previous = None;
    for &dark in line {
        if previous == Some(dark) {
            run += 1;
        } else {
            if run >= MIN_RUN {
                penalty += N1_RUN + (run - MIN_RUN) as u32;
            }
            run = 1;
            previous = Some(dark);
        }
    }
    if run >= MIN_RUN {
        penalty += N1_RUN + (run - MIN_RUN) as u32;
    }
    penalty
}

/// Every 11-module window equal to the finder-like pattern or its reverse
/// adds 40; the line is padded with light modules on both ends
fn finder_like_penalty(line: &[bool]) -> u32 {
    let mut padded = Vec::with_capacity(line.len() + 2 * VIRTUAL_MARGIN);
    padded.extend_from_slice(&[false; VIRTUAL_MARGIN]);
    padded.extend_from_slice(line);
    padded.extend_from_slice(&[false; VIRTUAL_MARGIN]);

    let matches = padded
        .windows(FINDER_LIKE.len())
        .filter(|window| {
            window.iter().eq(FINDER_LIKE.iter()) || window.iter().eq(FINDER_LIKE.iter().rev())
        })
        .count() as u32;
    matches * N3_FINDER_LIKE
}

fn block_penalty(grid: &[bool], size: usize) -> u32 {
    let mut penalty = 0;
    for y in 0..size.saturating_sub(1) {
        for x in 0..size - 1 {
            let color = grid[y * size + x];
            if grid[y * size + x + 1] == color
                && grid[(y + 1) * size + x] == color
                && grid[(y + 1) * size + x + 1] == color
            {
                penalty += N2_BLOCK;
            }
        }
    }
    penalty
}

/// Dark and light percentages differing by more than 10 points cost 10 per
/// two further points of difference
fn balance_penalty(dark: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Percentage rounded half up
    let percent = ((200 * dark + total) / (2 * total)) as i64;
    let deviation = (2 * percent - 100).abs();
    let steps = (deviation - 10).max(0) / 2;
    steps as u32 * N4_BALANCE
}

use crate::canvas::masking::MaskPattern;
use crate::error::{Error, Result};
use crate::models::{ECLevel, Position, QrCodeData, Version};

/// Quiet zone width added by [`QrCanvas::add_borders`]
pub const BORDER_WIDTH: usize = 4;

/// One module of a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasBit {
    /// Module coordinates
    pub position: Position,
    /// `Some(true)` for dark, `Some(false)` for light, `None` while unwritten
    pub value: Option<bool>,
    /// Service modules are never masked or overwritten by data
    pub is_service: bool,
}

impl CanvasBit {
    /// Unwritten, non-service module
    pub fn empty(position: Position) -> Self {
        Self {
            position,
            value: None,
            is_service: false,
        }
    }

    /// True only for committed dark modules
    pub fn is_dark(&self) -> bool {
        self.value == Some(true)
    }

    /// Same module with another value
    pub fn with_value(self, value: Option<bool>) -> Self {
        Self { value, ..self }
    }
}

/// Lifecycle of a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasState {
    /// Service patterns and data are written unmasked
    Raw,
    /// A mask has been applied; only service info may still change
    Masked,
    /// Quiet zone added; the canvas is final
    Bordered,
}

/// Square module grid of one symbol.
///
/// Modules are stored row-major. Writes to non-service modules go through the
/// canvas's current mask, which is [`MaskPattern::Unmasked`] until
/// [`QrCanvas::apply_mask`] produces a masked copy.
#[derive(Debug, Clone)]
pub struct QrCanvas {
    data: QrCodeData,
    size: usize,
    bits: Vec<CanvasBit>,
    state: CanvasState,
    mask: MaskPattern,
}

impl QrCanvas {
    /// Empty canvas sized for the data's version
    pub fn new(data: QrCodeData) -> Self {
        let size = data.version().size();
        let bits = (0..size * size)
            .map(|i| CanvasBit::empty(Position::new(i % size, i / size)))
            .collect();
        Self {
            data,
            size,
            bits,
            state: CanvasState::Raw,
            mask: MaskPattern::Unmasked,
        }
    }

    /// Side length in modules (quiet zone included once bordered)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Payload this canvas was created for
    pub fn data(&self) -> &QrCodeData {
        &self.data
    }

    /// Symbol version
    pub fn version(&self) -> Version {
        self.data.version()
    }

    /// Error correction level
    pub fn ec_level(&self) -> ECLevel {
        self.data.ec_level()
    }

    /// Current lifecycle state
    pub fn state(&self) -> CanvasState {
        self.state
    }

    /// Mask applied to the non-service modules
    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Whether the quiet zone has been added
    pub fn is_bordered(&self) -> bool {
        self.state == CanvasState::Bordered
    }

    /// Whether a mask has been applied
    pub fn is_masked(&self) -> bool {
        self.state != CanvasState::Raw
    }

    /// Module at `position`
    pub fn get_bit(&self, position: Position) -> Result<CanvasBit> {
        let index = self.index(position)?;
        Ok(self.bits[index])
    }

    /// Write a module. Non-service values pass through the current mask.
    pub fn set_bit(&mut self, position: Position, value: bool, is_service: bool) -> Result<()> {
        if self.is_bordered() {
            return Err(Error::CanvasBordered);
        }
        let index = self.index(position)?;
        let value = if is_service {
            value
        } else {
            self.mask.apply(position.x, position.y, value)
        };
        self.bits[index] = CanvasBit {
            position,
            value: Some(value),
            is_service,
        };
        Ok(())
    }

    /// Dark test without bounds checking against the public error type.
    /// Unwritten modules count as light.
    pub(crate) fn is_dark(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.size + x].is_dark()
    }

    /// Whether the module at (`x`, `y`) is a service module
    pub(crate) fn is_service(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.size + x].is_service
    }

    /// Modules in reading order: row by row, left to right
    pub fn bits(&self) -> impl Iterator<Item = &CanvasBit> + '_ {
        self.bits.iter()
    }

    /// One row of modules
    pub fn row(&self, y: usize) -> &[CanvasBit] {
        &self.bits[y * self.size..(y + 1) * self.size]
    }

    /// Module positions in data placement order, relative to the symbol
    /// area (the quiet zone of a bordered canvas is not included)
    pub fn writing_positions(&self) -> WritingPositions {
        WritingPositions::new(self.version())
    }

    /// Copy of this canvas with `mask` applied to every non-service module.
    ///
    /// Fails once a mask has been applied or the canvas has been bordered.
    pub fn apply_mask(&self, mask: MaskPattern) -> Result<QrCanvas> {
        match self.state {
            CanvasState::Bordered => return Err(Error::CanvasBordered),
            CanvasState::Masked => return Err(Error::CanvasAlreadyMasked),
            CanvasState::Raw => {}
        }

        let bits = self.bits.iter().map(|&bit| mask.apply_to_bit(bit)).collect();
        Ok(QrCanvas {
            data: self.data.clone(),
            size: self.size,
            bits,
            state: CanvasState::Masked,
            mask,
        })
    }

    /// Copy of this canvas surrounded by a light quiet zone of
    /// [`BORDER_WIDTH`] modules. Fails if already bordered.
    pub fn add_borders(&self) -> Result<QrCanvas> {
        if self.is_bordered() {
            return Err(Error::CanvasBordered);
        }

        let size = self.size + 2 * BORDER_WIDTH;
        let mut bits: Vec<CanvasBit> = (0..size * size)
            .map(|i| CanvasBit {
                position: Position::new(i % size, i / size),
                value: Some(false),
                is_service: true,
            })
            .collect();
        for bit in &self.bits {
            let position = bit.position.offset(BORDER_WIDTH, BORDER_WIDTH);
            bits[position.y * size + position.x] = CanvasBit { position, ..*bit };
        }

        Ok(QrCanvas {
            data: self.data.clone(),
            size,
            bits,
            state: CanvasState::Bordered,
            mask: self.mask,
        })
    }

    fn index(&self, position: Position) -> Result<usize> {
        if position.x >= self.size || position.y >= self.size {
            return Err(Error::PositionOutOfBounds {
                x: position.x,
                y: position.y,
                size: self.size,
            });
        }
        Ok(position.y * self.size + position.x)
    }
}

/// Zigzag data placement order.
///
/// Two-column strips are walked from the right edge to the left, the first
/// one upwards and then alternating. Column 6 (the vertical timing pattern)
/// is skipped entirely. Within a strip the right column comes first.
#[derive(Debug, Clone)]
pub struct WritingPositions {
    size: usize,
    index: usize,
}

impl WritingPositions {
    /// Order for a symbol of the given version
    pub fn new(version: Version) -> Self {
        Self {
            size: version.size(),
            index: 0,
        }
    }

    fn total(&self) -> usize {
        self.size.saturating_sub(1) * self.size
    }

    fn position_at(&self, index: usize) -> Position {
        let strip_len = 2 * self.size;
        let strip = index / strip_len;
        let within = index % strip_len;
        let step = within / 2;

        let mut right = self.size - 1 - 2 * strip;
        if right <= 6 {
            right -= 1;
        }
        let x = right - within % 2;
        let y = if strip % 2 == 0 {
            self.size - 1 - step
        } else {
            step
        };
        Position::new(x, y)
    }
}

impl Iterator for WritingPositions {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.index >= self.total() {
            return None;
        }
        let position = self.position_at(self.index);
        self.index += 1;
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total() - self.index.min(self.total());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WritingPositions {}

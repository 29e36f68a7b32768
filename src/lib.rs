//! RustQRGen - QR code generation in pure Rust
//!
//! Turns text into a finished QR code symbol following ISO/IEC 18004:
//! mode selection, Reed-Solomon error correction, module placement, mask
//! evaluation and the quiet zone. Rendering to SVG, PNG or the console lives
//! in [`export`].
//!
//! ```no_run
//! use rust_qrgen::{ECLevel, GeneratorSettings, generate};
//!
//! let settings = GeneratorSettings::new(ECLevel::Q);
//! let canvas = generate("HELLO WORLD", &settings).unwrap();
//! print!("{}", rust_qrgen::export::to_text(&canvas));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Module grid, service patterns, masking and painting
pub mod canvas;
/// Generator settings and environment defaults
pub mod config;
/// Text to codeword stream (modes, padding, Reed-Solomon, interleaving)
pub mod encoder;
/// Error type shared by every stage
pub mod error;
/// SVG, raster and text renderers
pub mod export;
/// Core value types (Version, ECLevel, Position, QrCodeData)
pub mod models;

pub use canvas::{MaskPattern, QrCanvas};
pub use config::{GeneratorSettings, Masking};
pub use encoder::BitStream;
pub use error::{Error, ErrorKind, Result};
pub use models::{ECLevel, Position, Version};

use canvas::painter;
use tracing::debug;

/// Generate a finished, bordered symbol for `input`
///
/// # Arguments
/// * `input` - Text to encode
/// * `settings` - Correction level, byte forcing and mask choice
///
/// # Returns
/// The bordered canvas, with every module committed
pub fn generate(input: &str, settings: &GeneratorSettings) -> Result<QrCanvas> {
    let data = encoder::encode_data(input, settings.force_byte, settings.ec_level)?;
    let canvas = painter::paint(
        QrCanvas::new(data),
        settings.masking,
        settings.parallel_mask_search,
    )?;
    debug!(
        version = canvas.version().number(),
        ec_level = %canvas.ec_level(),
        mask = %canvas.mask(),
        size = canvas.size(),
        "generated symbol"
    );
    Ok(canvas)
}

/// Reusable generator holding one set of settings
#[derive(Debug, Clone, Default)]
pub struct Generator {
    settings: GeneratorSettings,
}

impl Generator {
    /// Generator with explicit settings
    pub fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    /// The settings used for every call to [`Generator::generate`]
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generate a symbol for `input`
    pub fn generate(&self, input: &str) -> Result<QrCanvas> {
        generate(input, &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_hello_world() {
        let settings = GeneratorSettings::new(ECLevel::Q);
        let canvas = generate("HELLO WORLD", &settings).unwrap();
        assert_eq!(canvas.version(), Version::MIN);
        assert_eq!(canvas.size(), 21 + 2 * canvas::BORDER_WIDTH);
        assert!(canvas.is_bordered());
        assert_ne!(canvas.mask(), MaskPattern::Unmasked);
    }

    #[test]
    fn test_generator_matches_function() {
        let settings = GeneratorSettings::new(ECLevel::L).with_force_byte(true);
        let generator = Generator::new(settings);
        let a = generator.generate("12345").unwrap();
        let b = generate("12345", &settings).unwrap();
        assert!(a.bits().eq(b.bits()));
        assert_eq!(generator.settings(), &settings);
    }

    #[test]
    fn test_generate_errors() {
        let settings = GeneratorSettings::new(ECLevel::H).with_force_byte(true);
        assert_eq!(generate("", &settings).unwrap_err().kind(), ErrorKind::InvalidArgument);
        let huge = "a".repeat(4000);
        assert!(matches!(
            generate(&huge, &settings),
            Err(Error::InputTooLong { .. })
        ));
    }
}

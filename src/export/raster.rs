use crate::canvas::QrCanvas;
use image::{GrayImage, ImageError, Luma};
use std::path::Path;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Rasterize `canvas` with every module drawn as a `scale` x `scale` square.
/// A scale of 0 is treated as 1.
pub fn to_image(canvas: &QrCanvas, scale: u32) -> GrayImage {
    let scale = scale.max(1);
    let side = canvas.size() as u32 * scale;
    GrayImage::from_fn(side, side, |x, y| {
        let module = canvas.row((y / scale) as usize)[(x / scale) as usize];
        if module.is_dark() { DARK } else { LIGHT }
    })
}

/// Rasterize and save as PNG
pub fn save_png<P: AsRef<Path>>(canvas: &QrCanvas, scale: u32, path: P) -> Result<(), ImageError> {
    to_image(canvas, scale).save_with_format(path, image::ImageFormat::Png)
}

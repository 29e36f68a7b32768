use crate::canvas::QrCanvas;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

const DARK_FILL: &str = "black";
const LIGHT_FILL: &str = "white";

/// Render `canvas` as an SVG document.
///
/// One module is one user unit (`viewBox` equals the canvas size) and the
/// document is scaled to `pixel_size` pixels. Equal modules in a row are
/// merged into a single `<rect>`.
pub fn to_svg_string(canvas: &QrCanvas, pixel_size: u32) -> String {
    let size = canvas.size();
    let mut svg = String::with_capacity(128 + size * 16);
    svg.push_str("<?xml version='1.0' encoding='utf-8'?>\n");
    let _ = writeln!(
        svg,
        "<svg width='{pixel_size}' height='{pixel_size}' viewBox='0 0 {size} {size}' \
         shape-rendering='crispEdges' xmlns='http://www.w3.org/2000/svg'>"
    );

    for y in 0..size {
        for (x, width, dark) in row_runs(canvas, y) {
            let fill = if dark { DARK_FILL } else { LIGHT_FILL };
            let _ = writeln!(
                svg,
                "<rect width='{width}' height='1' x='{x}' y='{y}' fill='{fill}'/>"
            );
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write [`to_svg_string`] output to `path`
pub fn save_svg<P: AsRef<Path>>(canvas: &QrCanvas, pixel_size: u32, path: P) -> io::Result<()> {
    fs::write(path, to_svg_string(canvas, pixel_size))
}

/// Runs of equal modules in row `y` as `(start, width, dark)`
fn row_runs(canvas: &QrCanvas, y: usize) -> Vec<(usize, usize, bool)> {
    let mut runs: Vec<(usize, usize, bool)> = Vec::new();
    for (x, bit) in canvas.row(y).iter().enumerate() {
        let dark = bit.is_dark();
        match runs.last_mut() {
            Some((_, width, current)) if *current == dark => *width += 1,
            _ => runs.push((x, 1, dark)),
        }
    }
    runs
}

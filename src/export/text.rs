use crate::canvas::QrCanvas;

const DARK: &str = "██";
const LIGHT: &str = "  ";

/// Console rendering, two characters per module and one line per row
pub fn to_text(canvas: &QrCanvas) -> String {
    let size = canvas.size();
    let mut text = String::with_capacity(size * (size * DARK.len() + 1));
    for y in 0..size {
        for bit in canvas.row(y) {
            text.push_str(if bit.is_dark() { DARK } else { LIGHT });
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::BitStream;
    use crate::models::{ECLevel, Position, QrCodeData, Version};

    #[test]
    fn test_text_layout() {
        let mut canvas =
            QrCanvas::new(QrCodeData::new(Version::MIN, ECLevel::L, BitStream::new()));
        canvas.set_bit(Position::new(0, 0), true, true).unwrap();

        let text = to_text(&canvas);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 21);
        assert!(lines.iter().all(|line| line.chars().count() == 42));
        assert!(lines[0].starts_with("██  "));
        assert_eq!(lines[1], LIGHT.repeat(21));
    }
}

//! Braille-based plotting canvas for the downloads chart.
//!
//! Each terminal character cell represents a 2x4 grid of braille dots,
//! providing 2x horizontal and 4x vertical sub-character resolution.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Braille dot bit positions indexed by [y % 4][x % 2].
///
/// ```text
/// Dot 1 (0x01) | Dot 4 (0x08)
/// Dot 2 (0x02) | Dot 5 (0x10)
/// Dot 3 (0x04) | Dot 6 (0x20)
/// Dot 7 (0x40) | Dot 8 (0x80)
/// ```
const BRAILLE_BIT_MAP: [[u8; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// Coordinates are in "dot space": x ranges 0..width*2, y ranges 0..height*4,
/// with y = 0 at the top.
pub(super) struct BrailleCanvas {
    cells: Vec<Vec<u8>>,
    width: usize,
    height: usize,
}

impl BrailleCanvas {
    pub(super) fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![0u8; width]; height],
            width,
            height,
        }
    }

    pub(super) fn dot_width(&self) -> usize {
        self.width * 2
    }

    pub(super) fn dot_height(&self) -> usize {
        self.height * 4
    }

    /// Set a dot. Out-of-bounds coordinates are ignored.
    pub(super) fn set(&mut self, x: usize, y: usize) {
        let col = x / 2;
        let row = y / 4;
        if col >= self.width || row >= self.height {
            return;
        }
        self.cells[row][col] |= BRAILLE_BIT_MAP[y % 4][x % 2];
    }

    /// Draw a straight segment between two dots (Bresenham)
    pub(super) fn line(&mut self, from: (usize, usize), to: (usize, usize)) {
        let (mut x0, mut y0) = (from.0 as i64, from.1 as i64);
        let (x1, y1) = (to.0 as i64, to.1 as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x0 as usize, y0 as usize);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    pub(super) fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|&bits| bits == 0)
    }

    /// Render the non-empty cells into `buf` at `area`
    pub(super) fn render_to_buffer(&self, buf: &mut Buffer, area: Rect, style: Style) {
        for (row, cells) in self.cells.iter().enumerate() {
            let y = area.y + row as u16;
            if y >= area.bottom() {
                break;
            }
            for (col, &bits) in cells.iter().enumerate() {
                let x = area.x + col as u16;
                if x >= area.right() {
                    break;
                }
                if bits != 0 {
                    let ch = char::from_u32(0x2800 + bits as u32).unwrap_or('\u{2800}');
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(ch).set_style(style);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_maps_to_braille_bits() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.set(0, 0);
        canvas.set(1, 3);
        assert_eq!(canvas.cells[0][0], 0x01 | 0x80);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set(4, 0);
        canvas.set(0, 8);
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_horizontal_line_fills_row() {
        let mut canvas = BrailleCanvas::new(3, 1);
        canvas.line((0, 3), (5, 3));
        for col in 0..3 {
            assert_eq!(canvas.cells[0][col], 0x40 | 0x80);
        }
    }

    #[test]
    fn test_line_includes_both_endpoints() {
        let mut canvas = BrailleCanvas::new(4, 2);
        canvas.line((7, 0), (0, 7));
        assert_ne!(canvas.cells[0][3] & 0x08, 0);
        assert_ne!(canvas.cells[1][0] & 0x40, 0);
    }
}

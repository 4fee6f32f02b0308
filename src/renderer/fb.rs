//! Character grid the game view paints into
//!
//! Writes outside the grid are dropped, so callers can clip by just drawing.

/// Terminal colour as red, green, blue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Foreground, background and weight of one glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Style {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg, bold: false }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

const BLANK: Glyph = Glyph {
    ch: ' ',
    style: Style::new(Rgb(220, 220, 220), Rgb(0, 0, 0)),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        BLANK
    }
}

/// Row-major grid of glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![BLANK; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn offset(&self, col: u16, row: u16) -> Option<usize> {
        (col < self.width && row < self.height)
            .then(|| usize::from(row) * usize::from(self.width) + usize::from(col))
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Glyph> {
        self.offset(col, row).map(|i| self.glyphs[i])
    }

    pub fn put_char(&mut self, col: u16, row: u16, ch: char, style: Style) {
        if let Some(i) = self.offset(col, row) {
            self.glyphs[i] = Glyph { ch, style };
        }
    }

    /// Left-aligned text starting at `col`, cut at the right edge
    pub fn put_str(&mut self, col: u16, row: u16, text: &str, style: Style) {
        for (ch, c) in text.chars().zip(col..self.width) {
            self.put_char(c, row, ch, style);
        }
    }

    pub fn put_centered(&mut self, row: u16, text: &str, style: Style) {
        let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        self.put_str(self.width.saturating_sub(len) / 2, row, text, style);
    }

    /// Paint `rows` whole rows starting at `top`
    pub fn fill_rows(&mut self, top: u16, rows: u16, style: Style) {
        for row in top..top.saturating_add(rows).min(self.height) {
            for col in 0..self.width {
                self.put_char(col, row, ' ', style);
            }
        }
    }

    /// Characters of one row, for assertions
    pub fn row_text(&self, row: u16) -> String {
        (0..self.width)
            .filter_map(|col| self.get(col, row))
            .map(|g| g.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_clip_at_edges() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_char(10, 10, 'x', BLANK.style);
        fb.put_str(2, 0, "abcdef", BLANK.style);
        assert_eq!(fb.row_text(0), "  ab");
        assert_eq!(fb.get(4, 0), None);
    }

    #[test]
    fn test_put_centered() {
        let mut fb = FrameBuffer::new(10, 1);
        fb.put_centered(0, "hi", BLANK.style);
        assert_eq!(fb.row_text(0), "    hi    ");
    }

    #[test]
    fn test_fill_rows_stops_at_bottom() {
        let red = Style::new(Rgb(255, 0, 0), Rgb(0, 0, 0));
        let mut fb = FrameBuffer::new(3, 3);
        fb.fill_rows(1, 10, red);
        assert_eq!(fb.get(0, 0), Some(BLANK));
        assert!((0..3).all(|c| fb.get(c, 2).map(|g| g.style) == Some(red)));
    }
}

//! Puts framebuffers on the real terminal
//!
//! Keeps the last frame shown and only rewrites glyphs that differ from it.
//! A size change clears the screen and repaints everything.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Print, ResetColor, SetAttribute},
    terminal::{self, ClearType},
};

use super::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    out: BufWriter<Stdout>,
    shown: Option<FrameBuffer>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: BufWriter::new(io::stdout()),
            shown: None,
        }
    }

    /// Raw mode on the alternate screen, cursor hidden
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.out.flush()
    }

    pub fn exit(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()
    }

    /// Terminal size in cells; 80x24 if it cannot be read
    pub fn size() -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }

    pub fn draw(&mut self, frame: FrameBuffer) -> io::Result<()> {
        let shown = self
            .shown
            .take()
            .filter(|s| s.width() == frame.width() && s.height() == frame.height());
        if shown.is_none() {
            queue!(self.out, terminal::Clear(ClearType::All))?;
        }

        let mut pen: Option<Style> = None;
        for row in 0..frame.height() {
            // Column the cursor sits at after the last print on this row
            let mut at: Option<u16> = None;
            for col in 0..frame.width() {
                let glyph = frame.get(col, row).unwrap_or_default();
                if shown.as_ref().is_some_and(|s| s.get(col, row) == Some(glyph)) {
                    continue;
                }
                if at != Some(col) {
                    queue!(self.out, cursor::MoveTo(col, row))?;
                }
                if pen != Some(glyph.style) {
                    self.set_pen(glyph.style)?;
                    pen = Some(glyph.style);
                }
                queue!(self.out, Print(glyph.ch))?;
                at = Some(col + 1);
            }
        }

        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        self.shown = Some(frame);
        Ok(())
    }

    fn set_pen(&mut self, pen: Style) -> io::Result<()> {
        let weight = if pen.bold {
            Attribute::Bold
        } else {
            Attribute::NormalIntensity
        };
        queue!(
            self.out,
            style::SetColors(style::Colors::new(color(pen.fg), color(pen.bg))),
            SetAttribute(weight)
        )
    }
}

fn color(Rgb(r, g, b): Rgb) -> style::Color {
    style::Color::Rgb { r, g, b }
}

//! Terminal rendering module
//!
//! Snapshots flow in one direction: `GameView` turns a `GameState` into a
//! `FrameBuffer`, `TerminalRenderer` puts it on screen.

pub mod fb;
pub mod game_view;
pub mod term;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use term::TerminalRenderer;

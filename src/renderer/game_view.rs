//! GameView: maps a `GameState` snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). The top row is the HUD; the rest of the
//! viewport shows the logical view scaled to fit.

use super::fb::{Style, FrameBuffer, Rgb};
use crate::sim::GameState;
use crate::tuning::Tuning;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const SKY: Style = Style::new(Rgb(120, 170, 200), Rgb(70, 150, 200));
const PIPE: Style = Style::new(Rgb(100, 170, 40), Rgb(70, 150, 200));
const ACTOR: Style = Style::new(Rgb(245, 200, 66), Rgb(70, 150, 200)).bold();
const HUD: Style = Style::new(Rgb(240, 240, 240), Rgb(20, 20, 30));
const BANNER: Style = Style::new(Rgb(255, 255, 255), Rgb(160, 30, 40)).bold();
const WIN_BANNER: Style = Style::new(Rgb(255, 255, 255), Rgb(30, 120, 50)).bold();

pub const PIPE_CHAR: char = '█';
pub const ACTOR_CHAR: char = '@';

#[derive(Debug, Default, Clone, Copy)]
pub struct GameView;

impl GameView {
    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, tuning: &Tuning, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let field_h = viewport.height.saturating_sub(1);
        if viewport.width == 0 || field_h == 0 {
            return fb;
        }

        let cols = viewport.width as f32;
        let rows = field_h as f32;
        let to_col = |x: f32| x * cols / tuning.view_width;
        let to_row = |y: f32| y * rows / tuning.view_height;

        fb.fill_rows(1, field_h, SKY);

        for obstacle in &state.obstacles {
            let (start, end) = column_span(
                to_col(obstacle.x),
                to_col(obstacle.right(tuning.pipe_width)),
                viewport.width,
            );
            for row in 0..field_h {
                // World y at the centre of this row
                let y = (row as f32 + 0.5) * tuning.view_height / rows;
                if y >= obstacle.gap_top() && y <= obstacle.gap_bottom() {
                    continue;
                }
                for col in start..end {
                    fb.put_char(col, row + 1, PIPE_CHAR, PIPE);
                }
            }
        }

        // Actor is drawn by its centre; skip it once it leaves the field
        let center_y = state.actor_center_y(tuning);
        if (0.0..tuning.view_height).contains(&center_y) {
            let col = to_col(tuning.actor_x + tuning.actor_size / 2.0) as u16;
            let row = to_row(center_y) as u16;
            fb.put_char(col, row + 1, ACTOR_CHAR, ACTOR);
        }

        self.draw_hud(&mut fb, state);

        if state.ended {
            let (text, style) = if state.won {
                (" LEVEL CLEAR! Press R to play again ", WIN_BANNER)
            } else {
                (" GAME OVER - Press R to restart ", BANNER)
            };
            fb.put_centered(1 + field_h / 2, text, style);
        }

        fb
    }

    /// Screen shown before the first key press
    pub fn render_title(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.fill_rows(0, viewport.height, SKY);
        let mid = viewport.height / 2;
        fb.put_centered(mid.saturating_sub(1), " GAP GLIDER ", HUD.bold());
        fb.put_centered(mid + 1, " Press any key to start ", HUD);
        fb.put_centered(mid + 2, " Space/Up: flap   R: restart   Q: quit ", HUD);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, state: &GameState) {
        fb.fill_rows(0, 1, HUD);
        let hearts: String = (0..state.lives).map(|_| '♥').collect();
        let line = format!(
            " SCORE {}   LIVES {}   {:.1}s",
            state.score,
            hearts,
            state.elapsed_ms as f32 / 1000.0
        );
        fb.put_str(0, 0, &line, HUD);
    }
}

/// Whole terminal columns touched by the span `[left, right)`, clipped
fn column_span(left: f32, right: f32, cols: u16) -> (u16, u16) {
    let start = left.floor().max(0.0);
    let end = right.ceil().min(cols as f32);
    if end <= start {
        return (0, 0);
    }
    (start as u16, end as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;

    fn view() -> Viewport {
        // 60 columns over 600 px, 20 field rows over 400 px
        Viewport::new(60, 21)
    }

    #[test]
    fn test_actor_and_hud() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning, 1);
        let fb = GameView.render(&state, &tuning, view());

        // Centre (130, 200) lands on column 13, field row 10
        assert_eq!(fb.get(13, 11).map(|c| c.ch), Some(ACTOR_CHAR));
        let hud = fb.row_text(0);
        assert!(hud.contains("SCORE 0"));
        assert!(hud.contains("♥♥♥"));
    }

    #[test]
    fn test_obstacle_gap_is_open() {
        let tuning = Tuning::default();
        let state = GameState {
            obstacles: vec![Obstacle {
                x: 300.0,
                gap_center: 200.0,
                gap_size: 100.0,
                scored: false,
            }],
            ..GameState::new(&tuning, 1)
        };
        let fb = GameView.render(&state, &tuning, view());

        // Above the gap
        assert_eq!(fb.get(30, 1).map(|c| c.ch), Some(PIPE_CHAR));
        assert_eq!(fb.get(34, 1).map(|c| c.ch), Some(PIPE_CHAR));
        // Inside the gap
        assert_eq!(fb.get(30, 11).map(|c| c.ch), Some(' '));
        // Below the gap
        assert_eq!(fb.get(30, 20).map(|c| c.ch), Some(PIPE_CHAR));
        // Right of the pipe
        assert_eq!(fb.get(35, 1).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn test_end_banners() {
        let tuning = Tuning::default();
        let lost = GameState {
            ended: true,
            lives: 0,
            ..GameState::new(&tuning, 1)
        };
        let fb = GameView.render(&lost, &tuning, view());
        assert!(fb.row_text(11).contains("GAME OVER"));

        let won = GameState {
            ended: true,
            won: true,
            ..GameState::new(&tuning, 1)
        };
        let fb = GameView.render(&won, &tuning, view());
        assert!(fb.row_text(11).contains("LEVEL CLEAR"));

        // Clearing the level on the tick the last life goes still counts as a win
        let won_on_last_life = GameState { lives: 0, ..won };
        let fb = GameView.render(&won_on_last_life, &tuning, view());
        assert!(fb.row_text(11).contains("LEVEL CLEAR"));
        assert!(!fb.row_text(0).contains('♥'));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let tuning = Tuning::default();
        let state = GameState::new(&tuning, 1);
        let fb = GameView.render(&state, &tuning, Viewport::new(3, 1));
        assert_eq!(fb.width(), 3);
        let fb = GameView.render(&state, &tuning, Viewport::new(0, 0));
        assert_eq!(fb.height(), 0);
    }
}

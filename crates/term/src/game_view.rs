//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The virtual pixel surface is drawn as `N x N` blocks of `cell_w x cell_h`
//! characters. Grid lines sit on the first column/row of every block after the
//! first, the same way pixel lines sit at multiples of the cell size.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::{Player, ScreenMap, Status, N};

/// Grid colour while the game is running.
pub const GRID_COLOR: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// Mark (and winning grid) colour for X.
pub const PLAYER_X_COLOR: Rgb = Rgb::new(0x20, 0x4a, 0x87);

/// Mark (and winning grid) colour for O.
pub const PLAYER_O_COLOR: Rgb = Rgb::new(0x73, 0xd2, 0x16);

/// Grid colour after a tie.
pub const TIE_COLOR: Rgb = Rgb::new(0xf5, 0x79, 0x00);

/// Smallest board cell the glyphs still fit in.
pub const MIN_CELL_CHARS: u16 = 3;

/// Largest board cell whose surface (plus footer) still fits the `u16` terminal grid.
pub const MAX_CELL_CHARS: u16 = u16::MAX / N as u16 / 2;

/// Rows below the board used for the status and hint lines.
const FOOTER_ROWS: u16 = 3;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2:1 compensates for typical terminal glyph aspect ratio.
        Self::new(12, 6)
    }
}

/// Grid colour for a game status.
pub fn grid_color(status: Status) -> Rgb {
    match status {
        Status::Running => GRID_COLOR,
        Status::PlayerXWon => PLAYER_X_COLOR,
        Status::PlayerOWon => PLAYER_O_COLOR,
        Status::Tie => TIE_COLOR,
    }
}

pub fn player_color(player: Player) -> Rgb {
    match player {
        Player::X => PLAYER_X_COLOR,
        Player::O => PLAYER_O_COLOR,
    }
}

/// One-line description of the game for the footer.
pub fn status_text(snap: &GameSnapshot) -> String {
    match snap.status {
        Status::Running => format!("{} to move", snap.current_player),
        Status::PlayerXWon => format!("{} wins - click to play again", Player::X),
        Status::PlayerOWon => format!("{} wins - click to play again", Player::O),
        Status::Tie => "Tie - click to play again".to_string(),
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(MIN_CELL_CHARS, MAX_CELL_CHARS),
            cell_h: cell_h.clamp(MIN_CELL_CHARS, MAX_CELL_CHARS),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn cell_size(&self) -> (u16, u16) {
        (self.cell_w, self.cell_h)
    }

    /// Where the surface lands in `viewport`.
    ///
    /// Input handling must use the same map so clicks hit the cells drawn.
    pub fn screen_map(&self, viewport: Viewport) -> ScreenMap {
        let surface_w = self.cell_w.saturating_mul(N as u16);
        let surface_h = self.cell_h.saturating_mul(N as u16);

        let origin_x = viewport.width.saturating_sub(surface_w) / 2;
        let origin_y = match self.anchor_y {
            AnchorY::Center => viewport
                .height
                .saturating_sub(surface_h.saturating_add(FOOTER_ROWS))
                / 2,
            AnchorY::Top => 0,
        };
        ScreenMap::new(origin_x, origin_y, surface_w, surface_h)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let map = self.screen_map(viewport);
        self.draw_grid(fb, map, grid_color(snap.status));

        for row in 0..N {
            for col in 0..N {
                let Some(player) = snap.cell(row, col).player() else {
                    continue;
                };
                let mut style = CellStyle::fg(player_color(player));
                if snap.on_winning_line(row, col) {
                    style = style.bold();
                }
                match player {
                    Player::X => self.draw_x(fb, map, row, col, style),
                    Player::O => self.draw_o(fb, map, row, col, style),
                }
            }
        }

        self.draw_footer(fb, snap, map, viewport);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, map: ScreenMap, color: Rgb) {
        let style = CellStyle::fg(color);
        let x0 = map.origin_x as i32;
        let y0 = map.origin_y as i32;

        for i in 1..N as i32 {
            let lx = x0 + i * self.cell_w as i32;
            for dy in 0..map.height as i32 {
                fb.set_signed(lx, y0 + dy, Glyph::new('│', style));
            }
            let ly = y0 + i * self.cell_h as i32;
            for dx in 0..map.width as i32 {
                fb.set_signed(x0 + dx, ly, Glyph::new('─', style));
            }
        }

        for i in 1..N as i32 {
            for j in 1..N as i32 {
                let x = x0 + i * self.cell_w as i32;
                let y = y0 + j * self.cell_h as i32;
                fb.set_signed(x, y, Glyph::new('┼', style));
            }
        }
    }

    /// Centre of board cell (row, col) plus the glyph half-extent, in terminal cells.
    fn glyph_box(&self, map: ScreenMap, row: usize, col: usize) -> (i32, i32, i32, i32) {
        let cx = map.origin_x as i32 + col as i32 * self.cell_w as i32 + self.cell_w as i32 / 2;
        let cy = map.origin_y as i32 + row as i32 * self.cell_h as i32 + self.cell_h as i32 / 2;
        let half_w = (self.cell_w as i32 / 4).max(1);
        let half_h = (self.cell_h as i32 / 4).max(1);
        (cx, cy, half_w, half_h)
    }

    fn draw_x(&self, fb: &mut FrameBuffer, map: ScreenMap, row: usize, col: usize, style: CellStyle) {
        let (cx, cy, half_w, half_h) = self.glyph_box(map, row, col);

        for s in -half_w..=half_w {
            let dy = s * half_h / half_w;
            if s == 0 {
                fb.set_signed(cx, cy, Glyph::new('╳', style));
                continue;
            }
            // Top-left to bottom-right, then top-right to bottom-left.
            fb.set_signed(cx + s, cy + dy, Glyph::new('╲', style));
            fb.set_signed(cx + s, cy - dy, Glyph::new('╱', style));
        }
    }

    fn draw_o(&self, fb: &mut FrameBuffer, map: ScreenMap, row: usize, col: usize, style: CellStyle) {
        let (cx, cy, half_w, half_h) = self.glyph_box(map, row, col);
        let (left, right) = (cx - half_w, cx + half_w);
        let (top, bottom) = (cy - half_h, cy + half_h);

        for x in left + 1..right {
            fb.set_signed(x, top, Glyph::new('─', style));
            fb.set_signed(x, bottom, Glyph::new('─', style));
        }
        for y in top + 1..bottom {
            fb.set_signed(left, y, Glyph::new('│', style));
            fb.set_signed(right, y, Glyph::new('│', style));
        }
        fb.set_signed(left, top, Glyph::new('╭', style));
        fb.set_signed(right, top, Glyph::new('╮', style));
        fb.set_signed(left, bottom, Glyph::new('╰', style));
        fb.set_signed(right, bottom, Glyph::new('╯', style));
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, map: ScreenMap, viewport: Viewport) {
        let status_y = map.origin_y.saturating_add(map.height).saturating_add(1);
        if status_y >= viewport.height {
            return;
        }

        let text = status_text(snap);
        let style = match snap.status.winner() {
            Some(winner) => CellStyle::fg(player_color(winner)).bold(),
            None => CellStyle::fg(grid_color(snap.status)).bold(),
        };
        self.put_centered(fb, map, status_y, &text, style);

        let hint_y = status_y + 1;
        if hint_y < viewport.height {
            let dim = CellStyle::fg(Rgb::new(120, 120, 120));
            self.put_centered(fb, map, hint_y, "click a cell, q to quit", dim);
        }
    }

    fn put_centered(&self, fb: &mut FrameBuffer, map: ScreenMap, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = map
            .origin_x
            .saturating_add(map.width.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn grid_color_follows_status() {
        assert_eq!(grid_color(Status::Running), GRID_COLOR);
        assert_eq!(grid_color(Status::PlayerXWon), PLAYER_X_COLOR);
        assert_eq!(grid_color(Status::PlayerOWon), PLAYER_O_COLOR);
        assert_eq!(grid_color(Status::Tie), TIE_COLOR);
    }

    #[test]
    fn cell_size_is_clamped() {
        assert_eq!(GameView::new(1, 0).cell_size(), (MIN_CELL_CHARS, MIN_CELL_CHARS));
        assert_eq!(
            GameView::new(30_000, u16::MAX).cell_size(),
            (MAX_CELL_CHARS, MAX_CELL_CHARS)
        );
    }

    #[test]
    fn huge_cells_still_map_onto_a_small_viewport() {
        let view = GameView::new(30_000, 30_000);
        let map = view.screen_map(Viewport::new(80, 24));

        assert_eq!((map.origin_x, map.origin_y), (0, 0));
        assert_eq!(map.width, MAX_CELL_CHARS * N as u16);
        assert_eq!(map.height, MAX_CELL_CHARS * N as u16);
    }

    #[test]
    fn screen_map_centres_surface_and_footer() {
        let view = GameView::default();
        // Surface 36x18 plus 3 footer rows.
        let map = view.screen_map(Viewport::new(40, 25));
        assert_eq!(map, ScreenMap::new(2, 2, 36, 18));

        let top = view.with_anchor_y(AnchorY::Top).screen_map(Viewport::new(40, 25));
        assert_eq!(top.origin_y, 0);
    }

    #[test]
    fn status_text_names_player_or_outcome() {
        let mut snap = GameState::new().snapshot();
        assert_eq!(status_text(&snap), "X to move");

        snap.status = Status::PlayerOWon;
        assert_eq!(status_text(&snap), "O wins - click to play again");

        snap.status = Status::Tie;
        assert_eq!(status_text(&snap), "Tie - click to play again");
    }

    #[test]
    fn x_glyph_is_symmetric() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(36, 18);
        let map = ScreenMap::new(0, 0, 36, 18);
        view.draw_x(&mut fb, map, 0, 0, CellStyle::default());

        // Centre (6, 3), half extent 3x1.
        assert_eq!(fb.get(6, 3).map(|g| g.ch), Some('╳'));
        assert_eq!(fb.get(3, 2).map(|g| g.ch), Some('╲'));
        assert_eq!(fb.get(9, 4).map(|g| g.ch), Some('╲'));
        assert_eq!(fb.get(9, 2).map(|g| g.ch), Some('╱'));
        assert_eq!(fb.get(3, 4).map(|g| g.ch), Some('╱'));
    }
}

//! End-to-end: terminal mouse events -> pointer tracker -> game state.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tui_tictactoe::core::{ClickOutcome, GameState};
use tui_tictactoe::input::PointerTracker;
use tui_tictactoe::term::{GameView, Viewport};
use tui_tictactoe::types::{Cell, InputSource, Player, Status, N};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

struct Harness {
    view: GameView,
    viewport: Viewport,
    pointer: PointerTracker,
    game: GameState,
}

impl Harness {
    fn new(width: u16, height: u16) -> Self {
        let view = GameView::default();
        let viewport = Viewport::new(width, height);
        let mut pointer = PointerTracker::new();
        pointer.set_screen_map(view.screen_map(viewport));
        Self {
            view,
            viewport,
            pointer,
            game: GameState::new(),
        }
    }

    /// Terminal position at the centre of board cell (row, col).
    fn cell_centre(&self, row: usize, col: usize) -> (u16, u16) {
        let map = self.view.screen_map(self.viewport);
        let (cw, ch) = self.view.cell_size();
        (
            map.origin_x + col as u16 * cw + cw / 2,
            map.origin_y + row as u16 * ch + ch / 2,
        )
    }

    /// Press and release at a terminal position, then run one tick.
    fn click_terminal(&mut self, column: u16, row: u16) -> Option<ClickOutcome> {
        self.pointer
            .handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
        self.pointer
            .handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), column, row));
        self.game.update(&mut self.pointer)
    }

    fn click_cell(&mut self, row: usize, col: usize) -> Option<ClickOutcome> {
        let (column, line) = self.cell_centre(row, col);
        self.click_terminal(column, line)
    }
}

#[test]
fn click_on_drawn_cell_marks_that_cell() {
    for row in 0..N {
        for col in 0..N {
            let mut h = Harness::new(60, 30);
            let outcome = h.click_cell(row, col);
            assert_eq!(
                outcome,
                Some(ClickOutcome::Placed {
                    row,
                    col,
                    player: Player::X,
                    status: Status::Running,
                })
            );
            assert_eq!(h.game.board().get(row, col), Some(Cell::PlayerX));
        }
    }
}

#[test]
fn click_beside_the_board_is_ignored() {
    let mut h = Harness::new(60, 30);
    let map = h.view.screen_map(h.viewport);

    assert_eq!(h.click_terminal(0, 0), Some(ClickOutcome::OutOfBounds));
    assert_eq!(
        h.click_terminal(map.origin_x + map.width, map.origin_y),
        Some(ClickOutcome::OutOfBounds)
    );
    assert_eq!(h.game.board().empty_count(), N * N);
}

#[test]
fn no_release_means_no_update() {
    let mut h = Harness::new(60, 30);
    let (column, row) = h.cell_centre(1, 1);

    h.pointer
        .handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
    h.pointer
        .handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), column, row));
    assert_eq!(h.game.update(&mut h.pointer), None);
    assert!(!h.pointer.just_released());
}

#[test]
fn full_game_through_the_mouse() {
    let mut h = Harness::new(60, 30);
    for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
        h.click_cell(row, col);
    }
    assert_eq!(h.game.status(), Status::PlayerXWon);

    // Any click, even off the board, starts a new game.
    assert_eq!(h.click_terminal(0, 0), Some(ClickOutcome::Reset));
    assert_eq!(h.game.status(), Status::Running);
    assert_eq!(h.game.current_player(), Player::X);
}

#[test]
fn move_after_release_within_a_tick_keeps_the_release_cell() {
    let mut h = Harness::new(60, 30);
    let (column, row) = h.cell_centre(0, 0);
    let (away_col, away_row) = h.cell_centre(2, 2);

    h.pointer
        .handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
    h.pointer
        .handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), column, row));
    h.pointer
        .handle_mouse(mouse(MouseEventKind::Moved, away_col, away_row));

    let outcome = h.game.update(&mut h.pointer);
    assert!(matches!(outcome, Some(ClickOutcome::Placed { row: 0, col: 0, .. })));
    assert_eq!(h.game.board().get(2, 2), Some(Cell::Empty));
}

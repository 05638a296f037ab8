//! Pointer tracker for terminal environments.
//!
//! Terminals report mouse activity as discrete events in character cells. The
//! tracker folds them into the per-tick view the core polls: the latest pointer
//! position in surface pixels and a latched "primary button released" edge.

use crossterm::event::MouseEvent;

use crate::map::is_primary_release;
use crate::types::{InputSource, PixelPos, ScreenMap};

/// Tracks pointer state between ticks.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    screen: ScreenMap,
    /// Last reported terminal position (column, row).
    last_cell: Option<(u16, u16)>,
    /// Where the primary button went up; set while a release is pending.
    released_at: Option<(u16, u16)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the terminal-to-surface mapping (call after every layout change).
    pub fn set_screen_map(&mut self, screen: ScreenMap) {
        self.screen = screen;
    }

    pub fn screen_map(&self) -> ScreenMap {
        self.screen
    }

    /// Feed one terminal mouse event.
    ///
    /// Every event moves the pointer; only a primary release latches the edge.
    /// The latched release keeps its own position until it is consumed.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let cell = (event.column, event.row);
        self.last_cell = Some(cell);
        if is_primary_release(&event) {
            self.released_at = Some(cell);
        }
    }

    /// True if a release is waiting to be consumed.
    pub fn pending_release(&self) -> bool {
        self.released_at.is_some()
    }
}

impl InputSource for PointerTracker {
    /// Consumes the edge. The release position stays readable through
    /// [`InputSource::cursor_position`] until the next mouse event.
    fn just_released(&mut self) -> bool {
        match self.released_at.take() {
            Some(cell) => {
                self.last_cell = Some(cell);
                true
            }
            None => false,
        }
    }

    /// Pointer position in surface pixels.
    ///
    /// A pending release reports where the button went up. Before any mouse
    /// event the pointer is reported off the surface.
    fn cursor_position(&self) -> PixelPos {
        match self.released_at.or(self.last_cell) {
            Some((column, row)) => self.screen.to_pixel(column, row),
            None => PixelPos::new(-1, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};

    fn event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn release_edge_is_consumed_once() {
        let mut tracker = PointerTracker::new();
        tracker.set_screen_map(ScreenMap::new(0, 0, 30, 15));

        tracker.handle_mouse(event(MouseEventKind::Down(MouseButton::Left), 2, 2));
        assert!(!tracker.just_released());

        tracker.handle_mouse(event(MouseEventKind::Up(MouseButton::Left), 2, 2));
        assert!(tracker.pending_release());
        assert!(tracker.just_released());
        assert!(!tracker.just_released());
    }

    #[test]
    fn position_follows_latest_event() {
        let mut tracker = PointerTracker::new();
        let map = ScreenMap::new(5, 1, 30, 15);
        tracker.set_screen_map(map);

        tracker.handle_mouse(event(MouseEventKind::Moved, 5, 1));
        assert_eq!(tracker.cursor_position(), map.to_pixel(5, 1));

        tracker.handle_mouse(event(MouseEventKind::Up(MouseButton::Left), 34, 15));
        assert_eq!(tracker.cursor_position(), map.to_pixel(34, 15));
    }

    #[test]
    fn release_position_survives_later_moves() {
        let mut tracker = PointerTracker::new();
        let map = ScreenMap::new(0, 0, 30, 15);
        tracker.set_screen_map(map);

        tracker.handle_mouse(event(MouseEventKind::Up(MouseButton::Left), 2, 2));
        tracker.handle_mouse(event(MouseEventKind::Moved, 25, 12));
        assert_eq!(tracker.cursor_position(), map.to_pixel(2, 2));

        assert!(tracker.just_released());
        assert_eq!(tracker.cursor_position(), map.to_pixel(2, 2));

        tracker.handle_mouse(event(MouseEventKind::Moved, 25, 12));
        assert_eq!(tracker.cursor_position(), map.to_pixel(25, 12));
    }

    #[test]
    fn right_button_never_latches() {
        let mut tracker = PointerTracker::new();
        tracker.handle_mouse(event(MouseEventKind::Up(MouseButton::Right), 1, 1));
        assert!(!tracker.just_released());
    }

    #[test]
    fn unknown_position_is_off_surface() {
        let tracker = PointerTracker::new();
        let pos = tracker.cursor_position();
        assert!(pos.x < 0 && pos.y < 0);
    }
}

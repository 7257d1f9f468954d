// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles press/move/release tracking for panning the image.

use crate::domain::geometry::Point;

/// Pointer drag in progress.
///
/// The anchor moves with every accepted move so each step yields the delta
/// since the previous pointer position.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    /// Whether a drag operation is currently active
    pub active: bool,

    /// Last pointer position seen during the drag
    pub anchor: Option<Point>,
}

impl DragSession {
    /// Starts a drag operation at the pointer position.
    pub fn start(&mut self, position: Point) {
        self.active = true;
        self.anchor = Some(position);
    }

    /// Stops the drag operation.
    pub fn stop(&mut self) {
        self.active = false;
        self.anchor = None;
    }

    /// Returns the pointer delta since the last move and advances the anchor.
    pub fn advance(&mut self, position: Point) -> Option<Point> {
        if !self.active {
            return None;
        }

        let anchor = self.anchor?;
        self.anchor = Some(position);

        Some(Point::new(position.x - anchor.x, position.y - anchor.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_session_is_inactive() {
        let session = DragSession::default();
        assert!(!session.active);
        assert!(session.anchor.is_none());
    }

    #[test]
    fn start_drag_sets_anchor() {
        let mut session = DragSession::default();
        session.start(Point::new(100.0, 50.0));

        assert!(session.active);
        assert_eq!(session.anchor, Some(Point::new(100.0, 50.0)));
    }

    #[test]
    fn stop_drag_clears_state() {
        let mut session = DragSession::default();
        session.start(Point::new(100.0, 50.0));
        session.stop();

        assert!(!session.active);
        assert!(session.anchor.is_none());
    }

    #[test]
    fn advance_returns_none_when_inactive() {
        let mut session = DragSession::default();
        assert!(session.advance(Point::new(100.0, 50.0)).is_none());
    }

    #[test]
    fn advance_yields_incremental_deltas() {
        let mut session = DragSession::default();
        session.start(Point::new(100.0, 100.0));

        assert_eq!(
            session.advance(Point::new(110.0, 105.0)),
            Some(Point::new(10.0, 5.0))
        );
        assert_eq!(
            session.advance(Point::new(130.0, 115.0)),
            Some(Point::new(20.0, 10.0))
        );
        assert_eq!(session.anchor, Some(Point::new(130.0, 115.0)));
    }
}

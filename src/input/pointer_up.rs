//! Gesture termination - pointer up, cancel, and lost capture.
//!
//! All three leave the canvas in `Idle` with capture released. Nothing is
//! left pending: every reschedule was already proposed during the moves.

use crate::input::InteractionController;
use crate::input::capture::PointerCapture;
use crate::input::events::{EventResponse, PointerId};

impl InteractionController {
    pub fn handle_pointer_up(
        &mut self,
        pointer_id: PointerId,
        capture: &mut dyn PointerCapture,
    ) -> EventResponse {
        self.end_gesture(pointer_id, capture, "pointer_up")
    }

    /// System gesture or similar interrupted the pointer.
    pub fn handle_pointer_cancel(
        &mut self,
        pointer_id: PointerId,
        capture: &mut dyn PointerCapture,
    ) -> EventResponse {
        self.end_gesture(pointer_id, capture, "pointer_cancel")
    }

    /// The platform revoked capture (window blur, focus change).
    pub fn handle_lost_capture(
        &mut self,
        pointer_id: PointerId,
        capture: &mut dyn PointerCapture,
    ) -> EventResponse {
        self.end_gesture(pointer_id, capture, "lost_capture")
    }
}

//! Pointer down handling - hit testing and gesture start.
//!
//! Hit testing is an R-tree query against the current [`BoardLayout`] in
//! content space, so no render tree is involved.

use crate::input::InteractionController;
use crate::input::capture::PointerCapture;
use crate::input::events::{EventResponse, PointerButton, PointerEvent};
use crate::layout::BoardLayout;
use crate::profile_scope;

impl InteractionController {
    pub fn handle_pointer_down(
        &mut self,
        event: &PointerEvent,
        board: &BoardLayout,
        capture: &mut dyn PointerCapture,
    ) -> EventResponse {
        profile_scope!("handle_pointer_down");

        // One gesture at a time; a second finger does not interrupt it
        if !self.state.is_idle() {
            return EventResponse::Ignored;
        }

        let hit = match event.button {
            PointerButton::Primary => {
                let content = self.transform.to_content_point(event.position);
                board.hit_test(content).map(|placed| (placed, content))
            }
            // Middle button always pans, even over an appointment
            PointerButton::Middle => None,
            PointerButton::Secondary => return EventResponse::Ignored,
        };

        match hit {
            Some((placed, content)) => {
                self.state.start_dragging(
                    event.pointer_id,
                    placed.id,
                    content - placed.rect.origin(),
                    placed.duration_minute,
                    event.position,
                );
                tracing::debug!(
                    pointer_id = event.pointer_id.0,
                    appointment_id = placed.id.0,
                    "Appointment drag started"
                );
            }
            None => {
                self.state.start_panning(
                    event.pointer_id,
                    event.position,
                    self.transform.translate(),
                );
                tracing::debug!(pointer_id = event.pointer_id.0, "Canvas pan started");
            }
        }

        capture.capture_pointer(event.pointer_id);
        EventResponse::Handled
    }
}

//! Pointer move handling - canvas panning and appointment dragging.
//!
//! ## Performance Notes
//!
//! Moves arrive at display rate during a gesture. Each one does a constant
//! amount of work: a transform update for a pan, or one snap plus at most
//! one host callback for a drag. Moves from pointers that do not own the
//! gesture exit before any work.

use crate::input::InteractionController;
use crate::input::events::{EventResponse, PointerEvent};
use crate::input::state::DragState;
use crate::layout::BoardLayout;
use crate::perf::measure;
use crate::profile_scope;
use crate::snap::snap;
use crate::types::{AppointmentId, AppointmentPatch};

impl InteractionController {
    /// Handle a move of the pointer owning the current gesture.
    ///
    /// While dragging, `on_change` is invoked whenever the snapped
    /// `(resource, start)` differs from the appointment's current values in
    /// `board`. The host decides whether to accept the change; `board` must
    /// reflect the host's data as of this event.
    pub fn handle_pointer_move<F>(
        &mut self,
        event: &PointerEvent,
        board: &BoardLayout,
        mut on_change: F,
    ) -> EventResponse
    where
        F: FnMut(AppointmentId, AppointmentPatch),
    {
        profile_scope!("handle_pointer_move");

        if !self.state.is_owned_by(event.pointer_id) {
            return EventResponse::Ignored;
        }

        let state = self.state;
        let ((), elapsed_ms) = measure(|| match state {
            DragState::Idle => {}
            DragState::PanningCanvas {
                origin_pointer,
                origin_translate,
                ..
            } => {
                let target = origin_translate + (event.position - origin_pointer);
                let current = self.transform.translate();
                self.transform.pan_by(target.x - current.x, target.y - current.y);
            }
            DragState::DraggingAppointment {
                appointment_id,
                pointer_offset_within_item,
                duration_minute,
                origin_pointer,
                has_moved,
                ..
            } => {
                if !has_moved {
                    if event.position == origin_pointer {
                        return;
                    }
                    self.state.mark_moved();
                }

                let Some(current) = board.get(appointment_id) else {
                    tracing::trace!(
                        appointment_id = appointment_id.0,
                        "Dragged appointment not on board"
                    );
                    return;
                };

                let content = self.transform.to_content_point(event.position);
                let Some(target) = snap(
                    content,
                    pointer_offset_within_item,
                    duration_minute,
                    board.metrics(),
                    board.column_count(),
                ) else {
                    return;
                };
                let Some(resource_id) = board.resource_id_at(target.resource_index) else {
                    return;
                };

                let patch = AppointmentPatch {
                    start_minute: (target.start_minute != current.start_minute)
                        .then_some(target.start_minute),
                    resource_id: (resource_id != current.resource_id).then_some(resource_id),
                };
                if !patch.is_empty() {
                    tracing::trace!(
                        appointment_id = appointment_id.0,
                        start_minute = target.start_minute,
                        resource_id = resource_id.0,
                        "Reschedule proposed"
                    );
                    on_change(appointment_id, patch);
                }
            }
        });

        if self.move_timings.record(elapsed_ms) {
            tracing::warn!(elapsed_ms, "Slow pointer move");
        }
        EventResponse::Handled
    }
}

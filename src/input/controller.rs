//! The interaction controller: owner of the transform and the drag state.

use crate::input::capture::PointerCapture;
use crate::input::events::{EventResponse, PointerId};
use crate::input::state::DragState;
use crate::perf::InputTimings;
use crate::settings::{CanvasSettings, WheelSettings};
use crate::transform::{Transform, TransformModel};
use crate::types::Point;

/// Drives [`TransformModel`] and [`DragState`] from pointer and wheel input.
///
/// The controller is the only writer of both. It never touches the host's
/// appointment list; reschedule intents leave through the change callback
/// passed to [`handle_pointer_move`](Self::handle_pointer_move).
pub struct InteractionController {
    pub(super) transform: TransformModel,
    pub(super) state: DragState,
    pub(super) wheel: WheelSettings,
    pub(super) move_timings: InputTimings,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&CanvasSettings::default())
    }
}

impl InteractionController {
    pub fn new(settings: &CanvasSettings) -> Self {
        Self {
            transform: TransformModel::new(settings.home_translate),
            state: DragState::Idle,
            wheel: settings.wheel,
            move_timings: InputTimings::default(),
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn transform(&self) -> Transform {
        self.transform.current()
    }

    pub fn transform_model(&self) -> &TransformModel {
        &self.transform
    }

    /// Timing of pointer moves that did gesture work.
    pub fn move_timings(&self) -> &InputTimings {
        &self.move_timings
    }

    /// Toolbar/keyboard zoom in, anchored at a client point.
    pub fn zoom_in(&mut self, anchor: Point) -> Transform {
        self.replace_transform(|model| model.zoom_in(anchor))
    }

    pub fn zoom_out(&mut self, anchor: Point) -> Transform {
        self.replace_transform(|model| model.zoom_out(anchor))
    }

    /// Back to the home transform. A gesture in progress keeps running from
    /// the new transform.
    pub fn reset_transform(&mut self) -> Transform {
        self.replace_transform(TransformModel::reset)
    }

    /// Apply a transform command issued outside the pointer stream. An
    /// active pan is re-based so its next move does not undo the command.
    fn replace_transform<F>(&mut self, apply: F) -> Transform
    where
        F: FnOnce(&mut TransformModel) -> Transform,
    {
        let before = self.transform.translate();
        let next = apply(&mut self.transform);
        self.state.shift_pan_origin(next.translate - before);
        next
    }

    /// Leave the active gesture owned by `pointer_id`, releasing capture.
    pub(super) fn end_gesture(
        &mut self,
        pointer_id: PointerId,
        capture: &mut dyn PointerCapture,
        reason: &'static str,
    ) -> EventResponse {
        if !self.state.is_owned_by(pointer_id) {
            return EventResponse::Ignored;
        }

        tracing::debug!(
            pointer_id = pointer_id.0,
            appointment_id = self.state.dragged_appointment().map(|id| id.0),
            reason,
            "Gesture ended"
        );
        self.state.reset();
        capture.release_pointer(pointer_id);
        EventResponse::Handled
    }
}

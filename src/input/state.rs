//! Drag state machine - the single source of truth for the active gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> PanningCanvas           (pointer down on empty canvas)
//! Idle -> DraggingAppointment     (pointer down on an appointment)
//!
//! Any -> Idle                     (pointer up / cancel / lost capture,
//!                                  same pointer id)
//! ```
//!
//! Every non-Idle state records the pointer that started it; events from any
//! other pointer are ignored.

use crate::input::events::PointerId;
use crate::types::{AppointmentId, Point};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No active gesture
    #[default]
    Idle,

    /// Panning the whole canvas
    PanningCanvas {
        pointer_id: PointerId,
        /// Client position where the pan started
        origin_pointer: Point,
        /// Transform translate when the pan started
        origin_translate: Point,
    },

    /// Moving one appointment to a new slot and/or resource column
    DraggingAppointment {
        pointer_id: PointerId,
        appointment_id: AppointmentId,
        /// Content-space offset from the appointment's top-left to the pointer
        pointer_offset_within_item: Point,
        /// Fixed for the whole drag; only start and resource change
        duration_minute: i32,
        /// Client position where the drag started
        origin_pointer: Point,
        /// Set once the pointer has left its origin
        has_moved: bool,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::PanningCanvas { .. })
    }

    pub fn is_dragging_appointment(&self) -> bool {
        matches!(self, Self::DraggingAppointment { .. })
    }

    /// Pointer that owns the active gesture, if any
    pub fn pointer_id(&self) -> Option<PointerId> {
        match self {
            Self::Idle => None,
            Self::PanningCanvas { pointer_id, .. }
            | Self::DraggingAppointment { pointer_id, .. } => Some(*pointer_id),
        }
    }

    /// True when a gesture is active and owned by `pointer_id`
    pub fn is_owned_by(&self, pointer_id: PointerId) -> bool {
        self.pointer_id() == Some(pointer_id)
    }

    pub fn dragged_appointment(&self) -> Option<AppointmentId> {
        match self {
            Self::DraggingAppointment { appointment_id, .. } => Some(*appointment_id),
            _ => None,
        }
    }

    pub fn start_panning(&mut self, pointer_id: PointerId, origin_pointer: Point, origin_translate: Point) {
        *self = Self::PanningCanvas {
            pointer_id,
            origin_pointer,
            origin_translate,
        };
    }

    pub fn start_dragging(
        &mut self,
        pointer_id: PointerId,
        appointment_id: AppointmentId,
        pointer_offset_within_item: Point,
        duration_minute: i32,
        origin_pointer: Point,
    ) {
        *self = Self::DraggingAppointment {
            pointer_id,
            appointment_id,
            pointer_offset_within_item,
            duration_minute,
            origin_pointer,
            has_moved: false,
        };
    }

    pub fn mark_moved(&mut self) {
        if let Self::DraggingAppointment { has_moved, .. } = self {
            *has_moved = true;
        }
    }

    /// Move a pan's origin translate by `delta`, so a pan continues from a
    /// transform that was replaced mid-gesture.
    pub fn shift_pan_origin(&mut self, delta: Point) {
        if let Self::PanningCanvas {
            origin_translate, ..
        } = self
        {
            *origin_translate = *origin_translate + delta;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

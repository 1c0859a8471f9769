//! Pointer and wheel input handling for the scheduling canvas.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine ([`DragState`]) owned by
//! the [`InteractionController`]. The host forwards platform events; the
//! controller classifies each gesture as a canvas pan, an appointment drag,
//! or a zoom, and drives the transform and snapping code accordingly.
//!
//! ## Modules
//!
//! - `state` - Drag state enum and helper methods
//! - `events` - Platform-neutral pointer/wheel events and responses
//! - `capture` - Pointer capture capability implemented by the host
//! - `controller` - Controller state and shared gesture bookkeeping
//! - `pointer_down` - Hit testing and gesture start
//! - `pointer_move` - Panning and snapped appointment dragging
//! - `pointer_up` - Gesture end on up, cancel, or lost capture
//! - `wheel` - Modifier zoom

mod capture;
mod controller;
mod events;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;
mod wheel;

pub use capture::{NoopCapture, PointerCapture};
pub use controller::InteractionController;
pub use events::{
    EventResponse, Modifiers, PointerButton, PointerEvent, PointerId, WheelDelta, WheelEvent,
    WheelResponse,
};
pub use state::DragState;

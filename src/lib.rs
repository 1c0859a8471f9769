//! Headless engine for an interactive scheduling board.
//!
//! Appointments bound to resources (doctors, rooms, trainers) are laid out in
//! resource columns over a time axis. The board can be panned and zoomed, and
//! appointments can be dragged to a new slot and/or column.
//!
//! - [`transform`] - pan/zoom model and client/content mapping
//! - [`snap`] - quantizing drag positions to (resource, start minute)
//! - [`layout`] - appointment rectangles, hit testing and culling
//! - [`input`] - the pointer/wheel state machine
//! - [`settings`] - slot metrics and other persisted configuration
//!
//! The host owns the resource and appointment lists. It builds a
//! [`BoardLayout`] per render, forwards events to the
//! [`InteractionController`], and receives reschedule intents through a
//! callback; the engine never writes to host data.

pub mod constants;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod perf;
pub mod settings;
pub mod settings_watcher;
pub mod snap;
pub mod spatial_index;
pub mod transform;
pub mod types;

pub use error::{CanvasError, CanvasResult};
pub use input::{DragState, InteractionController, PointerCapture};
pub use layout::{BoardLayout, PlacedAppointment, layout_appointment};
pub use settings::{CanvasSettings, LayoutStyle, SlotMetrics};
pub use snap::{SnapTarget, snap};
pub use transform::{Transform, TransformModel};
pub use types::{
    Appointment, AppointmentId, AppointmentPatch, AppointmentStatus, Point, Rect, Resource,
    ResourceId, Size, point,
};

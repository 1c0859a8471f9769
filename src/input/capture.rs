//! Pointer capture capability.
//!
//! While a pan or drag is active the controller needs every move/up event
//! of that pointer, even outside the canvas bounds. How that is arranged is
//! up to the UI toolkit, so it sits behind this trait.

use crate::input::events::PointerId;

pub trait PointerCapture {
    /// Route all further events of `pointer_id` to the canvas.
    fn capture_pointer(&mut self, pointer_id: PointerId);

    /// Stop routing. Must tolerate pointers that are no longer captured.
    fn release_pointer(&mut self, pointer_id: PointerId);
}

/// For hosts that deliver all pointer events to the canvas anyway.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCapture;

impl PointerCapture for NoopCapture {
    fn capture_pointer(&mut self, _pointer_id: PointerId) {}

    fn release_pointer(&mut self, _pointer_id: PointerId) {}
}

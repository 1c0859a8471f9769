//! Platform-neutral input events delivered by the render surface.

use crate::transform::Transform;
use crate::types::{Point, point};

/// Identifier of one pointer (mouse, finger, pen) for the life of a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button, touch contact or pen tip
    #[default]
    Primary,
    Middle,
    Secondary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    /// Command on macOS, Windows key elsewhere
    pub platform: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn control() -> Self {
        Self {
            control: true,
            ..Self::default()
        }
    }

    pub fn platform() -> Self {
        Self {
            platform: true,
            ..Self::default()
        }
    }

    /// Control or Command turns the wheel into zoom
    pub fn is_zoom(&self) -> bool {
        self.control || self.platform
    }
}

/// Pointer down/move/up, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(pointer_id: u32, x: f32, y: f32) -> Self {
        Self {
            pointer_id: PointerId(pointer_id),
            position: point(x, y),
            button: PointerButton::Primary,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDelta {
    /// Precise deltas (trackpads)
    Pixels(Point),
    /// Line-based deltas (notched wheels)
    Lines(Point),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    pub position: Point,
    pub delta: WheelDelta,
    pub modifiers: Modifiers,
}

/// Outcome of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResponse {
    /// The canvas consumed the event
    Handled,
    /// Not for the canvas (foreign pointer, no gesture); let it propagate
    Ignored,
}

/// Outcome of a wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelResponse {
    /// Consumed as zoom; carries the resulting transform
    Zoomed(Transform),
    /// Not a zoom; the host should scroll as usual
    Propagate,
}

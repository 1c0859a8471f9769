//! Wheel handling - modifier zoom, everything else scrolls through.

use crate::constants::MIN_SCALE_DELTA;
use crate::input::InteractionController;
use crate::input::events::{WheelDelta, WheelEvent, WheelResponse};

impl InteractionController {
    pub fn handle_wheel(&mut self, event: &WheelEvent) -> WheelResponse {
        // Zoom with Command (platform) or Control key, and only between gestures
        if !self.state.is_idle() || !event.modifiers.is_zoom() {
            return WheelResponse::Propagate;
        }

        let scale_delta = match event.delta {
            WheelDelta::Pixels(delta) => -delta.y / self.wheel.pixel_divisor,
            WheelDelta::Lines(delta) => -delta.y / self.wheel.line_divisor,
        };

        if scale_delta.abs() <= MIN_SCALE_DELTA || !scale_delta.is_finite() {
            return WheelResponse::Zoomed(self.transform.current());
        }

        WheelResponse::Zoomed(self.transform.zoom_at(event.position, scale_delta))
    }
}

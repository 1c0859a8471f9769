//! Pan/zoom transform of the canvas content layer.
//!
//! Content space is the board before pan/zoom; client space is what the
//! pointer reports. The mapping is
//!
//! ```text
//! client  = content * scale + translate
//! content = (client - translate) / scale
//! ```
//!
//! Zoom/pan is applied once to the whole content layer, so layout and
//! snapping work purely in content space.

use crate::constants::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, ZOOM_STEP};
use crate::types::{Point, Rect, Size, point};
use serde::{Deserialize, Serialize};

/// Current scale and translate of the content layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub scale: f32,
    pub translate: Point,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            translate: Point::ZERO,
        }
    }
}

impl Transform {
    #[inline]
    pub fn to_content_point(&self, client: Point) -> Point {
        (client - self.translate).scale(1.0 / self.scale)
    }

    #[inline]
    pub fn to_client_point(&self, content: Point) -> Point {
        content.scale(self.scale) + self.translate
    }

    pub fn panned_by(&self, dx: f32, dy: f32) -> Transform {
        Transform {
            scale: self.scale,
            translate: self.translate + point(dx, dy),
        }
    }

    /// Rescale by `1 + scale_delta` (clamped), keeping the content point
    /// under `anchor` at the same client position.
    pub fn zoomed_at(&self, anchor: Point, scale_delta: f32) -> Transform {
        let next_scale = clamp_scale(self.scale * (1.0 + scale_delta));
        let content_anchor = self.to_content_point(anchor);
        Transform {
            scale: next_scale,
            translate: anchor - content_anchor.scale(next_scale),
        }
    }

    /// Content-space rectangle visible through a viewport of `size` whose
    /// top-left is the client origin.
    pub fn visible_content_rect(&self, size: Size) -> Rect {
        let top_left = self.to_content_point(Point::ZERO);
        Rect::new(
            top_left.x,
            top_left.y,
            size.width / self.scale,
            size.height / self.scale,
        )
    }
}

/// Clamp to the allowed zoom range. NaN falls back to the default scale.
#[inline]
pub fn clamp_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        return DEFAULT_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Owner of the canvas transform. Every operation replaces the whole
/// transform at once, so no partially updated state is observable.
#[derive(Clone, Debug)]
pub struct TransformModel {
    current: Transform,
    home: Transform,
}

impl Default for TransformModel {
    fn default() -> Self {
        Self::new(Point::ZERO)
    }
}

impl TransformModel {
    /// Start at scale 1 with `home_translate`, which is also what
    /// [`reset`](Self::reset) restores.
    pub fn new(home_translate: Point) -> Self {
        let home = Transform {
            scale: DEFAULT_SCALE,
            translate: home_translate,
        };
        Self { current: home, home }
    }

    pub fn current(&self) -> Transform {
        self.current
    }

    pub fn scale(&self) -> f32 {
        self.current.scale
    }

    pub fn translate(&self) -> Point {
        self.current.translate
    }

    /// Translation is unbounded: the board is a free canvas.
    pub fn pan_by(&mut self, dx: f32, dy: f32) -> Transform {
        self.current = self.current.panned_by(dx, dy);
        self.current
    }

    pub fn zoom_at(&mut self, anchor: Point, scale_delta: f32) -> Transform {
        self.current = self.current.zoomed_at(anchor, scale_delta);
        tracing::trace!(scale = self.current.scale, "Zoomed canvas");
        self.current
    }

    pub fn zoom_in(&mut self, anchor: Point) -> Transform {
        self.zoom_at(anchor, ZOOM_STEP)
    }

    pub fn zoom_out(&mut self, anchor: Point) -> Transform {
        self.zoom_at(anchor, -ZOOM_STEP)
    }

    pub fn reset(&mut self) -> Transform {
        self.current = self.home;
        self.current
    }

    #[inline]
    pub fn to_content_point(&self, client: Point) -> Point {
        self.current.to_content_point(client)
    }

    #[inline]
    pub fn to_client_point(&self, content: Point) -> Point {
        self.current.to_client_point(content)
    }
}

//! Core types for the scheduling canvas.
//!
//! This module defines the geometry primitives shared by the transform,
//! snapping and layout code, and the resource/appointment records the host
//! hands to the canvas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

// ============================================================================
// Geometry
// ============================================================================

/// A 2D point in either client (screen) or content space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Shorthand constructor for [`Point`].
#[inline]
pub const fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

impl Point {
    pub const ZERO: Point = point(0.0, 0.0);

    #[inline]
    pub fn scale(self, factor: f32) -> Point {
        point(self.x * factor, self.y * factor)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width/height pair, used for viewport sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Axis-aligned rectangle in content space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn origin(&self) -> Point {
        point(self.x, self.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Edges are inclusive, matching the spatial index envelope test.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Host-assigned identifier of a schedulable resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u64);

/// Host-assigned identifier of an appointment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(pub u64);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resource:{}", self.0)
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "appointment:{}", self.0)
    }
}

// ============================================================================
// Schedule Records
// ============================================================================

/// A schedulable resource (doctor, room, trainer). Its column index is its
/// position in the resource slice handed to the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub display_name: String,
    /// Free-form color token resolved by the render surface
    pub color_tag: String,
}

impl Resource {
    pub fn new(id: u64, display_name: impl Into<String>, color_tag: impl Into<String>) -> Self {
        Self {
            id: ResourceId(id),
            display_name: display_name.into(),
            color_tag: color_tag.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    CheckedIn,
    Completed,
    Cancelled,
    NoShow,
}

/// A time-boxed booking bound to one resource.
///
/// Minutes are counted from the same reference as
/// [`SlotMetrics::day_start_minute`](crate::settings::SlotMetrics).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub resource_id: ResourceId,
    pub start_minute: i32,
    pub duration_minute: i32,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub label: String,
}

impl Appointment {
    pub fn new(id: u64, resource_id: u64, start_minute: i32, duration_minute: i32) -> Self {
        Self {
            id: AppointmentId(id),
            resource_id: ResourceId(resource_id),
            start_minute,
            duration_minute,
            status: AppointmentStatus::default(),
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn end_minute(&self) -> i32 {
        self.start_minute.saturating_add(self.duration_minute)
    }
}

/// Reschedule intent sent to the host. Only changed fields are set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_minute: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<ResourceId>,
}

impl AppointmentPatch {
    pub fn is_empty(&self) -> bool {
        self.start_minute.is_none() && self.resource_id.is_none()
    }

    /// Applies the patch to an appointment. Hosts that accept a change
    /// without further validation can use this directly.
    pub fn apply_to(&self, appointment: &mut Appointment) {
        if let Some(start) = self.start_minute {
            appointment.start_minute = start;
        }
        if let Some(resource_id) = self.resource_id {
            appointment.resource_id = resource_id;
        }
    }
}

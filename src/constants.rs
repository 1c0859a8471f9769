//! Canvas-wide constants.
//!
//! Centralizes magic numbers and layout values so the transform, snapping
//! and layout code share one source of truth.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_SCALE: f32 = 0.65;

/// Maximum zoom level
pub const MAX_SCALE: f32 = 1.8;

/// Default zoom level
pub const DEFAULT_SCALE: f32 = 1.0;

/// Zoom step for toolbar/keyboard zoom
pub const ZOOM_STEP: f32 = 0.1;

/// Wheel pixel delta that corresponds to a scale delta of 1.0
pub const WHEEL_PIXEL_DIVISOR: f32 = 500.0;

/// Wheel line delta that corresponds to a scale delta of 1.0
pub const WHEEL_LINE_DIVISOR: f32 = 50.0;

/// Scale deltas smaller than this are treated as no zoom at all
pub const MIN_SCALE_DELTA: f32 = 0.001;

// ============================================================================
// Slot Metrics Defaults
// ============================================================================

/// Snap granularity in minutes
pub const DEFAULT_SLOT_INTERVAL_MINUTES: i32 = 15;

/// Height of one slot in content pixels
pub const DEFAULT_PIXELS_PER_SLOT: f32 = 48.0;

/// Width of one resource column in content pixels
pub const DEFAULT_COLUMN_WIDTH_PIXELS: f32 = 260.0;

/// First bookable minute of the day (08:00)
pub const DEFAULT_DAY_START_MINUTE: i32 = 8 * 60;

/// End of the bookable day (20:00)
pub const DEFAULT_DAY_END_MINUTE: i32 = 20 * 60;

/// Longest bookable day a board accepts (one week)
pub const MAX_DAY_LENGTH_MINUTES: i32 = 7 * 24 * 60;

// ============================================================================
// Appointment Layout
// ============================================================================

/// Gap left between neighbouring appointment boxes
pub const DEFAULT_GAP_PIXELS: f32 = 4.0;

/// Short appointments are never drawn smaller than this
pub const DEFAULT_MINIMUM_HEIGHT_PIXELS: f32 = 20.0;

// ============================================================================
// Performance
// ============================================================================

/// Threshold above which a single input handler is reported as slow
pub const SLOW_INPUT_MS: f64 = 4.0;

/// Threshold above which a full board layout pass is reported as slow
pub const SLOW_LAYOUT_MS: f64 = 8.0;

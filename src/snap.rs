//! Snapping of free-form drag positions to (resource column, start minute).

use crate::settings::SlotMetrics;
use crate::types::Point;

/// A valid drop position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapTarget {
    pub resource_index: usize,
    pub start_minute: i32,
}

/// Quantize a content-space pointer position into a drop target.
///
/// `pointer_offset` is the pointer's offset from the dragged item's top-left
/// corner, so the item's own origin is what gets snapped. The start minute
/// is rounded half-up to the nearest slot and clamped so the whole
/// appointment stays within the day. Every input yields an in-range target;
/// the only `None` is a board without columns.
pub fn snap(
    content_point: Point,
    pointer_offset: Point,
    duration_minute: i32,
    metrics: &SlotMetrics,
    resource_count: usize,
) -> Option<SnapTarget> {
    if resource_count == 0 {
        return None;
    }

    let raw = content_point - pointer_offset;

    // `as` saturates and maps NaN to 0, which keeps this total
    let column = (raw.x / metrics.column_width_pixels).floor() as i64;
    let last_column = resource_count.saturating_sub(1).min(i64::MAX as usize) as i64;
    let resource_index = column.clamp(0, last_column) as usize;

    let slot = (raw.y / metrics.pixels_per_slot + 0.5).floor() as i64;
    let raw_minute = slot
        .saturating_mul(i64::from(metrics.slot_interval_minutes))
        .saturating_add(i64::from(metrics.day_start_minute));

    let earliest = i64::from(metrics.day_start_minute);
    let latest = (i64::from(metrics.day_end_minute) - i64::from(duration_minute)).max(earliest);
    let start_minute = raw_minute.clamp(earliest, latest) as i32;

    Some(SnapTarget {
        resource_index,
        start_minute,
    })
}

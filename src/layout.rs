//! Appointment layout: content-space rectangles for each appointment.
//!
//! Layout is independent of pan/zoom. The render surface applies the
//! transform once to the whole content layer.
//!
//! Overlapping appointments on the same resource are not split into
//! side-by-side columns. They share the column's horizontal extent and stack
//! in paint order, the last one drawn being topmost.

use crate::constants::SLOW_LAYOUT_MS;
use crate::perf::ScopedTimer;
use crate::profile_scope;
use crate::settings::{LayoutStyle, SlotMetrics};
use crate::spatial_index::SpatialIndex;
use crate::types::{Appointment, AppointmentId, Point, Rect, Resource, ResourceId, Size};
use std::collections::HashMap;

/// Content-space rectangle of one appointment in its resource column.
pub fn layout_appointment(
    appointment: &Appointment,
    column_index: usize,
    metrics: &SlotMetrics,
    style: &LayoutStyle,
) -> Rect {
    let top = metrics.minute_to_y(appointment.start_minute);
    let duration = i64::from(appointment.duration_minute);
    let height =
        (metrics.minutes_to_pixels(duration) - style.gap_pixels).max(style.minimum_height_pixels);
    let left = column_index as f32 * metrics.column_width_pixels;
    let width = metrics.column_width_pixels - style.gap_pixels;
    Rect::new(left, top, width, height)
}

/// One appointment as placed on the board for the current render.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedAppointment {
    pub id: AppointmentId,
    pub resource_id: ResourceId,
    pub column_index: usize,
    pub start_minute: i32,
    pub duration_minute: i32,
    pub rect: Rect,
}

/// Read-side model of the board for one render: every placed appointment
/// in paint order, the resource column order, and a spatial index for hit
/// testing. Rebuilt by the host whenever its resource or appointment lists
/// change; it is derived data and never written back.
pub struct BoardLayout {
    metrics: SlotMetrics,
    resource_ids: Vec<ResourceId>,
    columns: HashMap<ResourceId, usize>,
    placed: Vec<PlacedAppointment>,
    by_id: HashMap<AppointmentId, usize>,
    unplaced: Vec<AppointmentId>,
    index: SpatialIndex,
}

impl BoardLayout {
    pub fn compute(
        resources: &[Resource],
        appointments: &[Appointment],
        metrics: &SlotMetrics,
        style: &LayoutStyle,
    ) -> Self {
        let _timer = ScopedTimer::new("board_layout", SLOW_LAYOUT_MS);

        let resource_ids: Vec<ResourceId> = resources.iter().map(|r| r.id).collect();
        let mut columns = HashMap::with_capacity(resource_ids.len());
        for (column, id) in resource_ids.iter().enumerate() {
            // First occurrence wins if the host repeats a resource
            columns.entry(*id).or_insert(column);
        }

        let mut placed = Vec::with_capacity(appointments.len());
        let mut unplaced = Vec::new();
        for appointment in appointments {
            let Some(&column_index) = columns.get(&appointment.resource_id) else {
                tracing::debug!(
                    appointment_id = appointment.id.0,
                    resource_id = appointment.resource_id.0,
                    "Appointment references unknown resource, not rendered"
                );
                unplaced.push(appointment.id);
                continue;
            };
            placed.push(PlacedAppointment {
                id: appointment.id,
                resource_id: appointment.resource_id,
                column_index,
                start_minute: appointment.start_minute,
                duration_minute: appointment.duration_minute,
                rect: layout_appointment(appointment, column_index, metrics, style),
            });
        }

        let by_id = placed
            .iter()
            .enumerate()
            .map(|(order, p)| (p.id, order))
            .collect();
        let index = SpatialIndex::from_rects(placed.iter().map(|p| &p.rect));

        tracing::trace!(
            placed = placed.len(),
            unplaced = unplaced.len(),
            columns = resource_ids.len(),
            "Board layout"
        );

        Self {
            metrics: *metrics,
            resource_ids,
            columns,
            placed,
            by_id,
            unplaced,
            index,
        }
    }

    pub fn metrics(&self) -> &SlotMetrics {
        &self.metrics
    }

    /// Placed appointments in paint order.
    pub fn placed(&self) -> &[PlacedAppointment] {
        &self.placed
    }

    /// Appointments whose resource is not on the board.
    pub fn unplaced(&self) -> &[AppointmentId] {
        &self.unplaced
    }

    pub fn get(&self, id: AppointmentId) -> Option<&PlacedAppointment> {
        self.by_id.get(&id).and_then(|&order| self.placed.get(order))
    }

    pub fn column_count(&self) -> usize {
        self.resource_ids.len()
    }

    pub fn column_index(&self, resource_id: ResourceId) -> Option<usize> {
        self.columns.get(&resource_id).copied()
    }

    pub fn resource_id_at(&self, column_index: usize) -> Option<ResourceId> {
        self.resource_ids.get(column_index).copied()
    }

    /// Content-space extent of the grid: all columns by the whole day.
    pub fn content_size(&self) -> Size {
        Size {
            width: self.column_count() as f32 * self.metrics.column_width_pixels,
            height: self.metrics.day_height_pixels(),
        }
    }

    /// Topmost appointment under a content-space point.
    pub fn hit_test(&self, content_point: Point) -> Option<&PlacedAppointment> {
        profile_scope!("hit_test_appointments");
        self.index
            .topmost_at(content_point)
            .and_then(|order| self.placed.get(order))
    }

    /// Appointments intersecting a content-space rectangle, in paint order.
    pub fn visible_in(&self, content_rect: &Rect) -> Vec<&PlacedAppointment> {
        self.index
            .query_rect(content_rect)
            .into_iter()
            .filter_map(|order| self.placed.get(order))
            .collect()
    }
}

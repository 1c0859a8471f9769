//! Unit tests for appointment layout and board queries.

use slotboard::{
    Appointment, AppointmentId, BoardLayout, LayoutStyle, Rect, Resource, Size, SlotMetrics,
    Transform, layout_appointment, point,
};

fn doctors(count: u64) -> Vec<Resource> {
    (1..=count)
        .map(|id| Resource::new(id, format!("Doctor {id}"), "slate"))
        .collect()
}

#[test]
fn test_rect_formula_with_custom_style() {
    let metrics = SlotMetrics::default();
    let style = LayoutStyle {
        gap_pixels: 0.0,
        minimum_height_pixels: 10.0,
    };
    let rect = layout_appointment(&Appointment::new(1, 1, 540, 45), 2, &metrics, &style);
    assert_eq!(rect, Rect::new(520.0, 192.0, 260.0, 144.0));
}

#[test]
fn test_paint_order_follows_input_order() {
    let appointments = vec![
        Appointment::new(10, 1, 480, 30),
        Appointment::new(11, 2, 480, 30),
        Appointment::new(12, 1, 480, 30),
    ];
    let layout = BoardLayout::compute(
        &doctors(2),
        &appointments,
        &SlotMetrics::default(),
        &LayoutStyle::default(),
    );
    let ids: Vec<u64> = layout.placed().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![10, 11, 12]);
    assert_eq!(layout.hit_test(point(5.0, 5.0)).map(|p| p.id), Some(AppointmentId(12)));
    assert_eq!(layout.hit_test(point(265.0, 5.0)).map(|p| p.id), Some(AppointmentId(11)));
}

#[test]
fn test_hit_test_misses_gap_and_empty_space() {
    let layout = BoardLayout::compute(
        &doctors(2),
        &[Appointment::new(1, 1, 480, 30)],
        &SlotMetrics::default(),
        &LayoutStyle::default(),
    );
    // Inside the 4px gap at the right edge of the column
    assert!(layout.hit_test(point(258.0, 10.0)).is_none());
    assert!(layout.hit_test(point(10.0, 500.0)).is_none());
    assert!(layout.hit_test(point(10.0, 10.0)).is_some());
}

#[test]
fn test_unknown_resource_never_hits() {
    let layout = BoardLayout::compute(
        &doctors(1),
        &[Appointment::new(1, 7, 480, 30)],
        &SlotMetrics::default(),
        &LayoutStyle::default(),
    );
    assert!(layout.placed().is_empty());
    assert_eq!(layout.unplaced(), &[AppointmentId(1)]);
    assert!(layout.hit_test(point(10.0, 10.0)).is_none());
}

#[test]
fn test_culling_against_visible_rect() {
    let appointments = vec![
        Appointment::new(1, 1, 480, 30),
        Appointment::new(2, 1, 1080, 60),
        Appointment::new(3, 3, 660, 30),
    ];
    let layout = BoardLayout::compute(
        &doctors(3),
        &appointments,
        &SlotMetrics::default(),
        &LayoutStyle::default(),
    );

    // 600x400 viewport at scale 1 showing the top-left of the board
    let view = Transform::default().visible_content_rect(Size {
        width: 600.0,
        height: 400.0,
    });
    let visible: Vec<u64> = layout.visible_in(&view).iter().map(|p| p.id.0).collect();
    assert_eq!(visible, vec![1]);

    let everything = Rect::new(0.0, 0.0, 10_000.0, 10_000.0);
    assert_eq!(layout.visible_in(&everything).len(), 3);
}

#[test]
fn test_empty_board() {
    let layout = BoardLayout::compute(&[], &[], &SlotMetrics::default(), &LayoutStyle::default());
    assert_eq!(layout.column_count(), 0);
    assert_eq!(layout.content_size().width, 0.0);
    assert!(layout.hit_test(point(0.0, 0.0)).is_none());
}

#[test]
fn test_week_long_board_lays_out_far_minutes() {
    // Sunday 00:00 to Saturday 24:00, in minutes from a distant epoch
    let start = 1_000_000_000;
    let metrics = SlotMetrics::new(15, 48.0, 260.0, start, start + 7 * 24 * 60).unwrap();
    let layout = BoardLayout::compute(
        &doctors(1),
        &[Appointment::new(1, 1, start + 24 * 60, 30)],
        &metrics,
        &LayoutStyle::default(),
    );
    assert_eq!(layout.content_size().height, 7.0 * 96.0 * 48.0);
    let rect = layout.get(AppointmentId(1)).unwrap().rect;
    assert_eq!(rect.y, 96.0 * 48.0);
}

#[test]
fn test_appointment_far_outside_the_day_does_not_overflow() {
    let metrics = SlotMetrics::default();
    let style = LayoutStyle::default();
    for start in [i32::MIN, i32::MAX] {
        let rect = layout_appointment(&Appointment::new(1, 1, start, 30), 0, &metrics, &style);
        assert!(rect.y.is_finite());
    }
}

//! Pointer ownership and capture lifecycle.

use crate::helpers::{CaptureCall, TestHost};
use slotboard::input::{
    EventResponse, InteractionController, NoopCapture, PointerButton, PointerEvent, PointerId,
};
use slotboard::{Appointment, AppointmentId};

fn host_with_checkup() -> TestHost {
    TestHost::new().with_appointment(Appointment::new(1, 1, 480, 30))
}

#[test]
fn test_capture_on_down_release_on_up() {
    let mut host = host_with_checkup();
    host.down(7, 10.0, 10.0);
    assert_eq!(host.capture.held, vec![PointerId(7)]);

    assert_eq!(host.up(7), EventResponse::Handled);
    assert_eq!(
        host.capture.calls,
        vec![
            CaptureCall::Capture(PointerId(7)),
            CaptureCall::Release(PointerId(7))
        ]
    );
    assert!(host.capture.held.is_empty());
}

#[test]
fn test_cancel_ends_drag_without_change() {
    let mut host = host_with_checkup();
    host.down(1, 10.0, 10.0);
    assert_eq!(host.cancel(1), EventResponse::Handled);

    assert!(host.controller.state().is_idle());
    assert!(host.capture.held.is_empty());
    assert!(host.changes.is_empty());
}

#[test]
fn test_lost_capture_ends_pan() {
    let mut host = TestHost::new();
    host.down(1, 500.0, 500.0);
    host.move_to(1, 520.0, 500.0);
    assert_eq!(host.lose_capture(1), EventResponse::Handled);

    assert!(host.controller.state().is_idle());
    assert!(host.capture.held.is_empty());
    // The pan already applied stays
    assert_eq!(host.controller.transform().translate.x, 20.0);
}

#[test]
fn test_foreign_pointer_is_ignored() {
    let mut host = host_with_checkup();
    host.down(1, 10.0, 10.0);

    assert_eq!(host.move_to(2, 10.0, 300.0), EventResponse::Ignored);
    assert_eq!(host.up(2), EventResponse::Ignored);
    assert_eq!(host.cancel(2), EventResponse::Ignored);
    assert!(host.changes.is_empty());
    assert!(host.controller.state().is_owned_by(PointerId(1)));

    host.up(1);
    assert!(host.controller.state().is_idle());
}

#[test]
fn test_second_down_does_not_interrupt_gesture() {
    let mut host = host_with_checkup();
    host.down(1, 10.0, 10.0);
    assert_eq!(host.down(2, 600.0, 600.0), EventResponse::Ignored);

    assert_eq!(host.controller.state().dragged_appointment(), Some(AppointmentId(1)));
    assert_eq!(host.capture.held, vec![PointerId(1)]);
}

#[test]
fn test_up_without_gesture_is_ignored() {
    let mut host = TestHost::new();
    assert_eq!(host.up(1), EventResponse::Ignored);
    assert_eq!(host.lose_capture(1), EventResponse::Ignored);
    assert!(host.capture.calls.is_empty());
}

#[test]
fn test_secondary_button_is_ignored() {
    let mut host = host_with_checkup();
    assert_eq!(
        host.down_button(1, 10.0, 10.0, PointerButton::Secondary),
        EventResponse::Ignored
    );
    assert!(host.controller.state().is_idle());
    assert!(host.capture.calls.is_empty());
}

#[test]
fn test_middle_button_pans_over_appointment() {
    let mut host = host_with_checkup();
    host.down_button(1, 10.0, 10.0, PointerButton::Middle);
    assert!(host.controller.state().is_panning());

    host.move_to(1, 10.0, 110.0);
    host.up(1);
    assert!(host.changes.is_empty());
    assert_eq!(host.controller.transform().translate.y, 100.0);
}

#[test]
fn test_every_gesture_releases_what_it_captured() {
    let mut host = host_with_checkup();
    for pointer in 1..=5u32 {
        let x = if pointer % 2 == 0 { 10.0 } else { 800.0 };
        host.down(pointer, x, 10.0);
        host.move_to(pointer, x + 3.0, 40.0);
        match pointer % 3 {
            0 => host.up(pointer),
            1 => host.cancel(pointer),
            _ => host.lose_capture(pointer),
        };
        assert!(host.capture.held.is_empty(), "pointer {pointer}");
    }
    let releases = host
        .capture
        .calls
        .iter()
        .filter(|call| matches!(call, CaptureCall::Release(_)))
        .count();
    assert_eq!(releases, 5);
}

#[test]
fn test_noop_capture_host() {
    let host = host_with_checkup();
    let layout = host.layout();
    let mut controller = InteractionController::default();
    let mut capture = NoopCapture;

    let down = PointerEvent::new(1, 10.0, 10.0);
    assert_eq!(
        controller.handle_pointer_down(&down, &layout, &mut capture),
        EventResponse::Handled
    );
    let mut proposed = Vec::new();
    controller.handle_pointer_move(&PointerEvent::new(1, 10.0, 106.0), &layout, |id, patch| {
        proposed.push((id, patch))
    });
    assert_eq!(proposed.len(), 1);
    assert_eq!(
        controller.handle_pointer_up(PointerId(1), &mut capture),
        EventResponse::Handled
    );
}

//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin the exact layout geometry and the persisted settings
//! format. To update after an intentional change:
//! ```sh
//! cargo insta test --accept
//! ```

use slotboard::{
    Appointment, BoardLayout, CanvasSettings, LayoutStyle, Rect, Resource, SlotMetrics,
};

#[test]
fn snapshot_board_layout_rects() {
    let resources = vec![
        Resource::new(1, "Dr. Adams", "teal"),
        Resource::new(2, "Dr. Baker", "amber"),
    ];
    let appointments = vec![
        Appointment::new(1, 1, 480, 30).with_label("Checkup"),
        Appointment::new(2, 2, 525, 45).with_label("Consultation"),
    ];
    let layout = BoardLayout::compute(
        &resources,
        &appointments,
        &SlotMetrics::default(),
        &LayoutStyle::default(),
    );

    let rects: Vec<(u64, Rect)> = layout.placed().iter().map(|p| (p.id.0, p.rect)).collect();
    insta::assert_debug_snapshot!(rects, @r###"
    [
        (
            1,
            Rect {
                x: 0.0,
                y: 0.0,
                width: 256.0,
                height: 92.0,
            },
        ),
        (
            2,
            Rect {
                x: 260.0,
                y: 144.0,
                width: 256.0,
                height: 140.0,
            },
        ),
    ]
    "###);
}

#[test]
fn snapshot_default_settings_json() {
    let json = serde_json::to_string_pretty(&CanvasSettings::default()).unwrap();
    insta::assert_snapshot!(json, @r###"
    {
      "slot_metrics": {
        "slot_interval_minutes": 15,
        "pixels_per_slot": 48.0,
        "column_width_pixels": 260.0,
        "day_start_minute": 480,
        "day_end_minute": 1200
      },
      "layout": {
        "gap_pixels": 4.0,
        "minimum_height_pixels": 20.0
      },
      "wheel": {
        "pixel_divisor": 500.0,
        "line_divisor": 50.0
      },
      "home_translate": {
        "x": 0.0,
        "y": 0.0
      }
    }
    "###);
}

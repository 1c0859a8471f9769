//! Canvas settings: slot metrics, layout style and wheel sensitivity.
//!
//! Settings are stored as JSON. Every field has a default, so a partial file
//! (or no file at all) yields a working board.

use crate::constants::*;
use crate::error::{CanvasError, CanvasResult};
use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Grid geometry of a board. Immutable for the lifetime of a board instance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotMetrics {
    pub slot_interval_minutes: i32,
    pub pixels_per_slot: f32,
    pub column_width_pixels: f32,
    pub day_start_minute: i32,
    pub day_end_minute: i32,
}

impl Default for SlotMetrics {
    fn default() -> Self {
        Self {
            slot_interval_minutes: DEFAULT_SLOT_INTERVAL_MINUTES,
            pixels_per_slot: DEFAULT_PIXELS_PER_SLOT,
            column_width_pixels: DEFAULT_COLUMN_WIDTH_PIXELS,
            day_start_minute: DEFAULT_DAY_START_MINUTE,
            day_end_minute: DEFAULT_DAY_END_MINUTE,
        }
    }
}

impl SlotMetrics {
    /// Build validated metrics.
    pub fn new(
        slot_interval_minutes: i32,
        pixels_per_slot: f32,
        column_width_pixels: f32,
        day_start_minute: i32,
        day_end_minute: i32,
    ) -> CanvasResult<Self> {
        let metrics = Self {
            slot_interval_minutes,
            pixels_per_slot,
            column_width_pixels,
            day_start_minute,
            day_end_minute,
        };
        metrics.validate()?;
        Ok(metrics)
    }

    pub fn validate(&self) -> CanvasResult<()> {
        if self.slot_interval_minutes <= 0 {
            return Err(CanvasError::InvalidMetrics(format!(
                "slot interval must be positive, got {}",
                self.slot_interval_minutes
            )));
        }
        if !(self.pixels_per_slot.is_finite() && self.pixels_per_slot > 0.0) {
            return Err(CanvasError::InvalidMetrics(format!(
                "pixels per slot must be positive, got {}",
                self.pixels_per_slot
            )));
        }
        if !(self.column_width_pixels.is_finite() && self.column_width_pixels > 0.0) {
            return Err(CanvasError::InvalidMetrics(format!(
                "column width must be positive, got {}",
                self.column_width_pixels
            )));
        }
        if self.day_start_minute >= self.day_end_minute {
            return Err(CanvasError::InvalidMetrics(format!(
                "day start {} must be before day end {}",
                self.day_start_minute, self.day_end_minute
            )));
        }
        if self.day_length_minutes() > i64::from(MAX_DAY_LENGTH_MINUTES) {
            return Err(CanvasError::InvalidMetrics(format!(
                "day length {} exceeds {} minutes",
                self.day_length_minutes(),
                MAX_DAY_LENGTH_MINUTES
            )));
        }
        Ok(())
    }

    /// Length of the bookable day in minutes.
    pub fn day_length_minutes(&self) -> i64 {
        i64::from(self.day_end_minute) - i64::from(self.day_start_minute)
    }

    /// Content-space height of the whole day.
    pub fn day_height_pixels(&self) -> f32 {
        self.minutes_to_pixels(self.day_length_minutes())
    }

    #[inline]
    pub fn minutes_to_pixels(&self, minutes: i64) -> f32 {
        minutes as f32 / self.slot_interval_minutes as f32 * self.pixels_per_slot
    }

    /// Content-space y of a minute, relative to the top of the day.
    #[inline]
    pub fn minute_to_y(&self, minute: i32) -> f32 {
        self.minutes_to_pixels(i64::from(minute) - i64::from(self.day_start_minute))
    }
}

/// Spacing applied to appointment boxes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutStyle {
    pub gap_pixels: f32,
    pub minimum_height_pixels: f32,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            gap_pixels: DEFAULT_GAP_PIXELS,
            minimum_height_pixels: DEFAULT_MINIMUM_HEIGHT_PIXELS,
        }
    }
}

/// How wheel deltas translate into zoom.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelSettings {
    /// Pixel delta equivalent to a scale delta of 1.0
    pub pixel_divisor: f32,
    /// Line delta equivalent to a scale delta of 1.0
    pub line_divisor: f32,
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            pixel_divisor: WHEEL_PIXEL_DIVISOR,
            line_divisor: WHEEL_LINE_DIVISOR,
        }
    }
}

/// Full set of canvas settings as persisted on disk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub slot_metrics: SlotMetrics,
    pub layout: LayoutStyle,
    pub wheel: WheelSettings,
    /// Translate restored by a transform reset
    pub home_translate: Point,
}

impl CanvasSettings {
    /// Load settings from a JSON file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> CanvasResult<Self> {
        let settings: CanvasSettings = match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                CanvasSettings::default()
            }
            Err(e) => return Err(e.into()),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("Failed to load canvas settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> CanvasResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> CanvasResult<()> {
        self.slot_metrics.validate()?;
        if !(self.wheel.pixel_divisor > 0.0 && self.wheel.line_divisor > 0.0) {
            return Err(CanvasError::InvalidMetrics(
                "wheel divisors must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Location of the settings file: `<config dir>/slotboard/settings.json`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("slotboard").join("settings.json"))
}

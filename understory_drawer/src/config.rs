// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer configuration.
//!
//! [`DrawerConfig`] gathers every recognized option with its default. Options
//! can be set in code with the `with_*` builders, or by name from strings
//! with [`DrawerConfig::set_option`], which is how hosts forward values read
//! from their own style or attribute systems.
//!
//! ```
//! use understory_drawer::{DrawerConfig, Position, TouchMode};
//!
//! let mut config = DrawerConfig::default()
//!     .with_menu_size(280.0)
//!     .with_position(Position::End);
//! config.set_option("touch_mode", "bezel").unwrap();
//!
//! assert_eq!(config.touch_mode, TouchMode::Bezel);
//! assert!(config.set_option("drag_mode", "7").is_err());
//! ```

use alloc::string::ToString;

use crate::{DragMode, DrawerError, DrawerType, FrameSource, Position, ReleasePolicy, TouchMode};

/// Every option a drawer recognizes.
///
/// Sizes are in pixels; the host converts from its own units first.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DrawerConfig {
    /// Depth of the menu along the drawer axis.
    pub menu_size: f64,
    /// Whether the divider shadow is drawn.
    pub divider_enabled: bool,
    /// Thickness of the divider shadow.
    pub divider_size: f64,
    /// Opaque end of the divider shadow, as `0xAARRGGBB`.
    pub divider_shadow_color: u32,
    /// Width of the edge strip that accepts drags in [`TouchMode::Bezel`].
    pub touch_bezel_size: f64,
    /// Pointer travel before a drag starts.
    pub touch_slop: f64,
    /// Upper bound for any animation, in milliseconds.
    pub max_animation_duration: u32,
    /// Whether the dimming overlay is drawn.
    pub draw_overlay: bool,
    /// Where pointer downs may start a drag.
    pub touch_mode: TouchMode,
    /// How the drawer is attached. Fixed once the drawer is built.
    pub drag_mode: DragMode,
    /// Edge the menu slides in from. Fixed once the drawer is built.
    pub position: Position,
    /// Presentation variant. Fixed once the drawer is built.
    pub drawer_type: DrawerType,
    /// Whether a sliding menu trails the content.
    pub offset_menu: bool,
    /// How the host delivers animation frames.
    pub frame_source: FrameSource,
    /// How a released drag picks a direction.
    pub release_policy: ReleasePolicy,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            menu_size: 50.0,
            divider_enabled: true,
            divider_size: 6.0,
            divider_shadow_color: 0xFF00_0000,
            touch_bezel_size: 24.0,
            touch_slop: 8.0,
            max_animation_duration: 600,
            draw_overlay: true,
            touch_mode: TouchMode::Fullscreen,
            drag_mode: DragMode::Window,
            position: Position::Start,
            drawer_type: DrawerType::Behind,
            offset_menu: true,
            frame_source: FrameSource::Native,
            release_policy: ReleasePolicy::default(),
        }
    }
}

impl DrawerConfig {
    /// Sets [`menu_size`](Self::menu_size).
    #[must_use]
    pub fn with_menu_size(mut self, menu_size: f64) -> Self {
        self.menu_size = menu_size;
        self
    }

    /// Sets [`position`](Self::position).
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets [`drawer_type`](Self::drawer_type).
    #[must_use]
    pub fn with_drawer_type(mut self, drawer_type: DrawerType) -> Self {
        self.drawer_type = drawer_type;
        self
    }

    /// Sets [`drag_mode`](Self::drag_mode).
    #[must_use]
    pub fn with_drag_mode(mut self, drag_mode: DragMode) -> Self {
        self.drag_mode = drag_mode;
        self
    }

    /// Sets [`touch_mode`](Self::touch_mode).
    #[must_use]
    pub fn with_touch_mode(mut self, touch_mode: TouchMode) -> Self {
        self.touch_mode = touch_mode;
        self
    }

    /// Sets [`touch_bezel_size`](Self::touch_bezel_size).
    #[must_use]
    pub fn with_touch_bezel_size(mut self, size: f64) -> Self {
        self.touch_bezel_size = size;
        self
    }

    /// Sets [`touch_slop`](Self::touch_slop).
    #[must_use]
    pub fn with_touch_slop(mut self, slop: f64) -> Self {
        self.touch_slop = slop;
        self
    }

    /// Sets [`max_animation_duration`](Self::max_animation_duration).
    #[must_use]
    pub fn with_max_animation_duration(mut self, duration_ms: u32) -> Self {
        self.max_animation_duration = duration_ms;
        self
    }

    /// Sets [`frame_source`](Self::frame_source).
    #[must_use]
    pub fn with_frame_source(mut self, frame_source: FrameSource) -> Self {
        self.frame_source = frame_source;
        self
    }

    /// Sets [`release_policy`](Self::release_policy).
    #[must_use]
    pub fn with_release_policy(mut self, policy: ReleasePolicy) -> Self {
        self.release_policy = policy;
        self
    }

    /// Sets one option from its string form.
    ///
    /// Names are the field names of this struct; the release policy is
    /// reachable through `open_threshold` and `min_fling_velocity`.
    /// `drag_mode` also accepts the legacy codes `0` and `1`.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), DrawerError> {
        match name.trim() {
            "menu_size" => self.menu_size = length("menu_size", value)?,
            "divider_enabled" => self.divider_enabled = flag("divider_enabled", value)?,
            "divider_size" => self.divider_size = length("divider_size", value)?,
            "divider_shadow_color" => self.divider_shadow_color = color(value)?,
            "touch_bezel_size" => self.touch_bezel_size = length("touch_bezel_size", value)?,
            "touch_slop" => self.touch_slop = length("touch_slop", value)?,
            "max_animation_duration" => {
                self.max_animation_duration = value.trim().parse().map_err(|_| {
                    DrawerError::InvalidOptionValue {
                        option: "max_animation_duration",
                        value: value.to_string(),
                    }
                })?;
            }
            "draw_overlay" => self.draw_overlay = flag("draw_overlay", value)?,
            "touch_mode" => self.touch_mode = value.parse()?,
            "drag_mode" => {
                self.drag_mode = match value.trim().parse::<i32>() {
                    Ok(raw) => DragMode::from_raw(raw)?,
                    Err(_) => value.parse()?,
                };
            }
            "position" => self.position = value.parse()?,
            "drawer_type" => self.drawer_type = value.parse()?,
            "offset_menu" => self.offset_menu = flag("offset_menu", value)?,
            "frame_source" => self.frame_source = value.parse()?,
            "open_threshold" => {
                let threshold = length("open_threshold", value)?;
                if threshold > 1.0 {
                    return Err(DrawerError::InvalidOptionValue {
                        option: "open_threshold",
                        value: value.to_string(),
                    });
                }
                self.release_policy.open_threshold = threshold;
            }
            "min_fling_velocity" => {
                self.release_policy.min_fling_velocity = length("min_fling_velocity", value)?;
            }
            other => return Err(DrawerError::UnknownOption(other.to_string())),
        }
        Ok(())
    }
}

/// Parses a finite, non-negative number.
fn length(option: &'static str, value: &str) -> Result<f64, DrawerError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(DrawerError::InvalidOptionValue {
            option,
            value: value.to_string(),
        }),
    }
}

fn flag(option: &'static str, value: &str) -> Result<bool, DrawerError> {
    let v = value.trim();
    if v.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if v.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(DrawerError::InvalidOptionValue {
            option,
            value: value.to_string(),
        })
    }
}

/// Parses `#RRGGBB`, `#AARRGGBB`, or the same digits after `0x`.
fn color(value: &str) -> Result<u32, DrawerError> {
    let v = value.trim();
    let digits = v
        .strip_prefix('#')
        .or_else(|| v.strip_prefix("0x"))
        .unwrap_or(v);
    let parsed = digits
        .bytes()
        .all(|b| b.is_ascii_hexdigit())
        .then(|| u32::from_str_radix(digits, 16).ok())
        .flatten();
    match (digits.len(), parsed) {
        (6, Some(rgb)) => Ok(0xFF00_0000 | rgb),
        (8, Some(argb)) => Ok(argb),
        _ => Err(DrawerError::InvalidOptionValue {
            option: "divider_shadow_color",
            value: value.to_string(),
        }),
    }
}

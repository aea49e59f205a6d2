// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based offset animation.
//!
//! [`AnimationDriver`] interpolates the drawer offset from a start value to a
//! target over a bounded duration with [`smooth_ease`]. The host calls
//! [`AnimationDriver::tick`] once per frame with a monotonic timestamp in
//! milliseconds; the driver never schedules anything on its own.
//!
//! A driver can be re-targeted or cancelled at any frame. Starting a new
//! animation always begins at the caller-supplied current offset, so an
//! interrupted animation never jumps.
//!
//! ```
//! use understory_drawer::AnimationDriver;
//!
//! let mut anim = AnimationDriver::default();
//! anim.animate_to(0.0, 300.0, 100, 1_000);
//!
//! let mid = anim.tick(1_050).unwrap();
//! assert!(mid.offset > 0.0 && mid.offset < 300.0);
//!
//! let end = anim.tick(1_100).unwrap();
//! assert_eq!(end.offset, 300.0);
//! assert!(end.finished);
//! assert!(!anim.is_running());
//! ```

use core::str::FromStr;

use alloc::string::ToString;

use crate::DrawerError;

/// Target frame interval of 60 Hz, in milliseconds.
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Fixed delay used by hosts without a per-frame callback, in milliseconds.
pub const FALLBACK_FRAME_DELAY_MS: u32 = 1000 / 60;

/// Duration per full menu size for animations without a release velocity.
const BASE_DURATION_MS: f64 = 600.0;

/// Quintic ease-out: `1 + (t - 1)^5`, with `t` clamped to `[0, 1]`.
///
/// Monotonic, `0` at `t = 0` and exactly `1` at `t = 1`.
#[must_use]
pub fn smooth_ease(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    t * t * t * t * t + 1.0
}

/// Picks an animation duration in milliseconds.
///
/// With a release `velocity` (pixels per second, any sign) the animation takes
/// four times as long as travelling `distance` at that speed. Without one it
/// scales with the share of the menu being travelled. The result never
/// exceeds `max_duration`.
#[must_use]
pub fn animation_duration(distance: f64, velocity: f64, menu_size: f64, max_duration: u32) -> u32 {
    let distance = distance.abs();
    let velocity = velocity.abs();
    let cap = f64::from(max_duration);
    if velocity > 0.0 {
        let travel = (1000.0 * distance / velocity).min(cap);
        to_millis(travel + 0.5)
            .saturating_mul(4)
            .min(max_duration)
    } else {
        to_millis((BASE_DURATION_MS * distance / menu_size.max(1.0)).min(cap))
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "callers bound the value by a u32 duration"
)]
fn to_millis(value: f64) -> u32 {
    value.max(0.0) as u32
}

/// How the host delivers animation frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameSource {
    /// The host has a native per-frame (vsync) callback.
    #[default]
    Native,
    /// The host falls back to a repeating timer at the frame cadence.
    Timer,
}

impl FromStr for FrameSource {
    type Err = DrawerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("native") {
            Ok(Self::Native)
        } else if name.eq_ignore_ascii_case("timer") {
            Ok(Self::Timer)
        } else {
            Err(DrawerError::InvalidOptionValue {
                option: "frame_source",
                value: s.to_string(),
            })
        }
    }
}

/// What the host should schedule to keep an animation going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    /// Call back on the next display frame.
    NextFrame,
    /// Call back after a fixed delay.
    After {
        /// Delay in milliseconds.
        delay_ms: u32,
    },
}

impl FrameSource {
    /// The request matching this frame source.
    #[must_use]
    pub const fn request(self) -> FrameRequest {
        match self {
            Self::Native => FrameRequest::NextFrame,
            Self::Timer => FrameRequest::After {
                delay_ms: FALLBACK_FRAME_DELAY_MS,
            },
        }
    }
}

/// One interpolated frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    /// Offset to apply for this frame.
    pub offset: f64,
    /// `true` once `offset` equals the target; the driver is then idle.
    pub finished: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Segment {
    from: f64,
    to: f64,
    start_ms: u64,
    duration_ms: u32,
}

impl Segment {
    fn sample(&self, now_ms: u64) -> AnimationFrame {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if self.duration_ms == 0 || elapsed >= u64::from(self.duration_ms) {
            return AnimationFrame {
                offset: self.to,
                finished: true,
            };
        }
        let t = elapsed as f64 / f64::from(self.duration_ms);
        AnimationFrame {
            offset: self.from + (self.to - self.from) * smooth_ease(t),
            finished: false,
        }
    }
}

/// A follow-up leg queued behind the running segment, used by peeking.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Return {
    to: f64,
    duration_ms: u32,
}

/// Drives the offset towards a target over time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationDriver {
    segment: Option<Segment>,
    then: Option<Return>,
}

impl AnimationDriver {
    /// Starts animating from `from` to `to`, replacing any running animation.
    pub fn animate_to(&mut self, from: f64, to: f64, duration_ms: u32, now_ms: u64) {
        self.segment = Some(Segment {
            from,
            to,
            start_ms: now_ms,
            duration_ms,
        });
        self.then = None;
    }

    /// Animates to `peak` and then back to `rest`, each leg taking `leg_ms`.
    pub fn peek(&mut self, from: f64, peak: f64, rest: f64, leg_ms: u32, now_ms: u64) {
        self.animate_to(from, peak, leg_ms, now_ms);
        self.then = Some(Return {
            to: rest,
            duration_ms: leg_ms,
        });
    }

    /// Advances to `now_ms`.
    ///
    /// Returns `None` when idle. A frame with `finished` set is the last one of
    /// the whole animation, including any queued return leg.
    pub fn tick(&mut self, now_ms: u64) -> Option<AnimationFrame> {
        let segment = self.segment?;
        let frame = segment.sample(now_ms);
        if !frame.finished {
            return Some(frame);
        }
        match self.then.take() {
            Some(leg) => {
                self.segment = Some(Segment {
                    from: segment.to,
                    to: leg.to,
                    start_ms: now_ms,
                    duration_ms: leg.duration_ms,
                });
                Some(AnimationFrame {
                    offset: segment.to,
                    finished: false,
                })
            }
            None => {
                self.segment = None;
                Some(frame)
            }
        }
    }

    /// Stops the animation where it is. Returns `true` if one was running.
    pub fn cancel(&mut self) -> bool {
        self.then = None;
        self.segment.take().is_some()
    }

    /// Negates start, target, and any return leg, for an edge flip.
    pub fn mirror(&mut self) {
        if let Some(segment) = &mut self.segment {
            segment.from = -segment.from;
            segment.to = -segment.to;
        }
        if let Some(leg) = &mut self.then {
            leg.to = -leg.to;
        }
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.segment.is_some()
    }

    /// Returns `true` while a peek has not yet started its return leg.
    #[must_use]
    pub fn is_peeking(&self) -> bool {
        self.then.is_some()
    }

    /// Offset the animation will finally settle at, if running.
    #[must_use]
    pub fn final_target(&self) -> Option<f64> {
        match (self.segment, self.then) {
            (_, Some(leg)) => Some(leg.to),
            (Some(segment), None) => Some(segment.to),
            (None, None) => None,
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gesture interpretation for drawers.
//!
//! [`TouchGestureController`] decides whether a pointer sequence drags the
//! drawer. It does not own the offset: it reports deltas that the drawer adds
//! to its [`OffsetModel`](crate::OffsetModel).
//!
//! ## Lifecycle
//!
//! 1) [`on_down`](TouchGestureController::on_down) checks eligibility against
//!    the [`TouchMode`] and edge bezel, and arms the controller.
//! 2) [`on_move`](TouchGestureController::on_move) waits until the pointer
//!    travels past the touch slop along the drawer axis, asks the
//!    [`DraggableCheck`] (full-screen mode only), and then starts dragging.
//! 3) [`on_up`](TouchGestureController::on_up) reports either a tap-through or
//!    a release with its velocity projected onto the opening direction.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_drawer::{
//!     GestureFrame, MoveOutcome, Position, TouchGestureController, TouchMode, UpOutcome,
//! };
//!
//! let mut gestures = TouchGestureController::<u32>::new(TouchMode::Bezel, 24.0, 8.0);
//! let frame = GestureFrame {
//!     edge: Position::Left,
//!     bounds: Size::new(1080.0, 1920.0),
//!     offset: 0.0,
//!     menu_visible: false,
//! };
//!
//! // Outside the bezel: refused.
//! assert!(!gestures.on_down(Point::new(50.0, 400.0), 0, &frame, &[], false));
//!
//! // Inside the bezel: armed, then dragged past the slop.
//! assert!(gestures.on_down(Point::new(10.0, 400.0), 0, &frame, &[], false));
//! let outcome = gestures.on_move(Point::new(60.0, 402.0), 16, &frame, None);
//! assert_eq!(outcome, MoveOutcome::DragStarted { delta: 50.0 });
//! assert!(matches!(gestures.on_up(Point::new(60.0, 402.0), 32, &frame), UpOutcome::Released { .. }));
//! ```

use alloc::vec::Vec;
use core::str::FromStr;

use alloc::string::ToString;
use kurbo::{Point, Size, Vec2};
use smallvec::SmallVec;

use crate::{DrawerError, Position};

/// Where a pointer down may start a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchMode {
    /// Dragging is disabled; the drawer only moves programmatically.
    None,
    /// Only within the bezel along the drawer edge.
    Bezel,
    /// Anywhere, subject to the [`DraggableCheck`] veto.
    #[default]
    Fullscreen,
}

impl FromStr for TouchMode {
    type Err = DrawerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("none") {
            Ok(Self::None)
        } else if name.eq_ignore_ascii_case("bezel") {
            Ok(Self::Bezel)
        } else if name.eq_ignore_ascii_case("fullscreen") {
            Ok(Self::Fullscreen)
        } else {
            Err(DrawerError::InvalidOptionValue {
                option: "touch_mode",
                value: s.to_string(),
            })
        }
    }
}

/// Lets the host keep a gesture for a view under the pointer.
///
/// Consulted in [`TouchMode::Fullscreen`] once per view in the hit path when a
/// drag is about to start. Returning `false` for any view vetoes the drawer
/// drag for the rest of that gesture, so that for example a horizontally
/// scrollable child can claim it.
///
/// Closures with the matching signature implement this trait.
pub trait DraggableCheck<V> {
    /// Returns `false` if the drawer must not take a drag of `delta` pixels
    /// starting over `view`, with the pointer at `(x, y)`.
    fn is_view_draggable(&mut self, view: &V, delta: f64, x: f64, y: f64) -> bool;
}

impl<V, F> DraggableCheck<V> for F
where
    F: FnMut(&V, f64, f64, f64) -> bool,
{
    fn is_view_draggable(&mut self, view: &V, delta: f64, x: f64, y: f64) -> bool {
        self(view, delta, x, y)
    }
}

/// Snapshot of the drawer geometry the controller needs per event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureFrame {
    /// Resolved (literal) drawer edge.
    pub edge: Position,
    /// Size of the drawer's own bounds.
    pub bounds: Size,
    /// Current offset in pixels.
    pub offset: f64,
    /// Whether any part of the menu is visible.
    pub menu_visible: bool,
}

impl GestureFrame {
    fn axis(&self, v: Vec2) -> (f64, f64) {
        if self.edge.is_horizontal() {
            (v.x, v.y)
        } else {
            (v.y, v.x)
        }
    }

    /// Returns `true` if `pos` lies on the visible part of the content.
    fn on_content(&self, pos: Point) -> bool {
        match self.edge {
            Position::Right => pos.x <= self.bounds.width + self.offset,
            Position::Top => pos.y >= self.offset,
            Position::Bottom => pos.y <= self.bounds.height + self.offset,
            _ => pos.x >= self.offset,
        }
    }

    fn in_bezel(&self, pos: Point, bezel: f64) -> bool {
        match self.edge {
            Position::Right => pos.x >= self.bounds.width - bezel,
            Position::Top => pos.y <= bezel,
            Position::Bottom => pos.y >= self.bounds.height - bezel,
            _ => pos.x <= bezel,
        }
    }
}

/// Result of a pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No gesture is being tracked, or it was vetoed.
    Ignored,
    /// Still within the touch slop, or moving away from open on a closed drawer.
    Pending,
    /// The gesture was just vetoed by the host or by cross-axis motion.
    Vetoed,
    /// The drag started; `delta` is the total travel since the pointer down.
    DragStarted {
        /// Signed travel along the drawer axis.
        delta: f64,
    },
    /// An ongoing drag moved by `delta` since the last event.
    Dragged {
        /// Signed travel along the drawer axis.
        delta: f64,
    },
}

/// Result of a pointer up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UpOutcome {
    /// No gesture was tracked.
    Ignored,
    /// The pointer never left the touch slop; nothing may change.
    TapThrough,
    /// A drag ended.
    Released {
        /// Release velocity in pixels per second, positive towards open.
        opening_velocity: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Armed,
    Dragging,
    Vetoed,
}

/// Window of recent samples used for the release velocity.
const VELOCITY_WINDOW_MS: u64 = 100;

/// Estimates pointer velocity from recent samples.
#[derive(Clone, Debug, Default)]
struct VelocityTracker {
    samples: SmallVec<[(u64, Point); 8]>,
}

impl VelocityTracker {
    fn reset(&mut self, time: u64, pos: Point) {
        self.samples.clear();
        self.samples.push((time, pos));
    }

    fn add(&mut self, time: u64, pos: Point) {
        let cutoff = time.saturating_sub(VELOCITY_WINDOW_MS);
        self.samples.retain(|(t, _)| *t >= cutoff);
        self.samples.push((time, pos));
    }

    /// Pixels per second over the retained window.
    fn velocity(&self) -> Vec2 {
        let (Some(&(t0, p0)), Some(&(t1, p1))) = (self.samples.first(), self.samples.last())
        else {
            return Vec2::ZERO;
        };
        if t1 <= t0 {
            return Vec2::ZERO;
        }
        let seconds = (t1 - t0) as f64 / 1000.0;
        (p1 - p0) / seconds
    }
}

/// Interprets pointer events for a drawer.
///
/// Generic over the host's view handle `V`, which identifies the views under
/// the pointer for the [`DraggableCheck`].
#[derive(Clone, Debug)]
pub struct TouchGestureController<V> {
    mode: TouchMode,
    bezel_size: f64,
    touch_slop: f64,
    phase: Phase,
    down_pos: Point,
    last_pos: Point,
    velocity: VelocityTracker,
    hit_path: Vec<V>,
}

impl<V: Clone> TouchGestureController<V> {
    /// Creates an idle controller.
    #[must_use]
    pub fn new(mode: TouchMode, bezel_size: f64, touch_slop: f64) -> Self {
        Self {
            mode,
            bezel_size: bezel_size.max(0.0),
            touch_slop: touch_slop.max(0.0),
            phase: Phase::Idle,
            down_pos: Point::ZERO,
            last_pos: Point::ZERO,
            velocity: VelocityTracker::default(),
            hit_path: Vec::new(),
        }
    }

    /// Current touch mode.
    #[must_use]
    pub fn touch_mode(&self) -> TouchMode {
        self.mode
    }

    /// Sets the touch mode. Takes effect from the next pointer down.
    pub fn set_touch_mode(&mut self, mode: TouchMode) {
        self.mode = mode;
    }

    /// Width of the edge bezel in pixels.
    #[must_use]
    pub fn bezel_size(&self) -> f64 {
        self.bezel_size
    }

    /// Sets the bezel width in pixels.
    pub fn set_bezel_size(&mut self, size: f64) {
        self.bezel_size = size.max(0.0);
    }

    /// Distance a pointer must travel before a drag starts.
    #[must_use]
    pub fn touch_slop(&self) -> f64 {
        self.touch_slop
    }

    /// Sets the touch slop in pixels.
    pub fn set_touch_slop(&mut self, slop: f64) {
        self.touch_slop = slop.max(0.0);
    }

    /// Returns `true` if a pointer down at `pos` may start a drag.
    #[must_use]
    pub fn accepts_down(&self, pos: Point, frame: &GestureFrame) -> bool {
        match self.mode {
            TouchMode::None => false,
            _ if frame.menu_visible => frame.on_content(pos),
            TouchMode::Bezel => frame.in_bezel(pos, self.bezel_size),
            TouchMode::Fullscreen => true,
        }
    }

    /// Handles a pointer down.
    ///
    /// `hit_path` lists the views under the pointer, root first. With `catch`
    /// set the drag starts immediately, skipping the slop; the drawer uses
    /// this to grab a drawer that is still animating.
    ///
    /// Returns `true` if the gesture is being tracked.
    pub fn on_down(
        &mut self,
        pos: Point,
        time: u64,
        frame: &GestureFrame,
        hit_path: &[V],
        catch: bool,
    ) -> bool {
        self.hit_path.clear();
        if !self.accepts_down(pos, frame) {
            tracing::trace!(?pos, mode = ?self.mode, "pointer down refused");
            self.phase = Phase::Idle;
            return false;
        }
        self.hit_path.extend_from_slice(hit_path);
        self.down_pos = pos;
        self.last_pos = pos;
        self.velocity.reset(time, pos);
        self.phase = if catch { Phase::Dragging } else { Phase::Armed };
        tracing::trace!(?pos, caught = catch, "pointer down armed");
        true
    }

    /// Handles a pointer move.
    pub fn on_move(
        &mut self,
        pos: Point,
        time: u64,
        frame: &GestureFrame,
        check: Option<&mut dyn DraggableCheck<V>>,
    ) -> MoveOutcome {
        match self.phase {
            Phase::Idle | Phase::Vetoed => MoveOutcome::Ignored,
            Phase::Dragging => {
                let (delta, _) = frame.axis(pos - self.last_pos);
                self.last_pos = pos;
                self.velocity.add(time, pos);
                MoveOutcome::Dragged { delta }
            }
            Phase::Armed => {
                self.velocity.add(time, pos);
                let (along, across) = frame.axis(pos - self.down_pos);
                if across.abs() > self.touch_slop && across.abs() > along.abs() {
                    tracing::trace!("drawer gesture abandoned for cross-axis motion");
                    self.phase = Phase::Vetoed;
                    return MoveOutcome::Vetoed;
                }
                if along.abs() <= self.touch_slop || along.abs() <= across.abs() {
                    return MoveOutcome::Pending;
                }
                // A closed drawer only follows motion towards open.
                if !frame.menu_visible && along * frame.edge.offset_sign() <= 0.0 {
                    return MoveOutcome::Pending;
                }
                if self.mode == TouchMode::Fullscreen {
                    if let Some(check) = check {
                        let allowed = self
                            .hit_path
                            .iter()
                            .all(|view| check.is_view_draggable(view, along, pos.x, pos.y));
                        if !allowed {
                            tracing::trace!("drawer gesture vetoed by draggable check");
                            self.phase = Phase::Vetoed;
                            return MoveOutcome::Vetoed;
                        }
                    }
                }
                self.phase = Phase::Dragging;
                self.last_pos = pos;
                MoveOutcome::DragStarted { delta: along }
            }
        }
    }

    /// Handles a pointer up and resets the controller.
    pub fn on_up(&mut self, pos: Point, time: u64, frame: &GestureFrame) -> UpOutcome {
        let phase = core::mem::replace(&mut self.phase, Phase::Idle);
        self.hit_path.clear();
        match phase {
            Phase::Idle => UpOutcome::Ignored,
            Phase::Armed | Phase::Vetoed => UpOutcome::TapThrough,
            Phase::Dragging => {
                self.velocity.add(time, pos);
                let (along, _) = frame.axis(self.velocity.velocity());
                UpOutcome::Released {
                    opening_velocity: along * frame.edge.offset_sign(),
                }
            }
        }
    }

    /// Abandons the gesture. Returns `true` if a drag was in progress.
    pub fn cancel(&mut self) -> bool {
        self.hit_path.clear();
        core::mem::replace(&mut self.phase, Phase::Idle) == Phase::Dragging
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Returns `true` while a pointer sequence is tracked, dragging or not.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, Phase::Armed | Phase::Dragging)
    }
}

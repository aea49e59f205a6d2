// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete drawer state.
//!
//! [`DrawerStateMachine`] holds one [`DrawerState`] and applies the legal
//! transitions. Every method returns `Some(StateTransition)` only when the
//! state actually changed, so callers notify listeners exactly once per change.
//!
//! - `Closed` / `Open` → `Dragging` when a gesture takes over.
//! - `Dragging` → `Opening` / `Closing` on release, per [`ReleasePolicy`].
//! - `Opening` → `Open` and `Closing` → `Closed` when the animation lands.
//! - Any state → `Opening` / `Closing` on a programmatic open or close.

use crate::offset::OffsetModel;

/// State of a drawer.
///
/// `Closed` and `Open` are the idle states. The others are transient and are
/// always resolved by an active gesture or a running animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawerState {
    /// Fully closed.
    #[default]
    Closed,
    /// Animating towards closed.
    Closing,
    /// Following a pointer.
    Dragging,
    /// Animating towards open.
    Opening,
    /// Fully open.
    Open,
}

impl DrawerState {
    /// Returns `true` for [`DrawerState::Closed`] and [`DrawerState::Open`].
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Closed | Self::Open)
    }

    /// Legacy integer code for hosts that bridge to numeric state constants.
    ///
    /// These are distinct values only; they are never combined.
    #[must_use]
    pub const fn raw(self) -> u8 {
        match self {
            Self::Closed => 0,
            Self::Closing => 1,
            Self::Dragging => 2,
            Self::Opening => 4,
            Self::Open => 8,
        }
    }

    /// Inverse of [`DrawerState::raw`].
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Closed),
            1 => Some(Self::Closing),
            2 => Some(Self::Dragging),
            4 => Some(Self::Opening),
            8 => Some(Self::Open),
            _ => None,
        }
    }
}

/// A state change, `old != new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateTransition {
    /// State before the change.
    pub old: DrawerState,
    /// State after the change.
    pub new: DrawerState,
}

/// Decides whether a released drag commits to opening or closing.
///
/// A fast enough fling wins in its own direction; a slow release opens once
/// the menu is at least `open_threshold` open.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReleasePolicy {
    /// Open ratio at or above which a slow release opens the drawer.
    pub open_threshold: f64,
    /// Speed in pixels per second above which the fling direction decides.
    pub min_fling_velocity: f64,
}

impl Default for ReleasePolicy {
    fn default() -> Self {
        Self {
            open_threshold: 0.5,
            min_fling_velocity: 400.0,
        }
    }
}

impl ReleasePolicy {
    /// Returns `true` if the release should open the drawer.
    ///
    /// `opening_velocity` is the release velocity projected onto the opening
    /// direction: positive values move the drawer towards open.
    #[must_use]
    pub fn commits_open(&self, open_ratio: f64, opening_velocity: f64) -> bool {
        if opening_velocity.abs() >= self.min_fling_velocity {
            opening_velocity > 0.0
        } else {
            open_ratio >= self.open_threshold
        }
    }
}

/// The discrete drawer state and its legal transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerStateMachine {
    state: DrawerState,
}

impl DrawerStateMachine {
    /// Creates a machine in the given state.
    #[must_use]
    pub const fn new(state: DrawerState) -> Self {
        Self { state }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> DrawerState {
        self.state
    }

    /// A gesture took control of the offset.
    pub fn begin_drag(&mut self) -> Option<StateTransition> {
        self.set(DrawerState::Dragging)
    }

    /// A drag was released; `open` is the release policy's verdict.
    ///
    /// Does nothing unless the machine is dragging.
    pub fn release(&mut self, open: bool) -> Option<StateTransition> {
        if self.state != DrawerState::Dragging {
            return None;
        }
        self.set(if open {
            DrawerState::Opening
        } else {
            DrawerState::Closing
        })
    }

    /// An animation started towards an open or closed target.
    pub fn animate(&mut self, opening: bool) -> Option<StateTransition> {
        self.set(if opening {
            DrawerState::Opening
        } else {
            DrawerState::Closing
        })
    }

    /// An animation or jump reached its target; settle from the offset.
    ///
    /// A closed offset settles to `Closed`, anything else to `Open`.
    pub fn settle(&mut self, offset: &OffsetModel) -> Option<StateTransition> {
        self.set(if offset.is_closed() {
            DrawerState::Closed
        } else {
            DrawerState::Open
        })
    }

    fn set(&mut self, new: DrawerState) -> Option<StateTransition> {
        if new == self.state {
            return None;
        }
        let old = core::mem::replace(&mut self.state, new);
        tracing::debug!(?old, ?new, "drawer state changed");
        Some(StateTransition { old, new })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_from_closed_and_release_open() {
        let mut machine = DrawerStateMachine::default();
        assert_eq!(
            machine.begin_drag(),
            Some(StateTransition {
                old: DrawerState::Closed,
                new: DrawerState::Dragging,
            })
        );
        assert_eq!(machine.release(true).unwrap().new, DrawerState::Opening);

        let mut offset = OffsetModel::new(100.0, 1.0);
        offset.set_offset(100.0);
        assert_eq!(machine.settle(&offset).unwrap().new, DrawerState::Open);
    }

    #[test]
    fn unchanged_state_reports_nothing() {
        let mut machine = DrawerStateMachine::new(DrawerState::Open);
        let mut offset = OffsetModel::new(100.0, 1.0);
        offset.set_offset(100.0);
        assert_eq!(machine.settle(&offset), None);
        assert_eq!(machine.begin_drag().unwrap().old, DrawerState::Open);
        assert_eq!(machine.begin_drag(), None);
    }

    #[test]
    fn release_outside_drag_is_ignored() {
        let mut machine = DrawerStateMachine::new(DrawerState::Opening);
        assert_eq!(machine.release(false), None);
        assert_eq!(machine.state(), DrawerState::Opening);
    }

    #[test]
    fn programmatic_animation_skips_dragging() {
        let mut machine = DrawerStateMachine::new(DrawerState::Open);
        assert_eq!(machine.animate(false).unwrap().new, DrawerState::Closing);
        let offset = OffsetModel::new(100.0, 1.0);
        assert_eq!(machine.settle(&offset).unwrap().new, DrawerState::Closed);
    }

    #[test]
    fn release_policy_prefers_fling_direction() {
        let policy = ReleasePolicy::default();
        assert!(policy.commits_open(0.1, 1_500.0));
        assert!(!policy.commits_open(0.9, -1_500.0));
        assert!(policy.commits_open(0.5, 0.0));
        assert!(!policy.commits_open(0.49, 100.0));
    }

    #[test]
    fn raw_codes_round_trip() {
        for state in [
            DrawerState::Closed,
            DrawerState::Closing,
            DrawerState::Dragging,
            DrawerState::Opening,
            DrawerState::Open,
        ] {
            assert_eq!(DrawerState::from_raw(state.raw()), Some(state));
        }
        assert_eq!(DrawerState::from_raw(3), None);
    }
}

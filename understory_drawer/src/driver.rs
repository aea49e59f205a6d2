// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-writer arbitration for the drawer offset.
//!
//! Both the gesture controller and the animation driver move the offset, but
//! never at the same time. [`DriverToken`] records which one currently holds
//! the right to write. Acquiring the token hands back the previous holder so
//! the caller can stop it in the same call.

/// A component allowed to move the drawer offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveDriver {
    /// Nobody is moving the offset.
    #[default]
    Idle,
    /// A pointer gesture owns the offset.
    Gesture,
    /// An animation owns the offset.
    Animation,
}

/// Tracks the [`ActiveDriver`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriverToken {
    holder: ActiveDriver,
}

impl DriverToken {
    /// Current holder.
    #[must_use]
    pub const fn holder(&self) -> ActiveDriver {
        self.holder
    }

    /// Returns `true` if `driver` currently holds the token.
    #[must_use]
    pub fn is_held_by(&self, driver: ActiveDriver) -> bool {
        self.holder == driver
    }

    /// Hands the token to `driver`, returning the preempted holder.
    ///
    /// Returns `None` if the token was idle or already held by `driver`.
    pub fn acquire(&mut self, driver: ActiveDriver) -> Option<ActiveDriver> {
        let previous = core::mem::replace(&mut self.holder, driver);
        (previous != ActiveDriver::Idle && previous != driver).then_some(previous)
    }

    /// Releases the token if `driver` holds it. Returns `true` on release.
    pub fn release(&mut self, driver: ActiveDriver) -> bool {
        if self.holder == driver && driver != ActiveDriver::Idle {
            self.holder = ActiveDriver::Idle;
            true
        } else {
            false
        }
    }
}

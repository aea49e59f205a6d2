// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous drawer offset.
//!
//! [`OffsetModel`] stores the signed pixel distance of the drawer from its
//! closed position. Left and top drawers open towards positive offsets, right
//! and bottom drawers towards negative ones. Offsets are clamped into
//! `[0, menu_size]` (or its mirror) on every write.
//!
//! Downstream work only happens when the *truncated* integer offset changes:
//! [`OffsetModel::set_offset`] returns an [`OffsetChange`] in that case and
//! `None` for sub-pixel movement.
//!
//! ```
//! use understory_drawer::OffsetModel;
//!
//! let mut model = OffsetModel::new(300.0, 1.0);
//! let change = model.set_offset(150.4).unwrap();
//! assert_eq!(change.offset_px, 150);
//! assert_eq!(change.open_ratio, 0.5);
//!
//! // Same truncated value: coalesced.
//! assert!(model.set_offset(150.9).is_none());
//! ```

/// Emitted when the truncated offset changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetChange {
    /// New truncated offset in pixels.
    pub offset_px: i32,
    /// New open ratio in `[0, 1]`.
    pub open_ratio: f64,
}

/// Signed drawer offset with sub-pixel coalescing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetModel {
    offset: f64,
    menu_size: f64,
    sign: f64,
    open_ratio: f64,
    menu_visible: bool,
}

impl OffsetModel {
    /// Creates a closed model.
    ///
    /// `sign` is the [`offset_sign`](crate::Position::offset_sign) of the
    /// resolved edge; `menu_size` is clamped to at least one pixel.
    #[must_use]
    pub fn new(menu_size: f64, sign: f64) -> Self {
        Self {
            offset: 0.0,
            menu_size: menu_size.max(1.0),
            sign: if sign < 0.0 { -1.0 } else { 1.0 },
            open_ratio: 0.0,
            menu_visible: false,
        }
    }

    /// Current offset, including any sub-pixel part.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Current offset truncated towards zero.
    #[must_use]
    pub fn offset_px(&self) -> i32 {
        truncate(self.offset)
    }

    /// Size of the fully open menu in pixels.
    #[must_use]
    pub fn menu_size(&self) -> f64 {
        self.menu_size
    }

    /// Offset of a fully open drawer, carrying the edge sign.
    #[must_use]
    pub fn open_offset(&self) -> f64 {
        self.menu_size * self.sign
    }

    /// Sign of open offsets for the current edge.
    #[must_use]
    pub fn sign(&self) -> f64 {
        self.sign
    }

    /// Ratio of how far the menu is open, in `[0, 1]`.
    #[must_use]
    pub fn open_ratio(&self) -> f64 {
        self.open_ratio
    }

    /// Returns `true` while any part of the menu is visible.
    #[must_use]
    pub fn is_menu_visible(&self) -> bool {
        self.menu_visible
    }

    /// Returns `true` if the truncated offset is zero.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.offset_px() == 0
    }

    /// Returns `true` if the truncated offset equals the full menu size.
    #[must_use]
    pub fn is_fully_open(&self) -> bool {
        self.offset_px() == truncate(self.open_offset())
    }

    /// Clamps `offset` into the signed range of this model.
    #[must_use]
    pub fn clamp(&self, offset: f64) -> f64 {
        if self.sign > 0.0 {
            offset.clamp(0.0, self.menu_size)
        } else {
            offset.clamp(-self.menu_size, 0.0)
        }
    }

    /// Open ratio that an arbitrary offset would have.
    #[must_use]
    pub fn ratio_for(&self, offset: f64) -> f64 {
        (f64::from(truncate(offset)).abs() / self.menu_size).clamp(0.0, 1.0)
    }

    /// Moves the drawer to `offset`.
    ///
    /// Out-of-range and non-finite values are clamped. Returns `Some` only if
    /// the truncated offset changed.
    pub fn set_offset(&mut self, offset: f64) -> Option<OffsetChange> {
        let offset = if offset.is_finite() { offset } else { 0.0 };
        let old = self.offset_px();
        self.offset = self.clamp(offset);
        let new = self.offset_px();
        if new == old {
            return None;
        }
        self.open_ratio = self.ratio_for(self.offset);
        self.menu_visible = new != 0;
        Some(OffsetChange {
            offset_px: new,
            open_ratio: self.open_ratio,
        })
    }

    /// Changes the menu size, keeping the offset inside the new range.
    ///
    /// Returns a change if re-clamping moved the truncated offset.
    pub fn set_menu_size(&mut self, menu_size: f64) -> Option<OffsetChange> {
        self.menu_size = menu_size.max(1.0);
        let change = self.set_offset(self.offset);
        if change.is_none() {
            self.open_ratio = self.ratio_for(self.offset);
        }
        change
    }

    /// Mirrors the model to the opposite edge, applying `-offset` in one step.
    pub fn mirror(&mut self) -> Option<OffsetChange> {
        self.sign = -self.sign;
        self.set_offset(-self.offset)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "offsets are clamped to the menu size, which fits in i32"
)]
pub(crate) fn truncate(value: f64) -> i32 {
    value as i32
}

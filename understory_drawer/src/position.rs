// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer edge resolution.
//!
//! A drawer is configured with a [`Position`], which may be *logical*
//! ([`Position::Start`], [`Position::End`]) or *literal* (the four physical
//! edges). Logical positions depend on the layout direction; literal ones never
//! do. [`PositionResolver`] caches the resolved edge and reports a
//! [`SignFlip`] when a layout direction change moves the drawer to the opposite
//! edge, so that the owner can mirror its offset before the next frame.
//!
//! ```
//! use understory_drawer::{LayoutDirection, Position, PositionResolver};
//!
//! let mut resolver = PositionResolver::new(Position::Start, LayoutDirection::Ltr);
//! assert_eq!(resolver.resolved(), Position::Left);
//!
//! let flip = resolver.set_layout_direction(LayoutDirection::Rtl).unwrap();
//! assert_eq!(flip.to, Position::Right);
//! assert_eq!(resolver.resolved(), Position::Right);
//!
//! // Re-applying the same direction is idempotent.
//! assert!(resolver.set_layout_direction(LayoutDirection::Rtl).is_none());
//! ```

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::DrawerError;

/// Edge a drawer slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// Leading edge: left in left-to-right layouts, right in right-to-left ones.
    #[default]
    Start,
    /// Trailing edge: right in left-to-right layouts, left in right-to-left ones.
    End,
    /// Left edge, regardless of layout direction.
    Left,
    /// Right edge, regardless of layout direction.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
}

impl Position {
    /// Resolves this position to a literal edge for the given layout direction.
    ///
    /// Literal positions are fixed points.
    #[must_use]
    pub const fn resolve(self, direction: LayoutDirection) -> Self {
        match (self, direction) {
            (Self::Start, LayoutDirection::Rtl) => Self::Right,
            (Self::Start, LayoutDirection::Ltr) => Self::Left,
            (Self::End, LayoutDirection::Rtl) => Self::Left,
            (Self::End, LayoutDirection::Ltr) => Self::Right,
            (literal, _) => literal,
        }
    }

    /// Returns `true` for [`Position::Start`] and [`Position::End`].
    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// Returns `true` if the drawer moves along the horizontal axis.
    ///
    /// Logical positions are always horizontal.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        !matches!(self, Self::Top | Self::Bottom)
    }

    /// Sign of the offset of an open drawer on this (resolved) edge.
    ///
    /// Left and top drawers push content towards positive coordinates; right
    /// and bottom drawers towards negative ones.
    #[must_use]
    pub const fn offset_sign(self) -> f64 {
        match self {
            Self::Right | Self::Bottom => -1.0,
            _ => 1.0,
        }
    }

    /// Orientation of the divider shadow for a sliding drawer on this edge.
    ///
    /// The gradient always fades away from the content edge into the menu.
    #[must_use]
    pub const fn divider_orientation(self) -> GradientOrientation {
        match self {
            Self::Top => GradientOrientation::BottomToTop,
            Self::Right | Self::End => GradientOrientation::LeftToRight,
            Self::Bottom => GradientOrientation::TopToBottom,
            Self::Left | Self::Start => GradientOrientation::RightToLeft,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Position {
    type Err = DrawerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [
            Self::Start,
            Self::End,
            Self::Left,
            Self::Right,
            Self::Top,
            Self::Bottom,
        ]
        .into_iter()
        .find(|position| position.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| DrawerError::InvalidOptionValue {
            option: "position",
            value: s.to_string(),
        })
    }
}

/// Horizontal layout direction of the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Direction of a two-stop linear gradient, from the opaque stop to the
/// transparent one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradientOrientation {
    /// Top edge to bottom edge.
    TopToBottom,
    /// Bottom edge to top edge.
    BottomToTop,
    /// Left edge to right edge.
    LeftToRight,
    /// Right edge to left edge.
    RightToLeft,
}

impl GradientOrientation {
    /// Returns the opposite orientation.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::TopToBottom => Self::BottomToTop,
            Self::BottomToTop => Self::TopToBottom,
            Self::LeftToRight => Self::RightToLeft,
            Self::RightToLeft => Self::LeftToRight,
        }
    }
}

/// Reported when a layout direction change moved the drawer to the opposite edge.
///
/// The owner must replace its offset with `-offset` before anything else is
/// rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignFlip {
    /// Previously resolved edge.
    pub from: Position,
    /// Newly resolved edge.
    pub to: Position,
}

/// Caches the literal edge of a drawer and tracks layout direction changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionResolver {
    position: Position,
    direction: LayoutDirection,
    resolved: Position,
}

impl PositionResolver {
    /// Creates a resolver for `position` under the initial layout `direction`.
    #[must_use]
    pub const fn new(position: Position, direction: LayoutDirection) -> Self {
        Self {
            position,
            direction,
            resolved: position.resolve(direction),
        }
    }

    /// The configured, possibly logical, position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// The current layout direction.
    #[must_use]
    pub const fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// The cached literal edge.
    #[must_use]
    pub const fn resolved(&self) -> Position {
        self.resolved
    }

    /// Applies a layout direction change.
    ///
    /// Returns a [`SignFlip`] if the resolved edge changed. Literal positions
    /// never flip.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) -> Option<SignFlip> {
        self.direction = direction;
        let resolved = self.position.resolve(direction);
        if resolved == self.resolved {
            return None;
        }
        let flip = SignFlip {
            from: self.resolved,
            to: resolved,
        };
        self.resolved = resolved;
        Some(flip)
    }
}

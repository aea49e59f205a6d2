// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced by drawer construction, configuration, and state restore.

use alloc::string::String;
use core::fmt;

/// Errors produced by the drawer.
///
/// All of these are structural: they describe a configuration the drawer
/// cannot be wired with. Runtime conditions such as a missing transformer or
/// a vetoed gesture are never reported as errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawerError {
    /// A raw drag mode value that does not name a [`DragMode`](crate::DragMode).
    UnknownDragMode(i32),
    /// A markup child carried no designated slot.
    UndesignatedChild {
        /// Index of the offending child in the markup order.
        index: usize,
    },
    /// The same slot was designated by more than one markup child.
    DuplicateSlot(&'static str),
    /// Markup supplied more children than the two designated slots.
    TooManyChildren(usize),
    /// A configuration option name that the drawer does not recognize.
    UnknownOption(String),
    /// A configuration option value that could not be parsed.
    InvalidOptionValue {
        /// Option name.
        option: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A saved-state blob that could not be decoded.
    MalformedSavedState,
}

impl fmt::Display for DrawerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDragMode(mode) => write!(f, "unknown drag mode: {mode}"),
            Self::UndesignatedChild { index } => write!(
                f,
                "markup child {index} must be designated as the menu or the content slot"
            ),
            Self::DuplicateSlot(slot) => {
                write!(f, "markup designates the {slot} slot more than once")
            }
            Self::TooManyChildren(count) => write!(
                f,
                "drawer markup accepts a menu and a content child, found {count} children"
            ),
            Self::UnknownOption(name) => write!(f, "unknown drawer option `{name}`"),
            Self::InvalidOptionValue { option, value } => {
                write!(f, "invalid value `{value}` for drawer option `{option}`")
            }
            Self::MalformedSavedState => f.write_str("saved drawer state is malformed"),
        }
    }
}

impl core::error::Error for DrawerError {}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Saved drawer state.
//!
//! [`SavedState`] is opaque to the host: it is captured with
//! [`Drawer::save_state`](crate::Drawer::save_state), carried across the host's
//! own save/restore hooks as bytes (or through `serde` with the `serde`
//! feature), and handed back with
//! [`Drawer::restore_state`](crate::Drawer::restore_state).

use alloc::vec::Vec;

use crate::DrawerError;

const MAGIC: u8 = b'D';
const VERSION: u8 = 1;
const MENU_OPEN: u8 = 1 << 0;

/// Opaque snapshot of a drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedState {
    menu_open: bool,
}

impl SavedState {
    pub(crate) const fn new(menu_open: bool) -> Self {
        Self { menu_open }
    }

    /// Whether the drawer was open or opening when saved.
    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Encodes the state for transport.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let flags = if self.menu_open { MENU_OPEN } else { 0 };
        [MAGIC, VERSION, flags].to_vec()
    }

    /// Decodes bytes produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DrawerError> {
        match *bytes {
            [MAGIC, VERSION, flags] if flags & !MENU_OPEN == 0 => Ok(Self {
                menu_open: flags & MENU_OPEN != 0,
            }),
            _ => Err(DrawerError::MalformedSavedState),
        }
    }
}

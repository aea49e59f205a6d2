// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callbacks out of the drawer.
//!
//! A [`DrawerTransformer`] is the visual plugin that turns drawer motion into
//! effects (translation, scale, alpha) on the host's views. A
//! [`DrawerListener`] is the lower-level subscriber for raw state changes and
//! slide events. [`TransformerBridge`] owns both slots and routes every
//! notification; once [`TransformerBridge::begin_teardown`] has been called it
//! stays silent for good.
//!
//! By default state and slide events go to the transformer: entering
//! [`DrawerState::Open`] calls [`DrawerTransformer::on_completed`], entering
//! [`DrawerState::Closed`] calls [`DrawerTransformer::on_reset`], and every
//! slide calls [`DrawerTransformer::on_swiping`]. Installing a listener
//! replaces the transformer as the subscriber for those events.

use alloc::boxed::Box;
use core::fmt;

use crate::{DrawerState, Position};

/// Read-only snapshot of the drawer passed to callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerInfo {
    /// Current state.
    pub state: DrawerState,
    /// Resolved edge.
    pub position: Position,
    /// Truncated offset in pixels.
    pub offset_px: i32,
    /// Open ratio in `[0, 1]`.
    pub open_ratio: f64,
    /// Menu size in pixels.
    pub menu_size: f64,
}

/// Visual effects plugin driven by the drawer.
///
/// Implementors own whatever host context they need to apply effects.
pub trait DrawerTransformer<V> {
    /// The menu view was installed or replaced.
    fn on_view_created(&mut self, drawer: &DrawerInfo, view: &V);

    /// The drawer moved to a new whole-pixel offset.
    fn on_swiping(&mut self, drawer: &DrawerInfo, open_ratio: f64, offset_px: i32);

    /// The drawer became fully open.
    fn on_completed(&mut self, drawer: &DrawerInfo);

    /// The drawer became fully closed.
    fn on_reset(&mut self, drawer: &DrawerInfo);
}

/// Raw subscriber for state and slide events.
pub trait DrawerListener {
    /// The state changed from `old` to `new`.
    fn on_drawer_state_change(&mut self, old: DrawerState, new: DrawerState);

    /// The drawer moved to a new whole-pixel offset.
    fn on_drawer_slide(&mut self, open_ratio: f64, offset_px: i32);
}

/// Routes drawer notifications to the optional transformer and listener.
pub struct TransformerBridge<V> {
    transformer: Option<Box<dyn DrawerTransformer<V>>>,
    listener: Option<Box<dyn DrawerListener>>,
    destroying: bool,
}

impl<V> fmt::Debug for TransformerBridge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformerBridge")
            .field("transformer", &self.transformer.is_some())
            .field("listener", &self.listener.is_some())
            .field("destroying", &self.destroying)
            .finish()
    }
}

impl<V> Default for TransformerBridge<V> {
    fn default() -> Self {
        Self {
            transformer: None,
            listener: None,
            destroying: false,
        }
    }
}

impl<V> TransformerBridge<V> {
    /// Replaces the transformer, returning the previous one.
    pub fn set_transformer(
        &mut self,
        transformer: Option<Box<dyn DrawerTransformer<V>>>,
    ) -> Option<Box<dyn DrawerTransformer<V>>> {
        core::mem::replace(&mut self.transformer, transformer)
    }

    /// Returns `true` if a transformer is installed.
    #[must_use]
    pub fn has_transformer(&self) -> bool {
        self.transformer.is_some()
    }

    /// Replaces the state listener, returning the previous one.
    ///
    /// While a listener is installed it receives state and slide events in
    /// place of the transformer.
    pub fn set_listener(
        &mut self,
        listener: Option<Box<dyn DrawerListener>>,
    ) -> Option<Box<dyn DrawerListener>> {
        core::mem::replace(&mut self.listener, listener)
    }

    /// Silences every callback from now on. There is no way back.
    pub fn begin_teardown(&mut self) {
        if !self.destroying {
            tracing::debug!("drawer teardown started, callbacks silenced");
        }
        self.destroying = true;
    }

    /// Returns `true` once teardown has begun.
    #[must_use]
    pub fn is_destroying(&self) -> bool {
        self.destroying
    }

    /// Notifies that the menu view was (re)installed.
    pub fn view_created(&mut self, info: &DrawerInfo, view: &V) {
        if self.destroying {
            return;
        }
        if let Some(transformer) = &mut self.transformer {
            transformer.on_view_created(info, view);
        }
    }

    /// Notifies a whole-pixel offset change.
    pub fn slide(&mut self, info: &DrawerInfo, open_ratio: f64, offset_px: i32) {
        if self.destroying {
            return;
        }
        if let Some(listener) = &mut self.listener {
            listener.on_drawer_slide(open_ratio, offset_px);
        } else if let Some(transformer) = &mut self.transformer {
            transformer.on_swiping(info, open_ratio, offset_px);
        } else {
            tracing::warn!("drawer is sliding, but no transformer is registered");
        }
    }

    /// Notifies a state change.
    pub fn state_changed(&mut self, info: &DrawerInfo, old: DrawerState, new: DrawerState) {
        if self.destroying {
            return;
        }
        if let Some(listener) = &mut self.listener {
            listener.on_drawer_state_change(old, new);
        } else if let Some(transformer) = &mut self.transformer {
            match new {
                DrawerState::Open => transformer.on_completed(info),
                DrawerState::Closed => transformer.on_reset(info),
                _ => {}
            }
        } else {
            tracing::warn!(?old, ?new, "drawer state changed, but no transformer is registered");
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawer --heading-base-level=0

//! Understory Drawer: headless slide-in drawer primitives.
//!
//! A drawer is a menu panel that slides in from one edge of the screen, either
//! uncovering itself from behind the content or sliding over it. This crate
//! owns the logic of such a drawer and none of the rendering:
//!
//! - **Edge resolution** ([`Position`], [`PositionResolver`]): logical
//!   `Start`/`End` edges follow the layout direction, and a direction flip
//!   mirrors the offset.
//! - **Offset** ([`OffsetModel`]): a signed pixel offset clamped to the menu
//!   size, with whole-pixel change coalescing.
//! - **State** ([`DrawerStateMachine`], [`DrawerState`]): closed, closing,
//!   dragging, opening, open.
//! - **Gestures** ([`TouchGestureController`]): bezel or full-screen drags with
//!   a touch slop and a host veto ([`DraggableCheck`]).
//! - **Animation** ([`AnimationDriver`]): eased, interruptible, host-clocked.
//! - **Composition** ([`ViewComposition`]): the menu and content containers
//!   and how the drawer joins the host window ([`DragMode`]).
//! - **Callbacks** ([`TransformerBridge`]): a visual [`DrawerTransformer`] and
//!   a raw [`DrawerListener`], both silenced once teardown begins.
//! - **Presentation** ([`DrawerVariant`]): translations, overlay, and divider
//!   geometry for the [`DrawerType`].
//!
//! [`Drawer`] ties these together. The host feeds it pointer events, layout
//! passes, and frame ticks with its own millisecond clock, and reads back
//! placements and paint requests.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_drawer::{Drawer, DrawerConfig, DrawerState, Position};
//!
//! // Views are host handles; `u32` stands in for them here.
//! let config = DrawerConfig::default()
//!     .with_menu_size(300.0)
//!     .with_position(Position::Left);
//! let mut drawer = Drawer::<u32>::new(config).unwrap();
//! drawer.layout(Size::new(1080.0, 1920.0));
//!
//! // Drag half the menu open, then let go.
//! assert!(drawer.on_pointer_down(Point::new(0.0, 500.0), &[], 0));
//! drawer.on_pointer_move(Point::new(150.0, 500.0), 400);
//! assert_eq!(drawer.state(), DrawerState::Dragging);
//! drawer.on_pointer_up(Point::new(150.0, 500.0), 600);
//!
//! // Drive frames until the drawer settles.
//! let mut now = 600;
//! while drawer.on_frame(now).is_some() {
//!     now += 16;
//! }
//! assert_eq!(drawer.state(), DrawerState::Open);
//! assert_eq!(drawer.offset(), 300.0);
//! ```
//!
//! ## Host contract
//!
//! Everything runs on the host's UI thread through `&mut self` calls. The
//! host:
//!
//! - calls [`Drawer::layout`] whenever its bounds change, and once after
//!   [`Drawer::restore_state`];
//! - forwards pointer events with the views under the pointer;
//! - schedules frames as told by [`Drawer::frame_request`] and
//!   [`Drawer::on_frame`];
//! - translates containers by [`Drawer::placement`] and paints through
//!   [`Drawer::draw`] when [`Drawer::needs_redraw`] is set.
//!
//! ## Features
//!
//! - `std` (default): compile against the standard library.
//! - `libm`: `no_std` float support for Kurbo.
//! - `serde`: `Serialize`/`Deserialize` for [`DrawerConfig`], [`SavedState`],
//!   and the option enums.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animation;
mod composition;
mod config;
mod drawer;
mod driver;
mod error;
mod gesture;
mod offset;
mod persist;
mod position;
mod state;
mod transformer;
mod variant;

pub use animation::{
    AnimationDriver, AnimationFrame, FALLBACK_FRAME_DELAY_MS, FRAME_INTERVAL_MS, FrameRequest,
    FrameSource, animation_duration, smooth_ease,
};
pub use composition::{
    ContainerRects, ContentPlacement, DragMode, MarkupChild, MarkupSlots, SlotRole,
    ViewComposition, WindowHost,
};
pub use config::DrawerConfig;
pub use drawer::Drawer;
pub use driver::{ActiveDriver, DriverToken};
pub use error::DrawerError;
pub use gesture::{
    DraggableCheck, GestureFrame, MoveOutcome, TouchGestureController, TouchMode, UpOutcome,
};
pub use offset::{OffsetChange, OffsetModel};
pub use persist::SavedState;
pub use position::{GradientOrientation, LayoutDirection, Position, PositionResolver, SignFlip};
pub use state::{DrawerState, DrawerStateMachine, ReleasePolicy, StateTransition};
pub use transformer::{DrawerInfo, DrawerListener, DrawerTransformer, TransformerBridge};
pub use variant::{
    DividerGeometry, DrawerType, DrawerVariant, MAX_OVERLAY_ALPHA, OverlaySurface, OverlayVariant,
    Placement, SlidingVariant, VariantLayout, create_variant, shadow_colors,
};

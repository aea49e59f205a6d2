// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu and content containers.
//!
//! [`ViewComposition`] holds the two subtrees a drawer arranges: the menu and
//! the content. Views are opaque host handles `V`; the composition only tracks
//! which handles live in which container, where the containers are laid out,
//! and how the drawer is attached to the host window.
//!
//! How the drawer joins the window is fixed by its [`DragMode`]:
//!
//! - [`DragMode::Window`]: [`ViewComposition::attach`] moves every child of the
//!   window root under the content container and makes the drawer the root.
//!   The whole window, decorations included, slides.
//! - [`DragMode::Content`]: the drawer replaces the window's content area only.
//!
//! Declarative markup is accepted through [`MarkupSlots::from_children`], which
//! insists that every child is designated as either the menu or the content.

use alloc::vec::Vec;
use core::str::FromStr;

use alloc::string::ToString;
use kurbo::{Insets, Rect, Size};
use smallvec::SmallVec;

use crate::{DrawerError, Position};

/// How the drawer is attached to the host window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragMode {
    /// The drawer replaces the window's content area.
    Content,
    /// The drawer becomes the window root and slides everything.
    #[default]
    Window,
}

impl DragMode {
    /// Parses the legacy integer code: `0` for content, `1` for window.
    pub fn from_raw(raw: i32) -> Result<Self, DrawerError> {
        match raw {
            0 => Ok(Self::Content),
            1 => Ok(Self::Window),
            other => Err(DrawerError::UnknownDragMode(other)),
        }
    }
}

impl FromStr for DragMode {
    type Err = DrawerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("content") {
            Ok(Self::Content)
        } else if name.eq_ignore_ascii_case("window") {
            Ok(Self::Window)
        } else {
            Err(DrawerError::InvalidOptionValue {
                option: "drag_mode",
                value: s.to_string(),
            })
        }
    }
}

/// Window plumbing provided by the host for [`ViewComposition::attach`].
pub trait WindowHost<V> {
    /// Detaches and returns every child of the window root, in order.
    fn take_root_children(&mut self) -> Vec<V>;

    /// Makes the drawer the only child of the window root.
    fn install_drawer_as_root(&mut self);

    /// Clears the window's content area and installs the drawer there.
    fn install_drawer_as_content(&mut self);
}

/// Container a markup child is designated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotRole {
    /// The menu container.
    Menu,
    /// The content container.
    Content,
}

impl SlotRole {
    const fn name(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Content => "content",
        }
    }
}

/// One child declared in drawer markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkupChild<V> {
    /// Designated slot, if any.
    pub slot: Option<SlotRole>,
    /// The inflated view.
    pub view: V,
}

/// Children of drawer markup, sorted into their slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkupSlots<V> {
    /// The child designated as the menu.
    pub menu: Option<V>,
    /// The child designated as the content.
    pub content: Option<V>,
}

impl<V> MarkupSlots<V> {
    /// Sorts markup children into slots.
    ///
    /// At most two children are accepted, each designated exactly once.
    pub fn from_children(children: Vec<MarkupChild<V>>) -> Result<Self, DrawerError> {
        if children.len() > 2 {
            return Err(DrawerError::TooManyChildren(children.len()));
        }
        let mut slots = Self {
            menu: None,
            content: None,
        };
        for (index, child) in children.into_iter().enumerate() {
            let role = child
                .slot
                .ok_or(DrawerError::UndesignatedChild { index })?;
            let target = match role {
                SlotRole::Menu => &mut slots.menu,
                SlotRole::Content => &mut slots.content,
            };
            if target.is_some() {
                return Err(DrawerError::DuplicateSlot(role.name()));
            }
            *target = Some(child.view);
        }
        Ok(slots)
    }
}

/// Outcome of [`ViewComposition::set_content_view`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentPlacement<V> {
    /// The view now fills the content container. Holds the detached views.
    Installed(SmallVec<[V; 1]>),
    /// Window mode: the host must place the view in its own content area,
    /// which already lives inside the content container.
    Delegated(V),
}

/// Laid-out container rectangles in drawer coordinates, before translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerRects {
    /// Menu container.
    pub menu: Rect,
    /// Content container.
    pub content: Rect,
}

/// The drawer's two containers and their bookkeeping.
#[derive(Clone, Debug)]
pub struct ViewComposition<V> {
    drag_mode: DragMode,
    menu: SmallVec<[V; 1]>,
    content: SmallVec<[V; 1]>,
    attached: bool,
    menu_visible: bool,
    menu_padding: Insets,
}

impl<V> ViewComposition<V> {
    /// Creates empty containers for `drag_mode`.
    #[must_use]
    pub fn new(drag_mode: DragMode) -> Self {
        Self {
            drag_mode,
            menu: SmallVec::new(),
            content: SmallVec::new(),
            attached: false,
            menu_visible: false,
            menu_padding: Insets::ZERO,
        }
    }

    /// The drag mode fixed at construction.
    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        self.drag_mode
    }

    /// Returns `true` once [`attach`](Self::attach) has run.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Attaches the drawer to the host window.
    ///
    /// Runs once; later calls return `false` and leave the host untouched.
    pub fn attach(&mut self, host: &mut dyn WindowHost<V>) -> bool {
        if self.attached {
            return false;
        }
        match self.drag_mode {
            DragMode::Window => {
                let children = host.take_root_children();
                tracing::debug!(
                    moved = children.len(),
                    "drawer attached as window root"
                );
                self.content.extend(children);
                host.install_drawer_as_root();
            }
            DragMode::Content => {
                tracing::debug!("drawer attached to the content area");
                host.install_drawer_as_content();
            }
        }
        self.attached = true;
        true
    }

    /// Replaces the menu subtree, returning the detached one.
    pub fn set_menu_view(&mut self, view: V) -> SmallVec<[V; 1]> {
        let previous = core::mem::take(&mut self.menu);
        self.menu.push(view);
        previous
    }

    /// The installed menu view.
    #[must_use]
    pub fn menu_view(&self) -> Option<&V> {
        self.menu.first()
    }

    /// Replaces the content subtree.
    ///
    /// In [`DragMode::Window`] the window content area lives inside the content
    /// container, so the view is handed back for the host to install there.
    pub fn set_content_view(&mut self, view: V) -> ContentPlacement<V> {
        match self.drag_mode {
            DragMode::Window => ContentPlacement::Delegated(view),
            DragMode::Content => {
                let previous = core::mem::take(&mut self.content);
                self.content.push(view);
                ContentPlacement::Installed(previous)
            }
        }
    }

    /// Views held by the content container.
    #[must_use]
    pub fn content_views(&self) -> &[V] {
        &self.content
    }

    /// Whether the menu container is currently shown.
    #[must_use]
    pub fn is_menu_visible(&self) -> bool {
        self.menu_visible
    }

    /// Shows or hides the menu container. Returns `true` on change.
    pub fn set_menu_visible(&mut self, visible: bool) -> bool {
        let changed = self.menu_visible != visible;
        self.menu_visible = visible;
        changed
    }

    /// Padding applied inside the menu container.
    #[must_use]
    pub fn menu_padding(&self) -> Insets {
        self.menu_padding
    }

    /// Applies window insets.
    ///
    /// A window-mode drawer sits under the system bars, so the menu is padded
    /// by the top inset unless it slides in from the bottom. Returns `true` if
    /// the padding was applied.
    pub fn fit_system_insets(&mut self, insets: Insets, edge: Position) -> bool {
        if self.drag_mode != DragMode::Window || edge == Position::Bottom {
            return false;
        }
        self.menu_padding = Insets::new(0.0, insets.y0, 0.0, 0.0);
        true
    }

    /// Lays out both containers for a drawer of `bounds` on `edge`.
    ///
    /// The content fills the bounds; the menu is `menu_size` deep along the
    /// edge.
    #[must_use]
    pub fn layout(&self, bounds: Size, edge: Position, menu_size: f64) -> ContainerRects {
        let Size { width, height } = bounds;
        let menu = match edge {
            Position::Right => Rect::new(width - menu_size, 0.0, width, height),
            Position::Top => Rect::new(0.0, 0.0, width, menu_size),
            Position::Bottom => Rect::new(0.0, height - menu_size, width, height),
            _ => Rect::new(0.0, 0.0, menu_size, height),
        };
        ContainerRects {
            menu,
            content: bounds.to_rect(),
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer presentation variants.
//!
//! The same offset can be presented in two ways, selected by [`DrawerType`]:
//!
//! - [`SlidingVariant`] ([`DrawerType::Behind`]): the content slides away and
//!   uncovers a menu lying behind it.
//! - [`OverlayVariant`] ([`DrawerType::Overlay`]): the content stays put and
//!   the menu slides in over it.
//!
//! Variants compute container translations, divider geometry, and overlay
//! rectangles from a [`VariantLayout`]. They never draw by themselves; painting
//! goes through the host's [`OverlaySurface`].

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;
use kurbo::{Rect, Size, Vec2};

use crate::{DrawerError, GradientOrientation, Position};

/// Strongest overlay alpha, reached on a fully covered area.
pub const MAX_OVERLAY_ALPHA: f64 = 185.0 / 255.0;

/// Share of the menu size a sliding menu lags behind the content when
/// [`VariantLayout::offset_menu`] is set.
const MENU_PARALLAX: f64 = 0.25;

/// How the menu is presented relative to the content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawerType {
    /// The menu lies behind the content, which slides away.
    #[default]
    Behind,
    /// The menu slides in over static content.
    Overlay,
}

impl FromStr for DrawerType {
    type Err = DrawerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("behind") {
            Ok(Self::Behind)
        } else if name.eq_ignore_ascii_case("overlay") {
            Ok(Self::Overlay)
        } else {
            Err(DrawerError::InvalidOptionValue {
                option: "drawer_type",
                value: s.to_string(),
            })
        }
    }
}

/// Geometry inputs shared by all variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantLayout {
    /// Resolved (literal) edge.
    pub edge: Position,
    /// Drawer bounds.
    pub bounds: Size,
    /// Current offset in pixels, signed for the edge.
    pub offset: f64,
    /// Menu size in pixels.
    pub menu_size: f64,
    /// Divider thickness in pixels.
    pub divider_size: f64,
    /// Whether a sliding menu should trail the content.
    pub offset_menu: bool,
}

impl VariantLayout {
    fn open_ratio(&self) -> f64 {
        (self.offset.abs() / self.menu_size.max(1.0)).clamp(0.0, 1.0)
    }

    fn along(&self, distance: f64) -> Vec2 {
        if self.edge.is_horizontal() {
            Vec2::new(distance, 0.0)
        } else {
            Vec2::new(0.0, distance)
        }
    }

    /// Rectangle covered by the open part of the menu.
    fn uncovered_menu(&self) -> Rect {
        let Size { width, height } = self.bounds;
        match self.edge {
            Position::Right => Rect::new(width + self.offset, 0.0, width, height),
            Position::Top => Rect::new(0.0, 0.0, width, self.offset),
            Position::Bottom => Rect::new(0.0, height + self.offset, width, height),
            _ => Rect::new(0.0, 0.0, self.offset, height),
        }
    }

    /// Rectangle of the content not covered by the menu.
    fn visible_content(&self) -> Rect {
        let Size { width, height } = self.bounds;
        match self.edge {
            Position::Right => Rect::new(0.0, 0.0, width + self.offset, height),
            Position::Top => Rect::new(0.0, self.offset, width, height),
            Position::Bottom => Rect::new(0.0, 0.0, width, height + self.offset),
            _ => Rect::new(self.offset, 0.0, width, height),
        }
    }
}

/// Translations the host applies to the two containers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    /// Translation of the content container.
    pub content: Vec2,
    /// Translation of the menu container from its laid-out position.
    pub menu: Vec2,
}

/// Where and how to draw the divider shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DividerGeometry {
    /// Divider rectangle in drawer coordinates.
    pub rect: Rect,
    /// Gradient direction, opaque stop first.
    pub orientation: GradientOrientation,
}

/// Gradient stops for a divider shadow in `0xAARRGGBB`: the colour and its
/// fully transparent counterpart.
#[must_use]
pub const fn shadow_colors(color: u32) -> (u32, u32) {
    (color, color & 0x00FF_FFFF)
}

/// Painting primitives provided by the host.
pub trait OverlaySurface {
    /// Fills `rect` with the overlay colour at `alpha` in `[0, 1]`.
    fn fill_overlay(&mut self, rect: Rect, alpha: f64);

    /// Paints a two-stop divider gradient.
    fn draw_divider(&mut self, divider: &DividerGeometry, start_color: u32, end_color: u32);
}

/// Variant-specific presentation of the drawer offset.
pub trait DrawerVariant: fmt::Debug {
    /// The type tag this variant was built for.
    fn kind(&self) -> DrawerType;

    /// Paints the dimming overlay for the current offset.
    fn draw_overlay(&self, layout: &VariantLayout, surface: &mut dyn OverlaySurface);

    /// Recomputes container translations after an offset change.
    fn on_offset_changed(&mut self, layout: &VariantLayout) -> Placement;

    /// Divider rectangle and gradient direction for the current offset.
    fn compute_divider_geometry(&self, layout: &VariantLayout) -> DividerGeometry;
}

/// Builds the variant for `kind`.
#[must_use]
pub fn create_variant(kind: DrawerType) -> Box<dyn DrawerVariant> {
    match kind {
        DrawerType::Behind => Box::new(SlidingVariant::default()),
        DrawerType::Overlay => Box::new(OverlayVariant::default()),
    }
}

/// Content slides away to uncover the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlidingVariant {
    placement: Placement,
}

impl DrawerVariant for SlidingVariant {
    fn kind(&self) -> DrawerType {
        DrawerType::Behind
    }

    fn draw_overlay(&self, layout: &VariantLayout, surface: &mut dyn OverlaySurface) {
        let alpha = MAX_OVERLAY_ALPHA * (1.0 - layout.open_ratio());
        surface.fill_overlay(layout.uncovered_menu(), alpha);
    }

    fn on_offset_changed(&mut self, layout: &VariantLayout) -> Placement {
        let menu = if layout.offset_menu {
            let lag = (1.0 - layout.open_ratio()) * layout.menu_size * MENU_PARALLAX;
            layout.along(-lag * layout.edge.offset_sign())
        } else {
            Vec2::ZERO
        };
        self.placement = Placement {
            content: layout.along(layout.offset),
            menu,
        };
        self.placement
    }

    fn compute_divider_geometry(&self, layout: &VariantLayout) -> DividerGeometry {
        let Size { width, height } = layout.bounds;
        let size = layout.divider_size;
        let rect = match layout.edge {
            Position::Right => {
                let left = width + layout.offset;
                Rect::new(left, 0.0, left + size, height)
            }
            Position::Top => Rect::new(0.0, layout.offset - size, width, layout.offset),
            Position::Bottom => {
                let top = height + layout.offset;
                Rect::new(0.0, top, width, top + size)
            }
            _ => Rect::new(layout.offset - size, 0.0, layout.offset, height),
        };
        DividerGeometry {
            rect,
            orientation: layout.edge.divider_orientation(),
        }
    }
}

/// Menu slides in over static content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayVariant {
    placement: Placement,
}

impl DrawerVariant for OverlayVariant {
    fn kind(&self) -> DrawerType {
        DrawerType::Overlay
    }

    fn draw_overlay(&self, layout: &VariantLayout, surface: &mut dyn OverlaySurface) {
        let alpha = MAX_OVERLAY_ALPHA * layout.open_ratio();
        surface.fill_overlay(layout.visible_content(), alpha);
    }

    fn on_offset_changed(&mut self, layout: &VariantLayout) -> Placement {
        let hidden = layout.menu_size * layout.edge.offset_sign() - layout.offset;
        self.placement = Placement {
            content: Vec2::ZERO,
            menu: layout.along(-hidden),
        };
        self.placement
    }

    fn compute_divider_geometry(&self, layout: &VariantLayout) -> DividerGeometry {
        let Size { width, height } = layout.bounds;
        let size = layout.divider_size;
        let rect = match layout.edge {
            Position::Right => {
                let right = width + layout.offset;
                Rect::new(right - size, 0.0, right, height)
            }
            Position::Top => Rect::new(0.0, layout.offset, width, layout.offset + size),
            Position::Bottom => {
                let bottom = height + layout.offset;
                Rect::new(0.0, bottom - size, width, bottom)
            }
            _ => Rect::new(layout.offset, 0.0, layout.offset + size, height),
        };
        DividerGeometry {
            rect,
            orientation: layout.edge.divider_orientation().reversed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn layout(edge: Position, offset: f64) -> VariantLayout {
        VariantLayout {
            edge,
            bounds: Size::new(1000.0, 2000.0),
            offset,
            menu_size: 300.0,
            divider_size: 6.0,
            offset_menu: true,
        }
    }

    #[derive(Default)]
    struct Surface {
        overlays: Vec<(Rect, f64)>,
    }

    impl OverlaySurface for Surface {
        fn fill_overlay(&mut self, rect: Rect, alpha: f64) {
            self.overlays.push((rect, alpha));
        }

        fn draw_divider(&mut self, _: &DividerGeometry, _: u32, _: u32) {}
    }

    #[test]
    fn factory_dispatches_on_type() {
        assert_eq!(create_variant(DrawerType::Behind).kind(), DrawerType::Behind);
        assert_eq!(
            create_variant(DrawerType::Overlay).kind(),
            DrawerType::Overlay
        );
    }

    #[test]
    fn sliding_moves_content_and_trails_menu() {
        let mut v = SlidingVariant::default();
        let placement = v.on_offset_changed(&layout(Position::Left, 150.0));
        assert_eq!(placement.content, Vec2::new(150.0, 0.0));
        assert_eq!(placement.menu, Vec2::new(-37.5, 0.0));

        let open = v.on_offset_changed(&layout(Position::Right, -300.0));
        assert_eq!(open.content, Vec2::new(-300.0, 0.0));
        assert_eq!(open.menu, Vec2::ZERO);
    }

    #[test]
    fn overlay_moves_only_the_menu() {
        let mut v = OverlayVariant::default();
        let placement = v.on_offset_changed(&layout(Position::Top, 100.0));
        assert_eq!(placement.content, Vec2::ZERO);
        assert_eq!(placement.menu, Vec2::new(0.0, -200.0));

        let placement = v.on_offset_changed(&layout(Position::Bottom, -300.0));
        assert_eq!(placement.menu, Vec2::ZERO);
    }

    #[test]
    fn divider_sits_on_the_content_edge() {
        let sliding = SlidingVariant::default();
        let divider = sliding.compute_divider_geometry(&layout(Position::Left, 100.0));
        assert_eq!(divider.rect, Rect::new(94.0, 0.0, 100.0, 2000.0));
        assert_eq!(divider.orientation, GradientOrientation::RightToLeft);

        let divider = sliding.compute_divider_geometry(&layout(Position::Bottom, -100.0));
        assert_eq!(divider.rect, Rect::new(0.0, 1900.0, 1000.0, 1906.0));
        assert_eq!(divider.orientation, GradientOrientation::TopToBottom);

        let overlay = OverlayVariant::default();
        let divider = overlay.compute_divider_geometry(&layout(Position::Left, 100.0));
        assert_eq!(divider.rect, Rect::new(100.0, 0.0, 106.0, 2000.0));
        assert_eq!(divider.orientation, GradientOrientation::LeftToRight);
    }

    #[test]
    fn overlay_alpha_tracks_open_ratio() {
        let mut surface = Surface::default();
        SlidingVariant::default().draw_overlay(&layout(Position::Left, 300.0), &mut surface);
        OverlayVariant::default().draw_overlay(&layout(Position::Left, 300.0), &mut surface);

        assert_eq!(surface.overlays[0], (Rect::new(0.0, 0.0, 300.0, 2000.0), 0.0));
        assert_eq!(
            surface.overlays[1],
            (Rect::new(300.0, 0.0, 1000.0, 2000.0), MAX_OVERLAY_ALPHA)
        );
    }

    #[test]
    fn shadow_fades_to_transparent() {
        assert_eq!(shadow_colors(0xFF00_0000), (0xFF00_0000, 0x0000_0000));
        assert_eq!(shadow_colors(0x80FF_8000), (0x80FF_8000, 0x00FF_8000));
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer itself.
//!
//! [`Drawer`] owns one of each component and routes host input through them:
//! pointer events go to the [`TouchGestureController`], commands and frame
//! ticks to the [`AnimationDriver`], and both end in [`OffsetModel::set_offset`].
//! Every whole-pixel offset change updates the variant placement, marks the
//! drawer for redraw, and reaches the [`TransformerBridge`]. Exactly one of the
//! gesture and the animation may move the offset at a time; see
//! [`DriverToken`].

use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Insets, Point, Size};
use smallvec::SmallVec;

use crate::animation::animation_duration;
use crate::offset::truncate;
use crate::variant::{VariantLayout, shadow_colors};
use crate::{
    ActiveDriver, AnimationDriver, ContainerRects, ContentPlacement, DraggableCheck, DrawerConfig,
    DrawerError, DrawerInfo, DrawerListener, DrawerState, DrawerStateMachine, DrawerTransformer,
    DrawerVariant, DriverToken, FrameRequest, FrameSource, GestureFrame, LayoutDirection,
    MarkupChild, MarkupSlots, MoveOutcome, OffsetChange, OffsetModel, OverlaySurface, Placement,
    Position, PositionResolver, ReleasePolicy, SavedState, StateTransition, TouchGestureController,
    TouchMode, TransformerBridge, UpOutcome, ViewComposition, WindowHost, create_variant,
};

/// Pending repeats of [`Drawer::peek_repeating`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PeekSchedule {
    interval_ms: u32,
    /// When the next peek is due and the wait it was scheduled with; `None`
    /// while a peek is running.
    due: Option<(u64, u32)>,
}

/// A slide-in drawer for host views of type `V`.
pub struct Drawer<V> {
    config: DrawerConfig,
    resolver: PositionResolver,
    offset: OffsetModel,
    machine: DrawerStateMachine,
    gestures: TouchGestureController<V>,
    animation: AnimationDriver,
    token: DriverToken,
    composition: ViewComposition<V>,
    bridge: TransformerBridge<V>,
    variant: Box<dyn DrawerVariant>,
    draggable: Option<Box<dyn DraggableCheck<V>>>,
    bounds: Size,
    placement: Placement,
    pending_restore: Option<SavedState>,
    peek_schedule: Option<PeekSchedule>,
    needs_redraw: bool,
}

impl<V> fmt::Debug for Drawer<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drawer")
            .field("state", &self.machine.state())
            .field("edge", &self.resolver.resolved())
            .field("offset", &self.offset.offset())
            .field("driver", &self.token.holder())
            .field("variant", &self.variant)
            .field("bounds", &self.bounds)
            .field("peek_schedule", &self.peek_schedule)
            .finish_non_exhaustive()
    }
}

impl<V: Clone> Drawer<V> {
    /// Builds a closed drawer.
    ///
    /// The layout direction starts as left-to-right; call
    /// [`set_layout_direction`](Self::set_layout_direction) before the first
    /// layout if the host differs.
    pub fn new(config: DrawerConfig) -> Result<Self, DrawerError> {
        if !config.menu_size.is_finite() || config.menu_size <= 0.0 {
            return Err(DrawerError::InvalidOptionValue {
                option: "menu_size",
                value: format!("{}", config.menu_size),
            });
        }
        let resolver = PositionResolver::new(config.position, LayoutDirection::Ltr);
        let edge = resolver.resolved();
        Ok(Self {
            resolver,
            offset: OffsetModel::new(config.menu_size, edge.offset_sign()),
            machine: DrawerStateMachine::default(),
            gestures: TouchGestureController::new(
                config.touch_mode,
                config.touch_bezel_size,
                config.touch_slop,
            ),
            animation: AnimationDriver::default(),
            token: DriverToken::default(),
            composition: ViewComposition::new(config.drag_mode),
            bridge: TransformerBridge::default(),
            variant: create_variant(config.drawer_type),
            draggable: None,
            bounds: Size::ZERO,
            placement: Placement::default(),
            pending_restore: None,
            peek_schedule: None,
            needs_redraw: true,
            config,
        })
    }

    // --- Views and window ---

    /// Attaches the drawer to the host window. Only the first call has an effect.
    pub fn attach(&mut self, host: &mut dyn WindowHost<V>) -> bool {
        self.composition.attach(host)
    }

    /// Installs the menu view, returning the detached previous one.
    pub fn set_menu_view(&mut self, view: V) -> SmallVec<[V; 1]> {
        let previous = self.composition.set_menu_view(view);
        let info = self.info();
        if let Some(menu) = self.composition.menu_view() {
            self.bridge.view_created(&info, menu);
        }
        previous
    }

    /// Installs the content view.
    ///
    /// See [`ViewComposition::set_content_view`] for window-mode delegation.
    pub fn set_content_view(&mut self, view: V) -> ContentPlacement<V> {
        self.composition.set_content_view(view)
    }

    /// Installs the children of drawer markup.
    ///
    /// Returns the content placement when the markup designated a content
    /// child.
    pub fn inflate(
        &mut self,
        children: Vec<MarkupChild<V>>,
    ) -> Result<Option<ContentPlacement<V>>, DrawerError> {
        let slots = MarkupSlots::from_children(children)?;
        if let Some(menu) = slots.menu {
            self.set_menu_view(menu);
        }
        Ok(slots.content.map(|content| self.set_content_view(content)))
    }

    /// The containers and their bookkeeping.
    #[must_use]
    pub fn composition(&self) -> &ViewComposition<V> {
        &self.composition
    }

    /// Applies window insets; see [`ViewComposition::fit_system_insets`].
    pub fn fit_system_insets(&mut self, insets: Insets) -> bool {
        self.composition
            .fit_system_insets(insets, self.resolver.resolved())
    }

    // --- Subscribers ---

    /// Replaces the transformer, returning the previous one.
    pub fn set_transformer(
        &mut self,
        transformer: Option<Box<dyn DrawerTransformer<V>>>,
    ) -> Option<Box<dyn DrawerTransformer<V>>> {
        self.bridge.set_transformer(transformer)
    }

    /// Replaces the state listener, returning the previous one.
    pub fn set_listener(
        &mut self,
        listener: Option<Box<dyn DrawerListener>>,
    ) -> Option<Box<dyn DrawerListener>> {
        self.bridge.set_listener(listener)
    }

    /// Replaces the draggability check used in [`TouchMode::Fullscreen`].
    pub fn set_draggable_check(&mut self, check: Option<Box<dyn DraggableCheck<V>>>) {
        self.draggable = check;
    }

    // --- Pointer input ---

    /// Handles a pointer down at `pos` over the views in `hit_path`, root first.
    ///
    /// An eligible down on an animating drawer stops the animation and starts
    /// dragging from the current offset. A further down while dragging is
    /// ignored and the current drag keeps going. Returns `true` if the drawer
    /// tracks the gesture.
    pub fn on_pointer_down(&mut self, pos: Point, hit_path: &[V], now_ms: u64) -> bool {
        if self.token.is_held_by(ActiveDriver::Gesture) {
            tracing::trace!(?pos, "extra pointer down during drag ignored");
            return true;
        }
        let frame = self.gesture_frame();
        if !self.gestures.accepts_down(pos, &frame) {
            if self.gestures.cancel() {
                self.release_drag(0.0, now_ms);
            }
            tracing::trace!(?pos, "pointer down not eligible for the drawer");
            return false;
        }
        let catch = self.token.is_held_by(ActiveDriver::Animation);
        self.gestures.on_down(pos, now_ms, &frame, hit_path, catch);
        if catch {
            tracing::trace!(offset = self.offset.offset(), "caught animating drawer");
            self.acquire(ActiveDriver::Gesture);
            let transition = self.machine.begin_drag();
            self.notify(transition);
        }
        true
    }

    /// Handles a pointer move. Returns `true` while the drawer is dragging.
    pub fn on_pointer_move(&mut self, pos: Point, now_ms: u64) -> bool {
        let frame = self.gesture_frame();
        let check = self
            .draggable
            .as_mut()
            .map(|check| &mut **check as &mut dyn DraggableCheck<V>);
        match self.gestures.on_move(pos, now_ms, &frame, check) {
            MoveOutcome::DragStarted { delta } => {
                self.acquire(ActiveDriver::Gesture);
                let transition = self.machine.begin_drag();
                self.notify(transition);
                self.apply_offset(self.offset.offset() + delta);
                true
            }
            MoveOutcome::Dragged { delta } => {
                self.apply_offset(self.offset.offset() + delta);
                true
            }
            MoveOutcome::Ignored | MoveOutcome::Pending | MoveOutcome::Vetoed => false,
        }
    }

    /// Handles a pointer up.
    ///
    /// Returns `true` if a drag ended. A tap-through changes nothing.
    pub fn on_pointer_up(&mut self, pos: Point, now_ms: u64) -> bool {
        let frame = self.gesture_frame();
        match self.gestures.on_up(pos, now_ms, &frame) {
            UpOutcome::Released { opening_velocity } => {
                self.release_drag(opening_velocity, now_ms);
                true
            }
            UpOutcome::TapThrough | UpOutcome::Ignored => false,
        }
    }

    /// Handles a cancelled pointer sequence like a release without velocity.
    pub fn on_pointer_cancel(&mut self, now_ms: u64) -> bool {
        if self.gestures.cancel() {
            self.release_drag(0.0, now_ms);
            true
        } else {
            false
        }
    }

    fn release_drag(&mut self, opening_velocity: f64, now_ms: u64) {
        self.token.release(ActiveDriver::Gesture);
        let open = self
            .config
            .release_policy
            .commits_open(self.offset.open_ratio(), opening_velocity);
        tracing::trace!(open, opening_velocity, "drag released");
        let transition = self.machine.release(open);
        self.notify(transition);
        let target = if open { self.offset.open_offset() } else { 0.0 };
        self.animate_offset_to(target, opening_velocity, true, now_ms);
    }

    // --- Commands ---

    /// Opens the drawer, animated or at once.
    pub fn open(&mut self, animate: bool, now_ms: u64) {
        self.gestures.cancel();
        let target = self.offset.open_offset();
        self.animate_offset_to(target, 0.0, animate, now_ms);
    }

    /// Closes the drawer, animated or at once.
    pub fn close(&mut self, animate: bool, now_ms: u64) {
        self.gestures.cancel();
        self.animate_offset_to(0.0, 0.0, animate, now_ms);
    }

    /// Closes an open or opening drawer, and opens a closed or closing one.
    ///
    /// Does nothing while dragging.
    pub fn toggle(&mut self, animate: bool, now_ms: u64) {
        match self.machine.state() {
            DrawerState::Open | DrawerState::Opening => self.close(animate, now_ms),
            DrawerState::Closed | DrawerState::Closing => self.open(animate, now_ms),
            DrawerState::Dragging => {}
        }
    }

    /// Briefly reveals a third of a closed menu and closes again.
    ///
    /// Returns `false` unless the drawer is closed. Replaces any pending
    /// [`peek_repeating`](Self::peek_repeating).
    pub fn peek(&mut self, now_ms: u64) -> bool {
        if self.machine.state() != DrawerState::Closed {
            return false;
        }
        self.peek_schedule = None;
        self.start_peek(now_ms);
        true
    }

    /// Peeks after `start_delay_ms`, then again `interval_ms` after each peek
    /// settles, until the drawer is dragged, opened, or closed.
    ///
    /// An `interval_ms` of zero peeks once. The waits are driven by
    /// [`on_frame`](Self::on_frame). Returns what the host should schedule
    /// first, or `None` unless the drawer is closed.
    pub fn peek_repeating(
        &mut self,
        start_delay_ms: u32,
        interval_ms: u32,
        now_ms: u64,
    ) -> Option<FrameRequest> {
        if self.machine.state() != DrawerState::Closed {
            return None;
        }
        tracing::debug!(start_delay_ms, interval_ms, "repeating peek scheduled");
        if start_delay_ms == 0 {
            self.peek_schedule = Some(PeekSchedule {
                interval_ms,
                due: None,
            });
            self.start_peek(now_ms);
            return Some(self.config.frame_source.request());
        }
        self.peek_schedule = Some(PeekSchedule {
            interval_ms,
            due: Some((now_ms + u64::from(start_delay_ms), start_delay_ms)),
        });
        Some(FrameRequest::After {
            delay_ms: start_delay_ms,
        })
    }

    fn start_peek(&mut self, now_ms: u64) {
        self.gestures.cancel();
        let peak = self.offset.open_offset() / 3.0;
        let leg_ms = animation_duration(
            peak,
            0.0,
            self.offset.menu_size(),
            self.config.max_animation_duration,
        );
        self.acquire(ActiveDriver::Animation);
        let transition = self.machine.animate(true);
        self.notify(transition);
        self.animation
            .peek(self.offset.offset(), peak, 0.0, leg_ms, now_ms);
    }

    /// Starts a scheduled peek once it is due.
    fn poll_peek_schedule(&mut self, now_ms: u64) -> Option<FrameRequest> {
        let Some((due_ms, _)) = self.peek_schedule?.due else {
            self.peek_schedule = None;
            return None;
        };
        if now_ms < due_ms {
            let delay_ms = u32::try_from(due_ms - now_ms).unwrap_or(u32::MAX);
            return Some(FrameRequest::After { delay_ms });
        }
        if self.machine.state() != DrawerState::Closed {
            self.peek_schedule = None;
            return None;
        }
        if let Some(schedule) = &mut self.peek_schedule {
            schedule.due = None;
        }
        self.start_peek(now_ms);
        Some(self.config.frame_source.request())
    }

    /// Schedules the next repeat after a peek settled.
    fn reschedule_peek(&mut self, now_ms: u64) -> Option<FrameRequest> {
        let interval_ms = self.peek_schedule?.interval_ms;
        if interval_ms == 0 || self.machine.state() != DrawerState::Closed {
            self.peek_schedule = None;
            return None;
        }
        self.peek_schedule = Some(PeekSchedule {
            interval_ms,
            due: Some((now_ms + u64::from(interval_ms), interval_ms)),
        });
        Some(FrameRequest::After {
            delay_ms: interval_ms,
        })
    }

    // --- Frames ---

    /// Advances a running animation to `now_ms`, or starts a repeating peek
    /// that has come due.
    ///
    /// Returns what the host should schedule next, or `None` once idle.
    pub fn on_frame(&mut self, now_ms: u64) -> Option<FrameRequest> {
        if !self.token.is_held_by(ActiveDriver::Animation) {
            return self.poll_peek_schedule(now_ms);
        }
        let was_peeking = self.animation.is_peeking();
        let Some(frame) = self.animation.tick(now_ms) else {
            self.token.release(ActiveDriver::Animation);
            return None;
        };
        self.apply_offset(frame.offset);
        if frame.finished {
            self.token.release(ActiveDriver::Animation);
            let transition = self.machine.settle(&self.offset);
            self.notify(transition);
            return self.reschedule_peek(now_ms);
        }
        if was_peeking && !self.animation.is_peeking() {
            let transition = self.machine.animate(false);
            self.notify(transition);
        }
        Some(self.config.frame_source.request())
    }

    /// The frame the host should schedule, if an animation is running or a
    /// repeating peek is waiting.
    ///
    /// A waiting peek asks for the whole wait it was scheduled with; calling
    /// [`on_frame`](Self::on_frame) early reports the remainder.
    #[must_use]
    pub fn frame_request(&self) -> Option<FrameRequest> {
        if self.animation.is_running() {
            return Some(self.config.frame_source.request());
        }
        let (_, delay_ms) = self.peek_schedule?.due?;
        Some(FrameRequest::After { delay_ms })
    }

    // --- Layout ---

    /// Applies a host layout direction change.
    ///
    /// If the resolved edge changes, the offset and any running animation
    /// are mirrored before this returns.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        let Some(flip) = self.resolver.set_layout_direction(direction) else {
            return;
        };
        tracing::debug!(from = ?flip.from, to = ?flip.to, "drawer edge flipped");
        self.animation.mirror();
        match self.offset.mirror() {
            Some(change) => self.on_offset_change(change),
            None => self.refresh_placement(),
        }
    }

    /// Lays out the drawer in `bounds`.
    ///
    /// Pending restored state is applied first.
    pub fn layout(&mut self, bounds: Size) -> ContainerRects {
        self.bounds = bounds;
        if let Some(saved) = self.pending_restore.take() {
            tracing::debug!(menu_open = saved.is_menu_open(), "applying restored drawer state");
            let target = if saved.is_menu_open() {
                self.offset.open_offset()
            } else {
                0.0
            };
            self.gestures.cancel();
            self.animate_offset_to(target, 0.0, false, 0);
        }
        self.refresh_placement();
        self.composition
            .layout(bounds, self.resolver.resolved(), self.offset.menu_size())
    }

    /// Changes the menu size, keeping an open drawer fully open.
    pub fn set_menu_size(&mut self, menu_size: f64, now_ms: u64) {
        if !menu_size.is_finite() || menu_size <= 0.0 {
            return;
        }
        self.config.menu_size = menu_size;
        if let Some(change) = self.offset.set_menu_size(menu_size) {
            self.on_offset_change(change);
        }
        match self.machine.state() {
            DrawerState::Open => {
                self.apply_offset(self.offset.open_offset());
            }
            DrawerState::Opening if self.animation.is_running() && !self.animation.is_peeking() => {
                self.animate_offset_to(self.offset.open_offset(), 0.0, true, now_ms);
            }
            _ => {}
        }
        self.refresh_placement();
    }

    // --- Options ---

    /// The live configuration.
    #[must_use]
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Sets where pointer downs may start a drag.
    pub fn set_touch_mode(&mut self, mode: TouchMode) {
        self.config.touch_mode = mode;
        self.gestures.set_touch_mode(mode);
    }

    /// Sets the bezel width for [`TouchMode::Bezel`].
    pub fn set_touch_bezel_size(&mut self, size: f64) {
        self.config.touch_bezel_size = size;
        self.gestures.set_bezel_size(size);
    }

    /// Sets the touch slop.
    pub fn set_touch_slop(&mut self, slop: f64) {
        self.config.touch_slop = slop;
        self.gestures.set_touch_slop(slop);
    }

    /// Sets the upper bound for animation durations.
    pub fn set_max_animation_duration(&mut self, duration_ms: u32) {
        self.config.max_animation_duration = duration_ms;
    }

    /// Enables or disables the dimming overlay.
    pub fn set_draw_overlay(&mut self, draw: bool) {
        self.config.draw_overlay = draw;
        self.needs_redraw = true;
    }

    /// Enables or disables the divider shadow.
    pub fn set_divider_enabled(&mut self, enabled: bool) {
        self.config.divider_enabled = enabled;
        self.needs_redraw = true;
    }

    /// Sets the divider thickness.
    pub fn set_divider_size(&mut self, size: f64) {
        self.config.divider_size = size.max(0.0);
        self.needs_redraw = true;
    }

    /// Sets the divider shadow colour, as `0xAARRGGBB`.
    pub fn set_divider_shadow_color(&mut self, color: u32) {
        self.config.divider_shadow_color = color;
        self.needs_redraw = true;
    }

    /// Sets whether a sliding menu trails the content.
    pub fn set_offset_menu(&mut self, offset_menu: bool) {
        self.config.offset_menu = offset_menu;
        self.refresh_placement();
    }

    /// Sets how released drags choose a direction.
    pub fn set_release_policy(&mut self, policy: ReleasePolicy) {
        self.config.release_policy = policy;
    }

    /// Sets how animation frames are requested.
    pub fn set_frame_source(&mut self, source: FrameSource) {
        self.config.frame_source = source;
    }

    // --- Persistence ---

    /// Captures the state to restore later.
    #[must_use]
    pub fn save_state(&self) -> SavedState {
        SavedState::new(matches!(
            self.machine.state(),
            DrawerState::Open | DrawerState::Opening
        ))
    }

    /// Captures the state as the host tears the drawer down.
    ///
    /// No transformer or listener callback fires after this.
    pub fn on_save_instance_state(&mut self) -> SavedState {
        self.bridge.begin_teardown();
        self.save_state()
    }

    /// Schedules `saved` to be applied at the start of the next layout.
    pub fn restore_state(&mut self, saved: SavedState) {
        tracing::debug!(menu_open = saved.is_menu_open(), "drawer state restore pending");
        self.pending_restore = Some(saved);
    }

    // --- Drawing ---

    /// Paints the overlay and divider for the current offset.
    pub fn draw(&mut self, surface: &mut dyn OverlaySurface) {
        self.needs_redraw = false;
        if !self.offset.is_menu_visible() {
            return;
        }
        let layout = self.variant_layout();
        if self.config.draw_overlay {
            self.variant.draw_overlay(&layout, surface);
        }
        if self.config.divider_enabled {
            let divider = self.variant.compute_divider_geometry(&layout);
            let (start, end) = shadow_colors(self.config.divider_shadow_color);
            surface.draw_divider(&divider, start, end);
        }
    }

    /// Returns `true` if something changed since the last [`draw`](Self::draw).
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Container translations for the current offset.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    // --- Queries ---

    /// Current state.
    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.machine.state()
    }

    /// Snapshot of the drawer as passed to callbacks.
    #[must_use]
    pub fn info(&self) -> DrawerInfo {
        DrawerInfo {
            state: self.machine.state(),
            position: self.resolver.resolved(),
            offset_px: self.offset.offset_px(),
            open_ratio: self.offset.open_ratio(),
            menu_size: self.offset.menu_size(),
        }
    }

    /// Current offset in pixels.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset.offset()
    }

    /// Current open ratio in `[0, 1]`.
    #[must_use]
    pub fn open_ratio(&self) -> f64 {
        self.offset.open_ratio()
    }

    /// Whether any part of the menu is visible.
    #[must_use]
    pub fn is_menu_visible(&self) -> bool {
        self.offset.is_menu_visible()
    }

    /// The resolved edge.
    #[must_use]
    pub fn position(&self) -> Position {
        self.resolver.resolved()
    }

    /// The component currently moving the offset.
    #[must_use]
    pub fn active_driver(&self) -> ActiveDriver {
        self.token.holder()
    }

    // --- Internals ---

    /// Hands the offset to `driver`, stopping whoever held it.
    fn acquire(&mut self, driver: ActiveDriver) {
        if driver == ActiveDriver::Gesture {
            self.peek_schedule = None;
        }
        match self.token.acquire(driver) {
            Some(ActiveDriver::Animation) => {
                self.animation.cancel();
            }
            Some(ActiveDriver::Gesture) => {
                self.gestures.cancel();
            }
            Some(ActiveDriver::Idle) | None => {}
        }
    }

    fn animate_offset_to(&mut self, target: f64, velocity: f64, animate: bool, now_ms: u64) {
        self.peek_schedule = None;
        let from = self.offset.offset();
        if !animate || truncate(from) == truncate(target) {
            self.acquire(ActiveDriver::Animation);
            self.animation.cancel();
            self.token.release(ActiveDriver::Animation);
            self.apply_offset(target);
            let transition = self.machine.settle(&self.offset);
            self.notify(transition);
            return;
        }
        let duration = animation_duration(
            target - from,
            velocity,
            self.offset.menu_size(),
            self.config.max_animation_duration,
        );
        self.acquire(ActiveDriver::Animation);
        let transition = self.machine.animate(target != 0.0);
        self.notify(transition);
        self.animation.animate_to(from, target, duration, now_ms);
        self.needs_redraw = true;
    }

    fn apply_offset(&mut self, offset: f64) {
        if let Some(change) = self.offset.set_offset(offset) {
            self.on_offset_change(change);
        }
    }

    fn on_offset_change(&mut self, change: OffsetChange) {
        self.composition
            .set_menu_visible(self.offset.is_menu_visible());
        self.refresh_placement();
        let info = self.info();
        self.bridge
            .slide(&info, change.open_ratio, change.offset_px);
    }

    fn notify(&mut self, transition: Option<StateTransition>) {
        if let Some(StateTransition { old, new }) = transition {
            let info = self.info();
            self.bridge.state_changed(&info, old, new);
        }
    }

    fn refresh_placement(&mut self) {
        let layout = self.variant_layout();
        self.placement = self.variant.on_offset_changed(&layout);
        self.needs_redraw = true;
    }

    fn variant_layout(&self) -> VariantLayout {
        VariantLayout {
            edge: self.resolver.resolved(),
            bounds: self.bounds,
            offset: f64::from(self.offset.offset_px()),
            menu_size: self.offset.menu_size(),
            divider_size: self.config.divider_size,
            offset_menu: self.config.offset_menu,
        }
    }

    fn gesture_frame(&self) -> GestureFrame {
        GestureFrame {
            edge: self.resolver.resolved(),
            bounds: self.bounds,
            offset: self.offset.offset(),
            menu_visible: self.offset.is_menu_visible(),
        }
    }
}

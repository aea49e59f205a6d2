// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for `understory_drawer`.
//!
//! These drive a [`Drawer`] the way a host would: layout, pointer events,
//! commands, and frame ticks, while recording what the transformer and the
//! overlay surface receive.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use understory_drawer::{
    ActiveDriver, DividerGeometry, DragMode, Drawer, DrawerConfig, DrawerInfo, DrawerState,
    DrawerTransformer, DrawerType, FrameRequest, GradientOrientation, LayoutDirection,
    MAX_OVERLAY_ALPHA, OverlaySurface, Position, SavedState, TouchMode, WindowHost,
};

#[derive(Clone, Debug, PartialEq)]
enum Event {
    Created(u32),
    Swiping(f64, i32),
    Completed,
    Reset,
}

type Log = Rc<RefCell<Vec<Event>>>;

struct Recorder(Log);

impl DrawerTransformer<u32> for Recorder {
    fn on_view_created(&mut self, _: &DrawerInfo, view: &u32) {
        self.0.borrow_mut().push(Event::Created(*view));
    }

    fn on_swiping(&mut self, _: &DrawerInfo, open_ratio: f64, offset_px: i32) {
        self.0.borrow_mut().push(Event::Swiping(open_ratio, offset_px));
    }

    fn on_completed(&mut self, _: &DrawerInfo) {
        self.0.borrow_mut().push(Event::Completed);
    }

    fn on_reset(&mut self, _: &DrawerInfo) {
        self.0.borrow_mut().push(Event::Reset);
    }
}

const BOUNDS: Size = Size::new(1080.0, 1920.0);

fn drawer_with(config: DrawerConfig) -> (Drawer<u32>, Log) {
    let log = Log::default();
    let mut drawer = Drawer::new(config).unwrap();
    drawer.set_transformer(Some(Box::new(Recorder(log.clone()))));
    drawer.layout(BOUNDS);
    (drawer, log)
}

fn config() -> DrawerConfig {
    DrawerConfig::default()
        .with_menu_size(300.0)
        .with_drag_mode(DragMode::Content)
}

fn settle(drawer: &mut Drawer<u32>, mut now: u64) -> u64 {
    while drawer.on_frame(now).is_some() {
        now += 16;
    }
    now
}

fn swipes(log: &Log) -> usize {
    log.borrow()
        .iter()
        .filter(|e| matches!(e, Event::Swiping(..)))
        .count()
}

#[test]
fn fullscreen_drag_to_half_then_release_opens() {
    let (mut drawer, log) = drawer_with(config().with_touch_mode(TouchMode::Fullscreen));

    assert!(drawer.on_pointer_down(Point::new(0.0, 800.0), &[], 0));
    assert!(drawer.on_pointer_move(Point::new(150.0, 800.0), 500));
    assert_eq!(drawer.state(), DrawerState::Dragging);
    assert_eq!(drawer.offset(), 150.0);
    assert_eq!(log.borrow()[0], Event::Swiping(0.5, 150));

    assert!(drawer.on_pointer_up(Point::new(150.0, 800.0), 600));
    assert_eq!(drawer.state(), DrawerState::Opening);
    let settled_at = settle(&mut drawer, 616);
    let max = u64::from(drawer.config().max_animation_duration);
    assert!(settled_at - 600 <= max + 16, "settled at {settled_at}");

    assert_eq!(drawer.state(), DrawerState::Open);
    assert_eq!(drawer.offset(), 300.0);
    assert_eq!(drawer.open_ratio(), 1.0);
    let log = log.borrow();
    assert_eq!(log.last(), Some(&Event::Completed));
    assert_eq!(log[log.len() - 2], Event::Swiping(1.0, 300));
    assert!(!log.contains(&Event::Reset));
}

fn second_down_during_drag(x: f64) {
    let (mut drawer, _log) = drawer_with(config().with_touch_mode(TouchMode::Bezel));

    assert!(drawer.on_pointer_down(Point::new(0.0, 800.0), &[], 0));
    assert!(drawer.on_pointer_move(Point::new(100.0, 800.0), 16));
    assert_eq!(drawer.state(), DrawerState::Dragging);

    drawer.on_pointer_down(Point::new(x, 800.0), &[], 32);
    assert_eq!(drawer.state(), DrawerState::Dragging);
    assert!(drawer.on_pointer_up(Point::new(100.0, 800.0), 400));
    assert_eq!(drawer.state(), DrawerState::Closing);
    assert!(drawer.on_frame(416).is_some());

    settle(&mut drawer, 432);
    assert_eq!(drawer.state(), DrawerState::Closed);
    assert_eq!(drawer.active_driver(), ActiveDriver::Idle);
    drawer.toggle(false, 1000);
    assert_eq!(drawer.state(), DrawerState::Open);
}

#[test]
fn second_down_on_the_menu_does_not_strand_the_drag() {
    second_down_during_drag(50.0);
}

#[test]
fn second_down_on_the_content_does_not_strand_the_drag() {
    second_down_during_drag(400.0);
}

#[test]
fn bezel_mode_refuses_downs_outside_the_bezel() {
    let (mut drawer, log) = drawer_with(
        config()
            .with_touch_mode(TouchMode::Bezel)
            .with_touch_bezel_size(24.0),
    );

    assert!(!drawer.on_pointer_down(Point::new(50.0, 800.0), &[], 0));
    assert!(!drawer.on_pointer_move(Point::new(250.0, 800.0), 50));
    assert!(!drawer.on_pointer_up(Point::new(250.0, 800.0), 100));
    assert_eq!(drawer.state(), DrawerState::Closed);
    assert_eq!(drawer.offset(), 0.0);
    assert!(log.borrow().is_empty());

    assert!(drawer.on_pointer_down(Point::new(20.0, 800.0), &[], 200));
    assert!(drawer.on_pointer_move(Point::new(120.0, 800.0), 250));
    assert_eq!(drawer.state(), DrawerState::Dragging);
}

#[test]
fn open_without_animation_swipes_once_and_completes_once() {
    let (mut drawer, log) = drawer_with(config());

    drawer.open(false, 0);

    assert_eq!(drawer.state(), DrawerState::Open);
    assert_eq!(drawer.frame_request(), None);
    assert_eq!(
        *log.borrow(),
        vec![Event::Swiping(1.0, 300), Event::Completed]
    );
}

#[test]
fn nothing_is_reported_after_teardown() {
    let (mut drawer, log) = drawer_with(config());
    let saved = drawer.on_save_instance_state();
    assert!(!saved.is_menu_open());

    drawer.open(false, 0);
    drawer.close(false, 0);
    drawer.toggle(false, 0);
    drawer.set_menu_view(9);
    drawer.on_pointer_down(Point::new(700.0, 800.0), &[], 10);
    drawer.on_pointer_move(Point::new(500.0, 800.0), 20);
    drawer.on_pointer_up(Point::new(500.0, 800.0), 30);
    let now = settle(&mut drawer, 40);
    drawer.peek(now);
    let now = settle(&mut drawer, now);
    drawer.set_layout_direction(LayoutDirection::Rtl);
    drawer.set_menu_size(200.0, now);
    drawer.restore_state(SavedState::default());
    drawer.layout(BOUNDS);

    assert!(log.borrow().is_empty());
    assert_eq!(drawer.state(), DrawerState::Closed);
}

#[test]
fn tap_through_changes_nothing() {
    let (mut drawer, log) = drawer_with(config());

    assert!(drawer.on_pointer_down(Point::new(500.0, 800.0), &[], 0));
    assert!(!drawer.on_pointer_move(Point::new(504.0, 803.0), 16));
    assert!(!drawer.on_pointer_up(Point::new(504.0, 803.0), 32));

    assert_eq!(drawer.state(), DrawerState::Closed);
    assert_eq!(drawer.offset(), 0.0);
    assert!(log.borrow().is_empty());
}

#[test]
fn sub_pixel_drag_steps_are_coalesced() {
    let (mut drawer, log) = drawer_with(config());

    drawer.on_pointer_down(Point::new(0.0, 800.0), &[], 0);
    drawer.on_pointer_move(Point::new(100.0, 800.0), 16);
    assert_eq!(swipes(&log), 1);

    for (x, now) in [(100.3, 20), (100.6, 21), (100.9, 22)] {
        drawer.on_pointer_move(Point::new(x, 800.0), now);
    }
    assert_eq!(swipes(&log), 1);

    drawer.on_pointer_move(Point::new(101.2, 800.0), 30);
    assert_eq!(swipes(&log), 2);
    assert_eq!(log.borrow()[1], Event::Swiping(101.0 / 300.0, 101));
}

#[test]
fn toggle_alternates_between_idle_states() {
    let (mut drawer, log) = drawer_with(config());

    drawer.toggle(false, 0);
    assert_eq!(drawer.state(), DrawerState::Open);
    drawer.toggle(false, 0);
    assert_eq!(drawer.state(), DrawerState::Closed);

    drawer.toggle(true, 0);
    assert_eq!(drawer.state(), DrawerState::Opening);
    drawer.on_frame(100);
    drawer.toggle(true, 100);
    assert_eq!(drawer.state(), DrawerState::Closing);
    settle(&mut drawer, 116);
    assert_eq!(drawer.state(), DrawerState::Closed);
    assert_eq!(log.borrow().last(), Some(&Event::Reset));
}

#[test]
fn direction_flip_mirrors_logical_edges_only() {
    let (mut drawer, log) = drawer_with(config().with_position(Position::Start));
    drawer.open(false, 0);
    assert_eq!(drawer.position(), Position::Left);

    drawer.set_layout_direction(LayoutDirection::Rtl);
    assert_eq!(drawer.position(), Position::Right);
    assert_eq!(drawer.offset(), -300.0);
    assert_eq!(drawer.state(), DrawerState::Open);
    assert_eq!(log.borrow().last(), Some(&Event::Swiping(1.0, -300)));

    // Same direction again: nothing to correct.
    drawer.set_layout_direction(LayoutDirection::Rtl);
    assert_eq!(drawer.offset(), -300.0);

    let (mut literal, _) = drawer_with(config().with_position(Position::Left));
    literal.open(false, 0);
    literal.set_layout_direction(LayoutDirection::Rtl);
    assert_eq!(literal.position(), Position::Left);
    assert_eq!(literal.offset(), 300.0);
}

#[test]
fn direction_flip_mid_animation_lands_on_the_new_edge() {
    let (mut drawer, _) = drawer_with(config().with_position(Position::End));
    assert_eq!(drawer.position(), Position::Right);
    drawer.open(true, 0);
    drawer.on_frame(100);
    assert!(drawer.offset() < 0.0);

    drawer.set_layout_direction(LayoutDirection::Rtl);
    assert!(drawer.offset() > 0.0);
    settle(&mut drawer, 116);
    assert_eq!(drawer.state(), DrawerState::Open);
    assert_eq!(drawer.offset(), 300.0);
}

#[test]
fn draggable_check_can_veto_a_fullscreen_drag() {
    let asked = Rc::new(RefCell::new(Vec::new()));
    let (mut drawer, log) = drawer_with(config());
    let record = asked.clone();
    drawer.set_draggable_check(Some(Box::new(
        move |view: &u32, delta: f64, x: f64, _y: f64| {
            record.borrow_mut().push((*view, delta, x));
            *view != 7
        },
    )));

    drawer.on_pointer_down(Point::new(400.0, 800.0), &[1, 7, 3], 0);
    assert!(!drawer.on_pointer_move(Point::new(460.0, 800.0), 16));
    assert!(!drawer.on_pointer_move(Point::new(600.0, 800.0), 32));
    assert_eq!(drawer.state(), DrawerState::Closed);
    assert!(log.borrow().is_empty());
    assert_eq!(*asked.borrow(), vec![(1, 60.0, 460.0), (7, 60.0, 460.0)]);

    drawer.on_pointer_up(Point::new(600.0, 800.0), 48);
    drawer.on_pointer_down(Point::new(400.0, 800.0), &[1, 3], 100);
    assert!(drawer.on_pointer_move(Point::new(460.0, 800.0), 116));
    assert_eq!(drawer.state(), DrawerState::Dragging);
}

#[derive(Default)]
struct Surface {
    overlays: Vec<(Rect, f64)>,
    dividers: Vec<(DividerGeometry, u32, u32)>,
}

impl OverlaySurface for Surface {
    fn fill_overlay(&mut self, rect: Rect, alpha: f64) {
        self.overlays.push((rect, alpha));
    }

    fn draw_divider(&mut self, divider: &DividerGeometry, start_color: u32, end_color: u32) {
        self.dividers.push((*divider, start_color, end_color));
    }
}

#[test]
fn overlay_drawer_paints_over_the_content() {
    let (mut drawer, _) = drawer_with(
        config()
            .with_position(Position::Left)
            .with_drawer_type(DrawerType::Overlay),
    );
    let mut surface = Surface::default();
    drawer.draw(&mut surface);
    assert!(surface.overlays.is_empty(), "closed drawer paints nothing");

    drawer.open(false, 0);
    assert!(drawer.needs_redraw());
    drawer.draw(&mut surface);
    assert!(!drawer.needs_redraw());

    assert_eq!(
        surface.overlays,
        vec![(Rect::new(300.0, 0.0, 1080.0, 1920.0), MAX_OVERLAY_ALPHA)]
    );
    let (divider, start, end) = surface.dividers[0];
    assert_eq!(divider.rect, Rect::new(300.0, 0.0, 306.0, 1920.0));
    assert_eq!(divider.orientation, GradientOrientation::LeftToRight);
    assert_eq!((start, end), (0xFF00_0000, 0x0000_0000));
}

#[test]
fn disabled_overlay_and_divider_paint_nothing() {
    let (mut drawer, _) = drawer_with(config());
    drawer.set_draw_overlay(false);
    drawer.set_divider_enabled(false);
    drawer.open(false, 0);

    let mut surface = Surface::default();
    drawer.draw(&mut surface);
    assert!(surface.overlays.is_empty());
    assert!(surface.dividers.is_empty());
}

#[derive(Default)]
struct Window {
    root: Vec<u32>,
    drawer_is_root: bool,
}

impl WindowHost<u32> for Window {
    fn take_root_children(&mut self) -> Vec<u32> {
        std::mem::take(&mut self.root)
    }

    fn install_drawer_as_root(&mut self) {
        self.drawer_is_root = true;
    }

    fn install_drawer_as_content(&mut self) {}
}

#[test]
fn window_mode_wraps_the_existing_root() {
    let mut drawer = Drawer::<u32>::new(DrawerConfig::default()).unwrap();
    let mut window = Window {
        root: vec![1, 2],
        ..Window::default()
    };

    assert!(drawer.attach(&mut window));
    assert!(!drawer.attach(&mut window));
    assert!(window.drawer_is_root);
    assert_eq!(drawer.composition().content_views(), &[1, 2]);
}

#[test]
fn menu_view_installs_are_announced() {
    let (mut drawer, log) = drawer_with(config());
    assert!(drawer.set_menu_view(4).is_empty());
    assert_eq!(drawer.set_menu_view(5).as_slice(), &[4]);
    assert_eq!(*log.borrow(), vec![Event::Created(4), Event::Created(5)]);
}

#[test]
fn saved_bytes_restore_an_open_drawer() {
    let (mut drawer, _) = drawer_with(config());
    drawer.open(false, 0);
    let bytes = drawer.save_state().to_bytes();

    let (mut restored, log) = drawer_with(config());
    restored.restore_state(SavedState::from_bytes(&bytes).unwrap());
    assert_eq!(restored.state(), DrawerState::Closed);
    restored.layout(BOUNDS);

    assert_eq!(restored.state(), DrawerState::Open);
    assert_eq!(restored.offset(), 300.0);
    assert_eq!(log.borrow().last(), Some(&Event::Completed));
}

#[cfg(feature = "serde")]
#[test]
fn config_and_saved_state_round_trip_through_json() {
    let config = config()
        .with_position(Position::Bottom)
        .with_drawer_type(DrawerType::Overlay);
    let json = serde_json::to_string(&config).unwrap();
    let back: DrawerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let partial: DrawerConfig = serde_json::from_str(r#"{"menu_size": 120.0}"#).unwrap();
    assert_eq!(partial.menu_size, 120.0);
    assert_eq!(partial.touch_mode, TouchMode::Fullscreen);

    let mut drawer = Drawer::<u32>::new(config).unwrap();
    drawer.open(false, 0);
    let json = serde_json::to_string(&drawer.save_state()).unwrap();
    let saved: SavedState = serde_json::from_str(&json).unwrap();
    assert!(saved.is_menu_open());
}

#[test]
fn dragging_stops_a_repeating_peek() {
    let (mut drawer, _log) = drawer_with(config());

    assert_eq!(
        drawer.peek_repeating(0, 300, 0),
        Some(FrameRequest::NextFrame)
    );
    assert_eq!(drawer.state(), DrawerState::Opening);

    assert!(drawer.on_pointer_down(Point::new(500.0, 800.0), &[], 50));
    assert_eq!(drawer.state(), DrawerState::Dragging);
    assert!(drawer.on_pointer_up(Point::new(500.0, 800.0), 100));
    let now = settle(&mut drawer, 116);

    assert_eq!(drawer.state(), DrawerState::Closed);
    assert_eq!(drawer.frame_request(), None);
    assert_eq!(drawer.on_frame(now + 1000), None);
    assert_eq!(drawer.offset(), 0.0);
}

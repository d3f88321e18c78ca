//! Application orchestration shell for the SideNav drawer.
//!
//! [`AppShell`] owns the navigation state and the drawer controller, routes
//! raw pointer input to the surface hit on press, and publishes a [`Frame`]
//! to its [`Renderer`] whenever either state changed.

mod clock;
mod config;
mod hit_path_tracker;
mod renderer;

pub use clock::Clock;
pub use config::{ShellConfig, DEFAULT_VIEWPORT, MENU_BUTTON_BOUNDS, NAV_BAR_HEIGHT};
pub use hit_path_tracker::{HitPathTracker, HitTarget};
pub use renderer::{Frame, Renderer};

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

use sidenav_core::{ConfigError, Destination, NavigationState, Subscription};
use sidenav_foundation::{
    DragEvent, DragGesture, EdgeSwipeGesture, Point, PointerEvent, PointerEventKind, PointerId,
    Rect, Size, TapGesture,
};
use sidenav_ui::{DragOutcome, DrawerController, DrawerMenu, MenuAction, MenuLayout};

pub struct AppShell<R>
where
    R: Renderer,
{
    renderer: R,
    config: ShellConfig,
    navigation: NavigationState,
    drawer: DrawerController,
    menu: DrawerMenu,
    menu_layout: MenuLayout,
    clock: Clock,
    cursor: Point,
    pointer_down: bool,
    /// Surface that received the current press. Move, Up and Cancel go there
    /// regardless of what lies under the cursor now.
    hit_path_tracker: HitPathTracker,
    drawer_drag: DragGesture,
    drawer_tap: TapGesture,
    edge_drag: DragGesture,
    edge_swipe: EdgeSwipeGesture,
    surface_tap: TapGesture,
    is_dirty: Rc<Cell<bool>>,
    frames_rendered: u64,
    on_logout: Option<Box<dyn FnMut()>>,
    _subscriptions: Vec<Subscription>,
}

impl<R> AppShell<R>
where
    R: Renderer,
    R::Error: Debug,
{
    /// Builds a shell driven by the wall clock and publishes the first frame.
    pub fn new(renderer: R, config: ShellConfig) -> Result<Self, ConfigError> {
        Self::with_clock(renderer, config, Clock::wall())
    }

    pub fn with_clock(renderer: R, config: ShellConfig, clock: Clock) -> Result<Self, ConfigError> {
        config.validate()?;
        let drawer = DrawerController::new(config.drawer)?;
        let navigation = NavigationState::new();
        let menu = DrawerMenu::standard();
        let menu_layout = menu.layout(config.drawer.width, config.viewport.height);
        let view_configuration = config.view_configuration;

        let is_dirty = Rc::new(Cell::new(true));
        let subscriptions = vec![
            {
                let is_dirty = Rc::clone(&is_dirty);
                drawer.subscribe(move |_| is_dirty.set(true))
            },
            {
                let is_dirty = Rc::clone(&is_dirty);
                navigation.subscribe(move |_| is_dirty.set(true))
            },
        ];

        let mut shell = Self {
            renderer,
            config,
            navigation,
            drawer,
            menu,
            menu_layout,
            clock,
            cursor: Point::ZERO,
            pointer_down: false,
            hit_path_tracker: HitPathTracker::new(),
            drawer_drag: DragGesture::new(&view_configuration),
            drawer_tap: TapGesture::new(view_configuration.touch_slop),
            edge_drag: DragGesture::with_minimum_distance(&view_configuration, 0.0),
            edge_swipe: EdgeSwipeGesture::new(&view_configuration),
            surface_tap: TapGesture::new(view_configuration.touch_slop),
            is_dirty,
            frames_rendered: 0,
            on_logout: None,
            _subscriptions: subscriptions,
        };
        shell.update();
        Ok(shell)
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn drawer(&self) -> &DrawerController {
        &self.drawer
    }

    pub fn menu(&self) -> &DrawerMenu {
        &self.menu
    }

    pub fn menu_layout(&self) -> &MenuLayout {
        &self.menu_layout
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Called when the footer's logout action is tapped, before the drawer
    /// closes.
    pub fn set_logout_handler(&mut self, handler: impl FnMut() + 'static) {
        self.on_logout = Some(Box::new(handler));
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        let config = ShellConfig {
            viewport: Size::new(width, height),
            ..self.config
        };
        config.validate()?;
        self.config = config;
        self.menu_layout = self.menu.layout(config.drawer.width, height);
        self.mark_dirty();
        Ok(())
    }

    /// Milliseconds since the shell started, per its clock.
    pub fn uptime_ms(&self) -> i64 {
        self.clock.uptime_ms()
    }

    /// Moves a manual clock forward. Ignored, with a warning, on the wall
    /// clock.
    pub fn advance_time(&mut self, millis: i64) {
        if !self.clock.advance(millis) {
            log::warn!("advance_time({millis}) ignored: shell runs on the wall clock");
        }
    }

    pub fn needs_redraw(&self) -> bool {
        self.is_dirty.get()
    }

    pub fn mark_dirty(&self) {
        self.is_dirty.set(true);
    }

    /// Publishes a frame when state changed since the last one.
    pub fn update(&mut self) {
        if !self.is_dirty.get() {
            return;
        }
        let frame = self.frame();
        if let Err(err) = self.renderer.render(&frame) {
            log::error!("render failed: {err:?}");
        }
        self.frames_rendered += 1;
        self.is_dirty.set(false);
    }

    /// Snapshot of what the renderer should show right now.
    pub fn frame(&self) -> Frame {
        let destination = self.navigation.current();
        let state = self.drawer.state();
        Frame {
            destination,
            title: destination.title(),
            drawer_open: state.is_open,
            drag_offset: state.drag_offset,
            overlay_opacity: self.drawer.overlay_opacity(),
            drawer_bounds: self.drawer_bounds(),
        }
    }

    /// Drawer surface in window coordinates, following the drag offset.
    pub fn drawer_bounds(&self) -> Option<Rect> {
        let state = self.drawer.state();
        state.is_open.then(|| {
            Rect::new(
                state.drag_offset,
                0.0,
                state.width,
                self.config.viewport.height,
            )
        })
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<HitTarget> {
        if !Rect::from_size(self.config.viewport).contains(x, y) {
            return None;
        }
        let target = match self.drawer_bounds() {
            Some(drawer) if drawer.contains(x, y) => HitTarget::Drawer,
            Some(_) => HitTarget::Overlay,
            None if self.config.menu_button.contains(x, y) => HitTarget::MenuButton,
            None => HitTarget::Content,
        };
        Some(target)
    }

    pub fn request_open(&self) {
        self.drawer.open();
    }

    pub fn request_close(&self) {
        self.drawer.close();
    }

    /// Menu button action.
    pub fn toggle_drawer(&self) {
        self.drawer.toggle();
    }

    /// Start of a gesture or tap. Clears a drag offset left behind by an
    /// abandoned gesture.
    pub fn interaction_started(&self) {
        self.drawer.on_interaction_started();
    }

    pub fn drag_changed(&self, translation_x: f32) {
        self.drawer.on_drag_changed(translation_x);
    }

    pub fn drag_ended(&self, translation_x: f32, predicted_translation_x: f32) -> DragOutcome {
        self.drawer.on_drag_ended(translation_x, predicted_translation_x)
    }

    /// Shows `destination` and closes the drawer.
    pub fn select_destination(&self, destination: Destination) {
        log::info!("navigating to {}", destination.slug());
        self.navigation.select(destination);
        self.request_close();
    }

    pub fn perform_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::Navigate(destination) => self.select_destination(destination),
            MenuAction::Logout => {
                log::info!("logout requested");
                if let Some(handler) = self.on_logout.as_mut() {
                    handler();
                }
                self.request_close();
            }
        }
    }

    pub fn set_cursor(&mut self, x: f32, y: f32) -> bool {
        self.cursor = Point::new(x, y);

        // While pressed, only the surface that received Down sees the move.
        if !self.pointer_down {
            return false;
        }
        let Some(target) = self.hit_path_tracker.get_path(PointerId::PRIMARY) else {
            return false;
        };
        let event = self.pointer_event(PointerEventKind::Move);
        self.dispatch(target, &event);
        true
    }

    pub fn pointer_pressed(&mut self) -> bool {
        self.pointer_down = true;
        let Some(target) = self.hit_test(self.cursor.x, self.cursor.y) else {
            return false;
        };
        self.hit_path_tracker
            .add_hit_path(PointerId::PRIMARY, target);
        log::trace!("pointer down on {target:?} at {:?}", self.cursor);
        self.interaction_started();
        let event = self.pointer_event(PointerEventKind::Down);
        self.dispatch(target, &event);
        true
    }

    pub fn pointer_released(&mut self) -> bool {
        self.pointer_down = false;
        // Always remove the path, even if nothing handles the release.
        let Some(target) = self.hit_path_tracker.remove_path(PointerId::PRIMARY) else {
            return false;
        };
        let event = self.pointer_event(PointerEventKind::Up);
        self.dispatch(target, &event);
        true
    }

    /// Abandons the active gesture without a drag end. Any drag offset stays
    /// until the next press clears it.
    pub fn cancel_gesture(&mut self) {
        let target = self.hit_path_tracker.get_path(PointerId::PRIMARY);
        self.hit_path_tracker.clear();
        self.pointer_down = false;

        if let Some(target) = target {
            log::debug!("gesture on {target:?} cancelled");
            let event = self.pointer_event(PointerEventKind::Cancel);
            self.dispatch(target, &event);
            self.mark_dirty();
        }
    }

    fn pointer_event(&self, kind: PointerEventKind) -> PointerEvent {
        PointerEvent::new(kind, self.cursor, self.clock.uptime_ms())
    }

    fn dispatch(&mut self, target: HitTarget, event: &PointerEvent) {
        match target {
            HitTarget::Drawer => self.dispatch_to_drawer(event),
            HitTarget::Overlay => {
                if self.surface_tap.on_event(event).is_some() {
                    self.request_close();
                }
            }
            HitTarget::MenuButton | HitTarget::Content => {
                self.dispatch_to_content(target, event)
            }
        }
    }

    fn dispatch_to_drawer(&mut self, event: &PointerEvent) {
        let was_dragging = self.drawer_drag.is_dragging();
        let tapped = self.drawer_tap.on_event(event);

        match self.drawer_drag.on_event(event) {
            Some(DragEvent::Changed(value)) => {
                self.drawer.on_drag_changed(value.translation.x);
            }
            Some(DragEvent::Ended(value)) => {
                self.drawer
                    .on_drag_ended(value.translation.x, value.predicted_end_translation_x);
            }
            Some(DragEvent::Cancelled) => {
                log::debug!("drawer drag abandoned at {}", self.drawer.drag_offset());
            }
            None => {}
        }

        if was_dragging {
            return;
        }
        if let Some(press) = tapped {
            match self.menu_layout.action_at(press.y) {
                Some(action) => self.perform_menu_action(action),
                None => log::trace!("tap at {press:?} hit no menu row"),
            }
        }
    }

    fn dispatch_to_content(&mut self, target: HitTarget, event: &PointerEvent) {
        let tapped = self.surface_tap.on_event(event);

        if let Some(DragEvent::Ended(value)) = self.edge_drag.on_event(event) {
            if !self.drawer.is_open() && self.edge_swipe.accepts(&value) {
                log::debug!(
                    "edge swipe from x={:.1} over {:.1}px",
                    value.start_location.x,
                    value.translation.x
                );
                self.request_open();
                return;
            }
        }

        if tapped.is_some() && target == HitTarget::MenuButton {
            self.toggle_drawer();
        }
    }
}

#[cfg(test)]
#[path = "tests/app_shell_tests.rs"]
mod tests;

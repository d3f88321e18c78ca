//! Robot testing framework for end-to-end shell testing
//!
//! Drives an [`AppShell`] on a manual clock with synthetic pointer input, so
//! gesture timing (and therefore fling velocity) is deterministic.
//!
//! # Example
//!
//! ```
//! use sidenav_testing::RobotTestRule;
//!
//! let mut robot = RobotTestRule::headless();
//! robot.swipe_from_edge(400.0, 120.0);
//! assert!(robot.last_frame().drawer_open);
//! ```

use std::fmt::Debug;

use sidenav_app_shell::{AppShell, Clock, Frame, Renderer, ShellConfig};
use sidenav_core::ConfigError;
use sidenav_foundation::Rect;
use sidenav_ui::MenuAction;

use crate::headless::HeadlessRenderer;

/// Time between two synthetic pointer moves.
pub const FRAME_MS: i64 = 16;

/// Pause before releasing a drag so the release carries no fling velocity.
pub const REST_MS: i64 = 100;

/// Where edge swipes start, inside the edge zone.
pub const EDGE_START_X: f32 = 5.0;

/// Programmatic control over a shell instance.
pub struct RobotTestRule<R = HeadlessRenderer>
where
    R: Renderer,
{
    shell: AppShell<R>,
}

impl RobotTestRule<HeadlessRenderer> {
    /// Shell with the default configuration and a recording renderer.
    pub fn headless() -> Self {
        Self::new(HeadlessRenderer::new(), ShellConfig::default())
            .expect("default shell config is valid")
    }

    pub fn headless_with_config(config: ShellConfig) -> Result<Self, ConfigError> {
        Self::new(HeadlessRenderer::new(), config)
    }

    /// Last frame the shell published.
    pub fn last_frame(&mut self) -> Frame {
        self.wait_for_idle();
        *self
            .shell
            .renderer()
            .last_frame()
            .expect("shell publishes a frame on construction")
    }

    pub fn frames(&self) -> &[Frame] {
        self.shell.renderer().frames()
    }
}

impl<R> RobotTestRule<R>
where
    R: Renderer,
    R::Error: Debug,
{
    pub fn new(renderer: R, config: ShellConfig) -> Result<Self, ConfigError> {
        let shell = AppShell::with_clock(renderer, config, Clock::manual())?;
        Ok(Self { shell })
    }

    pub fn shell(&self) -> &AppShell<R> {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut AppShell<R> {
        &mut self.shell
    }

    /// Frame reflecting the current state, whether or not it was published.
    pub fn current_frame(&self) -> Frame {
        self.shell.frame()
    }

    /// Advances the manual clock and publishes any pending frame.
    pub fn advance_time(&mut self, millis: i64) {
        self.shell.advance_time(millis);
        self.shell.update();
    }

    /// Pumps the shell until no frame is pending.
    pub fn wait_for_idle(&mut self) {
        for _ in 0..10 {
            self.shell.update();
            if !self.shell.needs_redraw() {
                break;
            }
        }
    }

    /// Press and release at one point.
    ///
    /// Returns true if the press landed on a surface of the shell.
    pub fn click_at(&mut self, x: f32, y: f32) -> bool {
        self.shell.set_cursor(x, y);
        let hit = self.shell.pointer_pressed();
        self.advance_time(FRAME_MS);
        self.shell.pointer_released();
        self.wait_for_idle();
        hit
    }

    pub fn mouse_move(&mut self, x: f32, y: f32) -> bool {
        self.shell.advance_time(FRAME_MS);
        let hit = self.shell.set_cursor(x, y);
        self.shell.update();
        hit
    }

    pub fn mouse_down(&mut self) -> bool {
        let hit = self.shell.pointer_pressed();
        self.shell.update();
        hit
    }

    pub fn mouse_up(&mut self) -> bool {
        let hit = self.shell.pointer_released();
        self.shell.update();
        hit
    }

    /// Slow drag: ten evenly spaced moves, then a rest before release so the
    /// gesture ends without velocity.
    pub fn drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        self.press_and_move(from_x, from_y, to_x, to_y, 10, FRAME_MS);
        self.advance_time(REST_MS);
        self.shell.pointer_released();
        self.wait_for_idle();
    }

    /// Fast horizontal drag over `duration_ms`, released while still moving.
    pub fn fling(&mut self, from_x: f32, y: f32, to_x: f32, duration_ms: i64) {
        let steps = 4;
        let step_ms = (duration_ms / steps as i64).max(1);
        self.press_and_move(from_x, y, to_x, y, steps, step_ms);
        self.shell.pointer_released();
        self.wait_for_idle();
    }

    /// Rightward swipe starting inside the leading edge zone.
    pub fn swipe_from_edge(&mut self, y: f32, distance: f32) {
        self.drag(EDGE_START_X, y, EDGE_START_X + distance, y);
    }

    /// Starts a drag and abandons it with a pointer cancel.
    pub fn cancel_drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        self.press_and_move(from_x, from_y, to_x, to_y, 5, FRAME_MS);
        self.shell.cancel_gesture();
        self.wait_for_idle();
    }

    pub fn tap_menu_button(&mut self) -> bool {
        let (x, y) = center(self.shell.config().menu_button);
        self.click_at(x, y)
    }

    /// Taps the dimmed area to the right of the drawer.
    pub fn tap_overlay(&mut self) -> bool {
        let config = self.shell.config();
        let x = (config.drawer.width + config.viewport.width) / 2.0;
        let y = config.viewport.height / 2.0;
        self.click_at(x, y)
    }

    /// Taps the drawer row bound to `action`. Returns false when the drawer
    /// is closed or the row is not laid out.
    pub fn tap_menu_action(&mut self, action: MenuAction) -> bool {
        let Some(drawer) = self.shell.drawer_bounds() else {
            return false;
        };
        let Some(row) = self.shell.menu_layout().row_for(action).map(|row| row.bounds) else {
            return false;
        };
        let (row_x, y) = center(row);
        self.click_at(drawer.x + row_x, y)
    }

    fn press_and_move(
        &mut self,
        from_x: f32,
        from_y: f32,
        to_x: f32,
        to_y: f32,
        steps: usize,
        step_ms: i64,
    ) {
        self.shell.set_cursor(from_x, from_y);
        self.shell.pointer_pressed();
        self.shell.update();

        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from_x + (to_x - from_x) * t;
            let y = from_y + (to_y - from_y) * t;
            self.shell.advance_time(step_ms);
            self.shell.set_cursor(x, y);
            self.shell.update();
        }
    }
}

fn center(rect: Rect) -> (f32, f32) {
    (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
}

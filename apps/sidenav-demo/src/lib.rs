//! Scripted drawer session used by the demo binary.

use std::convert::Infallible;

use anyhow::{bail, Context};
use sidenav_app_shell::{Frame, Renderer, ShellConfig};
use sidenav_core::Destination;
use sidenav_testing::RobotTestRule;
use sidenav_ui::MenuAction;

/// Renderer that logs every frame it is handed.
#[derive(Debug, Default)]
pub struct LoggingRenderer {
    frames: usize,
    last: Option<Frame>,
}

impl LoggingRenderer {
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last.as_ref()
    }
}

impl Renderer for LoggingRenderer {
    type Error = Infallible;

    fn render(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.frames += 1;
        if frame.drawer_open {
            log::info!(
                "frame {:>3}: {:<16} drawer open, offset {:>7.1}, overlay {:.3}",
                self.frames,
                frame.title,
                frame.drag_offset,
                frame.overlay_opacity
            );
        } else {
            log::info!("frame {:>3}: {:<16} drawer closed", self.frames, frame.title);
        }
        self.last = Some(*frame);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSummary {
    pub frames: usize,
    pub destination: Destination,
    pub drawer_open: bool,
}

/// Replays the demo session: edge swipe, partial drag, fling, menu button,
/// item selection, overlay tap and an optional final selection.
pub fn run_session(
    config: ShellConfig,
    finish_at: Option<Destination>,
) -> anyhow::Result<SessionSummary> {
    let mut robot = RobotTestRule::new(LoggingRenderer::default(), config)
        .context("invalid shell configuration")?;
    let height = config.viewport.height;
    let width = config.drawer.width;

    let header = robot.shell().menu().header();
    log::info!("drawer signed in as {} <{}>", header.name, header.email);

    log::info!("swipe from the leading edge");
    robot.swipe_from_edge(height / 2.0, 120.0);
    expect_open(&robot, true, "edge swipe")?;

    log::info!("drag the drawer partway and let go");
    robot.drag(width * 0.7, height / 2.0, width * 0.7 - 50.0, height / 2.0);
    expect_open(&robot, true, "partial drag")?;

    log::info!("flick the drawer away");
    robot.fling(width * 0.9, height / 2.0, width * 0.9 - 60.0, 60);
    expect_open(&robot, false, "fling")?;

    log::info!("open with the menu button and pick Friends");
    robot.tap_menu_button();
    robot.tap_menu_action(MenuAction::Navigate(Destination::Friends));
    expect_open(&robot, false, "menu selection")?;

    log::info!("open again and dismiss via the overlay");
    robot.tap_menu_button();
    robot.tap_overlay();
    expect_open(&robot, false, "overlay tap")?;

    if let Some(destination) = finish_at {
        log::info!("navigate to {}", destination.slug());
        robot.tap_menu_button();
        if !robot.tap_menu_action(MenuAction::Navigate(destination)) {
            bail!("no drawer row for {destination}");
        }
    }

    robot.wait_for_idle();
    let shell = robot.shell();
    Ok(SessionSummary {
        frames: shell.renderer().frames(),
        destination: shell.navigation().current(),
        drawer_open: shell.drawer().is_open(),
    })
}

fn expect_open(
    robot: &RobotTestRule<LoggingRenderer>,
    open: bool,
    step: &str,
) -> anyhow::Result<()> {
    let actual = robot.shell().drawer().is_open();
    if actual != open {
        bail!("after {step}: expected drawer open={open}, got {actual}");
    }
    Ok(())
}

//! End-to-end drawer behaviour driven through the robot harness.

use proptest::prelude::*;
use sidenav_app_shell::ShellConfig;
use sidenav_core::Destination;
use sidenav_foundation::Rect;
use sidenav_testing::robot_assertions::{
    assert_approx_eq, assert_destination, assert_drawer_closed, assert_drawer_open,
    assert_rect_approx_eq,
};
use sidenav_testing::RobotTestRule;
use sidenav_ui::{DrawerConfig, MenuAction};

fn open_robot() -> RobotTestRule {
    let mut robot = RobotTestRule::headless();
    assert!(robot.tap_menu_button());
    assert_drawer_open(&robot.last_frame(), "after menu button");
    robot
}

#[test]
fn starts_on_home_with_drawer_closed() {
    let mut robot = RobotTestRule::headless();
    let frame = robot.last_frame();
    assert_destination(&frame, Destination::Home, "initial frame");
    assert_drawer_closed(&frame, "initial frame");
    assert_eq!(robot.frames().len(), 1);
}

#[test]
fn edge_swipe_opens_drawer() {
    let mut robot = RobotTestRule::headless();
    robot.swipe_from_edge(400.0, 120.0);

    let frame = robot.last_frame();
    assert_drawer_open(&frame, "after edge swipe");
    let bounds = frame.drawer_bounds.expect("open drawer has bounds");
    assert_rect_approx_eq(
        bounds,
        Rect::new(0.0, 0.0, 280.0, 844.0),
        0.01,
        "drawer bounds",
    );
    assert_approx_eq(frame.overlay_opacity, 0.5, 0.001, "settled overlay");
}

#[test]
fn short_or_late_swipes_do_not_open() {
    let mut robot = RobotTestRule::headless();
    robot.swipe_from_edge(400.0, 40.0);
    assert_drawer_closed(&robot.last_frame(), "short swipe");

    robot.drag(60.0, 400.0, 300.0, 400.0);
    assert_drawer_closed(&robot.last_frame(), "swipe away from edge");
}

#[test]
fn partial_drag_snaps_back() {
    let mut robot = open_robot();

    robot.shell_mut().set_cursor(200.0, 400.0);
    robot.mouse_down();
    for step in 1..=5 {
        robot.mouse_move(200.0 - step as f32 * 10.0, 400.0);
    }
    let dragging = robot.last_frame();
    assert_approx_eq(dragging.drag_offset, -50.0, 0.001, "offset while dragging");
    assert_approx_eq(dragging.overlay_opacity, 0.411, 0.001, "overlay while dragging");

    robot.advance_time(100);
    robot.mouse_up();
    assert_drawer_open(&robot.last_frame(), "after release");
}

#[test]
fn drag_past_a_third_dismisses() {
    let mut robot = open_robot();
    robot.drag(250.0, 400.0, 130.0, 400.0);
    assert_drawer_closed(&robot.last_frame(), "after long drag");
}

#[test]
fn fling_dismisses_short_drag() {
    let mut robot = open_robot();
    robot.fling(250.0, 400.0, 190.0, 60);
    assert_drawer_closed(&robot.last_frame(), "after fling");
}

#[test]
fn slow_short_drag_does_not_dismiss() {
    let mut robot = open_robot();
    robot.drag(250.0, 400.0, 190.0, 400.0);
    assert_drawer_open(&robot.last_frame(), "after slow drag");
}

#[test]
fn overlay_tap_closes() {
    let mut robot = open_robot();
    assert!(robot.tap_overlay());
    assert_drawer_closed(&robot.last_frame(), "after overlay tap");
}

#[test]
fn menu_button_is_covered_while_open() {
    let mut robot = open_robot();
    // The drawer panel sits above the button; the tap lands on the header.
    assert!(robot.tap_menu_button());
    assert_drawer_open(&robot.last_frame(), "header tap");
}

#[test]
fn selecting_menu_item_navigates_and_closes() {
    let mut robot = open_robot();
    assert!(robot.tap_menu_action(MenuAction::Navigate(Destination::Friends)));

    let frame = robot.last_frame();
    assert_destination(&frame, Destination::Friends, "after selection");
    assert_drawer_closed(&frame, "after selection");
}

#[test]
fn every_destination_is_reachable_from_the_drawer() {
    let mut robot = RobotTestRule::headless();
    for destination in Destination::ALL {
        robot.tap_menu_button();
        assert!(
            robot.tap_menu_action(MenuAction::Navigate(destination)),
            "no row for {destination}"
        );
        let frame = robot.last_frame();
        assert_destination(&frame, destination, "drawer navigation");
        assert_drawer_closed(&frame, "drawer navigation");
    }
}

#[test]
fn logout_closes_and_keeps_destination() {
    let mut robot = open_robot();
    assert!(robot.tap_menu_action(MenuAction::Navigate(Destination::Settings)));
    robot.tap_menu_button();
    assert!(robot.tap_menu_action(MenuAction::Logout));

    let frame = robot.last_frame();
    assert_destination(&frame, Destination::Settings, "after logout");
    assert_drawer_closed(&frame, "after logout");
}

#[test]
fn menu_actions_need_an_open_drawer() {
    let mut robot = RobotTestRule::headless();
    assert!(!robot.tap_menu_action(MenuAction::Logout));
}

#[test]
fn cancelled_drag_is_reset_by_next_press() {
    let mut robot = open_robot();
    robot.cancel_drag(200.0, 400.0, 140.0, 400.0);

    let stale = robot.last_frame();
    assert!(stale.drawer_open);
    assert_approx_eq(stale.drag_offset, -60.0, 0.001, "stale offset");

    robot.shell_mut().set_cursor(100.0, 400.0);
    robot.mouse_down();
    robot.mouse_move(90.0, 400.0);
    assert_approx_eq(robot.last_frame().drag_offset, -10.0, 0.001, "fresh drag");
    robot.advance_time(100);
    robot.mouse_up();
    assert_drawer_open(&robot.last_frame(), "after fresh drag");
}

#[test]
fn header_tap_clears_offset_of_cancelled_drag() {
    let mut robot = open_robot();
    robot.cancel_drag(200.0, 400.0, 140.0, 400.0);
    assert_approx_eq(robot.last_frame().drag_offset, -60.0, 0.001, "stale offset");

    assert!(robot.click_at(100.0, 40.0));
    let frame = robot.last_frame();
    assert_drawer_open(&frame, "after header tap");
    assert_approx_eq(frame.drag_offset, 0.0, 0.001, "offset after header tap");
    assert_approx_eq(frame.overlay_opacity, 0.5, 0.001, "overlay after header tap");
}

#[test]
fn footer_works_on_a_very_short_viewport() {
    let config = ShellConfig::default().with_viewport(390.0, 150.0);
    let mut robot = RobotTestRule::headless_with_config(config).expect("valid config");

    robot.tap_menu_button();
    assert!(robot.tap_menu_action(MenuAction::Navigate(Destination::Help)));
    assert_destination(&robot.last_frame(), Destination::Help, "short viewport help");

    robot.tap_menu_button();
    assert!(robot.tap_menu_action(MenuAction::Logout));
    assert_drawer_closed(&robot.last_frame(), "short viewport logout");
}

#[test]
fn narrow_drawer_scales_thresholds() {
    let config = ShellConfig::default().with_drawer(DrawerConfig::default().with_width(240.0));
    let mut robot = RobotTestRule::headless_with_config(config).expect("valid config");
    robot.tap_menu_button();

    // 85px clears a third of 240 but not of the default 280.
    robot.drag(200.0, 400.0, 115.0, 400.0);
    assert_drawer_closed(&robot.last_frame(), "narrow drawer");
}

#[test]
fn invalid_config_is_rejected() {
    let config = ShellConfig::default().with_viewport(0.0, 844.0);
    assert!(RobotTestRule::headless_with_config(config).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn published_offsets_stay_within_drawer(
        start_x in 20.0f32..270.0,
        moves in prop::collection::vec(-400.0f32..400.0, 1..12),
    ) {
        let mut robot = open_robot();
        robot.shell_mut().set_cursor(start_x, 400.0);
        robot.mouse_down();
        let mut x = start_x;
        for delta in moves {
            x += delta;
            robot.mouse_move(x, 400.0);
            let frame = robot.last_frame();
            prop_assert!(frame.drag_offset <= 0.0);
            prop_assert!(frame.drag_offset >= -280.0);
            prop_assert!((0.0..=0.5).contains(&frame.overlay_opacity));
        }
        robot.mouse_up();
        let settled = robot.last_frame();
        prop_assert_eq!(settled.drag_offset, 0.0);
    }
}

use crate::input::gestures::{DragEvent, DragGesture, EdgeSwipeGesture, TapGesture};
use crate::input::types::PointerEvent;
use crate::view_configuration::ViewConfiguration;

fn drag_through(gesture: &mut DragGesture, events: &[PointerEvent]) -> Vec<DragEvent> {
    events
        .iter()
        .filter_map(|event| gesture.on_event(event))
        .collect()
}

#[test]
fn drag_waits_for_touch_slop() {
    let config = ViewConfiguration::default();
    let mut gesture = DragGesture::new(&config);

    let events = drag_through(
        &mut gesture,
        &[
            PointerEvent::down(200.0, 300.0, 0),
            PointerEvent::moved(195.0, 300.0, 16),
        ],
    );
    assert!(events.is_empty());
    assert!(gesture.is_pressed());
    assert!(!gesture.is_dragging());

    let events = drag_through(&mut gesture, &[PointerEvent::moved(180.0, 300.0, 32)]);
    match events.as_slice() {
        [DragEvent::Changed(value)] => {
            assert_eq!(value.translation.x, -20.0);
            assert_eq!(value.start_location.x, 200.0);
        }
        other => panic!("unexpected events {:?}", other),
    }
    assert!(gesture.is_dragging());
}

#[test]
fn release_inside_slop_is_not_a_drag() {
    let config = ViewConfiguration::default();
    let mut gesture = DragGesture::new(&config);

    let events = drag_through(
        &mut gesture,
        &[
            PointerEvent::down(100.0, 100.0, 0),
            PointerEvent::moved(103.0, 101.0, 10),
            PointerEvent::up(103.0, 101.0, 20),
        ],
    );
    assert!(events.is_empty());
    assert!(!gesture.is_pressed());
}

#[test]
fn zero_minimum_distance_starts_on_press() {
    let config = ViewConfiguration::default();
    let mut gesture = DragGesture::with_minimum_distance(&config, 0.0);

    let events = drag_through(
        &mut gesture,
        &[
            PointerEvent::down(5.0, 400.0, 0),
            PointerEvent::up(5.0, 400.0, 50),
        ],
    );
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], DragEvent::Changed(_)));
    match events[1] {
        DragEvent::Ended(value) => assert_eq!(value.translation.x, 0.0),
        other => panic!("expected end, got {:?}", other),
    }
}

#[test]
fn slow_release_predicts_close_to_translation() {
    let config = ViewConfiguration::default();
    let mut gesture = DragGesture::new(&config);

    let mut events = vec![PointerEvent::down(250.0, 300.0, 0)];
    for step in 1..=10 {
        events.push(PointerEvent::moved(250.0 - step as f32 * 5.0, 300.0, step * 16));
    }
    // Finger rests before lifting, so there is no fling.
    events.push(PointerEvent::up(200.0, 300.0, 160 + 100));

    let ended = drag_through(&mut gesture, &events)
        .into_iter()
        .find_map(|event| match event {
            DragEvent::Ended(value) => Some(value),
            _ => None,
        })
        .expect("drag should end");

    assert_eq!(ended.translation.x, -50.0);
    assert_eq!(ended.velocity_x, 0.0);
    assert_eq!(ended.predicted_end_translation_x, -50.0);
}

#[test]
fn quick_flick_predicts_far_beyond_translation() {
    let config = ViewConfiguration::default();
    let mut gesture = DragGesture::new(&config);

    let ended = drag_through(
        &mut gesture,
        &[
            PointerEvent::down(250.0, 300.0, 0),
            PointerEvent::moved(240.0, 300.0, 5),
            PointerEvent::moved(230.0, 300.0, 10),
            PointerEvent::moved(220.0, 300.0, 15),
            PointerEvent::up(220.0, 300.0, 15),
        ],
    )
    .into_iter()
    .find_map(|event| match event {
        DragEvent::Ended(value) => Some(value),
        _ => None,
    })
    .expect("drag should end");

    assert_eq!(ended.translation.x, -30.0);
    assert!(ended.velocity_x < -1_000.0, "velocity {}", ended.velocity_x);
    assert!(
        ended.predicted_end_translation_x < -186.7,
        "predicted {}",
        ended.predicted_end_translation_x
    );
}

#[test]
fn cancel_after_drag_start_reports_cancelled() {
    let config = ViewConfiguration::default();
    let mut gesture = DragGesture::new(&config);

    let events = drag_through(
        &mut gesture,
        &[
            PointerEvent::down(250.0, 300.0, 0),
            PointerEvent::moved(200.0, 300.0, 16),
            PointerEvent::cancel(200.0, 300.0, 32),
        ],
    );
    assert_eq!(events.last(), Some(&DragEvent::Cancelled));
    assert!(!gesture.is_pressed());
}

#[test]
fn move_without_press_is_ignored() {
    let config = ViewConfiguration::default();
    let mut gesture = DragGesture::new(&config);
    assert_eq!(gesture.on_event(&PointerEvent::moved(10.0, 10.0, 0)), None);
    assert_eq!(gesture.on_event(&PointerEvent::up(10.0, 10.0, 0)), None);
}

#[test]
fn tap_within_slop() {
    let mut tap = TapGesture::new(8.0);
    assert_eq!(tap.on_event(&PointerEvent::down(30.0, 20.0, 0)), None);
    assert_eq!(tap.on_event(&PointerEvent::moved(33.0, 22.0, 10)), None);
    let tapped = tap.on_event(&PointerEvent::up(33.0, 22.0, 20));
    assert_eq!(tapped.map(|point| point.x), Some(30.0));
}

#[test]
fn tap_cancelled_by_large_move() {
    let mut tap = TapGesture::new(8.0);
    tap.on_event(&PointerEvent::down(30.0, 20.0, 0));
    tap.on_event(&PointerEvent::moved(60.0, 20.0, 10));
    assert_eq!(tap.on_event(&PointerEvent::up(30.0, 20.0, 20)), None);
}

#[test]
fn edge_swipe_bounds_are_strict() {
    let config = ViewConfiguration::default();
    let edge = EdgeSwipeGesture::new(&config);
    let mut gesture = DragGesture::with_minimum_distance(&config, 0.0);

    let mut swipe = |start_x: f32, end_x: f32| {
        let events = drag_through(
            &mut gesture,
            &[
                PointerEvent::down(start_x, 400.0, 0),
                PointerEvent::moved(end_x, 400.0, 100),
                PointerEvent::up(end_x, 400.0, 200),
            ],
        );
        match events.last() {
            Some(DragEvent::Ended(value)) => edge.accepts(value),
            _ => false,
        }
    };

    assert!(swipe(5.0, 120.0));
    assert!(swipe(19.9, 70.0));
    assert!(!swipe(20.0, 120.0));
    assert!(!swipe(5.0, 55.0));
    assert!(!swipe(5.0, 2.0));
}

//! Host-driven routing scenarios: raw touches plus recognitions reported by
//! the host toolkit's own gesture recognisers.

use ontouch_foundation::{LongPressPhase, Size, TouchEventKind, TouchEventKinds, TouchOptions};
use ontouch_testing::{Delivery, TouchRobot};

use TouchEventKind::*;

fn bounded_robot(kinds: impl Into<TouchEventKinds>) -> TouchRobot {
    TouchRobot::new(
        Size::new(100.0, 100.0),
        TouchOptions::new(kinds).limit_to_bounds(true),
    )
}

#[test]
fn filtered_touch_sequence_with_host_tap() {
    let mut robot = bounded_robot(Started | Ended | TapGesture);

    robot.press(10.0, 10.0);
    robot.move_to(50.0, 50.0);
    robot.release_at(90.0, 90.0);
    robot.host_tap(90.0, 90.0);

    assert_eq!(
        robot.deliveries(),
        vec![
            Delivery::new(10.0, 10.0, Started),
            Delivery::new(90.0, 90.0, Ended),
            Delivery::new(90.0, 90.0, TapGesture),
        ]
    );
}

#[test]
fn release_outside_bounds_is_not_delivered() {
    let mut robot = bounded_robot(Started | Ended | TapGesture);

    robot.press(10.0, 10.0);
    robot.move_to(50.0, 50.0);
    robot.release_at(150.0, 150.0);

    assert_eq!(robot.deliveries(), vec![Delivery::new(10.0, 10.0, Started)]);
}

#[test]
fn host_long_press_phases_in_order() {
    let mut robot = TouchRobot::new(Size::new(100.0, 100.0), TouchOptions::default());

    robot.host_long_press(5.0, 5.0, LongPressPhase::Began);
    robot.host_long_press(6.0, 6.0, LongPressPhase::Changed);
    robot.host_long_press(7.0, 7.0, LongPressPhase::Changed);
    robot.host_long_press(7.0, 7.0, LongPressPhase::Ended);

    assert_eq!(
        robot.deliveries(),
        vec![
            Delivery::new(5.0, 5.0, LongGestureStarted),
            Delivery::new(6.0, 6.0, LongGestureMoved),
            Delivery::new(7.0, 7.0, LongGestureMoved),
            Delivery::new(7.0, 7.0, LongGestureEnded),
        ]
    );
}

#[test]
fn cancelled_host_long_press_is_delivered_as_ended() {
    let mut robot = TouchRobot::new(
        Size::new(100.0, 100.0),
        TouchOptions::new(TouchEventKinds::LONG_GESTURE),
    );

    robot.host_long_press(20.0, 20.0, LongPressPhase::Began);
    robot.host_long_press(25.0, 20.0, LongPressPhase::Cancelled);
    robot.host_long_press(30.0, 30.0, LongPressPhase::Began);
    robot.host_long_press(30.0, 30.0, LongPressPhase::Failed);

    assert_eq!(
        robot.kinds(),
        vec![
            LongGestureStarted,
            LongGestureEnded,
            LongGestureStarted,
            LongGestureEnded
        ]
    );
}

#[test]
fn host_recognitions_need_their_detector() {
    let mut robot = TouchRobot::new(
        Size::new(100.0, 100.0),
        TouchOptions::new(TouchEventKinds::ALL_WITHOUT_LONG_GESTURE),
    );

    robot.host_long_press(5.0, 5.0, LongPressPhase::Began);
    robot.host_tap(5.0, 5.0);
    assert_eq!(robot.kinds(), vec![TapGesture]);

    robot.set_filter(TouchEventKinds::ALL_WITHOUT_GESTURES);
    robot.host_tap(5.0, 5.0);
    assert_eq!(robot.kinds(), vec![TapGesture]);
}

#[test]
fn delivered_points_are_rounded() {
    let mut robot = TouchRobot::new(Size::new(100.0, 100.0), TouchOptions::default());

    robot.press(10.4, 10.5);
    robot.move_to(49.49, 50.51);
    robot.host_tap(-0.6, 99.5);

    assert_eq!(
        robot.deliveries(),
        vec![
            Delivery::new(10.0, 11.0, Started),
            Delivery::new(10.0, 11.0, FirstTouch),
            Delivery::new(49.0, 51.0, Moved),
            Delivery::new(-1.0, 100.0, TapGesture),
        ]
    );
}

#[test]
fn bounds_check_uses_the_unrounded_point() {
    let mut robot = bounded_robot(Moved);

    robot.move_to(100.4, 50.0);
    robot.move_to(100.0, 50.0);
    robot.move_to(99.6, 50.0);

    assert_eq!(robot.deliveries(), vec![Delivery::new(100.0, 50.0, Moved)]);
}

#[test]
fn cancelled_touch_looks_like_a_release() {
    let mut robot = TouchRobot::new(
        Size::new(100.0, 100.0),
        TouchOptions::new(TouchEventKinds::ALL_WITHOUT_GESTURES),
    );

    robot.press(10.0, 10.0);
    robot.cancel();

    assert_eq!(robot.kinds(), vec![Started, FirstTouch, Ended]);
}

#[test]
fn secondary_touches_are_ignored() {
    use ontouch_foundation::PointerPhase;

    let mut robot = TouchRobot::new(
        Size::new(100.0, 100.0),
        TouchOptions::new(Started | Moved | Ended),
    );

    robot.touches(PointerPhase::Start, &[(1, 10.0, 10.0), (2, 80.0, 80.0)]);
    robot.touches(PointerPhase::Move, &[(1, 12.0, 10.0), (2, 82.0, 80.0)]);
    robot.touches(PointerPhase::End, &[(1, 12.0, 10.0), (2, 82.0, 80.0)]);

    assert_eq!(
        robot.deliveries(),
        vec![
            Delivery::new(10.0, 10.0, Started),
            Delivery::new(12.0, 10.0, Moved),
            Delivery::new(12.0, 10.0, Ended),
        ]
    );
}

#[test]
fn filter_change_applies_to_the_next_event() {
    let mut robot = TouchRobot::new(Size::new(100.0, 100.0), TouchOptions::new(Started));

    robot.press(1.0, 1.0);
    robot.set_filter(Ended);
    robot.release();
    robot.press(2.0, 2.0);

    assert_eq!(
        robot.deliveries(),
        vec![
            Delivery::new(1.0, 1.0, Started),
            Delivery::new(1.0, 1.0, Ended)
        ]
    );
}

#[test]
fn resized_surface_moves_the_bounds() {
    let mut robot = bounded_robot(Started);

    robot.press(150.0, 150.0);
    robot.release();
    robot.set_size(200.0, 200.0);
    robot.press(150.0, 150.0);

    assert_eq!(robot.deliveries(), vec![Delivery::new(150.0, 150.0, Started)]);
}

#[test]
fn detached_surface_receives_nothing_more() {
    let mut robot = TouchRobot::new(Size::new(100.0, 100.0), TouchOptions::default());

    robot.press(10.0, 10.0);
    robot.detach();
    robot.release();
    robot.host_tap(10.0, 10.0);
    robot.host_long_press(10.0, 10.0, LongPressPhase::Began);

    assert_eq!(robot.kinds(), vec![Started, FirstTouch]);
    assert!(!robot.router().is_attached(robot.surface()));
}

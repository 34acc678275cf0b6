// Integration tests for the playback controller and the projector

use std::time::{Duration, Instant};

use algoscope::playback::{PlaybackController, PlaybackState};
use algoscope::project;
use algoscope::runners::{self, AlgorithmId, RunInput};
use algoscope::step::Step;

fn bubble_steps() -> Vec<Step> {
    runners::run(AlgorithmId::BubbleSort, &RunInput::Array(vec![5, 3, 8, 1]))
        .expect("run failed")
}

fn loaded_controller() -> PlaybackController {
    let mut controller = PlaybackController::new();
    controller.load(bubble_steps());
    controller
}

#[test]
fn test_load_rewinds_to_the_first_step() {
    let controller = loaded_controller();
    assert_eq!(controller.state(), PlaybackState::Ready);
    assert_eq!(controller.position(), 0);
    assert!(controller.len() > 1);
    assert!(controller.current_step().is_some());
}

#[test]
fn test_empty_controller_ignores_every_command() {
    let mut controller = PlaybackController::new();
    assert_eq!(controller.state(), PlaybackState::Idle);

    controller.play();
    assert_eq!(controller.state(), PlaybackState::Idle);

    controller.step_forward(3);
    controller.step_backward(3);
    controller.jump_to(7);
    controller.reset();
    assert_eq!(controller.position(), 0);
    assert_eq!(controller.state(), PlaybackState::Idle);
    assert!(controller.current_step().is_none());
}

#[test]
fn test_stepping_is_clamped_at_both_ends() {
    let mut controller = loaded_controller();
    let last = controller.len() - 1;

    controller.step_backward(5);
    assert_eq!(controller.position(), 0);

    controller.step_forward(controller.len() + 100);
    assert_eq!(controller.position(), last);
    assert_eq!(controller.state(), PlaybackState::Finished);

    controller.step_forward(1);
    assert_eq!(controller.position(), last, "stays parked on the last step");
}

#[test]
fn test_jump_to_is_clamped() {
    let mut controller = loaded_controller();
    controller.jump_to(usize::MAX);
    assert_eq!(controller.position(), controller.len() - 1);

    controller.jump_to(2);
    assert_eq!(controller.position(), 2);
    assert_eq!(controller.state(), PlaybackState::Ready);
}

#[test]
fn test_double_play_is_a_no_op() {
    let mut controller = loaded_controller();
    controller.play();
    assert_eq!(controller.state(), PlaybackState::Playing);
    controller.play();
    assert_eq!(controller.state(), PlaybackState::Playing);
    assert_eq!(controller.position(), 0, "play alone never moves the cursor");
}

#[test]
fn test_pause_and_resume() {
    let mut controller = loaded_controller();
    controller.play();
    controller.pause();
    assert_eq!(controller.state(), PlaybackState::Ready);
    controller.toggle_play();
    assert_eq!(controller.state(), PlaybackState::Playing);
    controller.toggle_play();
    assert_eq!(controller.state(), PlaybackState::Ready);
}

#[test]
fn test_tick_at_advances_one_step_per_interval() {
    let mut controller = loaded_controller();
    controller.set_speed(100);
    let interval = controller.interval();
    controller.play();

    let t0 = Instant::now();
    controller.tick_at(t0);
    assert_eq!(controller.position(), 0, "the first tick only starts the clock");

    controller.tick_at(t0 + interval);
    assert_eq!(controller.position(), 1);

    controller.tick_at(t0 + interval + interval / 2);
    assert_eq!(controller.position(), 1, "half an interval is not enough");

    controller.tick_at(t0 + interval * 2);
    assert_eq!(controller.position(), 2);
}

#[test]
fn test_playing_runs_to_finished() {
    let mut controller = loaded_controller();
    controller.set_speed(100);
    let interval = controller.interval();
    controller.play();

    let mut now = Instant::now();
    controller.tick_at(now);
    for _ in 0..controller.len() + 5 {
        now += interval;
        controller.tick_at(now);
    }

    assert_eq!(controller.state(), PlaybackState::Finished);
    assert_eq!(controller.position(), controller.len() - 1);

    // Finished: play is a no-op, reset re-arms playback.
    controller.play();
    assert_eq!(controller.state(), PlaybackState::Finished);
    controller.reset();
    assert_eq!(controller.state(), PlaybackState::Ready);
    assert_eq!(controller.position(), 0);
}

#[test]
fn test_manual_stepping_pauses_playback() {
    let mut controller = loaded_controller();
    controller.play();
    controller.step_forward(1);
    assert_eq!(controller.state(), PlaybackState::Ready);
    assert_eq!(controller.position(), 1);
}

#[test]
fn test_speed_is_clamped_and_monotonic() {
    let mut controller = PlaybackController::new();

    controller.set_speed(0);
    assert_eq!(controller.speed(), 1);
    controller.set_speed(200);
    assert_eq!(controller.speed(), 100);

    let mut previous = Duration::MAX;
    for speed in [1, 25, 50, 75, 100] {
        controller.set_speed(speed);
        let interval = controller.interval();
        assert!(interval < previous, "speed {} must shorten the interval", speed);
        previous = interval;
    }
    controller.set_speed(1);
    assert_eq!(controller.interval(), Duration::from_millis(1000));
    controller.set_speed(100);
    assert_eq!(controller.interval(), Duration::from_millis(30));
}

#[test]
fn test_projection_counts_the_full_prefix() {
    let steps = bubble_steps();
    let last = project::project(&steps, steps.len() - 1);
    assert_eq!(last.comparisons, 6);
    assert_eq!(last.swaps, 4);

    let first = project::project(&steps, 0);
    assert_eq!(first.comparisons, 0);
    assert_eq!(first.swaps, 0);
}

#[test]
fn test_projection_is_stable_across_backward_navigation() {
    // The projector is a pure fold over the prefix, so revisiting an index
    // after moving around must reproduce the identical projection.
    let steps = bubble_steps();
    let at_three = project::project(&steps, 3);
    let _elsewhere = project::project(&steps, steps.len() - 1);
    assert_eq!(project::project(&steps, 3), at_three);
}

#[test]
fn test_projection_counters_never_decrease() {
    let steps = bubble_steps();
    let mut previous = (0, 0);
    for i in 0..steps.len() {
        let p = project::project(&steps, i);
        assert!(p.comparisons >= previous.0);
        assert!(p.swaps >= previous.1);
        previous = (p.comparisons, p.swaps);
    }
}

#[test]
fn test_projection_clamps_the_index() {
    let steps = bubble_steps();
    assert_eq!(
        project::project(&steps, usize::MAX),
        project::project(&steps, steps.len() - 1)
    );
    assert_eq!(project::project(&[], 3), Default::default());
}

#[test]
fn test_projection_mirrors_the_step_description() {
    let steps = bubble_steps();
    for i in [0, 1, steps.len() - 1] {
        let p = project::project(&steps, i);
        assert_eq!(p.description, steps[i].description());
    }
}

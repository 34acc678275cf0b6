//! Playback over a precomputed step sequence
//!
//! The controller owns the full `Vec<Step>` and a cursor into it; every
//! navigation is a cursor move, so seeking backward is as cheap as forward.
//! Auto-play is driven by the caller's clock through [`PlaybackController::tick_at`],
//! which keeps the timing logic testable without sleeping.

use std::time::{Duration, Instant};

use crate::step::Step;

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No steps loaded.
    Idle,
    /// Steps loaded, paused.
    Ready,
    /// Advancing on the auto-play timer.
    Playing,
    /// Cursor parked on the last step.
    Finished,
}

/// Cursor and timer over a loaded run.
#[derive(Debug)]
pub struct PlaybackController {
    steps: Vec<Step>,
    current: usize,
    state: PlaybackState,
    speed: u8,
    last_tick: Option<Instant>,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackController {
    pub fn new() -> Self {
        PlaybackController {
            steps: Vec::new(),
            current: 0,
            state: PlaybackState::Idle,
            speed: 50,
            last_tick: None,
        }
    }

    /// Replace the loaded run and rewind to the first step.
    pub fn load(&mut self, steps: Vec<Step>) {
        self.steps = steps;
        self.current = 0;
        self.last_tick = None;
        self.state = if self.steps.is_empty() {
            PlaybackState::Idle
        } else {
            PlaybackState::Ready
        };
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Zero-based cursor position.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.current)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Milliseconds between auto-play advances at the current speed.
    pub fn interval(&self) -> Duration {
        let delay_ms = (1010 - 10 * u64::from(self.speed)).max(30);
        Duration::from_millis(delay_ms)
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Set the speed, clamped to 1..=100.  Takes effect on the next tick.
    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed.clamp(1, 100);
    }

    /// Start auto-play.  A no-op while already playing, from an empty
    /// controller, or from the last step.
    pub fn play(&mut self) {
        match self.state {
            PlaybackState::Ready => {
                self.state = PlaybackState::Playing;
                self.last_tick = None;
            }
            PlaybackState::Idle | PlaybackState::Playing | PlaybackState::Finished => {}
        }
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Ready;
        }
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advance the auto-play timer against the wall clock.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance the auto-play timer against a caller-supplied clock.
    ///
    /// Advances by one step each time a full interval has elapsed since the
    /// previous advance; coarse polling therefore never skips steps.
    pub fn tick_at(&mut self, now: Instant) {
        if self.state != PlaybackState::Playing {
            return;
        }
        match self.last_tick {
            None => {
                // First poll after play() starts the clock without advancing.
                self.last_tick = Some(now);
            }
            Some(last) if now.duration_since(last) >= self.interval() => {
                self.last_tick = Some(now);
                self.advance();
            }
            Some(_) => {}
        }
    }

    /// Step forward by `n`, clamped to the last step.  Pauses auto-play.
    pub fn step_forward(&mut self, n: usize) {
        if self.steps.is_empty() {
            return;
        }
        self.pause();
        self.current = (self.current + n).min(self.steps.len() - 1);
        self.settle();
    }

    /// Step backward by `n`, clamped to the first step.  Pauses auto-play.
    pub fn step_backward(&mut self, n: usize) {
        if self.steps.is_empty() {
            return;
        }
        self.pause();
        self.current = self.current.saturating_sub(n);
        self.settle();
    }

    /// Jump straight to `index`, clamped in bounds.  Pauses auto-play.
    pub fn jump_to(&mut self, index: usize) {
        if self.steps.is_empty() {
            return;
        }
        self.pause();
        self.current = index.min(self.steps.len() - 1);
        self.settle();
    }

    /// Rewind to the first step, paused.
    pub fn reset(&mut self) {
        if self.steps.is_empty() {
            return;
        }
        self.current = 0;
        self.last_tick = None;
        self.state = PlaybackState::Ready;
    }

    fn advance(&mut self) {
        self.current = (self.current + 1).min(self.steps.len() - 1);
        if self.current + 1 == self.steps.len() {
            self.state = PlaybackState::Finished;
            self.last_tick = None;
        }
    }

    /// Recompute Finished vs Ready after a manual cursor move.
    fn settle(&mut self) {
        self.state = if self.current + 1 == self.steps.len() {
            PlaybackState::Finished
        } else {
            PlaybackState::Ready
        };
    }
}

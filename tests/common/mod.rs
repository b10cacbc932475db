//! Shared test infrastructure for tiered-button integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use tiered_button::{
    Button, PressCallbacks, RawSample, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Input
// ============================================================================

/// Physical level shared between the test body and the button's sampler
pub struct MockInput {
    pressed: Cell<bool>,
    reads: Cell<u32>,
}

impl MockInput {
    pub fn new(pressed: bool) -> Self {
        Self {
            pressed: Cell::new(pressed),
            reads: Cell::new(0),
        }
    }

    pub fn press(&self) {
        self.pressed.set(true);
    }

    pub fn release(&self) {
        self.pressed.set(false);
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }

    pub fn sampler(&self) -> MockSampler<'_> {
        MockSampler { input: self }
    }
}

/// Sampler handed to the button; reads the shared [`MockInput`]
pub struct MockSampler<'a> {
    input: &'a MockInput,
}

impl RawSample for MockSampler<'_> {
    fn is_down(&mut self) -> bool {
        self.input.reads.set(self.input.reads.get() + 1);
        self.input.pressed.get()
    }
}

// ============================================================================
// Callback Counters
// ============================================================================

/// User data that counts callback invocations per tier
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub press: u32,
    pub long: u32,
    pub really_long: u32,
}

impl Counts {
    pub fn total(&self) -> u32 {
        self.press + self.long + self.really_long
    }
}

pub fn counting_callbacks() -> PressCallbacks<Counts> {
    PressCallbacks::<Counts>::none()
        .on_press(|c| c.press += 1)
        .on_long_press(|c| c.long += 1)
        .on_really_long_press(|c| c.really_long += 1)
}

pub type TestButton<'a> = Button<'a, TestInstant, MockSampler<'a>, MockTimeSource, Counts>;

/// Builds a counting button on pin 0
pub fn counting_button<'a>(input: &'a MockInput, timer: &'a MockTimeSource) -> TestButton<'a> {
    Button::new(0, input.sampler(), timer, counting_callbacks(), Counts::default())
}

/// Advances time in `step` increments, updating after each, until `total` has elapsed
pub fn hold_for(button: &mut TestButton<'_>, timer: &MockTimeSource, total: u64, step: u64) {
    let mut elapsed = 0;
    while elapsed < total {
        let advance = step.min(total - elapsed);
        timer.advance(advance);
        button.update();
        elapsed += advance;
    }
}

//! Press classification state machine.
//!
//! Provides [`Button`], which polls a [`RawSample`] and turns each run of
//! "down" samples into at most one [`PressEvent`] tier: a short press on
//! release, or a long press (and later a really long press) while held.

use crate::log::info;
use crate::sampler::RawSample;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{
    LONG_PRESS_MS, PressCallbacks, PressEvent, PressEvents, REALLY_LONG_PRESS_MS,
};

/// Mutable per-button state, re-derived by [`Button::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState<I> {
    /// Level seen by the last update.
    pub is_down: bool,
    /// Set while a button found held at init waits for its first release.
    pub ignore: bool,
    /// Start of the current down-run. `None` while up.
    pub down_since: Option<I>,
    pub long_press_sent: bool,
    pub really_long_press_sent: bool,
}

/// A single polled button.
///
/// Call [`update`](Button::update) at a regular interval (10-50 ms works
/// well). Callbacks run synchronously before `update` returns, so keep them
/// short when one loop polls many buttons.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Raw sample provider
/// * `T` - Time source implementation type
/// * `U` - User data handed to every callback
pub struct Button<'t, I: TimeInstant, S: RawSample, T: TimeSource<I>, U> {
    pin: u8,
    sampler: S,
    time_source: &'t T,
    callbacks: PressCallbacks<U>,
    user_data: U,
    state: ButtonState<I>,
}

impl<'t, I: TimeInstant, S: RawSample, T: TimeSource<I>, U> Button<'t, I, S, T, U> {
    /// Creates a button and samples its initial level.
    ///
    /// A button that is already held here is ignored until it is released.
    pub fn new(
        pin: u8,
        sampler: S,
        time_source: &'t T,
        callbacks: PressCallbacks<U>,
        user_data: U,
    ) -> Self {
        let mut button = Self {
            pin,
            sampler,
            time_source,
            callbacks,
            user_data,
            state: ButtonState {
                is_down: false,
                ignore: false,
                down_since: None,
                long_press_sent: false,
                really_long_press_sent: false,
            },
        };
        button.init();
        button
    }

    /// Re-derives the state from the current raw sample. Fires nothing.
    pub fn init(&mut self) {
        let is_down = self.sampler.is_down();

        self.state = ButtonState {
            is_down,
            ignore: is_down,
            down_since: None,
            long_press_sent: false,
            really_long_press_sent: false,
        };
    }

    /// Samples the button and fires whatever tier the elapsed hold time
    /// has reached.
    ///
    /// Returns the events fired during this call, in firing order.
    pub fn update(&mut self) -> PressEvents {
        let is_down = self.sampler.is_down();
        let now = self.time_source.now();
        let mut events = PressEvents::new();

        if self.state.ignore {
            if !is_down {
                self.state.ignore = false;
                self.state.is_down = false;
            }
            return events;
        }

        match (self.state.is_down, is_down) {
            (false, true) => {
                self.state.down_since = Some(now);
                self.state.long_press_sent = false;
                self.state.really_long_press_sent = false;
            }
            (true, true) => {
                if let Some(since) = self.state.down_since {
                    let held = now.duration_since(since).as_millis();

                    if held >= LONG_PRESS_MS {
                        if !self.state.long_press_sent {
                            info!("Long press on pin {}", self.pin);
                            self.fire(PressEvent::LongPress, &mut events);
                            self.state.long_press_sent = true;
                        }

                        if held >= REALLY_LONG_PRESS_MS && !self.state.really_long_press_sent {
                            info!("Really long press on pin {}", self.pin);
                            self.fire(PressEvent::ReallyLongPress, &mut events);
                            self.state.really_long_press_sent = true;
                        }
                    }
                }
            }
            (true, false) => {
                if !self.state.long_press_sent && !self.state.really_long_press_sent {
                    info!("Short press on pin {}", self.pin);
                    self.fire(PressEvent::Press, &mut events);
                }
                self.state.down_since = None;
            }
            (false, false) => {}
        }

        self.state.is_down = is_down;
        events
    }

    fn fire(&mut self, event: PressEvent, events: &mut PressEvents) {
        self.callbacks.dispatch(event, &mut self.user_data);
        // Each tier fires at most once per update and only the two long
        // tiers can coincide, so the list never holds more than two.
        events.push(event).ok();
    }

    /// Returns the hardware line identifier.
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> ButtonState<I> {
        self.state
    }

    /// Returns the level seen by the last update.
    pub fn is_down(&self) -> bool {
        self.state.is_down
    }

    /// Returns true while waiting for a button held at init to be released.
    pub fn is_ignoring(&self) -> bool {
        self.state.ignore
    }

    /// Returns how long the current down-run has lasted, if one is active.
    pub fn held_for(&self) -> Option<I::Duration> {
        self.state.down_since.map(|since| {
            let now = self.time_source.now();
            now.duration_since(since)
        })
    }

    /// Returns the callbacks' user data.
    pub fn user_data(&self) -> &U {
        &self.user_data
    }

    /// Returns the callbacks' user data mutably.
    pub fn user_data_mut(&mut self) -> &mut U {
        &mut self.user_data
    }

    /// Consumes the button, returning its sampler and user data.
    pub fn into_parts(self) -> (S, U) {
        (self.sampler, self.user_data)
    }
}

impl<I, S, T, U> core::fmt::Debug for Button<'_, I, S, T, U>
where
    I: TimeInstant + core::fmt::Debug,
    S: RawSample,
    T: TimeSource<I>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Button")
            .field("pin", &self.pin)
            .field("callbacks", &self.callbacks)
            .field("state", &self.state)
            .finish()
    }
}

//! Core types shared by buttons and collections.

use heapless::Vec;

/// Hold time after which a press counts as a long press.
pub const LONG_PRESS_MS: u64 = 300;

/// Hold time after which a press counts as a really long press.
pub const REALLY_LONG_PRESS_MS: u64 = 3000;

/// A classified press, one tier per down-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressEvent {
    /// Released before the long press threshold.
    Press,

    /// Held past [`LONG_PRESS_MS`]. Fires while still held.
    LongPress,

    /// Held past [`REALLY_LONG_PRESS_MS`]. Fires while still held.
    ReallyLongPress,
}

/// Events fired by a single `update` call.
///
/// Two is enough: a long and a really long press can both fire on the first
/// update after a long gap, nothing else can coincide.
pub type PressEvents = Vec<PressEvent, 2>;

/// Handler invoked with the button's user data.
pub type PressCallback<U> = fn(&mut U);

/// Optional handlers for each press tier.
///
/// A missing handler is a no-op; the event is still returned from `update`.
pub struct PressCallbacks<U> {
    pub press: Option<PressCallback<U>>,
    pub long_press: Option<PressCallback<U>>,
    pub really_long_press: Option<PressCallback<U>>,
}

impl<U> PressCallbacks<U> {
    /// Creates a set with no handlers.
    pub const fn none() -> Self {
        Self {
            press: None,
            long_press: None,
            really_long_press: None,
        }
    }

    /// Sets the short press handler.
    pub const fn on_press(mut self, callback: PressCallback<U>) -> Self {
        self.press = Some(callback);
        self
    }

    /// Sets the long press handler.
    pub const fn on_long_press(mut self, callback: PressCallback<U>) -> Self {
        self.long_press = Some(callback);
        self
    }

    /// Sets the really long press handler.
    pub const fn on_really_long_press(mut self, callback: PressCallback<U>) -> Self {
        self.really_long_press = Some(callback);
        self
    }

    /// Runs the handler for `event`, if there is one.
    pub(crate) fn dispatch(&self, event: PressEvent, user_data: &mut U) {
        let callback = match event {
            PressEvent::Press => self.press,
            PressEvent::LongPress => self.long_press,
            PressEvent::ReallyLongPress => self.really_long_press,
        };

        if let Some(callback) = callback {
            callback(user_data);
        }
    }
}

// Manual impls: fn pointers are Copy for any U, derive would demand U: Copy.
impl<U> Clone for PressCallbacks<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for PressCallbacks<U> {}

impl<U> Default for PressCallbacks<U> {
    fn default() -> Self {
        Self::none()
    }
}

impl<U> core::fmt::Debug for PressCallbacks<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PressCallbacks")
            .field("press", &self.press.is_some())
            .field("long_press", &self.long_press.is_some())
            .field("really_long_press", &self.really_long_press.is_some())
            .finish()
    }
}

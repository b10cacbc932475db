//! Raw sample providers.
//!
//! A button only needs to know whether it is pressed right now. [`RawSample`]
//! is that capability; this module ships two implementations, one for plain
//! GPIO inputs wired with a pull-up ([`ActiveLow`]) and one for capacitive
//! touch pads ([`TouchSampler`]). Peripheral setup (pull modes, touch voltage
//! references, filters) belongs to the board code that constructs them.
//!
//! Both samplers mask read errors by repeating the last good reading, so the
//! state machine never sees a failure.

use crate::log::log_warn;
use embedded_hal::digital::InputPin;

/// Reading a touch pad below this value counts as a touch.
pub const DEFAULT_TOUCH_THRESHOLD: u16 = 2100;

/// Source of the instantaneous pressed/released level of one button.
pub trait RawSample {
    /// Returns true while the button is physically pressed or touched.
    fn is_down(&mut self) -> bool;
}

impl<F: FnMut() -> bool> RawSample for F {
    fn is_down(&mut self) -> bool {
        self()
    }
}

/// Digital input that reads low while pressed (pull-up, switch to ground).
#[derive(Debug)]
pub struct ActiveLow<P> {
    pin: P,
    last: bool,
}

impl<P: InputPin> ActiveLow<P> {
    /// Wraps an input pin that is already configured with a pull-up.
    pub fn new(pin: P) -> Self {
        Self { pin, last: false }
    }

    /// Releases the pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> RawSample for ActiveLow<P> {
    fn is_down(&mut self) -> bool {
        match self.pin.is_low() {
            Ok(low) => {
                self.last = low;
                low
            }
            Err(_) => {
                log_warn!("Input read failed, keeping last level {}", self.last);
                self.last
            }
        }
    }
}

/// Index of a capacitive touch channel on the touch peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchChannel(pub u8);

/// Board wiring between GPIO numbers and touch channels.
///
/// `pins[n]` is the GPIO that carries touch channel `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPadMap {
    pins: &'static [u8],
}

impl TouchPadMap {
    /// ESP32 touch pads T0 through T9.
    pub const ESP32: TouchPadMap = TouchPadMap::new(&[4, 0, 2, 15, 13, 12, 14, 27, 33, 32]);

    /// Creates a map where the GPIO at index `n` carries channel `n`.
    pub const fn new(pins: &'static [u8]) -> Self {
        Self { pins }
    }

    /// Looks up the touch channel wired to `pin`.
    pub fn channel_for(&self, pin: u8) -> Option<TouchChannel> {
        self.pins
            .iter()
            .position(|&p| p == pin)
            .and_then(|idx| u8::try_from(idx).ok())
            .map(TouchChannel)
    }

    /// Number of touch channels in the map.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Returns true if the map has no channels.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

/// Access to a capacitive touch peripheral.
pub trait TouchRead {
    /// Peripheral error type.
    type Error;

    /// Enables measurement on `channel`.
    fn enable(&mut self, channel: TouchChannel) -> Result<(), Self::Error>;

    /// Returns the current raw measurement on `channel`. Lower means touched.
    fn read(&mut self, channel: TouchChannel) -> Result<u16, Self::Error>;
}

/// Errors raised while setting up a sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SamplerError<E> {
    /// The pin is not wired to any touch channel.
    NotATouchPin(u8),

    /// The touch peripheral refused to enable the channel.
    Peripheral(E),
}

impl<E: core::fmt::Debug> core::fmt::Display for SamplerError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SamplerError::NotATouchPin(pin) => {
                write!(f, "pin {} has no touch channel", pin)
            }
            SamplerError::Peripheral(err) => {
                write!(f, "touch peripheral error: {:?}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for SamplerError<E> {}

/// Capacitive touch pad sampler.
///
/// The pad counts as pressed while its raw reading is below the threshold.
#[derive(Debug)]
pub struct TouchSampler<R> {
    reader: R,
    channel: TouchChannel,
    threshold: u16,
    last: bool,
}

impl<R: TouchRead> TouchSampler<R> {
    /// Resolves the touch channel for `pin` and enables it.
    ///
    /// # Errors
    /// * `NotATouchPin` - `pin` is not in `map`
    /// * `Peripheral` - the reader failed to enable the channel
    pub fn new(map: TouchPadMap, pin: u8, mut reader: R) -> Result<Self, SamplerError<R::Error>> {
        let channel = map
            .channel_for(pin)
            .ok_or(SamplerError::NotATouchPin(pin))?;

        reader.enable(channel).map_err(SamplerError::Peripheral)?;

        Ok(Self {
            reader,
            channel,
            threshold: DEFAULT_TOUCH_THRESHOLD,
            last: false,
        })
    }

    /// Replaces the touch threshold.
    pub fn with_threshold(mut self, threshold: u16) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the channel this sampler reads.
    pub fn channel(&self) -> TouchChannel {
        self.channel
    }

    /// Returns the active threshold.
    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Releases the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: TouchRead> RawSample for TouchSampler<R> {
    fn is_down(&mut self) -> bool {
        match self.reader.read(self.channel) {
            Ok(value) => {
                self.last = value < self.threshold;
                self.last
            }
            Err(_) => {
                log_warn!(
                    "Touch read failed on channel {}, keeping last level {}",
                    self.channel.0, self.last
                );
                self.last
            }
        }
    }
}

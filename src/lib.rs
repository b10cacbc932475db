#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Button`**: Polls one raw input and classifies each press into a tier
//! - **`PressEvent`**: The tiers: `Press`, `LongPress` and `ReallyLongPress`
//! - **`PressCallbacks`**: Optional handlers per tier, invoked with the button's user data
//! - **`RawSample`**: Trait to implement for your input hardware (closures work too)
//! - **`ActiveLow`** / **`TouchSampler`**: Samplers for pull-up GPIO inputs and capacitive pads
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`ButtonCollection`**: Polls several independent buttons from one loop
//!
//! A press lasting less than [`LONG_PRESS_MS`] fires `Press` when released. Holding
//! past it fires `LongPress` while still held, and holding past
//! [`REALLY_LONG_PRESS_MS`] additionally fires `ReallyLongPress`. A release
//! after either long tier fires nothing.

mod log;

pub mod time;
pub mod types;
pub mod sampler;
pub mod button;
pub mod collection;

pub use button::{Button, ButtonState};
pub use collection::{ButtonCollection, ButtonId, CollectionError};
pub use sampler::{
    ActiveLow, DEFAULT_TOUCH_THRESHOLD, RawSample, SamplerError, TouchChannel, TouchPadMap,
    TouchRead, TouchSampler,
};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{
    LONG_PRESS_MS, PressCallback, PressCallbacks, PressEvent, PressEvents, REALLY_LONG_PRESS_MS,
};

//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting monotonic time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Tick counters that wrap must use wrapping subtraction here. Elapsed
    /// times are then correct as long as a single press lasts less than one
    /// full counter period.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

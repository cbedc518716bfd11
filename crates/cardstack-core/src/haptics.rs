//! Best-effort vibration feedback.

/// Vibration pattern played when a card is thrown out.
pub const ADVANCE_PATTERN_MS: [u16; 3] = [10, 20, 30];
/// Vibration pattern played when a card is brought back.
pub const RETREAT_PATTERN_MS: [u16; 3] = [30, 10, 10];

/// Host vibration capability.
///
/// `pattern_ms` alternates vibrate and pause durations, starting with a
/// vibration.
pub trait Haptics {
    type Error;

    fn vibrate(&mut self, pattern_ms: &[u16]) -> Result<(), Self::Error>;
}

/// Host without vibration support.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoHaptics;

impl NoHaptics {
    pub const fn new() -> Self {
        Self
    }
}

impl Haptics for NoHaptics {
    type Error = core::convert::Infallible;

    fn vibrate(&mut self, _pattern_ms: &[u16]) -> Result<(), Self::Error> {
        Ok(())
    }
}

use cardstack_core::haptics::Haptics;
use log::info;

/// Stands in for a vibration motor by logging the requested pattern.
#[derive(Debug, Default)]
pub(super) struct LogHaptics {
    pulses: u32,
}

impl LogHaptics {
    pub(super) fn pulses(&self) -> u32 {
        self.pulses
    }
}

impl Haptics for LogHaptics {
    type Error = core::convert::Infallible;

    fn vibrate(&mut self, pattern_ms: &[u16]) -> Result<(), Self::Error> {
        self.pulses = self.pulses.saturating_add(1);
        info!("haptics: vibrate pattern_ms={:?}", pattern_ms);
        Ok(())
    }
}

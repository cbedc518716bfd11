//! Input abstraction layer.

pub mod scripted;
pub mod scroll;

pub use scripted::ScriptedInput;
pub use scroll::{ScrollAggregator, ScrollIntent};

/// Host events delivered to the stack container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Wheel-style scroll. Positive `delta_y` scrolls forward.
    Wheel { delta_y: f32 },
    Click,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self, now_ms: u64) -> Result<Option<InputEvent>, Self::Error>;
}

/// Whether the host should keep its default handling for an event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Propagation {
    /// The stack consumed the event; suppress the host's default behavior.
    Consumed,
    Continue,
}

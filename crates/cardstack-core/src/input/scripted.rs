use super::{InputEvent, InputProvider};

/// Replays a fixed timeline of `(at_ms, event)` pairs.
///
/// Events are released once the polling time reaches their timestamp, in
/// timeline order. An event stamped earlier than the one before it is
/// released together with its predecessor.
#[derive(Debug, Clone)]
pub struct ScriptedInput<'a> {
    events: &'a [(u64, InputEvent)],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    pub const fn new(events: &'a [(u64, InputEvent)]) -> Self {
        Self { events, cursor: 0 }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.events.len()
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self, now_ms: u64) -> Result<Option<InputEvent>, Self::Error> {
        let Some(&(at_ms, event)) = self.events.get(self.cursor) else {
            return Ok(None);
        };
        if at_ms > now_ms {
            return Ok(None);
        }

        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}

impl<IN, RT, HP> CardStack<IN, RT, HP>
where
    IN: InputProvider,
    RT: RenderTarget,
    HP: Haptics,
{
    /// Handles one host event delivered to the stack container.
    ///
    /// Any event cancels autoplay for good. Wheel events are always consumed
    /// so the host page does not scroll underneath the stack.
    pub fn dispatch(&mut self, event: InputEvent, now_ms: u64) -> Propagation {
        self.stop_autoplay();

        match event {
            InputEvent::Wheel { delta_y } => {
                match self.scroll.push(delta_y, now_ms) {
                    Some(ScrollIntent::Advance) => {
                        debug!("stack: wheel threshold crossed intent=advance");
                        self.advance(now_ms);
                    }
                    Some(ScrollIntent::Retreat) => {
                        debug!("stack: wheel threshold crossed intent=retreat");
                        self.retreat(now_ms);
                    }
                    None => {}
                }
                Propagation::Consumed
            }
            InputEvent::Click => {
                self.advance(now_ms);
                Propagation::Continue
            }
        }
    }

    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event(now_ms) {
                Ok(Some(event)) => {
                    self.dispatch(event, now_ms);
                }
                Ok(None) => break,
                Err(_) => {
                    warn!("stack: input provider failed; skipping remaining events this tick");
                    break;
                }
            }
        }
    }
}

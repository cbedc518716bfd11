impl<IN, RT, HP> CardStack<IN, RT, HP>
where
    IN: InputProvider,
    RT: RenderTarget,
    HP: Haptics,
{
    /// Advances one frame.
    ///
    /// Deferred actions that came due run first, then queued input is
    /// drained. Reports whether the render target was written since the
    /// previous tick.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.scheduler.begin_frame();
        self.run_due_actions(now_ms);
        self.process_inputs(now_ms);

        if core::mem::take(&mut self.pending_render) {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// (Re)starts the autoplay timer; the first firing is one interval out.
    pub fn start_autoplay(&mut self, now_ms: u64) {
        self.stop_autoplay();

        let Some(interval_ms) = self.config.autoplay_interval_ms else {
            return;
        };

        match self.scheduler.schedule_every(
            now_ms.saturating_add(interval_ms),
            interval_ms,
            DeferredAction::AutoplayTick,
        ) {
            Ok(token) => {
                debug!("stack: autoplay started interval_ms={}", interval_ms);
                self.autoplay = Some(token);
            }
            Err(err) => warn!("stack: autoplay not started: {:?}", err),
        }
    }

    pub fn stop_autoplay(&mut self) {
        if let Some(token) = self.autoplay.take() {
            self.scheduler.cancel(token);
            debug!("stack: autoplay stopped");
        }
    }

    fn run_due_actions(&mut self, now_ms: u64) {
        while let Some((token, action)) = self.scheduler.pop_due(now_ms) {
            match action {
                DeferredAction::FinishAdvance => {
                    if self.phase == (StackPhase::Advancing { token }) {
                        self.finish_advance();
                    }
                }
                DeferredAction::FinishRetreat => {
                    if self.phase == (StackPhase::Retreating { token }) {
                        self.finish_retreat();
                    }
                }
                DeferredAction::AutoplayTick => {
                    if !self.is_locked() {
                        debug!("stack: autoplay tick");
                        self.advance(now_ms);
                    }
                }
            }
        }
    }
}

impl<IN, RT, HP> CardStack<IN, RT, HP>
where
    IN: InputProvider,
    RT: RenderTarget,
    HP: Haptics,
{
    /// Throws the active card out; the next card becomes active after the
    /// cooldown. Returns `false` when dropped because a transition is running
    /// or the stack is empty.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        if self.card_count == 0 {
            return false;
        }
        if self.is_locked() {
            debug!("stack: advance dropped phase={:?}", self.phase);
            return false;
        }

        let outgoing = self.active_index;
        debug!(
            "stack: advance start active={}/{} cooldown_ms={}",
            outgoing.saturating_add(1),
            self.card_count,
            self.config.cooldown_ms
        );

        self.buzz(&ADVANCE_PATTERN_MS);
        self.write_card(outgoing, CardVisual::Fling(FlingPose::outgoing()));

        let due_ms = now_ms.saturating_add(self.config.cooldown_ms);
        match self.scheduler.schedule_at(due_ms, DeferredAction::FinishAdvance) {
            Ok(token) => self.phase = StackPhase::Advancing { token },
            Err(err) => {
                warn!("stack: cooldown not scheduled ({:?}); finishing advance now", err);
                self.finish_advance();
            }
        }
        true
    }

    /// Steps back immediately and brings the previous card in from
    /// off-screen on the next frame. Returns `false` when dropped.
    pub fn retreat(&mut self, _now_ms: u64) -> bool {
        if self.card_count == 0 {
            return false;
        }
        if self.is_locked() {
            debug!("stack: retreat dropped phase={:?}", self.phase);
            return false;
        }

        let previous = self.active_index;
        self.active_index = step_back(previous, self.card_count);
        debug!(
            "stack: retreat start active={}/{} -> {}/{}",
            previous.saturating_add(1),
            self.card_count,
            self.active_index.saturating_add(1),
            self.card_count
        );

        self.buzz(&RETREAT_PATTERN_MS);
        self.write_card(
            self.active_index,
            CardVisual::Fling(FlingPose::incoming_start()),
        );

        match self.scheduler.schedule_next_frame(DeferredAction::FinishRetreat) {
            Ok(token) => self.phase = StackPhase::Retreating { token },
            Err(err) => {
                warn!("stack: frame callback not scheduled ({:?}); finishing retreat now", err);
                self.finish_retreat();
            }
        }
        true
    }

    fn finish_advance(&mut self) {
        self.active_index = step_forward(self.active_index, self.card_count);
        debug!(
            "stack: advance done active={}/{}",
            self.active_index.saturating_add(1),
            self.card_count
        );
        self.relayout();
        self.phase = StackPhase::Idle;
    }

    fn finish_retreat(&mut self) {
        debug!(
            "stack: retreat done active={}/{}",
            self.active_index.saturating_add(1),
            self.card_count
        );
        self.relayout();
        self.phase = StackPhase::Idle;
    }
}

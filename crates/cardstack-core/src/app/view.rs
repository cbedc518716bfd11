impl<IN, RT, HP> CardStack<IN, RT, HP>
where
    IN: InputProvider,
    RT: RenderTarget,
    HP: Haptics,
{
    pub fn new(card_count: usize, input: IN, target: RT, haptics: HP, config: StackConfig) -> Self {
        let config = config.normalized();

        Self {
            input,
            target,
            haptics,
            scroll: ScrollAggregator::new(config.scroll_threshold, config.scroll_idle_gap_ms),
            config,
            card_count,
            active_index: 0,
            phase: StackPhase::Idle,
            scheduler: Scheduler::new(),
            autoplay: None,
            pending_render: false,
        }
    }

    /// Lays out the initial stack and starts autoplay when configured.
    pub fn start(&mut self, now_ms: u64) {
        debug!(
            "stack: start cards={} max_visible={} autoplay_ms={:?}",
            self.card_count, self.config.max_visible, self.config.autoplay_interval_ms
        );
        self.relayout();
        self.start_autoplay(now_ms);
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn phase(&self) -> StackPhase {
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        !matches!(self.phase, StackPhase::Idle)
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn scroll_accumulator(&self) -> f32 {
        self.scroll.accumulated()
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn target(&self) -> &RT {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut RT {
        &mut self.target
    }

    pub fn into_parts(self) -> (IN, RT, HP) {
        (self.input, self.target, self.haptics)
    }

    fn relayout(&mut self) {
        let target = &mut self.target;
        project_stack(self.active_index, self.card_count, &self.config, |index, visual| {
            target.apply_visual_state(index, &visual)
        });
        if self.card_count > 0 {
            self.pending_render = true;
        }
    }

    fn write_card(&mut self, index: usize, visual: CardVisual) {
        self.target.apply_visual_state(index, &visual);
        self.pending_render = true;
    }

    fn buzz(&mut self, pattern_ms: &[u16]) {
        if self.haptics.vibrate(pattern_ms).is_err() {
            debug!("stack: haptics unavailable pattern={:?}", pattern_ms);
        }
    }
}

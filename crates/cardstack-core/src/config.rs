//! Visual and timing tuning for the card stack.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackConfig {
    /// Cards at cyclic distance `>= max_visible` are hidden.
    pub max_visible: u8,
    pub offset_y_px: f32,
    pub scale_step: f32,
    pub rotate_x_deg: f32,
    /// Light intensity applied to the active card only.
    pub active_light_intensity: f32,
    pub scroll_threshold: f32,
    pub scroll_idle_gap_ms: u64,
    pub cooldown_ms: u64,
    /// `None` disables autoplay.
    pub autoplay_interval_ms: Option<u64>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            max_visible: 4,
            offset_y_px: 18.0,
            scale_step: 0.04,
            rotate_x_deg: -8.0,
            active_light_intensity: 0.15,
            scroll_threshold: 120.0,
            scroll_idle_gap_ms: 300,
            cooldown_ms: 600,
            autoplay_interval_ms: Some(2_600),
        }
    }
}

impl StackConfig {
    pub const fn with_max_visible(mut self, max_visible: u8) -> Self {
        self.max_visible = max_visible;
        self
    }

    pub const fn with_offset_y_px(mut self, offset_y_px: f32) -> Self {
        self.offset_y_px = offset_y_px;
        self
    }

    pub const fn with_scale_step(mut self, scale_step: f32) -> Self {
        self.scale_step = scale_step;
        self
    }

    pub const fn with_rotate_x_deg(mut self, rotate_x_deg: f32) -> Self {
        self.rotate_x_deg = rotate_x_deg;
        self
    }

    pub const fn with_scroll_threshold(mut self, scroll_threshold: f32) -> Self {
        self.scroll_threshold = scroll_threshold;
        self
    }

    pub const fn with_scroll_idle_gap_ms(mut self, scroll_idle_gap_ms: u64) -> Self {
        self.scroll_idle_gap_ms = scroll_idle_gap_ms;
        self
    }

    pub const fn with_cooldown_ms(mut self, cooldown_ms: u64) -> Self {
        self.cooldown_ms = cooldown_ms;
        self
    }

    pub const fn with_autoplay_interval_ms(mut self, autoplay_interval_ms: Option<u64>) -> Self {
        self.autoplay_interval_ms = autoplay_interval_ms;
        self
    }

    /// Clamps values that would break the projector or the timers.
    ///
    /// At least one card stays visible, the scale never goes negative for a
    /// visible card, the threshold is positive and a zero autoplay interval
    /// turns autoplay off instead of firing every frame.
    pub fn normalized(mut self) -> Self {
        self.max_visible = self.max_visible.max(1);

        let deepest = (self.max_visible - 1) as f32;
        if deepest > 0.0 && self.scale_step * deepest > 1.0 {
            self.scale_step = 1.0 / deepest;
        }
        self.scale_step = self.scale_step.max(0.0);

        if self.scroll_threshold.is_nan() || self.scroll_threshold <= 0.0 {
            self.scroll_threshold = f32::EPSILON;
        }
        self.active_light_intensity = self.active_light_intensity.clamp(0.0, 1.0);
        self.autoplay_interval_ms = self.autoplay_interval_ms.filter(|ms| *ms > 0);

        self
    }
}

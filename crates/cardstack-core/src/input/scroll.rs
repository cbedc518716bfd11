//! Wheel delta accumulation.
//!
//! Trackpads and wheels report many small deltas per gesture. The aggregator
//! sums them while they keep arriving and emits one discrete intent whenever
//! the sum crosses the threshold.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScrollIntent {
    Advance,
    Retreat,
}

#[derive(Debug, Clone)]
pub struct ScrollAggregator {
    threshold: f32,
    idle_gap_ms: u64,
    accumulated: f32,
    last_event_ms: Option<u64>,
}

impl ScrollAggregator {
    pub fn new(threshold: f32, idle_gap_ms: u64) -> Self {
        Self {
            threshold: threshold.abs(),
            idle_gap_ms,
            accumulated: 0.0,
            last_event_ms: None,
        }
    }

    /// Folds one wheel delta into the running sum.
    ///
    /// The sum restarts from zero when more than `idle_gap_ms` passed since
    /// the previous delta, and again after every emitted intent.
    pub fn push(&mut self, delta_y: f32, now_ms: u64) -> Option<ScrollIntent> {
        let idle = self
            .last_event_ms
            .is_none_or(|last| now_ms.saturating_sub(last) > self.idle_gap_ms);
        if idle {
            self.accumulated = 0.0;
        }
        self.last_event_ms = Some(now_ms);

        if delta_y.is_finite() {
            self.accumulated += delta_y;
        }

        if self.accumulated.abs() < self.threshold {
            return None;
        }

        let intent = if self.accumulated > 0.0 {
            ScrollIntent::Advance
        } else {
            ScrollIntent::Retreat
        };
        self.accumulated = 0.0;
        Some(intent)
    }

    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.last_event_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_threshold_emits_once_and_resets() {
        let mut scroll = ScrollAggregator::new(120.0, 300);

        assert_eq!(scroll.push(50.0, 0), None);
        assert_eq!(scroll.accumulated(), 50.0);
        assert_eq!(scroll.push(80.0, 16), Some(ScrollIntent::Advance));
        assert_eq!(scroll.accumulated(), 0.0);
    }

    #[test]
    fn negative_sum_retreats() {
        let mut scroll = ScrollAggregator::new(120.0, 300);

        assert_eq!(scroll.push(-60.0, 0), None);
        assert_eq!(scroll.push(-60.0, 10), Some(ScrollIntent::Retreat));
    }

    #[test]
    fn idle_gap_discards_stale_deltas() {
        let mut scroll = ScrollAggregator::new(120.0, 300);

        assert_eq!(scroll.push(100.0, 0), None);
        assert_eq!(scroll.push(100.0, 301), None);
        assert_eq!(scroll.accumulated(), 100.0);
    }

    #[test]
    fn gap_equal_to_window_keeps_sum() {
        let mut scroll = ScrollAggregator::new(120.0, 300);

        assert_eq!(scroll.push(100.0, 0), None);
        assert_eq!(scroll.push(20.0, 300), Some(ScrollIntent::Advance));
    }

    #[test]
    fn opposing_deltas_cancel() {
        let mut scroll = ScrollAggregator::new(120.0, 300);

        assert_eq!(scroll.push(100.0, 0), None);
        assert_eq!(scroll.push(-90.0, 10), None);
        assert_eq!(scroll.accumulated(), 10.0);
    }

    #[test]
    fn non_finite_delta_is_ignored() {
        let mut scroll = ScrollAggregator::new(120.0, 300);

        assert_eq!(scroll.push(f32::NAN, 0), None);
        assert_eq!(scroll.accumulated(), 0.0);
    }
}

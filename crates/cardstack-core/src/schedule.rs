//! Deferred actions driven by the host clock and frame counter.
//!
//! Nothing here reads a clock. The owner calls [`Scheduler::begin_frame`]
//! once per rendered frame and drains [`Scheduler::pop_due`] with the
//! current time, which keeps timing reproducible under test.

use heapless::Vec;

/// Cancellation handle for a scheduled action.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TimerToken(u32);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Deadline {
    /// Due once the clock reaches this time.
    At(u64),
    /// Due once the frame counter reaches this frame.
    Frame(u64),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    Full,
}

#[derive(Clone, Copy, Debug)]
struct Entry<A> {
    token: TimerToken,
    deadline: Deadline,
    repeat_ms: Option<u64>,
    action: A,
}

#[derive(Debug)]
pub struct Scheduler<A, const N: usize> {
    entries: Vec<Entry<A>, N>,
    next_token: u32,
    frame: u64,
}

impl<A: Copy, const N: usize> Default for Scheduler<A, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Copy, const N: usize> Scheduler<A, N> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_token: 0,
            frame: 0,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.entries.iter().any(|entry| entry.token == token)
    }

    pub fn schedule_at(&mut self, due_ms: u64, action: A) -> Result<TimerToken, ScheduleError> {
        self.push(Deadline::At(due_ms), None, action)
    }

    /// Fires first at `first_due_ms`, then every `interval_ms` until cancelled.
    pub fn schedule_every(
        &mut self,
        first_due_ms: u64,
        interval_ms: u64,
        action: A,
    ) -> Result<TimerToken, ScheduleError> {
        self.push(Deadline::At(first_due_ms), Some(interval_ms.max(1)), action)
    }

    /// Fires on the frame after the current one.
    pub fn schedule_next_frame(&mut self, action: A) -> Result<TimerToken, ScheduleError> {
        self.push(Deadline::Frame(self.frame.saturating_add(1)), None, action)
    }

    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let Some(position) = self.entries.iter().position(|entry| entry.token == token) else {
            return false;
        };
        self.entries.remove(position);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn begin_frame(&mut self) {
        self.frame = self.frame.saturating_add(1);
    }

    /// Takes the next due action.
    ///
    /// Frame deadlines come before timed ones; among timed entries the
    /// earliest deadline wins and ties keep scheduling order. A repeating
    /// entry is re-armed on its interval grid past `now_ms`, so a stalled
    /// host gets one firing rather than a burst.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(TimerToken, A)> {
        let mut best: Option<(usize, (u8, u64))> = None;
        for (position, entry) in self.entries.iter().enumerate() {
            let rank = match entry.deadline {
                Deadline::Frame(frame) if frame <= self.frame => (0, frame),
                Deadline::At(due_ms) if due_ms <= now_ms => (1, due_ms),
                _ => continue,
            };
            if best.is_none_or(|(_, best_rank)| rank < best_rank) {
                best = Some((position, rank));
            }
        }

        let (position, _) = best?;
        let entry = self.entries[position];

        match (entry.deadline, entry.repeat_ms) {
            (Deadline::At(due_ms), Some(interval_ms)) => {
                let missed = now_ms.saturating_sub(due_ms) / interval_ms;
                let next_due = due_ms.saturating_add(interval_ms.saturating_mul(missed + 1));
                self.entries[position].deadline = Deadline::At(next_due);
            }
            _ => {
                self.entries.remove(position);
            }
        }

        Some((entry.token, entry.action))
    }

    fn push(
        &mut self,
        deadline: Deadline,
        repeat_ms: Option<u64>,
        action: A,
    ) -> Result<TimerToken, ScheduleError> {
        let token = TimerToken(self.next_token);
        self.entries
            .push(Entry {
                token,
                deadline,
                repeat_ms,
                action,
            })
            .map_err(|_| ScheduleError::Full)?;
        self.next_token = self.next_token.wrapping_add(1);
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    enum Action {
        A,
        B,
        C,
    }

    #[test]
    fn timed_action_waits_for_deadline() {
        let mut scheduler = Scheduler::<Action, 4>::new();
        let token = scheduler.schedule_at(600, Action::A).unwrap();

        assert_eq!(scheduler.pop_due(599), None);
        assert_eq!(scheduler.pop_due(600), Some((token, Action::A)));
        assert_eq!(scheduler.pop_due(10_000), None);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn earliest_deadline_fires_first() {
        let mut scheduler = Scheduler::<Action, 4>::new();
        scheduler.schedule_at(300, Action::B).unwrap();
        scheduler.schedule_at(100, Action::A).unwrap();

        assert_eq!(scheduler.pop_due(1_000).map(|(_, a)| a), Some(Action::A));
        assert_eq!(scheduler.pop_due(1_000).map(|(_, a)| a), Some(Action::B));
    }

    #[test]
    fn next_frame_fires_only_after_begin_frame() {
        let mut scheduler = Scheduler::<Action, 4>::new();
        scheduler.begin_frame();
        scheduler.schedule_next_frame(Action::C).unwrap();

        assert_eq!(scheduler.pop_due(u64::MAX), None);
        scheduler.begin_frame();
        assert_eq!(scheduler.pop_due(0).map(|(_, a)| a), Some(Action::C));
    }

    #[test]
    fn frame_actions_precede_timed_ones() {
        let mut scheduler = Scheduler::<Action, 4>::new();
        scheduler.schedule_at(0, Action::A).unwrap();
        scheduler.schedule_next_frame(Action::C).unwrap();
        scheduler.begin_frame();

        assert_eq!(scheduler.pop_due(0).map(|(_, a)| a), Some(Action::C));
        assert_eq!(scheduler.pop_due(0).map(|(_, a)| a), Some(Action::A));
    }

    #[test]
    fn cancelled_action_never_fires() {
        let mut scheduler = Scheduler::<Action, 4>::new();
        let token = scheduler.schedule_at(10, Action::A).unwrap();

        assert!(scheduler.is_pending(token));
        assert!(scheduler.cancel(token));
        assert!(!scheduler.cancel(token));
        assert_eq!(scheduler.pop_due(100), None);
    }

    #[test]
    fn repeating_action_rearms_on_its_grid() {
        let mut scheduler = Scheduler::<Action, 4>::new();
        let token = scheduler.schedule_every(2_600, 2_600, Action::B).unwrap();

        assert_eq!(scheduler.pop_due(2_599), None);
        assert_eq!(scheduler.pop_due(2_600), Some((token, Action::B)));
        assert_eq!(scheduler.pop_due(2_600), None);
        assert_eq!(scheduler.pop_due(5_200), Some((token, Action::B)));
        assert!(scheduler.is_pending(token));
    }

    #[test]
    fn stalled_repeat_fires_once() {
        let mut scheduler = Scheduler::<Action, 4>::new();
        scheduler.schedule_every(100, 100, Action::B).unwrap();

        assert!(scheduler.pop_due(1_050).is_some());
        assert_eq!(scheduler.pop_due(1_050), None);
        assert!(scheduler.pop_due(1_100).is_some());
    }

    #[test]
    fn full_queue_reports_error() {
        let mut scheduler = Scheduler::<Action, 1>::new();
        scheduler.schedule_at(0, Action::A).unwrap();

        assert_eq!(
            scheduler.schedule_at(0, Action::B),
            Err(ScheduleError::Full)
        );
    }
}

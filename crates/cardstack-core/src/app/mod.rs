//! Card stack controller: active index, transition lock, scroll and autoplay.

use log::{debug, warn};

use crate::{
    config::StackConfig,
    haptics::{ADVANCE_PATTERN_MS, Haptics, RETREAT_PATTERN_MS},
    input::{InputEvent, InputProvider, Propagation, ScrollAggregator, ScrollIntent},
    layout::project_stack,
    render::{CardVisual, FlingPose, RenderTarget},
    schedule::{Scheduler, TimerToken},
};

// Cooldown or next-frame completion plus the autoplay interval, with headroom.
const SCHEDULER_CAPACITY: usize = 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Transition state. Anything other than `Idle` holds the animation lock.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StackPhase {
    Idle,
    /// Outgoing card is flying off; the index moves when `token` fires.
    Advancing { token: TimerToken },
    /// Index already moved back; the layout settles when `token` fires.
    Retreating { token: TimerToken },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum DeferredAction {
    FinishAdvance,
    FinishRetreat,
    AutoplayTick,
}

pub struct CardStack<IN, RT, HP>
where
    IN: InputProvider,
    RT: RenderTarget,
    HP: Haptics,
{
    input: IN,
    target: RT,
    haptics: HP,
    config: StackConfig,
    card_count: usize,
    active_index: usize,
    phase: StackPhase,
    scroll: ScrollAggregator,
    scheduler: Scheduler<DeferredAction, SCHEDULER_CAPACITY>,
    autoplay: Option<TimerToken>,
    pending_render: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("transition.rs");

fn step_forward(current: usize, total: usize) -> usize {
    if total == 0 { 0 } else { (current + 1) % total }
}

fn step_back(current: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}

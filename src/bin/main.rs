use std::{
    thread,
    time::{Duration, Instant},
};

use cardstack_core::{
    app::{CardStack, TickResult},
    config::StackConfig,
    input::ScriptedInput,
};
use cardstack_css::StyleSheet;
use log::{LevelFilter, info, warn};

use haptics::LogHaptics;

#[path = "main/haptics.rs"]
mod haptics;
#[path = "main/timeline.rs"]
mod timeline;

const CARD_COUNT: usize = 5;
const SHEET_CAPACITY: usize = 16;
const STYLE_BYTES: usize = 320;
const FRAME_MS: u64 = 16;

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = StackConfig::default();
    info!(
        "Card stack demo: cards={} max_visible={} threshold={} idle_gap_ms={} cooldown_ms={} autoplay_ms={:?}",
        CARD_COUNT,
        config.max_visible,
        config.scroll_threshold,
        config.scroll_idle_gap_ms,
        config.cooldown_ms,
        config.autoplay_interval_ms
    );
    info!(
        "Scripted input: {} events, demo ends at {}ms",
        timeline::DEMO_TIMELINE.len(),
        timeline::DEMO_END_MS
    );

    let mut stack = CardStack::new(
        CARD_COUNT,
        ScriptedInput::new(&timeline::DEMO_TIMELINE),
        StyleSheet::<SHEET_CAPACITY>::new(CARD_COUNT),
        LogHaptics::default(),
        config,
    );

    let loop_start = Instant::now();
    stack.start(0);

    loop {
        let now_ms = u64::try_from(loop_start.elapsed().as_millis()).unwrap_or(u64::MAX);
        if stack.tick(now_ms) == TickResult::RenderRequested {
            flush_styles(stack.target_mut(), now_ms);
        }

        if now_ms >= timeline::DEMO_END_MS {
            break;
        }
        thread::sleep(Duration::from_millis(FRAME_MS));
    }

    let active = stack.active_index();
    let (input, _, haptics) = stack.into_parts();
    info!(
        "Demo finished: active={}/{} script_exhausted={} haptic_pulses={}",
        active.saturating_add(1),
        CARD_COUNT,
        input.is_exhausted(),
        haptics.pulses()
    );
}

fn flush_styles<const N: usize>(sheet: &mut StyleSheet<N>, now_ms: u64) {
    sheet.drain_dirty(|index, style| match style.to_declarations::<STYLE_BYTES>() {
        Ok(css) => info!("t={}ms card[{}] {}", now_ms, index, css),
        Err(_) => warn!("card[{}] style exceeds {} bytes", index, STYLE_BYTES),
    });
}

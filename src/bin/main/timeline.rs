use cardstack_core::input::InputEvent;

/// The demo stops ticking once this much time has passed.
pub(super) const DEMO_END_MS: u64 = 11_000;

/// Two autoplay advances, then user input takes over for good.
pub(super) static DEMO_TIMELINE: [(u64, InputEvent); 9] = [
    // Trackpad swipe forward: small deltas that only trigger once summed.
    (6_000, InputEvent::Wheel { delta_y: 30.0 }),
    (6_016, InputEvent::Wheel { delta_y: 45.0 }),
    (6_032, InputEvent::Wheel { delta_y: 55.0 }),
    // Stale delta after the idle gap; starts a new sum.
    (6_900, InputEvent::Wheel { delta_y: 60.0 }),
    // Swipe back.
    (7_600, InputEvent::Wheel { delta_y: -70.0 }),
    (7_616, InputEvent::Wheel { delta_y: -70.0 }),
    // Dropped: the retreat still holds the lock on this frame.
    (7_616, InputEvent::Click),
    (9_000, InputEvent::Click),
    // Dropped: still inside the advance cooldown.
    (9_100, InputEvent::Click),
];

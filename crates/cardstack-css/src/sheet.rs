use heapless::Vec;
use log::debug;

use cardstack_core::render::{CardVisual, RenderTarget};

use crate::style::CardStyle;

#[derive(Clone, Copy, Debug, Default)]
struct Slot {
    style: CardStyle,
    dirty: bool,
}

/// Inline styles for up to `N` card elements.
#[derive(Debug)]
pub struct StyleSheet<const N: usize> {
    slots: Vec<Slot, N>,
}

impl<const N: usize> StyleSheet<N> {
    /// Creates styles for `card_count` cards, truncated to capacity `N`.
    pub fn new(card_count: usize) -> Self {
        let mut slots = Vec::new();
        for _ in 0..card_count.min(N) {
            let _ = slots.push(Slot::default());
        }
        if card_count > N {
            debug!(
                "css: {} cards exceed sheet capacity {}; extra cards are ignored",
                card_count, N
            );
        }
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn style(&self, index: usize) -> Option<&CardStyle> {
        self.slots.get(index).map(|slot| &slot.style)
    }

    pub fn is_dirty(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.dirty)
    }

    /// Visits every card written since the previous drain, in index order.
    pub fn drain_dirty<F>(&mut self, mut visit: F)
    where
        F: FnMut(usize, &CardStyle),
    {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if core::mem::take(&mut slot.dirty) {
                visit(index, &slot.style);
            }
        }
    }
}

impl<const N: usize> RenderTarget for StyleSheet<N> {
    fn apply_visual_state(&mut self, index: usize, state: &CardVisual) {
        let Some(slot) = self.slots.get_mut(index) else {
            debug!("css: ignoring visual state for card {} of {}", index, self.slots.len());
            return;
        };
        slot.style.apply(state);
        slot.dirty = true;
    }
}

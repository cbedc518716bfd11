//! Projection of the active index onto per-card poses.

use crate::{
    config::StackConfig,
    render::{CardVisual, Shadow, StackedPose, TransitionKind},
};

/// Forward distance from `active` to `index`, wrapping at `total`.
///
/// Returns 0 for an empty stack.
pub fn cyclic_distance(index: usize, active: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (index % total + total - active % total) % total
}

pub fn project_card(index: usize, active: usize, total: usize, config: &StackConfig) -> CardVisual {
    let distance = cyclic_distance(index, active, total);
    let max_visible = config.max_visible as usize;
    if distance >= max_visible {
        return CardVisual::Hidden;
    }

    let depth = distance as u8;
    let step = depth as f32;
    let active_card = depth == 0;

    CardVisual::Stacked(StackedPose {
        depth,
        offset_y_px: step * config.offset_y_px,
        scale: 1.0 - step * config.scale_step,
        rotate_x_deg: config.rotate_x_deg,
        shadow: Shadow::at_depth(depth),
        z_index: config.max_visible as i32 - depth as i32,
        interactive: active_card,
        light_intensity: if active_card {
            config.active_light_intensity
        } else {
            0.0
        },
        transition: TransitionKind::Settle,
    })
}

/// Projects every card of a stack of `total` cards, in index order.
pub fn project_stack<F>(active: usize, total: usize, config: &StackConfig, mut apply: F)
where
    F: FnMut(usize, CardVisual),
{
    for index in 0..total {
        apply(index, project_card(index, active, total, config));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    fn project(active: usize, total: usize) -> Vec<CardVisual> {
        let mut cards = Vec::new();
        project_stack(active, total, &StackConfig::default(), |_, visual| {
            cards.push(visual)
        });
        cards
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn cyclic_distance_wraps() {
        assert_eq!(cyclic_distance(0, 0, 5), 0);
        assert_eq!(cyclic_distance(4, 0, 5), 4);
        assert_eq!(cyclic_distance(0, 4, 5), 1);
        assert_eq!(cyclic_distance(2, 3, 5), 4);
        assert_eq!(cyclic_distance(1, 0, 0), 0);
    }

    #[test]
    fn five_cards_show_four_deep() {
        let cards = project(0, 5);
        let expected = [(0.0, 1.0), (18.0, 0.96), (36.0, 0.92), (54.0, 0.88)];

        for (visual, (offset, scale)) in cards.iter().zip(expected) {
            let pose = visual.stacked().expect("visible card");
            assert!(approx(pose.offset_y_px, offset));
            assert!(approx(pose.scale, scale));
            assert_eq!(pose.rotate_x_deg, -8.0);
        }
        assert_eq!(cards[4], CardVisual::Hidden);
    }

    #[test]
    fn exactly_one_active_card_for_every_index() {
        for total in 1..=9 {
            for active in 0..total {
                let cards = project(active, total);
                let interactive: Vec<usize> = cards
                    .iter()
                    .enumerate()
                    .filter(|(_, visual)| visual.is_interactive())
                    .map(|(index, _)| index)
                    .collect();
                assert_eq!(interactive, [active]);

                let topmost = cards
                    .iter()
                    .filter_map(CardVisual::stacked)
                    .filter(|pose| pose.z_index == 4)
                    .count();
                assert_eq!(topmost, 1);
            }
        }
    }

    #[test]
    fn depth_drives_shadow_and_light() {
        let cards = project(3, 5);

        let active = cards[3].stacked().expect("active card");
        assert_eq!(active.light_intensity, 0.15);
        assert_eq!(active.shadow, Shadow::at_depth(0));
        assert_eq!(active.shadow.offset_y_px, 12.0);
        assert_eq!(active.shadow.blur_px, 24.0);

        let behind = cards[0].stacked().expect("wrapped card");
        assert_eq!(behind.depth, 2);
        assert_eq!(behind.light_intensity, 0.0);
        assert_eq!(behind.shadow.offset_y_px, 20.0);
        assert_eq!(behind.shadow.blur_px, 36.0);
        assert_eq!(behind.z_index, 2);
        assert_eq!(behind.transition, TransitionKind::Settle);

        assert_eq!(cards[2], CardVisual::Hidden);
    }

    #[test]
    fn small_stacks_show_every_card() {
        let cards = project(1, 2);
        assert!(cards.iter().all(CardVisual::is_visible));
    }

    #[test]
    fn empty_stack_projects_nothing() {
        assert!(project(0, 0).is_empty());
    }
}

//! Per-card visual states and the render target seam.

/// Easing presets used for card motion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransitionKind {
    /// Transitions disabled; the next write snaps into place.
    None,
    /// Re-layout motion for stacked cards.
    Settle,
    /// Outgoing card thrown off-screen on advance.
    FlingOut,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_y_px: f32,
    pub blur_px: f32,
    pub alpha: f32,
}

impl Shadow {
    pub fn at_depth(depth: u8) -> Self {
        let depth = depth as f32;
        Self {
            offset_y_px: 12.0 + depth * 4.0,
            blur_px: 24.0 + depth * 6.0,
            alpha: 0.08,
        }
    }
}

/// Resting pose of a visible card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackedPose {
    /// Cyclic distance from the active card.
    pub depth: u8,
    pub offset_y_px: f32,
    pub scale: f32,
    pub rotate_x_deg: f32,
    pub shadow: Shadow,
    pub z_index: i32,
    pub interactive: bool,
    pub light_intensity: f32,
    pub transition: TransitionKind,
}

impl StackedPose {
    pub fn is_active(&self) -> bool {
        self.depth == 0
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FlingDirection {
    /// Leaves towards the right (advance).
    Out,
    /// Starts from the left before re-entering (retreat).
    In,
}

/// Off-screen pose of a card being thrown out or brought back in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingPose {
    pub direction: FlingDirection,
    /// Horizontal translation as a percentage of the card width.
    pub translate_x_pct: f32,
    pub translate_y_px: f32,
    pub rotate_deg: f32,
    pub transition: TransitionKind,
}

impl FlingPose {
    pub fn outgoing() -> Self {
        Self {
            direction: FlingDirection::Out,
            translate_x_pct: 120.0,
            translate_y_px: -120.0,
            rotate_deg: 30.0,
            transition: TransitionKind::FlingOut,
        }
    }

    pub fn incoming_start() -> Self {
        Self {
            direction: FlingDirection::In,
            translate_x_pct: -120.0,
            translate_y_px: -120.0,
            rotate_deg: -30.0,
            transition: TransitionKind::None,
        }
    }
}

/// State written for a single card.
///
/// `Hidden` and `Fling` are partial updates: a target keeps whatever it last
/// wrote for the properties they do not mention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardVisual {
    Stacked(StackedPose),
    /// Zero opacity, pointer events disabled.
    Hidden,
    /// Transform and transition only.
    Fling(FlingPose),
}

impl CardVisual {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Stacked(pose) if pose.interactive)
    }

    pub fn stacked(&self) -> Option<&StackedPose> {
        match self {
            Self::Stacked(pose) => Some(pose),
            _ => None,
        }
    }
}

/// Receives visual states for cards, addressed by their index in the stack.
pub trait RenderTarget {
    fn apply_visual_state(&mut self, index: usize, state: &CardVisual);
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn apply_visual_state(&mut self, index: usize, state: &CardVisual) {
        (**self).apply_visual_state(index, state);
    }
}

use core::fmt::{self, Write};

use cardstack_core::render::{CardVisual, FlingPose, Shadow, StackedPose, TransitionKind};

const SETTLE_TRANSITION: &str =
    "transform 0.6s cubic-bezier(0.23,1,0.32,1), box-shadow 0.6s ease";
const FLING_OUT_TRANSITION: &str = "transform 0.5s cubic-bezier(0.215,0.61,0.355,1)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Stacked {
        offset_y_px: f32,
        scale: f32,
        rotate_x_deg: f32,
    },
    Fling {
        translate_x_pct: f32,
        translate_y_px: f32,
        rotate_deg: f32,
    },
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Stacked {
                offset_y_px,
                scale,
                rotate_x_deg,
            } => write!(
                f,
                "translateY({offset_y_px}px) scale({scale}) rotateX({rotate_x_deg}deg)"
            ),
            Self::Fling {
                translate_x_pct,
                translate_y_px,
                rotate_deg,
            } => write!(
                f,
                "translate({translate_x_pct}%, {translate_y_px}px) rotate({rotate_deg}deg)"
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointerEvents {
    Auto,
    None,
}

impl PointerEvents {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::None => "none",
        }
    }
}

/// Inline style of one card element. `None` means never written.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardStyle {
    pub transform: Option<Transform>,
    pub transition: Option<TransitionKind>,
    pub box_shadow: Option<Shadow>,
    pub opacity: Option<f32>,
    pub z_index: Option<i32>,
    pub pointer_events: Option<PointerEvents>,
    pub light_intensity: Option<f32>,
}

impl CardStyle {
    pub fn apply(&mut self, visual: &CardVisual) {
        match visual {
            CardVisual::Stacked(pose) => self.apply_stacked(pose),
            CardVisual::Hidden => {
                self.opacity = Some(0.0);
                self.pointer_events = Some(PointerEvents::None);
            }
            CardVisual::Fling(pose) => self.apply_fling(pose),
        }
    }

    fn apply_stacked(&mut self, pose: &StackedPose) {
        self.transition = Some(pose.transition);
        self.transform = Some(Transform::Stacked {
            offset_y_px: pose.offset_y_px,
            scale: pose.scale,
            rotate_x_deg: pose.rotate_x_deg,
        });
        self.box_shadow = Some(pose.shadow);
        self.opacity = Some(1.0);
        self.z_index = Some(pose.z_index);
        self.pointer_events = Some(if pose.interactive {
            PointerEvents::Auto
        } else {
            PointerEvents::None
        });
        self.light_intensity = Some(pose.light_intensity);
    }

    fn apply_fling(&mut self, pose: &FlingPose) {
        self.transition = Some(pose.transition);
        self.transform = Some(Transform::Fling {
            translate_x_pct: pose.translate_x_pct,
            translate_y_px: pose.translate_y_px,
            rotate_deg: pose.rotate_deg,
        });
    }

    /// Writes `property: value;` pairs for every property set so far.
    pub fn write_declarations<W: Write>(&self, out: &mut W) -> fmt::Result {
        let mut first = true;

        if let Some(transition) = self.transition {
            separate(out, &mut first)?;
            write!(out, "transition: {};", transition_value(transition))?;
        }
        if let Some(transform) = self.transform {
            separate(out, &mut first)?;
            write!(out, "transform: {transform};")?;
        }
        if let Some(shadow) = self.box_shadow {
            separate(out, &mut first)?;
            write!(
                out,
                "box-shadow: 0 {}px {}px rgba(0,0,0,{});",
                shadow.offset_y_px, shadow.blur_px, shadow.alpha
            )?;
        }
        if let Some(opacity) = self.opacity {
            separate(out, &mut first)?;
            write!(out, "opacity: {opacity};")?;
        }
        if let Some(z_index) = self.z_index {
            separate(out, &mut first)?;
            write!(out, "z-index: {z_index};")?;
        }
        if let Some(pointer_events) = self.pointer_events {
            separate(out, &mut first)?;
            write!(out, "pointer-events: {};", pointer_events.as_str())?;
        }
        if let Some(light) = self.light_intensity {
            separate(out, &mut first)?;
            write!(out, "--light-intensity: {light};")?;
        }
        Ok(())
    }

    /// Renders the declarations into a fixed-capacity string.
    pub fn to_declarations<const N: usize>(&self) -> Result<heapless::String<N>, fmt::Error> {
        let mut out = heapless::String::new();
        self.write_declarations(&mut out)?;
        Ok(out)
    }
}

fn separate<W: Write>(out: &mut W, first: &mut bool) -> fmt::Result {
    if core::mem::replace(first, false) {
        Ok(())
    } else {
        out.write_char(' ')
    }
}

fn transition_value(kind: TransitionKind) -> &'static str {
    match kind {
        TransitionKind::None => "none",
        TransitionKind::Settle => SETTLE_TRANSITION,
        TransitionKind::FlingOut => FLING_OUT_TRANSITION,
    }
}

#[cfg(test)]
mod tests {
    use cardstack_core::{config::StackConfig, layout::project_card};

    use super::*;

    fn rendered(style: &CardStyle) -> heapless::String<512> {
        style.to_declarations().expect("declarations fit")
    }

    #[test]
    fn active_card_writes_full_style() {
        let mut style = CardStyle::default();
        style.apply(&project_card(0, 0, 5, &StackConfig::default()));

        assert_eq!(
            rendered(&style).as_str(),
            "transition: transform 0.6s cubic-bezier(0.23,1,0.32,1), box-shadow 0.6s ease; \
             transform: translateY(0px) scale(1) rotateX(-8deg); \
             box-shadow: 0 12px 24px rgba(0,0,0,0.08); \
             opacity: 1; z-index: 4; pointer-events: auto; --light-intensity: 0.15;"
        );
    }

    #[test]
    fn second_card_sits_lower_and_smaller() {
        let mut style = CardStyle::default();
        style.apply(&project_card(1, 0, 5, &StackConfig::default()));

        assert_eq!(
            style.transform,
            Some(Transform::Stacked {
                offset_y_px: 18.0,
                scale: 0.96,
                rotate_x_deg: -8.0,
            })
        );
        let text = rendered(&style);
        assert!(text.contains("transform: translateY(18px) scale(0.96) rotateX(-8deg);"));
        assert!(text.contains("box-shadow: 0 16px 30px rgba(0,0,0,0.08);"));
        assert!(text.contains("pointer-events: none;"));
        assert!(text.contains("--light-intensity: 0;"));
    }

    #[test]
    fn hidden_keeps_previous_transform() {
        let mut style = CardStyle::default();
        style.apply(&project_card(3, 0, 5, &StackConfig::default()));
        let before = style.transform;

        style.apply(&CardVisual::Hidden);

        assert_eq!(style.transform, before);
        assert_eq!(style.opacity, Some(0.0));
        assert_eq!(style.pointer_events, Some(PointerEvents::None));
    }

    #[test]
    fn fling_out_only_touches_motion() {
        let mut style = CardStyle::default();
        style.apply(&CardVisual::Fling(FlingPose::outgoing()));

        assert_eq!(
            rendered(&style).as_str(),
            "transition: transform 0.5s cubic-bezier(0.215,0.61,0.355,1); \
             transform: translate(120%, -120px) rotate(30deg);"
        );
    }

    #[test]
    fn fling_in_start_disables_transition() {
        let mut style = CardStyle::default();
        style.apply(&CardVisual::Fling(FlingPose::incoming_start()));

        assert_eq!(
            rendered(&style).as_str(),
            "transition: none; transform: translate(-120%, -120px) rotate(-30deg);"
        );
    }

    #[test]
    fn unwritten_style_is_empty() {
        assert!(rendered(&CardStyle::default()).is_empty());
    }

    #[test]
    fn short_buffer_reports_overflow() {
        let mut style = CardStyle::default();
        style.apply(&project_card(0, 0, 5, &StackConfig::default()));

        assert!(style.to_declarations::<16>().is_err());
    }
}

//! Inline pointer effects for project cards and skill chips.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTarget {
    Project,
    Skill,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverPhase {
    Enter,
    Leave,
}

const IDENTITY_TRANSFORM: &str = "translateY(0) scale(1)";
const PROJECT_ENTER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
const PROJECT_ENTER_SHADOW: &str = "0 20px 40px rgba(0, 0, 0, 0.1)";
const SKILL_ENTER_TRANSFORM: &str = "translateY(-5px) scale(1.05)";

/// `(property, value)` pairs to write for a transition. An empty value
/// clears the property.
pub fn hover_style(target: HoverTarget, phase: HoverPhase) -> &'static [(&'static str, &'static str)] {
    match (target, phase) {
        (HoverTarget::Project, HoverPhase::Enter) => &[
            ("transform", PROJECT_ENTER_TRANSFORM),
            ("box-shadow", PROJECT_ENTER_SHADOW),
        ],
        (HoverTarget::Project, HoverPhase::Leave) => {
            &[("transform", IDENTITY_TRANSFORM), ("box-shadow", "")]
        }
        (HoverTarget::Skill, HoverPhase::Enter) => &[("transform", SKILL_ENTER_TRANSFORM)],
        (HoverTarget::Skill, HoverPhase::Leave) => &[("transform", IDENTITY_TRANSFORM)],
    }
}

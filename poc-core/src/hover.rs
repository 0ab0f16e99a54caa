//! Hover styling as a function of hover state.
//!
//! Event handlers only update a `HoverState`; the render step then asks these
//! functions for the inline style of every affected element and writes it.

/// One inline style declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    pub property: &'static str,
    pub value: &'static str,
}

impl StyleRule {
    pub const fn new(property: &'static str, value: &'static str) -> Self {
        Self { property, value }
    }
}

/// Which member of a group is under the pointer, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<usize>,
}

impl HoverState {
    pub fn enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Pointer left `index`. A late leave for an element that is no longer
    /// the hovered one does not clear the newer hover.
    pub fn leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }
}

/// `.tech-item` lift.
pub fn tech_item_style(hovered: bool) -> [StyleRule; 1] {
    let transform = if hovered {
        "translateY(-5px) scale(1.02)"
    } else {
        "translateY(0) scale(1)"
    };
    [StyleRule::new("transform", transform)]
}

/// `.workflow-step` opacity: every step but the hovered one dims.
pub fn workflow_step_opacity(index: usize, state: HoverState) -> StyleRule {
    let value = match state.hovered() {
        Some(hovered) if hovered != index => "0.7",
        _ => "1",
    };
    StyleRule::new("opacity", value)
}

/// `.score-circle` inside a hovered `.assessment-category`.
pub fn score_circle_style(hovered: bool) -> Vec<StyleRule> {
    if hovered {
        vec![
            StyleRule::new("transform", "scale(1.05)"),
            StyleRule::new("transition", "transform 0.3s ease"),
        ]
    } else {
        vec![StyleRule::new("transform", "scale(1)")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opacities(count: usize, state: HoverState) -> Vec<&'static str> {
        (0..count).map(|i| workflow_step_opacity(i, state).value).collect()
    }

    #[test]
    fn no_hover_leaves_all_steps_opaque() {
        assert_eq!(opacities(4, HoverState::default()), vec!["1"; 4]);
    }

    #[test]
    fn hovering_a_step_dims_the_others() {
        let mut state = HoverState::default();
        state.enter(2);
        assert_eq!(opacities(4, state), vec!["0.7", "0.7", "1", "0.7"]);

        state.leave(2);
        assert_eq!(opacities(4, state), vec!["1"; 4]);
    }

    #[test]
    fn stale_leave_keeps_current_hover() {
        let mut state = HoverState::default();
        state.enter(0);
        state.enter(1);
        state.leave(0);
        assert!(state.is_hovered(1));
        assert_eq!(opacities(3, state), vec!["0.7", "1", "0.7"]);
    }

    #[test]
    fn tech_item_transform_follows_hover() {
        assert_eq!(tech_item_style(true)[0].value, "translateY(-5px) scale(1.02)");
        assert_eq!(tech_item_style(false)[0].value, "translateY(0) scale(1)");
    }

    #[test]
    fn score_circle_sets_transition_only_on_enter() {
        let on = score_circle_style(true);
        assert!(on.contains(&StyleRule::new("transition", "transform 0.3s ease")));
        assert_eq!(score_circle_style(false), vec![StyleRule::new("transform", "scale(1)")]);
    }
}

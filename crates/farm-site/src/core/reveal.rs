//! Entrance animations.
//!
//! Elements start hidden (transparent, pushed 20px down) with a transition
//! whose delay grows with the element's index. Cards are revealed once when
//! they first intersect the viewport; hero elements are revealed on a timer.

/// Initial inline styling for elements awaiting their entrance.
pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(20px)";

/// Inline styling the hero elements are moved to.
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

/// Class added to observed elements once they are revealed.
pub const REVEALED_CLASS: &str = "revealed";

const TRANSITION_DURATION: &str = "0.6s";

/// Which entrance an element belongs to; decides its stagger step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealGroup {
    /// Product cards and value items, revealed on intersection
    Cards,
    /// Hero content, revealed after a fixed delay
    Hero,
}

impl RevealGroup {
    /// Stagger between consecutive elements, in milliseconds.
    pub fn stagger_ms(self) -> u32 {
        match self {
            Self::Cards => 80,
            Self::Hero => 120,
        }
    }

    /// Transition delay for the element at `index`, in seconds.
    pub fn delay_secs(self, index: usize) -> f64 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        f64::from(index.saturating_mul(self.stagger_ms())) / 1000.0
    }

    /// CSS `transition` value for the element at `index`.
    pub fn transition(self, index: usize) -> String {
        let delay = self.delay_secs(index);
        format!(
            "opacity {TRANSITION_DURATION} ease {delay}s, transform {TRANSITION_DURATION} ease {delay}s"
        )
    }
}

/// Per-element reveal state. Only ever moves `Hidden` -> `Revealed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// One-shot reveal bookkeeping for a set of observed elements.
///
/// Each observed element holds an observation until its first intersecting
/// report; `on_intersection` returns `true` exactly once per element, which
/// is the caller's cue to release the observation.
#[derive(Debug, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a new element, returning its index.
    pub fn observe(&mut self) -> usize {
        self.states.push(RevealState::Hidden);
        self.states.len() - 1
    }

    #[cfg(test)]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Intersection report for the element at `index`.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        let Some(state) = self.states.get_mut(index) else {
            return false;
        };
        if !is_intersecting || *state == RevealState::Revealed {
            return false;
        }
        *state = RevealState::Revealed;
        true
    }

    /// Number of elements still waiting for their entrance.
    pub fn pending(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == RevealState::Hidden)
            .count()
    }
}

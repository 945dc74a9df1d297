//! Newsletter signup lifecycle.
//!
//! Submitting walks the button through `Joining...` -> `Joined!` -> its
//! original content. Nothing is sent anywhere; the wait stands in for the
//! request latency.

pub const JOINING_HTML: &str = "<span>Joining...</span>";
pub const JOINED_HTML: &str = "<span>Joined!</span>";

/// Simulated request latency.
pub const SUBMIT_LATENCY_MS: u32 = 1500;
/// How long the success label stays before the button is restored.
pub const RESET_DELAY_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// Timed step of a submission, in the order they run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStep {
    /// Latency elapsed: show success and clear the fields
    Joined,
    /// Success label shown long enough: put the button back
    Restore,
}

/// Content and enabled state of the submit button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub html: String,
    pub disabled: bool,
}

/// What the DOM should do when a step runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub button: ButtonView,
    /// Reset the form's fields
    pub reset_fields: bool,
}

#[derive(Debug)]
pub struct NewsletterForm {
    phase: SubmitPhase,
    original_html: Option<String>,
    latency_ms: u32,
    reset_delay_ms: u32,
}

impl NewsletterForm {
    pub fn new(latency_ms: u32, reset_delay_ms: u32) -> Self {
        Self {
            phase: SubmitPhase::Idle,
            original_html: None,
            latency_ms,
            reset_delay_ms,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Form submitted while the button shows `button_html`.
    ///
    /// Returns the loading view, or `None` if a submission is already in
    /// flight (a programmatic dispatch can still reach us while the button
    /// is disabled).
    pub fn submit(&mut self, button_html: &str) -> Option<ButtonView> {
        if self.phase != SubmitPhase::Idle {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        self.original_html = Some(button_html.to_owned());
        Some(ButtonView {
            html: JOINING_HTML.to_owned(),
            disabled: true,
        })
    }

    /// The steps following a successful `submit`, as `(delay_ms, step)`
    /// pairs where each delay is relative to the previous step.
    pub fn timeline(&self) -> [(u32, FormStep); 2] {
        [
            (self.latency_ms, FormStep::Joined),
            (self.reset_delay_ms, FormStep::Restore),
        ]
    }

    /// Run a timed step. Out-of-order steps are ignored.
    pub fn apply(&mut self, step: FormStep) -> Option<StepOutcome> {
        match (self.phase, step) {
            (SubmitPhase::Submitting, FormStep::Joined) => {
                self.phase = SubmitPhase::Success;
                Some(StepOutcome {
                    button: ButtonView {
                        html: JOINED_HTML.to_owned(),
                        disabled: true,
                    },
                    reset_fields: true,
                })
            }
            (SubmitPhase::Success, FormStep::Restore) => {
                self.phase = SubmitPhase::Idle;
                Some(StepOutcome {
                    button: ButtonView {
                        html: self.original_html.take().unwrap_or_default(),
                        disabled: false,
                    },
                    reset_fields: false,
                })
            }
            _ => None,
        }
    }
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self::new(SUBMIT_LATENCY_MS, RESET_DELAY_MS)
    }
}

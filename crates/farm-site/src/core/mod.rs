//! Core site logic - pure state machines, no browser dependencies.
//!
//! # Constraints
//!
//! - NO `web_sys`, `wasm_bindgen` or `zoon`
//! - NO `RefCell<T>` for state
//!
//! Every controller in `io/` owns one of these state machines and treats the
//! DOM as a projection of it. Keeping the rules here means they run under
//! plain `cargo test` without a browser.
//!
//! # Module Structure
//!
//! - `menu`: mobile menu open/closed state
//! - `anchor`: in-page fragment links and scroll targets
//! - `scroll`: frame throttle, "scrolled" threshold, active section lookup
//! - `reveal`: hidden styling, stagger timing, one-shot reveal tracking
//! - `newsletter`: simulated signup submit lifecycle
//! - `clock`: virtual time for playing timelines in tests

pub mod anchor;
#[cfg(test)]
pub mod clock;
pub mod menu;
pub mod newsletter;
pub mod reveal;
pub mod scroll;

pub use anchor::{in_page_fragment, scroll_target_top};
pub use menu::{Menu, MenuProjection, MenuState};
pub use newsletter::{ButtonView, FormStep, NewsletterForm, SubmitPhase};
pub use reveal::{RevealGroup, RevealState, RevealTracker};
pub use scroll::{FrameThrottle, ScrollEffects, ScrollFrame, SectionOffset};

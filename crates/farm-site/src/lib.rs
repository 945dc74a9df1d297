//! Travis County Farm site interactions.
//!
//! Progressive enhancement for the static marketing pages: mobile menu,
//! scroll-driven nav styling, entrance animations and the newsletter form.
//! Each piece quietly stays off when its markup is missing.
//!
//! # Architecture
//!
//! - `core/` — Pure state machines. NO web_sys, zoon, RefCell.
//! - `io/` — Controllers that feed browser events into `core` and project
//!   the resulting state onto the DOM.
//! - `config` — Element ids, selectors and timings.

pub mod config;
pub mod core;
pub mod io;

pub use zoon;

/// Per-event console logging, enabled with the `debug-logging` feature.
pub const LOG_DEBUG: bool = cfg!(feature = "debug-logging");

/// Wire up every controller once the document has been parsed.
pub fn start() {
    let result = io::on_page_ready(|| {
        let config = io::read_config();
        io::init_all(&config);
    });
    if let Err(error) = result {
        zoon::eprintln!("[Site] Failed to start: {error}");
    }
}

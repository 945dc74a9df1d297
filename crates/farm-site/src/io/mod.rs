//! IO layer — bridges `core` with the browser.
//!
//! This is the ONLY place where `Rc<RefCell<>>`, closures handed to JS and
//! `web_sys` calls are allowed. Each controller turns browser events into
//! calls on its `core` state machine and projects the result onto the DOM.

pub mod dom;
pub mod forms;
pub mod navigation;
pub mod reveal;
pub mod scroll_effects;

use crate::LOG_DEBUG;
use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use dom::DomError;

/// Run `init` once the document is parsed.
pub fn on_page_ready(init: impl FnOnce() + 'static) -> Result<(), DomError> {
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        init();
        return Ok(());
    }
    let mut init = Some(init);
    dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some(init) = init.take() {
            init();
        }
    })
}

/// Site config from the page's inline JSON block, or the defaults.
pub fn read_config() -> SiteConfig {
    let Some(json) = dom::document()
        .ok()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&json) {
        Ok(config) => {
            if LOG_DEBUG {
                zoon::println!("[Config] Loaded from #{CONFIG_ELEMENT_ID}");
            }
            config
        }
        Err(error) => {
            zoon::eprintln!("[Config] Ignoring #{CONFIG_ELEMENT_ID}: {error}");
            SiteConfig::default()
        }
    }
}

/// Start all four controllers. They touch disjoint markup, so order does
/// not matter and one failing leaves the others running.
pub fn init_all(config: &SiteConfig) {
    report("navigation", navigation::init(config));
    report("scroll effects", scroll_effects::init(config));
    report("reveal animations", reveal::init(config));
    report("newsletter form", forms::init(config));
}

fn report(controller: &str, result: Result<(), DomError>) {
    match result {
        Ok(()) => {}
        Err(error) if error.is_missing_markup() => {
            if LOG_DEBUG {
                zoon::println!("[Site] {controller} disabled: {error}");
            }
        }
        Err(error) => {
            zoon::eprintln!("[Site] {controller} failed to start: {error}");
        }
    }
}

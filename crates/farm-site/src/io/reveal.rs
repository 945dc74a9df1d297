//! Reveal animation controller.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node,
};

use super::dom::{self, DomError};
use crate::LOG_DEBUG;
use crate::config::SiteConfig;
use crate::core::reveal::{
    HIDDEN_OPACITY, HIDDEN_TRANSFORM, REVEALED_CLASS, RevealGroup, RevealTracker, SHOWN_OPACITY,
    SHOWN_TRANSFORM,
};

/// A live `observe()` registration for one element.
///
/// Released exactly once, by value, when the element is revealed.
struct Observation {
    observer: IntersectionObserver,
    element: HtmlElement,
}

impl Observation {
    fn acquire(observer: &IntersectionObserver, element: &HtmlElement) -> Self {
        observer.observe(element);
        Self {
            observer: observer.clone(),
            element: element.clone(),
        }
    }

    fn release(self) {
        self.observer.unobserve(&self.element);
    }
}

#[derive(Default)]
struct RevealController {
    tracker: RevealTracker,
    elements: Vec<HtmlElement>,
    observations: Vec<Option<Observation>>,
}

impl RevealController {
    fn track(&mut self, observer: &IntersectionObserver, element: HtmlElement) {
        self.tracker.observe();
        self.observations
            .push(Some(Observation::acquire(observer, &element)));
        self.elements.push(element);
    }

    fn index_of(&self, target: &Node) -> Option<usize> {
        self.elements
            .iter()
            .position(|element| element.is_same_node(Some(target)))
    }

    fn handle_entries(&mut self, entries: js_sys::Array) {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(index) = self.index_of(&target) else {
                continue;
            };
            if !self.tracker.on_intersection(index, entry.is_intersecting()) {
                continue;
            }
            if let Some(observation) = self.observations[index].take() {
                observation.release();
            }
            if let Err(error) = reveal_observed(&self.elements[index]) {
                zoon::eprintln!("[Reveal] Failed to reveal element {index}: {error}");
            }
            if LOG_DEBUG {
                zoon::println!(
                    "[Reveal] Element {index} revealed, {} still hidden",
                    self.tracker.pending()
                );
            }
        }
    }
}

fn hide(element: &HtmlElement, group: RevealGroup, index: usize) -> Result<(), DomError> {
    dom::set_style(element, "opacity", HIDDEN_OPACITY)?;
    dom::set_style(element, "transform", HIDDEN_TRANSFORM)?;
    dom::set_style(element, "transition", &group.transition(index))?;
    Ok(())
}

/// Drop the inline hidden styling so the stylesheet's values transition in.
fn reveal_observed(element: &HtmlElement) -> Result<(), DomError> {
    dom::clear_style(element, "opacity")?;
    dom::clear_style(element, "transform")?;
    dom::set_class(element, REVEALED_CLASS, true)?;
    Ok(())
}

fn reveal_hero(element: &HtmlElement) -> Result<(), DomError> {
    dom::set_style(element, "opacity", SHOWN_OPACITY)?;
    dom::set_style(element, "transform", SHOWN_TRANSFORM)?;
    Ok(())
}

pub fn init(config: &SiteConfig) -> Result<(), DomError> {
    let document = dom::document()?;
    init_cards(config, &document)?;
    init_hero(config, &document)?;
    Ok(())
}

fn init_cards(config: &SiteConfig, document: &web_sys::Document) -> Result<(), DomError> {
    let cards: Vec<HtmlElement> = dom::query_all(document, &config.card_selector)?;
    if cards.is_empty() {
        return Ok(());
    }

    let controller = Rc::new(RefCell::new(RevealController::default()));
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new({
        let controller = controller.clone();
        move |entries| controller.borrow_mut().handle_entries(entries)
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // The observer keeps calling back until every card is revealed.
    callback.forget();

    let mut controller = controller.borrow_mut();
    for (index, card) in cards.into_iter().enumerate() {
        // A card that cannot be hidden is left visible and never observed.
        if let Err(error) = hide(&card, RevealGroup::Cards, index) {
            zoon::eprintln!("[Reveal] Failed to hide card {index}: {error}");
            continue;
        }
        controller.track(&observer, card);
    }

    if LOG_DEBUG {
        zoon::println!("[Reveal] Observing {} card(s)", controller.tracker.pending());
    }
    Ok(())
}

fn init_hero(config: &SiteConfig, document: &web_sys::Document) -> Result<(), DomError> {
    let hero: Vec<HtmlElement> = dom::query_all(document, &config.hero_selector)?;
    if hero.is_empty() {
        return Ok(());
    }
    for (index, element) in hero.iter().enumerate() {
        hide(element, RevealGroup::Hero, index)?;
    }

    dom::after(config.hero_delay_ms, move || {
        for element in &hero {
            if let Err(error) = reveal_hero(element) {
                zoon::eprintln!("[Reveal] Failed to show hero element: {error}");
            }
        }
        if LOG_DEBUG {
            zoon::println!("[Reveal] Hero entrance started for {} element(s)", hero.len());
        }
    });
    Ok(())
}

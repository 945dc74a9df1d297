//! Scroll effects controller.
//!
//! Scroll notifications only arm the frame throttle; the actual work runs in
//! a `requestAnimationFrame` callback, once per frame no matter how many
//! notifications arrived before it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, Window};

use super::dom::{self, DomError};
use crate::LOG_DEBUG;
use crate::config::SiteConfig;
use crate::core::scroll::{FrameThrottle, ScrollEffects, ScrollFrame, SectionOffset};

const SCROLLED_CLASS: &str = "scrolled";
const ACTIVE_CLASS: &str = "active";

struct ScrollController {
    throttle: FrameThrottle,
    effects: ScrollEffects,
    window: Window,
    nav: HtmlElement,
    section_selector: String,
    nav_link_selector: String,
}

impl ScrollController {
    /// One handling pass: measure, compute, project.
    fn run_frame(&mut self) -> Result<ScrollFrame, DomError> {
        let document = dom::document()?;
        let scroll_y = self.window.scroll_y()?;
        let nav_height = f64::from(self.nav.offset_height());

        let sections: Vec<SectionOffset> =
            dom::query_all::<HtmlElement>(&document, &self.section_selector)?
                .iter()
                .map(|section| SectionOffset::new(section.id(), f64::from(section.offset_top())))
                .collect();
        let links: Vec<Element> = dom::query_all(&document, &self.nav_link_selector)?;
        let hrefs: Vec<Option<String>> =
            links.iter().map(|link| link.get_attribute("href")).collect();

        let frame = self.effects.process(scroll_y, nav_height, &sections, &hrefs);

        dom::set_class(&self.nav, SCROLLED_CLASS, frame.scrolled)?;
        for link in &links {
            dom::set_class(link, ACTIVE_CLASS, false)?;
        }
        if let Some(link) = frame.active_link.and_then(|index| links.get(index)) {
            dom::set_class(link, ACTIVE_CLASS, true)?;
        }

        if LOG_DEBUG {
            zoon::println!(
                "[Scroll] Pass {} at {scroll_y}px: scrolled={} active={:?}",
                self.effects.passes(),
                frame.scrolled,
                frame.active_link.and_then(|index| hrefs.get(index).cloned().flatten()),
            );
        }
        Ok(frame)
    }
}

pub fn init(config: &SiteConfig) -> Result<(), DomError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let nav: HtmlElement = dom::element_by_id(&document, &config.nav_id)?;

    let controller = Rc::new(RefCell::new(ScrollController {
        throttle: FrameThrottle::new(),
        effects: ScrollEffects::new(config.scrolled_threshold_px, config.active_section_margin_px),
        window: window.clone(),
        nav,
        section_selector: config.section_selector.clone(),
        nav_link_selector: config.nav_link_selector.clone(),
    }));

    let on_frame = Closure::<dyn FnMut()>::new({
        let controller = controller.clone();
        move || {
            let mut controller = controller.borrow_mut();
            if let Err(error) = controller.run_frame() {
                zoon::eprintln!("[Scroll] Frame failed: {error}");
            }
            controller.throttle.frame_done();
        }
    });
    let on_frame_fn: js_sys::Function =
        on_frame.as_ref().unchecked_ref::<js_sys::Function>().clone();
    // Reused for every frame for the lifetime of the page.
    on_frame.forget();

    dom::listen(&window, "scroll", {
        let window = window.clone();
        move |_| {
            if !controller.borrow_mut().throttle.request() {
                return;
            }
            if let Err(error) = window.request_animation_frame(&on_frame_fn) {
                zoon::eprintln!("[Scroll] Failed to request frame: {}", DomError::from(error));
                controller.borrow_mut().throttle.frame_done();
            }
        }
    })?;

    if LOG_DEBUG {
        zoon::println!("[Scroll] Ready");
    }
    Ok(())
}

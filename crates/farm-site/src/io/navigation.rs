//! Navigation controller: mobile menu and smooth in-page anchors.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, Node, ScrollBehavior, ScrollToOptions};

use super::dom::{self, DomError};
use crate::LOG_DEBUG;
use crate::config::SiteConfig;
use crate::core::anchor::{in_page_fragment, scroll_target_top};
use crate::core::menu::Menu;

const ACTIVE_CLASS: &str = "active";

/// Browser events the menu reacts to.
#[derive(Clone, Copy, Debug)]
pub enum NavEvent {
    TogglePressed,
    LinkClicked,
    DocumentClicked { inside_nav: bool },
}

struct Navigation {
    menu: Menu,
    toggle: HtmlElement,
    links_panel: HtmlElement,
}

impl Navigation {
    fn handle(&mut self, event: NavEvent) {
        let before = self.menu.state();
        match event {
            NavEvent::TogglePressed => {
                self.menu.toggle();
            }
            NavEvent::LinkClicked => {
                self.menu.close();
            }
            NavEvent::DocumentClicked { inside_nav } => {
                if !self.menu.document_click(inside_nav) {
                    return;
                }
            }
        }
        if LOG_DEBUG {
            zoon::println!("[Nav] {event:?}: {before:?} -> {:?}", self.menu.state());
        }
        if let Err(error) = self.project() {
            zoon::eprintln!("[Nav] Failed to update menu markers: {error}");
        }
    }

    /// Write the menu state onto the panel and the toggle.
    fn project(&self) -> Result<(), DomError> {
        let projection = self.menu.projection();
        dom::set_class(&self.links_panel, ACTIVE_CLASS, projection.active)?;
        dom::set_class(&self.toggle, ACTIVE_CLASS, projection.active)?;
        self.toggle
            .set_attribute("aria-expanded", projection.aria_expanded)?;
        Ok(())
    }
}

pub fn init(config: &SiteConfig) -> Result<(), DomError> {
    let document = dom::document()?;
    let nav: HtmlElement = dom::element_by_id(&document, &config.nav_id)?;
    let toggle: HtmlElement = dom::element_by_id(&document, &config.nav_toggle_id)?;
    let links_panel: HtmlElement = dom::element_by_id(&document, &config.nav_links_id)?;
    let links: Vec<Element> = dom::query_all_within(&links_panel, "a")?;

    let navigation = Rc::new(RefCell::new(Navigation {
        menu: Menu::new(),
        toggle: toggle.clone(),
        links_panel,
    }));

    dom::listen(&toggle, "click", {
        let navigation = navigation.clone();
        move |_| navigation.borrow_mut().handle(NavEvent::TogglePressed)
    })?;

    for link in &links {
        dom::listen(link, "click", {
            let navigation = navigation.clone();
            move |_| navigation.borrow_mut().handle(NavEvent::LinkClicked)
        })?;
    }

    dom::listen(&document, "click", {
        let nav = nav.clone();
        move |event| {
            let inside_nav = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .is_some_and(|target| nav.contains(Some(&target)));
            navigation
                .borrow_mut()
                .handle(NavEvent::DocumentClicked { inside_nav });
        }
    })?;

    let gap = config.anchor_gap_px;
    for link in &links {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        let Some(fragment) = in_page_fragment(&href).map(str::to_owned) else {
            continue;
        };
        dom::listen(link, "click", {
            let nav = nav.clone();
            move |event| match scroll_to_fragment(&fragment, &nav, gap) {
                Ok(true) => event.prevent_default(),
                Ok(false) => {}
                Err(error) => {
                    zoon::eprintln!("[Nav] Failed to scroll to {fragment}: {error}");
                }
            }
        })?;
    }

    if LOG_DEBUG {
        zoon::println!("[Nav] Ready with {} link(s)", links.len());
    }
    Ok(())
}

/// Smooth-scroll so the fragment's target sits just under the nav bar.
///
/// Returns `false` when no element matches the fragment; the browser then
/// handles the click itself.
fn scroll_to_fragment(fragment: &str, nav: &HtmlElement, gap: f64) -> Result<bool, DomError> {
    let document = dom::document()?;
    // `#1-intro` is a valid href but not a valid selector
    let Ok(Some(target)) = document.query_selector(fragment) else {
        return Ok(false);
    };
    let Some(target) = target.dyn_ref::<HtmlElement>() else {
        return Ok(false);
    };

    let top = scroll_target_top(
        f64::from(target.offset_top()),
        f64::from(nav.offset_height()),
        gap,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);

    let window = dom::window()?;
    window.scroll_to_with_scroll_to_options(&options);
    window
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(fragment))?;

    if LOG_DEBUG {
        zoon::println!("[Nav] Scrolling to {fragment} at {top}px");
    }
    Ok(true)
}

//! Thin helpers over `web_sys` used by every controller.

use std::fmt;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};
use zoon::{Task, Timer};

/// Error returned by DOM lookups and browser calls.
#[derive(Debug)]
pub enum DomError {
    /// No `window` / `document` (not running in a browser page).
    NoWindow,
    /// Expected markup is absent; the enhancement stays off.
    MissingElement(String),
    /// Element exists but is not the expected kind.
    UnexpectedElement {
        selector: String,
        expected: &'static str,
    },
    /// A browser API call threw.
    Js(String),
}

impl DomError {
    /// Absent markup is the normal "feature not on this page" case.
    pub fn is_missing_markup(&self) -> bool {
        matches!(self, DomError::MissingElement(_))
    }
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::NoWindow => write!(f, "no window or document"),
            DomError::MissingElement(selector) => write!(f, "element '{selector}' not found"),
            DomError::UnexpectedElement { selector, expected } => {
                write!(f, "element '{selector}' is not a {expected}")
            }
            DomError::Js(message) => write!(f, "browser call failed: {message}"),
        }
    }
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoWindow)
}

fn cast<T: JsCast>(element: Element, selector: &str) -> Result<T, DomError> {
    element
        .dyn_into::<T>()
        .map_err(|_| DomError::UnexpectedElement {
            selector: selector.to_owned(),
            expected: std::any::type_name::<T>(),
        })
}

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, DomError> {
    let selector = format!("#{id}");
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(selector.clone()))?;
    cast(element, &selector)
}

/// First match of `selector` under `root`.
pub fn query_within<T: JsCast>(root: &Element, selector: &str) -> Result<T, DomError> {
    let element = root
        .query_selector(selector)?
        .ok_or_else(|| DomError::MissingElement(selector.to_owned()))?;
    cast(element, selector)
}

/// All matches of `selector` in the document that are of type `T`.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, DomError> {
    Ok(collect(document.query_selector_all(selector)?))
}

/// All matches of `selector` under `root` that are of type `T`.
pub fn query_all_within<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>, DomError> {
    Ok(collect(root.query_selector_all(selector)?))
}

fn collect<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), DomError> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), DomError> {
    element.style().set_property(property, value)?;
    Ok(())
}

pub fn clear_style(element: &HtmlElement, property: &str) -> Result<(), DomError> {
    element.style().remove_property(property)?;
    Ok(())
}

/// Attach `handler` to `event` on `target`.
///
/// Listeners live as long as the page, so the closure is handed over to JS.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `action` once after `delay_ms`.
pub fn after(delay_ms: u32, action: impl FnOnce() + 'static) {
    Task::start(async move {
        Timer::sleep(delay_ms).await;
        action();
    });
}

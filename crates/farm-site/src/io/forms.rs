//! Newsletter form controller.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{HtmlButtonElement, HtmlFormElement, HtmlInputElement};
use zoon::{Task, Timer};

use super::dom::{self, DomError};
use crate::LOG_DEBUG;
use crate::config::SiteConfig;
use crate::core::newsletter::{ButtonView, FormStep, NewsletterForm};

struct FormController {
    form: NewsletterForm,
    element: HtmlFormElement,
    button: HtmlButtonElement,
    email: Option<HtmlInputElement>,
}

impl FormController {
    /// Starts a submission, returning the timed steps to play.
    fn submit(&mut self) -> Option<[(u32, FormStep); 2]> {
        let email = self.email.as_ref().map(HtmlInputElement::value).unwrap_or_default();
        let Some(view) = self.form.submit(&self.button.inner_html()) else {
            if LOG_DEBUG {
                zoon::println!("[Form] Submit ignored, {:?} in progress", self.form.phase());
            }
            return None;
        };
        if LOG_DEBUG {
            zoon::println!("[Form] Joining with '{email}'");
        }
        self.show(&view);
        Some(self.form.timeline())
    }

    fn run_step(&mut self, step: FormStep) {
        let Some(outcome) = self.form.apply(step) else {
            return;
        };
        self.show(&outcome.button);
        if outcome.reset_fields {
            self.element.reset();
        }
        if LOG_DEBUG {
            zoon::println!("[Form] {step:?} -> {:?}", self.form.phase());
        }
    }

    fn show(&self, view: &ButtonView) {
        self.button.set_inner_html(&view.html);
        self.button.set_disabled(view.disabled);
    }
}

pub fn init(config: &SiteConfig) -> Result<(), DomError> {
    let document = dom::document()?;
    let element: HtmlFormElement = dom::element_by_id(&document, &config.newsletter_form_id)?;
    let button: HtmlButtonElement = dom::query_within(&element, "button")?;
    let email: Option<HtmlInputElement> =
        dom::query_within(&element, r#"input[type="email"]"#).ok();

    let controller = Rc::new(RefCell::new(FormController {
        form: NewsletterForm::new(config.submit_latency_ms, config.reset_delay_ms),
        element: element.clone(),
        button,
        email,
    }));

    dom::listen(&element, "submit", move |event| {
        event.prevent_default();
        let Some(timeline) = controller.borrow_mut().submit() else {
            return;
        };
        let controller = controller.clone();
        Task::start(async move {
            for (delay_ms, step) in timeline {
                Timer::sleep(delay_ms).await;
                controller.borrow_mut().run_step(step);
            }
        });
    })?;

    if LOG_DEBUG {
        zoon::println!("[Form] Ready");
    }
    Ok(())
}

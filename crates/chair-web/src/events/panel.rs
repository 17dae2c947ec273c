use crate::dom;
use crate::input::Intent;
use crate::ui::ControlPanel;
use chair_core::Session;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_panel_clicks(session: Rc<RefCell<Session>>, ui: Rc<ControlPanel>, clock: Instant) {
    let root = ui.root().clone();
    dom::add_listener(&root, "click", move |ev: web::MouseEvent| {
        let Some(button) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("[data-intent]").ok().flatten())
        else {
            return;
        };
        let kind = button.get_attribute("data-intent").unwrap_or_default();
        let value = button.get_attribute("data-value").unwrap_or_default();
        let intent = match Intent::parse(&kind, &value) {
            Ok(intent) => intent,
            Err(e) => {
                log::debug!("[ui] ignoring click: {e}");
                return;
            }
        };
        let events = intent.apply(&mut session.borrow_mut(), clock.elapsed());
        log::debug!("[ui] {:?} -> {:?}", intent, events);
        ui.refresh(&session.borrow());
    });
}

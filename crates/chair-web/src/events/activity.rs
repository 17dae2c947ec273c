use crate::dom;
use crate::input::disposes_on_pagehide;
use crate::ui::ControlPanel;
use chair_core::{ActivityKind, Session};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Any pointer, key, touch or wheel input anywhere on the page counts as
/// user activity for the idle timer.
pub fn wire_activity_listeners(
    session: Rc<RefCell<Session>>,
    ui: Rc<ControlPanel>,
    clock: Instant,
) {
    let Some(window) = web::window() else {
        return;
    };
    for kind in ActivityKind::ALL {
        let session = session.clone();
        let ui = ui.clone();
        dom::add_listener(&window, kind.event_type(), move |_: web::Event| {
            let events = session.borrow_mut().user_activity(kind, clock.elapsed());
            if !events.is_empty() {
                log::debug!("[input] {} -> {:?}", kind.event_type(), events);
                ui.refresh(&session.borrow());
            }
        });
    }
}

/// Cancel every pending timer when the page is unloaded for good. A page
/// kept in the back/forward cache keeps its session.
pub fn wire_teardown(session: Rc<RefCell<Session>>) {
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "pagehide", move |ev: web::PageTransitionEvent| {
        if !disposes_on_pagehide(ev.persisted()) {
            log::debug!("[session] page cached, keeping session");
            return;
        }
        session.borrow_mut().shutdown();
        log::info!("[session] disposed");
    });
}

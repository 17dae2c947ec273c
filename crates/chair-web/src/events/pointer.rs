use crate::dom;
use crate::input::{self, DragState};
use chair_core::CameraRig;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Drag on the canvas orbits the camera, the wheel zooms. No panning.
pub fn wire_orbit_controls(canvas: &web::HtmlCanvasElement, rig: Rc<RefCell<CameraRig>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));

    {
        let drag = drag.clone();
        let canvas_for_capture = canvas.clone();
        dom::add_listener(canvas, "pointerdown", move |ev: web::PointerEvent| {
            drag.borrow_mut().begin(ev.pointer_id(), client_px(&ev));
            _ = canvas_for_capture.set_pointer_capture(ev.pointer_id());
        });
    }
    {
        let drag = drag.clone();
        let rig = rig.clone();
        let canvas_for_size = canvas.clone();
        dom::add_listener(canvas, "pointermove", move |ev: web::PointerEvent| {
            let Some(delta) = drag.borrow_mut().drag_to(ev.pointer_id(), client_px(&ev)) else {
                return;
            };
            let height = canvas_for_size.client_height().max(1) as f32;
            rig.borrow_mut().rotate(delta.x, delta.y, height);
        });
    }
    for ty in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let canvas_for_capture = canvas.clone();
        dom::add_listener(canvas, ty, move |ev: web::PointerEvent| {
            drag.borrow_mut().end(ev.pointer_id());
            _ = canvas_for_capture.release_pointer_capture(ev.pointer_id());
        });
    }
    dom::add_listener(canvas, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        rig.borrow_mut().zoom(input::wheel_direction(ev.delta_y()));
    });
}

#[inline]
fn client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

use crate::render;
use crate::ui::ControlPanel;
use chair_core::{CameraRig, ModelMotion, Session, TransitionDirection, View};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<Session>>,
    pub ui: Rc<ControlPanel>,
    pub rig: Rc<RefCell<CameraRig>>,
    pub motion: ModelMotion,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    /// Shared with the input handlers so every session call sees one clock.
    pub clock: Instant,
    pub seen_view: View,
    pub seen_direction: Option<TransitionDirection>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.clock.elapsed();
        let now_sec = elapsed.as_secs_f32();

        let mut events = self.session.borrow_mut().advance(elapsed);
        if self.motion.update(now_sec) {
            events.extend(self.session.borrow_mut().intro_complete(elapsed));
        }
        if !events.is_empty() {
            log::debug!("[frame] {:?}", events);
            self.ui.refresh(&self.session.borrow());
        }

        // React to state changes made here or by input handlers since last frame
        let (view, direction, product) = {
            let s = self.session.borrow();
            (s.config().view, s.transition_state().direction, *s.config())
        };
        if view != self.seen_view {
            self.rig.borrow_mut().fly_to(view, now_sec);
            self.seen_view = view;
        }
        if direction != self.seen_direction {
            // A stalled tab can skip the enter phase entirely; still bring the chair back
            let effective = match (self.seen_direction, direction) {
                (Some(TransitionDirection::Out), None) => Some(TransitionDirection::In),
                _ => direction,
            };
            if let Some(d) = effective {
                log::debug!("[frame] model moving {}", d.as_str());
            }
            self.motion.on_direction(effective, now_sec);
            self.seen_direction = direction;
        }

        let (eye, target) = self.rig.borrow_mut().update(now_sec);
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.set_camera(eye, target);
            if let Err(e) = g.render(&self.motion.transform(), &product) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    eye: Vec3,
    target: Vec3,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, eye, target).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

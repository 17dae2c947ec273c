#![cfg(target_arch = "wasm32")]
use chair_core::{CameraRig, ModelMotion, Session};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("chair-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the canvas backing store at CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    if let Some(window) = web::window() {
        let canvas_resize = canvas.clone();
        dom::add_listener(&window, "resize", move |_: web::Event| {
            dom::sync_canvas_backing_size(&canvas_resize);
        });
    }

    dom::inject_style(&document, constants::PANEL_CSS)?;

    let session = Rc::new(RefCell::new(Session::default()));
    let ui = Rc::new(ui::ControlPanel::build(&document)?);
    ui.refresh(&session.borrow());

    let initial_view = session.borrow().config().view;
    let rig = Rc::new(RefCell::new(CameraRig::new(initial_view)));

    // One origin for frames and input handlers
    let clock = Instant::now();
    events::wire_panel_clicks(session.clone(), ui.clone(), clock);
    events::wire_activity_listeners(session.clone(), ui.clone(), clock);
    events::wire_orbit_controls(&canvas, rig.clone());
    events::wire_teardown(session.clone());

    let (eye, target) = {
        let r = rig.borrow();
        (r.eye(), r.target())
    };
    // Missing WebGPU leaves the panel and session running without a picture
    let gpu = frame::init_gpu(&canvas, eye, target).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        ui,
        rig,
        motion: ModelMotion::with_intro(clock.elapsed().as_secs_f32()),
        canvas,
        gpu,
        clock,
        seen_view: initial_view,
        seen_direction: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

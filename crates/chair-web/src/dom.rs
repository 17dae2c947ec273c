use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attaches a listener that lives for the rest of the page.
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event_type: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) =
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] could not listen for {event_type}: {e:?}");
    }
    closure.forget();
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

pub fn create(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {e:?}"))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {e:?}"))
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_background(el: &web::Element, css_color: &str) {
    _ = el.set_attribute("style", &format!("background-color:{css_color}"));
}

#[inline]
pub fn set_visible(el: &web::Element, visible: bool) {
    if visible {
        _ = el.remove_attribute("hidden");
    } else {
        _ = el.set_attribute("hidden", "");
    }
}

pub fn inject_style(document: &web::Document, css: &str) -> anyhow::Result<()> {
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
    let style = create(document, "style", "")?;
    style.set_text_content(Some(css));
    head.append_child(&style)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append <style>: {e:?}"))
}

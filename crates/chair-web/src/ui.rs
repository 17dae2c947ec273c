//! Control panel built into the page at startup. Buttons carry their intent
//! in `data-intent`/`data-value`; a single delegated listener in `events`
//! decodes clicks, and `refresh` mirrors session state back onto the DOM.

use crate::constants::{IDLE_INDICATOR_ID, IDLE_INDICATOR_TEXT, PANEL_ID, TITLE_HINT};
use crate::dom;
use crate::input::Intent;
use chair_core::{ChairPart, HexColor, MaterialType, Session, View, CHAIR_PRESETS, COLORS};
use web_sys as web;

pub struct ControlPanel {
    root: web::Element,
    presets: Vec<(&'static str, web::Element)>,
    parts: Vec<(ChairPart, web::Element)>,
    indicators: Vec<(ChairPart, web::Element)>,
    color_label: web::Element,
    swatches: Vec<(HexColor, web::Element)>,
    materials: Vec<(MaterialType, web::Element)>,
    views: Vec<(View, web::Element)>,
    idle_indicator: web::Element,
}

impl ControlPanel {
    pub fn build(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("document has no <body>"))?;
        let root = dom::create(document, "div", "")?;
        root.set_id(PANEL_ID);

        let title = dom::create(document, "div", "title")?;
        let heading = dom::create(document, "div", "heading")?;
        heading.set_text_content(Some("Chair Configurator"));
        let hint = dom::create(document, "div", "heading")?;
        hint.set_text_content(Some(TITLE_HINT));
        dom::append(&title, &heading)?;
        dom::append(&title, &hint)?;
        dom::append(&root, &title)?;

        // Presets: one button per preset, previewing its three part colors
        let preset_card = dom::create(document, "div", "card presets")?;
        dom::append(&preset_card, &section_heading(document, "Presets")?)?;
        let mut presets = Vec::with_capacity(CHAIR_PRESETS.len());
        for preset in CHAIR_PRESETS.iter() {
            let btn = intent_button(document, &Intent::Preset(preset.id.to_owned()), "preset", "")?;
            _ = btn.set_attribute("title", preset.name);
            for part in [ChairPart::Backrest, ChairPart::Seat, ChairPart::Base] {
                let band = dom::create(document, "div", "preset-band")?;
                _ = band.set_attribute(
                    "style",
                    &format!("flex:1;background-color:{}", preset.colors.get(part)),
                );
                dom::append(&btn, &band)?;
            }
            dom::append(&preset_card, &btn)?;
            presets.push((preset.id, btn));
        }
        dom::append(&root, &preset_card)?;

        let controls = dom::create(document, "div", "controls")?;

        // Part selection with a color dot per part
        let part_card = dom::create(document, "div", "card")?;
        dom::append(&part_card, &section_heading(document, "Part")?)?;
        let part_row = dom::create(document, "div", "row")?;
        let dot_row = dom::create(document, "div", "row")?;
        let mut parts = Vec::new();
        let mut indicators = Vec::new();
        for part in ChairPart::ALL {
            let btn = intent_button(document, &Intent::Part(part), "", part.label())?;
            dom::append(&part_row, &btn)?;
            parts.push((part, btn));
            let dot = dom::create(document, "div", "dot")?;
            _ = dot.set_attribute("title", part.label());
            dom::append(&dot_row, &dot)?;
            indicators.push((part, dot));
        }
        dom::append(&part_card, &part_row)?;
        dom::append(&part_card, &dot_row)?;
        dom::append(&controls, &part_card)?;

        // Swatches for the active part
        let color_card = dom::create(document, "div", "card")?;
        let color_label = section_heading(document, "")?;
        dom::append(&color_card, &color_label)?;
        let swatch_row = dom::create(document, "div", "row")?;
        let mut swatches = Vec::with_capacity(COLORS.len());
        for swatch in COLORS {
            let btn = intent_button(document, &Intent::Color(swatch.hex), "swatch", "")?;
            _ = btn.set_attribute("title", swatch.name);
            dom::set_background(&btn, &swatch.hex.to_string());
            dom::append(&swatch_row, &btn)?;
            swatches.push((swatch.hex, btn));
        }
        dom::append(&color_card, &swatch_row)?;
        dom::append(&controls, &color_card)?;

        let material_card = dom::create(document, "div", "card")?;
        dom::append(&material_card, &section_heading(document, "Material")?)?;
        let material_row = dom::create(document, "div", "row")?;
        let mut materials = Vec::new();
        for material in MaterialType::SELECTABLE {
            let btn = intent_button(document, &Intent::Material(material), "", material.as_str())?;
            dom::append(&material_row, &btn)?;
            materials.push((material, btn));
        }
        dom::append(&material_card, &material_row)?;
        dom::append(&controls, &material_card)?;

        let view_card = dom::create(document, "div", "card")?;
        dom::append(&view_card, &section_heading(document, "View")?)?;
        let view_row = dom::create(document, "div", "row")?;
        let mut views = Vec::new();
        for view in View::ALL {
            let btn = intent_button(document, &Intent::View(view), "", view.as_str())?;
            dom::append(&view_row, &btn)?;
            views.push((view, btn));
        }
        dom::append(&view_card, &view_row)?;
        dom::append(&controls, &view_card)?;
        dom::append(&root, &controls)?;

        let idle_indicator = dom::create(document, "div", "")?;
        idle_indicator.set_id(IDLE_INDICATOR_ID);
        idle_indicator.set_text_content(Some(IDLE_INDICATOR_TEXT));
        dom::set_visible(&idle_indicator, false);
        dom::append(&root, &idle_indicator)?;

        body.append_child(&root)
            .map_err(|e| anyhow::anyhow!("mount panel: {e:?}"))?;

        Ok(Self {
            root,
            presets,
            parts,
            indicators,
            color_label,
            swatches,
            materials,
            views,
            idle_indicator,
        })
    }

    pub fn root(&self) -> &web::Element {
        &self.root
    }

    /// Mirror the session onto the panel: active states, disabled presets
    /// while a transition runs, part color dots and the idle badge.
    pub fn refresh(&self, session: &Session) {
        let config = session.config();
        let transition = session.transition_state();

        for (id, btn) in &self.presets {
            dom::set_class(btn, "active", config.active_preset.is(id));
            _ = btn.toggle_attribute_with_force("disabled", transition.is_transitioning);
        }
        for (part, btn) in &self.parts {
            dom::set_class(btn, "active", *part == config.active_part);
        }
        for (part, dot) in &self.indicators {
            dom::set_background(dot, &config.colors.get(*part).to_string());
            dom::set_class(dot, "active", *part == config.active_part);
        }
        self.color_label
            .set_text_content(Some(&format!("{} Color", config.active_part.label())));
        let active_color = config.active_color();
        for (hex, btn) in &self.swatches {
            dom::set_class(btn, "active", *hex == active_color);
        }
        for (material, btn) in &self.materials {
            dom::set_class(btn, "active", *material == config.material);
        }
        for (view, btn) in &self.views {
            dom::set_class(btn, "active", *view == config.view);
        }
        dom::set_visible(&self.idle_indicator, session.idle_state().is_idle);
    }
}

fn section_heading(document: &web::Document, text: &str) -> anyhow::Result<web::Element> {
    let el = dom::create(document, "div", "heading")?;
    if !text.is_empty() {
        el.set_text_content(Some(text));
    }
    Ok(el)
}

fn intent_button(
    document: &web::Document,
    intent: &Intent,
    class: &str,
    label: &str,
) -> anyhow::Result<web::Element> {
    let btn = dom::create(document, "button", class)?;
    let (kind, value) = intent.data_attributes();
    _ = btn.set_attribute("data-intent", kind);
    _ = btn.set_attribute("data-value", &value);
    if !label.is_empty() {
        btn.set_text_content(Some(label));
    }
    Ok(btn)
}

use chair_core::{ChairPart, Events, HexColor, MaterialType, Session, View};
use glam::Vec2;
use std::time::Duration;

// ---------------- Control panel intents ----------------

/// A click on a control panel button, decoded from its `data-intent` and
/// `data-value` attributes.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    Part(ChairPart),
    Color(HexColor),
    Material(MaterialType),
    View(View),
    Preset(String),
}

impl Intent {
    pub fn parse(kind: &str, value: &str) -> anyhow::Result<Self> {
        Ok(match kind {
            "part" => Intent::Part(value.parse()?),
            "color" => Intent::Color(value.parse()?),
            "material" => Intent::Material(value.parse()?),
            "view" => Intent::View(value.parse()?),
            "preset" => Intent::Preset(value.to_owned()),
            _ => anyhow::bail!("unknown intent `{kind}`"),
        })
    }

    /// (attribute kind, attribute value) written onto the button.
    pub fn data_attributes(&self) -> (&'static str, String) {
        match self {
            Intent::Part(p) => ("part", p.as_str().to_owned()),
            Intent::Color(c) => ("color", c.to_string()),
            Intent::Material(m) => ("material", m.as_str().to_owned()),
            Intent::View(v) => ("view", v.as_str().to_owned()),
            Intent::Preset(id) => ("preset", id.clone()),
        }
    }

    /// `now` is the clock reading of the click, on the same origin as the
    /// frame loop.
    pub fn apply(&self, session: &mut Session, now: Duration) -> Events {
        match self {
            Intent::Part(p) => session.set_active_part(*p, now),
            Intent::Color(c) => session.set_color(*c, now),
            Intent::Material(m) => session.set_material(*m, now),
            Intent::View(v) => session.set_view(*v, now),
            Intent::Preset(id) => session.request_preset_change(id, now),
        }
    }
}

// ---------------- Page lifecycle ----------------

/// A `pagehide` with `persisted` set means the page went into the
/// back/forward cache and may be restored with its state intact.
#[inline]
pub fn disposes_on_pagehide(persisted: bool) -> bool {
    !persisted
}

// ---------------- Orbit drag tracking ----------------

#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, pos: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = pos;
    }

    /// Movement since the previous sample for the pointer that started the drag.
    pub fn drag_to(&mut self, pointer_id: i32, pos: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if pointer_id == self.pointer_id {
            self.active = false;
        }
    }
}

/// Wheel deltas arrive in pixels, lines or pages depending on the device;
/// only the direction matters for zoom steps.
#[inline]
pub fn wheel_direction(delta_y: f64) -> f32 {
    if delta_y > 0.0 {
        1.0
    } else if delta_y < 0.0 {
        -1.0
    } else {
        0.0
    }
}

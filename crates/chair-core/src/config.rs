use crate::catalog::{
    default_preset, ActivePreset, ChairColors, ChairPart, ChairPreset, HexColor, MaterialType, View,
};

/// Current product configuration read by the UI and the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductConfig {
    pub colors: ChairColors,
    pub material: MaterialType,
    pub view: View,
    pub active_part: ChairPart,
    pub active_preset: ActivePreset,
}

impl Default for ProductConfig {
    fn default() -> Self {
        let preset = default_preset();
        Self {
            colors: preset.colors,
            material: preset.material,
            view: View::Front,
            active_part: ChairPart::Seat,
            active_preset: ActivePreset::Preset(preset.id),
        }
    }
}

impl ProductConfig {
    pub fn set_active_part(&mut self, part: ChairPart) {
        self.active_part = part;
    }

    /// Paints the part being edited and detaches from the preset identity.
    pub fn set_color(&mut self, color: HexColor) {
        self.colors.set(self.active_part, color);
        self.active_preset = ActivePreset::Custom;
    }

    /// Leaves `active_preset` untouched, unlike [`Self::set_color`].
    pub fn set_material(&mut self, material: MaterialType) {
        self.material = material;
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn apply_preset(&mut self, preset: &'static ChairPreset) {
        self.colors = preset.colors;
        self.material = preset.material;
        self.active_preset = ActivePreset::Preset(preset.id);
    }

    pub fn active_color(&self) -> HexColor {
        self.colors.get(self.active_part)
    }
}

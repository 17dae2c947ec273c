//! Static reference data: chair parts, materials, camera views, selectable
//! colors and the preset catalog.
//!
//! Everything here is read-only. Names arriving from the DOM are parsed with
//! `FromStr`; a [`ParseError`] means the caller was malformed and the intent
//! should be dropped.

use glam::Vec3;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown chair part `{0}`")]
    Part(String),
    #[error("unknown material `{0}`")]
    Material(String),
    #[error("unknown view `{0}`")]
    View(String),
    #[error("invalid hex color `{0}`")]
    Color(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChairPart {
    Seat,
    Backrest,
    Base,
}

impl ChairPart {
    pub const ALL: [ChairPart; 3] = [ChairPart::Seat, ChairPart::Backrest, ChairPart::Base];

    pub fn as_str(self) -> &'static str {
        match self {
            ChairPart::Seat => "seat",
            ChairPart::Backrest => "backrest",
            ChairPart::Base => "base",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChairPart::Seat => "Seat",
            ChairPart::Backrest => "Backrest",
            ChairPart::Base => "Base",
        }
    }

    /// Slot used by the renderer's per-part color table.
    pub fn index(self) -> usize {
        match self {
            ChairPart::Seat => 0,
            ChairPart::Backrest => 1,
            ChairPart::Base => 2,
        }
    }
}

impl FromStr for ChairPart {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChairPart::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseError::Part(s.to_owned()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialType {
    Fabric,
    Leather,
    Velvet,
}

/// Surface parameters the renderer uses for a material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialShading {
    pub roughness: f32,
    pub specular: f32,
    pub sheen: f32,
}

impl MaterialType {
    pub const ALL: [MaterialType; 3] = [
        MaterialType::Fabric,
        MaterialType::Leather,
        MaterialType::Velvet,
    ];

    /// Materials offered as direct buttons; velvet only arrives through presets.
    pub const SELECTABLE: [MaterialType; 2] = [MaterialType::Fabric, MaterialType::Leather];

    pub fn as_str(self) -> &'static str {
        match self {
            MaterialType::Fabric => "FABRIC",
            MaterialType::Leather => "LEATHER",
            MaterialType::Velvet => "VELVET",
        }
    }

    pub fn shading(self) -> MaterialShading {
        match self {
            MaterialType::Fabric => MaterialShading {
                roughness: 0.9,
                specular: 0.05,
                sheen: 0.1,
            },
            MaterialType::Leather => MaterialShading {
                roughness: 0.35,
                specular: 0.45,
                sheen: 0.0,
            },
            MaterialType::Velvet => MaterialShading {
                roughness: 0.75,
                specular: 0.1,
                sheen: 0.6,
            },
        }
    }
}

impl FromStr for MaterialType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialType::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::Material(s.to_owned()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewpoint {
    pub position: Vec3,
    pub target: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Front,
    Side,
    Top,
    Detail,
}

/// Order the idle auto-rotate walks through. Differs from the button order.
pub const VIEW_ORDER: [View; 4] = [View::Front, View::Side, View::Detail, View::Top];

impl View {
    /// Button order in the view panel.
    pub const ALL: [View; 4] = [View::Front, View::Side, View::Top, View::Detail];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Front => "front",
            View::Side => "side",
            View::Top => "top",
            View::Detail => "detail",
        }
    }

    /// Position of this view in [`VIEW_ORDER`].
    pub fn cycle_index(self) -> usize {
        VIEW_ORDER.iter().position(|v| *v == self).unwrap_or(0)
    }

    pub fn viewpoint(self) -> Viewpoint {
        match self {
            View::Front => Viewpoint {
                position: Vec3::new(0.0, 1.5, 5.0),
                target: Vec3::new(0.0, 0.5, 0.0),
            },
            View::Side => Viewpoint {
                position: Vec3::new(5.0, 1.0, 0.0),
                target: Vec3::new(0.0, 0.5, 0.0),
            },
            View::Top => Viewpoint {
                position: Vec3::new(0.0, 6.0, 0.1),
                target: Vec3::ZERO,
            },
            View::Detail => Viewpoint {
                position: Vec3::new(1.5, 0.8, 1.5),
                target: Vec3::new(0.0, 0.5, 0.0),
            },
        }
    }
}

impl FromStr for View {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseError::View(s.to_owned()))
    }
}

/// 24-bit sRGB color written as `#rrggbb`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(u32);

impl HexColor {
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & 0x00ff_ffff)
    }

    pub fn rgb8(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }

    /// Linear-space RGB for shading.
    pub fn to_linear(self) -> [f32; 3] {
        self.rgb8().map(|c| srgb_to_linear(c as f32 / 255.0))
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor({self})")
    }
}

impl FromStr for HexColor {
    type Err = ParseError;

    /// Accepts `#rgb` and `#rrggbb`, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::Color(s.to_owned());
        let digits = s.strip_prefix('#').ok_or_else(err)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| err())?;
        match digits.len() {
            6 => Ok(HexColor::new(value)),
            3 => {
                let (r, g, b) = ((value >> 8) & 0xf, (value >> 4) & 0xf, value & 0xf);
                Ok(HexColor::new((r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11))
            }
            _ => Err(err()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChairColors {
    pub seat: HexColor,
    pub backrest: HexColor,
    pub base: HexColor,
}

impl ChairColors {
    pub fn get(&self, part: ChairPart) -> HexColor {
        match part {
            ChairPart::Seat => self.seat,
            ChairPart::Backrest => self.backrest,
            ChairPart::Base => self.base,
        }
    }

    pub fn set(&mut self, part: ChairPart, color: HexColor) {
        match part {
            ChairPart::Seat => self.seat = color,
            ChairPart::Backrest => self.backrest = color,
            ChairPart::Base => self.base = color,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: HexColor,
}

pub const COLORS: [Swatch; 6] = [
    Swatch {
        name: "Onyx",
        hex: HexColor::new(0x1a1a1a),
    },
    Swatch {
        name: "Sand",
        hex: HexColor::new(0xd2b48c),
    },
    Swatch {
        name: "Emerald",
        hex: HexColor::new(0x046307),
    },
    Swatch {
        name: "Royal",
        hex: HexColor::new(0x1e3a8a),
    },
    Swatch {
        name: "Terracotta",
        hex: HexColor::new(0xa45a52),
    },
    Swatch {
        name: "Cloud",
        hex: HexColor::new(0xe5e5e5),
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct ChairPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: ChairColors,
    pub material: MaterialType,
}

pub static CHAIR_PRESETS: [ChairPreset; 5] = [
    ChairPreset {
        id: "midnight",
        name: "Midnight",
        colors: ChairColors {
            seat: HexColor::new(0x1a1a1a),
            backrest: HexColor::new(0x1a1a1a),
            base: HexColor::new(0x333333),
        },
        material: MaterialType::Leather,
    },
    ChairPreset {
        id: "arctic",
        name: "Arctic",
        colors: ChairColors {
            seat: HexColor::new(0xe5e5e5),
            backrest: HexColor::new(0xe5e5e5),
            base: HexColor::new(0xf5f5f5),
        },
        material: MaterialType::Fabric,
    },
    ChairPreset {
        id: "forest",
        name: "Forest",
        colors: ChairColors {
            seat: HexColor::new(0x046307),
            backrest: HexColor::new(0x1a1a1a),
            base: HexColor::new(0x333333),
        },
        material: MaterialType::Leather,
    },
    ChairPreset {
        id: "royal",
        name: "Royal",
        colors: ChairColors {
            seat: HexColor::new(0x1e3a8a),
            backrest: HexColor::new(0x1e3a8a),
            base: HexColor::new(0x1a1a1a),
        },
        material: MaterialType::Velvet,
    },
    ChairPreset {
        id: "desert",
        name: "Desert",
        colors: ChairColors {
            seat: HexColor::new(0xd2b48c),
            backrest: HexColor::new(0xa45a52),
            base: HexColor::new(0x333333),
        },
        material: MaterialType::Fabric,
    },
];

pub fn find_preset(id: &str) -> Option<&'static ChairPreset> {
    CHAIR_PRESETS.iter().find(|p| p.id == id)
}

pub fn default_preset() -> &'static ChairPreset {
    &CHAIR_PRESETS[0]
}

/// Identity of the configuration currently shown: a catalog preset, or
/// `custom` once any individual color was picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivePreset {
    Preset(&'static str),
    Custom,
}

impl ActivePreset {
    pub const CUSTOM_ID: &'static str = "custom";

    pub fn as_str(self) -> &'static str {
        match self {
            ActivePreset::Preset(id) => id,
            ActivePreset::Custom => Self::CUSTOM_ID,
        }
    }

    pub fn is(self, id: &str) -> bool {
        self.as_str() == id
    }
}

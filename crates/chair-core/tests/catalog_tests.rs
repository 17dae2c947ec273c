// Host-side tests for the static catalogs and name parsing.

use chair_core::*;

#[test]
fn hex_colors_parse_long_and_short_forms() {
    assert_eq!("#046307".parse::<HexColor>(), Ok(HexColor::new(0x046307)));
    assert_eq!("#D2B48C".parse::<HexColor>(), Ok(HexColor::new(0xd2b48c)));
    assert_eq!("#222".parse::<HexColor>(), Ok(HexColor::new(0x222222)));
    assert_eq!("#f0a".parse::<HexColor>(), Ok(HexColor::new(0xff00aa)));
}

#[test]
fn malformed_hex_colors_are_rejected() {
    for bad in ["", "#", "046307", "#04630", "#0463077", "#gg0000", "#+12345"] {
        assert_eq!(
            bad.parse::<HexColor>(),
            Err(ParseError::Color(bad.to_owned())),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn hex_colors_display_lowercase() {
    assert_eq!(HexColor::new(0x1E3A8A).to_string(), "#1e3a8a");
    assert_eq!(HexColor::new(0x000001).to_string(), "#000001");
}

#[test]
fn linear_conversion_keeps_extremes() {
    assert_eq!(HexColor::new(0x000000).to_linear(), [0.0, 0.0, 0.0]);
    let white = HexColor::new(0xffffff).to_linear();
    assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-5));
    // mid grey is darker in linear space
    let grey = HexColor::new(0x808080).to_linear();
    assert!(grey[0] > 0.2 && grey[0] < 0.23);
}

#[test]
fn names_round_trip_through_from_str() {
    for part in ChairPart::ALL {
        assert_eq!(part.as_str().parse::<ChairPart>(), Ok(part));
    }
    for view in View::ALL {
        assert_eq!(view.as_str().parse::<View>(), Ok(view));
    }
    for m in MaterialType::ALL {
        assert_eq!(m.as_str().parse::<MaterialType>(), Ok(m));
    }
    assert_eq!("leather".parse::<MaterialType>(), Ok(MaterialType::Leather));
}

#[test]
fn unknown_names_report_what_was_wrong() {
    assert_eq!(
        "armrest".parse::<ChairPart>(),
        Err(ParseError::Part("armrest".into()))
    );
    assert_eq!("iso".parse::<View>(), Err(ParseError::View("iso".into())));
    assert_eq!(
        "SILK".parse::<MaterialType>(),
        Err(ParseError::Material("SILK".into()))
    );
    assert_eq!(
        ParseError::View("iso".into()).to_string(),
        "unknown view `iso`"
    );
}

#[test]
fn view_cycle_order_differs_from_button_order() {
    assert_eq!(VIEW_ORDER, [View::Front, View::Side, View::Detail, View::Top]);
    assert_eq!(View::Front.cycle_index(), 0);
    assert_eq!(View::Side.cycle_index(), 1);
    assert_eq!(View::Detail.cycle_index(), 2);
    assert_eq!(View::Top.cycle_index(), 3);
}

#[test]
fn viewpoints_match_the_scene_layout() {
    let front = View::Front.viewpoint();
    assert_eq!(front.position, glam::Vec3::new(0.0, 1.5, 5.0));
    assert_eq!(front.target, glam::Vec3::new(0.0, 0.5, 0.0));
    assert_eq!(View::Top.viewpoint().target, glam::Vec3::ZERO);
}

#[test]
fn preset_catalog_is_complete_and_unique() {
    let ids: Vec<_> = CHAIR_PRESETS.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec!["midnight", "arctic", "forest", "royal", "desert"]);
    assert!(!ids.contains(&ActivePreset::CUSTOM_ID));
    assert_eq!(find_preset("royal").map(|p| p.material), Some(MaterialType::Velvet));
    assert!(find_preset("custom").is_none());
    assert!(find_preset("").is_none());
    assert_eq!(default_preset().id, "midnight");
}

#[test]
fn swatches_cover_six_colors() {
    let names: Vec<_> = COLORS.iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        vec!["Onyx", "Sand", "Emerald", "Royal", "Terracotta", "Cloud"]
    );
    assert_eq!(COLORS[2].hex.to_string(), "#046307");
}

#[test]
fn only_fabric_and_leather_are_directly_selectable() {
    assert_eq!(
        MaterialType::SELECTABLE,
        [MaterialType::Fabric, MaterialType::Leather]
    );
    let leather = MaterialType::Leather.shading();
    let fabric = MaterialType::Fabric.shading();
    assert!(leather.roughness < fabric.roughness);
    assert!(MaterialType::Velvet.shading().sheen > fabric.sheen);
}

#[test]
fn chair_colors_index_by_part() {
    let mut colors = CHAIR_PRESETS[4].colors;
    assert_eq!(colors.get(ChairPart::Backrest), HexColor::new(0xa45a52));
    colors.set(ChairPart::Base, HexColor::new(0xe5e5e5));
    assert_eq!(colors.base, HexColor::new(0xe5e5e5));
    assert_eq!(colors.seat, HexColor::new(0xd2b48c));
}

#[test]
fn active_preset_ids() {
    assert_eq!(ActivePreset::Custom.as_str(), "custom");
    assert!(ActivePreset::Preset("forest").is("forest"));
    assert!(!ActivePreset::Preset("forest").is("custom"));
}

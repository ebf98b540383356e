// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for settings synchronization

use barcode_picker::{
    Catalog, ControlKind, GuiStyle, SearchArea, SettingsForm, SettingsModel, Symbology,
    initialize, pull_from_model, push_to_model,
};
use std::collections::BTreeSet;

#[test]
fn test_symbology_toggle_scenario() {
    // Catalog has {EAN13, QR}; the model initially enables only QR
    let catalog = Catalog {
        symbologies: vec![Symbology::Ean13, Symbology::Qr],
        gui_styles: GuiStyle::ALL.to_vec(),
        cameras: Vec::new(),
    };
    let (mut model, registry) = initialize(&catalog);
    model.set_enabled_symbologies(BTreeSet::from([Symbology::Qr]));

    let mut form = SettingsForm::default();
    pull_from_model(&model, &registry, &mut form);

    let ean13 = registry.entry(ControlKind::Symbology, "ean13").unwrap();
    let qr = registry.entry(ControlKind::Symbology, "qr").unwrap();
    assert!(!ean13.checked(), "EAN-13 starts unchecked");
    assert!(qr.checked(), "QR starts checked");

    // User toggles EAN-13 on and leaves the settings view
    ean13.set_checked(true);
    let pushed = push_to_model(&registry, &form).unwrap();
    assert_eq!(
        pushed.enabled_symbologies(),
        &BTreeSet::from([Symbology::Ean13, Symbology::Qr])
    );
}

#[test]
fn test_restricted_area_round_trip() {
    let (mut model, registry) = initialize(&Catalog::default());
    let mut form = SettingsForm::default();

    for area in [
        SearchArea::new(0.25, 0.25, 0.5, 0.5),
        SearchArea::new(0.0, 0.4, 1.0, 0.2),
        SearchArea::new(0.1, 0.0, 0.9, 1.0),
    ] {
        model.set_search_area(area).unwrap();
        pull_from_model(&model, &registry, &mut form);
        assert!(form.restricted, "non-full-frame area derives toggle on");
        assert!(form.area_inputs_enabled);

        let pushed = push_to_model(&registry, &form).unwrap();
        assert_eq!(pushed.search_area(), area);
    }
}

#[test]
fn test_round_trip_law() {
    let (_, registry) = initialize(&Catalog::default());
    let mut form = SettingsForm::default();

    let mut restricted = SettingsModel::new();
    restricted
        .set_search_area(SearchArea::new(0.2, 0.3, 0.6, 0.4))
        .unwrap();
    restricted.set_duplicate_filter_ms(1500).unwrap();

    let mut sparse = SettingsModel::new();
    sparse.set_enabled_symbologies(BTreeSet::from([Symbology::Code128]));
    sparse.set_gui_style(GuiStyle::None);
    sparse.set_sound_enabled(false);
    sparse.set_vibration_enabled(false);

    for model in [SettingsModel::new(), restricted, sparse] {
        pull_from_model(&model, &registry, &mut form);
        let pushed = push_to_model(&registry, &form).unwrap();
        assert_eq!(pushed, model, "push(pull(m)) must reproduce m");
    }
}

#[test]
fn test_toggle_off_always_yields_full_frame() {
    let (model, registry) = initialize(&Catalog::default());
    let mut form = SettingsForm::default();
    pull_from_model(&model, &registry, &mut form);

    for raw in ["0.5", "2.0", "-1", "not a number", ""] {
        form.restricted = false;
        form.area_x = raw.to_string();
        form.area_y = raw.to_string();
        form.area_width = raw.to_string();
        form.area_height = raw.to_string();

        let pushed = push_to_model(&registry, &form).unwrap();
        assert!(
            pushed.search_area().is_full_frame(),
            "raw value {:?} must be ignored while the toggle is off",
            raw
        );
    }
}

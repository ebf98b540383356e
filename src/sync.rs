// SPDX-License-Identifier: GPL-3.0-only

//! Two-way settings synchronization
//!
//! [`pull_from_model`] renders a [`SettingsModel`] into the registered
//! controls and the raw form fields; [`push_to_model`] parses the controls
//! back into a fresh, validated model. Both take their collaborators as
//! explicit parameters — there is no ambient application state.
//!
//! The restricted-area toggle is derived state: it is on exactly when the
//! model's search area differs from the full-frame sentinel, and it is
//! recomputed on every pull rather than stored. While the toggle is off,
//! the raw area fields are ignored on push and the full-frame sentinel is
//! written instead, so a stale rectangle can never silently re-enable a
//! restriction.

use crate::errors::{SyncError, ValidationError};
use crate::registry::{ControlKind, ControlRegistry};
use crate::settings::SettingsModel;
use crate::types::{CameraFacing, GuiStyle, SearchArea, Symbology};
use std::collections::BTreeSet;
use tracing::debug;

/// Raw values of the non-checkbox settings controls
///
/// Numeric fields hold the text exactly as entered; parsing and validation
/// happen at push time so the form can faithfully carry invalid input back
/// to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsForm {
    /// Restricted-area toggle (derived from the model on pull)
    pub restricted: bool,
    /// Raw left edge of the search area
    pub area_x: String,
    /// Raw top edge of the search area
    pub area_y: String,
    /// Raw width of the search area
    pub area_width: String,
    /// Raw height of the search area
    pub area_height: String,
    /// Whether the four area fields accept input
    pub area_inputs_enabled: bool,
    /// Raw duplicate-filter window in milliseconds
    pub duplicate_filter: String,
    /// Raw per-frame code limit
    pub max_codes_per_frame: String,
    /// Beep-on-scan checkbox
    pub sound_enabled: bool,
    /// Vibrate-on-scan checkbox
    pub vibration_enabled: bool,
    /// Mirror-preview checkbox
    pub mirroring_enabled: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            restricted: false,
            area_x: String::new(),
            area_y: String::new(),
            area_width: String::new(),
            area_height: String::new(),
            area_inputs_enabled: false,
            duplicate_filter: String::new(),
            max_codes_per_frame: String::new(),
            sound_enabled: false,
            vibration_enabled: false,
            mirroring_enabled: false,
        }
    }
}

/// Render the model into the registered controls and form fields
///
/// Symbology toggles mirror the enabled set; the GUI style and camera
/// groups get exactly one checked entry; numeric fields are formatted from
/// the model. The restricted-area toggle is recomputed from the search
/// area, and the area inputs are disabled while it is off.
pub fn pull_from_model(
    model: &SettingsModel,
    registry: &ControlRegistry,
    form: &mut SettingsForm,
) {
    for entry in registry.entries_of(ControlKind::Symbology) {
        let enabled = Symbology::from_id(entry.key())
            .is_some_and(|s| model.is_symbology_enabled(s));
        entry.set_checked(enabled);
    }

    registry.set_exclusive_checked(ControlKind::GuiStyle, model.gui_style().id());
    registry.set_exclusive_checked(ControlKind::Camera, model.active_camera().id());

    form.duplicate_filter = model.duplicate_filter_ms().to_string();
    form.max_codes_per_frame = model.max_codes_per_frame().to_string();
    form.sound_enabled = model.sound_enabled();
    form.vibration_enabled = model.vibration_enabled();
    form.mirroring_enabled = model.mirroring_enabled();

    let area = model.search_area();
    form.area_x = area.x.to_string();
    form.area_y = area.y.to_string();
    form.area_width = area.width.to_string();
    form.area_height = area.height.to_string();
    form.restricted = !area.is_full_frame();
    form.area_inputs_enabled = form.restricted;

    debug!(restricted = form.restricted, "settings pulled into controls");
}

/// Parse the controls back into a fresh, validated model
///
/// Fails fast with [`SyncError::Exclusivity`] when a mutually-exclusive
/// group does not have exactly one checked entry — the UI layer owns
/// exclusivity, so anything else is a programming error, not something to
/// silently repair. Numeric parsing and range violations surface as
/// [`SyncError::Validation`].
pub fn push_to_model(
    registry: &ControlRegistry,
    form: &SettingsForm,
) -> Result<SettingsModel, SyncError> {
    let mut model = SettingsModel::new();

    let mut symbologies = BTreeSet::new();
    for key in registry.checked_keys(ControlKind::Symbology) {
        let symbology =
            Symbology::from_id(&key).ok_or_else(|| ValidationError::UnknownOption {
                kind: ControlKind::Symbology,
                key: key.clone(),
            })?;
        symbologies.insert(symbology);
    }
    model.set_enabled_symbologies(symbologies);

    let gui_style_key = single_checked_key(registry, ControlKind::GuiStyle)?;
    let gui_style = GuiStyle::from_id(&gui_style_key).ok_or_else(|| {
        ValidationError::UnknownOption {
            kind: ControlKind::GuiStyle,
            key: gui_style_key.clone(),
        }
    })?;
    model.set_gui_style(gui_style);

    let camera_key = single_checked_key(registry, ControlKind::Camera)?;
    let camera = CameraFacing::from_id(&camera_key).ok_or_else(|| {
        ValidationError::UnknownOption {
            kind: ControlKind::Camera,
            key: camera_key.clone(),
        }
    })?;
    model.set_active_camera(camera);

    let area = if form.restricted {
        SearchArea::new(
            parse_fraction("area x", &form.area_x)?,
            parse_fraction("area y", &form.area_y)?,
            parse_fraction("area width", &form.area_width)?,
            parse_fraction("area height", &form.area_height)?,
        )
    } else {
        // Toggle off overrides whatever the raw fields hold
        SearchArea::FULL_FRAME
    };
    model.set_search_area(area).map_err(SyncError::Validation)?;

    let duplicate_filter = parse_integer("duplicate filter", &form.duplicate_filter)?;
    model
        .set_duplicate_filter_ms(duplicate_filter)
        .map_err(SyncError::Validation)?;

    let max_codes = parse_integer("max codes per frame", &form.max_codes_per_frame)?;
    model
        .set_max_codes_per_frame(max_codes)
        .map_err(SyncError::Validation)?;

    model.set_sound_enabled(form.sound_enabled);
    model.set_vibration_enabled(form.vibration_enabled);
    model.set_mirroring_enabled(form.mirroring_enabled);

    debug!(
        symbologies = model.enabled_symbologies().len(),
        restricted = form.restricted,
        "controls pushed into model"
    );
    Ok(model)
}

/// The single checked key of an exclusive kind, or an exclusivity error
fn single_checked_key(
    registry: &ControlRegistry,
    kind: ControlKind,
) -> Result<String, SyncError> {
    let checked = registry.checked_keys(kind);
    if checked.len() != 1 {
        return Err(SyncError::Exclusivity {
            kind,
            checked: checked.len(),
        });
    }
    Ok(checked.into_iter().next().expect("length checked above"))
}

fn parse_fraction(field: &'static str, raw: &str) -> Result<f64, SyncError> {
    raw.trim().parse::<f64>().map_err(|_| {
        SyncError::Validation(ValidationError::MalformedNumber {
            field,
            value: raw.to_string(),
        })
    })
}

fn parse_integer(field: &'static str, raw: &str) -> Result<i64, SyncError> {
    raw.trim().parse::<i64>().map_err(|_| {
        SyncError::Validation(ValidationError::MalformedNumber {
            field,
            value: raw.to_string(),
        })
    })
}

// SPDX-License-Identifier: GPL-3.0-only

//! Canonical scanner configuration
//!
//! [`SettingsModel`] is a pure value object: it holds the desired scanner
//! state and validates every mutation, but never talks to the device or the
//! UI. The sync engine reads and writes it; the picker applies it to the
//! device as a whole.

use crate::constants::{
    DEFAULT_DUPLICATE_FILTER_MS, DEFAULT_MAX_CODES_PER_FRAME, DEFAULT_SYMBOLOGIES,
};
use crate::errors::ValidationError;
use crate::types::{CameraFacing, GuiStyle, SearchArea, Symbology};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Canonical scanner configuration
///
/// One instance lives per running session. Setters validate their input and
/// leave the model unchanged when they fail, so the model always holds a
/// configuration the device would accept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsModel {
    enabled_symbologies: BTreeSet<Symbology>,
    search_area: SearchArea,
    duplicate_filter_ms: u32,
    max_codes_per_frame: u32,
    gui_style: GuiStyle,
    sound_enabled: bool,
    vibration_enabled: bool,
    mirroring_enabled: bool,
    active_camera: CameraFacing,
}

impl Default for SettingsModel {
    fn default() -> Self {
        Self {
            enabled_symbologies: DEFAULT_SYMBOLOGIES.into_iter().collect(),
            search_area: SearchArea::FULL_FRAME,
            duplicate_filter_ms: DEFAULT_DUPLICATE_FILTER_MS,
            max_codes_per_frame: DEFAULT_MAX_CODES_PER_FRAME,
            gui_style: GuiStyle::default(),
            sound_enabled: true,
            vibration_enabled: true,
            mirroring_enabled: false,
            active_camera: CameraFacing::default(),
        }
    }
}

impl SettingsModel {
    /// Create a model with the engine's default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// The set of currently enabled symbologies
    pub fn enabled_symbologies(&self) -> &BTreeSet<Symbology> {
        &self.enabled_symbologies
    }

    /// Whether a single symbology is enabled
    pub fn is_symbology_enabled(&self, symbology: Symbology) -> bool {
        self.enabled_symbologies.contains(&symbology)
    }

    /// Enable a symbology
    pub fn enable_symbology(&mut self, symbology: Symbology) {
        self.enabled_symbologies.insert(symbology);
    }

    /// Disable a symbology
    pub fn disable_symbology(&mut self, symbology: Symbology) {
        self.enabled_symbologies.remove(&symbology);
    }

    /// Replace the enabled symbology set
    pub fn set_enabled_symbologies(&mut self, symbologies: BTreeSet<Symbology>) {
        self.enabled_symbologies = symbologies;
    }

    /// The restricted scan area, full frame when unrestricted
    pub fn search_area(&self) -> SearchArea {
        self.search_area
    }

    /// Set the restricted scan area
    ///
    /// All coordinates must be fractions in [0, 1] and the rectangle must
    /// have positive width and height. Pass [`SearchArea::FULL_FRAME`] to
    /// lift the restriction.
    pub fn set_search_area(&mut self, area: SearchArea) -> Result<(), ValidationError> {
        for (field, value) in [
            ("x", area.x),
            ("y", area.y),
            ("width", area.width),
            ("height", area.height),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::AreaCoordinateOutOfRange { field, value });
            }
        }
        for (field, value) in [("width", area.width), ("height", area.height)] {
            if value <= 0.0 {
                return Err(ValidationError::EmptyAreaDimension { field, value });
            }
        }
        self.search_area = area;
        Ok(())
    }

    /// Time window in milliseconds within which duplicate reads are dropped
    pub fn duplicate_filter_ms(&self) -> u32 {
        self.duplicate_filter_ms
    }

    /// Set the duplicate-filter window, rejecting values outside [0, u32::MAX]
    pub fn set_duplicate_filter_ms(&mut self, ms: i64) -> Result<(), ValidationError> {
        let ms =
            u32::try_from(ms).map_err(|_| ValidationError::DuplicateFilterOutOfRange(ms))?;
        self.duplicate_filter_ms = ms;
        Ok(())
    }

    /// Maximum number of codes recognized in a single frame
    pub fn max_codes_per_frame(&self) -> u32 {
        self.max_codes_per_frame
    }

    /// Set the per-frame code limit, rejecting values outside [1, u32::MAX]
    pub fn set_max_codes_per_frame(&mut self, count: i64) -> Result<(), ValidationError> {
        match u32::try_from(count) {
            Ok(count) if count >= 1 => {
                self.max_codes_per_frame = count;
                Ok(())
            }
            _ => Err(ValidationError::MaxCodesOutOfRange(count)),
        }
    }

    /// The overlay style shown while scanning
    pub fn gui_style(&self) -> GuiStyle {
        self.gui_style
    }

    /// Set the overlay style
    pub fn set_gui_style(&mut self, style: GuiStyle) {
        self.gui_style = style;
    }

    /// Whether a sound plays on scan
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Enable or disable the scan sound
    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    /// Whether the device vibrates on scan
    pub fn vibration_enabled(&self) -> bool {
        self.vibration_enabled
    }

    /// Enable or disable vibration on scan
    pub fn set_vibration_enabled(&mut self, enabled: bool) {
        self.vibration_enabled = enabled;
    }

    /// Whether the camera preview is mirrored
    pub fn mirroring_enabled(&self) -> bool {
        self.mirroring_enabled
    }

    /// Enable or disable preview mirroring
    pub fn set_mirroring_enabled(&mut self, enabled: bool) {
        self.mirroring_enabled = enabled;
    }

    /// Which camera facing is active
    pub fn active_camera(&self) -> CameraFacing {
        self.active_camera
    }

    /// Select the active camera facing
    pub fn set_active_camera(&mut self, facing: CameraFacing) {
        self.active_camera = facing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let model = SettingsModel::new();
        assert!(model.is_symbology_enabled(Symbology::Ean13));
        assert!(model.is_symbology_enabled(Symbology::Qr));
        assert!(!model.is_symbology_enabled(Symbology::Aztec));
        assert!(model.search_area().is_full_frame());
        assert_eq!(model.duplicate_filter_ms(), 0);
        assert_eq!(model.max_codes_per_frame(), 1);
        assert_eq!(model.gui_style(), GuiStyle::Laser);
        assert_eq!(model.active_camera(), CameraFacing::Back);
    }

    #[test]
    fn test_negative_duplicate_filter_rejected() {
        let mut model = SettingsModel::new();
        model.set_duplicate_filter_ms(750).unwrap();

        let err = model.set_duplicate_filter_ms(-1).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateFilterOutOfRange(-1));
        // Model unchanged after the failed call
        assert_eq!(model.duplicate_filter_ms(), 750);
    }

    #[test]
    fn test_oversized_duplicate_filter_rejected() {
        let mut model = SettingsModel::new();
        model.set_duplicate_filter_ms(750).unwrap();

        let too_large = i64::from(u32::MAX) + 1;
        let err = model.set_duplicate_filter_ms(too_large).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateFilterOutOfRange(too_large));
        assert_eq!(model.duplicate_filter_ms(), 750, "model must be unchanged");

        model.set_duplicate_filter_ms(i64::from(u32::MAX)).unwrap();
        assert_eq!(model.duplicate_filter_ms(), u32::MAX);
    }

    #[test]
    fn test_max_codes_range() {
        let mut model = SettingsModel::new();
        assert_eq!(
            model.set_max_codes_per_frame(0).unwrap_err(),
            ValidationError::MaxCodesOutOfRange(0)
        );
        assert!(model.set_max_codes_per_frame(-3).is_err());
        assert!(model.set_max_codes_per_frame(i64::from(u32::MAX) + 1).is_err());
        assert_eq!(model.max_codes_per_frame(), 1);

        model.set_max_codes_per_frame(4).unwrap();
        assert_eq!(model.max_codes_per_frame(), 4);
    }

    #[test]
    fn test_search_area_validation() {
        let mut model = SettingsModel::new();

        let err = model
            .set_search_area(SearchArea::new(1.5, 0.0, 0.5, 0.5))
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::AreaCoordinateOutOfRange { field: "x", .. }
        ));

        let err = model
            .set_search_area(SearchArea::new(0.0, 0.0, 0.0, 0.5))
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::EmptyAreaDimension { field: "width", .. }
        ));

        assert!(model.search_area().is_full_frame(), "model must be unchanged");

        model
            .set_search_area(SearchArea::new(0.25, 0.25, 0.5, 0.5))
            .unwrap();
        assert_eq!(model.search_area(), SearchArea::new(0.25, 0.25, 0.5, 0.5));
    }

    #[test]
    fn test_symbology_toggles() {
        let mut model = SettingsModel::new();
        model.enable_symbology(Symbology::Aztec);
        assert!(model.is_symbology_enabled(Symbology::Aztec));
        model.disable_symbology(Symbology::Aztec);
        assert!(!model.is_symbology_enabled(Symbology::Aztec));
    }
}

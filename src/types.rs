// SPDX-License-Identifier: GPL-3.0-only

//! Core value types for the barcode picker
//!
//! These types describe the catalog the external scanning engine exposes
//! (symbologies, GUI styles, cameras) and the results it produces. They are
//! used throughout the crate for settings, control registration, and scan
//! event handling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A barcode encoding standard known to the scanning engine
///
/// The catalog is fixed: a settings model can only ever enable symbologies
/// listed here, which is how the "enabled set is a subset of the catalog"
/// invariant is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbology {
    /// EAN-13 (European retail)
    Ean13,
    /// EAN-8 (compact retail)
    Ean8,
    /// UPC-A (North American retail)
    UpcA,
    /// UPC-E (compact UPC)
    UpcE,
    /// Code 39
    Code39,
    /// Code 93
    Code93,
    /// Code 128
    Code128,
    /// Code 11
    Code11,
    /// Codabar
    Codabar,
    /// Interleaved Two of Five (ITF)
    InterleavedTwoOfFive,
    /// QR code
    Qr,
    /// Micro QR code
    MicroQr,
    /// Data Matrix
    DataMatrix,
    /// PDF417
    Pdf417,
    /// Aztec
    Aztec,
    /// MSI Plessey
    MsiPlessey,
}

impl Symbology {
    /// All symbologies in the catalog, in enumeration order
    pub const ALL: [Symbology; 16] = [
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::UpcA,
        Symbology::UpcE,
        Symbology::Code39,
        Symbology::Code93,
        Symbology::Code128,
        Symbology::Code11,
        Symbology::Codabar,
        Symbology::InterleavedTwoOfFive,
        Symbology::Qr,
        Symbology::MicroQr,
        Symbology::DataMatrix,
        Symbology::Pdf417,
        Symbology::Aztec,
        Symbology::MsiPlessey,
    ];

    /// Stable identifier used as the control registry key
    pub fn id(&self) -> &'static str {
        match self {
            Symbology::Ean13 => "ean13",
            Symbology::Ean8 => "ean8",
            Symbology::UpcA => "upca",
            Symbology::UpcE => "upce",
            Symbology::Code39 => "code39",
            Symbology::Code93 => "code93",
            Symbology::Code128 => "code128",
            Symbology::Code11 => "code11",
            Symbology::Codabar => "codabar",
            Symbology::InterleavedTwoOfFive => "itf",
            Symbology::Qr => "qr",
            Symbology::MicroQr => "microqr",
            Symbology::DataMatrix => "data-matrix",
            Symbology::Pdf417 => "pdf417",
            Symbology::Aztec => "aztec",
            Symbology::MsiPlessey => "msi-plessey",
        }
    }

    /// Look up a symbology by its identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.id() == id)
    }

    /// Human-readable name for display next to the toggle
    pub fn humanized_name(&self) -> &'static str {
        match self {
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean8 => "EAN-8",
            Symbology::UpcA => "UPC-A",
            Symbology::UpcE => "UPC-E",
            Symbology::Code39 => "Code 39",
            Symbology::Code93 => "Code 93",
            Symbology::Code128 => "Code 128",
            Symbology::Code11 => "Code 11",
            Symbology::Codabar => "Codabar",
            Symbology::InterleavedTwoOfFive => "Interleaved Two of Five",
            Symbology::Qr => "QR",
            Symbology::MicroQr => "Micro QR",
            Symbology::DataMatrix => "Data Matrix",
            Symbology::Pdf417 => "PDF417",
            Symbology::Aztec => "Aztec",
            Symbology::MsiPlessey => "MSI Plessey",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.humanized_name())
    }
}

/// Visual overlay mode shown over the camera preview while scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GuiStyle {
    /// No overlay
    None,
    /// Laser line across the preview (default)
    #[default]
    Laser,
    /// Viewfinder rectangle
    Viewfinder,
}

impl GuiStyle {
    /// All GUI styles, in the order the settings view lists them
    pub const ALL: [GuiStyle; 3] = [GuiStyle::None, GuiStyle::Laser, GuiStyle::Viewfinder];

    /// Stable identifier used as the control registry key
    pub fn id(&self) -> &'static str {
        match self {
            GuiStyle::None => "none",
            GuiStyle::Laser => "laser",
            GuiStyle::Viewfinder => "viewfinder",
        }
    }

    /// Look up a GUI style by its identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.id() == id)
    }

    /// Display name for the settings view
    pub fn display_name(&self) -> &'static str {
        match self {
            GuiStyle::None => "None",
            GuiStyle::Laser => "Laser",
            GuiStyle::Viewfinder => "Viewfinder",
        }
    }
}

/// Which side of the device a camera faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraFacing {
    /// User-facing camera
    Front,
    /// World-facing camera (default)
    #[default]
    Back,
}

impl CameraFacing {
    /// Both facings, in the order the settings view lists them
    pub const ALL: [CameraFacing; 2] = [CameraFacing::Front, CameraFacing::Back];

    /// Stable identifier used as the control registry key
    pub fn id(&self) -> &'static str {
        match self {
            CameraFacing::Front => "front",
            CameraFacing::Back => "back",
        }
    }

    /// Look up a facing by its identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.id() == id)
    }
}

/// A camera device reported by the device service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    /// Device identifier from the camera backend
    pub id: String,
    /// Human-readable label
    pub label: String,
    /// Which way the camera faces
    pub facing: CameraFacing,
}

/// A sub-rectangle of the camera frame outside which scanning is ignored
///
/// Coordinates are fractions of the frame in [0, 1]. The full-frame
/// rectangle {0, 0, 1, 1} is the sentinel for "no restriction": the
/// settings UI derives its restricted-area toggle from whether the area
/// differs from it. The flag is never stored separately, so it cannot
/// desynchronize from the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchArea {
    /// Left edge (0.0 = left of frame, 1.0 = right of frame)
    pub x: f64,
    /// Top edge (0.0 = top of frame, 1.0 = bottom of frame)
    pub y: f64,
    /// Width as fraction of frame width
    pub width: f64,
    /// Height as fraction of frame height
    pub height: f64,
}

impl SearchArea {
    /// The unrestricted full-frame sentinel
    pub const FULL_FRAME: SearchArea = SearchArea {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    /// Create a search area from fractional coordinates
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this area is the unrestricted full-frame sentinel
    pub fn is_full_frame(&self) -> bool {
        *self == Self::FULL_FRAME
    }
}

impl Default for SearchArea {
    fn default() -> Self {
        Self::FULL_FRAME
    }
}

/// A single decoded barcode reported by the scanning engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Symbology of the decoded barcode
    pub symbology: Symbology,
    /// Decoded payload
    pub data: String,
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbology.humanized_name(), self.data)
    }
}

/// The option catalog the scanning engine exposes at startup
///
/// Symbologies and GUI styles are static engine capabilities; cameras come
/// from device enumeration and may be empty until enumeration completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Symbologies the engine can decode
    pub symbologies: Vec<Symbology>,
    /// Overlay styles the picker can render
    pub gui_styles: Vec<GuiStyle>,
    /// Detected camera devices
    pub cameras: Vec<Camera>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            symbologies: Symbology::ALL.to_vec(),
            gui_styles: GuiStyle::ALL.to_vec(),
            cameras: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbology_id_round_trip() {
        for symbology in Symbology::ALL {
            assert_eq!(Symbology::from_id(symbology.id()), Some(symbology));
        }
        assert_eq!(Symbology::from_id("rm4scc"), None);
    }

    #[test]
    fn test_humanized_names() {
        assert_eq!(Symbology::Ean13.humanized_name(), "EAN-13");
        assert_eq!(Symbology::InterleavedTwoOfFive.id(), "itf");
        assert_eq!(GuiStyle::Viewfinder.display_name(), "Viewfinder");
    }

    #[test]
    fn test_full_frame_sentinel() {
        assert!(SearchArea::FULL_FRAME.is_full_frame());
        assert!(SearchArea::default().is_full_frame());
        assert!(!SearchArea::new(0.0, 0.25, 1.0, 0.5).is_full_frame());
        // An offset full-size rectangle is still a restriction
        assert!(!SearchArea::new(0.1, 0.0, 1.0, 1.0).is_full_frame());
    }

    #[test]
    fn test_gui_style_default_is_laser() {
        assert_eq!(GuiStyle::default(), GuiStyle::Laser);
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use crate::types::Symbology;

/// Symbologies enabled by default when a settings model is created
///
/// Matches the set a retail scanning demo typically wants out of the box:
/// the common 1D retail and logistics codes plus QR.
pub const DEFAULT_SYMBOLOGIES: [Symbology; 9] = [
    Symbology::Ean13,
    Symbology::Ean8,
    Symbology::Code39,
    Symbology::Code93,
    Symbology::Code128,
    Symbology::UpcA,
    Symbology::UpcE,
    Symbology::InterleavedTwoOfFive,
    Symbology::Qr,
];

/// Default duplicate-filter window in milliseconds (0 = no filtering)
pub const DEFAULT_DUPLICATE_FILTER_MS: u32 = 0;

/// Default maximum number of codes recognized per frame
pub const DEFAULT_MAX_CODES_PER_FRAME: u32 = 1;

/// Placeholder text the result view shows while no codes have been scanned
///
/// [`DisplaySink`](crate::session::DisplaySink) implementations are expected
/// to render this text whenever `show_placeholder` is called.
pub const NO_RESULTS_PLACEHOLDER: &str = "No codes scanned yet";

// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the barcode picker

use crate::registry::ControlKind;
use crate::types::ScanResult;
use std::fmt;

/// Result type alias using PickerError
pub type PickerResult<T> = Result<T, PickerError>;

/// Main picker error type
#[derive(Debug, Clone, PartialEq)]
pub enum PickerError {
    /// Invalid settings value
    Validation(ValidationError),
    /// Settings synchronization failure
    Sync(SyncError),
    /// External device service failure
    Device(DeviceError),
    /// Scan session inconsistency
    Session(SessionError),
}

/// An invalid settings value, rejected before the model is touched
///
/// The model is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Duplicate filter window must be a non-negative 32-bit value
    DuplicateFilterOutOfRange(i64),
    /// Per-frame code limit must be a positive 32-bit value
    MaxCodesOutOfRange(i64),
    /// Search area coordinate outside [0, 1]
    AreaCoordinateOutOfRange {
        /// Which coordinate field was rejected
        field: &'static str,
        /// The rejected value
        value: f64,
    },
    /// Search area width or height must be positive
    EmptyAreaDimension {
        /// Which dimension field was rejected
        field: &'static str,
        /// The rejected value
        value: f64,
    },
    /// Raw control value could not be parsed as a number
    MalformedNumber {
        /// Which form field held the value
        field: &'static str,
        /// The raw text as entered
        value: String,
    },
    /// Checked control key does not name a known catalog option
    UnknownOption {
        /// Which control group the key came from
        kind: ControlKind,
        /// The unrecognized key
        key: String,
    },
}

/// Settings synchronization errors
#[derive(Debug, Clone, PartialEq)]
pub enum SyncError {
    /// A pushed value failed model validation
    Validation(ValidationError),
    /// A mutually-exclusive control group had zero or multiple entries
    /// checked at push time. The UI layer owns exclusivity, so this is a
    /// programming invariant violation and the push is aborted.
    Exclusivity {
        /// The violated control group
        kind: ControlKind,
        /// How many entries were checked
        checked: usize,
    },
}

/// Failures reported by the external decoder/camera device service
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceError {
    /// No camera matched the requested facing
    NoCameraFound,
    /// Engine configuration failed
    ConfigurationFailed(String),
    /// Camera enumeration or switching failed
    CameraAccessFailed(String),
    /// Applying settings to the device failed
    ApplyFailed(String),
    /// Scan error event from the engine
    Scan(String),
}

/// Scan session inconsistencies
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// A scan result arrived while the session was not scanning. Device
    /// scanning is suspended outside the Scanning state, so this is a
    /// reportable inconsistency rather than a normal event.
    UnexpectedScan {
        /// Name of the state the session was in
        state: &'static str,
        /// The result that was dropped
        result: ScanResult,
    },
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerError::Validation(e) => write!(f, "Validation error: {}", e),
            PickerError::Sync(e) => write!(f, "Sync error: {}", e),
            PickerError::Device(e) => write!(f, "Device error: {}", e),
            PickerError::Session(e) => write!(f, "Session error: {}", e),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateFilterOutOfRange(ms) => {
                write!(
                    f,
                    "Duplicate filter must be within [0, {}] ms, got {}",
                    u32::MAX,
                    ms
                )
            }
            ValidationError::MaxCodesOutOfRange(count) => {
                write!(
                    f,
                    "Max codes per frame must be within [1, {}], got {}",
                    u32::MAX,
                    count
                )
            }
            ValidationError::AreaCoordinateOutOfRange { field, value } => {
                write!(f, "Search area {} must be within [0, 1], got {}", field, value)
            }
            ValidationError::EmptyAreaDimension { field, value } => {
                write!(f, "Search area {} must be positive, got {}", field, value)
            }
            ValidationError::MalformedNumber { field, value } => {
                write!(f, "Value {:?} for {} is not a valid number", value, field)
            }
            ValidationError::UnknownOption { kind, key } => {
                write!(f, "Unknown {} option {:?}", kind, key)
            }
        }
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Validation(e) => write!(f, "{}", e),
            SyncError::Exclusivity { kind, checked } => {
                write!(
                    f,
                    "Expected exactly one checked {} entry, found {}",
                    kind, checked
                )
            }
        }
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::NoCameraFound => write!(f, "No camera devices found"),
            DeviceError::ConfigurationFailed(msg) => write!(f, "Configuration failed: {}", msg),
            DeviceError::CameraAccessFailed(msg) => write!(f, "Camera access failed: {}", msg),
            DeviceError::ApplyFailed(msg) => write!(f, "Failed to apply settings: {}", msg),
            DeviceError::Scan(msg) => write!(f, "Scan error: {}", msg),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::UnexpectedScan { state, result } => {
                write!(
                    f,
                    "Received {} result while session is {}",
                    result.symbology, state
                )
            }
        }
    }
}

impl std::error::Error for PickerError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for SyncError {}
impl std::error::Error for DeviceError {}
impl std::error::Error for SessionError {}

// Conversions from sub-errors to PickerError
impl From<ValidationError> for PickerError {
    fn from(err: ValidationError) -> Self {
        PickerError::Validation(err)
    }
}

impl From<SyncError> for PickerError {
    fn from(err: SyncError) -> Self {
        PickerError::Sync(err)
    }
}

impl From<DeviceError> for PickerError {
    fn from(err: DeviceError) -> Self {
        PickerError::Device(err)
    }
}

impl From<SessionError> for PickerError {
    fn from(err: SessionError) -> Self {
        PickerError::Session(err)
    }
}

impl From<ValidationError> for SyncError {
    fn from(err: ValidationError) -> Self {
        SyncError::Validation(err)
    }
}

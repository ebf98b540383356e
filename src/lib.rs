// SPDX-License-Identifier: GPL-3.0-only

//! Barcode picker core
//!
//! Core logic for a camera barcode-picker application: a validated scanner
//! settings model, two-way synchronization between that model and a set of
//! UI control handles, and a scan session state machine with single-shot
//! auto-pause. Barcode decoding, camera capture and rendering are external
//! collaborators reached through the traits in [`device`] and [`session`].
//!
//! # Architecture
//!
//! - [`types`]: catalog and value types (symbologies, GUI styles, cameras)
//! - [`settings`]: the canonical [`SettingsModel`]
//! - [`registry`]: control handles keyed by logical identity
//! - [`sync`]: pull/push between model and controls
//! - [`session`]: pause/resume state machine and result routing
//! - [`device`]: the external decoder/camera service surface
//! - [`picker`]: the facade wiring everything together

pub mod constants;
pub mod device;
pub mod errors;
pub mod picker;
pub mod registry;
pub mod session;
pub mod settings;
pub mod sync;
pub mod types;

// Re-export commonly used types
pub use device::{ConfigureOptions, DeviceEvent, DeviceService, device_event_channel};
pub use errors::{DeviceError, PickerError, PickerResult, SessionError, SyncError, ValidationError};
pub use picker::{Picker, initialize};
pub use registry::{ControlHandle, ControlKind, ControlRegistry, ToggleHandle};
pub use session::{DisplaySink, ScanSessionController, SessionState};
pub use settings::SettingsModel;
pub use sync::{SettingsForm, pull_from_model, push_to_model};
pub use types::{Camera, CameraFacing, Catalog, GuiStyle, ScanResult, SearchArea, Symbology};

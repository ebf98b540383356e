// SPDX-License-Identifier: GPL-3.0-only

//! External decoder/camera device surface
//!
//! The scanning engine, camera pipeline and barcode decoding all live
//! outside this crate behind [`DeviceService`]. Operations that reach
//! hardware are asynchronous; settings application and pause/resume are
//! fire-and-forget. The device reports scans and failures as
//! [`DeviceEvent`]s over a channel the host wires up.

use crate::errors::DeviceError;
use crate::settings::SettingsModel;
use crate::types::{Camera, ScanResult};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Options for the initial engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigureOptions {
    /// License key for the scanning engine
    pub license_key: String,
    /// Where the engine loads its decoder payload from
    pub engine_location: String,
    /// Whether the picker is visible once created
    pub visible: bool,
    /// Whether scanning starts suspended
    pub scanning_paused: bool,
}

impl Default for ConfigureOptions {
    fn default() -> Self {
        Self {
            license_key: String::new(),
            engine_location: String::new(),
            visible: true,
            // The picker starts in the settings view, so scanning waits
            scanning_paused: true,
        }
    }
}

/// Event emitted by the device service
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    /// A barcode was decoded
    Scan(ScanResult),
    /// The engine reported a failure
    Error(DeviceError),
}

/// Sender half of the device event channel
pub type DeviceEventSender = mpsc::UnboundedSender<DeviceEvent>;

/// Receiver half of the device event channel
pub type DeviceEventReceiver = mpsc::UnboundedReceiver<DeviceEvent>;

/// Create the channel a device implementation reports events through
pub fn device_event_channel() -> (DeviceEventSender, DeviceEventReceiver) {
    mpsc::unbounded_channel()
}

/// The decoder/camera service consumed by the picker
///
/// Async operations may suspend while awaiting hardware; the picker never
/// mutates its model while one is in flight. No retries or cancellation —
/// a failure is reported and the host decides what to do next.
pub trait DeviceService {
    /// Configure the scanning engine and create the picker session
    fn configure(&mut self, options: ConfigureOptions) -> BoxFuture<'_, Result<(), DeviceError>>;

    /// Enumerate the available camera devices
    fn enumerate_cameras(&mut self) -> BoxFuture<'_, Result<Vec<Camera>, DeviceError>>;

    /// Switch the active camera
    fn set_active_camera(&mut self, camera: Camera) -> BoxFuture<'_, Result<(), DeviceError>>;

    /// Apply the whole settings model to the engine
    fn apply_settings(&mut self, model: &SettingsModel) -> Result<(), DeviceError>;

    /// Suspend scanning without tearing the session down
    fn pause_scanning(&mut self);

    /// Resume a suspended session
    fn resume_scanning(&mut self);
}

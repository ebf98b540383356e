// SPDX-License-Identifier: GPL-3.0-only

//! Picker orchestration
//!
//! [`Picker`] wires the settings model, control registry, sync engine and
//! scan session to the external device service. All state lives here and
//! is passed explicitly to the pieces that need it; there are no ambient
//! singletons. Events are processed one at a time on a single logical
//! thread: every model or registry mutation runs to completion before the
//! next event is handled.

use crate::device::{ConfigureOptions, DeviceEvent, DeviceEventReceiver, DeviceService};
use crate::errors::{DeviceError, PickerError, PickerResult};
use crate::registry::{ControlKind, ControlRegistry};
use crate::session::{DisplaySink, ScanSessionController};
use crate::settings::SettingsModel;
use crate::sync::{self, SettingsForm};
use crate::types::{CameraFacing, Catalog};
use tracing::{error, info, warn};

/// Build the settings model and control registry from the engine catalog
///
/// Symbology and GUI style entries follow catalog enumeration order. The
/// camera group always gets a front and a back entry; whether both accept
/// input depends on later device enumeration.
pub fn initialize(catalog: &Catalog) -> (SettingsModel, ControlRegistry) {
    let mut registry = ControlRegistry::new();
    for symbology in &catalog.symbologies {
        registry.register(ControlKind::Symbology, symbology.id());
    }
    for style in &catalog.gui_styles {
        registry.register(ControlKind::GuiStyle, style.id());
    }
    for facing in CameraFacing::ALL {
        registry.register(ControlKind::Camera, facing.id());
    }
    info!(
        symbologies = catalog.symbologies.len(),
        gui_styles = catalog.gui_styles.len(),
        cameras = catalog.cameras.len(),
        "picker initialized from catalog"
    );
    (SettingsModel::new(), registry)
}

/// Orchestrates the settings model, session and device service
pub struct Picker<D: DeviceService, S: DisplaySink> {
    model: SettingsModel,
    registry: ControlRegistry,
    form: SettingsForm,
    session: ScanSessionController<S>,
    device: D,
    events: DeviceEventReceiver,
}

impl<D: DeviceService, S: DisplaySink> Picker<D, S> {
    /// Create a picker from the engine catalog and its collaborators
    ///
    /// `events` is the receiver half of the channel the device reports
    /// scans and errors through; see
    /// [`device_event_channel`](crate::device::device_event_channel).
    pub fn new(catalog: &Catalog, device: D, sink: S, events: DeviceEventReceiver) -> Self {
        let (model, registry) = initialize(catalog);
        let mut form = SettingsForm::default();
        // Controls start out mirroring the default model
        sync::pull_from_model(&model, &registry, &mut form);
        Self {
            model,
            registry,
            form,
            session: ScanSessionController::new(sink),
            device,
            events,
        }
    }

    /// The canonical settings model
    pub fn model(&self) -> &SettingsModel {
        &self.model
    }

    /// The control registry
    pub fn registry(&self) -> &ControlRegistry {
        &self.registry
    }

    /// The raw settings form, mutable so the host can edit field values
    pub fn form_mut(&mut self) -> &mut SettingsForm {
        &mut self.form
    }

    /// The scan session controller
    pub fn session(&self) -> &ScanSessionController<S> {
        &self.session
    }

    /// Configure the engine, then open the settings view
    ///
    /// Configuration failures abort startup; everything after that reports
    /// through the error channel instead.
    pub async fn start(&mut self, options: ConfigureOptions) -> PickerResult<()> {
        self.device
            .configure(options)
            .await
            .map_err(PickerError::from)?;
        info!("engine configured");
        self.show_settings().await;
        Ok(())
    }

    /// Enter the settings view
    ///
    /// Pauses the session and the device, refreshes camera-control
    /// enablement from device enumeration, and pulls the model into the
    /// controls.
    pub async fn show_settings(&mut self) {
        self.refresh_camera_controls().await;
        self.session
            .show_settings(&self.model, &self.registry, &mut self.form);
        self.device.pause_scanning();
    }

    /// Leave the settings view and start scanning
    ///
    /// Pushes the controls into the model first; validation or exclusivity
    /// failures abort here with the model untouched. The push completes
    /// against the local model before the device is asked to apply it, so
    /// a device failure never leaves the model half-updated — the model is
    /// desired state and the device may lag behind it.
    pub fn show_scanner(&mut self, continuous: bool) -> PickerResult<()> {
        self.model = sync::push_to_model(&self.registry, &self.form)?;
        if let Err(e) = self.device.apply_settings(&self.model) {
            self.report_device_error(e);
        }
        self.session.start(continuous);
        self.device.resume_scanning();
        Ok(())
    }

    /// Resume a paused session
    pub fn resume_scanning(&mut self) {
        if self.session.resume() {
            self.device.resume_scanning();
        }
    }

    /// Switch to the camera with the given facing
    ///
    /// Enumerates devices, picks the first match and asks the device to
    /// switch. Failures are reported; the model keeps its previous camera.
    pub async fn set_enabled_camera(&mut self, facing: CameraFacing) {
        self.registry
            .set_exclusive_checked(ControlKind::Camera, facing.id());

        let cameras = match self.device.enumerate_cameras().await {
            Ok(cameras) => cameras,
            Err(e) => return self.report_device_error(e),
        };
        let Some(camera) = cameras.into_iter().find(|c| c.facing == facing) else {
            return self.report_device_error(DeviceError::NoCameraFound);
        };

        info!(facing = facing.id(), camera = %camera.label, "switching camera");
        if let Err(e) = self.device.set_active_camera(camera).await {
            return self.report_device_error(e);
        }
        self.model.set_active_camera(facing);
    }

    /// Process device events until the sender side closes
    pub async fn run_events(&mut self) {
        while let Some(event) = self.events.recv().await {
            self.handle_event(event);
        }
    }

    /// Handle one device event
    ///
    /// Scans are routed to the session; in single-shot mode the device is
    /// suspended as soon as the session auto-pauses. A scan arriving while
    /// the session is not scanning is logged and reported, never fatal.
    pub fn handle_event(&mut self, event: DeviceEvent) {
        match event {
            DeviceEvent::Scan(result) => match self.session.on_scan_result(result) {
                Ok(()) => {
                    if self.session.is_paused() {
                        self.device.pause_scanning();
                    }
                }
                Err(e) => {
                    warn!(error = %e, "dropping scan result");
                    let message = e.to_string();
                    self.session.sink_mut().show_error(&message);
                }
            },
            DeviceEvent::Error(e) => self.report_device_error(e),
        }
    }

    async fn refresh_camera_controls(&mut self) {
        match self.device.enumerate_cameras().await {
            Ok(cameras) => {
                // With a single camera there is nothing to switch to
                let switchable = cameras.len() > 1;
                for entry in self.registry.entries_of(ControlKind::Camera) {
                    entry.set_enabled(switchable);
                }
            }
            Err(e) => self.report_device_error(e),
        }
    }

    fn report_device_error(&mut self, e: DeviceError) {
        error!(error = %e, "device operation failed");
        let message = e.to_string();
        self.session.sink_mut().show_error(&message);
    }
}

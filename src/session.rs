// SPDX-License-Identifier: GPL-3.0-only

//! Scan session control
//!
//! [`ScanSessionController`] owns the pause/resume state machine and routes
//! scan results to the display sink. In single-shot mode the session pauses
//! itself after the first result and tells the sink that resuming is
//! available; in continuous mode it keeps forwarding results until the user
//! leaves the scanner view.

use crate::errors::SessionError;
use crate::registry::ControlRegistry;
use crate::settings::SettingsModel;
use crate::sync::{self, SettingsForm};
use crate::types::ScanResult;
use tracing::{debug, info};

/// Scan session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Created, never started
    #[default]
    Idle,
    /// Actively scanning
    Scanning,
    /// Scanning suspended, resumable
    Paused,
}

impl SessionState {
    /// State name for logs and error reports
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Scanning => "scanning",
            SessionState::Paused => "paused",
        }
    }
}

/// Rendering collaborator for scan results and session feedback
///
/// The implementation owns presentation entirely; the controller only
/// reports what happened.
pub trait DisplaySink {
    /// Render one scan result
    fn show_result(&mut self, result: &ScanResult);
    /// Clear results and show the
    /// [`NO_RESULTS_PLACEHOLDER`](crate::constants::NO_RESULTS_PLACEHOLDER)
    /// text
    fn show_placeholder(&mut self);
    /// Show or hide the resume affordance
    fn set_resume_available(&mut self, available: bool);
    /// Surface an error to the user
    fn show_error(&mut self, message: &str);
}

/// Orchestrates pause/resume transitions and routes results to the sink
#[derive(Debug)]
pub struct ScanSessionController<S: DisplaySink> {
    state: SessionState,
    continuous: bool,
    sink: S,
}

impl<S: DisplaySink> ScanSessionController<S> {
    /// Create an idle controller around a display sink
    pub fn new(sink: S) -> Self {
        Self {
            state: SessionState::Idle,
            continuous: false,
            sink,
        }
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session is actively scanning
    pub fn is_scanning(&self) -> bool {
        self.state == SessionState::Scanning
    }

    /// Whether the session is paused
    pub fn is_paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    /// Whether the session auto-pauses after each result
    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    /// Direct access to the display sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Begin scanning
    ///
    /// Clears previous results and hides the resume affordance. In
    /// single-shot mode (`continuous == false`) the very first result will
    /// pause the session again.
    pub fn start(&mut self, continuous: bool) {
        info!(continuous, from = self.state.name(), "scan session started");
        self.continuous = continuous;
        self.state = SessionState::Scanning;
        self.sink.show_placeholder();
        self.sink.set_resume_available(false);
    }

    /// Handle a scan result from the device
    ///
    /// Forwards the result to the sink while scanning. A result arriving in
    /// any other state is returned as [`SessionError::UnexpectedScan`] —
    /// device scanning is supposed to be suspended, so the caller should
    /// report it rather than ignore it.
    pub fn on_scan_result(&mut self, result: ScanResult) -> Result<(), SessionError> {
        match self.state {
            SessionState::Scanning => {
                debug!(symbology = result.symbology.id(), "scan result");
                self.sink.show_result(&result);
                if !self.continuous {
                    self.state = SessionState::Paused;
                    self.sink.set_resume_available(true);
                    info!("session auto-paused after scan");
                }
                Ok(())
            }
            state => Err(SessionError::UnexpectedScan {
                state: state.name(),
                result,
            }),
        }
    }

    /// Resume a paused session
    ///
    /// Returns whether scanning actually resumed. Calling this outside the
    /// Paused state is a no-op, not an error: the UI may race a resume
    /// click against other transitions.
    pub fn resume(&mut self) -> bool {
        if self.state != SessionState::Paused {
            debug!(state = self.state.name(), "resume ignored");
            return false;
        }
        info!("scan session resumed");
        self.state = SessionState::Scanning;
        self.sink.show_placeholder();
        self.sink.set_resume_available(false);
        true
    }

    /// Enter the settings view
    ///
    /// Forces a pause from any state so the settings reflect a stable
    /// snapshot, then pulls the model into the controls.
    pub fn show_settings(
        &mut self,
        model: &SettingsModel,
        registry: &ControlRegistry,
        form: &mut SettingsForm,
    ) {
        info!(from = self.state.name(), "entering settings");
        self.state = SessionState::Paused;
        sync::pull_from_model(model, registry, form);
    }
}

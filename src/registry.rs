// SPDX-License-Identifier: GPL-3.0-only

//! Control registry
//!
//! Maps logical setting keys (symbology id, GUI style id, camera facing) to
//! the UI control handles that render them. The registry is built once from
//! the engine catalog at startup; entries are appended for the lifetime of
//! the session and never removed. Handles are opaque: the registry only
//! requires the small [`ControlHandle`] capability surface, so any
//! rendering technology can plug in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Which group of settings controls an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlKind {
    /// Independently toggleable symbology switches
    Symbology,
    /// Mutually exclusive overlay style selector
    GuiStyle,
    /// Mutually exclusive camera selector
    Camera,
}

impl ControlKind {
    /// Whether at most one entry of this kind may be checked at a time
    pub fn is_exclusive(&self) -> bool {
        matches!(self, ControlKind::GuiStyle | ControlKind::Camera)
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlKind::Symbology => write!(f, "symbology"),
            ControlKind::GuiStyle => write!(f, "GUI style"),
            ControlKind::Camera => write!(f, "camera"),
        }
    }
}

/// Capability surface a UI control must offer to be registered
///
/// Implementations use interior mutability: the registry hands out shared
/// references and controls are flipped from synchronization code.
pub trait ControlHandle: Send + Sync {
    /// Current checked state
    fn checked(&self) -> bool;
    /// Set the checked state
    fn set_checked(&self, checked: bool);
    /// Whether the control accepts input
    fn enabled(&self) -> bool;
    /// Enable or disable the control
    fn set_enabled(&self, enabled: bool);
}

/// In-memory control handle
///
/// Default handle used when the host does not supply its own, and the
/// stand-in for real UI elements in tests.
#[derive(Debug, Default)]
pub struct ToggleHandle {
    checked: AtomicBool,
    enabled: AtomicBool,
}

impl ToggleHandle {
    /// Create an unchecked, enabled handle
    pub fn new() -> Self {
        Self {
            checked: AtomicBool::new(false),
            enabled: AtomicBool::new(true),
        }
    }
}

impl ControlHandle for ToggleHandle {
    fn checked(&self) -> bool {
        self.checked.load(Ordering::Acquire)
    }

    fn set_checked(&self, checked: bool) {
        self.checked.store(checked, Ordering::Release);
    }

    fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }
}

/// A registered control: logical identity plus its UI handle
pub struct ControlEntry {
    kind: ControlKind,
    key: String,
    handle: Arc<dyn ControlHandle>,
}

impl ControlEntry {
    /// The control group this entry belongs to
    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    /// The logical setting key this entry renders
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current checked state of the underlying control
    pub fn checked(&self) -> bool {
        self.handle.checked()
    }

    /// Set the checked state of the underlying control
    pub fn set_checked(&self, checked: bool) {
        self.handle.set_checked(checked);
    }

    /// Whether the underlying control accepts input
    pub fn enabled(&self) -> bool {
        self.handle.enabled()
    }

    /// Enable or disable the underlying control
    pub fn set_enabled(&self, enabled: bool) {
        self.handle.set_enabled(enabled);
    }
}

impl fmt::Debug for ControlEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlEntry")
            .field("kind", &self.kind)
            .field("key", &self.key)
            .field("checked", &self.checked())
            .field("enabled", &self.enabled())
            .finish()
    }
}

/// Registry of settings controls, in registration order
#[derive(Debug, Default)]
pub struct ControlRegistry {
    entries: Vec<ControlEntry>,
}

impl ControlRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a control with a default in-memory handle
    ///
    /// Idempotent: registering the same (kind, key) twice returns the
    /// existing entry instead of duplicating the control.
    pub fn register(&mut self, kind: ControlKind, key: &str) -> &ControlEntry {
        self.register_handle(kind, key, Arc::new(ToggleHandle::new()))
    }

    /// Register a control backed by a host-supplied handle
    ///
    /// Idempotent like [`register`](Self::register); when the (kind, key)
    /// pair already exists, the existing entry wins and `handle` is
    /// dropped.
    pub fn register_handle(
        &mut self,
        kind: ControlKind,
        key: &str,
        handle: Arc<dyn ControlHandle>,
    ) -> &ControlEntry {
        if let Some(index) = self.position(kind, key) {
            debug!(%kind, key, "control already registered");
            return &self.entries[index];
        }
        self.entries.push(ControlEntry {
            kind,
            key: key.to_string(),
            handle,
        });
        self.entries.last().expect("entry was just pushed")
    }

    /// Look up a single entry
    pub fn entry(&self, kind: ControlKind, key: &str) -> Option<&ControlEntry> {
        self.position(kind, key).map(|index| &self.entries[index])
    }

    /// All entries of a kind, in registration (catalog enumeration) order
    pub fn entries_of(&self, kind: ControlKind) -> impl Iterator<Item = &ControlEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    /// Keys of all checked entries of a kind
    pub fn checked_keys(&self, kind: ControlKind) -> BTreeSet<String> {
        self.entries_of(kind)
            .filter(|e| e.checked())
            .map(|e| e.key.clone())
            .collect()
    }

    /// Check one entry of a mutually-exclusive kind and uncheck its siblings
    ///
    /// The named entry is checked before the siblings are unchecked, so a
    /// caller never observes the group with zero entries checked. Returns
    /// `false` and leaves the group untouched when `key` is not
    /// registered.
    pub fn set_exclusive_checked(&self, kind: ControlKind, key: &str) -> bool {
        debug_assert!(kind.is_exclusive(), "{kind} is not an exclusive group");
        let Some(target) = self.entry(kind, key) else {
            debug!(%kind, key, "exclusive check for unregistered key ignored");
            return false;
        };
        target.set_checked(true);
        for entry in self.entries_of(kind) {
            if entry.key != key {
                entry.set_checked(false);
            }
        }
        true
    }

    fn position(&self, kind: ControlKind, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.kind == kind && e.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = ControlRegistry::new();
        registry.register(ControlKind::Symbology, "qr");
        registry.register(ControlKind::Symbology, "ean13");
        registry.register(ControlKind::Symbology, "qr");

        let keys: Vec<&str> = registry
            .entries_of(ControlKind::Symbology)
            .map(|e| e.key())
            .collect();
        assert_eq!(keys, ["qr", "ean13"], "no duplicate, order preserved");
    }

    #[test]
    fn test_same_key_different_kind_is_distinct() {
        let mut registry = ControlRegistry::new();
        registry.register(ControlKind::Symbology, "none");
        registry.register(ControlKind::GuiStyle, "none");
        assert_eq!(registry.entries_of(ControlKind::GuiStyle).count(), 1);
        assert_eq!(registry.entries_of(ControlKind::Symbology).count(), 1);
    }

    #[test]
    fn test_checked_keys() {
        let mut registry = ControlRegistry::new();
        registry.register(ControlKind::Symbology, "qr");
        registry.register(ControlKind::Symbology, "ean13");
        registry
            .entry(ControlKind::Symbology, "ean13")
            .unwrap()
            .set_checked(true);

        let checked = registry.checked_keys(ControlKind::Symbology);
        assert_eq!(checked.len(), 1);
        assert!(checked.contains("ean13"));
    }

    #[test]
    fn test_exclusive_checked_invariant() {
        let mut registry = ControlRegistry::new();
        for key in ["none", "laser", "viewfinder"] {
            registry.register(ControlKind::GuiStyle, key);
        }

        // Any sequence of exclusive checks leaves exactly one entry checked
        for key in ["laser", "none", "viewfinder", "viewfinder", "laser"] {
            assert!(registry.set_exclusive_checked(ControlKind::GuiStyle, key));
            let checked = registry.checked_keys(ControlKind::GuiStyle);
            assert_eq!(checked.len(), 1);
            assert!(checked.contains(key));
        }
    }

    #[test]
    fn test_exclusive_checked_unknown_key_is_noop() {
        let mut registry = ControlRegistry::new();
        registry.register(ControlKind::Camera, "front");
        registry.register(ControlKind::Camera, "back");
        registry.set_exclusive_checked(ControlKind::Camera, "back");

        assert!(!registry.set_exclusive_checked(ControlKind::Camera, "overhead"));
        let checked = registry.checked_keys(ControlKind::Camera);
        assert_eq!(checked.len(), 1);
        assert!(checked.contains("back"));
    }
}

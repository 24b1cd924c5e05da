//! Platform status probe: is the keyboard enabled, is it the active input method
//!
//! Values are sampled from a [`PlatformStatusSource`] and published through
//! [`Observable`]s. An observation opened with `foreground_only = true` is
//! frozen while the host app is in the background; the transition back to
//! the foreground resamples eagerly and notifies observers of any change.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::observable::Observable;

/// Host platform queries and actions for the keyboard's input method
pub trait PlatformStatusSource: Send + Sync {
    /// Whether the keyboard is enabled as an input method
    fn is_enabled(&self) -> bool;

    /// Whether the keyboard is the currently selected input method
    fn is_selected(&self) -> bool;

    /// Open the system UI where input methods are enabled
    fn open_enabler_ui(&self);

    /// Open the system input method picker
    fn open_picker_ui(&self);
}

/// Which status value an observation tracks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Enabled,
    Selected,
}

impl StatusKind {
    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::Enabled => "enabled",
            StatusKind::Selected => "selected",
        }
    }
}

struct Observation {
    kind: StatusKind,
    foreground_only: bool,
    value: Observable<bool>,
}

/// Samples platform status into observables
pub struct StatusProbe {
    source: Arc<dyn PlatformStatusSource>,
    foreground: AtomicBool,
    observations: Mutex<Vec<Observation>>,
}

impl StatusProbe {
    /// Create a probe; the host app is assumed to start in the foreground
    pub fn new(source: Arc<dyn PlatformStatusSource>) -> Self {
        Self {
            source,
            foreground: AtomicBool::new(true),
            observations: Mutex::new(Vec::new()),
        }
    }

    pub fn source(&self) -> &Arc<dyn PlatformStatusSource> {
        &self.source
    }

    pub fn observe_enabled(&self, foreground_only: bool) -> Observable<bool> {
        self.observe(StatusKind::Enabled, foreground_only)
    }

    pub fn observe_selected(&self, foreground_only: bool) -> Observable<bool> {
        self.observe(StatusKind::Selected, foreground_only)
    }

    /// Observable for `kind` in the given sampling mode
    ///
    /// The first request samples immediately so the value is defined before
    /// anything renders.
    pub fn observe(&self, kind: StatusKind, foreground_only: bool) -> Observable<bool> {
        let mut observations = self.observations.lock();
        if let Some(existing) = observations
            .iter()
            .find(|o| o.kind == kind && o.foreground_only == foreground_only)
        {
            return existing.value.clone();
        }

        let value = Observable::new(self.sample(kind));
        observations.push(Observation {
            kind,
            foreground_only,
            value: value.clone(),
        });
        value
    }

    /// Sample the platform and publish to every observation allowed to update
    pub fn poll(&self) {
        let foreground = self.is_foreground();
        let targets: Vec<(StatusKind, Observable<bool>)> = self
            .observations
            .lock()
            .iter()
            .filter(|o| foreground || !o.foreground_only)
            .map(|o| (o.kind, o.value.clone()))
            .collect();

        // Each kind is queried at most once per poll
        let mut enabled = None;
        let mut selected = None;
        for (kind, value) in targets {
            let sampled = match kind {
                StatusKind::Enabled => *enabled.get_or_insert_with(|| self.source.is_enabled()),
                StatusKind::Selected => *selected.get_or_insert_with(|| self.source.is_selected()),
            };
            if value.set(sampled) {
                log::debug!("Keyboard {} changed to {}", kind.label(), sampled);
            }
        }
    }

    /// Record a foreground/background transition
    ///
    /// Returning to the foreground resamples immediately.
    pub fn set_foreground(&self, foreground: bool) {
        let was_foreground = self.foreground.swap(foreground, Ordering::AcqRel);
        if foreground && !was_foreground {
            log::debug!("App resumed, resampling keyboard status");
            self.poll();
        }
    }

    pub fn is_foreground(&self) -> bool {
        self.foreground.load(Ordering::Acquire)
    }

    pub fn open_enabler_ui(&self) {
        self.source.open_enabler_ui();
    }

    pub fn open_picker_ui(&self) {
        self.source.open_picker_ui();
    }

    fn sample(&self, kind: StatusKind) -> bool {
        match kind {
            StatusKind::Enabled => self.source.is_enabled(),
            StatusKind::Selected => self.source.is_selected(),
        }
    }
}

/// Status source with settable answers
///
/// Used where the platform offers no input-method introspection, and as a
/// test double. Counts queries and UI requests.
#[derive(Debug, Default)]
pub struct FixedStatus {
    enabled: AtomicBool,
    selected: AtomicBool,
    queries: AtomicUsize,
    enabler_requests: AtomicUsize,
    picker_requests: AtomicUsize,
}

impl FixedStatus {
    pub fn new(enabled: bool, selected: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            selected: AtomicBool::new(selected),
            ..Self::default()
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn set_selected(&self, selected: bool) {
        self.selected.store(selected, Ordering::SeqCst);
    }

    /// Number of platform queries answered so far
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn enabler_requests(&self) -> usize {
        self.enabler_requests.load(Ordering::SeqCst)
    }

    pub fn picker_requests(&self) -> usize {
        self.picker_requests.load(Ordering::SeqCst)
    }
}

impl PlatformStatusSource for FixedStatus {
    fn is_enabled(&self) -> bool {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.enabled.load(Ordering::SeqCst)
    }

    fn is_selected(&self) -> bool {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.selected.load(Ordering::SeqCst)
    }

    fn open_enabler_ui(&self) {
        self.enabler_requests.fetch_add(1, Ordering::SeqCst);
    }

    fn open_picker_ui(&self) {
        self.picker_requests.fetch_add(1, Ordering::SeqCst);
    }
}

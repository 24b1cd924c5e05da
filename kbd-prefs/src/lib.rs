//! # Keyboard settings preferences
//!
//! Reactive state for the settings screens:
//!
//! - [`observable`] - shared values with dirty tracking and scoped subscriptions
//! - [`store`] - persisted boolean preferences exposed as observables
//! - [`file_backend`] - JSON file persistence for the store
//! - [`status`] - platform status probe (keyboard enabled / selected)
//! - [`keys`] - preference declarations
//!
//! ```text
//! JsonFileBackend ──► PreferenceStore ──► Observable<bool> ──┐
//!                                                           ├──► screen model
//! PlatformStatusSource ──► StatusProbe ──► Observable<bool> ─┘
//! ```

pub mod error;
pub mod file_backend;
pub mod keys;
pub mod observable;
pub mod status;
pub mod store;

// Re-exports
pub use error::{PrefsError, PrefsResult};
pub use file_backend::JsonFileBackend;
pub use observable::{Observable, Subscription, SubscriptionSet};
pub use status::{FixedStatus, PlatformStatusSource, StatusKind, StatusProbe};
pub use store::{BoolPref, MemoryBackend, PrefMap, PreferenceBackend, PreferenceStore};

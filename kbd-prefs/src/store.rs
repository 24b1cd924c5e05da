//! Preference store: persisted boolean flags exposed as observables
//!
//! Writes go to the backend first. Only a committed write updates the
//! observable, so an observed flag always equals the last value that reached
//! persistent storage.

use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::PrefsResult;
use crate::observable::Observable;

/// Raw persisted layout: a flat JSON object of `key -> value`
pub type PrefMap = serde_json::Map<String, Value>;

/// Declaration of a boolean preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoolPref {
    /// Key in the persisted map
    pub key: &'static str,
    /// Value used until the first write
    pub default: bool,
}

impl BoolPref {
    pub const fn new(key: &'static str, default: bool) -> Self {
        Self { key, default }
    }
}

/// Storage engine behind a [`PreferenceStore`]
pub trait PreferenceBackend: Send + Sync {
    /// Load every persisted entry
    fn load(&self) -> PrefsResult<PrefMap>;

    /// Replace the persisted entries with `values`
    fn save(&self, values: &PrefMap) -> PrefsResult<()>;
}

/// In-memory backend for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: Mutex<PrefMap>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given boolean entries already persisted
    pub fn with_flags<'a>(flags: impl IntoIterator<Item = (&'a str, bool)>) -> Self {
        let values = flags
            .into_iter()
            .map(|(key, value)| (key.to_string(), Value::Bool(value)))
            .collect();
        Self {
            values: Mutex::new(values),
        }
    }

    /// Copy of what is currently persisted
    pub fn snapshot(&self) -> PrefMap {
        self.values.lock().clone()
    }
}

impl PreferenceBackend for MemoryBackend {
    fn load(&self) -> PrefsResult<PrefMap> {
        Ok(self.values.lock().clone())
    }

    fn save(&self, values: &PrefMap) -> PrefsResult<()> {
        *self.values.lock() = values.clone();
        Ok(())
    }
}

/// Persisted flags with reactive reads
pub struct PreferenceStore {
    backend: Box<dyn PreferenceBackend>,
    persisted: Mutex<PrefMap>,
    flags: Mutex<HashMap<&'static str, Observable<bool>>>,
}

impl PreferenceStore {
    /// Open the store, loading whatever the backend holds
    ///
    /// A backend that cannot be read is treated as empty so every flag
    /// falls back to its default.
    pub fn open(backend: impl PreferenceBackend + 'static) -> Self {
        let persisted = match backend.load() {
            Ok(values) => values,
            Err(e) => {
                log::warn!("Failed to load preferences, using defaults: {}", e);
                PrefMap::new()
            }
        };
        log::debug!("Preference store opened with {} entries", persisted.len());

        Self {
            backend: Box::new(backend),
            persisted: Mutex::new(persisted),
            flags: Mutex::new(HashMap::new()),
        }
    }

    /// Open an empty, non-persistent store
    pub fn in_memory() -> Self {
        Self::open(MemoryBackend::new())
    }

    /// Observable for `pref`, seeded from storage or the default
    pub fn observe(&self, pref: &BoolPref) -> Observable<bool> {
        let mut flags = self.flags.lock();
        flags
            .entry(pref.key)
            .or_insert_with(|| Observable::new(self.persisted_value(pref)))
            .clone()
    }

    /// Current value of `pref`
    pub fn get(&self, pref: &BoolPref) -> bool {
        self.observe(pref).get()
    }

    /// Commit `value` and notify observers
    ///
    /// On a failed write the observed value is left untouched. The observable
    /// is updated while the persisted map is still locked, so concurrent
    /// writers cannot leave it holding anything but the last committed value.
    /// Observers are notified after the lock is released.
    pub fn set(&self, pref: &BoolPref, value: bool) -> PrefsResult<()> {
        let observable = self.observe(pref);
        let changed = {
            let mut persisted = self.persisted.lock();
            let mut next = persisted.clone();
            next.insert(pref.key.to_string(), Value::Bool(value));
            self.backend.save(&next)?;
            *persisted = next;
            observable.replace(value)
        };

        if let Some(version) = changed {
            log::debug!("Preference {} = {}", pref.key, value);
            observable.notify(version, &value);
        }
        Ok(())
    }

    /// Flip `pref`, returning the committed value
    pub fn toggle(&self, pref: &BoolPref) -> PrefsResult<bool> {
        let next = !self.get(pref);
        self.set(pref, next)?;
        Ok(next)
    }

    fn persisted_value(&self, pref: &BoolPref) -> bool {
        match self.persisted.lock().get(pref.key) {
            Some(Value::Bool(value)) => *value,
            Some(other) => {
                log::warn!(
                    "Ignoring non-boolean value {} for preference {}",
                    other,
                    pref.key
                );
                pref.default
            }
            None => pref.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrefsError;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    const FLAG: BoolPref = BoolPref::new("test__flag", false);
    const ON_BY_DEFAULT: BoolPref = BoolPref::new("test__on", true);

    /// Backend whose writes can be made to fail
    #[derive(Default)]
    struct FlakyBackend {
        values: Mutex<PrefMap>,
        fail: AtomicBool,
    }

    impl PreferenceBackend for Arc<FlakyBackend> {
        fn load(&self) -> PrefsResult<PrefMap> {
            Ok(self.values.lock().clone())
        }

        fn save(&self, values: &PrefMap) -> PrefsResult<()> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(PrefsError::Backend("write refused".to_string()));
            }
            *self.values.lock() = values.clone();
            Ok(())
        }
    }

    struct BrokenLoad;

    impl PreferenceBackend for BrokenLoad {
        fn load(&self) -> PrefsResult<PrefMap> {
            Err(PrefsError::Backend("unreadable".to_string()))
        }

        fn save(&self, _values: &PrefMap) -> PrefsResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_defaults_before_first_write() {
        let store = PreferenceStore::in_memory();
        assert!(!store.get(&FLAG));
        assert!(store.get(&ON_BY_DEFAULT));
    }

    #[test]
    fn test_loads_persisted_value() {
        let store = PreferenceStore::open(MemoryBackend::with_flags([("test__flag", true)]));
        assert!(store.get(&FLAG));
    }

    #[test]
    fn test_non_boolean_entry_falls_back_to_default() {
        let backend = MemoryBackend::new();
        let mut map = PrefMap::new();
        map.insert("test__on".to_string(), Value::String("yes".to_string()));
        backend.save(&map).unwrap();

        let store = PreferenceStore::open(backend);
        assert!(store.get(&ON_BY_DEFAULT));
    }

    #[test]
    fn test_unreadable_backend_uses_defaults() {
        let store = PreferenceStore::open(BrokenLoad);
        assert!(!store.get(&FLAG));
        assert!(store.get(&ON_BY_DEFAULT));
    }

    #[test]
    fn test_set_is_visible_immediately() {
        let store = PreferenceStore::in_memory();
        let observed = store.observe(&FLAG);

        store.set(&FLAG, true).unwrap();

        // Same logical render pass: no stale read
        assert!(observed.get());
        assert!(store.get(&FLAG));
    }

    #[test]
    fn test_set_notifies_observers() {
        let store = PreferenceStore::in_memory();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let _sub = store.observe(&FLAG).subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.set(&FLAG, true).unwrap();
        store.set(&FLAG, true).unwrap();
        store.set(&FLAG, false).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_set_persists_to_backend() {
        let backend = Arc::new(FlakyBackend::default());
        let store = PreferenceStore::open(Arc::clone(&backend));

        store.set(&FLAG, true).unwrap();

        assert_eq!(backend.values.lock().get("test__flag"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let backend = Arc::new(FlakyBackend::default());
        let store = PreferenceStore::open(Arc::clone(&backend));
        let observed = store.observe(&FLAG);

        backend.fail.store(true, Ordering::SeqCst);
        assert!(store.set(&FLAG, true).is_err());

        assert!(!observed.get());
        assert!(!observed.is_dirty());
        assert!(backend.values.lock().get("test__flag").is_none());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let store = PreferenceStore::in_memory();

        assert!(store.toggle(&FLAG).unwrap());
        assert!(!store.toggle(&FLAG).unwrap());
        assert!(!store.get(&FLAG));
    }

    #[test]
    fn test_observe_shares_one_value() {
        let store = PreferenceStore::in_memory();
        let a = store.observe(&FLAG);
        let b = store.observe(&FLAG);

        a.set(true);
        assert!(b.get());
    }

    #[test]
    fn test_unrelated_entries_survive_write() {
        let backend = Arc::new(FlakyBackend::default());
        backend
            .values
            .lock()
            .insert("other".to_string(), Value::from(42));
        let store = PreferenceStore::open(Arc::clone(&backend));

        store.set(&FLAG, true).unwrap();

        assert_eq!(backend.values.lock().get("other"), Some(&Value::from(42)));
    }

    #[test]
    fn test_concurrent_writers_leave_last_commit_observed() {
        let backend = Arc::new(FlakyBackend::default());
        let store = Arc::new(PreferenceStore::open(Arc::clone(&backend)));

        let writers: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for n in 0..200 {
                        store.set(&FLAG, (i + n) % 2 == 0).unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let persisted = backend.values.lock().get("test__flag").cloned();
        assert_eq!(persisted, Some(Value::Bool(store.get(&FLAG))));
    }
}

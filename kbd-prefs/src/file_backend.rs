//! JSON file backend for the preference store

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PrefsError, PrefsResult};
use crate::store::{PrefMap, PreferenceBackend};

/// Persists preferences as a flat JSON object on disk
#[derive(Clone, Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend at the default location in the user's home directory
    pub fn at_default_path() -> PrefsResult<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Get the preferences file path
    pub fn default_path() -> PrefsResult<PathBuf> {
        let home = dirs::home_dir().ok_or(PrefsError::NoHomeDir)?;
        Ok(home.join(".kbd-settings").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PrefsError {
        PrefsError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceBackend for JsonFileBackend {
    fn load(&self) -> PrefsResult<PrefMap> {
        if !self.path.exists() {
            log::debug!("No preferences file at {}", self.path.display());
            return Ok(PrefMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if content.trim().is_empty() {
            return Ok(PrefMap::new());
        }

        serde_json::from_str::<PrefMap>(&content).map_err(|source| PrefsError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, values: &PrefMap) -> PrefsResult<()> {
        // Ensure directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(values).map_err(|source| PrefsError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))?;

        log::debug!("Saved {} preferences to {}", values.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{BoolPref, PreferenceStore};
    use serde_json::Value;

    const COLLAPSED: BoolPref = BoolPref::new("internal__home_is_beta_toolbox_collapsed", false);

    #[test]
    fn test_default_path() {
        let path = JsonFileBackend::default_path().unwrap();
        assert!(path.ends_with(".kbd-settings/preferences.json"));
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(dir.path().join("absent.json"));
        assert!(backend.load().unwrap().is_empty());
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "  \n").unwrap();

        assert!(JsonFileBackend::new(path).load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileBackend::new(path).load().unwrap_err();
        assert!(matches!(err, PrefsError::Json { .. }));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("prefs.json");
        let backend = JsonFileBackend::new(&path);

        let mut values = PrefMap::new();
        values.insert("a".to_string(), Value::Bool(true));
        backend.save(&values).unwrap();

        assert!(path.exists());
        assert_eq!(backend.load().unwrap(), values);
    }

    #[test]
    fn test_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        {
            let store = PreferenceStore::open(JsonFileBackend::new(&path));
            store.set(&COLLAPSED, true).unwrap();
        }

        let reopened = PreferenceStore::open(JsonFileBackend::new(&path));
        assert!(reopened.get(&COLLAPSED));
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults_in_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = PreferenceStore::open(JsonFileBackend::new(&path));
        assert!(!store.get(&COLLAPSED));

        // The next write replaces the unreadable content
        store.set(&COLLAPSED, true).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let parsed: PrefMap = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.get(COLLAPSED.key), Some(&Value::Bool(true)));
    }
}

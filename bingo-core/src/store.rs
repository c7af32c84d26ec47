use crate::{
    constants::TEMP_FILE_SUFFIX,
    error::{Error, Result},
    state::State,
};

use std::{
    cell::RefCell,
    ffi::OsString,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::event;

/// `StateStore` is the durable home of the [State] record.
///
/// A store hands out a fresh [State] when nothing has been persisted yet, and must never expose
/// a partially written record.
pub trait StateStore {
    /// Load the persisted [State], or a fresh one if no record exists.
    ///
    /// # Errors
    ///
    /// - [Error::Storage] if the record exists but cannot be read.
    /// - [Error::MalformedRecord] if the record cannot be parsed into a valid [State].
    fn load(&self) -> Result<State>;

    /// Replace the persisted record with `state`.
    ///
    /// # Errors
    ///
    /// - [Error::Storage] if the medium cannot be written.
    fn save(&self, state: &State) -> Result<()>;
}

impl<T: StateStore + ?Sized> StateStore for &T {
    fn load(&self) -> Result<State> {
        (**self).load()
    }

    fn save(&self, state: &State) -> Result<()> {
        (**self).save(state)
    }
}

/// Stores the [State] as pretty-printed JSON at a fixed path.
///
/// Saves go through a sibling temporary file (the canonical path with `.tmp` appended) which is
/// synced and then renamed over the canonical path, so readers see either the old record or the
/// new one.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn temp_path(&self) -> PathBuf {
        let mut raw = OsString::from(self.path.as_os_str());
        raw.push(TEMP_FILE_SUFFIX);
        PathBuf::from(raw)
    }

    fn write_temp(&self, temp_path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = File::create(temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<State> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                event!(
                    tracing::Level::DEBUG,
                    "No state record at [{}], starting a fresh round",
                    self.path.display()
                );
                return Ok(State::fresh());
            }
            Err(e) => return Err(Error::storage(&self.path, e)),
        };

        let state: State =
            serde_json::from_str(&raw).map_err(|e| Error::malformed(&self.path, e))?;

        event!(
            tracing::Level::DEBUG,
            "Loaded state from [{}]: {} drawn, {} remaining",
            self.path.display(),
            state.history().len(),
            state.remaining().len()
        );

        Ok(state)
    }

    fn save(&self, state: &State) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(state)
            .map_err(|e| Error::storage(&self.path, io::Error::other(e)))?;

        let temp_path = self.temp_path();

        if let Err(e) = self.write_temp(&temp_path, &bytes) {
            let _ = fs::remove_file(&temp_path);
            return Err(Error::storage(&temp_path, e));
        }

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(Error::storage(&self.path, e));
        }

        event!(
            tracing::Level::DEBUG,
            "Saved state to [{}] ({} bytes)",
            self.path.display(),
            bytes.len()
        );

        Ok(())
    }
}

/// Keeps the [State] in memory. Used where no durable medium is wanted, such as tests of the
/// layers above the store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<Option<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: State) -> Self {
        Self {
            state: RefCell::new(Some(state)),
        }
    }

    pub fn snapshot(&self) -> Option<State> {
        self.state.borrow().clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<State> {
        Ok(self.state.borrow().clone().unwrap_or_default())
    }

    fn save(&self, state: &State) -> Result<()> {
        self.state.replace(Some(state.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::drawer::{Drawer, SeededSource, test::FixedClock};

    fn drawn_state(draws: usize) -> State {
        let mut drawer = Drawer::with_clock(SeededSource::seeded(7), FixedClock(1_000));
        let mut state = State::fresh();
        for _ in 0..draws {
            state = drawer.pick(&state).unwrap().state;
        }
        state
    }

    #[test]
    fn test_load_missing_record_returns_fresh_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("bingo_state.json"));

        let state = store.load().unwrap();

        assert_eq!(state, State::fresh());
        assert!(!store.path().exists(), "load should not create the record");
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("bingo_state.json"));

        for draws in [0, 1, 37, 75] {
            let state = drawn_state(draws);
            store.save(&state).unwrap();

            assert_eq!(store.load().unwrap(), state);
        }
        assert!(!store.temp_path().exists(), "temporary file should be renamed away");
    }

    #[test]
    fn test_saved_record_layout() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("bingo_state.json"));

        store.save(&State::fresh()).unwrap();
        let first = fs::read_to_string(store.path()).unwrap();

        assert!(first.starts_with("{\n  \"history\": [],\n  \"remaining\": [\n    1,\n    2,"));

        store.save(&State::fresh()).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), first);
    }

    #[test]
    fn test_load_corrupt_record_fails_without_repair() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("bingo_state.json"));
        fs::write(store.path(), "{\"remaining\": [1, 2").unwrap();

        let err = store.load().unwrap_err();

        assert!(matches!(err, Error::MalformedRecord { .. }), "got {err:?}");
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "{\"remaining\": [1, 2"
        );
    }

    #[test]
    fn test_load_out_of_range_record_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("bingo_state.json"));
        let remaining = (2..=76).collect::<Vec<u32>>();
        fs::write(
            store.path(),
            format!(r#"{{"remaining": {remaining:?}, "history": []}}"#),
        )
        .unwrap();

        assert!(matches!(
            store.load(),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_interrupted_save_keeps_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("bingo_state.json"));
        let previous = drawn_state(5);
        store.save(&previous).unwrap();

        // A crash before the rename leaves a truncated temporary file behind.
        fs::write(store.temp_path(), "{\"history\": [{\"n\": 4").unwrap();

        assert_eq!(store.load().unwrap(), previous);

        let next = drawn_state(6);
        store.save(&next).unwrap();
        assert_eq!(store.load().unwrap(), next);
    }

    #[test]
    fn test_save_to_unwritable_location_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing").join("bingo_state.json"));

        let err = store.save(&State::fresh()).unwrap_err();

        assert!(matches!(err, Error::Storage { .. }), "got {err:?}");
        assert!(!store.path().exists());
    }

    #[test]
    fn test_failed_replace_removes_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bingo_state.json");
        // A non-empty directory cannot be replaced by a file.
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();
        let store = JsonFileStore::new(&path);

        let err = store.save(&State::fresh()).unwrap_err();

        assert!(matches!(err, Error::Storage { .. }), "got {err:?}");
        assert!(!store.temp_path().exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), State::fresh());
        assert!(store.snapshot().is_none());

        let state = drawn_state(3);
        store.save(&state).unwrap();

        assert_eq!(store.load().unwrap(), state);
        assert_eq!(store.snapshot(), Some(state));
    }
}

// src/store.rs
// The snapshot file: a JSON array of activity strings from the most
// recent successful run. Anything unreadable loads as empty so a bad
// file can never wedge the watcher.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fs, io};

use tracing::warn;

pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the last-seen activity set. Missing file means first run;
    /// a corrupt or wrong-shaped file is logged and treated as empty.
    pub fn load(&self) -> BTreeSet<String> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == ErrorKind::NotFound => return BTreeSet::new(),
            Err(e) => {
                warn!("could not read snapshot {}: {e}; starting empty", self.path.display());
                return BTreeSet::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&text) {
            Ok(list) => list.into_iter().collect(),
            Err(e) => {
                warn!(
                    "snapshot {} is not a JSON array of strings: {e}; starting empty",
                    self.path.display()
                );
                BTreeSet::new()
            }
        }
    }

    /// Overwrite the snapshot with `activities`, sorted.
    /// Writes a sibling temp file and renames it into place so a crash
    /// mid-write cannot leave a half-written snapshot behind.
    pub fn save(&self, activities: &BTreeSet<String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let list: Vec<&String> = activities.iter().collect();
        let json = serde_json::to_string_pretty(&list)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

//! Command history persistence.
//!
//! Saved commands land as executable shell scripts named by a
//! second-resolution timestamp. Collisions within the same second are not
//! handled; the last write wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Default directory generated deploy scripts are written to.
pub const DEFAULT_HISTORY_DIR: &str = "scripts/tools/command_history";

/// Persists generated deploy commands for audit/replay.
pub trait HistoryStore {
    /// Write `command` as an executable shell script and return its path.
    fn save(&self, command: &str) -> io::Result<PathBuf>;
}

/// `HistoryStore` writing timestamped scripts under a fixed directory.
pub struct FsHistoryStore {
    dir: PathBuf,
}

impl FsHistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn script_name() -> String {
        Local::now().format("%Y%m%d%H%M%S.sh").to_string()
    }
}

impl HistoryStore for FsHistoryStore {
    fn save(&self, command: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(Self::script_name());
        fs::write(&path, format!("#!/bin/bash\n\n{command}"))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}

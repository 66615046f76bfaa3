//! Advisory file locks
//!
//! Two protocols coexist:
//!
//! - [`LockPair`]: the legacy two-sentinel protocol (protector file first,
//!   then lock file). Its existence check and creation are separate steps,
//!   so two processes racing between check and create can both acquire.
//!   Kept byte-for-byte compatible with existing deployments that watch
//!   these sentinel files.
//! - [`ExclusiveLock`]: a single sentinel created with `create_new`, which
//!   the filesystem makes atomic. New callers should use this one.
//!
//! Neither protocol blocks; callers poll.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::errors::{DbfError, DbfResult};
use crate::observability::Logger;

/// Sentinel body written into lock files. Informational only; acquisition
/// is decided by file existence, never by content.
const SENTINEL_BODY: &[u8] = b"Lock file active";

/// The legacy two-sentinel advisory lock.
pub struct LockPair;

impl LockPair {
    /// Attempts to acquire the pair. `Ok(false)` when either sentinel
    /// already exists; no files are left behind on a failed attempt.
    pub fn acquire(lock_path: &Path, protector_path: &Path) -> DbfResult<bool> {
        if protector_path.exists() {
            Logger::info(
                "DBF_LOCK_BUSY",
                &[("sentinel", &protector_path.display().to_string())],
            );
            return Ok(false);
        }
        fs::File::create(protector_path)?.write_all(SENTINEL_BODY)?;

        // A second check after the protector exists; the window between the
        // protector check and its creation remains open.
        if lock_path.exists() {
            fs::remove_file(protector_path)?;
            Logger::info(
                "DBF_LOCK_BUSY",
                &[("sentinel", &lock_path.display().to_string())],
            );
            return Ok(false);
        }

        match fs::File::create(lock_path) {
            Ok(mut file) => {
                file.write_all(SENTINEL_BODY)?;
                Logger::info(
                    "DBF_LOCK_ACQUIRED",
                    &[("lock", &lock_path.display().to_string())],
                );
                Ok(true)
            }
            Err(e) => {
                fs::remove_file(protector_path)?;
                Err(DbfError::Io(e))
            }
        }
    }

    /// Releases the pair by deleting whichever sentinels exist. Missing
    /// files are a no-op.
    pub fn release(lock_path: &Path, protector_path: &Path) -> DbfResult<()> {
        for path in [lock_path, protector_path] {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(DbfError::Io(e)),
            }
        }
        Logger::info(
            "DBF_LOCK_RELEASED",
            &[("lock", &lock_path.display().to_string())],
        );
        Ok(())
    }
}

/// Single-sentinel exclusive lock. Acquisition is one atomic `create_new`
/// open, so there is no check-then-create window.
pub struct ExclusiveLock {
    path: PathBuf,
}

impl ExclusiveLock {
    /// Acquires the lock, failing with [`DbfError::LockConflict`] when the
    /// sentinel already exists.
    pub fn acquire(path: &Path) -> DbfResult<Self> {
        match fs::OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(mut file) => {
                file.write_all(SENTINEL_BODY)?;
                Logger::info(
                    "DBF_LOCK_ACQUIRED",
                    &[("lock", &path.display().to_string())],
                );
                Ok(Self {
                    path: path.to_path_buf(),
                })
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(DbfError::LockConflict(path.display().to_string()))
            }
            Err(e) => Err(DbfError::Io(e)),
        }
    }

    /// Releases the lock by deleting its sentinel.
    pub fn release(self) -> DbfResult<()> {
        fs::remove_file(&self.path)?;
        Logger::info(
            "DBF_LOCK_RELEASED",
            &[("lock", &self.path.display().to_string())],
        );
        Ok(())
    }

    /// Path of the sentinel file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

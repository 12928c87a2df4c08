//! Size-based log file rotation
//!
//! An [`ActiveFile`] is an append-mode log file together with the bookkeeping
//! needed to decide when it must be rotated. Rotation closes the handle,
//! renames the file to `<name>.bak<YYYYMMDDHHMMSS>` and opens a fresh file at
//! the original path.

use crate::core::error::{LoggerError, Result};
use crate::core::timestamp;
use chrono::{DateTime, Local, NaiveDate, Timelike};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Marker between an active file name and its rotation timestamp
pub const BACKUP_MARKER: &str = ".bak";

/// When an active log file is rotated
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::RotationStrategy;
///
/// // Rotate once the file reaches 10 MB
/// let size = RotationStrategy::size(10 * 1024 * 1024);
///
/// // Rotate at 10 MB or whenever the wall-clock hour changes
/// let hourly = RotationStrategy::size_or_hour_change(10 * 1024 * 1024);
/// assert_eq!(hourly.max_bytes(), 10 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationStrategy {
    /// Rotate when the file size reaches `max_bytes`
    Size { max_bytes: u64 },

    /// Rotate on size, or when the hour differs from the hour the file was opened
    SizeOrHourChange { max_bytes: u64 },
}

impl RotationStrategy {
    #[must_use]
    pub fn size(max_bytes: u64) -> Self {
        RotationStrategy::Size { max_bytes }
    }

    #[must_use]
    pub fn size_or_hour_change(max_bytes: u64) -> Self {
        RotationStrategy::SizeOrHourChange { max_bytes }
    }

    pub fn max_bytes(&self) -> u64 {
        match self {
            RotationStrategy::Size { max_bytes }
            | RotationStrategy::SizeOrHourChange { max_bytes } => *max_bytes,
        }
    }

    fn watches_hour(&self) -> bool {
        matches!(self, RotationStrategy::SizeOrHourChange { .. })
    }
}

/// An open, append-only log file owned by the writer
pub(crate) struct ActiveFile {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    /// Bytes on disk plus bytes buffered since the last flush
    size: u64,
    /// Date and hour at which this file was opened
    period: (NaiveDate, u32),
    lock: bool,
}

impl ActiveFile {
    /// Open (or create) `path` for appending
    pub(crate) fn open(path: impl Into<PathBuf>, lock: bool) -> Result<Self> {
        let path = path.into();
        let (file, size) = open_append(&path, lock)?;
        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            size,
            period: period_of(&Local::now()),
            lock,
        })
    }

    #[cfg(test)]
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub(crate) fn size(&self) -> u64 {
        self.size
    }

    #[cfg(test)]
    pub(crate) fn set_opened_at(&mut self, at: &DateTime<Local>) {
        self.period = period_of(at);
    }

    /// Whether the file is due for rotation at `now`.
    ///
    /// An empty file whose hour has passed is carried over into the current
    /// hour instead of being rotated, so an idle logger leaves no empty backups.
    pub(crate) fn should_rotate(
        &mut self,
        strategy: &RotationStrategy,
        now: &DateTime<Local>,
    ) -> bool {
        if self.size >= strategy.max_bytes() {
            return true;
        }
        if !strategy.watches_hour() {
            return false;
        }
        let period = period_of(now);
        if period == self.period {
            return false;
        }
        if self.size == 0 {
            self.period = period;
            return false;
        }
        true
    }

    pub(crate) fn write_line(&mut self, line: &str) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("Log file is not open"))?;
        writer.write_all(line.as_bytes()).map_err(|e| {
            LoggerError::io_operation(
                "appending log record",
                format!("Failed to write to '{}'", self.path.display()),
                e,
            )
        })?;
        self.size += line.len() as u64;
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().map_err(|e| {
                LoggerError::io_operation(
                    "flushing log file",
                    format!("Failed to flush '{}'", self.path.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    /// Rotate the file, returning the backup path on success.
    ///
    /// A failed rename leaves the data in place; logging continues in the
    /// original file and `Ok(None)` is returned. Failure to open the
    /// replacement file is an error, after which this file stays closed.
    pub(crate) fn rotate(&mut self, now: &DateTime<Local>) -> Result<Option<PathBuf>> {
        // Dropping the writer closes the handle before the rename
        if let Some(mut writer) = self.writer.take() {
            if let Err(e) = writer.flush() {
                eprintln!(
                    "[LOGGER WARNING] Failed to flush '{}' before rotation: {}",
                    self.path.display(),
                    e
                );
            }
        }

        let backup = next_backup_path(&self.path, now);
        let renamed = match fs::rename(&self.path, &backup) {
            Ok(()) => true,
            Err(e) => {
                eprintln!(
                    "[LOGGER WARNING] Log rotation of '{}' failed: {}. Continuing with current file.",
                    self.path.display(),
                    e
                );
                false
            }
        };

        let (file, size) = open_append(&self.path, self.lock).map_err(|e| {
            LoggerError::file_rotation(
                self.path.display().to_string(),
                format!("Failed to open replacement log file: {}", e),
            )
        })?;

        self.writer = Some(BufWriter::new(file));
        self.period = period_of(now);
        // After a failed rename the old contents remain; a zero baseline keeps
        // the next record from retrying the rotation immediately
        self.size = if renamed { size } else { 0 };

        Ok(renamed.then_some(backup))
    }
}

impl Drop for ActiveFile {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            // Best effort flush - ignore errors during drop
            let _ = writer.flush();
        }
    }
}

fn period_of(datetime: &DateTime<Local>) -> (NaiveDate, u32) {
    (datetime.date_naive(), datetime.hour())
}

fn open_append(path: &Path, lock: bool) -> Result<(File, u64)> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggerError::file_open(path.display().to_string(), e.to_string()))?;

    if lock {
        lock_exclusive(&file, path)?;
    }

    let size = file
        .metadata()
        .map_err(|e| {
            LoggerError::file_open(
                path.display().to_string(),
                format!("Cannot access file metadata: {}", e),
            )
        })?
        .len();
    Ok((file, size))
}

#[cfg(feature = "file-lock")]
fn lock_exclusive(file: &File, path: &Path) -> Result<()> {
    use fs2::FileExt;
    file.try_lock_exclusive()
        .map_err(|_| LoggerError::file_lock(path.display().to_string()))
}

#[cfg(not(feature = "file-lock"))]
fn lock_exclusive(_file: &File, _path: &Path) -> Result<()> {
    Ok(())
}

/// Backup path for a rotation of `active` at `now`.
///
/// Rotations within the same second get `.1`, `.2`, ... appended so that an
/// earlier backup is never overwritten.
pub fn next_backup_path(active: &Path, now: &DateTime<Local>) -> PathBuf {
    let mut name = active.as_os_str().to_os_string();
    name.push(BACKUP_MARKER);
    name.push(timestamp::backup_suffix(now));
    let base = PathBuf::from(name);

    if !base.exists() {
        return base;
    }
    let mut seq = 1u32;
    loop {
        let mut candidate = base.clone().into_os_string();
        candidate.push(format!(".{}", seq));
        let candidate = PathBuf::from(candidate);
        if !candidate.exists() {
            return candidate;
        }
        seq += 1;
    }
}

/// Rotation order key of a backup file name, `None` for unrelated files
fn backup_order(active_name: &str, file_name: &str) -> Option<(String, u32)> {
    let rest = file_name
        .strip_prefix(active_name)?
        .strip_prefix(BACKUP_MARKER)?;
    let (stamp, seq) = match rest.split_once('.') {
        Some((stamp, seq)) => (stamp, seq.parse::<u32>().ok()?),
        None => (rest, 0),
    };
    timestamp::parse_backup_suffix(stamp)?;
    Some((stamp.to_string(), seq))
}

/// Backups of `active` in the order they were rotated, oldest first
pub fn list_backups(active: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let active = active.as_ref();
    let dir = match active.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let active_name = active
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggerError::config("rotation", "log path has no file name"))?;

    let entries = fs::read_dir(&dir).map_err(|e| {
        LoggerError::io_operation(
            "listing rotated log files",
            format!("Failed to read directory '{}'", dir.display()),
            e,
        )
    })?;

    let mut backups: Vec<((String, u32), PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name();
            let key = backup_order(active_name, name.to_str()?)?;
            Some((key, entry.path()))
        })
        .collect();
    backups.sort();
    Ok(backups.into_iter().map(|(_, path)| path).collect())
}

//! Core domain types for transfers.
//!
//! Pure data types; the only clock access is the registration timestamp.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Host-assigned identifier of a single transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferId(u64);

impl TransferId {
    /// Wrap a raw host identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transfer-{}", self.0)
    }
}

/// Identifier of the window (display surface) that owns a transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(u64);

impl WindowId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Identifier of a listener registration attached to a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(u64);

impl RegistrationId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "registration-{}", self.0)
    }
}

/// Lifecycle state of a transfer.
///
/// `Active` is the only non-terminal state; a transfer leaves it exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferState {
    /// Bytes are still flowing.
    Active,
    /// All bytes were received and the file is in place.
    Completed,
    /// The user or host cancelled the transfer.
    Cancelled,
    /// The transfer failed mid-flight.
    Interrupted,
}

impl TransferState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Interrupted => "interrupted",
        }
    }
}

impl fmt::Display for TransferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal outcome reported by the host when a transfer finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferOutcome {
    Completed,
    Cancelled,
    Interrupted,
}

impl From<TransferOutcome> for TransferState {
    fn from(outcome: TransferOutcome) -> Self {
        match outcome {
            TransferOutcome::Completed => Self::Completed,
            TransferOutcome::Cancelled => Self::Cancelled,
            TransferOutcome::Interrupted => Self::Interrupted,
        }
    }
}

/// Byte progress for a single transfer or for a whole batch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Fraction complete in `[0.0, 1.0]`; `0.0` when the total is unknown.
    pub percent: f64,
    /// Bytes received so far.
    pub transferred_bytes: u64,
    /// Expected bytes, `0` when unknown.
    pub total_bytes: u64,
}

impl Progress {
    /// Build progress stats from a byte count and a total.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(transferred_bytes: u64, total_bytes: u64) -> Self {
        let percent = if total_bytes > 0 {
            (transferred_bytes as f64 / total_bytes as f64).min(1.0)
        } else {
            0.0
        };

        Self {
            percent,
            transferred_bytes,
            total_bytes,
        }
    }
}

/// Summary handed to `on_completed` once a transfer lands on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedDownload {
    /// Final file name (base name of `path`).
    pub filename: String,
    /// Resolved destination path.
    pub path: PathBuf,
    /// Bytes received.
    pub file_size: u64,
    /// Content type reported by the source.
    pub mime_type: String,
    /// Source URL.
    pub url: String,
}

/// Bookkeeping record for one tracked transfer.
#[derive(Clone, Debug)]
pub struct Transfer {
    pub id: TransferId,
    pub window: WindowId,
    pub url: String,
    /// Filename reported by the source.
    pub filename: String,
    pub mime_type: String,
    /// Declared size, fixed at registration. `0` means unknown.
    pub total_bytes: u64,
    pub received_bytes: u64,
    /// Resolved destination; `None` when the save dialog decides.
    pub destination: Option<PathBuf>,
    pub state: TransferState,
    pub started_at: DateTime<Utc>,
}

impl Transfer {
    /// Create an active record with nothing received yet.
    pub fn new(
        id: TransferId,
        window: WindowId,
        url: impl Into<String>,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        total_bytes: u64,
    ) -> Self {
        Self {
            id,
            window,
            url: url.into(),
            filename: filename.into(),
            mime_type: mime_type.into(),
            total_bytes,
            received_bytes: 0,
            destination: None,
            state: TransferState::Active,
            started_at: Utc::now(),
        }
    }

    /// Record a new received-byte count.
    ///
    /// Received bytes never decrease and never exceed a known total.
    /// Returns the value actually stored.
    pub fn apply_progress(&mut self, received_bytes: u64) -> u64 {
        let mut next = received_bytes.max(self.received_bytes);
        if self.total_bytes > 0 {
            next = next.min(self.total_bytes);
        }
        self.received_bytes = next;
        next
    }

    /// Milliseconds since the transfer was registered.
    #[must_use]
    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds()
    }

    /// Progress stats for this transfer alone.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::new(self.received_bytes, self.total_bytes)
    }
}

//! Host application ports.
//!
//! These traits cover what the tracker needs from the application that
//! actually moves bytes: a handle per transfer, a serialized stream of
//! transfer notifications, and session-level services.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::transfer::{SaveDialogOptions, TransferId, TransferOutcome, TransferResult, WindowId};

/// Handle to one host-side transfer.
///
/// Getters reflect the host's current view; setters are only meaningful
/// before the first byte is written.
pub trait TransferItem: Send + Sync {
    fn id(&self) -> TransferId;

    fn url(&self) -> String;

    /// Filename suggested by the source (e.g. from `Content-Disposition`).
    fn filename(&self) -> String;

    /// Content type reported by the source.
    fn mime_type(&self) -> String;

    /// Declared size, `0` when the source did not report one.
    fn total_bytes(&self) -> u64;

    fn received_bytes(&self) -> u64;

    /// Destination the host is writing to, if one is set.
    fn save_path(&self) -> Option<PathBuf>;

    /// Set the destination directly.
    fn set_save_path(&self, path: &Path);

    /// Ask the host to show a save dialog with these options instead.
    fn set_save_dialog_options(&self, options: &SaveDialogOptions);
}

/// A notification from the host about a transfer.
///
/// The host delivers these one at a time, in order, for every transfer.
#[derive(Clone)]
pub enum HostEvent {
    /// A new transfer was created.
    Created {
        item: Arc<dyn TransferItem>,
    },
    /// More bytes arrived.
    Updated {
        id: TransferId,
        received_bytes: u64,
    },
    /// The transfer reached a terminal state.
    Done {
        id: TransferId,
        outcome: TransferOutcome,
    },
}

impl HostEvent {
    /// Get the transfer ID this event refers to.
    #[must_use]
    pub fn id(&self) -> TransferId {
        match self {
            Self::Created { item } => item.id(),
            Self::Updated { id, .. } | Self::Done { id, .. } => *id,
        }
    }
}

impl fmt::Debug for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { item } => f
                .debug_struct("Created")
                .field("id", &item.id())
                .field("url", &item.url())
                .finish(),
            Self::Updated { id, received_bytes } => f
                .debug_struct("Updated")
                .field("id", id)
                .field("received_bytes", received_bytes)
                .finish(),
            Self::Done { id, outcome } => f
                .debug_struct("Done")
                .field("id", id)
                .field("outcome", outcome)
                .finish(),
        }
    }
}

/// Serialized stream of host notifications.
///
/// Returns `None` once the host will send no more events. `next_event`
/// must be cancel-safe: the session listener polls it inside `select!`.
#[async_trait]
pub trait TransferSource: Send {
    async fn next_event(&mut self) -> Option<HostEvent>;
}

#[async_trait]
impl TransferSource for mpsc::UnboundedReceiver<HostEvent> {
    async fn next_event(&mut self) -> Option<HostEvent> {
        self.recv().await
    }
}

#[async_trait]
impl TransferSource for mpsc::Receiver<HostEvent> {
    async fn next_event(&mut self) -> Option<HostEvent> {
        self.recv().await
    }
}

/// Session-level host services.
pub trait HostSessionPort: Send + Sync {
    /// Directory used when a configuration names none.
    fn downloads_dir(&self) -> PathBuf;

    /// Resolve the window that owns a transfer.
    fn window_for(&self, item: &dyn TransferItem) -> Option<WindowId>;

    /// Start downloading `url` in the session of `window`.
    ///
    /// The resulting transfer arrives later as `HostEvent::Created`.
    fn start_download(&self, window: WindowId, url: &str) -> TransferResult<()>;
}

//! Session-level transfer tracking for dltrack.
//!
//! - `registry` - Active set, batch counters and the per-transfer state machine
//! - `listener` - Event loop binding host notifications to the registry
//! - `download` - One-shot adapter resolving a single transfer's outcome
//!
//! # Example
//!
//! ```ignore
//! let (listener, handle) = SessionListener::with_local_fs(host, display);
//! tokio::spawn(listener.run(host_events));
//!
//! let item = handle
//!     .download(window, "https://example.com/file.zip", TransferConfig::new())
//!     .await?;
//! ```

pub mod download;
pub mod listener;
pub mod registry;

pub use download::download;
pub use listener::{ResultCallback, SessionHandle, SessionListener, TransferOutcomeResult};
pub use registry::{AggregateCounters, ProgressReport, Registry, TerminalReport};

// Re-export core types for convenience
pub use dltrack_core::{
    CompletedDownload, DisplayEmitterPort, DisplayIntent, HostEvent, HostSessionPort, PathProbe,
    Progress, TransferConfig, TransferError, TransferId, TransferItem, TransferOutcome,
    TransferResult, TransferSource, WindowId,
};

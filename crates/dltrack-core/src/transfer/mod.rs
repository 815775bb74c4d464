//! Transfer domain types, errors and configuration.
//!
//! # Structure
//!
//! - `types` - Identifiers, states, progress stats and the transfer record
//! - `errors` - Error taxonomy shared by the registry and the one-shot adapter
//! - `config` - Per-invocation configuration and caller callbacks

pub mod config;
pub mod errors;
pub mod types;

pub use config::{
    CompletedCallback, DEFAULT_ERROR_MESSAGE, DEFAULT_ERROR_TITLE, ItemCallback, ProgressCallback,
    SaveDialogOptions, TransferConfig,
};
pub use errors::{TransferError, TransferResult};
pub use types::{
    CompletedDownload, Progress, RegistrationId, Transfer, TransferId, TransferOutcome,
    TransferState, WindowId,
};

//! Core domain types and port definitions for dltrack.
//!
//! This crate holds everything the transfer tracker needs that does not
//! depend on a running event loop: transfer records, the error taxonomy,
//! per-invocation configuration, display intents, the traits the host
//! application implements, and the filename resolution policy.

pub mod filename;
pub mod ports;
pub mod transfer;

pub use filename::{derive_filename, extension_for_mime, has_extension, unique_path};
pub use ports::{
    DisplayEmitterPort, DisplayIntent, FsPathProbe, HostEvent, HostSessionPort,
    NoopDisplayEmitter, PathProbe, TransferItem, TransferSource,
};
pub use transfer::{
    CompletedDownload, DEFAULT_ERROR_MESSAGE, DEFAULT_ERROR_TITLE, Progress, RegistrationId,
    SaveDialogOptions, Transfer, TransferConfig, TransferError, TransferId, TransferOutcome,
    TransferResult, TransferState, WindowId,
};

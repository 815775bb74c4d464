//! Port definitions (trait abstractions) for the host application.
//!
//! The tracker never calls platform APIs directly. It reads transfers through
//! `TransferItem`, receives host notifications through `TransferSource`,
//! asks `HostSessionPort` for windows and new downloads, probes the
//! filesystem through `PathProbe`, and emits `DisplayIntent`s through
//! `DisplayEmitterPort`.

pub mod display;
pub mod host;
pub mod path_probe;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use display::{DisplayEmitterPort, DisplayIntent, NoopDisplayEmitter};
pub use host::{HostEvent, HostSessionPort, TransferItem, TransferSource};
pub use path_probe::{FsPathProbe, PathProbe};

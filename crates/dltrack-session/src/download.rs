//! One-shot download adapter.
//!
//! Registers a single-use listener, asks the host to start one transfer and
//! waits for that transfer's outcome.

use std::sync::Arc;

use tokio::sync::oneshot;

use dltrack_core::{TransferConfig, TransferError, TransferItem, TransferResult, WindowId};

use crate::listener::SessionHandle;

/// Download `url` in the session of `window`.
///
/// Resolves with the transfer handle once it completes. Cancellation
/// resolves to `TransferError::Cancelled`; interruption to
/// `TransferError::Interrupted` with the formatted template. Configuration
/// errors are returned before the host is asked to start anything.
///
/// The session listener must be running for this future to resolve.
pub async fn download(
    handle: &SessionHandle,
    window: WindowId,
    url: &str,
    config: TransferConfig,
) -> TransferResult<Arc<dyn TransferItem>> {
    config.validate()?;

    let (tx, rx) = oneshot::channel();
    let registration = handle.register_once(config, url, tx)?;

    if let Err(err) = handle.host().start_download(window, url) {
        tracing::warn!(
            target: "dltrack.session",
            %window,
            url,
            error = %err,
            "Host refused to start download"
        );
        // The listener may already be gone; the start error is what matters.
        let _ = handle.unregister(registration);
        return Err(err);
    }

    tracing::debug!(target: "dltrack.session", %window, url, "Download started");
    rx.await.unwrap_or(Err(TransferError::SessionClosed))
}

//! # Async Result Bridge
//!
//! Turns one asynchronous API call into a single notification that the UI
//! thread picks up on its own schedule.
//!
//! ```text
//!   UI thread                       tokio worker
//!   ─────────                       ────────────
//!   Pending::spawn(op) ──────────▶  op.await
//!        │                              │
//!   poll() → None   (not yet)           │
//!   poll() → None                       ▼
//!        │                         oneshot::send(outcome)
//!   poll() → Some(outcome)  ◀───────────┘
//!   poll() → None   (forever after)
//! ```
//!
//! The screen that spawned a `Pending` owns it. Dropping the screen drops the
//! `Pending`, which aborts the task and closes the receiver, so a result
//! that arrives after navigation away is discarded on the worker and never
//! reaches the UI.

use std::future::Future;

use log::{debug, warn};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::AbortHandle;

use crate::api::{ApiError, ApiResult};

enum State<T> {
    Waiting(oneshot::Receiver<ApiResult<T>>),
    Delivered,
    Cancelled,
}

/// One in-flight operation whose outcome is delivered at most once.
pub struct Pending<T> {
    label: &'static str,
    state: State<T>,
    abort: AbortHandle,
}

impl<T: Send + 'static> Pending<T> {
    /// Starts `operation` on the tokio runtime.
    ///
    /// Must be called from within a runtime context.
    pub fn spawn<F>(label: &'static str, operation: F) -> Self
    where
        F: Future<Output = ApiResult<T>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let outcome = operation.await;
            if tx.send(outcome).is_err() {
                debug!("{label}: owner gone before completion, result dropped");
            }
        });
        debug!("{label}: spawned");

        Self {
            label,
            state: State::Waiting(rx),
            abort: handle.abort_handle(),
        }
    }
}

impl<T> Pending<T> {
    /// Takes the outcome if the operation has settled.
    ///
    /// Returns `Some` exactly once over the lifetime of the bridge (unless it
    /// was cancelled first, in which case never). Call from the UI thread.
    pub fn poll(&mut self) -> Option<ApiResult<T>> {
        let State::Waiting(rx) = &mut self.state else {
            return None;
        };

        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => {
                warn!("{}: task ended without a result", self.label);
                Err(ApiError::Interrupted)
            }
        };

        debug!(
            "{}: delivering {}",
            self.label,
            if outcome.is_ok() { "success" } else { "failure" }
        );
        self.state = State::Delivered;
        Some(outcome)
    }

    /// Waits for the outcome instead of polling for it.
    ///
    /// Same single-delivery rule as [`poll`](Self::poll): returns `None` if
    /// the outcome was already taken or the bridge was cancelled.
    pub async fn settle(&mut self) -> Option<ApiResult<T>> {
        let State::Waiting(rx) = &mut self.state else {
            return None;
        };
        let outcome = rx.await.unwrap_or(Err(ApiError::Interrupted));
        self.state = State::Delivered;
        Some(outcome)
    }

    /// Stops the operation; no outcome will be delivered.
    pub fn cancel(&mut self) {
        if matches!(self.state, State::Waiting(_)) {
            debug!("{}: cancelled", self.label);
            self.abort.abort();
            self.state = State::Cancelled;
        }
    }

    /// True until the outcome has been taken or the bridge cancelled.
    pub fn is_waiting(&self) -> bool {
        matches!(self.state, State::Waiting(_))
    }
}

impl<T> Drop for Pending<T> {
    fn drop(&mut self) {
        if matches!(self.state, State::Waiting(_)) {
            debug!("{}: owner dropped, aborting", self.label);
        }
        self.abort.abort();
    }
}

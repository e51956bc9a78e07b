// Per-call execution context: carries a deadline and an explicit cancellation
// signal for a single store operation.
//
// Responsibilities
// - Give every store call a bound: the operation either completes before the
//   context fires or surfaces a cancellation failure.
//
// Boundaries
// - Knows nothing about stores or transports. Callers build one per request,
//   stores only await `done`.

use std::future::pending;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::modules::people::core::ports::StoreError;

#[derive(Debug, Clone)]
pub struct OpContext {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Cancels the context it was created with, including every clone.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

impl OpContext {
    /// A context that never expires and cannot be cancelled.
    pub fn background() -> Self {
        Self {
            deadline: None,
            cancel: None,
        }
    }

    /// A context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
            cancel: None,
        }
    }

    /// A context cancelled explicitly through the returned handle.
    pub fn with_cancel() -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        (
            Self {
                deadline: None,
                cancel: Some(rx),
            },
            CancelHandle { tx },
        )
    }

    /// Resolves once the context fires, with the failure the operation should
    /// surface. Pends forever on a background context.
    pub async fn done(&self) -> StoreError {
        let deadline = async {
            match self.deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => pending().await,
            }
        };
        let cancelled = async {
            match self.cancel.clone() {
                Some(mut rx) => {
                    while !*rx.borrow_and_update() {
                        if rx.changed().await.is_err() {
                            // Handle dropped without firing: cancellation can
                            // no longer happen.
                            pending::<()>().await;
                        }
                    }
                }
                None => pending().await,
            }
        };

        tokio::select! {
            _ = deadline => StoreError::DeadlineExceeded,
            _ = cancelled => StoreError::Cancelled,
        }
    }
}

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::warn;

use crate::error::{GestureError, GestureResult};

/// UI-thread inbox for results produced on worker threads.
///
/// Workers hold [`UiTaskSender`]s; the UI thread drains the queue once per
/// event-loop turn. Each [`super::ChartView`] owns one, so dropping the view
/// closes every outstanding sender.
pub struct UiTaskQueue<M> {
    sender: Sender<M>,
    receiver: Receiver<M>,
}

impl<M> UiTaskQueue<M> {
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    #[must_use]
    pub fn sender(&self) -> UiTaskSender<M> {
        UiTaskSender {
            inner: self.sender.clone(),
        }
    }

    /// Drains every message posted so far and returns how many were handled.
    pub fn pump(&self, mut handler: impl FnMut(M)) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.receiver.try_recv() {
            handler(message);
            handled += 1;
        }
        handled
    }

    /// Takes every message posted so far without handling it.
    #[must_use]
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

impl<M> Default for UiTaskQueue<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for UiTaskQueue<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiTaskQueue").finish_non_exhaustive()
    }
}

/// Cloneable, `Send` handle for posting onto a [`UiTaskQueue`].
pub struct UiTaskSender<M> {
    inner: Sender<M>,
}

impl<M> UiTaskSender<M> {
    /// Fails with [`GestureError::ViewDisposed`] once the owning queue (and
    /// so the view) is gone.
    pub fn post(&self, message: M) -> GestureResult<()> {
        self.inner
            .send(message)
            .map_err(|_| GestureError::ViewDisposed)
    }

    /// Posts and drops the message with a warning if the view is gone.
    pub fn post_or_drop(&self, message: M) -> bool {
        match self.post(message) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "dropping ui task");
                false
            }
        }
    }
}

impl<M> Clone for UiTaskSender<M> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<M> fmt::Debug for UiTaskSender<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiTaskSender").finish_non_exhaustive()
    }
}

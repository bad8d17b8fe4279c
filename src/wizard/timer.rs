//! Simulated generation delay, modeled as a cancellable timer task that
//! reports back over the session's event channel.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

/// Fixed delay of the simulated "create the lesson" operation
pub const GENERATION_DELAY: Duration = Duration::from_millis(5000);

/// Handle for one in-flight generation. The sequence number ties a timer
/// completion back to the generation that started it, so completions from a
/// superseded session are recognizable as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationToken {
    seq: u64,
    delay: Duration,
}

impl GenerationToken {
    pub(crate) fn new(seq: u64) -> Self {
        Self {
            seq,
            delay: GENERATION_DELAY,
        }
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Drives the delay for the active generation. At most one timer runs at a
/// time: starting a new one aborts the previous task, and dropping the timer
/// aborts the in-flight task so discarded wizard state is never mutated by a
/// late completion.
#[derive(Debug, Default)]
pub struct GenerationTimer {
    handle: Option<JoinHandle<()>>,
}

impl GenerationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep for the token's delay, then send the token back on `tx`.
    /// The send is allowed to fail: the receiver may already be gone.
    pub fn start(&mut self, token: GenerationToken, tx: UnboundedSender<GenerationToken>) {
        self.cancel();
        debug!(seq = token.seq(), delay_ms = token.delay().as_millis() as u64, "generation timer started");
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(token.delay()).await;
            let _ = tx.send(token);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("generation timer cancelled");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for GenerationTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

//! Best-effort clipboard writes with a self-reverting "copied" indicator.
//!
//! A copy runs on the tokio runtime so the UI never waits on the platform
//! clipboard. Failures are logged and otherwise dropped; the only visible
//! outcome of a copy is the indicator switching to "Copied!" for a while.
//!
//! Each successful copy schedules its own revert. Reverts are never cancelled,
//! so when two copies overlap the first deadline clears the indicator even
//! though the second copy happened later.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::oneshot;

/// How long the "Copied!" label stays up by default.
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Something that can receive text, normally the system clipboard.
#[async_trait]
pub trait ClipboardBackend: Send + Sync {
    async fn write_text(&self, text: String) -> Result<()>;
}

/// Platform clipboard via `arboard`.
///
/// The handle is opened on first use and then kept for the session. On X11
/// and Wayland the copied text is served by that handle, so dropping it after
/// each write would lose the selection.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Arc<Mutex<Option<arboard::Clipboard>>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClipboardBackend for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<()> {
        let handle = Arc::clone(&self.handle);
        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut guard = handle
                .lock()
                .map_err(|_| anyhow::anyhow!("clipboard handle lock poisoned"))?;
            if guard.is_none() {
                *guard = Some(arboard::Clipboard::new().context("failed to open system clipboard")?);
            }
            if let Some(clipboard) = guard.as_mut() {
                clipboard
                    .set_text(text)
                    .context("failed to write text to clipboard")?;
            }
            Ok(())
        })
        .await
        .context("clipboard task did not complete")?
    }
}

/// Fire-and-forget copy. Never surfaces an error to the caller.
#[derive(Clone)]
pub struct ClipboardBridge {
    backend: Arc<dyn ClipboardBackend>,
}

impl ClipboardBridge {
    pub fn new(backend: Arc<dyn ClipboardBackend>) -> Self {
        Self { backend }
    }

    pub fn system() -> Self {
        Self::new(Arc::new(SystemClipboard::new()))
    }

    /// Returns `true` when the text reached the clipboard.
    pub async fn copy(&self, text: String) -> bool {
        let len = text.len();
        match self.backend.write_text(text).await {
            Ok(()) => {
                log_info!("Copied prompt to clipboard ({} chars)", len);
                true
            }
            Err(e) => {
                log_error!("Failed to copy text: {:#}", e);
                false
            }
        }
    }
}

/// The transient "copied" flag shown on the copy button.
#[derive(Debug, Clone)]
pub struct CopyIndicator {
    copied: bool,
    revert_at: Vec<Instant>,
    feedback: Duration,
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_FEEDBACK)
    }
}

impl CopyIndicator {
    pub fn new(feedback: Duration) -> Self {
        Self {
            copied: false,
            revert_at: Vec::new(),
            feedback,
        }
    }

    pub fn feedback(&self) -> Duration {
        self.feedback
    }

    /// Set the flag and schedule an independent revert.
    pub fn mark_copied(&mut self, now: Instant) {
        self.copied = true;
        self.revert_at.push(now + self.feedback);
    }

    /// Fire every revert whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        let before = self.revert_at.len();
        self.revert_at.retain(|deadline| *deadline > now);
        if self.revert_at.len() < before {
            self.copied = false;
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn button_label(&self) -> &'static str {
        if self.copied {
            "Copied!"
        } else {
            "Copy"
        }
    }

    /// Time until the next scheduled revert, if any.
    pub fn next_revert_in(&self, now: Instant) -> Option<Duration> {
        self.revert_at
            .iter()
            .min()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

/// UI-side driver: spawns copies and folds their results into the indicator.
pub struct CopyController {
    bridge: ClipboardBridge,
    runtime: Handle,
    in_flight: Vec<oneshot::Receiver<bool>>,
    indicator: CopyIndicator,
}

impl CopyController {
    pub fn new(bridge: ClipboardBridge, runtime: Handle, feedback: Duration) -> Self {
        Self {
            bridge,
            runtime,
            in_flight: Vec::new(),
            indicator: CopyIndicator::new(feedback),
        }
    }

    /// Start a copy without waiting for it.
    pub fn start_copy(&mut self, text: String) {
        let (tx, rx) = oneshot::channel();
        let bridge = self.bridge.clone();
        self.runtime.spawn(async move {
            let copied = bridge.copy(text).await;
            // Receiver is gone only if the controller was dropped.
            let _ = tx.send(copied);
        });
        self.in_flight.push(rx);
    }

    /// Collect finished copies and expire old acknowledgements.
    pub fn poll(&mut self, now: Instant) {
        let mut finished = Vec::new();
        self.in_flight.retain_mut(|rx| match rx.try_recv() {
            Ok(copied) => {
                finished.push(copied);
                false
            }
            Err(oneshot::error::TryRecvError::Empty) => true,
            Err(oneshot::error::TryRecvError::Closed) => false,
        });

        self.indicator.tick(now);
        for copied in finished {
            if copied {
                self.indicator.mark_copied(now);
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn indicator(&self) -> &CopyIndicator {
        &self.indicator
    }

    /// How soon the UI should repaint to keep the indicator accurate.
    pub fn repaint_after(&self, now: Instant) -> Option<Duration> {
        if self.is_pending() {
            return Some(Duration::from_millis(50));
        }
        self.indicator.next_revert_in(now)
    }
}

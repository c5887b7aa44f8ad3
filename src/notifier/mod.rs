//! Single-slot status message with a fixed auto-hide timer.
//!
//! A new message always replaces the current one and restarts the timer.
//! Hiding only flips visibility; the text stays until the next `show`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::models::{Notice, NoticeKind};

/// How long a message stays visible.
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Default)]
struct Slot {
    notice: Option<Notice>,
    /// Bumped on every `show`; a hide timer only acts on its own generation.
    generation: u64,
    hide_task: Option<JoinHandle<()>>,
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    duration: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            duration: NOTICE_DURATION,
        }
    }

    /// Show `text`, replacing whatever is displayed.
    ///
    /// Must be called from within a tokio runtime; the hide timer is a
    /// spawned task.
    pub fn show(&self, text: impl Into<String>, kind: NoticeKind) {
        let text = text.into();
        tracing::debug!("Showing {} notice: {}", kind.css_class(), text);

        let mut slot = lock(&self.slot);
        if let Some(task) = slot.hide_task.take() {
            task.abort();
        }
        slot.generation += 1;
        slot.notice = Some(Notice {
            text,
            kind,
            visible: true,
        });

        let generation = slot.generation;
        let shared = Arc::clone(&self.slot);
        let duration = self.duration;
        slot.hide_task = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut slot = lock(&shared);
            if slot.generation != generation {
                return;
            }
            if let Some(notice) = slot.notice.as_mut() {
                notice.visible = false;
            }
            slot.hide_task = None;
        }));
    }

    /// Snapshot of the current message, `None` before the first `show`.
    pub fn current(&self) -> Option<Notice> {
        lock(&self.slot).notice.clone()
    }

    pub fn is_visible(&self) -> bool {
        lock(&self.slot)
            .notice
            .as_ref()
            .is_some_and(|notice| notice.visible)
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        if let Some(task) = lock(&self.slot).hide_task.take() {
            task.abort();
        }
    }
}

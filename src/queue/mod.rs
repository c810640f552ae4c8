// ReelForge Video Queue
// Copyright (c) 2026 Xing_The_Creator | ReelForge

pub mod item;

pub use item::{VideoItem, VideoStatus};

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

/// Per-status item counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStats {
    pub total: usize,
    pub ready: usize,
    pub processing: usize,
    pub pending: usize,
}

/// In-memory, insertion-ordered collection of generated videos.
///
/// Contents live only as long as the queue value; nothing is persisted.
/// Every operation holds the lock for its whole critical section, so readers
/// never observe a half-applied append or removal.
#[derive(Debug, Default)]
pub struct VideoQueue {
    items: Mutex<Vec<VideoItem>>,
}

impl VideoQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `item` at the end. Ids are expected to be unique already.
    pub fn append(&self, item: VideoItem) {
        let id = item.id;
        let len = {
            let mut items = self.items.lock();
            items.push(item);
            items.len()
        };
        info!("[QUEUE] Added video {} ({} queued)", id, len);
    }

    /// Snapshot of every item, oldest first.
    pub fn list(&self) -> Vec<VideoItem> {
        self.items.lock().clone()
    }

    pub fn get(&self, id: &Uuid) -> Option<VideoItem> {
        self.items.lock().iter().find(|v| &v.id == id).cloned()
    }

    /// Removes the item with `id`. Returns `false` when nothing matched.
    pub fn remove_by_id(&self, id: &Uuid) -> bool {
        let removed = {
            let mut items = self.items.lock();
            match items.iter().position(|v| &v.id == id) {
                Some(index) => {
                    items.remove(index);
                    true
                }
                None => false,
            }
        };

        if removed {
            info!("[QUEUE] Removed video {}", id);
        } else {
            debug!("[QUEUE] Remove requested for unknown video {}", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    pub fn stats(&self) -> QueueStats {
        let items = self.items.lock();
        items.iter().fold(
            QueueStats {
                total: items.len(),
                ..QueueStats::default()
            },
            |mut stats, item| {
                match item.status {
                    VideoStatus::Ready => stats.ready += 1,
                    VideoStatus::Processing => stats.processing += 1,
                    VideoStatus::Pending => stats.pending += 1,
                }
                stats
            },
        )
    }
}

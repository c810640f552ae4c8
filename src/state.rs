// ReelForge Shared State
// Copyright (c) 2026 Xing_The_Creator | ReelForge

use std::sync::Arc;

use crate::content_engine::ContentEngine;
use crate::queue::VideoQueue;

/// Everything the HTTP handlers need. The queue is injected so callers own its lifetime.
#[derive(Clone)]
pub struct AppState {
    pub engine: ContentEngine,
    pub queue: Arc<VideoQueue>,
}

impl AppState {
    pub fn new(engine: ContentEngine, queue: Arc<VideoQueue>) -> Self {
        Self { engine, queue }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ContentEngine::default(), Arc::new(VideoQueue::new()))
    }
}

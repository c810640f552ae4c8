// ReelForge Video Item
// Copyright (c) 2026 Xing_The_Creator | ReelForge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content_engine::{GeneratedContent, GenerationRequest, VideoDuration, VideoTone};

/// Lifecycle of a queued video.
///
/// Items are currently created `Ready` because generation is synchronous.
/// `Pending` and `Processing` belong to a render pipeline that does not exist yet;
/// `next` and `can_transition_to` describe the allowed order for when it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Pending,
    Processing,
    Ready,
}

impl VideoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStatus::Pending => "pending",
            VideoStatus::Processing => "processing",
            VideoStatus::Ready => "ready",
        }
    }

    /// The state that follows this one, if any.
    pub fn next(&self) -> Option<VideoStatus> {
        match self {
            VideoStatus::Pending => Some(VideoStatus::Processing),
            VideoStatus::Processing => Some(VideoStatus::Ready),
            VideoStatus::Ready => None,
        }
    }

    pub fn can_transition_to(&self, target: VideoStatus) -> bool {
        self.next() == Some(target)
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

/// One generation result held by the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: Uuid,
    pub niche: String,
    pub topic: String,
    pub duration: VideoDuration,
    pub tone: VideoTone,
    pub status: VideoStatus,
    pub created_at: DateTime<Utc>,
    pub script: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub thumbnail_ideas: Vec<String>,
}

impl VideoItem {
    /// Stamps a fresh id and creation time onto a completed generation.
    pub fn new(request: GenerationRequest, content: GeneratedContent) -> Self {
        let GenerationRequest {
            niche,
            topic,
            duration,
            tone,
        } = request;
        let GeneratedContent {
            script,
            title,
            description,
            tags,
            thumbnail_ideas,
        } = content;

        Self {
            id: Uuid::new_v4(),
            niche,
            topic,
            duration,
            tone,
            status: VideoStatus::Ready,
            created_at: Utc::now(),
            script,
            title,
            description,
            tags,
            thumbnail_ideas,
        }
    }
}

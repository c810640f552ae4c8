// ReelForge Content Engine
// Copyright (c) 2026 Xing_The_Creator | ReelForge
//
// Template-driven synthesis of video marketing copy: script, title,
// description, tags and thumbnail briefs. Structure is fixed; only hook and
// title selection is randomized through a pluggable `ChoiceSource`.

pub mod choice;
pub mod script;
pub mod seo;
pub mod thumbnail;

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use choice::{ChoiceSource, ThreadRngChoice};

/// Target runtime bucket for a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VideoDuration {
    #[serde(rename = "3-5")]
    Short,
    #[default]
    #[serde(rename = "8-10")]
    Standard,
    #[serde(rename = "12-15")]
    Long,
}

impl VideoDuration {
    pub const ALL: [VideoDuration; 3] = [Self::Short, Self::Standard, Self::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "3-5",
            Self::Standard => "8-10",
            Self::Long => "12-15",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Short => "3-5 minutes (Short)",
            Self::Standard => "8-10 minutes (Standard)",
            Self::Long => "12-15 minutes (Long)",
        }
    }
}

/// Narration style requested by the user. Parsed case-insensitively everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoTone {
    #[default]
    Informative,
    Casual,
    Professional,
    Dramatic,
    Humorous,
}

impl VideoTone {
    pub const ALL: [VideoTone; 5] = [
        Self::Informative,
        Self::Casual,
        Self::Professional,
        Self::Dramatic,
        Self::Humorous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Informative => "informative",
            Self::Casual => "casual",
            Self::Professional => "professional",
            Self::Dramatic => "dramatic",
            Self::Humorous => "humorous",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Informative => "Informative",
            Self::Casual => "Casual & Friendly",
            Self::Professional => "Professional",
            Self::Dramatic => "Dramatic",
            Self::Humorous => "Humorous",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl FromStr for VideoDuration {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseOptionError {
                kind: "duration",
                value: s.to_string(),
                expected: Self::ALL.map(|d| d.as_str()).join(", "),
            })
    }
}

impl FromStr for VideoTone {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| ParseOptionError {
                kind: "tone",
                value: s.to_string(),
                expected: Self::ALL.map(|t| t.as_str()).join(", "),
            })
    }
}

impl<'de> Deserialize<'de> for VideoTone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl fmt::Display for VideoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VideoTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub niche: String,
    pub topic: String,
    #[serde(default)]
    pub duration: VideoDuration,
    #[serde(default)]
    pub tone: VideoTone,
}

impl GenerationRequest {
    pub fn new(niche: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            niche: niche.into(),
            topic: topic.into(),
            duration: VideoDuration::default(),
            tone: VideoTone::default(),
        }
    }

    pub fn with_duration(mut self, duration: VideoDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_tone(mut self, tone: VideoTone) -> Self {
        self.tone = tone;
        self
    }
}

/// The five artifacts produced for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub script: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub thumbnail_ideas: Vec<String>,
}

/// Entry point for artifact synthesis. Cheap to clone; the choice source is shared.
#[derive(Clone)]
pub struct ContentEngine {
    chooser: Arc<dyn ChoiceSource>,
}

impl Default for ContentEngine {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngChoice))
    }
}

impl ContentEngine {
    pub fn new(chooser: Arc<dyn ChoiceSource>) -> Self {
        Self { chooser }
    }

    pub fn generate_script(
        &self,
        niche: &str,
        topic: &str,
        duration: VideoDuration,
        tone: VideoTone,
    ) -> String {
        script::generate_script(self.chooser.as_ref(), niche, topic, duration, tone)
    }

    pub fn generate_title(&self, topic: &str, niche: &str) -> String {
        seo::generate_title(self.chooser.as_ref(), topic, niche)
    }

    pub fn generate_description(&self, topic: &str, niche: &str) -> String {
        seo::generate_description(topic, niche)
    }

    pub fn generate_tags(&self, niche: &str, topic: &str) -> Vec<String> {
        seo::generate_tags(niche, topic)
    }

    pub fn generate_thumbnail_ideas(&self, topic: &str) -> Vec<String> {
        thumbnail::generate_thumbnail_ideas(topic)
    }

    /// Runs every artifact operation for `request`.
    pub fn generate(&self, request: &GenerationRequest) -> GeneratedContent {
        let GenerationRequest {
            niche,
            topic,
            duration,
            tone,
        } = request;

        debug!(
            "[ENGINE] Generating content: niche={:?} topic={:?} duration={} tone={}",
            niche, topic, duration, tone
        );

        GeneratedContent {
            script: self.generate_script(niche, topic, *duration, *tone),
            title: self.generate_title(topic, niche),
            description: self.generate_description(topic, niche),
            tags: self.generate_tags(niche, topic),
            thumbnail_ideas: self.generate_thumbnail_ideas(topic),
        }
    }
}

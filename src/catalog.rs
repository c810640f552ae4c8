// ReelForge Option Catalog
// Copyright (c) 2026 Xing_The_Creator | ReelForge

use serde::Serialize;

use crate::content_engine::{VideoDuration, VideoTone};

/// Channel niches offered in the generator form.
pub const NICHES: [&str; 10] = [
    "Tech Reviews & Tips",
    "AI & Technology News",
    "Finance & Investing",
    "Self Improvement",
    "Mystery & True Crime",
    "History Facts",
    "Science Explained",
    "Productivity Hacks",
    "Business & Entrepreneurship",
    "Crypto & NFTs",
];

#[derive(Debug, Clone, Serialize)]
pub struct OptionEntry {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionCatalog {
    pub niches: Vec<&'static str>,
    pub durations: Vec<OptionEntry>,
    pub tones: Vec<OptionEntry>,
}

pub fn option_catalog() -> OptionCatalog {
    OptionCatalog {
        niches: NICHES.to_vec(),
        durations: VideoDuration::ALL
            .iter()
            .map(|d| OptionEntry {
                value: d.as_str(),
                label: d.label(),
            })
            .collect(),
        tones: VideoTone::ALL
            .iter()
            .map(|t| OptionEntry {
                value: t.as_str(),
                label: t.label(),
            })
            .collect(),
    }
}

// ReelForge SEO Metadata — titles, descriptions, tags
// Copyright (c) 2026 Xing_The_Creator | ReelForge

use super::choice::{pick, ChoiceSource};

/// Upper bound on tags attached to a single upload.
pub const MAX_TAGS: usize = 15;

/// Keywords appended after the niche and topic tags.
pub const COMMON_TAGS: [&str; 6] = [
    "educational",
    "tutorial",
    "2024",
    "howto",
    "guide",
    "explained",
];

/// Offsets and labels for the chapter skeleton in every description.
pub const TIMESTAMPS: [(&str, &str); 5] = [
    ("0:00", "Introduction"),
    ("0:30", "Key Concepts"),
    ("2:15", "Deep Dive Analysis"),
    ("5:45", "Practical Applications"),
    ("8:30", "Final Thoughts"),
];

/// Removes every whitespace character (used for hashtags and tags).
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// All title expansions for a topic/niche pair, in template order.
pub fn title_candidates(topic: &str, niche: &str) -> [String; 5] {
    [
        format!("{} - Everything You Need to Know in 2024", topic),
        format!("The Truth About {} (Nobody Talks About This)", topic),
        format!("{}: Complete Guide for Beginners", topic),
        format!("Why {} is Changing {} Forever", topic, niche),
        format!("{} Explained - The Ultimate Breakdown", topic),
    ]
}

pub fn generate_title(source: &dyn ChoiceSource, topic: &str, niche: &str) -> String {
    let candidates = title_candidates(topic, niche);
    pick(source, &candidates).clone()
}

/// Fixed-structure upload description. No randomness.
pub fn generate_description(topic: &str, niche: &str) -> String {
    let niche_lower = niche.to_lowercase();
    let timestamps = TIMESTAMPS
        .iter()
        .map(|(at, label)| format!("{} - {}", at, label))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "In this video, we dive deep into {topic} and uncover everything you need to know. \
Whether you're a beginner or already familiar with {niche_lower}, this comprehensive guide will give you valuable insights.

🔔 Subscribe for more {niche_lower} content!

📌 Timestamps:
{timestamps}

💡 Related Videos:
[Link to related content]

📱 Follow us on social media:
[Social media links]

#{topic_tag} #{niche_tag} #YouTube

---
Disclaimer: This content is for educational and informational purposes only.",
        topic_tag = strip_whitespace(topic),
        niche_tag = strip_whitespace(niche),
    )
}

/// Search tags: niche, topic, then the common keywords. Capped at [`MAX_TAGS`].
pub fn generate_tags(niche: &str, topic: &str) -> Vec<String> {
    build_tags(niche, topic, &COMMON_TAGS)
}

/// Niche and topic tags followed by `keywords`, truncated to [`MAX_TAGS`].
pub fn build_tags(niche: &str, topic: &str, keywords: &[&str]) -> Vec<String> {
    let mut tags = Vec::with_capacity((2 + keywords.len()).min(MAX_TAGS));
    tags.push(strip_whitespace(&niche.to_lowercase()));
    tags.push(strip_whitespace(&topic.to_lowercase()));
    tags.extend(keywords.iter().map(|t| t.to_string()));
    tags.truncate(MAX_TAGS);
    tags
}

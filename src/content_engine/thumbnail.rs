// ReelForge Thumbnail Concepts
// Copyright (c) 2026 Xing_The_Creator | ReelForge

/// Number of thumbnail concepts produced per video.
pub const THUMBNAIL_IDEA_COUNT: usize = 5;

/// Five fixed thumbnail briefs for the designer. The first and last quote the topic.
pub fn generate_thumbnail_ideas(topic: &str) -> Vec<String> {
    vec![
        format!("Bold text: \"{}\" with shocked face emoji background", topic),
        "Split screen: \"Before\" vs \"After\" with contrasting colors (red/green)".to_string(),
        "Large arrow pointing to key visual element with yellow highlight".to_string(),
        "Number-focused: \"Top 5\" or \"10 Facts\" in large bold numbers".to_string(),
        format!("Question format: \"Is {} Worth It?\" with question mark graphic", topic),
    ]
}

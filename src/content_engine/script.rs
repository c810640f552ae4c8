// ReelForge Script Generator
// Copyright (c) 2026 Xing_The_Creator | ReelForge

use super::choice::{pick, ChoiceSource};
use super::{VideoDuration, VideoTone};

/// Opening lines; one is picked per script.
pub const HOOKS: [&str; 5] = [
    "What if I told you that everything you know about this topic is about to change?",
    "Today, we're diving into something that will blow your mind.",
    "This is the information they don't want you to know about.",
    "You won't believe what I discovered about this topic.",
    "If you've been wondering about this, you're in the right place.",
];

/// Section markers, in the order they appear in every script.
pub const SCRIPT_SECTIONS: [&str; 6] = [
    "[INTRO]",
    "[MAIN CONTENT - SECTION 1]",
    "[MAIN CONTENT - SECTION 2]",
    "[MAIN CONTENT - SECTION 3]",
    "[CONCLUSION]",
    "[END SCREEN]",
];

/// Builds the six-section narration script.
///
/// `duration` and `tone` are accepted but do not change the wording yet.
pub fn generate_script(
    source: &dyn ChoiceSource,
    niche: &str,
    topic: &str,
    _duration: VideoDuration,
    _tone: VideoTone,
) -> String {
    let hook = pick(source, &HOOKS);
    let niche = niche.to_lowercase();
    let [intro, main_1, main_2, main_3, conclusion, end_screen] = SCRIPT_SECTIONS;

    format!(
        r#"{intro}
{hook}

Hey everyone, and welcome back to the channel! Today we're talking about {topic}. If you're interested in {niche}, you're going to want to stick around for this one.

Before we dive in, make sure to hit that subscribe button and turn on notifications so you never miss out on our latest content.

{main_1}
Let's start by breaking down the fundamentals. When it comes to {topic}, there are several key things you need to understand.

First, it's important to recognize that this isn't just a passing trend. This is something that's reshaping the entire landscape of {niche}.

{main_2}
Now, here's where things get really interesting. The data shows some fascinating patterns that most people completely overlook.

Let me walk you through the three most important aspects:

Number one: The foundation. This is crucial because without understanding this, everything else falls apart.

Number two: The application. This is where theory meets practice, and where you'll see real results.

Number three: The future implications. This is what separates those who just consume content from those who actually implement it.

{main_3}
But here's what nobody talks about - the hidden challenges that come with {topic}.

I've done extensive research on this, and the findings are remarkable. Most people focus on the obvious factors, but the real game-changers are happening beneath the surface.

{conclusion}
So there you have it - everything you need to know about {topic}.

If you found this valuable, give this video a thumbs up and let me know in the comments what you think about this.

And hey, if you want to dive deeper into {niche}, check out the video I'm putting in the description. It's going to take your understanding to the next level.

Thanks for watching, and I'll see you in the next one!

{end_screen}
Don't forget to subscribe for more {niche} content!"#
    )
}

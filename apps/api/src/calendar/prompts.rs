// Prompt text for the content-calendar generation call and the builder that fills it.

use crate::calendar::models::{ContentFocus, Profile, Settings};
use crate::calendar::tone::get_tone_guidance;

/// The seven content types, one per day. Sent verbatim.
pub const SEVEN_DAY_CONTENT_TYPES: &str = "🔥 VIRAL CONTENT TYPES (Use variety across 7 days):
1. **Controversial Take**: Challenge conventional industry wisdom
2. **Behind-the-Scenes**: Share exclusive insider perspectives
3. **Prediction Post**: Make bold, data-backed future predictions
4. **Failure Story**: Transform personal setbacks into teachable moments
5. **Industry Myth-Buster**: Debunk common misconceptions with evidence
6. **Trend Analysis**: Connect current events to industry implications
7. **Contrarian Insight**: Present unpopular but valuable perspectives";

/// Output layout the day splitter relies on. Sent verbatim.
pub const SEVEN_DAY_FORMAT: &str = "FORMAT REQUIREMENTS:
**Day 1: [Compelling Title with Emotional Hook]**
[Post content with strategic formatting]
[3-5 relevant hashtags]
[Strong call-to-action]

**Day 2: [Next Compelling Title]**
[Post content with strategic formatting]
[3-5 relevant hashtags]
[Strong call-to-action]

[Continue for all 7 days]";

/// Engagement tactics block. Sent verbatim.
pub const ENGAGEMENT_TACTICS: &str = "💡 PSYCHOLOGICAL ENGAGEMENT TACTICS:
- Open loops and curiosity gaps
- Social proof and authority positioning
- Emotional storytelling with logical conclusions
- Surprise elements and unexpected twists
- Interactive elements encouraging responses";

/// Metrics the posts should optimize for. Sent verbatim.
pub const SUCCESS_METRICS: &str = "VIRAL SUCCESS METRICS TO OPTIMIZE FOR:
- Comments: Design posts that naturally generate discussion
- Shares: Create content worth sharing with networks
- Saves: Provide actionable insights people want to reference
- Profile visits: Position expertise to drive connection requests
- Industry influence: Establish thought leadership authority";

/// Calendar prompt template.
/// Placeholders: {industry}, {bio}, {sample_post}, {headlines}, {content_types},
///               {engagement_tactics}, {style_directives}, {format}, {success_metrics}
pub const CALENDAR_PROMPT_TEMPLATE: &str = r#"You are an elite LinkedIn ghostwriter and viral content strategist with expertise in creating thought leadership content that achieves maximum engagement, shares, and industry influence. Your mission is to craft a strategic 7-day content calendar that positions the user as an authoritative voice while driving exceptional viral performance.

TARGET PROFILE ANALYSIS:
Industry: {industry}
Professional Bio: {bio}
Voice Reference (Recent Post): {sample_post}

CURRENT MARKET INTELLIGENCE:
{headlines}

VIRAL CONTENT STRATEGY REQUIREMENTS:

🎯 ENGAGEMENT OPTIMIZATION:
- Each post must include a compelling hook within the first 2 lines
- Use psychological triggers: curiosity gaps, social proof, controversy, urgency
- Incorporate pattern interrupts and unexpected insights
- Design posts for maximum shareability and comment generation

📊 CONTENT PERFORMANCE FRAMEWORK:
- Post length: 150-300 words (optimized for LinkedIn algorithm)
- Include 3-5 strategic hashtags (mix of trending and niche)
- End with strong call-to-action that encourages engagement
- Use formatting that enhances readability (line breaks, emojis, bullets)

{content_types}

{engagement_tactics}

🎨 CONTENT ARCHITECTURE:
- Hook (attention-grabbing opening)
- Context (relevant background/story)
- Core insight (valuable takeaway)
- Evidence (data, examples, proof points)
- Call-to-action (engagement driver)

VOICE MATCHING PROTOCOL:
Analyze the provided recent post and bio to maintain consistent:
- Tone and personality
- Industry expertise level
- Communication style
- Professional positioning
- Authentic voice patterns

{style_directives}

{format}

{success_metrics}

EXECUTION STANDARDS:
- Every post must provide genuine value to the reader
- Maintain professional credibility while being engaging
- Ensure content is original and not recycled industry clichés
- Balance personal authenticity with strategic viral elements
- Create content that reflects expertise while being accessible

Generate 7 strategically different posts that collectively build a powerful thought leadership narrative while maximizing viral potential across diverse content formats and engagement strategies."#;

/// Generic topics used when the news feed yields nothing.
pub fn fallback_headlines(industry: &str) -> Vec<String> {
    let industry = industry.trim();
    vec![
        format!("Latest innovations in {industry}"),
        format!("Market trends shaping {industry}"),
        format!("Leadership challenges in {industry}"),
    ]
}

/// Fills the calendar template with the profile, headlines, and settings.
pub fn build_calendar_prompt(profile: &Profile, headlines: &[String], settings: &Settings) -> String {
    let headlines_text = headlines
        .iter()
        .map(|h| format!("• {h}"))
        .collect::<Vec<_>>()
        .join("\n");

    let style_directives = build_style_directives(settings);

    fill_template(
        CALENDAR_PROMPT_TEMPLATE,
        &[
            ("industry", profile.industry.trim()),
            ("bio", profile.bio.trim()),
            ("sample_post", profile.sample_post.trim()),
            ("headlines", headlines_text.as_str()),
            ("content_types", SEVEN_DAY_CONTENT_TYPES),
            ("engagement_tactics", ENGAGEMENT_TACTICS),
            ("style_directives", style_directives.as_str()),
            ("format", SEVEN_DAY_FORMAT),
            ("success_metrics", SUCCESS_METRICS),
        ],
    )
}

fn build_style_directives(settings: &Settings) -> String {
    let guidance = get_tone_guidance(settings.tone);
    let mut out = format!(
        "STYLE DIRECTIVES:\n- Engagement style: {}\n- Voice: {}\n- Hook ideas: {}\n- Avoid: {}",
        settings.tone,
        guidance.voice,
        guidance.hook_styles.join("; "),
        guidance.avoid.join(", "),
    );

    if !settings.focus.is_empty() {
        let focus = settings
            .focus
            .iter()
            .map(ContentFocus::label)
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("\n- Lean the week's mix toward: {focus}"));
    }

    out
}

/// Single-pass `{name}` substitution so user text containing braces is inserted literally.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

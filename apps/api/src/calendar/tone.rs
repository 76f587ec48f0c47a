//! Tone calibration — maps the selected engagement style to voice guidance for the prompt.

use crate::calendar::models::Tone;

/// Phrasing guidance calibrated to one engagement style.
#[derive(Debug, Clone)]
pub struct ToneGuidance {
    pub voice: &'static str,
    pub hook_styles: Vec<&'static str>,
    pub avoid: Vec<&'static str>,
}

/// Returns the guidance block for the selected tone.
pub fn get_tone_guidance(tone: Tone) -> ToneGuidance {
    match tone {
        Tone::ProfessionalEngaging => ToneGuidance {
            voice: "polished and approachable, confident without hype",
            hook_styles: vec![
                "a crisp observation from recent work",
                "a question peers are quietly asking",
                "a short lesson with a concrete example",
            ],
            avoid: vec!["slang", "all-caps emphasis", "clickbait promises"],
        },
        Tone::BoldThoughtProvoking => ToneGuidance {
            voice: "direct and opinionated, willing to challenge consensus",
            hook_styles: vec![
                "an unpopular opinion stated plainly",
                "a bold prediction with a deadline",
                "a myth the industry keeps repeating",
            ],
            avoid: vec!["hedging openers", "vague both-sides conclusions"],
        },
        Tone::AuthenticVulnerable => ToneGuidance {
            voice: "candid and personal, grounded in lived experience",
            hook_styles: vec![
                "a mistake and what it cost",
                "a moment of doubt and how it resolved",
                "a behind-the-scenes confession",
            ],
            avoid: vec!["humblebrags", "corporate jargon", "polished victory laps"],
        },
        Tone::DataDrivenAnalytical => ToneGuidance {
            voice: "precise and evidence-led, numbers before adjectives",
            hook_styles: vec![
                "a surprising statistic",
                "a before/after comparison",
                "a trend line and what it implies",
            ],
            avoid: vec!["unsupported superlatives", "emotional exaggeration"],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_tone_invites_contrarian_hooks() {
        let g = get_tone_guidance(Tone::BoldThoughtProvoking);
        assert!(g.hook_styles.iter().any(|h| h.contains("unpopular opinion")));
    }

    #[test]
    fn test_vulnerable_tone_avoids_humblebrags() {
        let g = get_tone_guidance(Tone::AuthenticVulnerable);
        assert!(g.avoid.contains(&"humblebrags"));
    }

    #[test]
    fn test_every_tone_has_guidance() {
        for tone in Tone::ALL {
            let g = get_tone_guidance(tone);
            assert!(!g.voice.is_empty());
            assert!(!g.hook_styles.is_empty());
            assert!(!g.avoid.is_empty());
        }
    }
}

use crate::calendar::models::{CalendarResponse, DayPost};
use crate::calendar::parser::DAYS_IN_CALENDAR;
use crate::render::escape_html;

const POSTING_TIPS: &[&str] = &[
    "Post during peak hours (8-10 AM, 12-2 PM, 5-6 PM)",
    "Engage with comments within the first 2 hours",
    "Share in relevant LinkedIn groups",
    "Tag relevant industry connections",
];

const ENGAGEMENT_ADVICE: &[&str] = &[
    "Respond to comments within 2 hours",
    "Ask follow-up questions in comments",
    "Share insights in your network",
    "Cross-promote on other platforms",
    "Tag relevant industry leaders",
];

const AMPLIFICATION_ADVICE: &[&str] = &[
    "Repurpose top performers into articles",
    "Create carousel posts from insights",
    "Share behind-the-scenes content",
    "Engage with your network's content",
    "Join relevant industry conversations",
];

/// CSS rules that show the panel for the checked tab.
pub fn tab_styles() -> String {
    (1..=DAYS_IN_CALENDAR)
        .map(|i| format!("#tab-{i}:checked ~ #panel-{i} {{ display: block; }}\n"))
        .collect()
}

/// One tab per day plus the headlines that fed the prompt.
/// Falls back to the raw model output when it had no day markers.
pub fn render_calendar(response: &CalendarResponse) -> String {
    let headlines: String = response
        .headlines
        .iter()
        .map(|h| format!("<li>{}</li>", escape_html(h)))
        .collect();

    let headlines_label = if response.used_fallback_headlines {
        "General industry topics used (no recent news found)"
    } else {
        "Industry news used in your content"
    };

    let body = if response.days.is_empty() {
        format!(
            r#"<div class="notice warning">Could not split the generated content into days. Here is the raw output:</div>
<pre>{}</pre>"#,
            escape_html(&response.raw)
        )
    } else {
        format!("{}\n{}", render_tabs(&response.days), render_execution_strategy())
    };

    format!(
        r#"<section id="results">
<h2>Your 7-Day Content Calendar</h2>
<p>{posts} posts generated with {model} from {count} headlines.</p>
<details>
<summary>{headlines_label}</summary>
<ol>{headlines}</ol>
</details>
{body}
</section>"#,
        posts = response.days.len(),
        model = escape_html(response.model.as_str()),
        count = response.headlines.len(),
    )
}

fn bullet_list(items: &[&str]) -> String {
    items.iter().map(|t| format!("<li>{t}</li>")).collect()
}

/// Follow-up advice shown under a split calendar.
fn render_execution_strategy() -> String {
    format!(
        r#"<div class="strategy">
<h3>🎯 Viral Content Execution Strategy</h3>
<div class="columns">
<div><p><strong>📈 Maximize Engagement:</strong></p><ul>{}</ul></div>
<div><p><strong>🔄 Content Amplification:</strong></p><ul>{}</ul></div>
</div>
</div>"#,
        bullet_list(ENGAGEMENT_ADVICE),
        bullet_list(AMPLIFICATION_ADVICE),
    )
}

fn render_tabs(days: &[DayPost]) -> String {
    let labels: String = days
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let idx = i + 1;
            let checked = if idx == 1 { " checked" } else { "" };
            format!(
                r#"<input type="radio" name="day" id="tab-{idx}"{checked}><label for="tab-{idx}">Day {}</label>"#,
                day.day
            )
        })
        .collect();

    let tips = bullet_list(POSTING_TIPS);

    let panels: String = days
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let body = escape_html(&day.body);
            format!(
                r#"<div class="panel" id="panel-{idx}">
<h3>Day {day_num}: {title}</h3>
<p><strong>Preview:</strong></p>
<div class="post">{body}</div>
<p><strong>Copy for LinkedIn:</strong></p>
<pre>{body}</pre>
<p><strong>Posting tips:</strong></p>
<ul>{tips}</ul>
</div>"#,
                idx = i + 1,
                day_num = day.day,
                title = escape_html(&day.title),
            )
        })
        .collect();

    format!(r#"<div class="tabs">{labels}{panels}</div>"#)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::calendar::parser::split_days;
    use crate::llm_client::ModelId;

    fn response(raw: &str) -> CalendarResponse {
        CalendarResponse {
            request_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            model: ModelId::default(),
            headlines: vec!["AI <chips> ship".to_string()],
            used_fallback_headlines: false,
            days: split_days(raw),
            raw: raw.to_string(),
        }
    }

    #[test]
    fn test_seven_days_render_seven_tabs() {
        let raw: String = (1..=7)
            .map(|d| format!("**Day {d}: Hook {d}**\nBody {d}\n"))
            .collect();
        let html = render_calendar(&response(&raw));
        assert_eq!(html.matches(r#"class="panel""#).count(), 7);
        assert_eq!(html.matches(r#"type="radio""#).count(), 7);
        assert!(html.contains(r#"id="tab-1" checked"#));
        assert!(html.contains("<h3>Day 7: Hook 7</h3>"));
        assert!(html.contains("<li>AI &lt;chips&gt; ship</li>"));
        assert!(html.contains("Viral Content Execution Strategy"));
        assert!(html.contains("<li>Respond to comments within 2 hours</li>"));
        assert!(html.contains("<li>Repurpose top performers into articles</li>"));
    }

    #[test]
    fn test_unmarked_output_shows_raw_text() {
        let html = render_calendar(&response("just <b>text</b>"));
        assert!(!html.contains(r#"class="tabs""#));
        assert!(html.contains("<pre>just &lt;b&gt;text&lt;/b&gt;</pre>"));
        assert!(!html.contains("Viral Content Execution Strategy"));
    }

    #[test]
    fn test_fallback_headlines_are_labelled() {
        let mut r = response("**Day 1: A**\nB");
        r.used_fallback_headlines = true;
        assert!(render_calendar(&r).contains("no recent news found"));
    }

    #[test]
    fn test_tab_styles_cover_every_day() {
        let css = tab_styles();
        assert!(css.contains("#tab-1:checked ~ #panel-1"));
        assert!(css.contains("#tab-7:checked ~ #panel-7"));
    }
}

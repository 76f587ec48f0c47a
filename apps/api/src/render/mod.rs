//! Server-side HTML for the single-page form and calendar view.
//!
//! Every piece of user or model text goes through `escape_html`.

pub mod calendar;
pub mod form;

use crate::calendar::models::{CalendarResponse, Profile, Settings};

/// Banner shown above the form.
#[derive(Debug, Clone, Copy)]
pub enum Notice<'a> {
    Error(&'a str),
    Warning(&'a str),
}

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; color: #1d1d1f; }
h1 { margin-bottom: 0.25rem; }
fieldset { border: 1px solid #d2d2d7; border-radius: 8px; margin: 1rem 0; }
label { display: block; font-weight: 600; margin-top: 0.75rem; }
textarea, input[type=text], input[type=password], select { width: 100%; box-sizing: border-box; padding: 0.5rem; }
textarea { min-height: 9rem; }
.inline label { display: inline; font-weight: normal; margin-right: 1rem; }
button { margin-top: 1rem; padding: 0.75rem 1.5rem; font-size: 1rem; cursor: pointer; }
.notice { padding: 0.75rem 1rem; border-radius: 6px; margin: 1rem 0; }
.notice.error { background: #fde8e8; border: 1px solid #f5b5b5; }
.notice.warning { background: #fff7e0; border: 1px solid #f2d58a; }
.tabs > input[type=radio] { display: none; }
.tabs > label { display: inline-block; padding: 0.5rem 1rem; border: 1px solid #d2d2d7; border-bottom: none; border-radius: 6px 6px 0 0; cursor: pointer; margin: 0; }
.tabs > input[type=radio]:checked + label { background: #f5f5f7; }
.panel { display: none; border: 1px solid #d2d2d7; padding: 1rem; }
.panel pre { white-space: pre-wrap; background: #f5f5f7; padding: 0.75rem; }
.post { white-space: pre-wrap; }
.layout { display: flex; gap: 2rem; align-items: flex-start; }
.layout > main { flex: 1; min-width: 0; }
.layout > aside { width: 260px; font-size: 0.9rem; border-left: 1px solid #d2d2d7; padding-left: 1rem; }
.strategy .columns { display: flex; gap: 2rem; }
"#;

const SIDEBAR: &str = r#"<aside>
<h2>🚀 LinkedIn Ghostwriter Pro</h2>
<h3>🎯 Viral Content Strategy:</h3>
<ol>
<li><strong>Profile Analysis</strong>: Bio + recent post voice matching</li>
<li><strong>Industry Intelligence</strong>: Real-time news integration</li>
<li><strong>Viral Framework</strong>: 7 strategic content types</li>
<li><strong>Engagement Optimization</strong>: Psychological triggers included</li>
</ol>
<h3>🔥 Viral Content Types:</h3>
<ul>
<li><strong>Controversial Takes</strong>: Challenge industry norms</li>
<li><strong>Behind-the-Scenes</strong>: Exclusive insights</li>
<li><strong>Bold Predictions</strong>: Data-backed forecasts</li>
<li><strong>Failure Stories</strong>: Vulnerability + lessons</li>
<li><strong>Myth-Busting</strong>: Debunk misconceptions</li>
<li><strong>Trend Analysis</strong>: Connect news to insights</li>
<li><strong>Contrarian Views</strong>: Unpopular but valuable</li>
</ul>
<h3>💡 Engagement Maximizers:</h3>
<ul>
<li>Strong hooks in first 2 lines</li>
<li>Curiosity gaps and open loops</li>
<li>Interactive call-to-actions</li>
<li>Strategic hashtag placement</li>
<li>Emotional storytelling</li>
</ul>
<h3>🔑 Get Together.ai API Key:</h3>
<p><a href="https://together.ai" target="_blank" rel="noopener">Sign up at Together.ai</a></p>
<p>✨ <strong>Free Credits Available!</strong> New users get free credits to try the service.</p>
</aside>"#;

/// Renders the whole page: form (refilled with `profile`/`settings`), notices, and
/// the calendar when `result` is present.
pub fn render_page(
    profile: &Profile,
    settings: &Settings,
    notices: &[Notice<'_>],
    result: Option<&CalendarResponse>,
) -> String {
    let notices_html: String = notices.iter().map(render_notice).collect();
    let results = result.map(calendar::render_calendar).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>LinkedIn Ghostwriter for Thought Leaders</title>
<style>{STYLES}{tab_styles}</style>
</head>
<body>
<div class="layout">
<main>
<h1>LinkedIn Ghostwriter for Thought Leaders</h1>
<p><strong>Generate a week of posts from your profile and today's industry news.</strong></p>
{notices_html}
{form}
{results}
</main>
{SIDEBAR}
</div>
</body>
</html>
"#,
        tab_styles = calendar::tab_styles(),
        form = form::render_form(profile, settings),
    )
}

fn render_notice(notice: &Notice<'_>) -> String {
    let (class, text) = match notice {
        Notice::Error(text) => ("error", text),
        Notice::Warning(text) => ("warning", text),
    };
    format!(
        r#"<div class="notice {class}" role="alert">{}</div>"#,
        escape_html(text)
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;y&#39;"
        );
    }

    #[test]
    fn test_page_without_calendar_renders_form_and_notices() {
        let html = render_page(
            &Profile::default(),
            &Settings::default(),
            &[Notice::Error("Please fill in <all> fields")],
            None,
        );
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<form method="post" action="/generate">"#));
        assert!(html.contains("Please fill in &lt;all&gt; fields"));
        assert!(html.contains(r#"class="notice error""#));
        assert!(!html.contains(r#"class="tabs""#));
    }

    #[test]
    fn test_page_carries_strategy_sidebar() {
        let html = render_page(&Profile::default(), &Settings::default(), &[], None);
        assert!(html.contains("<aside>"));
        assert!(html.contains("Viral Content Types:"));
        assert!(html.contains("<li>Strong hooks in first 2 lines</li>"));
        assert!(html.contains(r#"href="https://together.ai""#));
    }
}

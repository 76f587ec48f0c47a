use crate::calendar::models::{ContentFocus, Profile, Settings, Tone, MAX_HEADLINES, MIN_HEADLINES};
use crate::llm_client::ModelId;
use crate::render::escape_html;

/// The input form. The API key field is always rendered empty.
pub fn render_form(profile: &Profile, settings: &Settings) -> String {
    let model_options: String = ModelId::ALL
        .iter()
        .map(|m| option(m.as_str(), *m == settings.model))
        .collect();

    let tone_options: String = Tone::ALL
        .iter()
        .map(|t| option(t.label(), *t == settings.tone))
        .collect();

    let focus_boxes: String = ContentFocus::ALL
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let checked = if settings.focus.contains(f) { " checked" } else { "" };
            format!(
                r#"<input type="checkbox" id="focus-{i}" name="focus" value="{value}"{checked}><label for="focus-{i}">{value}</label>"#,
                value = escape_html(f.label()),
            )
        })
        .collect();

    format!(
        r#"<form method="post" action="/generate">
<fieldset>
<legend>Professional Profile</legend>
<label for="bio">LinkedIn Bio / Professional Summary</label>
<textarea id="bio" name="bio" required placeholder="Your background, expertise and unique value proposition">{bio}</textarea>
<label for="sample_post">Recent High-Performing Post</label>
<textarea id="sample_post" name="sample_post" required placeholder="A post that represents your authentic voice">{sample_post}</textarea>
<label for="industry">Industry / Niche Keyword</label>
<input type="text" id="industry" name="industry" required placeholder="e.g., fintech, healthcare AI, B2B SaaS" value="{industry}">
<label for="api_key">Together.ai API Key</label>
<input type="password" id="api_key" name="api_key" required autocomplete="off" placeholder="Used for this request only, never stored">
</fieldset>
<details>
<summary>Advanced settings</summary>
<fieldset>
<label for="model">AI Model</label>
<select id="model" name="model">{model_options}</select>
<label for="headline_count">Industry News Headlines ({min}-{max})</label>
<input type="range" id="headline_count" name="headline_count" min="{min}" max="{max}" value="{count}">
<label for="tone">Engagement Style</label>
<select id="tone" name="tone">{tone_options}</select>
<label>Content Focus Areas</label>
<div class="inline">{focus_boxes}</div>
</fieldset>
</details>
<button type="submit">Generate Content Calendar</button>
</form>"#,
        bio = escape_html(&profile.bio),
        sample_post = escape_html(&profile.sample_post),
        industry = escape_html(&profile.industry),
        min = MIN_HEADLINES,
        max = MAX_HEADLINES,
        count = settings.headline_count.clamp(MIN_HEADLINES, MAX_HEADLINES),
    )
}

fn option(value: &str, selected: bool) -> String {
    let value = escape_html(value);
    let selected = if selected { " selected" } else { "" };
    format!(r#"<option value="{value}"{selected}>{value}</option>"#)
}

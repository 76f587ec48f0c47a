use crate::calendar::models::{CalendarRequest, MAX_HEADLINES, MIN_HEADLINES};
use crate::errors::AppError;

/// Rejects a request before any network call is made.
///
/// Required: bio, sample post, industry, API key (non-blank).
/// Headline count must fall within `MIN_HEADLINES..=MAX_HEADLINES`.
pub fn validate_request(request: &CalendarRequest) -> Result<(), AppError> {
    let required = [
        ("bio", request.profile.bio.as_str()),
        ("sample_post", request.profile.sample_post.as_str()),
        ("industry", request.profile.industry.as_str()),
        ("api_key", request.api_key.as_str()),
    ];

    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Please fill in all required fields. Missing: {}",
            missing.join(", ")
        )));
    }

    let count = request.settings.headline_count;
    if !(MIN_HEADLINES..=MAX_HEADLINES).contains(&count) {
        return Err(AppError::Validation(format!(
            "headline_count must be between {MIN_HEADLINES} and {MAX_HEADLINES}, got {count}"
        )));
    }

    Ok(())
}

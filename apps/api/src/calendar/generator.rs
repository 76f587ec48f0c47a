//! Calendar Generation — orchestrates one "generate" click.
//!
//! Flow: validate → fetch headlines → fallback topics if none →
//!       build prompt → LLM generate → split into days → response.
//!
//! Both outbound calls run once, in order. Nothing is stored.

use chrono::Utc;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::calendar::models::{CalendarRequest, CalendarResponse};
use crate::calendar::parser::split_days;
use crate::calendar::prompts::{build_calendar_prompt, fallback_headlines};
use crate::calendar::validation::validate_request;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::news::HeadlineSource;

/// Runs the full pipeline for one request.
///
/// Validation failures return before any network call.
/// A failed headline fetch degrades to fallback topics; a failed generation call
/// surfaces as `AppError::Generation`.
pub async fn generate_calendar(
    news: &dyn HeadlineSource,
    llm: &dyn TextGenerator,
    request: CalendarRequest,
) -> Result<CalendarResponse, AppError> {
    validate_request(&request)?;

    let request_id = Uuid::new_v4();
    let span = info_span!(
        "generate_calendar",
        %request_id,
        industry = %request.profile.industry.trim(),
        model = %request.settings.model,
    );

    run_pipeline(news, llm, request, request_id)
        .instrument(span)
        .await
}

async fn run_pipeline(
    news: &dyn HeadlineSource,
    llm: &dyn TextGenerator,
    request: CalendarRequest,
    request_id: Uuid,
) -> Result<CalendarResponse, AppError> {
    let CalendarRequest {
        profile,
        api_key,
        settings,
    } = request;

    // Step 1: Headlines
    let count = usize::from(settings.headline_count);
    let mut headlines = news.fetch(profile.industry.trim(), count).await;
    headlines.truncate(count);

    let used_fallback_headlines = headlines.is_empty();
    if used_fallback_headlines {
        warn!("No headlines found; proceeding with general industry topics");
        headlines = fallback_headlines(&profile.industry);
    } else {
        info!("Using {} headlines", headlines.len());
    }

    // Step 2: Prompt
    let prompt = build_calendar_prompt(&profile, &headlines, &settings);

    // Step 3: Generate
    let raw = llm
        .generate(&prompt, settings.model, api_key.trim())
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    // Step 4: Split into days
    let days = split_days(&raw);
    if days.is_empty() {
        warn!("Generated content had no day markers; returning raw output only");
    } else {
        info!("Generated calendar with {} days", days.len());
    }

    Ok(CalendarResponse {
        request_id,
        generated_at: Utc::now(),
        model: settings.model,
        headlines,
        used_fallback_headlines,
        days,
        raw,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::calendar::models::{Profile, Settings};
    use crate::llm_client::{LlmClient, LlmError, ModelId};

    /// Headline source returning a fixed list and counting calls.
    pub(crate) struct FakeNews {
        pub headlines: Vec<String>,
        pub calls: AtomicUsize,
    }

    impl FakeNews {
        pub fn with(headlines: &[&str]) -> Self {
            Self {
                headlines: headlines.iter().map(|h| h.to_string()).collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl HeadlineSource for FakeNews {
        async fn fetch(&self, _industry: &str, _count: usize) -> Vec<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.headlines.clone()
        }
    }

    /// Generator returning a canned reply (or error) and recording the last prompt.
    pub(crate) struct FakeLlm {
        pub reply: Result<String, String>,
        pub calls: AtomicUsize,
        pub last_prompt: Mutex<Option<String>>,
    }

    impl FakeLlm {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for FakeLlm {
        async fn generate(
            &self,
            prompt: &str,
            _model: ModelId,
            _api_key: &str,
        ) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            self.reply.clone().map_err(|message| LlmError::Api {
                status: 401,
                message,
            })
        }
    }

    pub(crate) fn week_text() -> String {
        (1..=7)
            .map(|d| format!("**Day {d}: Hook {d}**\nBody {d}\n#growth\n\n"))
            .collect()
    }

    pub(crate) fn request() -> CalendarRequest {
        CalendarRequest {
            profile: Profile {
                bio: "Head of Growth at a B2B SaaS scale-up".to_string(),
                sample_post: "Churn is a product problem wearing a sales costume.".to_string(),
                industry: "B2B SaaS".to_string(),
            },
            api_key: "sk-test".to_string(),
            settings: Settings::default(),
        }
    }

    #[tokio::test]
    async fn test_full_pipeline_with_headlines() {
        let news = FakeNews::with(&["SaaS pricing shifts to usage", "AI copilots everywhere"]);
        let llm = FakeLlm::replying(&week_text());

        let response = generate_calendar(&news, &llm, request()).await.unwrap();

        assert_eq!(response.days.len(), 7);
        assert!(!response.used_fallback_headlines);
        assert_eq!(response.headlines.len(), 2);
        assert_eq!(response.model, ModelId::Llama3_8b);

        let prompt = llm.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("• SaaS pricing shifts to usage"));
        assert!(prompt.contains("Head of Growth at a B2B SaaS scale-up"));
    }

    #[tokio::test]
    async fn test_empty_headlines_use_fallback_topics() {
        let news = FakeNews::with(&[]);
        let llm = FakeLlm::replying(&week_text());

        let response = generate_calendar(&news, &llm, request()).await.unwrap();

        assert!(response.used_fallback_headlines);
        assert_eq!(response.headlines, fallback_headlines("B2B SaaS"));
        let prompt = llm.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("• Market trends shaping B2B SaaS"));
    }

    #[tokio::test]
    async fn test_headlines_truncated_to_requested_count() {
        let many: Vec<String> = (0..30).map(|i| format!("headline {i}")).collect();
        let refs: Vec<&str> = many.iter().map(String::as_str).collect();
        let news = FakeNews::with(&refs);
        let llm = FakeLlm::replying(&week_text());

        let mut req = request();
        req.settings.headline_count = 5;
        let response = generate_calendar(&news, &llm, req).await.unwrap();
        assert_eq!(response.headlines.len(), 5);
    }

    #[tokio::test]
    async fn test_empty_bio_rejected_before_network() {
        let news = FakeNews::with(&["x"]);
        let llm = FakeLlm::replying(&week_text());

        let mut req = request();
        req.profile.bio = "  ".to_string();
        let err = generate_calendar(&news, &llm, req).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(news.calls.load(Ordering::SeqCst), 0);
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generation_failure_becomes_error_message() {
        let news = FakeNews::with(&["x"]);
        let llm = FakeLlm::failing("Invalid API key provided");

        let err = generate_calendar(&news, &llm, request()).await.unwrap_err();

        let AppError::Generation(ref msg) = err else {
            panic!("expected generation error, got {err:?}");
        };
        assert!(msg.contains("Invalid API key provided"));
        assert!(err.user_message().contains("verify your API key"));
    }

    #[tokio::test]
    async fn test_network_error_from_real_client_is_reported_not_raised() {
        let news = FakeNews::with(&[]);
        let llm = LlmClient::new("http://127.0.0.1:1/v1").unwrap();

        let err = generate_calendar(&news, &llm, request()).await.unwrap_err();
        assert!(matches!(err, AppError::Generation(_)));
    }

    #[tokio::test]
    async fn test_unmarked_output_returned_raw() {
        let news = FakeNews::with(&["x"]);
        let llm = FakeLlm::replying("Sorry, here are some ideas without structure.");

        let response = generate_calendar(&news, &llm, request()).await.unwrap();
        assert!(response.days.is_empty());
        assert_eq!(response.raw, "Sorry, here are some ideas without structure.");
    }
}

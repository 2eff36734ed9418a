//! Automated livery review.
//!
//! Pending liveries that have waited long enough are handed to a [`LiveryReviewer`]
//! one at a time. Any reviewer failure rejects the livery with [`REVIEW_FAILED_NOTE`].

use std::future::Future;

use chrono::{Duration, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;

use crate::server::{
    config::LlmConfig,
    data::livery::LiveryRepository,
    error::AppError,
    model::livery::{Livery, ReviewVerdict},
};

pub const REVIEW_FAILED_NOTE: &str = "AI review failed";

const SYSTEM_PROMPT: &str =
    "You are an MSFS livery quality validator. Respond only with valid JSON.";

/// Decides whether a livery may be published.
pub trait LiveryReviewer {
    fn review(
        &self,
        livery: &Livery,
    ) -> impl Future<Output = Result<ReviewVerdict, AppError>> + Send;
}

/// Counts of a single review pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReviewSummary {
    pub approved: usize,
    pub rejected: usize,
    pub failed: usize,
    /// Liveries a moderator reviewed while the pass was running.
    pub skipped: usize,
}

/// Reviews every pending livery created at least `min_age` ago, oldest first.
pub async fn process_pending_reviews<R: LiveryReviewer>(
    db: &DatabaseConnection,
    reviewer: &R,
    min_age: Duration,
) -> Result<ReviewSummary, AppError> {
    let livery_repo = LiveryRepository::new(db);
    let pending = livery_repo.get_pending(Some(Utc::now() - min_age)).await?;

    let mut summary = ReviewSummary::default();

    for livery in pending {
        let (verdict, reviewer_failed) = match reviewer.review(&livery).await {
            Ok(verdict) => (verdict, false),
            Err(e) => {
                tracing::error!("Failed to review livery {}: {}", livery.id, e);
                let verdict = ReviewVerdict {
                    approved: false,
                    notes: REVIEW_FAILED_NOTE.to_string(),
                };
                (verdict, true)
            }
        };

        if !livery_repo
            .set_review_if_pending(livery.id, &verdict, Utc::now())
            .await?
        {
            tracing::info!(
                "Livery {} was reviewed elsewhere, keeping that verdict",
                livery.id
            );
            summary.skipped += 1;
            continue;
        }

        if reviewer_failed {
            summary.failed += 1;
        }
        if verdict.approved {
            summary.approved += 1;
        } else {
            summary.rejected += 1;
        }

        tracing::info!(
            "Livery {} ({}) {}: {}",
            livery.id,
            livery.livery_name,
            verdict.status(),
            verdict.notes
        );
    }

    Ok(summary)
}

/// Renders the review request for a livery.
pub fn build_review_prompt(livery: &Livery) -> String {
    let or_unset = |value: Option<&str>| value.unwrap_or("not specified").to_string();
    let file_size = livery
        .file_size
        .map(|bytes| format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0))
        .unwrap_or_else(|| "not specified".to_string());

    format!(
        "You review Microsoft Flight Simulator liveries before they are published.\n\
         Decide whether the following livery can be approved.\n\
         \n\
         Livery:\n\
         - Name: {name}\n\
         - Manufacturer: {manufacturer}\n\
         - Aircraft: {aircraft}\n\
         - Brand/add-on: {brand}\n\
         - Description: {description}\n\
         - MSFS version: {version}\n\
         - File name: {file_name}\n\
         - File size: {file_size}\n\
         - Screenshots: {screenshots}\n\
         \n\
         Criteria:\n\
         1. The livery name is clear and descriptive.\n\
         2. Manufacturer and aircraft are filled in correctly.\n\
         3. The brand/add-on is compatible with the aircraft.\n\
         4. The file name is appropriate (for example .zip or .7z).\n\
         5. The file size is reasonable (usually between 50 MB and 500 MB).\n\
         6. There is at least one screenshot.\n\
         7. The description is sufficient.\n\
         \n\
         Answer with JSON: {{\"approved\": true or false, \"notes\": \"reason for the decision\"}}",
        name = livery.livery_name,
        manufacturer = livery.manufacturer,
        aircraft = livery.aircraft,
        brand = livery.brand,
        description = or_unset(livery.description.as_deref()),
        version = livery
            .msfs_version
            .map(|v| v.to_string())
            .unwrap_or_else(|| "not specified".to_string()),
        file_name = or_unset(livery.file_name.as_deref()),
        file_size = file_size,
        screenshots = livery.screenshots.len(),
    )
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct VerdictPayload {
    approved: bool,
    notes: String,
}

/// Parses the model's JSON answer into a verdict.
pub fn parse_verdict(content: &str) -> Result<ReviewVerdict, AppError> {
    let payload: VerdictPayload = serde_json::from_str(content.trim()).map_err(|e| {
        AppError::InternalError(format!("Unparsable review response '{}': {}", content, e))
    })?;

    Ok(ReviewVerdict {
        approved: payload.approved,
        notes: payload.notes,
    })
}

/// Reviewer backed by an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct LlmReviewer {
    http_client: reqwest::Client,
    config: LlmConfig,
}

impl LlmReviewer {
    pub fn new(http_client: reqwest::Client, config: LlmConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn request_body(&self, livery: &Livery) -> serde_json::Value {
        json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": build_review_prompt(livery) },
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "livery_review",
                    "strict": true,
                    "schema": {
                        "type": "object",
                        "properties": {
                            "approved": { "type": "boolean" },
                            "notes": { "type": "string" },
                        },
                        "required": ["approved", "notes"],
                        "additionalProperties": false,
                    },
                },
            },
        })
    }
}

impl LiveryReviewer for LlmReviewer {
    async fn review(&self, livery: &Livery) -> Result<ReviewVerdict, AppError> {
        let mut request = self
            .http_client
            .post(&self.config.api_url)
            .json(&self.request_body(livery));

        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let completion = request
            .send()
            .await?
            .error_for_status()?
            .json::<ChatCompletion>()
            .await?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::InternalError("Empty review response".to_string()))?;

        parse_verdict(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_model_verdict() {
        let verdict = parse_verdict(r#" {"approved": true, "notes": "Looks good"} "#).unwrap();

        assert!(verdict.approved);
        assert_eq!(verdict.notes, "Looks good");
    }

    #[test]
    fn rejects_free_text_answers() {
        assert!(parse_verdict("Sure! This livery is approved.").is_err());
        assert!(parse_verdict(r#"{"approved": "yes"}"#).is_err());
    }
}

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{SummaryProvider, SummaryRequest};
use crate::llm::prompts::{build_minutes_prompt, MINUTES_SYSTEM_PROMPT};

const DEFAULT_PERPLEXITY_ENDPOINT: &str = "https://api.perplexity.ai";
const DEFAULT_PERPLEXITY_MODEL: &str = "sonar-pro";

pub struct PerplexityClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
    max_tokens: u32,
    temperature: f32,
}

impl PerplexityClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.summarization.api_key.trim().to_string();
        if api_key.is_empty() {
            anyhow::bail!(
                "Perplexity API key is missing. Set summarization.api_key in config or PERPLEXITY_API_KEY."
            );
        }

        let model = if settings.summarization.model.trim().is_empty() {
            DEFAULT_PERPLEXITY_MODEL.to_string()
        } else {
            settings.summarization.model.trim().to_string()
        };

        let endpoint = if settings.summarization.endpoint.trim().is_empty() {
            DEFAULT_PERPLEXITY_ENDPOINT.to_string()
        } else {
            settings
                .summarization
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(45))
                .build()
                .context("Failed to build Perplexity HTTP client")?,
            api_key,
            model,
            endpoint,
            max_tokens: settings.summarization.max_tokens,
            temperature: settings.summarization.temperature,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl SummaryProvider for PerplexityClient {
    async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: MINUTES_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_minutes_prompt(request.transcript),
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("Perplexity request failed")?;

        let response = response
            .error_for_status()
            .context("Perplexity returned an error status")?;

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse Perplexity response")?;

        let minutes = payload
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .context("Perplexity response did not contain minutes text")?;

        Ok(minutes)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

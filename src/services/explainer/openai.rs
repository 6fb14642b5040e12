use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{Product, User},
    services::explainer::Explainer,
};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const MAX_TOKENS: u32 = 150;
const TEMPERATURE: f64 = 0.7;
/// Only the top recommendations go into the prompt to keep it concise
const PROMPT_PRODUCT_LIMIT: usize = 3;

const SYSTEM_PROMPT: &str = "You are a helpful e-commerce recommendation assistant \
that explains product suggestions in a friendly, natural way.";

/// OpenAI-backed explanation generator
///
/// Sends a chat-completion request describing the user's behavior and the
/// recommended products, and returns the model's reply verbatim. Errors map
/// to `AppError::ExternalApi`; the caller decides what to substitute.
#[derive(Clone)]
pub struct OpenAiExplainer {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl OpenAiExplainer {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            model,
        }
    }

    /// Builds the user prompt from the behavior summary and product list
    fn build_prompt(&self, user: &User, products: &[Product], behavior: &str) -> String {
        let product_list = products
            .iter()
            .take(PROMPT_PRODUCT_LIMIT)
            .map(|product| {
                format!(
                    "- {} (Category: {}, Price: ${})",
                    product.name, product.category, product.price
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "You are a helpful e-commerce shopping assistant.\n\n\
             User: {name}\n\
             User's Recent Behavior: {behavior}\n\n\
             Recommended Products:\n{product_list}\n\n\
             Generate a friendly, personalized explanation (2-3 sentences) of why these \
             products are recommended to {name} based on their browsing and purchase \
             history. Make it sound natural and conversational.",
            name = user.name,
            behavior = behavior,
            product_list = product_list,
        )
    }
}

#[async_trait::async_trait]
impl Explainer for OpenAiExplainer {
    async fn explain(
        &self,
        user: &User,
        products: &[Product],
        behavior: &str,
    ) -> AppResult<String> {
        let url = format!("{}{}", self.api_url, COMPLETIONS_PATH);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: self.build_prompt(user, products, behavior),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                "OpenAI API request failed"
            );
            return Err(AppError::ExternalApi(format!(
                "OpenAI API returned status {}: {}",
                status, body
            )));
        }

        let chat: ChatResponse = response.json().await?;

        let explanation = chat
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                AppError::ExternalApi("OpenAI response contained no choices".to_string())
            })?;

        tracing::info!(
            user_id = %user.id,
            products = products.len(),
            provider = "openai",
            "Explanation generated"
        );

        Ok(explanation)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

// External dependencies
use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::{ParseError, Url};

// Internal dependencies
use crate::ai::reasoning::{build_analysis_prompt, build_reasoning_prompt, merge_enhanced_prompt};
use crate::ai::{Enhancer, GeminiError};
use crate::config::GeminiConfig;
use crate::project::ProjectDescriptor;
use crate::utils::validation::is_plausible_api_key;

const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;
const TOP_K: u32 = 40;
const ENHANCE_MAX_OUTPUT_TOKENS: u32 = 2048;
const RECOMMEND_MAX_OUTPUT_TOKENS: u32 = 1024;

// ============================================================================
// Gemini API Structures
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    top_p: f32,
    top_k: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentRequest {
    fn new(prompt: String, max_output_tokens: u32) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens,
                top_p: TOP_P,
                top_k: TOP_K,
            },
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    fn into_text(self) -> Result<String, GeminiError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GeminiError::MalformedResponse("no candidates".to_string()))?;

        let content = candidate
            .content
            .ok_or_else(|| GeminiError::MalformedResponse("candidate has no content".to_string()))?;

        content
            .parts
            .into_iter()
            .next()
            .and_then(|part| part.text)
            .ok_or_else(|| GeminiError::MalformedResponse("content has no text part".to_string()))
    }
}

// ============================================================================
// Client Implementation
// ============================================================================

/// One-shot client for Gemini's `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &GeminiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// True when a key is present and passes the length gate.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(is_plausible_api_key)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Enhances `base_prompt`, surfacing any failure to the caller.
    pub async fn try_enhance(
        &self,
        descriptor: &ProjectDescriptor,
        base_prompt: &str,
    ) -> Result<String, GeminiError> {
        if !self.is_configured() {
            return Err(GeminiError::NotConfigured);
        }

        info!("Attempting to enhance prompt with Gemini");
        let reasoning_prompt = build_reasoning_prompt(descriptor, base_prompt);
        let enhanced_content = self
            .generate_text(reasoning_prompt, ENHANCE_MAX_OUTPUT_TOKENS)
            .await?;

        info!("Enhancement successful");
        Ok(merge_enhanced_prompt(base_prompt, &enhanced_content))
    }

    /// A short architectural analysis of the descriptor, or `None` when the
    /// client is not configured or the request fails.
    pub async fn get_recommendations(&self, descriptor: &ProjectDescriptor) -> Option<String> {
        if !self.is_configured() {
            debug!("Skipping recommendations, no usable API key");
            return None;
        }

        let analysis_prompt = build_analysis_prompt(descriptor);
        match self
            .generate_text(analysis_prompt, RECOMMEND_MAX_OUTPUT_TOKENS)
            .await
        {
            Ok(text) => Some(text),
            Err(e) => {
                error!("Error getting architectural recommendations: {e}");
                None
            }
        }
    }

    /// `{base_url}/v1beta/models/{model}:generateContent?key=...`, keeping any
    /// path prefix on `base_url`.
    fn endpoint(&self, api_key: &str) -> Result<Url, GeminiError> {
        let method = format!("{}:generateContent", self.model);
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["v1beta", "models", method.as_str()]);
        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url)
    }

    async fn generate_text(
        &self,
        prompt: String,
        max_output_tokens: u32,
    ) -> Result<String, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::NotConfigured)?;
        let url = self.endpoint(api_key)?;
        let request = GenerateContentRequest::new(prompt, max_output_tokens);

        debug!(
            "Sending request to Gemini model {}, max output tokens: {max_output_tokens}",
            self.model
        );

        // reqwest errors carry the request URL, and the URL carries the key.
        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Status { status, body });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::MalformedResponse(e.without_url().to_string()))?;

        debug!("Gemini API response received");
        body.into_text()
    }
}

#[async_trait]
impl Enhancer for GeminiClient {
    fn is_configured(&self) -> bool {
        GeminiClient::is_configured(self)
    }

    async fn enhance(&self, descriptor: &ProjectDescriptor, base_prompt: &str) -> String {
        if !self.is_configured() {
            debug!("No usable API key provided, returning base prompt");
            return base_prompt.to_string();
        }

        match self.try_enhance(descriptor, base_prompt).await {
            Ok(enhanced) => enhanced,
            Err(e) => {
                error!("Error enhancing prompt with Gemini: {e}");
                warn!("Failed to enhance prompt with Gemini. Falling back to standard generation.");
                base_prompt.to_string()
            }
        }
    }
}

/// Gemini vision provider
///
/// Sends the room photo inline with a structured-analysis prompt to the
/// `generateContent` REST endpoint and parses the JSON the model returns.
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::RoomAnalysis,
};

use super::{parse_analysis_text, strip_data_url_prefix, VisionProvider};

const ANALYSIS_PROMPT: &str = r#"Analyze this interior space and return a JSON response with:
1. roomType: The type of room (living room, bedroom, kitchen, bathroom, office, dining room, etc.)
2. currentStyle: The current design style (modern, traditional, minimalist, bohemian, industrial, scandinavian, etc.)
3. colorScheme: Array of main colors present (e.g., ["white", "gray", "blue"])
4. furniture: Array of furniture items visible (e.g., ["sofa", "coffee table", "tv stand"])
5. improvements: Array of 3-5 suggested improvements for the space
6. confidence: Your confidence level as a decimal (0.0 to 1.0)

Return ONLY valid JSON, no other text. Example format:
{
  "roomType": "Living Room",
  "currentStyle": "Modern",
  "colorScheme": ["white", "gray", "blue"],
  "furniture": ["sofa", "coffee table", "tv stand"],
  "improvements": ["Add plants for warmth", "Area rug to define space"],
  "confidence": 0.75
}"#;

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text { text: &'a str },
    InlineData { inline_data: InlineData<'a> },
}

#[derive(Debug, Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
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
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text)
    }
}

#[derive(Clone)]
pub struct GeminiVisionProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiVisionProvider {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait::async_trait]
impl VisionProvider for GeminiVisionProvider {
    async fn analyze_room_image(&self, image_base64: &str) -> AppResult<RoomAnalysis> {
        let data = strip_data_url_prefix(image_base64).trim();
        if data.is_empty() {
            return Err(AppError::InvalidInput("Image data cannot be empty".to_string()));
        }

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: ANALYSIS_PROMPT,
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: "image/jpeg",
                            data,
                        },
                    },
                ],
            }],
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Gemini API returned status {}: {}",
                status, body
            )));
        }

        let content: GenerateContentResponse = response.json().await?;
        let text = content.first_text().ok_or_else(|| {
            AppError::ExternalApi("Gemini response contained no text".to_string())
        })?;

        let analysis = parse_analysis_text(&text)?;

        tracing::info!(
            provider = self.name(),
            room_type = %analysis.room_type,
            style = %analysis.current_style,
            confidence = analysis.confidence,
            "Room image analyzed"
        );

        Ok(analysis)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

/// Vision model abstraction
///
/// A provider turns a base64 room photo into a [`RoomAnalysis`]. Providers report failures
/// as errors; [`analyze_or_fallback`] turns any failure into the empty fallback record so the
/// recommendation pipeline never fails because the model is unreachable.
use crate::{
    error::{AppError, AppResult},
    models::RoomAnalysis,
};

pub mod gemini;
pub mod sample;

pub use gemini::GeminiVisionProvider;
pub use sample::SampleVisionProvider;

/// Trait for room image analysis providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait VisionProvider: Send + Sync {
    /// Analyze a base64 encoded room image (an optional `data:` URL prefix is allowed)
    async fn analyze_room_image(&self, image_base64: &str) -> AppResult<RoomAnalysis>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Runs the provider, substituting [`RoomAnalysis::unavailable`] on failure
pub async fn analyze_or_fallback(provider: &dyn VisionProvider, image_base64: &str) -> RoomAnalysis {
    match provider.analyze_room_image(image_base64).await {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::warn!(
                provider = provider.name(),
                error = %e,
                "Vision analysis failed, using fallback analysis"
            );
            RoomAnalysis::unavailable()
        }
    }
}

/// Removes a `data:image/...;base64,` prefix if present
pub fn strip_data_url_prefix(image: &str) -> &str {
    match image.split_once("base64,") {
        Some((_, data)) => data,
        None => image,
    }
}

/// Parses model output that may wrap its JSON in markdown code fences
pub fn parse_analysis_text(text: &str) -> AppResult<RoomAnalysis> {
    let text = text.trim();
    let json = if let Some((_, rest)) = text.split_once("```json") {
        rest.split("```").next().unwrap_or(rest)
    } else if let Some((_, rest)) = text.split_once("```") {
        rest.split("```").next().unwrap_or(rest)
    } else {
        text
    };

    serde_json::from_str(json.trim()).map_err(|e| {
        tracing::error!(error = %e, response = %text, "Failed to parse vision model response");
        AppError::ExternalApi(format!("Failed to parse vision model response: {}", e))
    })
}

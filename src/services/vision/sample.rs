use crate::{error::AppResult, models::RoomAnalysis};

use super::VisionProvider;

/// Offline provider returning a fixed living-room analysis
///
/// Used when no vision API key is configured so the pipeline stays usable in development.
#[derive(Debug, Clone, Default)]
pub struct SampleVisionProvider;

impl SampleVisionProvider {
    pub fn sample_analysis() -> RoomAnalysis {
        RoomAnalysis {
            room_type: "Living Room".to_string(),
            current_style: "Modern".to_string(),
            color_scheme: vec!["white".to_string(), "gray".to_string(), "blue".to_string()],
            furniture: vec![
                "sofa".to_string(),
                "coffee table".to_string(),
                "tv stand".to_string(),
            ],
            improvements: vec![
                "Add plants for warmth".to_string(),
                "Better lighting with floor lamps".to_string(),
                "Colorful throw pillows".to_string(),
                "Wall art or decorations".to_string(),
                "Area rug to define space".to_string(),
            ],
            confidence: 0.75,
        }
    }
}

#[async_trait::async_trait]
impl VisionProvider for SampleVisionProvider {
    async fn analyze_room_image(&self, _image_base64: &str) -> AppResult<RoomAnalysis> {
        tracing::debug!(provider = self.name(), "Returning sample room analysis");
        Ok(Self::sample_analysis())
    }

    fn name(&self) -> &'static str {
        "sample"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_provider_ignores_image() {
        let provider = SampleVisionProvider;
        let first = provider.analyze_room_image("AAAA").await.unwrap();
        let second = provider.analyze_room_image("").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.room_type, "Living Room");
        assert_eq!(first.furniture.len(), 3);
        assert_eq!(first.confidence, 0.75);
    }
}

use std::time::Duration;

use futures_util::future::join_all;
use gemini::models::text_to_image::{
    TextToImage, TextToImageRequest, TextToImageResponse,
};
use tokio::time::timeout;
use tracing::warn;

use crate::{prompt::build_image_prompt, slides::SlideDraft};

/// Image generation is a secondary enhancement; each call gets a short
/// independent bound so one slow render cannot hold the request.
pub const IMAGE_TIMEOUT: Duration = Duration::from_secs(8);

/// Renders one image per draft, all calls started together. Each call is
/// raced against its own timeout; failure or timeout becomes `None` at
/// that position without affecting siblings. The returned vector has the
/// same length and order as `drafts`.
pub async fn render_all<I: TextToImage>(
    client: &I,
    topic: &str,
    drafts: &[SlideDraft],
    per_image_timeout: Duration,
) -> Vec<Option<TextToImageResponse>> {
    let renders = drafts.iter().enumerate().map(|(index, draft)| async move {
        let prompt = build_image_prompt(topic, draft);
        let request = TextToImageRequest::from_prompt(&prompt);

        match timeout(per_image_timeout, client.imagen_3_generate(request))
            .await
        {
            Ok(Ok(image)) => Some(image),
            Ok(Err(e)) => {
                warn!(index, "image generation failed: {:?}", e);
                None
            }
            // the in-flight call is abandoned, its late result dropped
            Err(_) => {
                warn!(
                    index,
                    "image generation timed out after {:?}",
                    per_image_timeout
                );
                None
            }
        }
    });

    join_all(renders).await
}

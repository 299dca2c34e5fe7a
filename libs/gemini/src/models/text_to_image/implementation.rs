use anyhow::{ensure, Context};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;

use crate::models::Models;

use super::{
    PredictResponse, TextToImage, TextToImageResponse, IMAGEN_3_GENERATE,
};

impl TextToImage for Models {
    async fn imagen_3_generate(
        &self,
        request: super::TextToImageRequest,
    ) -> anyhow::Result<TextToImageResponse> {
        let text = self.string_response(request, IMAGEN_3_GENERATE).await?;

        let response: PredictResponse = serde_json::from_str(&text)
            .context("failed to parse predict response")?;

        let prediction = response
            .predictions
            .into_iter()
            .next()
            .context("predict response carried no predictions")?;

        ensure!(
            prediction.mime_type.starts_with("image/"),
            "predict response is not an image: {}",
            prediction.mime_type
        );

        let bytes = STANDARD
            .decode(prediction.bytes_base64_encoded)
            .context("failed to decode image payload")?;

        Ok(TextToImageResponse {
            mime_type: prediction.mime_type,
            bytes: Bytes::from(bytes),
        })
    }
}

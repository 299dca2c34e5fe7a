pub mod implementation;

use bytes::Bytes;
use reqwest::Body;
use serde::{Deserialize, Serialize};

static IMAGEN_3_GENERATE: &str = "imagen-3.0-generate-002:predict";

pub trait TextToImage {
    fn imagen_3_generate(
        &self,
        request: TextToImageRequest,
    ) -> impl std::future::Future<Output = anyhow::Result<TextToImageResponse>>
           + Send;
}

#[derive(Debug, Serialize, Default)]
pub struct TextToImageRequest {
    pub instances: Vec<Instance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
}

impl TextToImageRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            instances: vec![Instance {
                prompt: prompt.to_string(),
            }],
            parameters: Some(Parameters {
                sample_count: 1,
                aspect_ratio: None,
            }),
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct Instance {
    pub prompt: String,
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    pub sample_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
}

/// Decoded image returned by the predict endpoint.
#[derive(Debug)]
pub struct TextToImageResponse {
    pub mime_type: String,
    pub bytes: Bytes,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    mime_type: String,
    bytes_base64_encoded: String,
}

impl Into<Body> for TextToImageRequest {
    fn into(self) -> Body {
        let body = serde_json::to_string(&self).unwrap();
        Body::from(body)
    }
}

use reqwest::{
    header::{HeaderMap, HeaderValue},
    Body, Client,
};
use thiserror::Error;

pub mod text_generation;
pub mod text_to_image;

static DEFAULT_BASE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta";

/// Non-success response from the Generative Language API.
#[derive(Debug, Error)]
#[error("status code: {status}, response: {body}")]
pub struct StatusError {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct Models {
    base_url: String,
    client: Client,
}

impl Models {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_str("*/*").unwrap());
        headers.insert(
            "Content-Type",
            HeaderValue::from_str("application/json").unwrap(),
        );
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key).unwrap(),
        );

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()
            .unwrap();

        Self {
            base_url: base_url.to_string(),
            client,
        }
    }

    async fn string_response<R: Into<Body>>(
        &self,
        request: R,
        method: &str,
    ) -> anyhow::Result<String> {
        let response = self
            .client
            .post(format!("{}/models/{}", self.base_url, method))
            .body(request)
            .send()
            .await?;

        let status_code = response.status();
        let text = response.text().await?;

        if !status_code.is_success() {
            return Err(StatusError {
                status: status_code.as_u16(),
                body: text,
            }
            .into());
        }

        Ok(text)
    }
}

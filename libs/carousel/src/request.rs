use serde_json::Value;

use crate::error::CarouselError;

pub const MIN_SLIDE_COUNT: usize = 3;
pub const MAX_SLIDE_COUNT: usize = 10;
pub const DEFAULT_SLIDE_COUNT: usize = 5;

/// A validated generation request. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    topic: String,
    slide_count: usize,
}

impl GenerationRequest {
    /// Validates a raw request body.
    ///
    /// `topic` must be a string with non-whitespace content. `total` is
    /// coerced to an integer (default 5 when absent or non-numeric) and
    /// silently clamped to [3,10], so slightly malformed clients still
    /// get a usable response.
    pub fn from_value(body: &Value) -> Result<Self, CarouselError> {
        let topic = body
            .get("topic")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|topic| !topic.is_empty())
            .ok_or_else(|| {
                CarouselError::Validation(
                    "Campo \"topic\" é obrigatório.".to_string(),
                )
            })?;

        Ok(Self {
            topic: topic.to_string(),
            slide_count: slide_count_from(body.get("total")),
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }
}

fn slide_count_from(total: Option<&Value>) -> usize {
    let requested = total
        .and_then(|value| {
            value.as_i64().or_else(|| {
                value.as_str().and_then(|s| s.trim().parse::<i64>().ok())
            })
        })
        .unwrap_or(DEFAULT_SLIDE_COUNT as i64);

    requested.clamp(MIN_SLIDE_COUNT as i64, MAX_SLIDE_COUNT as i64) as usize
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_accepts_topic_and_total() {
        let request = GenerationRequest::from_value(
            &json!({"topic": "produtividade", "total": 7}),
        )
        .unwrap();

        assert_eq!(request.topic(), "produtividade");
        assert_eq!(request.slide_count(), 7);
    }

    #[test]
    fn test_trims_topic() {
        let request =
            GenerationRequest::from_value(&json!({"topic": "  vendas  "}))
                .unwrap();

        assert_eq!(request.topic(), "vendas");
    }

    #[test]
    fn test_rejects_missing_or_blank_topic() {
        for body in [
            json!({}),
            json!({"topic": ""}),
            json!({"topic": "   "}),
            json!({"topic": 42}),
            json!({"topic": null}),
        ] {
            let result = GenerationRequest::from_value(&body);

            assert!(matches!(
                result,
                Err(CarouselError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_clamps_total() {
        let cases = [
            (json!({"topic": "x", "total": 0}), 3),
            (json!({"topic": "x", "total": 1}), 3),
            (json!({"topic": "x", "total": 15}), 10),
            (json!({"topic": "x", "total": 100}), 10),
            (json!({"topic": "x"}), 5),
            (json!({"topic": "x", "total": "7"}), 7),
            (json!({"topic": "x", "total": "abc"}), 5),
            (json!({"topic": "x", "total": null}), 5),
        ];

        for (body, expected) in cases {
            let request = GenerationRequest::from_value(&body).unwrap();

            assert_eq!(request.slide_count(), expected, "body: {}", body);
        }
    }
}

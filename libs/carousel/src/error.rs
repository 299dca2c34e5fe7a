use std::time::Duration;

use thiserror::Error;

/// Failure classes of the generation pipeline.
///
/// `Validation` and `Configuration` reach the caller; provider, timeout and
/// parse failures of the text stage are absorbed by the pipeline, which
/// substitutes fallback content and reports the degradation via `warning`.
#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("{0}")]
    Validation(String),

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("provider error (status {status:?}): {body}")]
    Provider {
        status: Option<u16>,
        body: String,
    },

    #[error("provider call exceeded {}s", .0.as_secs())]
    ProviderTimeout(Duration),

    #[error("model output was not parseable: {0}")]
    Parse(String),
}

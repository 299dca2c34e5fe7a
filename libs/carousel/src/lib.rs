pub mod error;
pub mod fallback;
pub mod images;
pub mod parse;
pub mod pipeline;
pub mod prompt;
pub mod request;
pub mod slides;

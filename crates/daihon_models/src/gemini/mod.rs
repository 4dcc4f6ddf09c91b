//! Google Gemini REST client.
//!
//! - [`GeminiClient`] sends one `generateContent` call per request
//! - [`GeminiFactory`] builds clients from a user-entered API key
//! - [`GeminiConfig`] carries model and sampling settings

mod client;
mod config;
mod dto;
mod factory;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use dto::{
    GeminiCandidate, GeminiContent, GeminiPart, GeminiRequest, GeminiRequestBuilder,
    GeminiResponse, GenerationConfig, UsageMetadata,
};
pub use factory::GeminiFactory;

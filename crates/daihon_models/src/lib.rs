//! Generation backends for daihon.
//!
//! Currently a single provider: Google Gemini over its REST
//! `generateContent` endpoint.
//!
//! # Example
//!
//! ```no_run
//! use daihon_core::GenerateRequest;
//! use daihon_interface::{GeneratorFactory, TextGenerator};
//! use daihon_models::{GeminiConfig, GeminiFactory};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let factory = GeminiFactory::new(GeminiConfig::default());
//! let client = factory.connect("your-api-key")?;
//! client.verify().await?;
//!
//! let response = client
//!     .generate(&GenerateRequest::from_prompt("短い物語のタイトル案を3つ"))
//!     .await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod metrics;

pub use gemini::{
    GeminiCandidate, GeminiClient, GeminiConfig, GeminiContent, GeminiFactory, GeminiPart,
    GeminiRequest, GeminiRequestBuilder, GeminiResponse, GenerationConfig, UsageMetadata,
};
pub use metrics::{LlmMetrics, classify_error};

//! Scripted generator doubles for session tests.

#![allow(dead_code)]

use async_trait::async_trait;
use daihon_core::{GenerateRequest, GenerateResponse, TokenUsage};
use daihon_error::{DaihonResult, InvocationError, InvocationErrorKind};
use daihon_interface::{GeneratorFactory, TextGenerator, VERIFY_PROMPT};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum StubReply {
    /// Text with an optional total token count
    Text(String, Option<u64>),
    /// Fail with the given kind
    Fail(InvocationErrorKind),
}

impl StubReply {
    pub fn text(text: &str, tokens: u64) -> Self {
        StubReply::Text(text.to_string(), Some(tokens))
    }

    pub fn without_usage(text: &str) -> Self {
        StubReply::Text(text.to_string(), None)
    }

    pub fn quota_exceeded() -> Self {
        StubReply::Fail(InvocationErrorKind::Http {
            status_code: 429,
            message: "Resource has been exhausted".to_string(),
        })
    }
}

/// Shared script and call log.
#[derive(Debug, Default)]
pub struct StubBackend {
    replies: Mutex<VecDeque<StubReply>>,
    prompts: Mutex<Vec<String>>,
    verifications: AtomicUsize,
}

impl StubBackend {
    pub fn new(replies: impl IntoIterator<Item = StubReply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            ..Default::default()
        })
    }

    pub fn push(&self, reply: StubReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Prompts of generation calls, excluding trial calls.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

/// Generator answering from a [`StubBackend`] script.
#[derive(Debug, Clone)]
pub struct StubGenerator {
    backend: Arc<StubBackend>,
    key: String,
    accepted: bool,
}

impl StubGenerator {
    pub fn new(backend: Arc<StubBackend>) -> Self {
        Self {
            backend,
            key: "stub-key".to_string(),
            accepted: true,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, request: &GenerateRequest) -> DaihonResult<GenerateResponse> {
        if request.prompt == VERIFY_PROMPT {
            self.backend.verifications.fetch_add(1, Ordering::SeqCst);
            return if self.accepted {
                Ok(GenerateResponse::new("OK", None))
            } else {
                Err(InvocationError::new(InvocationErrorKind::Http {
                    status_code: 400,
                    message: "API key not valid".to_string(),
                })
                .into())
            };
        }

        self.backend
            .prompts
            .lock()
            .unwrap()
            .push(request.prompt.clone());
        let reply = self.backend.replies.lock().unwrap().pop_front();
        match reply {
            Some(StubReply::Text(text, tokens)) => {
                Ok(GenerateResponse::new(text, tokens.map(TokenUsage::total)))
            }
            Some(StubReply::Fail(kind)) => Err(InvocationError::new(kind).into()),
            None => Err(InvocationError::new(InvocationErrorKind::Request(
                "no scripted reply".to_string(),
            ))
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

/// Factory handing out [`StubGenerator`]s; keys starting with `bad` are
/// rejected by the trial call.
#[derive(Debug)]
pub struct StubFactory {
    backend: Arc<StubBackend>,
    connects: AtomicUsize,
}

impl StubFactory {
    pub fn new(backend: Arc<StubBackend>) -> Self {
        Self {
            backend,
            connects: AtomicUsize::new(0),
        }
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

impl GeneratorFactory for StubFactory {
    type Generator = StubGenerator;

    fn connect(&self, credential: &str) -> DaihonResult<StubGenerator> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(StubGenerator {
            backend: Arc::clone(&self.backend),
            key: credential.to_string(),
            accepted: !credential.starts_with("bad"),
        })
    }
}

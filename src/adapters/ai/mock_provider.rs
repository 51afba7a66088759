//! Mock Completion Provider for testing.
//!
//! Provides a configurable mock implementation of the CompletionProvider
//! port, allowing tests to run without calling the real completion API.
//!
//! # Features
//!
//! - Pre-configured responses
//! - Simulated delays for timeout testing
//! - Error injection for fallback testing
//! - Prompt recording for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockCompletionProvider::new()
//!     .with_response("Hello, I'm the assistant!")
//!     .with_error(MockError::Unavailable { status: 500 });
//!
//! assert_eq!(provider.complete("hi").await?, "Hello, I'm the assistant!");
//! assert!(provider.complete("hi").await.is_err());
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{CompletionError, CompletionProvider, ProviderInfo};

/// Mock completion provider for testing.
#[derive(Debug, Clone)]
pub struct MockCompletionProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Provider info to return.
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Prompts received, in order.
    prompts: Arc<Mutex<Vec<String>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
enum MockResponse {
    /// Return this text.
    Success(String),
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited,
    /// Simulate a rejected API key.
    AuthenticationFailed,
    /// Simulate a non-success status.
    Unavailable { status: u16 },
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u64 },
    /// Simulate a response without choices.
    EmptyResponse,
}

impl From<MockError> for CompletionError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited => CompletionError::RateLimited,
            MockError::AuthenticationFailed => CompletionError::AuthenticationFailed,
            MockError::Unavailable { status } => {
                CompletionError::unavailable(status, "mock failure")
            }
            MockError::Network { message } => CompletionError::network(message),
            MockError::Timeout { timeout_secs } => CompletionError::Timeout { timeout_secs },
            MockError::EmptyResponse => CompletionError::EmptyResponse,
        }
    }
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Default for MockCompletionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCompletionProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        locked(&self.responses).push_back(MockResponse::Success(content.into()));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        locked(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        locked(&self.prompts).len()
    }

    /// Returns every prompt received.
    pub fn prompts(&self) -> Vec<String> {
        locked(&self.prompts).clone()
    }

    /// Gets the next response or a default.
    fn next_response(&self) -> MockResponse {
        locked(&self.responses)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success("Mock response".to_string()))
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        locked(&self.prompts).push(prompt.to_string());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success(content) => Ok(content),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

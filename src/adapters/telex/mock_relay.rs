//! Mock Message Relay for testing.
//!
//! Records every delivered message and can be told to reject sends.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::foundation::UserId;
use crate::ports::{MessageRelay, RelayError};

/// A message captured by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub to: String,
    pub content: String,
}

/// In-process relay that remembers what it was asked to send.
#[derive(Debug, Clone, Default)]
pub struct MockMessageRelay {
    sent: Arc<Mutex<Vec<SentMessage>>>,
    failing: Arc<AtomicBool>,
}

impl MockMessageRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// A relay whose sends are all rejected with a 500.
    pub fn failing() -> Self {
        let relay = Self::default();
        relay.set_failing(true);
        relay
    }

    /// Switches failure injection on or off.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Messages delivered so far, oldest first.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.lock().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SentMessage>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl MessageRelay for MockMessageRelay {
    async fn send(&self, to: &UserId, content: &str) -> Result<(), RelayError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RelayError::Rejected {
                status: 500,
                body: "mock relay failure".to_string(),
            });
        }

        self.lock().push(SentMessage {
            to: to.as_str().to_string(),
            content: content.to_string(),
        });
        Ok(())
    }
}

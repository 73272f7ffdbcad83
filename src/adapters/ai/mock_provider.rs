//! Mock Provider - scripted ReplyGenerator for tests.
//!
//! Returns queued outcomes in order, then falls back to a default reply.
//! Records every prompt it receives so tests can assert on what the engine
//! actually asked for.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{ReplyError, ReplyGenerator};

/// One scripted outcome for a `generate` call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Succeed with the given reply.
    Reply(String),
    /// Fail as rate limited.
    RateLimited,
    /// Fail as temporarily unavailable.
    Unavailable,
    /// Fail with a timeout.
    Timeout,
}

/// Test double that replays queued outcomes.
pub struct MockReplyGenerator {
    outcomes: Mutex<Vec<MockOutcome>>,
    prompts: Mutex<Vec<String>>,
    default_reply: String,
}

impl MockReplyGenerator {
    /// Creates a generator that always succeeds with `default_reply`.
    pub fn new(default_reply: impl Into<String>) -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
            default_reply: default_reply.into(),
        }
    }

    /// Queues an outcome for the next unconsumed call.
    pub fn push_outcome(&self, outcome: MockOutcome) {
        self.outcomes.lock().unwrap().push(outcome);
    }

    /// Returns every prompt received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Returns how many times `generate` was called.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl Default for MockReplyGenerator {
    fn default() -> Self {
        Self::new("mock reply")
    }
}

#[async_trait]
impl ReplyGenerator for MockReplyGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ReplyError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let next = {
            let mut outcomes = self.outcomes.lock().unwrap();
            if outcomes.is_empty() {
                None
            } else {
                Some(outcomes.remove(0))
            }
        };

        match next {
            None => Ok(self.default_reply.clone()),
            Some(MockOutcome::Reply(text)) => Ok(text),
            Some(MockOutcome::RateLimited) => Err(ReplyError::rate_limited(30)),
            Some(MockOutcome::Unavailable) => {
                Err(ReplyError::unavailable("mock provider unavailable"))
            }
            Some(MockOutcome::Timeout) => Err(ReplyError::Timeout { timeout_secs: 20 }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_default_reply_when_queue_empty() {
        let mock = MockReplyGenerator::new("hello from mock");
        let reply = mock.generate("what is rust?").await.unwrap();
        assert_eq!(reply, "hello from mock");
    }

    #[tokio::test]
    async fn consumes_queued_outcomes_in_order() {
        let mock = MockReplyGenerator::default();
        mock.push_outcome(MockOutcome::Reply("first".to_string()));
        mock.push_outcome(MockOutcome::RateLimited);

        assert_eq!(mock.generate("a").await.unwrap(), "first");
        assert!(matches!(
            mock.generate("b").await,
            Err(ReplyError::RateLimited { .. })
        ));
        // Queue exhausted, back to the default.
        assert_eq!(mock.generate("c").await.unwrap(), "mock reply");
    }

    #[tokio::test]
    async fn records_prompts_and_call_count() {
        let mock = MockReplyGenerator::default();
        mock.generate("one?").await.unwrap();
        mock.generate("two?").await.unwrap();

        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.prompts(), vec!["one?", "two?"]);
    }

    #[tokio::test]
    async fn failure_outcomes_map_to_errors() {
        let mock = MockReplyGenerator::default();
        mock.push_outcome(MockOutcome::Unavailable);
        mock.push_outcome(MockOutcome::Timeout);

        assert!(matches!(
            mock.generate("a").await,
            Err(ReplyError::Unavailable { .. })
        ));
        assert!(matches!(
            mock.generate("b").await,
            Err(ReplyError::Timeout { .. })
        ));
    }
}

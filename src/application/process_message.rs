//! Process Message - the one application-level use case.
//!
//! Orchestrates a single conversational turn: load the session, run the
//! engine, persist the result, export the transcript. Calls for the same
//! user are serialized so two concurrent messages can never interleave
//! reads and writes of one session; calls for different users run freely
//! in parallel.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::intake::ConversationEngine;
use crate::ports::{ReplyGenerator, SessionStore, SessionStoreError, TranscriptSink};

/// Handles one inbound chat message end to end.
pub struct ProcessMessageHandler {
    engine: Arc<ConversationEngine>,
    store: Arc<dyn SessionStore>,
    generator: Arc<dyn ReplyGenerator>,
    transcript: Arc<dyn TranscriptSink>,
    /// Per-user turn locks; entries are created on first contact and kept
    /// for the process lifetime, same as sessions.
    user_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ProcessMessageHandler {
    /// Wires the use case over its collaborators.
    pub fn new(
        engine: Arc<ConversationEngine>,
        store: Arc<dyn SessionStore>,
        generator: Arc<dyn ReplyGenerator>,
        transcript: Arc<dyn TranscriptSink>,
    ) -> Self {
        Self {
            engine,
            store,
            generator,
            transcript,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Processes one message for the given user and returns the reply.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the session cannot be loaded or saved.
    /// Transcript export failures are logged and swallowed; they never fail
    /// the turn.
    pub async fn process(&self, user_id: &str, message: &str) -> Result<String, SessionStoreError> {
        let lock = self.lock_for(user_id).await;
        let _turn = lock.lock().await;

        let mut session = self.store.get_or_create(user_id).await?;

        tracing::debug!(
            user_id,
            session_id = %session.id(),
            script_index = session.script_index(),
            "processing message"
        );

        let reply = self
            .engine
            .handle_message(&mut session, message, self.generator.as_ref())
            .await;

        let history = session.history().to_vec();
        self.store.save(user_id, session).await?;

        if let Err(err) = self.transcript.export(user_id, &history).await {
            tracing::warn!(user_id, error = %err, "transcript export failed");
        }

        Ok(reply)
    }

    async fn lock_for(&self, user_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockReplyGenerator;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::intake::{
        AnswerType, AnswerValidator, EngineMessages, QuestionDefinition, ScriptCatalog,
        SensitiveTopicDetector,
    };
    use crate::ports::TranscriptError;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Sink that counts exports and optionally always fails.
    struct CountingSink {
        exports: AtomicUsize,
        fail: bool,
    }

    impl CountingSink {
        fn ok() -> Self {
            Self {
                exports: AtomicUsize::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                exports: AtomicUsize::new(0),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl TranscriptSink for CountingSink {
        async fn export(
            &self,
            user_id: &str,
            _history: &[crate::domain::intake::HistoryEntry],
        ) -> Result<PathBuf, TranscriptError> {
            self.exports.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(TranscriptError::Io {
                    user_id: user_id.to_string(),
                    source: std::io::Error::other("disk full"),
                })
            } else {
                Ok(PathBuf::from("/tmp/out.csv"))
            }
        }
    }

    fn handler_with_sink(sink: Arc<dyn TranscriptSink>) -> ProcessMessageHandler {
        let catalog = ScriptCatalog::new(vec![
            QuestionDefinition::mandatory("Name?", AnswerType::FreeText),
            QuestionDefinition::free_text("Anything else?"),
        ])
        .unwrap();
        let engine = ConversationEngine::new(
            Arc::new(catalog),
            AnswerValidator::default(),
            SensitiveTopicDetector::default(),
            EngineMessages::default(),
        );
        ProcessMessageHandler::new(
            Arc::new(engine),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(MockReplyGenerator::new("generated answer")),
            sink,
        )
    }

    #[tokio::test]
    async fn first_message_returns_first_question() {
        let handler = handler_with_sink(Arc::new(CountingSink::ok()));

        let reply = handler.process("user-1", "hello").await.unwrap();
        assert_eq!(reply, "Name?");
    }

    #[tokio::test]
    async fn session_survives_across_calls() {
        let handler = handler_with_sink(Arc::new(CountingSink::ok()));

        handler.process("user-1", "hello").await.unwrap();
        let reply = handler.process("user-1", "Maria").await.unwrap();
        assert_eq!(reply, "Anything else?");
    }

    #[tokio::test]
    async fn transcript_is_exported_after_each_turn() {
        let sink = Arc::new(CountingSink::ok());
        let handler = handler_with_sink(sink.clone());

        handler.process("user-1", "hello").await.unwrap();
        handler.process("user-1", "Maria").await.unwrap();

        assert_eq!(sink.exports.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn transcript_failure_does_not_fail_the_turn() {
        let handler = handler_with_sink(Arc::new(CountingSink::failing()));

        let reply = handler.process("user-1", "hello").await.unwrap();
        assert_eq!(reply, "Name?");

        // The session still advanced despite the export failure.
        let reply = handler.process("user-1", "Maria").await.unwrap();
        assert_eq!(reply, "Anything else?");
    }

    #[tokio::test]
    async fn concurrent_messages_for_one_user_are_serialized() {
        let handler = Arc::new(handler_with_sink(Arc::new(CountingSink::ok())));

        let mut tasks = Vec::new();
        for text in ["hello", "Maria", "nothing more", "bye"] {
            let handler = handler.clone();
            tasks.push(tokio::spawn(async move {
                handler.process("user-1", text).await.unwrap()
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        // Four serialized turns exhaust the two-question script, whatever
        // order the tasks ran in; the fifth turn must see the closing.
        let reply = handler.process("user-1", "and again").await.unwrap();
        assert_eq!(reply, EngineMessages::default().closing);
    }

    #[tokio::test]
    async fn users_do_not_share_sessions() {
        let handler = handler_with_sink(Arc::new(CountingSink::ok()));

        let a = handler.process("user-a", "hello").await.unwrap();
        let b = handler.process("user-b", "hello").await.unwrap();
        assert_eq!(a, "Name?");
        assert_eq!(b, "Name?");
    }
}

use std::sync::Arc;

use trivia_core::model::{ResultsSummary, SessionId};
use trivia_core::session::{AnsweredQuestion, QuizSession, SessionError};

use crate::api::QuizBackend;
use crate::error::QuizError;

/// Result of submitting the current question's answer for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub record: AnsweredQuestion,
    pub is_last: bool,
}

/// Orchestrates a quiz session against the scoring backend.
///
/// Session state is mutated only after a backend response resolves, so a
/// failed call leaves the session exactly as it was.
#[derive(Clone)]
pub struct QuizLoopService {
    backend: Arc<dyn QuizBackend>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(backend: Arc<dyn QuizBackend>) -> Self {
        Self { backend }
    }

    /// Fetch a question set and open a new session with the cursor at 0.
    ///
    /// The requested count is forwarded as-is; an invalid or zero count
    /// surfaces as an ordinary backend failure or an empty question set.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Api` when the fetch fails and
    /// `QuizError::Session` (`Empty`) when the backend returns no questions.
    pub async fn start_quiz(&self, num_questions: u32) -> Result<QuizSession, QuizError> {
        let started = self.backend.start_quiz(num_questions).await?;
        Ok(QuizSession::new(started.session_id, started.questions)?)
    }

    /// Send the current selection for scoring and lock in the verdict.
    ///
    /// Refuses locally (nothing reaches the backend) when no option is
    /// selected or the question is already answered.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` for state-machine violations and
    /// `QuizError::Api` when the scoring call fails; in the latter case the
    /// question remains answerable with the selection intact.
    pub async fn submit_current(
        &self,
        session: &mut QuizSession,
    ) -> Result<QuizAnswerResult, QuizError> {
        if session.is_finished() {
            return Err(SessionError::Finished.into());
        }
        if session.verdict().is_some() {
            return Err(SessionError::AlreadyAnswered.into());
        }
        let answer = session
            .selected_answer()
            .ok_or(SessionError::NoSelection)?
            .to_string();

        let verdict = self
            .backend
            .submit_answer(session.session_id(), session.cursor(), &answer)
            .await?;

        let record = session.record_verdict(verdict)?.clone();
        Ok(QuizAnswerResult {
            record,
            is_last: session.is_last_question(),
        })
    }

    /// Fetch the final summary for a session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Api` when the fetch fails; the caller keeps its
    /// state and may retry.
    pub async fn fetch_results(&self, session_id: &SessionId) -> Result<ResultsSummary, QuizError> {
        Ok(self.backend.fetch_results(session_id).await?)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

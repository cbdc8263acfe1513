use std::fmt;
use thiserror::Error;

use crate::model::{AnswerVerdict, Question, SessionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Violations of the quiz session state machine.
///
/// Every operation invoked from an invalid state is rejected with one of
/// these instead of relying on UI affordances to prevent misuse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question set is empty")]
    Empty,

    #[error("no option selected for the current question")]
    NoSelection,

    #[error("current question was already answered")]
    AlreadyAnswered,

    #[error("current question has not been answered yet")]
    NotAnswered,

    #[error("option index {index} is out of range")]
    OptionOutOfRange { index: usize },

    #[error("quiz is already finished")]
    Finished,
}

//
// ─── ANSWERED QUESTION ─────────────────────────────────────────────────────────
//

/// Record of one submitted answer and the backend's verdict on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub question_index: usize,
    pub answer: String,
    pub verdict: AnswerVerdict,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Stage of the question under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
enum QuestionStage {
    /// Options are selectable; nothing submitted yet.
    Answering,
    /// A verdict came back; options are locked until `advance`.
    Locked(AnswerVerdict),
}

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_finished: bool,
}

/// Result of advancing past a locked question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advanced {
    /// Cursor moved to the next question; selection reset.
    NextQuestion,
    /// That was the last question; the session is finished.
    Finished,
}

/// In-memory state machine for one quiz attempt.
///
/// Owns the session id, the immutable question list, the cursor, and the
/// pending selection, and steps through questions sequentially: select,
/// lock in a verdict, advance. Mutation happens only through these
/// operations; invalid transitions return `SessionError`.
#[derive(Clone, PartialEq, Eq)]
pub struct QuizSession {
    session_id: SessionId,
    questions: Vec<Question>,
    cursor: usize,
    selection: Option<usize>,
    stage: QuestionStage,
    answered: Vec<AnsweredQuestion>,
    finished: bool,
}

impl QuizSession {
    /// Create a session over a freshly fetched question list, cursor at 0.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(session_id: SessionId, questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            session_id,
            questions,
            cursor: 0,
            selection: None,
            stage: QuestionStage::Answering,
            answered: Vec::new(),
            finished: false,
        })
    }

    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Zero-based index of the question currently being answered.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            None
        } else {
            self.questions.get(self.cursor)
        }
    }

    /// Index of the currently highlighted option, if any.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Text of the currently highlighted option, if any.
    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        let index = self.selection?;
        self.current_question()?.option(index)
    }

    /// The verdict for the current question once it has been submitted.
    #[must_use]
    pub fn verdict(&self) -> Option<&AnswerVerdict> {
        match &self.stage {
            QuestionStage::Locked(verdict) => Some(verdict),
            QuestionStage::Answering => None,
        }
    }

    #[must_use]
    pub fn answered(&self) -> &[AnsweredQuestion] {
        &self.answered
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.cursor + 1 == self.questions.len()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.questions.len(),
            answered: self.answered.len(),
            remaining: self.questions.len().saturating_sub(self.answered.len()),
            is_finished: self.finished,
        }
    }

    /// Highlight one option of the current question.
    ///
    /// Repeated calls move the selection; the last call wins.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` after the quiz is over,
    /// `SessionError::AlreadyAnswered` once a verdict is locked in, and
    /// `SessionError::OptionOutOfRange` for an invalid index.
    pub fn select_option(&mut self, index: usize) -> Result<(), SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        if matches!(self.stage, QuestionStage::Locked(_)) {
            return Err(SessionError::AlreadyAnswered);
        }
        let options = self
            .current_question()
            .map_or(0, |question| question.options().len());
        if index >= options {
            return Err(SessionError::OptionOutOfRange { index });
        }

        self.selection = Some(index);
        Ok(())
    }

    /// Lock in the backend's verdict for the current question.
    ///
    /// The caller submits the selected answer first and records the verdict
    /// only once the response resolves, so a failed request leaves the
    /// question answerable.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSelection` when nothing is selected,
    /// `SessionError::AlreadyAnswered` for a second verdict, and
    /// `SessionError::Finished` after the quiz is over.
    pub fn record_verdict(
        &mut self,
        verdict: AnswerVerdict,
    ) -> Result<&AnsweredQuestion, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        if matches!(self.stage, QuestionStage::Locked(_)) {
            return Err(SessionError::AlreadyAnswered);
        }
        let answer = self
            .selected_answer()
            .ok_or(SessionError::NoSelection)?
            .to_string();

        self.answered.push(AnsweredQuestion {
            question_index: self.cursor,
            answer,
            verdict: verdict.clone(),
        });
        self.stage = QuestionStage::Locked(verdict);

        self.answered.last().ok_or(SessionError::NotAnswered)
    }

    /// Step past a locked question.
    ///
    /// Moves the cursor by exactly 1 and resets the selection, or finishes
    /// the session when the last question was just answered.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` while the current question has no
    /// verdict and `SessionError::Finished` after the quiz is over.
    pub fn advance(&mut self) -> Result<Advanced, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        if !matches!(self.stage, QuestionStage::Locked(_)) {
            return Err(SessionError::NotAnswered);
        }

        if self.cursor + 1 < self.questions.len() {
            self.cursor += 1;
            self.selection = None;
            self.stage = QuestionStage::Answering;
            Ok(Advanced::NextQuestion)
        } else {
            self.finished = true;
            Ok(Advanced::Finished)
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("session_id", &self.session_id)
            .field("questions_len", &self.questions.len())
            .field("cursor", &self.cursor)
            .field("selection", &self.selection)
            .field("answered_len", &self.answered.len())
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

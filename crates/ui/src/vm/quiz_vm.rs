use services::{QuizError, QuizLoopService};
use trivia_core::model::SessionId;
use trivia_core::session::{Advanced, QuizSession, SessionError};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Submit,
    Advance,
}

/// Render state of one option row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMarker {
    Idle,
    Selected,
    Correct,
    Incorrect,
    Locked,
}

impl OptionMarker {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            OptionMarker::Idle => "option",
            OptionMarker::Selected => "option option--selected",
            OptionMarker::Correct => "option option--correct",
            OptionMarker::Incorrect => "option option--incorrect",
            OptionMarker::Locked => "option option--locked",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Completed { session_id: SessionId },
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionRowVm {
    pub index: usize,
    pub text: String,
    pub marker: OptionMarker,
}

/// Everything the quiz screen needs to render the current question.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionCardVm {
    pub number: usize,
    pub total: usize,
    pub progress_percent: f64,
    pub category: String,
    pub difficulty_label: &'static str,
    pub difficulty_class: &'static str,
    pub text: String,
    pub options: Vec<OptionRowVm>,
    pub locked: bool,
    pub can_submit: bool,
    pub continue_label: &'static str,
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        self.session.session_id()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.session.verdict().is_some()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.session.selection().is_some() && !self.is_locked()
    }

    #[must_use]
    pub fn continue_label(&self) -> &'static str {
        if self.session.is_last_question() {
            "View Results"
        } else {
            "Next Question"
        }
    }

    #[must_use]
    pub fn option_marker(&self, index: usize) -> OptionMarker {
        match self.session.verdict() {
            Some(verdict) => {
                let text = self
                    .session
                    .current_question()
                    .and_then(|question| question.option(index));
                if text == Some(verdict.correct_answer.as_str()) {
                    OptionMarker::Correct
                } else if !verdict.is_correct && self.session.selection() == Some(index) {
                    OptionMarker::Incorrect
                } else {
                    OptionMarker::Locked
                }
            }
            None => {
                if self.session.selection() == Some(index) {
                    OptionMarker::Selected
                } else {
                    OptionMarker::Idle
                }
            }
        }
    }

    /// View of the current question, `None` once the quiz is finished (or
    /// while the session is checked out for an in-flight submit).
    #[must_use]
    pub fn card(&self) -> Option<QuestionCardVm> {
        let question = self.session.current_question()?;
        let number = self.session.cursor() + 1;
        let total = self.session.total_questions();
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| OptionRowVm {
                index,
                text: text.clone(),
                marker: self.option_marker(index),
            })
            .collect();

        Some(QuestionCardVm {
            number,
            total,
            progress_percent: number as f64 / total as f64 * 100.0,
            category: question.category().to_string(),
            difficulty_label: question.difficulty().label(),
            difficulty_class: question.difficulty().css_class(),
            text: question.text().to_string(),
            options,
            locked: self.is_locked(),
            can_submit: self.can_submit(),
            continue_label: self.continue_label(),
        })
    }

    /// Move the selection. Invalid clicks (locked question, bad index) are
    /// ignored; the state machine already rejected them.
    pub fn select_option(&mut self, index: usize) {
        let _ = self.session.select_option(index);
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for backend or state failures; the
    /// session is untouched on failure and the question stays answerable.
    pub async fn submit_current(&mut self, quiz_loop: &QuizLoopService) -> Result<(), ViewError> {
        quiz_loop
            .submit_current(&mut self.session)
            .await
            .map(|_| ())
            .map_err(|_| ViewError::Unknown)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the current question has no verdict
    /// yet.
    pub fn advance(&mut self) -> Result<QuizOutcome, ViewError> {
        match self.session.advance() {
            Ok(Advanced::NextQuestion) => Ok(QuizOutcome::Continue),
            Ok(Advanced::Finished) => Ok(QuizOutcome::Completed {
                session_id: self.session.session_id().clone(),
            }),
            Err(_) => Err(ViewError::Unknown),
        }
    }
}

/// # Errors
///
/// Returns `ViewError::EmptyQuiz` when the backend returns no questions and
/// `ViewError::Unknown` for other failures.
pub async fn start_quiz(
    quiz_loop: &QuizLoopService,
    num_questions: u32,
) -> Result<QuizVm, ViewError> {
    let session = match quiz_loop.start_quiz(num_questions).await {
        Ok(session) => session,
        Err(QuizError::Session(SessionError::Empty)) => return Err(ViewError::EmptyQuiz),
        Err(_) => return Err(ViewError::Unknown),
    };

    Ok(QuizVm::new(session))
}

use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use trivia_core::model::{AnswerReview, AnswerVerdict, Difficulty, Question, ResultsSummary, SessionId};
use trivia_core::text::decode_owned;

use crate::error::ApiError;

//
// ─── BACKEND SEAM ──────────────────────────────────────────────────────────────
//

/// A freshly started quiz: the backend-issued session id and its questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartedQuiz {
    pub session_id: SessionId,
    pub questions: Vec<Question>,
}

/// The scoring backend as seen by the quiz loop.
///
/// The production implementation is `TriviaApiClient`; tests substitute
/// in-memory fakes behind this trait.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    /// Fetch a question set of the requested size and open a session.
    async fn start_quiz(&self, num_questions: u32) -> Result<StartedQuiz, ApiError>;

    /// Score one answer. `question_index` is zero-based.
    async fn submit_answer(
        &self,
        session_id: &SessionId,
        question_index: usize,
        answer: &str,
    ) -> Result<AnswerVerdict, ApiError>;

    /// Fetch the final summary for a session.
    async fn fetch_results(&self, session_id: &SessionId) -> Result<ResultsSummary, ApiError>;
}

//
// ─── HTTP CLIENT ───────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug)]
pub struct TriviaApiConfig {
    pub base_url: String,
}

impl TriviaApiConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("TRIVIA_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".into());
        Self { base_url }
    }
}

/// HTTP implementation of `QuizBackend`.
///
/// All inbound text fields are entity-decoded here, at the boundary, so the
/// rest of the client only ever sees decoded text.
#[derive(Clone)]
pub struct TriviaApiClient {
    client: Client,
    base_url: String,
}

impl TriviaApiClient {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(TriviaApiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: TriviaApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl QuizBackend for TriviaApiClient {
    async fn start_quiz(&self, num_questions: u32) -> Result<StartedQuiz, ApiError> {
        tracing::debug!(num_questions, "requesting question set");
        let response = self
            .client
            .post(self.url("/api/start-quiz"))
            .json(&StartQuizRequest { num_questions })
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "start-quiz rejected");
            return Err(ApiError::HttpStatus(response.status()));
        }

        let body: StartQuizResponse = response.json().await?;
        Ok(body.into_started_quiz())
    }

    async fn submit_answer(
        &self,
        session_id: &SessionId,
        question_index: usize,
        answer: &str,
    ) -> Result<AnswerVerdict, ApiError> {
        tracing::debug!(session = %session_id, question_index, "submitting answer");
        let response = self
            .client
            .post(self.url("/api/submit-answer"))
            .json(&SubmitAnswerRequest {
                session_id: session_id.as_str(),
                question_id: question_index,
                answer,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "submit-answer rejected");
            return Err(ApiError::HttpStatus(response.status()));
        }

        let body: SubmitAnswerResponse = response.json().await?;
        Ok(body.into_verdict())
    }

    async fn fetch_results(&self, session_id: &SessionId) -> Result<ResultsSummary, ApiError> {
        tracing::debug!(session = %session_id, "fetching results");
        let response = self
            .client
            .get(self.url(&format!("/api/results/{session_id}")))
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "results fetch rejected");
            return Err(ApiError::HttpStatus(response.status()));
        }

        let body: ResultsResponse = response.json().await?;
        Ok(body.into_summary())
    }
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct StartQuizRequest {
    num_questions: u32,
}

#[derive(Debug, Deserialize)]
struct StartQuizResponse {
    session_id: String,
    questions: Vec<QuestionPayload>,
}

impl StartQuizResponse {
    fn into_started_quiz(self) -> StartedQuiz {
        StartedQuiz {
            session_id: SessionId::new(self.session_id),
            questions: self
                .questions
                .into_iter()
                .map(QuestionPayload::into_question)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct QuestionPayload {
    category: String,
    difficulty: Difficulty,
    question: String,
    options: Vec<String>,
}

impl QuestionPayload {
    fn into_question(self) -> Question {
        Question::new(
            decode_owned(&self.category),
            self.difficulty,
            decode_owned(&self.question),
            self.options.iter().map(|option| decode_owned(option)).collect(),
        )
    }
}

#[derive(Debug, Serialize)]
struct SubmitAnswerRequest<'a> {
    session_id: &'a str,
    question_id: usize,
    answer: &'a str,
}

#[derive(Debug, Deserialize)]
struct SubmitAnswerResponse {
    is_correct: bool,
    correct_answer: String,
}

impl SubmitAnswerResponse {
    fn into_verdict(self) -> AnswerVerdict {
        AnswerVerdict {
            is_correct: self.is_correct,
            correct_answer: decode_owned(&self.correct_answer),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ResultsResponse {
    score: u32,
    total: u32,
    percentage: f64,
    answers: Vec<AnswerPayload>,
}

impl ResultsResponse {
    fn into_summary(self) -> ResultsSummary {
        ResultsSummary {
            score: self.score,
            total: self.total,
            percentage: self.percentage,
            answers: self
                .answers
                .into_iter()
                .map(AnswerPayload::into_review)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnswerPayload {
    question_number: u32,
    question: String,
    user_answer: String,
    correct_answer: String,
    is_correct: bool,
}

impl AnswerPayload {
    fn into_review(self) -> AnswerReview {
        AnswerReview {
            question_number: self.question_number,
            question: decode_owned(&self.question),
            user_answer: decode_owned(&self.user_answer),
            correct_answer: decode_owned(&self.correct_answer),
            is_correct: self.is_correct,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#![forbid(unsafe_code)]

pub mod model;
pub mod session;
pub mod text;

pub use model::{
    AnswerReview, AnswerVerdict, Difficulty, Question, ResultsSummary, ScoreBand, SessionId,
};
pub use session::{Advanced, AnsweredQuestion, QuizProgress, QuizSession, SessionError};
pub use text::decode_entities;

mod ids;
mod question;
mod results;

pub use ids::SessionId;
pub use question::{Difficulty, Question};
pub use results::{AnswerReview, AnswerVerdict, ResultsSummary, ScoreBand};
